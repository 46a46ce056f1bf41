pub(crate) use rgb::RGBA;

/// A named color scale given by its stops.
pub(crate) struct SchemeData {
    pub(crate) name: &'static str,
    pub(crate) stops: Vec<Stop>, // Invariant: length ≥ 2, indices increasing from 0 to 1
}

/// A color pinned at position `index` ∈ \[0, 1\] of the scale.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Stop {
    pub(crate) index: f64,
    pub(crate) rgb: RGBA<f64>,
}
