//! Discrete color ramps.

use std::ops::Index;
use tracing::debug;
use crate::{ColorRange, ConfigurationError, RGBColor, Scheme};

/// An ordered, fixed-size sequence of colors approximating the
/// gradient of a [`Scheme`].
///
/// A ramp is never empty and is not modified once built.
#[derive(Clone, Debug, PartialEq)]
pub struct ColorRamp<Color> {
    scheme: &'static str,
    colors: Vec<Color>, // Invariant: non-empty
}

/// Build a ramp of `steps` colors from the scheme named `scheme_name`.
///
/// The colors sample the scheme uniformly, the first one being the
/// first stop of the scheme and the last one its last stop.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use area_colormap::build_ramp;
/// let ramp = build_ramp::<RGB8>("blackbody", 50).unwrap();
/// assert_eq!(ramp.len(), 50);
/// assert_eq!(ramp[0], RGB8::new(0, 0, 0));
/// ```
pub fn build_ramp<Color>(scheme_name: &str, steps: usize)
                         -> Result<ColorRamp<Color>, ConfigurationError>
where Color: RGBColor {
    let scheme = Scheme::<Color>::named(scheme_name)?;
    if steps == 0 {
        return Err(ConfigurationError::InvalidSteps { steps })
    }
    let colors: Vec<Color> = scheme.gradient().range(0., 1., steps)
        .map(|(_, c)| c)
        .collect();
    debug!(scheme = scheme.name(), steps, "built color ramp");
    Ok(ColorRamp { scheme: scheme.name(), colors })
}

impl<Color: RGBColor> ColorRamp<Color> {
    /// Build a ramp from explicit colors.  Returns `None` if `colors`
    /// is empty.
    pub fn from_colors(colors: Vec<Color>) -> Option<Self> {
        if colors.is_empty() { return None }
        Some(ColorRamp { scheme: "custom", colors })
    }

    /// Name of the scheme the ramp was sampled from (`"custom"` for
    /// ramps built with [`ColorRamp::from_colors`]).
    pub fn scheme(&self) -> &'static str { self.scheme }

    /// Returns the number of colors of the ramp (at least 1).
    pub fn len(&self) -> usize { self.colors.len() }

    /// Always `false`; provided for symmetry with [`ColorRamp::len`].
    pub fn is_empty(&self) -> bool { false }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn first(&self) -> Color { self.colors[0] }

    pub fn last(&self) -> Color { self.colors[self.colors.len() - 1] }

    /// Returns the colors of the ramp.
    pub fn colors(&self) -> &[Color] { &self.colors }

    pub fn iter(&self) -> std::slice::Iter<'_, Color> { self.colors.iter() }
}

impl<Color> Index<usize> for ColorRamp<Color> {
    type Output = Color;

    fn index(&self, index: usize) -> &Color { &self.colors[index] }
}

impl<'a, Color> IntoIterator for &'a ColorRamp<Color> {
    type Item = &'a Color;
    type IntoIter = std::slice::Iter<'a, Color>;

    fn into_iter(self) -> Self::IntoIter { self.colors.iter() }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::{RGB8, RGBA8};
    use crate::scheme_names;

    #[test]
    fn blackbody_ends() {
        let ramp = build_ramp::<RGB8>("blackbody", 50).unwrap();
        assert_eq!(ramp.len(), 50);
        assert_eq!(ramp.scheme(), "blackbody");
        assert_eq!(ramp.first(), RGB8::new(0, 0, 0));
        assert_eq!(ramp.last(), RGB8::new(160, 200, 255));
    }

    #[test]
    fn every_scheme_builds() {
        for name in scheme_names() {
            let stops = Scheme::<RGBA8>::named(name).unwrap().stops();
            for steps in [1, 2, 50, 256] {
                let ramp = build_ramp::<RGBA8>(name, steps).unwrap();
                assert_eq!(ramp.len(), steps);
                assert_eq!(ramp.first(), stops[0].1, "{name}/{steps}");
                if steps > 1 {
                    assert_eq!(ramp.last(), stops[stops.len() - 1].1,
                               "{name}/{steps}");
                }
            }
        }
    }

    #[test]
    fn colormap_scales() {
        assert_eq!(scheme_names().count(), 43);
        assert!(scheme_names().all(|name| name != "alpha"));
        let greens = build_ramp::<RGB8>("greens", 9).unwrap();
        assert_eq!(greens.first(), RGB8::new(0, 68, 27));
        assert_eq!(greens[4], RGB8::new(116, 196, 118));
        assert_eq!(greens.last(), RGB8::new(247, 252, 245));
        let cubehelix = build_ramp::<RGB8>("cubehelix", 2).unwrap();
        assert_eq!(cubehelix.colors(),
                   &[RGB8::new(0, 0, 0), RGB8::new(227, 253, 198)]);
        let soft = build_ramp::<RGB8>("Rainbow-Soft", 11).unwrap();
        assert_eq!(soft.scheme(), "rainbow-soft");
        assert_eq!(soft[5], RGB8::new(150, 255, 0));
        assert_eq!(build_ramp::<RGB8>("YIGnBu", 3).unwrap().last(),
                   RGB8::new(255, 255, 217));
        assert_eq!(build_ramp::<RGB8>("velocity-blue", 2).unwrap().first(),
                   RGB8::new(17, 32, 64));
        assert_eq!(build_ramp::<RGB8>("rdbu", 2).unwrap().scheme(), "rdbu");
        assert_eq!(build_ramp::<RGB8>("RdBu", 2).unwrap().first(),
                   RGB8::new(5, 10, 172));
    }

    #[test]
    fn rejects_bad_configuration() {
        assert_eq!(build_ramp::<RGB8>("nope", 50),
                   Err(ConfigurationError::UnknownScheme {
                       name: "nope".to_string() }));
        assert_eq!(build_ramp::<RGB8>("blackbody", 0),
                   Err(ConfigurationError::InvalidSteps { steps: 0 }));
    }

    #[test]
    fn custom_ramp() {
        assert!(ColorRamp::<RGB8>::from_colors(vec![]).is_none());
        let ramp = ColorRamp::from_colors(vec![RGB8::new(1, 2, 3)]).unwrap();
        assert_eq!(ramp.get(0), Some(RGB8::new(1, 2, 3)));
        assert_eq!(ramp.get(1), None);
    }
}
