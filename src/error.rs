use crate::source::FeatureId;

/// Errors raised while setting up a ramp or a mapper.
///
/// They are meant to be surfaced at startup: nothing is colored before
/// the ramp is built.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("unknown color scheme “{name}”")]
    UnknownScheme { name: String },

    #[error("a ramp needs at least one step, got {steps}")]
    InvalidSteps { steps: usize },

    #[error("invalid area range: min {min} must be finite and below max {max}")]
    InvalidAreaRange { min: f64, max: f64 },

    #[error("invalid gamma {gamma}: must be finite and positive")]
    InvalidGamma { gamma: f64 },

    #[error("invalid sphere radius {radius}: must be finite and positive")]
    InvalidRadius { radius: f64 },
}

/// Errors of the [`FeatureSource`](crate::source::FeatureSource).
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("cannot parse GeoJSON: {0}")]
    Parse(#[source] geojson::Error),

    #[error("cannot serialize features: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("no feature with id {0}")]
    UnknownFeature(FeatureId),
}
