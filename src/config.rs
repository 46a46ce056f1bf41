//! Configuration of an [`AreaColorMapper`](crate::AreaColorMapper).

use crate::mapper::{check_gamma, check_measure, check_range};
use crate::{build_ramp, AreaColorMapper, AreaMeasure, ConfigurationError,
            RGBColor};

/// Configuration of an [`AreaColorMapper`].
///
/// The default is a 50 colors `"blackbody"` ramp over areas from 10⁸
/// to 2·10¹³ m² measured on the sphere, with `gamma = 0.5`.
///
/// # Example
///
/// ```
/// use rgb::RGB8;
/// use area_colormap::{AreaMeasure, MapperConfig};
/// let mapper = MapperConfig::default()
///     .scheme("viridis")
///     .steps(10)
///     .area_range(0., 100.)
///     .gamma(1.)
///     .measure(AreaMeasure::Planar)
///     .build::<RGB8>()
///     .unwrap();
/// assert_eq!(mapper.index_for_area(50.), 5);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct MapperConfig {
    pub scheme: String,
    pub steps: usize,
    pub min_area: f64,
    pub max_area: f64,
    /// The normalized area is raised to the power `1 / gamma`.
    pub gamma: f64,
    pub measure: AreaMeasure,
}

impl Default for MapperConfig {
    fn default() -> Self {
        MapperConfig {
            scheme: "blackbody".to_string(),
            steps: 50,
            min_area: 1e8,
            max_area: 2e13,
            gamma: 0.5,
            measure: AreaMeasure::default(),
        }
    }
}

impl MapperConfig {
    /// Name of the color scheme of the ramp.
    pub fn scheme(mut self, name: impl Into<String>) -> Self {
        self.scheme = name.into();
        self
    }

    /// Number of colors of the ramp.
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    pub fn area_range(mut self, min_area: f64, max_area: f64) -> Self {
        self.min_area = min_area;
        self.max_area = max_area;
        self
    }

    pub fn gamma(mut self, gamma: f64) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn measure(mut self, measure: AreaMeasure) -> Self {
        self.measure = measure;
        self
    }

    /// Check the configuration without building the ramp.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.steps == 0 {
            return Err(ConfigurationError::InvalidSteps { steps: 0 })
        }
        check_range(self.min_area, self.max_area)?;
        check_gamma(self.gamma)?;
        check_measure(self.measure)
    }

    /// Build the ramp and return the mapper.
    pub fn build<Color>(&self)
                        -> Result<AreaColorMapper<Color>, ConfigurationError>
    where Color: RGBColor {
        self.validate()?;
        let ramp = build_ramp(&self.scheme, self.steps)?;
        AreaColorMapper::new(ramp, self.min_area, self.max_area, self.gamma,
                             self.measure)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    #[test]
    fn default_is_observed_configuration() {
        let m = MapperConfig::default().build::<RGB8>().unwrap();
        assert_eq!(m.ramp().len(), 50);
        assert_eq!(m.ramp().scheme(), "blackbody");
        assert_eq!(m.area_range(), (1e8, 2e13));
        assert_eq!(m.gamma(), 0.5);
    }

    #[test]
    fn validation() {
        let c = MapperConfig::default();
        assert_eq!(c.clone().steps(0).validate(),
                   Err(ConfigurationError::InvalidSteps { steps: 0 }));
        assert!(c.clone().area_range(5., 5.).validate().is_err());
        assert!(c.clone().gamma(f64::INFINITY).validate().is_err());
        assert_eq!(c.clone().scheme("plaid").build::<RGB8>().err(),
                   Some(ConfigurationError::UnknownScheme {
                       name: "plaid".to_string() }));
        assert!(c.validate().is_ok());
    }
}
