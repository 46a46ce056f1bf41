//! Mapping of areas to ramp colors.

use geo::Geometry;
use tracing::debug;
use crate::{AreaMeasure, ColorRamp, ColorRange, ConfigurationError, Feature,
            MapperConfig, RGBColor, Range};

/// Returns the index in a ramp of `steps` colors of the color for
/// `area`.
///
/// The area is normalized over \[`min_area`, `max_area`\], clamped to
/// \[0, 1\] (NaN counts as 0), raised to the power `1 / gamma` and
/// scaled to the ramp.  The result is always `< steps` (or `0` if
/// `steps == 0`).
///
/// ```
/// use area_colormap::ramp_index;
/// let quarter = 1e8 + (2e13 - 1e8) * 0.25;
/// assert_eq!(ramp_index(quarter, 50, 1e8, 2e13, 0.5), 3);
/// ```
pub fn ramp_index(area: f64, steps: usize, min_area: f64, max_area: f64,
                  gamma: f64) -> usize {
    eased_index((area - min_area) / (max_area - min_area), steps, gamma)
}

fn eased_index(t: f64, steps: usize, gamma: f64) -> usize {
    if steps == 0 { return 0 }
    let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };
    let f = t.powf(gamma.recip());
    // `as` saturates, NaN giving 0.
    let index = (f * (steps - 1) as f64).round() as usize;
    index.min(steps - 1)
}

/// Returns the color of `ramp` for `area`.  See [`ramp_index`].
pub fn color_for_area<Color>(area: f64, ramp: &ColorRamp<Color>,
                             min_area: f64, max_area: f64, gamma: f64) -> Color
where Color: RGBColor {
    ramp[ramp_index(area, ramp.len(), min_area, max_area, gamma)]
}

/// Colors geometries according to their area.
///
/// Built from a [`MapperConfig`] (or [`AreaColorMapper::new`]), it holds
/// its ramp, area range and curve exponent; it has no other state.
#[derive(Clone, Debug)]
pub struct AreaColorMapper<Color> {
    ramp: ColorRamp<Color>,
    min_area: f64,
    max_area: f64,
    gamma: f64,
    measure: AreaMeasure,
}

pub(crate) fn check_range(min_area: f64, max_area: f64)
                          -> Result<(), ConfigurationError> {
    if min_area.is_finite() && max_area.is_finite() && min_area < max_area {
        Ok(())
    } else {
        Err(ConfigurationError::InvalidAreaRange { min: min_area,
                                                   max: max_area })
    }
}

pub(crate) fn check_gamma(gamma: f64) -> Result<(), ConfigurationError> {
    if gamma.is_finite() && gamma > 0. { Ok(()) }
    else { Err(ConfigurationError::InvalidGamma { gamma }) }
}

pub(crate) fn check_measure(measure: AreaMeasure)
                            -> Result<(), ConfigurationError> {
    match measure {
        AreaMeasure::Spherical { radius }
        if !(radius.is_finite() && radius > 0.) =>
            Err(ConfigurationError::InvalidRadius { radius }),
        _ => Ok(()),
    }
}

impl<Color: RGBColor> AreaColorMapper<Color> {
    /// Create a mapper from an already built ramp.
    pub fn new(ramp: ColorRamp<Color>, min_area: f64, max_area: f64,
               gamma: f64, measure: AreaMeasure)
               -> Result<Self, ConfigurationError> {
        check_range(min_area, max_area)?;
        check_gamma(gamma)?;
        check_measure(measure)?;
        debug!(scheme = ramp.scheme(), steps = ramp.len(), min_area, max_area,
               gamma, ?measure, "area color mapper ready");
        Ok(AreaColorMapper { ramp, min_area, max_area, gamma, measure })
    }

    /// Create a mapper from `config`.  Same as [`MapperConfig::build`].
    pub fn from_config(config: &MapperConfig)
                       -> Result<Self, ConfigurationError> {
        config.build()
    }

    pub fn ramp(&self) -> &ColorRamp<Color> { &self.ramp }

    /// The area range `(min, max)` normalized to \[0, 1\].
    pub fn area_range(&self) -> (f64, f64) { (self.min_area, self.max_area) }

    pub fn gamma(&self) -> f64 { self.gamma }

    pub fn measure(&self) -> AreaMeasure { self.measure }

    /// Index in the ramp of the color for `area`.
    #[inline]
    pub fn index_for_area(&self, area: f64) -> usize {
        ramp_index(area, self.ramp.len(), self.min_area, self.max_area,
                   self.gamma)
    }

    /// Returns the color for `area`.  Areas below the range get the
    /// first color of the ramp, those above it the last one.
    #[inline]
    pub fn color_for_area(&self, area: f64) -> Color {
        self.ramp[self.index_for_area(area)]
    }

    /// Area of `geometry` (in map coordinates) as this mapper measures it.
    pub fn area_of(&self, geometry: &Geometry<f64>) -> f64 {
        self.measure.measure(geometry)
    }

    pub fn color_for_geometry(&self, geometry: &Geometry<f64>) -> Color {
        self.color_for_area(self.area_of(geometry))
    }

    /// Returns the color for the area of the feature's geometry.
    pub fn color_for_feature(&self, feature: &Feature) -> Color {
        self.color_for_geometry(feature.geometry())
    }

    /// `n` areas evenly spaced over the area range together with their
    /// color, e.g. to draw a legend.
    pub fn legend(&self, n: usize) -> Range<&Self, Color> {
        self.range(self.min_area, self.max_area, n)
    }
}

/// Colors as a function of the normalized area.
impl<Color: RGBColor> ColorRange<Color> for &AreaColorMapper<Color> {
    fn rgb(&self, t: f64) -> Color {
        self.ramp[eased_index(t, self.ramp.len(), self.gamma)]
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, Geometry};
    use rgb::RGB8;
    use crate::build_ramp;

    fn mapper(gamma: f64) -> AreaColorMapper<RGB8> {
        let ramp = build_ramp("blackbody", 50).unwrap();
        AreaColorMapper::new(ramp, 1e8, 2e13, gamma, AreaMeasure::Planar)
            .unwrap()
    }

    #[test]
    fn index_examples() {
        let m = mapper(0.5);
        let at = |p: f64| 1e8 + (2e13 - 1e8) * p;
        assert_eq!(m.index_for_area(1e8), 0);
        assert_eq!(m.index_for_area(2e13), 49);
        assert_eq!(m.index_for_area(at(0.25)), 3);
        assert_eq!(m.index_for_area(at(0.5)), 12);
    }

    #[test]
    fn square_root_easing() {
        let m = mapper(2.);
        let at = |p: f64| 1e8 + (2e13 - 1e8) * p;
        assert_eq!(m.index_for_area(at(0.25)), 25); // round(0.5 * 49)
        assert_eq!(m.index_for_area(at(0.5)), 35);
    }

    #[test]
    fn clamping() {
        let m = mapper(0.5);
        assert_eq!(m.color_for_area(0.), m.ramp().first());
        assert_eq!(m.color_for_area(-1e20), m.ramp().first());
        assert_eq!(m.color_for_area(1e30), m.ramp().last());
        assert_eq!(m.color_for_area(f64::INFINITY), m.ramp().last());
        assert_eq!(m.index_for_area(f64::NAN), 0);
    }

    #[test]
    fn free_function_agrees() {
        let m = mapper(0.5);
        for area in [0., 1e9, 3e12, 1.5e13, 9e13] {
            assert_eq!(color_for_area(area, m.ramp(), 1e8, 2e13, 0.5),
                       m.color_for_area(area));
        }
    }

    #[test]
    fn unvalidated_parameters_stay_in_ramp() {
        for gamma in [0., -1., f64::NAN, f64::INFINITY] {
            for area in [0., 5e12, 1e14] {
                assert!(ramp_index(area, 50, 1e8, 2e13, gamma) < 50);
            }
        }
        assert!(ramp_index(5., 50, 10., 10., 0.5) < 50);
        assert_eq!(ramp_index(5., 0, 0., 10., 0.5), 0);
    }

    #[test]
    fn rejects_bad_parameters() {
        let ramp = build_ramp::<RGB8>("blackbody", 50).unwrap();
        let new = |min, max, gamma, measure| {
            AreaColorMapper::new(ramp.clone(), min, max, gamma, measure).err()
        };
        assert_eq!(new(2e13, 1e8, 0.5, AreaMeasure::Planar),
                   Some(ConfigurationError::InvalidAreaRange { min: 2e13,
                                                               max: 1e8 }));
        assert!(matches!(new(f64::NAN, 1e8, 0.5, AreaMeasure::Planar),
                         Some(ConfigurationError::InvalidAreaRange { .. })));
        assert_eq!(new(1e8, 2e13, 0., AreaMeasure::Planar),
                   Some(ConfigurationError::InvalidGamma { gamma: 0. }));
        assert_eq!(new(1e8, 2e13, 0.5,
                       AreaMeasure::Spherical { radius: -1. }),
                   Some(ConfigurationError::InvalidRadius { radius: -1. }));
    }

    #[test]
    fn geometry_color() {
        let m = mapper(0.5);
        // 1000 km × 1000 km = 1e12 map units².
        let g = Geometry::Polygon(polygon![
            (x: 0., y: 0.), (x: 1e6, y: 0.), (x: 1e6, y: 1e6), (x: 0., y: 1e6)]);
        assert_eq!(m.area_of(&g), 1e12);
        assert_eq!(m.color_for_geometry(&g), m.color_for_area(1e12));
    }

    #[test]
    fn legend_spans_range() {
        let m = mapper(0.5);
        let legend: Vec<_> = m.legend(5).collect();
        assert_eq!(legend.len(), 5);
        assert_eq!(legend[0], (1e8, m.ramp().first()));
        assert_eq!(legend[4], (2e13, m.ramp().last()));
        for (area, color) in &legend[1..4] {
            assert_eq!(*color, m.color_for_area(*area));
        }
    }
}
