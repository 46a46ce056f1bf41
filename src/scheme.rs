//! Named color scales.

use std::marker::PhantomData;
use rgb::RGBA;
use crate::schemes::{self, ty::SchemeData};
use crate::{ColorRange, ConfigurationError, RGBColor};

/// A built-in color scale such as `"blackbody"` or `"viridis"`.
#[derive(Clone, Copy)]
pub struct Scheme<Color> {
    scheme: &'static SchemeData,
    color: PhantomData<Color>,
}

/// Return the names of all built-in schemes, in alphabetical order.
pub fn names() -> impl Iterator<Item = &'static str> {
    schemes::ALL_SCHEMES.iter().map(|s| s.name)
}

impl<Color: RGBColor> Scheme<Color> {
    /// Look a scheme up by name (ASCII case-insensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use area_colormap::Scheme;
    /// let blackbody = Scheme::<RGB8>::named("blackbody").unwrap();
    /// assert_eq!(blackbody.len(), 5);
    /// assert!(Scheme::<RGB8>::named("no-such-scheme").is_err());
    /// ```
    pub fn named(name: &str) -> Result<Self, ConfigurationError> {
        schemes::ALL_SCHEMES.iter()
            .find(|s| s.name.eq_ignore_ascii_case(name))
            .map(|&scheme| Scheme { scheme, color: PhantomData })
            .ok_or_else(|| ConfigurationError::UnknownScheme {
                name: name.to_string() })
    }

    /// The canonical (lowercase) name of the scheme.
    pub fn name(&self) -> &'static str { self.scheme.name }

    /// Returns the number of stops of the scheme (at least 2).
    pub fn len(&self) -> usize { self.scheme.stops.len() }

    /// Returns the stops of the scheme: their position in \[0, 1\]
    /// together with their color.
    pub fn stops(&self) -> Vec<(f64, Color)> {
        self.scheme.stops.iter()
            .map(|s| (s.index, Color::from_rgba(s.rgb)))
            .collect()
    }

    /// Returns the piecewise linear gradient through the stops.
    pub fn gradient(&self) -> SchemeGradient<Color> {
        SchemeGradient { scheme: self.scheme, color: PhantomData }
    }
}

/// Gradient interpolating linearly, in RGB, between the stops of a
/// [`Scheme`].  See the [`ColorRange`] trait for methods.
#[derive(Clone, Copy)]
pub struct SchemeGradient<Color> {
    scheme: &'static SchemeData,
    color: PhantomData<Color>,
}

fn lerp(c0: RGBA<f64>, c1: RGBA<f64>, u: f64) -> RGBA<f64> {
    RGBA { r: c0.r + u * (c1.r - c0.r),
           g: c0.g + u * (c1.g - c0.g),
           b: c0.b + u * (c1.b - c0.b),
           a: c0.a + u * (c1.a - c0.a) }
}

impl<Color> ColorRange<Color> for SchemeGradient<Color>
where Color: RGBColor {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].  Values
    /// outside are clamped and NaN is taken as `0.`.
    fn rgb(&self, t: f64) -> Color {
        let stops = &self.scheme.stops;
        let t = if t.is_nan() { 0. } else { t.clamp(0., 1.) };
        // First stop at or after `t`.
        let k = stops.iter().position(|s| s.index >= t)
            .unwrap_or(stops.len() - 1);
        if k == 0 {
            return Color::from_rgba(stops[0].rgb)
        }
        let (s0, s1) = (&stops[k - 1], &stops[k]);
        let width = s1.index - s0.index;
        let u = if width > 0. { ((t - s0.index) / width).min(1.) } else { 1. };
        Color::from_rgba(lerp(s0.rgb, s1.rgb, u))
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rgb::RGB8;

    #[test]
    fn lookup_is_case_insensitive() {
        let s = Scheme::<RGB8>::named("BlackBody").unwrap();
        assert_eq!(s.name(), "blackbody");
    }

    #[test]
    fn unknown_scheme() {
        assert_eq!(Scheme::<RGB8>::named("blackbodyy").err(),
                   Some(ConfigurationError::UnknownScheme {
                       name: "blackbodyy".to_string() }));
    }

    #[test]
    fn stops_are_well_formed() {
        for name in names() {
            let s = Scheme::<RGBA<f64>>::named(name).unwrap();
            let stops = s.stops();
            assert!(stops.len() >= 2, "{name}");
            assert_eq!(stops[0].0, 0., "{name}");
            assert_eq!(stops[stops.len() - 1].0, 1., "{name}");
            assert!(stops.windows(2).all(|w| w[0].0 < w[1].0), "{name}");
        }
    }

    #[test]
    fn gradient_hits_stops() {
        let g = Scheme::<RGB8>::named("blackbody").unwrap().gradient();
        assert_eq!(g.rgb(0.), RGB8::new(0, 0, 0));
        assert_eq!(g.rgb(0.2), RGB8::new(230, 0, 0));
        assert_eq!(g.rgb(0.7), RGB8::new(255, 255, 255));
        assert_eq!(g.rgb(1.), RGB8::new(160, 200, 255));
        assert_eq!(g.rgb(0.1), RGB8::new(115, 0, 0));
    }

    #[test]
    fn gradient_clamps() {
        let g = Scheme::<RGB8>::named("greys").unwrap().gradient();
        assert_eq!(g.rgb(-3.), RGB8::new(0, 0, 0));
        assert_eq!(g.rgb(7.), RGB8::new(255, 255, 255));
        assert_eq!(g.rgb(f64::NAN), RGB8::new(0, 0, 0));
    }
}
