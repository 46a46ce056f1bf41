//! Color polygon features by their area.
//!
//! A [`ColorRamp`] of discrete colors is sampled once from a named
//! [`Scheme`] (e.g. `"blackbody"`).  An [`AreaColorMapper`] then maps
//! the area of a geometry onto that ramp: the area is normalized to
//! \[0, 1\] over a configured range, clamped, eased by a power curve
//! and rounded to a ramp index.
//!
//! ```
//! use rgb::RGB8;
//! use area_colormap::{MapperConfig, RGBColor};
//! let mapper = MapperConfig::default().build::<RGB8>().unwrap();
//! assert_eq!(mapper.color_for_area(0.).to_css(), "#000000");
//! ```
//!
//! Around the mapper, the crate provides what a small map editor needs:
//! a [`FeatureSource`] (draw, modify, snap, clear, GeoJSON import and
//! export with change listeners), [`area`] measurement in Web-Mercator
//! coordinates and an [`AreaStyle`] giving the fill and stroke of each
//! feature.

use std::marker::PhantomData;
use rgb::{RGBA, RGB8, RGB16, RGBA8, RGBA16};

mod schemes;
mod scheme;
mod ramp;
mod mapper;
mod config;
mod error;
mod style;
pub mod area;
pub mod source;

pub use scheme::{names as scheme_names, Scheme, SchemeGradient};
pub use ramp::{build_ramp, ColorRamp};
pub use mapper::{color_for_area, ramp_index, AreaColorMapper};
pub use config::MapperConfig;
pub use error::{ConfigurationError, SourceError};
pub use style::{AreaStyle, FeatureStyle, DEFAULT_STROKE};
pub use area::AreaMeasure;
pub use source::{Feature, FeatureId, FeatureSource};

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Return an iterator yielding uniform sampling of `n` points
    /// between `a` and `b` (with the bounds `a` and `b` included in
    /// the list of points) together with colors.  It is not required
    /// that `a <= b`.
    fn range(self, mut a: f64, mut b: f64, n: usize) -> Range<Self, Color>
    where Self: Sized {
        if a == f64::INFINITY { a = f64::MAX; }
        else if a == f64::NEG_INFINITY { a = f64::MIN };
        if b == f64::NEG_INFINITY { b = f64::MIN; }
        else if b == f64::INFINITY { b = f64::MAX };
        if n == 0 {
            Range { range: self,  color: PhantomData,
                    a, b, flast: 0., last: 0,
                    i: 1, j: 0 } // Empty iterator
        } else {
            Range { range: self,  color: PhantomData,
                    a, b, flast: (n - 1) as f64,
                    last: n - 1, i: 0, j: n - 1 }
        }
    }
}

/// An iterator yielding `f64` in a given range together with colors.
///
/// Created by [`ColorRange::range`].  A ramp is such a range over
/// \[0, 1\] and a legend one over the area bounds.
pub struct Range<R, Color> {
    range: R,
    color: PhantomData<Color>,
    a: f64, // finite or NaN
    b: f64, // finite or NaN
    flast: f64, // `last` as a floating-point number
    last: usize,
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl<R, Color> Range<R, Color> where R: ColorRange<Color> {
    /// Return the float and color of the position `k` (assuming it is
    /// in the range `0 ..= self.last`).
    fn rgb(&self, k: usize) -> (f64, Color) {
        if k == 0 {
            (self.a, R::rgb(&self.range, 0.))
        } else if k == self.last {
            (self.b, R::rgb(&self.range, 1.))
        } else {
            let t = k as f64 / self.flast;
            let mut x = ((self.last - k) as f64 * self.a
                         + k as f64 * self.b) / self.flast;
            if x.is_infinite() {
                x = (1. - t) * self.a + t * self.b;
            }
            (x, R::rgb(&self.range, t))
        }
    }
}

impl<R, Color> Iterator for Range<R, Color>
where R: ColorRange<Color> {
    type Item = (f64, Color);

    fn next(&mut self) -> Option<Self::Item> {
        if self.i <= self.j {
            let item = self.rgb(self.i);
            self.i += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.len();
        (len, Some(len))
    }
}

impl<R, Color> ExactSizeIterator for Range<R, Color>
where R: ColorRange<Color> {
    fn len(&self) -> usize {
        if self.i <= self.j { self.j - self.i + 1 } else { 0 }
    }
}

/// Specifies the methods a RGB color encoding must provide to be the
/// color of a ramp.
pub trait RGBColor: Sized + Copy {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    /// Integer encodings round to the nearest value.
    fn from_rgba(rgba: RGBA<f64>) -> Self;

    /// CSS notation of the color: `#rrggbb` when opaque,
    /// `rgba(r,g,b,a)` otherwise.
    ///
    /// ```
    /// use rgb::RGBA8;
    /// use area_colormap::RGBColor;
    /// assert_eq!(RGBA8::new(255, 255, 255, 204).to_css(),
    ///            "rgba(255,255,255,0.8)");
    /// ```
    fn to_css(&self) -> String {
        let RGBA { r, g, b, a } = self.to_rgba();
        let [r, g, b] = [r, g, b].map(|c| c.round().clamp(0., 255.) as u8);
        if a >= 255. {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            let a = (a.max(0.) / 255. * 1000.).round() / 1000.;
            format!("rgba({r},{g},{b},{a})")
        }
    }
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r.round() as u8,  g: c.g.round() as u8,
               b: c.b.round() as u8 }
    }
}

// 16 bits channels are scaled by 257 = 65535 / 255.
impl RGBColor for RGB16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB16 { r: (257. * c.r).round() as u16,  g: (257. * c.g).round() as u16,
                b: (257. * c.b).round() as u16 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r.round() as u8,  g: c.g.round() as u8,
                b: c.b.round() as u8, a: c.a.round() as u8 }
    }
}

impl RGBColor for RGBA16 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64 / 257., g: self.g as f64 / 257.,
              b: self.b as f64 / 257., a: self.a as f64 / 257. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA16 { r: (257. * c.r).round() as u16,  g: (257. * c.g).round() as u16,
                 b: (257. * c.b).round() as u16, a: (257. * c.a).round() as u16 }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    struct Identity;

    impl ColorRange<f64> for Identity {
        fn rgb(&self, t: f64) -> f64 { t }
    }

    #[test]
    fn range_includes_bounds() {
        let v: Vec<_> = Identity.range(1e8, 2e13, 5).collect();
        assert_eq!(v.len(), 5);
        assert_eq!(v[0], (1e8, 0.));
        assert_eq!(v[4], (2e13, 1.));
        assert!((v[2].0 - (1e8 + 2e13) / 2.).abs() <= 1e-3);
        assert_eq!(v[2].1, 0.5);
    }

    #[test]
    fn range_empty_and_single() {
        assert_eq!(Identity.range(0., 1., 0).count(), 0);
        assert_eq!(Identity.range(0., 1., 1).collect::<Vec<_>>(),
                   vec![(0., 0.)]);
    }

    #[test]
    fn css_notation() {
        assert_eq!(RGB8::new(160, 200, 255).to_css(), "#a0c8ff");
        assert_eq!(RGBA8::new(0, 0, 0, 255).to_css(), "#000000");
        assert_eq!(RGB16::new(65535, 0, 257).to_css(), "#ff0001");
        assert_eq!(RGBA8::new(255, 255, 255, 204).to_css(),
                   "rgba(255,255,255,0.8)");
    }

    #[test]
    fn from_rgba_rounds() {
        let c = RGBA { r: 114.6, g: 0.4, b: 254.5, a: 255. };
        assert_eq!(RGB8::from_rgba(c), RGB8::new(115, 0, 255));
    }
}
