//! Layer style: fill each feature with the color of its area.

use rgb::RGBA8;
use crate::{AreaColorMapper, Feature, RGBColor};

/// Outline of the features: white at 80% opacity.
pub const DEFAULT_STROKE: RGBA8 = RGBA8 { r: 255, g: 255, b: 255, a: 204 };

/// Fill and stroke of a feature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FeatureStyle<Color> {
    pub fill: Color,
    pub stroke: RGBA8,
}

impl<Color: RGBColor> FeatureStyle<Color> {
    /// CSS colors of the fill and the stroke.
    pub fn css(&self) -> (String, String) {
        (self.fill.to_css(), self.stroke.to_css())
    }
}

/// Style of a vector layer filling each feature according to its area.
#[derive(Clone, Debug)]
pub struct AreaStyle<Color> {
    mapper: AreaColorMapper<Color>,
    stroke: RGBA8,
}

impl<Color: RGBColor> AreaStyle<Color> {
    pub fn new(mapper: AreaColorMapper<Color>) -> Self {
        AreaStyle { mapper, stroke: DEFAULT_STROKE }
    }

    pub fn with_stroke(mut self, stroke: RGBA8) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn mapper(&self) -> &AreaColorMapper<Color> { &self.mapper }

    pub fn style(&self, feature: &Feature) -> FeatureStyle<Color> {
        FeatureStyle { fill: self.mapper.color_for_feature(feature),
                       stroke: self.stroke }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, Geometry};
    use geojson::JsonObject;
    use rgb::RGB8;
    use crate::{AreaMeasure, FeatureSource, MapperConfig};

    #[test]
    fn fill_follows_area() {
        let mapper = MapperConfig::default()
            .area_range(0., 100.)
            .measure(AreaMeasure::Planar)
            .build::<RGB8>().unwrap();
        let style = AreaStyle::new(mapper);
        let mut source = FeatureSource::new();
        let small = source.add_feature(
            Geometry::Polygon(polygon![(x: 0., y: 0.), (x: 1., y: 0.),
                                       (x: 1., y: 1.)]),
            JsonObject::new());
        let big = source.add_feature(
            Geometry::Polygon(polygon![(x: 0., y: 0.), (x: 20., y: 0.),
                                       (x: 20., y: 20.), (x: 0., y: 20.)]),
            JsonObject::new());
        let small = style.style(source.feature(small).unwrap());
        let big = style.style(source.feature(big).unwrap());
        assert_eq!(small.fill, RGB8::new(0, 0, 0));
        assert_eq!(big.fill, style.mapper().ramp().last());
        assert_eq!(big.css(), ("#a0c8ff".to_string(),
                               "rgba(255,255,255,0.8)".to_string()));
    }
}
