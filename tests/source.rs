use std::{cell::RefCell, rc::Rc};
use geo::Geometry;
use geojson::{GeoJson, JsonValue};
use rgb::RGB8;
use area_colormap::area::{lonlat_to_web_mercator, MEAN_EARTH_RADIUS};
use area_colormap::{AreaStyle, FeatureSource, MapperConfig, RGBColor,
                    SourceError};

const COLLECTION: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature",
      "properties": { "name": "cell" },
      "geometry": { "type": "Polygon",
                    "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 1], [0, 0]]] } },
    { "type": "Feature",
      "properties": { "name": "nothing" },
      "geometry": null },
    { "type": "Feature",
      "properties": { "name": "big" },
      "geometry": { "type": "Polygon",
                    "coordinates": [[[-60, -30], [60, -30], [60, 30],
                                     [-60, 30], [-60, -30]]] } }
  ]
}"#;

#[test]
fn import_projects_and_skips_null_geometries() {
    let mut source = FeatureSource::new();
    assert_eq!(source.read_geojson(COLLECTION).unwrap(), 2);
    assert_eq!(source.len(), 2);
    let cell = &source.features()[0];
    assert_eq!(cell.property("name"), Some(&JsonValue::from("cell")));
    let Geometry::Polygon(p) = cell.geometry() else {
        panic!("expected a polygon, got {:?}", cell.geometry())
    };
    let corner = p.exterior().0[2];
    let expected = lonlat_to_web_mercator(geo::coord! { x: 1., y: 1. });
    assert!((corner.x - expected.x).abs() < 1e-6);
    assert!((corner.y - expected.y).abs() < 1e-6);
    assert!((corner.x - 111_319.49).abs() < 0.01);
}

#[test]
fn export_then_import_preserves_features() {
    let mut source = FeatureSource::new();
    source.read_geojson(COLLECTION).unwrap();
    let json = source.write_geojson().unwrap();
    let GeoJson::FeatureCollection(fc) = json.parse::<GeoJson>().unwrap() else {
        panic!("expected a feature collection: {json}")
    };
    assert_eq!(fc.features.len(), 2);
    let Some(geojson::Value::Polygon(rings)) =
        fc.features[0].geometry.as_ref().map(|g| &g.value) else {
        panic!("expected a polygon")
    };
    assert!((rings[0][2][0] - 1.).abs() < 1e-9);
    assert!((rings[0][2][1] - 1.).abs() < 1e-9);

    let mut again = FeatureSource::new();
    again.read_geojson(&json).unwrap();
    assert_eq!(again.len(), 2);
    assert_eq!(again.features()[1].property("name"),
               Some(&JsonValue::from("big")));
}

#[test]
fn download_link_follows_changes() {
    let mut source = FeatureSource::new();
    let href = Rc::new(RefCell::new(String::new()));
    let link = Rc::clone(&href);
    source.on_change(move |s| {
        *link.borrow_mut() = s.data_url().unwrap_or_default()
    });
    source.read_geojson(COLLECTION).unwrap();
    assert!(href.borrow().contains("\"big\""));
    source.clear();
    assert!(href.borrow().starts_with("data:text/json;charset=utf-8,{"));
    assert!(href.borrow().contains("\"features\":[]"));
}

#[test]
fn malformed_geometry_is_a_parse_error() {
    let mut source = FeatureSource::new();
    let notified = Rc::new(RefCell::new(0));
    let n = Rc::clone(&notified);
    source.on_change(move |_| *n.borrow_mut() += 1);
    let text = r#"{"type": "FeatureCollection", "features": [
        {"type": "Feature", "properties": {},
         "geometry": {"type": "Point", "coordinates": [1, 2]}},
        {"type": "Feature", "properties": {},
         "geometry": {"type": "Polygon", "coordinates": [1, 2]}}]}"#;
    assert!(matches!(source.read_geojson(text), Err(SourceError::Parse(_))));
    assert!(source.is_empty());
    assert_eq!(*notified.borrow(), 0);
    assert!(matches!(source.read_geojson("[]"), Err(SourceError::Parse(_))));
}

#[test]
fn features_colored_by_spherical_area() {
    let mut source = FeatureSource::new();
    source.read_geojson(COLLECTION).unwrap();
    let style = AreaStyle::new(MapperConfig::default().build::<RGB8>().unwrap());
    let mapper = style.mapper();

    let cell = &source.features()[0];
    let area = mapper.area_of(cell.geometry());
    let expected = MEAN_EARTH_RADIUS * MEAN_EARTH_RADIUS
        * 1f64.to_radians() * 1f64.to_radians().sin();
    assert!((area - expected).abs() / expected < 1e-6);
    // 1.2e10 m² is 0.06% of the range: first color.
    assert_eq!(mapper.index_for_area(area), 0);
    assert_eq!(style.style(cell).fill, mapper.ramp().first());

    // 120° × 60° ≈ 8.5e13 m², above the range.
    let big = &source.features()[1];
    assert!(mapper.area_of(big.geometry()) > 2e13);
    assert_eq!(mapper.color_for_feature(big).to_css(), "#a0c8ff");
}
