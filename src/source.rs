//! In-memory vector data source.
//!
//! Features are kept in map coordinates (Web-Mercator).  GeoJSON is read
//! and written in lon/lat, as RFC 7946 requires.

use std::fmt;
use geo::{Coord, CoordsIter, Geometry};
use geojson::{FeatureCollection, GeoJson, JsonObject, JsonValue};
use tracing::{debug, trace, warn};
use crate::area::{lonlat_to_web_mercator_geometry,
                  web_mercator_to_lonlat_geometry};
use crate::SourceError;

/// Identifier of a feature within its [`FeatureSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FeatureId(u64);

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A geometry (in map coordinates) with its properties.
#[derive(Clone, Debug, PartialEq)]
pub struct Feature {
    id: FeatureId,
    geometry: Geometry<f64>,
    properties: JsonObject,
}

impl Feature {
    pub fn id(&self) -> FeatureId { self.id }

    pub fn geometry(&self) -> &Geometry<f64> { &self.geometry }

    pub fn properties(&self) -> &JsonObject { &self.properties }

    pub fn property(&self, key: &str) -> Option<&JsonValue> {
        self.properties.get(key)
    }
}

type Listener = Box<dyn FnMut(&FeatureSource)>;

/// A collection of features notifying listeners of every change.
///
/// # Example
///
/// ```
/// use std::{cell::RefCell, rc::Rc};
/// use area_colormap::FeatureSource;
/// let mut source = FeatureSource::new();
/// let href = Rc::new(RefCell::new(String::new()));
/// let link = Rc::clone(&href);
/// source.on_change(move |s| {
///     if let Ok(url) = s.data_url() { *link.borrow_mut() = url }
/// });
/// source.read_geojson(r#"{"type": "Point", "coordinates": [4.35, 50.85]}"#)
///     .unwrap();
/// assert!(href.borrow().starts_with("data:text/json;charset=utf-8,"));
/// ```
#[derive(Default)]
pub struct FeatureSource {
    features: Vec<Feature>,
    next_id: u64,
    revision: u64,
    listeners: Vec<Listener>,
}

impl fmt::Debug for FeatureSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FeatureSource")
            .field("features", &self.features)
            .field("revision", &self.revision)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl FeatureSource {
    pub fn new() -> Self { Self::default() }

    /// Register `listener`, called after every change of the source.
    pub fn on_change(&mut self, listener: impl FnMut(&FeatureSource) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    fn changed(&mut self) {
        self.revision += 1;
        let mut listeners = std::mem::take(&mut self.listeners);
        for listener in &mut listeners {
            listener(self);
        }
        self.listeners = listeners;
    }

    fn insert(&mut self, geometry: Geometry<f64>, properties: JsonObject)
              -> FeatureId {
        let id = FeatureId(self.next_id);
        self.next_id += 1;
        self.features.push(Feature { id, geometry, properties });
        id
    }

    /// Number of changes so far.
    pub fn revision(&self) -> u64 { self.revision }

    pub fn len(&self) -> usize { self.features.len() }

    pub fn is_empty(&self) -> bool { self.features.is_empty() }

    /// The features, in insertion order.
    pub fn features(&self) -> &[Feature] { &self.features }

    pub fn feature(&self, id: FeatureId) -> Option<&Feature> {
        self.features.iter().find(|f| f.id == id)
    }

    fn feature_mut(&mut self, id: FeatureId)
                   -> Result<&mut Feature, SourceError> {
        self.features.iter_mut().find(|f| f.id == id)
            .ok_or(SourceError::UnknownFeature(id))
    }

    /// Add a feature whose geometry is in map coordinates (e.g. a
    /// freshly drawn polygon).
    pub fn add_feature(&mut self, geometry: Geometry<f64>,
                       properties: JsonObject) -> FeatureId {
        let id = self.insert(geometry, properties);
        trace!(%id, "feature added");
        self.changed();
        id
    }

    /// Replace the geometry of feature `id`.
    pub fn modify(&mut self, id: FeatureId, geometry: Geometry<f64>)
                  -> Result<(), SourceError> {
        self.feature_mut(id)?.geometry = geometry;
        trace!(%id, "feature modified");
        self.changed();
        Ok(())
    }

    /// Set the property `key` of feature `id`.
    pub fn set_property(&mut self, id: FeatureId, key: impl Into<String>,
                        value: JsonValue) -> Result<(), SourceError> {
        let key = key.into();
        let feature = self.feature_mut(id)?;
        trace!(%id, key = %key, "feature property set");
        feature.properties.insert(key, value);
        self.changed();
        Ok(())
    }

    pub fn remove(&mut self, id: FeatureId) -> Option<Feature> {
        let i = self.features.iter().position(|f| f.id == id)?;
        let feature = self.features.remove(i);
        trace!(%id, "feature removed");
        self.changed();
        Some(feature)
    }

    /// Remove all features.  Listeners are not called if the source
    /// was already empty.
    pub fn clear(&mut self) {
        if self.features.is_empty() { return }
        debug!(count = self.features.len(), "clearing features");
        self.features.clear();
        self.changed();
    }

    /// Returns the vertex of a feature closest to `c`, provided it is at
    /// most `tolerance` away (in map units).
    pub fn snap(&self, c: Coord<f64>, tolerance: f64) -> Option<Coord<f64>> {
        self.features.iter()
            .flat_map(|f| f.geometry.coords_iter())
            .map(|v| ((v.x - c.x).hypot(v.y - c.y), v))
            .filter(|(d, _)| *d <= tolerance)
            .min_by(|(d1, _), (d2, _)| d1.total_cmp(d2))
            .map(|(_, v)| v)
    }

    /// Read GeoJSON (a feature collection, a feature or a geometry) in
    /// lon/lat and add its features.  Features without geometry are
    /// skipped.  Nothing is added if a geometry cannot be converted.
    /// Returns the number of features added.
    pub fn read_geojson(&mut self, text: &str) -> Result<usize, SourceError> {
        let geojson: GeoJson = text.parse().map_err(SourceError::Parse)?;
        let features = match geojson {
            GeoJson::FeatureCollection(fc) => fc.features,
            GeoJson::Feature(f) => vec![f],
            GeoJson::Geometry(g) => {
                vec![geojson::Feature { geometry: Some(g),
                                        ..Default::default() }]
            }
        };
        let mut incoming = Vec::with_capacity(features.len());
        for (i, f) in features.into_iter().enumerate() {
            let Some(gj) = f.geometry else {
                warn!(index = i, "skipping feature without geometry");
                continue
            };
            let geometry: Geometry<f64> = gj.value.try_into()
                .map_err(SourceError::Parse)?;
            incoming.push((lonlat_to_web_mercator_geometry(&geometry),
                           f.properties.unwrap_or_default()));
        }
        let count = incoming.len();
        for (geometry, properties) in incoming {
            self.insert(geometry, properties);
        }
        debug!(count, total = self.features.len(), "GeoJSON features read");
        if count > 0 { self.changed() }
        Ok(count)
    }

    /// Write all features as a GeoJSON feature collection in lon/lat.
    pub fn write_geojson(&self) -> Result<String, SourceError> {
        let features = self.features.iter()
            .map(|f| {
                let lonlat = web_mercator_to_lonlat_geometry(&f.geometry);
                geojson::Feature {
                    geometry: Some(geojson::Geometry::new(
                        geojson::Value::from(&lonlat))),
                    properties: Some(f.properties.clone()),
                    ..Default::default()
                }
            })
            .collect();
        let fc = FeatureCollection { bbox: None, features,
                                     foreign_members: None };
        Ok(serde_json::to_string(&fc)?)
    }

    /// A `data:` URL holding [`FeatureSource::write_geojson`], suitable
    /// as the `href` of a download link.
    pub fn data_url(&self) -> Result<String, SourceError> {
        let json = self.write_geojson()?;
        let mut url = String::with_capacity(json.len() + 32);
        url.push_str("data:text/json;charset=utf-8,");
        for c in json.chars() {
            match c {
                c if c == '%' || c == '#' || c.is_ascii_whitespace() => {
                    url.push_str(&format!("%{:02X}", c as u32))
                }
                c => url.push(c),
            }
        }
        Ok(url)
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};
    use geo::{coord, polygon, Point};

    fn counting(source: &mut FeatureSource) -> Rc<Cell<usize>> {
        let count = Rc::new(Cell::new(0));
        let c = Rc::clone(&count);
        source.on_change(move |_| c.set(c.get() + 1));
        count
    }

    fn unit_square() -> Geometry<f64> {
        Geometry::Polygon(polygon![(x: 0., y: 0.), (x: 1., y: 0.),
                                   (x: 1., y: 1.), (x: 0., y: 1.)])
    }

    #[test]
    fn listeners_fire_once_per_change() {
        let mut s = FeatureSource::new();
        let count = counting(&mut s);
        let id = s.add_feature(unit_square(), JsonObject::new());
        assert_eq!(count.get(), 1);
        s.modify(id, Geometry::Point(Point::new(3., 3.))).unwrap();
        assert_eq!(count.get(), 2);
        s.set_property(id, "name", "a".into()).unwrap();
        assert_eq!(s.feature(id).and_then(|f| f.property("name")),
                   Some(&JsonValue::from("a")));
        assert_eq!(s.remove(id).map(|f| f.id()), Some(id));
        assert_eq!(count.get(), 4);
        assert_eq!(s.revision(), 4);
        s.clear(); // already empty
        assert_eq!(count.get(), 4);
    }

    #[test]
    fn listener_sees_new_state() {
        let mut s = FeatureSource::new();
        let seen = Rc::new(Cell::new(0));
        let seen2 = Rc::clone(&seen);
        s.on_change(move |s| seen2.set(s.len()));
        s.add_feature(unit_square(), JsonObject::new());
        s.add_feature(unit_square(), JsonObject::new());
        assert_eq!(seen.get(), 2);
        s.clear();
        assert_eq!(seen.get(), 0);
        assert!(s.is_empty());
    }

    #[test]
    fn unknown_feature() {
        let mut s = FeatureSource::new();
        let id = s.add_feature(unit_square(), JsonObject::new());
        s.remove(id);
        assert!(matches!(s.modify(id, unit_square()),
                         Err(SourceError::UnknownFeature(i)) if i == id));
        assert!(s.remove(id).is_none());
    }

    #[test]
    fn ids_are_not_reused() {
        let mut s = FeatureSource::new();
        let a = s.add_feature(unit_square(), JsonObject::new());
        s.clear();
        let b = s.add_feature(unit_square(), JsonObject::new());
        assert_ne!(a, b);
    }

    #[test]
    fn snapping() {
        let mut s = FeatureSource::new();
        s.add_feature(unit_square(), JsonObject::new());
        assert_eq!(s.snap(coord! { x: 0.9, y: 1.05 }, 0.2),
                   Some(coord! { x: 1., y: 1. }));
        assert_eq!(s.snap(coord! { x: 0.5, y: 0.5 }, 0.2), None);
    }

    #[test]
    fn bad_geojson() {
        let mut s = FeatureSource::new();
        let count = counting(&mut s);
        assert!(matches!(s.read_geojson("{not json"),
                         Err(SourceError::Parse(_))));
        assert_eq!(s.read_geojson(r#"{"type": "FeatureCollection",
                                      "features": []}"#).unwrap(), 0);
        assert_eq!(count.get(), 0);
    }

    #[test]
    fn data_url_escapes() {
        let mut s = FeatureSource::new();
        let mut props = JsonObject::new();
        props.insert("fill".to_string(), "#ff 00%".into());
        s.add_feature(Geometry::Point(Point::new(0., 0.)), props);
        let url = s.data_url().unwrap();
        assert!(url.contains("%23ff%2000%25"), "{url}");
        assert!(!url[5..].contains('#'));
    }
}
