//! Area of geometries in map (Web-Mercator, EPSG:3857) coordinates,
//! and the transforms between map and geographic (EPSG:4326)
//! coordinates.

use std::f64::consts::PI;
use geo::{Area, Coord, Geometry, LineString, MapCoords, Polygon};

/// Radius of the sphere used by the Web-Mercator projection (m).
pub const WEB_MERCATOR_RADIUS: f64 = 6_378_137.;

/// Mean Earth radius (m), the default radius for spherical areas.
pub const MEAN_EARTH_RADIUS: f64 = 6_371_008.8;

// Half the width of the projected world.
const HALF_SIZE: f64 = PI * WEB_MERCATOR_RADIUS;

/// How the area of a geometry is measured.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AreaMeasure {
    /// Area in squared map units, taken in the plane of the projection.
    /// Web-Mercator inflates it away from the equator.
    Planar,
    /// Area in m² on a sphere of the given radius.  Coordinates are
    /// Web-Mercator meters.
    Spherical { radius: f64 },
}

impl Default for AreaMeasure {
    fn default() -> Self {
        AreaMeasure::Spherical { radius: MEAN_EARTH_RADIUS }
    }
}

impl AreaMeasure {
    /// Returns the (non-negative) area of `geometry`.  Points and lines
    /// have no area; holes are subtracted from their polygon.
    pub fn measure(&self, geometry: &Geometry<f64>) -> f64 {
        match *self {
            AreaMeasure::Planar => geometry.unsigned_area(),
            AreaMeasure::Spherical { radius } => {
                let lonlat = web_mercator_to_lonlat_geometry(geometry);
                spherical_area(&lonlat, radius)
            }
        }
    }
}

/// Area in m² of a geometry with lon/lat coordinates (in degrees) on a
/// sphere of radius `radius`.
pub fn spherical_area(geometry: &Geometry<f64>, radius: f64) -> f64 {
    match geometry {
        Geometry::Polygon(p) => polygon_area(p, radius),
        Geometry::MultiPolygon(mp) =>
            mp.iter().map(|p| polygon_area(p, radius)).sum(),
        Geometry::Rect(r) => polygon_area(&r.to_polygon(), radius),
        Geometry::Triangle(t) => polygon_area(&t.to_polygon(), radius),
        Geometry::GeometryCollection(gc) =>
            gc.iter().map(|g| spherical_area(g, radius)).sum(),
        // Points and lines.
        _ => 0.,
    }
}

fn polygon_area(p: &Polygon<f64>, radius: f64) -> f64 {
    let holes: f64 = p.interiors().iter()
        .map(|r| ring_area(r, radius).abs())
        .sum();
    (ring_area(p.exterior(), radius).abs() - holes).max(0.)
}

/// Signed area of a ring, after Chamberlain & Duquette, “Some
/// algorithms for polygons on a sphere” (JPL, 2007).
fn ring_area(ring: &LineString<f64>, radius: f64) -> f64 {
    let coords = &ring.0;
    let n = coords.len();
    if n < 3 { return 0. }
    let mut area = 0.;
    let mut c1 = coords[n - 1];
    for &c2 in coords {
        area += (c2.x - c1.x).to_radians()
            * (2. + c1.y.to_radians().sin() + c2.y.to_radians().sin());
        c1 = c2;
    }
    area * radius * radius / 2.
}

/// Project a lon/lat coordinate (degrees) to Web-Mercator meters.
/// Latitudes beyond ±85.0511° are clamped to the edge of the map.
pub fn lonlat_to_web_mercator(c: Coord<f64>) -> Coord<f64> {
    let x = WEB_MERCATOR_RADIUS * c.x.to_radians();
    let y = WEB_MERCATOR_RADIUS * (PI * (c.y + 90.) / 360.).tan().ln();
    Coord { x, y: y.clamp(-HALF_SIZE, HALF_SIZE) }
}

/// Inverse of [`lonlat_to_web_mercator`].
pub fn web_mercator_to_lonlat(c: Coord<f64>) -> Coord<f64> {
    let lon = (c.x / WEB_MERCATOR_RADIUS).to_degrees();
    let lat = 360. * (c.y / WEB_MERCATOR_RADIUS).exp().atan() / PI - 90.;
    Coord { x: lon, y: lat }
}

pub fn lonlat_to_web_mercator_geometry(g: &Geometry<f64>) -> Geometry<f64> {
    g.map_coords(lonlat_to_web_mercator)
}

pub fn web_mercator_to_lonlat_geometry(g: &Geometry<f64>) -> Geometry<f64> {
    g.map_coords(web_mercator_to_lonlat)
}
