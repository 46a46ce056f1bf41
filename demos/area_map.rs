//! Color the polygons of a GeoJSON file by area and render them as an
//! HTML page (SVG map, legend and a download link for the colored
//! features).
//!
//! ```text
//! cargo run --example area_map -- countries.geojson -o map.html
//! ```

use std::{cell::RefCell,
          fs,
          io::{BufWriter, Write},
          fs::File,
          path::PathBuf,
          rc::Rc,
          error::Error};
use clap::Parser;
use geo::{BoundingRect, Geometry, LineString, Polygon, Rect};
use rgb::RGB8;
use tracing::info;
use area_colormap::{area::MEAN_EARTH_RADIUS, AreaMeasure, AreaStyle,
                    FeatureSource, MapperConfig, RGBColor};

type Err = Box<dyn Error>;

#[derive(Parser, Debug)]
#[command(about = "Color GeoJSON polygons by their area")]
struct Args {
    /// GeoJSON file (lon/lat coordinates).
    input: PathBuf,

    /// HTML page to write.
    #[arg(short, long, default_value = "area_map.html")]
    output: PathBuf,

    /// Also write the features, with their `fill` and `area`
    /// properties, to this GeoJSON file.
    #[arg(long)]
    geojson: Option<PathBuf>,

    #[arg(long, default_value = "blackbody")]
    scheme: String,

    #[arg(long, default_value_t = 50)]
    steps: usize,

    #[arg(long, default_value_t = 1e8)]
    min_area: f64,

    #[arg(long, default_value_t = 2e13)]
    max_area: f64,

    /// The normalized area is raised to the power 1/gamma.
    #[arg(long, default_value_t = 0.5)]
    gamma: f64,

    /// Measure areas in the Web-Mercator plane instead of on the sphere.
    #[arg(long)]
    planar: bool,

    /// Sphere radius (m) for spherical areas.
    #[arg(long, default_value_t = MEAN_EARTH_RADIUS)]
    radius: f64,
}

impl Args {
    fn config(&self) -> MapperConfig {
        let measure = if self.planar { AreaMeasure::Planar }
                      else { AreaMeasure::Spherical { radius: self.radius } };
        MapperConfig::default()
            .scheme(self.scheme.as_str())
            .steps(self.steps)
            .area_range(self.min_area, self.max_area)
            .gamma(self.gamma)
            .measure(measure)
    }
}

fn escape_attr(s: &str) -> String {
    s.replace('&', "&amp;").replace('"', "&quot;")
        .replace('<', "&lt;").replace('>', "&gt;")
}

fn ring_path(d: &mut String, ring: &LineString<f64>) {
    for (i, c) in ring.0.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        // SVG's y axis points down.
        d.push_str(&format!("{cmd}{:.0} {:.0} ", c.x, -c.y));
    }
    d.push('Z');
}

fn polygon_path(d: &mut String, p: &Polygon<f64>) {
    ring_path(d, p.exterior());
    for hole in p.interiors() {
        ring_path(d, hole);
    }
}

fn svg_path(g: &Geometry<f64>) -> Option<String> {
    let mut d = String::new();
    match g {
        Geometry::Polygon(p) => polygon_path(&mut d, p),
        Geometry::MultiPolygon(mp) => mp.iter().for_each(|p| polygon_path(&mut d, p)),
        Geometry::Rect(r) => polygon_path(&mut d, &r.to_polygon()),
        _ => return None,
    }
    Some(d)
}

fn bounds(source: &FeatureSource) -> Option<Rect<f64>> {
    source.features().iter()
        .filter_map(|f| f.geometry().bounding_rect())
        .reduce(|a, b| {
            let (amin, bmin) = (a.min(), b.min());
            let (amax, bmax) = (a.max(), b.max());
            Rect::new((amin.x.min(bmin.x), amin.y.min(bmin.y)),
                      (amax.x.max(bmax.x), amax.y.max(bmax.y)))
        })
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
    let args = Args::parse();
    let style = AreaStyle::new(args.config().build::<RGB8>()?);

    let mut source = FeatureSource::new();
    // The download link follows every change of the source.
    let href = Rc::new(RefCell::new(String::new()));
    let link = Rc::clone(&href);
    source.on_change(move |s| match s.data_url() {
        Ok(url) => *link.borrow_mut() = url,
        Err(e) => tracing::warn!("cannot export features: {e}"),
    });

    let text = fs::read_to_string(&args.input)?;
    let n = source.read_geojson(&text)?;
    info!(features = n, input = %args.input.display(), "features loaded");

    let ids: Vec<_> = source.features().iter().map(|f| f.id()).collect();
    for id in ids {
        let Some(feature) = source.feature(id) else { continue };
        let area = style.mapper().area_of(feature.geometry());
        let fill = style.style(feature).fill.to_css();
        source.set_property(id, "area", area.into())?;
        source.set_property(id, "fill", fill.into())?;
    }

    if let Some(path) = &args.geojson {
        fs::write(path, source.write_geojson()?)?;
        info!(output = %path.display(), "colored GeoJSON written");
    }

    let mut fh = BufWriter::new(File::create(&args.output)?);
    writeln!(fh, "<html>\n<head>\n<title>{}</title>\n</head>\n<body>",
             args.input.display())?;
    if let Some(r) = bounds(&source) {
        let pad = 0.02 * r.width().max(r.height());
        writeln!(fh, "<svg width=\"960\" viewBox=\"{:.0} {:.0} {:.0} {:.0}\" \
                      style=\"background: #202830\">",
                 r.min().x - pad, -r.max().y - pad,
                 r.width() + 2. * pad, r.height() + 2. * pad)?;
        let stroke_width = r.width().max(r.height()) / 1000.;
        for feature in source.features() {
            let Some(d) = svg_path(feature.geometry()) else { continue };
            let (fill, stroke) = style.style(feature).css();
            writeln!(fh, "  <path d=\"{d}\" fill=\"{fill}\" \
                          fill-rule=\"evenodd\" stroke=\"{stroke}\" \
                          stroke-width=\"{stroke_width:.0}\"/>")?;
        }
        writeln!(fh, "</svg>")?;
    }

    writeln!(fh, "<table style=\"border-spacing: 0px\"><tr>")?;
    for (_, color) in style.mapper().legend(11) {
        writeln!(fh, "  <td style=\"width: 60px; height: 20px; \
                      background-color: {}\"></td>", color.to_css())?;
    }
    writeln!(fh, "</tr><tr>")?;
    for (area, _) in style.mapper().legend(11) {
        writeln!(fh, "  <td style=\"font-size: 10px\">{area:.1e} m²</td>")?;
    }
    writeln!(fh, "</tr></table>")?;

    writeln!(fh, "<p><a download=\"features.json\" href=\"{}\">Download</a> \
                  ({} features)</p>",
             escape_attr(&href.borrow()), source.len())?;
    writeln!(fh, "</body>\n</html>")?;
    info!(output = %args.output.display(), "map written");
    Ok(())
}
