use std::{env,
          io::{BufWriter, Write},
          fs::File,
          error::Error};
use rgb::RGB8;
use area_colormap::{build_ramp, scheme_names, ColorRange, MapperConfig,
                    RGBColor, Scheme};

type Err = Box<dyn Error>;

fn table_of_colors(fh: &mut impl Write, colors: &[RGB8],
                   width: u32, comment: &str) -> Result<(), Err> {
    writeln!(fh, "<table style=\"border: 0px;  border-spacing: 0px\"><tr>")?;
    for &c in colors {
        writeln!(fh, "  <td style=\"width: {width}px; height: 30px; \
                      background-color: {}\"></td>",
                 c.to_css())?;
    }
    writeln!(fh, "<td style=\"padding-left: 7px\">{comment}</td></tr>\
                  </table><br/>")?;
    Ok(())
}

fn main() -> Result<(), Err> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let mut fh = BufWriter::new(File::create("ramps.html")?);
    writeln!(fh, "<html>\n\
                  <head>\n\
                  <title>area-colormap: {}</title>\n\
                  </head>\n\
                  <body>",
             env::args().next().unwrap_or_default())?;

    writeln!(fh, "<h3>Schemes</h3>")?;
    for name in scheme_names() {
        let ramp = build_ramp::<RGB8>(name, 10)?;
        table_of_colors(&mut fh, ramp.colors(), 43,
                        &format!("{name} (10 steps)"))?;
        let g = Scheme::<RGB8>::named(name)?.gradient();
        let colors: Vec<_> = g.range(0., 1., 150).map(|(_, c)| c).collect();
        table_of_colors(&mut fh, &colors, 1, &format!("{name} (gradient)"))?;
    }

    writeln!(fh, "<h3>Area easing (blackbody, 50 steps)</h3>")?;
    for gamma in [0.5, 1., 2.] {
        let mapper = MapperConfig::default().gamma(gamma).build::<RGB8>()?;
        let colors: Vec<_> = mapper.legend(150).map(|(_, c)| c).collect();
        table_of_colors(&mut fh, &colors, 1,
                        &format!("γ = {gamma}, 10⁸ to 2·10¹³ m²"))?;
    }

    writeln!(fh, "</body>\n\
                  </html>")?;
    Ok(())
}
