// To use this script, copy `colorScale.js` from the `colormap` npm
// package into tools/.  Then remove everything before the first "{"
// (the `module.exports =`) and the trailing ";".

use std::{string::String,
          collections::BTreeMap,
          env,
          fs::File,
          io::{BufWriter, prelude::*},
          error::Error};
use serde_hjson::Value::{self, *};

#[derive(Debug)]
struct Stop {
    index: f64,
    rgb: [f64; 3],
}

type Schemes = BTreeMap<String, Vec<Stop>>;

fn number(v: &Value) -> f64 {
    match v {
        I64(i) => *i as f64,
        U64(u) => *u as f64,
        F64(f) => *f,
        _ => panic!("area-colormap-tools: {v:?} is not a number"),
    }
}

/// Convert `{"index": 0.2, "rgb": [230, 0, 0]}` to a [`Stop`].
fn parse_stop(v: &Value) -> Stop {
    let o = match v {
        Object(o) => o,
        _ => panic!("area-colormap-tools: stop {v:?} is not an object") };
    let index = match o.get("index") {
        Some(i) => number(i),
        None => panic!("area-colormap-tools: stop without index") };
    let rgb = match o.get("rgb") {
        Some(Array(c)) if c.len() == 3 => [number(&c[0]), number(&c[1]),
                                            number(&c[2])],
        // `add_schemes_from_json` only passes stops with an RGB triple.
        _ => panic!("area-colormap-tools: stop without rgb triple") };
    Stop { index, rgb }
}

fn add_schemes_from_json(map: &mut Schemes, json: Value) {
    if let Object(m) = json {
        for (name, stops) in m.into_iter() {
            let stops = match stops {
                Array(a) => a,
                _ => panic!("area-colormap-tools: {name} is not an array") };
            // "alpha" has RGBA stops; only the opaque scales color areas.
            if stops.iter().any(|s| !matches!(s, Object(o)
                                              if matches!(o.get("rgb"),
                                                          Some(Array(c))
                                                          if c.len() == 3))) {
                eprintln!("area-colormap-tools: skipping {name} \
                           (stops are not RGB triples)");
                continue
            }
            let stops: Vec<_> = stops.iter().map(parse_stop).collect();
            assert!(stops.len() >= 2, "{name}: fewer than 2 stops");
            map.insert(name, stops);
        }
    }
}

fn rust_ident(name: &str) -> String {
    name.to_ascii_uppercase().replace('-', "_")
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut schemes = Schemes::new();

    let fh_scales = File::open("colorScale.js")?;
    let json: Value = serde_hjson::from_reader(fh_scales)?;
    add_schemes_from_json(&mut schemes, json);

    let mut fh = BufWriter::new(File::create("../src/schemes.rs")?);
    writeln!(fh, "// Written by {}\n\n\
                  use std::ops::Deref;\n\
                  use lazy_static::lazy_static;\n\
                  pub(crate) mod ty;\n\
                  use ty::*;\n",
             env::args().next().unwrap())?;

    writeln!(fh, "// Color scales of the `colormap` package (colorScale.js)\n\
                  // Number of scales: {}",
             schemes.len())?;
    for (name, stops) in &schemes {
        writeln!(fh, "lazy_static! {{\n  \
                      pub(crate) static ref {}: SchemeData = {{\n  \
                      SchemeData {{\n    \
                      name: \"{name}\",\n    \
                      stops: vec![",
                 rust_ident(name))?;
        for Stop { index, rgb: [r, g, b] } in stops {
            writeln!(fh, "      Stop{{index: {index:.3}, rgb: RGBA{{\
                          r: {r:5.1}, g: {g:5.1}, b: {b:5.1}, a: 255.}}}},")?;
        }
        writeln!(fh, "    ]}}\n  }};\n}}\n")?;
    }

    write!(fh, "lazy_static! {{\n  \
                pub(crate) static ref ALL_SCHEMES: \
                [&'static SchemeData; {}] = {{\n    [",
           schemes.len())?;
    let idents: Vec<_> = schemes.keys()
        .map(|name| format!("{}.deref()", rust_ident(name)))
        .collect();
    write!(fh, "{}", idents.join(",\n     "))?;
    writeln!(fh, "]\n  }};\n}}")?;

    Ok(())
}
