use proptest::prelude::*;
use rgb::RGB8;
use area_colormap::{build_ramp, color_for_area, ramp_index, AreaMeasure,
                    ConfigurationError, MapperConfig, RGBColor};

const MIN: f64 = 1e8;
const MAX: f64 = 2e13;

fn at(fraction: f64) -> f64 { MIN + (MAX - MIN) * fraction }

#[test]
fn boundary_indices() {
    let m = MapperConfig::default().build::<RGB8>().unwrap();
    assert_eq!(m.index_for_area(MIN), 0);
    assert_eq!(m.index_for_area(MAX), 49);
    assert_eq!(m.index_for_area(at(0.25)), 3);
    assert_eq!(m.index_for_area(at(0.5)), 12);
}

#[test]
fn blackbody_colors() {
    let ramp = build_ramp::<RGB8>("blackbody", 50).unwrap();
    assert_eq!(color_for_area(0., &ramp, MIN, MAX, 0.5).to_css(), "#000000");
    assert_eq!(color_for_area(1e15, &ramp, MIN, MAX, 0.5).to_css(),
               "#a0c8ff");
}

#[test]
fn ramp_errors() {
    assert!(matches!(build_ramp::<RGB8>("unknown", 50),
                     Err(ConfigurationError::UnknownScheme { .. })));
    assert!(matches!(build_ramp::<RGB8>("blackbody", 0),
                     Err(ConfigurationError::InvalidSteps { steps: 0 })));
    assert!(MapperConfig::default().steps(0).build::<RGB8>().is_err());
    assert!(MapperConfig::default()
            .measure(AreaMeasure::Spherical { radius: 0. })
            .build::<RGB8>().is_err());
}

proptest! {
    #[test]
    fn index_is_monotonic(a in 0f64..3e13, b in 0f64..3e13,
                          gamma in 0.1f64..4.) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(ramp_index(lo, 50, MIN, MAX, gamma)
                     <= ramp_index(hi, 50, MIN, MAX, gamma));
    }

    #[test]
    fn index_is_in_ramp(area in proptest::num::f64::ANY, steps in 1usize..300) {
        prop_assert!(ramp_index(area, steps, MIN, MAX, 0.5) < steps);
    }

    #[test]
    fn out_of_range_is_clamped(below in -1e15f64..MIN, above in MAX..1e20) {
        let m = MapperConfig::default().build::<RGB8>().unwrap();
        prop_assert_eq!(m.color_for_area(below), m.ramp().first());
        prop_assert_eq!(m.color_for_area(above), m.ramp().last());
    }

    #[test]
    fn mapping_is_pure(area in 0f64..3e13) {
        let m = MapperConfig::default().build::<RGB8>().unwrap();
        prop_assert_eq!(m.color_for_area(area), m.color_for_area(area));
    }
}
