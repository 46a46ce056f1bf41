// Written by target/debug/area-colormap-tools

use std::ops::Deref;
use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

// Color scales of the `colormap` package (colorScale.js)
// Number of scales: 43
lazy_static! {
  pub(crate) static ref AUTUMN: SchemeData = {
  SchemeData {
    name: "autumn",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r: 255.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 255.0, b:   0.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref BATHYMETRY: SchemeData = {
  SchemeData {
    name: "bathymetry",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  40.0, g:  26.0, b:  44.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  59.0, g:  49.0, b:  90.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  64.0, g:  76.0, b: 139.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r:  63.0, g: 110.0, b: 151.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r:  72.0, g: 142.0, b: 158.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r:  85.0, g: 174.0, b: 163.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 120.0, g: 206.0, b: 163.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 187.0, g: 230.0, b: 172.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 253.0, g: 254.0, b: 204.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref BLACKBODY: SchemeData = {
  SchemeData {
    name: "blackbody",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 0.200, rgb: RGBA{r: 230.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 0.400, rgb: RGBA{r: 230.0, g: 210.0, b:   0.0, a: 255.}},
      Stop{index: 0.700, rgb: RGBA{r: 255.0, g: 255.0, b: 255.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 160.0, g: 200.0, b: 255.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref BLUERED: SchemeData = {
  SchemeData {
    name: "bluered",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b: 255.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g:   0.0, b:   0.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref BONE: SchemeData = {
  SchemeData {
    name: "bone",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 0.376, rgb: RGBA{r:  84.0, g:  84.0, b: 116.0, a: 255.}},
      Stop{index: 0.753, rgb: RGBA{r: 169.0, g: 200.0, b: 200.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 255.0, b: 255.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref CDOM: SchemeData = {
  SchemeData {
    name: "cdom",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  47.0, g:  15.0, b:  62.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  87.0, g:  23.0, b:  86.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r: 130.0, g:  28.0, b:  99.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 171.0, g:  41.0, b:  96.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 206.0, g:  67.0, b:  86.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 230.0, g: 106.0, b:  84.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 242.0, g: 149.0, b: 103.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 249.0, g: 193.0, b: 135.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 237.0, b: 176.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref CHLOROPHYLL: SchemeData = {
  SchemeData {
    name: "chlorophyll",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  18.0, g:  36.0, b:  20.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  25.0, g:  63.0, b:  41.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  24.0, g:  91.0, b:  59.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r:  13.0, g: 119.0, b:  72.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r:  18.0, g: 148.0, b:  80.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r:  80.0, g: 173.0, b:  89.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 132.0, g: 196.0, b: 122.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 175.0, g: 221.0, b: 162.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 215.0, g: 249.0, b: 208.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref COOL: SchemeData = {
  SchemeData {
    name: "cool",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r: 125.0, g:   0.0, b: 179.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r: 116.0, g:   0.0, b: 218.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  98.0, g:  74.0, b: 237.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r:  68.0, g: 146.0, b: 231.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r:   0.0, g: 204.0, b: 197.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r:   0.0, g: 247.0, b: 146.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r:   0.0, g: 255.0, b:  88.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r:  40.0, g: 255.0, b:   8.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 147.0, g: 255.0, b:   0.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref COPPER: SchemeData = {
  SchemeData {
    name: "copper",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 0.804, rgb: RGBA{r: 255.0, g: 160.0, b: 102.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 199.0, b: 127.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref CUBEHELIX: SchemeData = {
  SchemeData {
    name: "cubehelix",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 0.070, rgb: RGBA{r:  22.0, g:   5.0, b:  59.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  60.0, g:   4.0, b: 105.0, a: 255.}},
      Stop{index: 0.200, rgb: RGBA{r: 109.0, g:   1.0, b: 135.0, a: 255.}},
      Stop{index: 0.270, rgb: RGBA{r: 161.0, g:   0.0, b: 147.0, a: 255.}},
      Stop{index: 0.330, rgb: RGBA{r: 210.0, g:   2.0, b: 142.0, a: 255.}},
      Stop{index: 0.400, rgb: RGBA{r: 251.0, g:  11.0, b: 123.0, a: 255.}},
      Stop{index: 0.470, rgb: RGBA{r: 255.0, g:  29.0, b:  97.0, a: 255.}},
      Stop{index: 0.530, rgb: RGBA{r: 255.0, g:  54.0, b:  69.0, a: 255.}},
      Stop{index: 0.600, rgb: RGBA{r: 255.0, g:  85.0, b:  46.0, a: 255.}},
      Stop{index: 0.670, rgb: RGBA{r: 255.0, g: 120.0, b:  34.0, a: 255.}},
      Stop{index: 0.730, rgb: RGBA{r: 255.0, g: 157.0, b:  37.0, a: 255.}},
      Stop{index: 0.800, rgb: RGBA{r: 241.0, g: 191.0, b:  57.0, a: 255.}},
      Stop{index: 0.870, rgb: RGBA{r: 224.0, g: 220.0, b:  93.0, a: 255.}},
      Stop{index: 0.930, rgb: RGBA{r: 218.0, g: 241.0, b: 142.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 227.0, g: 253.0, b: 198.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref DENSITY: SchemeData = {
  SchemeData {
    name: "density",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  54.0, g:  14.0, b:  36.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  89.0, g:  23.0, b:  80.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r: 110.0, g:  45.0, b: 132.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 120.0, g:  77.0, b: 178.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 120.0, g: 113.0, b: 213.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 115.0, g: 151.0, b: 228.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 134.0, g: 185.0, b: 227.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 177.0, g: 214.0, b: 227.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 230.0, g: 241.0, b: 241.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref EARTH: SchemeData = {
  SchemeData {
    name: "earth",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b: 130.0, a: 255.}},
      Stop{index: 0.100, rgb: RGBA{r:   0.0, g: 180.0, b: 180.0, a: 255.}},
      Stop{index: 0.200, rgb: RGBA{r:  40.0, g: 210.0, b:  40.0, a: 255.}},
      Stop{index: 0.400, rgb: RGBA{r: 230.0, g: 230.0, b:  50.0, a: 255.}},
      Stop{index: 0.600, rgb: RGBA{r: 120.0, g:  70.0, b:  20.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 255.0, b: 255.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref ELECTRIC: SchemeData = {
  SchemeData {
    name: "electric",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 0.150, rgb: RGBA{r:  30.0, g:   0.0, b: 100.0, a: 255.}},
      Stop{index: 0.400, rgb: RGBA{r: 120.0, g:   0.0, b: 100.0, a: 255.}},
      Stop{index: 0.600, rgb: RGBA{r: 160.0, g:  90.0, b:   0.0, a: 255.}},
      Stop{index: 0.800, rgb: RGBA{r: 230.0, g: 200.0, b:   0.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 250.0, b: 220.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref FREESURFACE_BLUE: SchemeData = {
  SchemeData {
    name: "freesurface-blue",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  30.0, g:   4.0, b: 110.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  47.0, g:  14.0, b: 176.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  41.0, g:  45.0, b: 236.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r:  25.0, g:  99.0, b: 212.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r:  68.0, g: 131.0, b: 200.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 114.0, g: 156.0, b: 197.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 157.0, g: 181.0, b: 203.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 200.0, g: 208.0, b: 216.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 241.0, g: 237.0, b: 236.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref FREESURFACE_RED: SchemeData = {
  SchemeData {
    name: "freesurface-red",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  60.0, g:   9.0, b:  18.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r: 100.0, g:  17.0, b:  27.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r: 142.0, g:  20.0, b:  29.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 177.0, g:  43.0, b:  27.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 192.0, g:  87.0, b:  63.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 205.0, g: 125.0, b: 105.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 216.0, g: 162.0, b: 148.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 227.0, g: 199.0, b: 193.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 241.0, g: 237.0, b: 236.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref GREENS: SchemeData = {
  SchemeData {
    name: "greens",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:  68.0, b:  27.0, a: 255.}},
      Stop{index: 0.125, rgb: RGBA{r:   0.0, g: 109.0, b:  44.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  35.0, g: 139.0, b:  69.0, a: 255.}},
      Stop{index: 0.375, rgb: RGBA{r:  65.0, g: 171.0, b:  93.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 116.0, g: 196.0, b: 118.0, a: 255.}},
      Stop{index: 0.625, rgb: RGBA{r: 161.0, g: 217.0, b: 155.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 199.0, g: 233.0, b: 192.0, a: 255.}},
      Stop{index: 0.875, rgb: RGBA{r: 229.0, g: 245.0, b: 224.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 247.0, g: 252.0, b: 245.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref GREYS: SchemeData = {
  SchemeData {
    name: "greys",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 255.0, b: 255.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref HOT: SchemeData = {
  SchemeData {
    name: "hot",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 0.300, rgb: RGBA{r: 230.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 0.600, rgb: RGBA{r: 255.0, g: 210.0, b:   0.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 255.0, b: 255.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref HSV: SchemeData = {
  SchemeData {
    name: "hsv",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r: 255.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 0.169, rgb: RGBA{r: 253.0, g: 255.0, b:   2.0, a: 255.}},
      Stop{index: 0.173, rgb: RGBA{r: 247.0, g: 255.0, b:   2.0, a: 255.}},
      Stop{index: 0.337, rgb: RGBA{r:   0.0, g: 252.0, b:   4.0, a: 255.}},
      Stop{index: 0.341, rgb: RGBA{r:   0.0, g: 252.0, b:  10.0, a: 255.}},
      Stop{index: 0.506, rgb: RGBA{r:   1.0, g: 249.0, b: 255.0, a: 255.}},
      Stop{index: 0.671, rgb: RGBA{r:   2.0, g:   0.0, b: 253.0, a: 255.}},
      Stop{index: 0.675, rgb: RGBA{r:   8.0, g:   0.0, b: 253.0, a: 255.}},
      Stop{index: 0.839, rgb: RGBA{r: 255.0, g:   0.0, b: 251.0, a: 255.}},
      Stop{index: 0.843, rgb: RGBA{r: 255.0, g:   0.0, b: 245.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g:   0.0, b:   6.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref INFERNO: SchemeData = {
  SchemeData {
    name: "inferno",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b:   4.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  31.0, g:  12.0, b:  72.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  85.0, g:  15.0, b: 109.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 136.0, g:  34.0, b: 106.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 186.0, g:  54.0, b:  85.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 227.0, g:  89.0, b:  51.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 249.0, g: 140.0, b:  10.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 249.0, g: 201.0, b:  50.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 252.0, g: 255.0, b: 164.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref JET: SchemeData = {
  SchemeData {
    name: "jet",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b: 131.0, a: 255.}},
      Stop{index: 0.125, rgb: RGBA{r:   0.0, g:  60.0, b: 170.0, a: 255.}},
      Stop{index: 0.375, rgb: RGBA{r:   5.0, g: 255.0, b: 255.0, a: 255.}},
      Stop{index: 0.625, rgb: RGBA{r: 255.0, g: 255.0, b:   0.0, a: 255.}},
      Stop{index: 0.875, rgb: RGBA{r: 250.0, g:   0.0, b:   0.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 128.0, g:   0.0, b:   0.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref MAGMA: SchemeData = {
  SchemeData {
    name: "magma",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b:   4.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  28.0, g:  16.0, b:  68.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  79.0, g:  18.0, b: 123.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 129.0, g:  37.0, b: 129.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 181.0, g:  54.0, b: 122.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 229.0, g:  80.0, b: 100.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 251.0, g: 135.0, b:  97.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 254.0, g: 194.0, b: 135.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 252.0, g: 253.0, b: 191.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref OXYGEN: SchemeData = {
  SchemeData {
    name: "oxygen",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  64.0, g:   5.0, b:   5.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r: 106.0, g:   6.0, b:  15.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r: 144.0, g:  26.0, b:   7.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 168.0, g:  64.0, b:   3.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 188.0, g: 100.0, b:   4.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 206.0, g: 136.0, b:  11.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 220.0, g: 174.0, b:  25.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 231.0, g: 215.0, b:  44.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 248.0, g: 254.0, b: 105.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref PAR: SchemeData = {
  SchemeData {
    name: "par",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  51.0, g:  20.0, b:  24.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  90.0, g:  32.0, b:  35.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r: 129.0, g:  44.0, b:  34.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 159.0, g:  68.0, b:  25.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 182.0, g:  99.0, b:  19.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 199.0, g: 134.0, b:  22.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 212.0, g: 171.0, b:  35.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 221.0, g: 210.0, b:  54.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 225.0, g: 253.0, b:  75.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref PHASE: SchemeData = {
  SchemeData {
    name: "phase",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r: 145.0, g: 105.0, b:  18.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r: 184.0, g:  71.0, b:  38.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r: 186.0, g:  58.0, b: 115.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 160.0, g:  71.0, b: 185.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 110.0, g:  97.0, b: 218.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r:  50.0, g: 123.0, b: 164.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r:  31.0, g: 131.0, b: 110.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r:  77.0, g: 129.0, b:  34.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 145.0, g: 105.0, b:  18.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref PICNIC: SchemeData = {
  SchemeData {
    name: "picnic",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b: 255.0, a: 255.}},
      Stop{index: 0.100, rgb: RGBA{r:  51.0, g: 153.0, b: 255.0, a: 255.}},
      Stop{index: 0.200, rgb: RGBA{r: 102.0, g: 204.0, b: 255.0, a: 255.}},
      Stop{index: 0.300, rgb: RGBA{r: 153.0, g: 204.0, b: 255.0, a: 255.}},
      Stop{index: 0.400, rgb: RGBA{r: 204.0, g: 204.0, b: 255.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 255.0, g: 255.0, b: 255.0, a: 255.}},
      Stop{index: 0.600, rgb: RGBA{r: 255.0, g: 204.0, b: 255.0, a: 255.}},
      Stop{index: 0.700, rgb: RGBA{r: 255.0, g: 153.0, b: 255.0, a: 255.}},
      Stop{index: 0.800, rgb: RGBA{r: 255.0, g: 102.0, b: 204.0, a: 255.}},
      Stop{index: 0.900, rgb: RGBA{r: 255.0, g: 102.0, b: 102.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g:   0.0, b:   0.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref PLASMA: SchemeData = {
  SchemeData {
    name: "plasma",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  13.0, g:   8.0, b: 135.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  75.0, g:   3.0, b: 161.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r: 125.0, g:   3.0, b: 168.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 168.0, g:  34.0, b: 150.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 203.0, g:  70.0, b: 121.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 229.0, g: 107.0, b:  93.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 248.0, g: 148.0, b:  65.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 253.0, g: 195.0, b:  40.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 240.0, g: 249.0, b:  33.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref PORTLAND: SchemeData = {
  SchemeData {
    name: "portland",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  12.0, g:  51.0, b: 131.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  10.0, g: 136.0, b: 186.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 242.0, g: 211.0, b:  56.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 242.0, g: 143.0, b:  56.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 217.0, g:  30.0, b:  30.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref RAINBOW: SchemeData = {
  SchemeData {
    name: "rainbow",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r: 150.0, g:   0.0, b:  90.0, a: 255.}},
      Stop{index: 0.125, rgb: RGBA{r:   0.0, g:   0.0, b: 200.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:   0.0, g:  25.0, b: 255.0, a: 255.}},
      Stop{index: 0.375, rgb: RGBA{r:   0.0, g: 152.0, b: 255.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r:  44.0, g: 255.0, b: 150.0, a: 255.}},
      Stop{index: 0.625, rgb: RGBA{r: 151.0, g: 255.0, b:   0.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 255.0, g: 234.0, b:   0.0, a: 255.}},
      Stop{index: 0.875, rgb: RGBA{r: 255.0, g: 111.0, b:   0.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g:   0.0, b:   0.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref RAINBOW_SOFT: SchemeData = {
  SchemeData {
    name: "rainbow-soft",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r: 125.0, g:   0.0, b: 179.0, a: 255.}},
      Stop{index: 0.100, rgb: RGBA{r: 199.0, g:   0.0, b: 180.0, a: 255.}},
      Stop{index: 0.200, rgb: RGBA{r: 255.0, g:   0.0, b: 121.0, a: 255.}},
      Stop{index: 0.300, rgb: RGBA{r: 255.0, g: 108.0, b:   0.0, a: 255.}},
      Stop{index: 0.400, rgb: RGBA{r: 222.0, g: 194.0, b:   0.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 150.0, g: 255.0, b:   0.0, a: 255.}},
      Stop{index: 0.600, rgb: RGBA{r:   0.0, g: 255.0, b:  55.0, a: 255.}},
      Stop{index: 0.700, rgb: RGBA{r:   0.0, g: 246.0, b: 150.0, a: 255.}},
      Stop{index: 0.800, rgb: RGBA{r:  50.0, g: 167.0, b: 222.0, a: 255.}},
      Stop{index: 0.900, rgb: RGBA{r: 103.0, g:  51.0, b: 235.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 124.0, g:   0.0, b: 186.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref RDBU: SchemeData = {
  SchemeData {
    name: "rdbu",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   5.0, g:  10.0, b: 172.0, a: 255.}},
      Stop{index: 0.350, rgb: RGBA{r: 106.0, g: 137.0, b: 247.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 190.0, g: 190.0, b: 190.0, a: 255.}},
      Stop{index: 0.600, rgb: RGBA{r: 220.0, g: 170.0, b: 132.0, a: 255.}},
      Stop{index: 0.700, rgb: RGBA{r: 230.0, g: 145.0, b:  90.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 178.0, g:  10.0, b:  28.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref SALINITY: SchemeData = {
  SchemeData {
    name: "salinity",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  42.0, g:  24.0, b: 108.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  33.0, g:  50.0, b: 162.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  15.0, g:  90.0, b: 145.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r:  40.0, g: 118.0, b: 137.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r:  59.0, g: 146.0, b: 135.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r:  79.0, g: 175.0, b: 126.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 120.0, g: 203.0, b: 104.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 193.0, g: 221.0, b: 100.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 253.0, g: 239.0, b: 154.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref SPRING: SchemeData = {
  SchemeData {
    name: "spring",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r: 255.0, g:   0.0, b: 255.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 255.0, b:   0.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref SUMMER: SchemeData = {
  SchemeData {
    name: "summer",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g: 128.0, b: 102.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 255.0, b: 102.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref TEMPERATURE: SchemeData = {
  SchemeData {
    name: "temperature",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   4.0, g:  35.0, b:  51.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  23.0, g:  51.0, b: 122.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  85.0, g:  59.0, b: 157.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 129.0, g:  79.0, b: 143.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 175.0, g:  95.0, b: 130.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 222.0, g: 112.0, b: 101.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 249.0, g: 146.0, b:  66.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 249.0, g: 196.0, b:  65.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 232.0, g: 250.0, b:  91.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref TURBIDITY: SchemeData = {
  SchemeData {
    name: "turbidity",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  34.0, g:  31.0, b:  27.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  65.0, g:  50.0, b:  41.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  98.0, g:  69.0, b:  52.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 131.0, g:  89.0, b:  57.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 161.0, g: 112.0, b:  59.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 185.0, g: 140.0, b:  66.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 202.0, g: 174.0, b:  88.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 216.0, g: 209.0, b: 126.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 233.0, g: 246.0, b: 171.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref VELOCITY_BLUE: SchemeData = {
  SchemeData {
    name: "velocity-blue",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  17.0, g:  32.0, b:  64.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  35.0, g:  52.0, b: 116.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  29.0, g:  81.0, b: 156.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r:  31.0, g: 113.0, b: 162.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r:  50.0, g: 144.0, b: 169.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r:  87.0, g: 173.0, b: 176.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 149.0, g: 196.0, b: 189.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 203.0, g: 221.0, b: 211.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 254.0, g: 251.0, b: 230.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref VELOCITY_GREEN: SchemeData = {
  SchemeData {
    name: "velocity-green",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  23.0, g:  35.0, b:  19.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  24.0, g:  64.0, b:  38.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  11.0, g:  95.0, b:  45.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r:  39.0, g: 123.0, b:  35.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r:  95.0, g: 146.0, b:  12.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 152.0, g: 165.0, b:  18.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 201.0, g: 186.0, b:  69.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 233.0, g: 216.0, b: 137.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 253.0, b: 205.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref VIRIDIS: SchemeData = {
  SchemeData {
    name: "viridis",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:  68.0, g:   1.0, b:  84.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r:  71.0, g:  44.0, b: 122.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  59.0, g:  81.0, b: 139.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r:  44.0, g: 113.0, b: 142.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r:  33.0, g: 144.0, b: 141.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r:  39.0, g: 173.0, b: 129.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r:  92.0, g: 200.0, b:  99.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 170.0, g: 220.0, b:  50.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 253.0, g: 231.0, b:  37.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref WARM: SchemeData = {
  SchemeData {
    name: "warm",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r: 125.0, g:   0.0, b: 179.0, a: 255.}},
      Stop{index: 0.130, rgb: RGBA{r: 172.0, g:   0.0, b: 187.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r: 219.0, g:   0.0, b: 170.0, a: 255.}},
      Stop{index: 0.380, rgb: RGBA{r: 255.0, g:   0.0, b: 130.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 255.0, g:  63.0, b:  74.0, a: 255.}},
      Stop{index: 0.630, rgb: RGBA{r: 255.0, g: 123.0, b:   0.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 234.0, g: 176.0, b:   0.0, a: 255.}},
      Stop{index: 0.880, rgb: RGBA{r: 190.0, g: 228.0, b:   0.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 147.0, g: 255.0, b:   0.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref WINTER: SchemeData = {
  SchemeData {
    name: "winter",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   0.0, g:   0.0, b: 255.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r:   0.0, g: 255.0, b: 128.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref YIGNBU: SchemeData = {
  SchemeData {
    name: "yignbu",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r:   8.0, g:  29.0, b:  88.0, a: 255.}},
      Stop{index: 0.125, rgb: RGBA{r:  37.0, g:  52.0, b: 148.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r:  34.0, g:  94.0, b: 168.0, a: 255.}},
      Stop{index: 0.375, rgb: RGBA{r:  29.0, g: 145.0, b: 192.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r:  65.0, g: 182.0, b: 196.0, a: 255.}},
      Stop{index: 0.625, rgb: RGBA{r: 127.0, g: 205.0, b: 187.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 199.0, g: 233.0, b: 180.0, a: 255.}},
      Stop{index: 0.875, rgb: RGBA{r: 237.0, g: 248.0, b: 217.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 255.0, b: 217.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref YIORRD: SchemeData = {
  SchemeData {
    name: "yiorrd",
    stops: vec![
      Stop{index: 0.000, rgb: RGBA{r: 128.0, g:   0.0, b:  38.0, a: 255.}},
      Stop{index: 0.125, rgb: RGBA{r: 189.0, g:   0.0, b:  38.0, a: 255.}},
      Stop{index: 0.250, rgb: RGBA{r: 227.0, g:  26.0, b:  28.0, a: 255.}},
      Stop{index: 0.375, rgb: RGBA{r: 252.0, g:  78.0, b:  42.0, a: 255.}},
      Stop{index: 0.500, rgb: RGBA{r: 253.0, g: 141.0, b:  60.0, a: 255.}},
      Stop{index: 0.625, rgb: RGBA{r: 254.0, g: 178.0, b:  76.0, a: 255.}},
      Stop{index: 0.750, rgb: RGBA{r: 254.0, g: 217.0, b: 118.0, a: 255.}},
      Stop{index: 0.875, rgb: RGBA{r: 255.0, g: 237.0, b: 160.0, a: 255.}},
      Stop{index: 1.000, rgb: RGBA{r: 255.0, g: 255.0, b: 204.0, a: 255.}},
    ]}
  };
}

lazy_static! {
  pub(crate) static ref ALL_SCHEMES: [&'static SchemeData; 43] = {
    [AUTUMN.deref(),
     BATHYMETRY.deref(),
     BLACKBODY.deref(),
     BLUERED.deref(),
     BONE.deref(),
     CDOM.deref(),
     CHLOROPHYLL.deref(),
     COOL.deref(),
     COPPER.deref(),
     CUBEHELIX.deref(),
     DENSITY.deref(),
     EARTH.deref(),
     ELECTRIC.deref(),
     FREESURFACE_BLUE.deref(),
     FREESURFACE_RED.deref(),
     GREENS.deref(),
     GREYS.deref(),
     HOT.deref(),
     HSV.deref(),
     INFERNO.deref(),
     JET.deref(),
     MAGMA.deref(),
     OXYGEN.deref(),
     PAR.deref(),
     PHASE.deref(),
     PICNIC.deref(),
     PLASMA.deref(),
     PORTLAND.deref(),
     RAINBOW.deref(),
     RAINBOW_SOFT.deref(),
     RDBU.deref(),
     SALINITY.deref(),
     SPRING.deref(),
     SUMMER.deref(),
     TEMPERATURE.deref(),
     TURBIDITY.deref(),
     VELOCITY_BLUE.deref(),
     VELOCITY_GREEN.deref(),
     VIRIDIS.deref(),
     WARM.deref(),
     WINTER.deref(),
     YIGNBU.deref(),
     YIORRD.deref()]
  };
}
