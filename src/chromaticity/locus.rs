//! Spectral locus
//!
//! CIE 1931 2° standard observer, tabulated from 380 nm to 780 nm in 5 nm
//! steps. Wavelengths between the table samples are interpolated linearly in
//! XYZ before projecting onto the chromaticity plane.

use super::{Xy, Xyz};
use crate::error::RangeError;

pub const MIN_WAVELENGTH_NM: f32 = 360.0;
pub const MAX_WAVELENGTH_NM: f32 = 830.0;

const TABLE_START_NM: f32 = 380.0;
const TABLE_STEP_NM: f32 = 5.0;

/// `[x̄, ȳ, z̄]` per sample.
const CMF: [[f32; 3]; 81] = [
    [0.001_368, 0.000_039, 0.006_450],
    [0.002_236, 0.000_064, 0.010_550],
    [0.004_243, 0.000_120, 0.020_050],
    [0.007_650, 0.000_217, 0.036_210],
    [0.014_310, 0.000_396, 0.067_850],
    [0.023_190, 0.000_640, 0.110_200],
    [0.043_510, 0.001_210, 0.207_400],
    [0.077_630, 0.002_180, 0.371_300],
    [0.134_380, 0.004_000, 0.645_600],
    [0.214_770, 0.007_300, 1.039_050],
    [0.283_900, 0.011_600, 1.385_600],
    [0.328_500, 0.016_840, 1.622_960],
    [0.348_280, 0.023_000, 1.747_060],
    [0.348_060, 0.029_800, 1.782_600],
    [0.336_200, 0.038_000, 1.772_110],
    [0.318_700, 0.048_000, 1.744_100],
    [0.290_800, 0.060_000, 1.669_200],
    [0.251_100, 0.073_900, 1.528_100],
    [0.195_360, 0.090_980, 1.287_640],
    [0.142_100, 0.112_600, 1.041_900],
    [0.095_640, 0.139_020, 0.812_950],
    [0.058_010, 0.169_300, 0.616_200],
    [0.032_010, 0.208_020, 0.465_180],
    [0.014_700, 0.258_600, 0.353_300],
    [0.004_900, 0.323_000, 0.272_000],
    [0.002_400, 0.407_300, 0.212_300],
    [0.009_300, 0.503_000, 0.158_200],
    [0.029_100, 0.608_200, 0.111_700],
    [0.063_270, 0.710_000, 0.078_250],
    [0.109_600, 0.793_200, 0.057_250],
    [0.165_500, 0.862_000, 0.042_160],
    [0.225_750, 0.914_850, 0.029_840],
    [0.290_400, 0.954_000, 0.020_300],
    [0.359_700, 0.980_300, 0.013_400],
    [0.433_450, 0.994_950, 0.008_750],
    [0.512_050, 1.000_000, 0.005_750],
    [0.594_500, 0.995_000, 0.003_900],
    [0.678_400, 0.978_600, 0.002_750],
    [0.762_100, 0.952_000, 0.002_100],
    [0.842_500, 0.915_400, 0.001_800],
    [0.916_300, 0.870_000, 0.001_650],
    [0.978_600, 0.816_300, 0.001_400],
    [1.026_300, 0.757_000, 0.001_100],
    [1.056_700, 0.694_900, 0.001_000],
    [1.062_200, 0.631_000, 0.000_800],
    [1.045_600, 0.566_800, 0.000_600],
    [1.002_600, 0.503_000, 0.000_340],
    [0.938_400, 0.441_200, 0.000_240],
    [0.854_450, 0.381_000, 0.000_190],
    [0.751_400, 0.321_000, 0.000_100],
    [0.642_400, 0.265_000, 0.000_050],
    [0.541_900, 0.217_000, 0.000_030],
    [0.447_900, 0.175_000, 0.000_020],
    [0.360_800, 0.138_200, 0.000_010],
    [0.283_500, 0.107_000, 0.000_000],
    [0.218_700, 0.081_600, 0.000_000],
    [0.164_900, 0.061_000, 0.000_000],
    [0.121_200, 0.044_580, 0.000_000],
    [0.087_400, 0.032_000, 0.000_000],
    [0.063_600, 0.023_200, 0.000_000],
    [0.046_770, 0.017_000, 0.000_000],
    [0.032_900, 0.011_920, 0.000_000],
    [0.022_700, 0.008_210, 0.000_000],
    [0.015_840, 0.005_723, 0.000_000],
    [0.011_359, 0.004_102, 0.000_000],
    [0.008_111, 0.002_929, 0.000_000],
    [0.005_790, 0.002_091, 0.000_000],
    [0.004_109, 0.001_484, 0.000_000],
    [0.002_899, 0.001_047, 0.000_000],
    [0.002_049, 0.000_740, 0.000_000],
    [0.001_440, 0.000_520, 0.000_000],
    [0.001_000, 0.000_361, 0.000_000],
    [0.000_690, 0.000_249, 0.000_000],
    [0.000_476, 0.000_172, 0.000_000],
    [0.000_332, 0.000_120, 0.000_000],
    [0.000_235, 0.000_085, 0.000_000],
    [0.000_166, 0.000_060, 0.000_000],
    [0.000_117, 0.000_042, 0.000_000],
    [0.000_083, 0.000_030, 0.000_000],
    [0.000_059, 0.000_021, 0.000_000],
    [0.000_042, 0.000_015, 0.000_000],
];

/// Chromaticity of a monochromatic source.
///
/// Accepts `[360, 830]` nm. Below 380 nm and above 780 nm the locus is flat
/// to within a few thousandths, so those wavelengths share the table's end
/// points.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn wavelength_to_xy(nm: f32) -> Result<Xy, RangeError> {
    if !nm.is_finite() || !(MIN_WAVELENGTH_NM..=MAX_WAVELENGTH_NM).contains(&nm) {
        return Err(RangeError::Wavelength(nm));
    }

    let last = CMF.len() - 1;
    let pos = ((nm - TABLE_START_NM) / TABLE_STEP_NM).clamp(0.0, last as f32);
    let index = (pos as usize).min(last - 1);
    let frac = pos - index as f32;

    let [x0, y0, z0] = CMF[index];
    let [x1, y1, z1] = CMF[index + 1];
    let xyz = Xyz {
        x: x0 + (x1 - x0) * frac,
        y: y0 + (y1 - y0) * frac,
        z: z0 + (z1 - z0) * frac,
    };

    // Every sample has a non-zero x̄, so the projection is always defined.
    Ok(xyz.to_xy().unwrap_or_default())
}
