//! Color temperature and tint
//!
//! Planckian locus after Krystek (1985), CIE daylight locus, McCamy's CCT
//! estimate and Ohno's duv approximation.

use super::{ColorTemperature, MAX_KELVIN, MIN_KELVIN, Uv, Xy};
use crate::error::RangeError;

/// Upper end of the pure Planckian segment of [`cct_to_xy`].
const PLANCKIAN_LIMIT_K: f64 = 4000.0;
/// Lower end of the pure daylight segment of [`cct_to_xy`].
const DAYLIGHT_LIMIT_K: f64 = 5000.0;

/// Side of the Planckian locus a tint moves towards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TintDirection {
    /// Above the locus (positive duv).
    Green,
    /// Below the locus (negative duv), also called magenta.
    Purple,
}

/// Krystek's rational approximation of the Planckian locus in CIE 1960 uv.
fn krystek_uv(kelvin: f64) -> (f64, f64) {
    let t = kelvin;
    let t2 = t * t;
    let u = (0.860_117_757 + 1.541_182_54e-4 * t + 1.286_412_12e-7 * t2)
        / (1.0 + 8.424_202_35e-4 * t + 7.081_451_63e-7 * t2);
    let v = (0.317_398_726 + 4.228_062_45e-5 * t + 4.204_816_91e-8 * t2)
        / (1.0 - 2.897_418_16e-5 * t + 1.614_560_53e-7 * t2);
    (u, v)
}

fn uv_to_xy(u: f64, v: f64) -> (f64, f64) {
    let denom = 2.0 * u - 8.0 * v + 4.0;
    (3.0 * u / denom, 2.0 * v / denom)
}

fn daylight_xy(kelvin: f64) -> (f64, f64) {
    let t = kelvin;
    let x = if t <= 7000.0 {
        -4.6070e9 / (t * t * t) + 2.9678e6 / (t * t) + 0.099_11e3 / t + 0.244_063
    } else {
        -2.0064e9 / (t * t * t) + 1.9018e6 / (t * t) + 0.247_48e3 / t + 0.237_040
    };
    let y = -3.0 * x * x + 2.870 * x - 0.275;
    (x, y)
}

#[allow(clippy::cast_possible_truncation)]
fn to_xy((x, y): (f64, f64)) -> Xy {
    Xy::saturating(x as f32, y as f32)
}

/// Point on the Planckian locus, temperature saturated into `[1000, 25000]`.
pub fn planckian_xy(kelvin: f32) -> Xy {
    let kelvin = f64::from(ColorTemperature::from_kelvin(kelvin).saturate().kelvin());
    let (u, v) = krystek_uv(kelvin);
    to_xy(uv_to_xy(u, v))
}

/// Chromaticity of a white source rated at `kelvin`.
///
/// Follows the Planckian locus up to 4000 K and the CIE daylight locus from
/// 5000 K, blending linearly in mired in between. Accepts `[1000, 25000]` K.
pub fn cct_to_xy(kelvin: f32) -> Result<Xy, RangeError> {
    let temperature = ColorTemperature::new(kelvin)?;
    Ok(white_locus_xy(temperature))
}

/// Infallible form of [`cct_to_xy`], saturating the temperature first.
pub(crate) fn white_locus_xy(temperature: ColorTemperature) -> Xy {
    let k = f64::from(temperature.saturate().kelvin());

    let planck = || {
        let (u, v) = krystek_uv(k);
        uv_to_xy(u, v)
    };

    let xy = if k <= PLANCKIAN_LIMIT_K {
        planck()
    } else if k >= DAYLIGHT_LIMIT_K {
        daylight_xy(k)
    } else {
        let (px, py) = planck();
        let (dx, dy) = daylight_xy(k);
        let t = (1.0e6 / PLANCKIAN_LIMIT_K - 1.0e6 / k)
            / (1.0e6 / PLANCKIAN_LIMIT_K - 1.0e6 / DAYLIGHT_LIMIT_K);
        (px + (dx - px) * t, py + (dy - py) * t)
    };

    to_xy(xy)
}

/// McCamy's cubic estimate of the correlated color temperature.
///
/// Saturates into `[1000, 25000]` K; points far from the locus get a value
/// that is only meaningful as an ordering.
pub fn xy_to_cct(xy: Xy) -> f32 {
    let n = (xy.x() - 0.3320) / (xy.y() - 0.1858);
    let cct = -449.0 * n * n * n + 3525.0 * n * n - 6823.3 * n + 5520.33;
    if cct.is_nan() {
        return MAX_KELVIN;
    }
    cct.clamp(MIN_KELVIN, MAX_KELVIN)
}

/// Signed distance from the Planckian locus in CIE 1960 uv (Ohno 2011).
///
/// Positive values lie above the locus (green), negative below (purple).
pub fn duv(xy: Xy) -> f32 {
    const K: [f32; 7] = [
        -0.471_106,
        1.925_865,
        -2.424_378_7,
        1.531_740_3,
        -0.517_972_2,
        0.089_394_4,
        -0.006_167_93,
    ];

    let Uv { u, v } = xy.to_uv();
    let du = u - 0.292;
    let dv = v - 0.24;
    let lfp = libm::sqrtf(du * du + dv * dv);
    if lfp <= f32::EPSILON {
        return 0.0;
    }
    let a = libm::acosf((du / lfp).clamp(-1.0, 1.0));

    // Horner over k6..k0
    let lbb = K.iter().rev().fold(0.0, |acc, k| acc * a + k);
    lfp - lbb
}

/// Unit normal of the Planckian locus at `kelvin`, as `(sin, cos)`.
fn locus_normal(kelvin: f64) -> (f64, f64) {
    let (u0, v0) = krystek_uv(kelvin);
    let (u1, v1) = krystek_uv(kelvin + 1.0);
    let du = u0 - u1;
    let dv = v0 - v1;
    let len = libm::sqrt(du * du + dv * dv);
    (dv / len, du / len)
}

/// Moves `xy` perpendicular to the Planckian locus by `|duv|`.
///
/// The normal is taken at the point's own correlated color temperature.
#[allow(clippy::cast_possible_truncation)]
pub fn duv_offset(xy: Xy, duv: f32, direction: TintDirection) -> Xy {
    let magnitude = f64::from(libm::fabsf(duv));
    if magnitude == 0.0 || magnitude.is_nan() {
        return xy;
    }
    let signed = match direction {
        TintDirection::Green => magnitude,
        TintDirection::Purple => -magnitude,
    };

    let (sin, cos) = locus_normal(f64::from(xy_to_cct(xy)));
    let Uv { u, v } = xy.to_uv();
    Xy::from(Uv {
        u: (f64::from(u) - signed * sin) as f32,
        v: (f64::from(v) + signed * cos) as f32,
    })
}

/// Moves `xy` parallel to the Planckian locus by a mired amount.
///
/// Positive `mired` moves towards warmer temperatures. The tint of the point
/// is preserved because the displacement is the one between the two locus
/// points.
#[allow(clippy::cast_possible_truncation)]
pub fn shift_along_locus(xy: Xy, mired: f32) -> Xy {
    if mired == 0.0 || mired.is_nan() {
        return xy;
    }
    let from = ColorTemperature::from_kelvin(xy_to_cct(xy));
    let to = from.add_mired(mired).saturate();

    let (u0, v0) = krystek_uv(f64::from(from.kelvin()));
    let (u1, v1) = krystek_uv(f64::from(to.kelvin()));
    let Uv { u, v } = xy.to_uv();
    Xy::from(Uv {
        u: (f64::from(u) + (u1 - u0)) as f32,
        v: (f64::from(v) + (v1 - v0)) as f32,
    })
}
