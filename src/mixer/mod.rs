//! Channel mixing
//!
//! Solves for the linear channel weights that reproduce a target color with
//! a given profile. Weights are not gamma encoded or clamped here, that is
//! the job of the [`shaper`](crate::shaper).

mod composite;
mod cwww;
mod rgb;
mod white;

pub use composite::{CompositeMix, RgbCwwwMix, mix_rgb_cwww, mix_rgbw};
pub use cwww::{CwwwMix, mix_cwww};
pub use rgb::{RgbMix, gamut_weights, mix_rgb};
pub use white::{WhiteMix, mix_white};

use crate::chromaticity::{ColorTemperature, Xy, white_locus_xy, xy_to_cct};

/// Requested color, either a chromaticity or a white temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MixTarget {
    Xy(Xy),
    /// Correlated color temperature in Kelvin.
    Cct(f32),
}

impl MixTarget {
    pub fn xy(self) -> Xy {
        match self {
            Self::Xy(xy) => xy,
            Self::Cct(kelvin) => white_locus_xy(ColorTemperature::from_kelvin(kelvin)),
        }
    }

    pub fn color_temperature(self) -> ColorTemperature {
        match self {
            Self::Xy(xy) => ColorTemperature::from_kelvin(xy_to_cct(xy)),
            Self::Cct(kelvin) => ColorTemperature::from_kelvin(kelvin).saturate(),
        }
    }
}

impl From<Xy> for MixTarget {
    fn from(xy: Xy) -> Self {
        Self::Xy(xy)
    }
}

/// Brightness in `[0, 1]`, NaN and negative values are off.
pub fn normalize_brightness(brightness: f32) -> f32 {
    if brightness.is_nan() || brightness <= 0.0 {
        0.0
    } else {
        brightness.min(1.0)
    }
}
