//! Calibration profiles
//!
//! A profile is built once from a config struct whose optional fields are
//! resolved and validated up front. After construction it is immutable and
//! meant to be shared by reference between outputs.

mod cwww;
mod rgb;
mod white;

pub use cwww::{CwwwProfile, CwwwProfileConfig};
pub use rgb::{Primary, PrimaryConfig, PrimarySource, RgbProfile, RgbProfileConfig};
pub use white::{WhiteProfile, WhiteProfileConfig};

use crate::chromaticity::{
    ColorTemperature, TintDirection, Xy, cct_to_xy, duv_offset, shift_along_locus,
};
use crate::error::ConfigError;
use crate::shaper::validate_limits;

/// Largest accepted tint impurity.
const MAX_DUV: f32 = 0.8;

/// Neutral reference point of a profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WhitePoint {
    Xy { x: f32, y: f32 },
    /// Correlated color temperature in Kelvin.
    Cct(f32),
}

impl WhitePoint {
    pub(crate) fn resolve(self) -> Result<Xy, ConfigError> {
        match self {
            Self::Xy { x, y } => Xy::new(x, y),
            Self::Cct(kelvin) => Ok(cct_to_xy(kelvin)?),
        }
    }
}

/// Optional clamp range of a channel, defaults to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntensityLimits {
    pub min: Option<f32>,
    pub max: Option<f32>,
}

impl IntensityLimits {
    pub const UNSET: Self = Self {
        min: None,
        max: None,
    };

    pub const fn new(min: f32, max: f32) -> Self {
        Self {
            min: Some(min),
            max: Some(max),
        }
    }

    pub(crate) fn resolve(self) -> Result<(f32, f32), ConfigError> {
        validate_limits(self.min.unwrap_or(0.0), self.max.unwrap_or(1.0))
    }
}

/// Empirical deviation of a white LED from an ideal blackbody.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImpurityConfig {
    /// Tint above the Planckian locus, in duv.
    pub green_tint_duv: Option<f32>,
    /// Tint below the Planckian locus, in duv.
    pub purple_tint_duv: Option<f32>,
    /// Shift towards warmer temperatures, in mired.
    pub red_shift_mired: Option<f32>,
    /// Shift towards colder temperatures, in mired.
    pub blue_shift_mired: Option<f32>,
    /// Exponent shaping how the impurity fades.
    pub decay_gamma: Option<f32>,
}

impl ImpurityConfig {
    /// An ideal blackbody emitter.
    pub const NONE: Self = Self {
        green_tint_duv: None,
        purple_tint_duv: None,
        red_shift_mired: None,
        blue_shift_mired: None,
        decay_gamma: None,
    };
}

/// Resolved [`ImpurityConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Impurity {
    pub green_tint_duv: f32,
    pub purple_tint_duv: f32,
    pub red_shift_mired: f32,
    pub blue_shift_mired: f32,
    pub decay_gamma: f32,
}

impl Impurity {
    pub(crate) fn resolve(
        config: &ImpurityConfig,
        default_decay_gamma: f32,
    ) -> Result<Self, ConfigError> {
        let decay_gamma = config.decay_gamma.unwrap_or(default_decay_gamma);
        if !decay_gamma.is_finite() || decay_gamma <= 0.0 {
            return Err(ConfigError::InvalidGamma(decay_gamma));
        }

        Ok(Self {
            green_tint_duv: validate_duv(config.green_tint_duv.unwrap_or(0.0))?,
            purple_tint_duv: validate_duv(config.purple_tint_duv.unwrap_or(0.0))?,
            red_shift_mired: validate_mired(config.red_shift_mired.unwrap_or(0.0))?,
            blue_shift_mired: validate_mired(config.blue_shift_mired.unwrap_or(0.0))?,
            decay_gamma,
        })
    }

    /// Attenuation for a raw closeness value in `[0, 1]`.
    pub fn attenuation(&self, closeness: f32) -> f32 {
        libm::powf(closeness.clamp(0.0, 1.0), self.decay_gamma)
    }

    /// Displaces `xy` by every impurity term scaled by `factor`.
    pub fn apply(&self, xy: Xy, factor: f32) -> Xy {
        if factor <= 0.0 || factor.is_nan() {
            return xy;
        }
        let mired = (self.red_shift_mired - self.blue_shift_mired) * factor;
        let shifted = shift_along_locus(xy, mired);
        let shifted = duv_offset(shifted, self.green_tint_duv * factor, TintDirection::Green);
        duv_offset(shifted, self.purple_tint_duv * factor, TintDirection::Purple)
    }
}

fn validate_duv(duv: f32) -> Result<f32, ConfigError> {
    if (0.0..=MAX_DUV).contains(&duv) {
        Ok(duv)
    } else {
        Err(ConfigError::DuvOutOfRange(duv))
    }
}

fn validate_mired(mired: f32) -> Result<f32, ConfigError> {
    if mired.is_finite() && mired >= 0.0 {
        Ok(mired)
    } else {
        Err(ConfigError::InvalidMiredShift(mired))
    }
}

pub(crate) fn validate_kelvin(kelvin: f32) -> Result<ColorTemperature, ConfigError> {
    Ok(ColorTemperature::new(kelvin)?)
}
