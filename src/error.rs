//! Error types
//!
//! Configuration problems are caught while profiles and outputs are built.
//! Mixing itself never fails, it saturates at gamut and range boundaries.

use thiserror::Error;

/// Invalid calibration data passed to a profile or output constructor.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("chromaticity ({x}, {y}) is outside [0, 0.75] x [0, 0.85]")]
    XyOutOfRange { x: f32, y: f32 },

    #[error("wavelength {0} nm is outside [360, 830]")]
    WavelengthOutOfRange(f32),

    #[error("color temperature {0} K is outside [1000, 25000]")]
    ColorTemperatureOutOfRange(f32),

    #[error("gamma must be positive and finite, got {0}")]
    InvalidGamma(f32),

    #[error("intensity {0} is outside [0, 1]")]
    IntensityOutOfRange(f32),

    #[error("minimum intensity {min} exceeds maximum {max}")]
    InvertedIntensityRange { min: f32, max: f32 },

    #[error("duv {0} is outside [0, 0.8]")]
    DuvOutOfRange(f32),

    #[error("mired impurity {0} must be finite and non-negative")]
    InvalidMiredShift(f32),

    #[error("all primaries must come from the same standard gamut")]
    PartialStandardGamut,

    #[error("primaries are collinear or coincident")]
    DegenerateGamut,

    #[error("warm white {warm} K must be lower than cold white {cold} K")]
    InvertedWhiteRange { warm: f32, cold: f32 },
}

/// Invalid argument passed directly to a chromaticity utility.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RangeError {
    #[error("wavelength {0} nm is outside [360, 830]")]
    Wavelength(f32),

    #[error("color temperature {0} K is outside [1000, 25000]")]
    ColorTemperature(f32),
}

impl From<RangeError> for ConfigError {
    fn from(err: RangeError) -> Self {
        match err {
            RangeError::Wavelength(nm) => Self::WavelengthOutOfRange(nm),
            RangeError::ColorTemperature(kelvin) => Self::ColorTemperatureOutOfRange(kelvin),
        }
    }
}

/// Command rejected by a [`LightControl`](crate::LightControl).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("command is not supported by control type {0}")]
    Unsupported(&'static str),

    #[error("command carries a non-finite value")]
    NotFinite,
}
