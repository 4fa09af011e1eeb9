use smart_leds::RGB;

use crate::chromaticity::{ColorTemperature, MAX_KELVIN, MIN_KELVIN, Xy};
use crate::error::ConfigError;

/// Normalized request from the light abstraction layer.
///
/// Brightness values are in `[0, 1]`, out of range values are clamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightCommand {
    Xy { xy: Xy, brightness: f32 },
    ColorTemperature { kelvin: f32, brightness: f32 },
    /// Hue in degrees, saturation in `[0, 1]`.
    HueSaturation {
        hue: f32,
        saturation: f32,
        brightness: f32,
    },
    /// Gamma encoded RGB in the source profile's color space.
    Rgb { color: RGB<f32>, brightness: f32 },
    /// Keeps the current chromaticity.
    Brightness(f32),
}

impl LightCommand {
    pub(crate) fn is_finite(&self) -> bool {
        match *self {
            Self::Xy { brightness, .. } => !brightness.is_nan(),
            Self::ColorTemperature { kelvin, brightness } => {
                kelvin.is_finite() && !brightness.is_nan()
            }
            Self::HueSaturation {
                hue,
                saturation,
                brightness,
            } => hue.is_finite() && !saturation.is_nan() && !brightness.is_nan(),
            Self::Rgb { color, brightness } => {
                !color.r.is_nan() && !color.g.is_nan() && !color.b.is_nan() && !brightness.is_nan()
            }
            Self::Brightness(brightness) => !brightness.is_nan(),
        }
    }

    /// Applying `self` right after `pending` gives the same state as
    /// applying `self` alone.
    pub(crate) fn supersedes(&self, pending: &Self) -> bool {
        if !self.is_finite() {
            return false;
        }
        match (self, pending) {
            (Self::Brightness(_), Self::Brightness(_))
            | (Self::Xy { .. }, Self::Xy { .. })
            | (Self::ColorTemperature { .. }, Self::ColorTemperature { .. })
            | (Self::HueSaturation { .. }, Self::HueSaturation { .. }) => true,
            // Black keeps the chromaticity `pending` sets.
            (Self::Rgb { color, .. }, Self::Rgb { .. }) => {
                color.r > 0.0 || color.g > 0.0 || color.b > 0.0
            }
            _ => false,
        }
    }
}

/// Color temperatures a light accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorTemperatureRange {
    coldest: ColorTemperature,
    warmest: ColorTemperature,
}

impl ColorTemperatureRange {
    /// Every supported temperature.
    pub const FULL: Self = Self {
        coldest: ColorTemperature::from_kelvin(MAX_KELVIN),
        warmest: ColorTemperature::from_kelvin(MIN_KELVIN),
    };

    /// The bounds may be given in either order.
    pub fn new(a_kelvin: f32, b_kelvin: f32) -> Result<Self, ConfigError> {
        let a = ColorTemperature::new(a_kelvin)?;
        let b = ColorTemperature::new(b_kelvin)?;
        let (coldest, warmest) = if a.mired() <= b.mired() { (a, b) } else { (b, a) };
        Ok(Self { coldest, warmest })
    }

    pub const fn coldest(&self) -> ColorTemperature {
        self.coldest
    }

    pub const fn warmest(&self) -> ColorTemperature {
        self.warmest
    }

    /// Saturates a temperature into the range.
    pub fn clamp(&self, kelvin: f32) -> ColorTemperature {
        let mired = ColorTemperature::from_kelvin(kelvin).mired();
        ColorTemperature::from_mired(mired.clamp(self.coldest.mired(), self.warmest.mired()))
    }
}

impl Default for ColorTemperatureRange {
    fn default() -> Self {
        Self::FULL
    }
}

/// HSV with hue in degrees and saturation and value in `[0, 1]`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn hsv_to_rgb(hue: f32, saturation: f32, value: f32) -> RGB<f32> {
    let hue = libm::fmodf(hue, 360.0);
    let hue = if hue < 0.0 { hue + 360.0 } else { hue };
    let saturation = saturation.clamp(0.0, 1.0);
    let value = value.clamp(0.0, 1.0);

    let chroma = value * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - libm::fabsf(libm::fmodf(sector, 2.0) - 1.0));
    let m = value - chroma;

    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    RGB::new(r + m, g + m, b + m)
}
