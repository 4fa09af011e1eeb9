use smart_leds::RGB;

use super::{IntensityLimits, WhitePoint};
use crate::chromaticity::{Gamut, StandardGamut, Transfer, Xy, illuminant, wavelength_to_xy};
use crate::error::ConfigError;
use crate::shaper::{ChannelShape, validate_gamma, validate_intensity};

/// Where a primary's chromaticity comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PrimarySource {
    Xy { x: f32, y: f32 },
    /// Dominant wavelength in nanometers.
    Wavelength(f32),
    /// The matching vertex of a standard gamut. All three primaries must name
    /// the same gamut.
    Standard(StandardGamut),
}

/// Calibration of one RGB primary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrimaryConfig {
    pub source: PrimarySource,
    /// Relative weighting of the channel, defaults to 1.
    pub intensity: Option<f32>,
    pub limits: IntensityLimits,
    /// Overrides the profile gamma for this channel.
    pub gamma: Option<f32>,
}

impl PrimaryConfig {
    pub const fn new(source: PrimarySource) -> Self {
        Self {
            source,
            intensity: None,
            limits: IntensityLimits::UNSET,
            gamma: None,
        }
    }

    #[must_use]
    pub const fn with_intensity(mut self, intensity: f32) -> Self {
        self.intensity = Some(intensity);
        self
    }

    #[must_use]
    pub const fn with_limits(mut self, min: f32, max: f32) -> Self {
        self.limits = IntensityLimits::new(min, max);
        self
    }

    #[must_use]
    pub const fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = Some(gamma);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbProfileConfig {
    pub red: PrimaryConfig,
    pub green: PrimaryConfig,
    pub blue: PrimaryConfig,
    /// Defaults to the standard gamut's white, or D65 for custom primaries.
    pub white_point: Option<WhitePoint>,
    /// Output gamma, defaults to 1.
    pub gamma: Option<f32>,
}

impl RgbProfileConfig {
    /// All three primaries from one standard gamut.
    pub const fn standard(gamut: StandardGamut) -> Self {
        Self::custom(
            PrimarySource::Standard(gamut),
            PrimarySource::Standard(gamut),
            PrimarySource::Standard(gamut),
        )
    }

    pub const fn custom(red: PrimarySource, green: PrimarySource, blue: PrimarySource) -> Self {
        Self {
            red: PrimaryConfig::new(red),
            green: PrimaryConfig::new(green),
            blue: PrimaryConfig::new(blue),
            white_point: None,
            gamma: None,
        }
    }
}

/// Resolved primary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Primary {
    pub xy: Xy,
    pub intensity: f32,
    pub shape: ChannelShape,
}

/// Three calibrated primaries forming a gamut triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbProfile {
    gamut: Gamut,
    primaries: [Primary; 3],
    gamma: f32,
    transfer: Transfer,
    standard: Option<StandardGamut>,
}

impl RgbProfile {
    pub fn new(config: &RgbProfileConfig) -> Result<Self, ConfigError> {
        let configs = [config.red, config.green, config.blue];
        let standard = shared_standard(&configs)?;

        let gamma = validate_gamma(config.gamma.unwrap_or(1.0))?;
        let transfer = match (config.gamma, standard) {
            (Some(gamma), _) => Transfer::Power(gamma),
            (None, Some(gamut)) => gamut.transfer(),
            (None, None) => Transfer::Linear,
        };

        let mut primaries = [Primary {
            xy: Xy::default(),
            intensity: 1.0,
            shape: ChannelShape::LINEAR,
        }; 3];
        for (index, (primary, primary_config)) in primaries.iter_mut().zip(configs).enumerate() {
            *primary = resolve_primary(&primary_config, index, gamma)?;
        }

        let white = match (config.white_point, standard) {
            (Some(white_point), _) => white_point.resolve()?,
            (None, Some(gamut)) => gamut.gamut().white,
            (None, None) => illuminant::D65,
        };

        let gamut = Gamut::new(primaries[0].xy, primaries[1].xy, primaries[2].xy, white);
        if gamut.is_degenerate() || gamut.rgb_to_xyz().is_none() {
            return Err(ConfigError::DegenerateGamut);
        }

        Ok(Self {
            gamut,
            primaries,
            gamma,
            transfer,
            standard,
        })
    }

    /// Linear profile of a standard gamut.
    pub fn standard(gamut: StandardGamut) -> Self {
        let resolved = gamut.gamut();
        let primary = |xy| Primary {
            xy,
            intensity: 1.0,
            shape: ChannelShape::LINEAR,
        };
        Self {
            gamut: resolved,
            primaries: [
                primary(resolved.red),
                primary(resolved.green),
                primary(resolved.blue),
            ],
            gamma: 1.0,
            transfer: gamut.transfer(),
            standard: Some(gamut),
        }
    }

    pub const fn gamut(&self) -> &Gamut {
        &self.gamut
    }

    pub const fn white_point(&self) -> Xy {
        self.gamut.white
    }

    pub const fn primaries(&self) -> &[Primary; 3] {
        &self.primaries
    }

    pub const fn gamma(&self) -> f32 {
        self.gamma
    }

    /// Decodes RGB commands expressed in this color space.
    pub const fn transfer(&self) -> Transfer {
        self.transfer
    }

    pub const fn standard_gamut(&self) -> Option<StandardGamut> {
        self.standard
    }

    /// The same primaries balanced against another white, so that RGB
    /// `(1, 1, 1)` lands on `white`.
    #[must_use]
    pub fn with_white_point(&self, white: Xy) -> Self {
        Self {
            gamut: Gamut { white, ..self.gamut },
            ..*self
        }
    }

    /// Linear RGB that renders `xy` in this color space at unit luminance.
    pub fn xy_to_linear_rgb(&self, xy: Xy) -> Option<RGB<f32>> {
        let to_rgb = self.gamut.rgb_to_xyz()?.inverse()?;
        let xyz = xy.to_xyz(1.0);
        let [r, g, b] = to_rgb.mul_vec([xyz.x, xyz.y, xyz.z]);
        Some(RGB::new(r, g, b))
    }

    pub fn channel_shapes(&self) -> [ChannelShape; 3] {
        self.primaries.map(|primary| primary.shape)
    }

    /// Moves `xy` towards the white point, `saturation = 0` lands on white.
    pub fn adjust_saturation(&self, xy: Xy, saturation: f32) -> Xy {
        let saturation = if saturation.is_nan() {
            0.0
        } else {
            saturation.clamp(0.0, 1.0)
        };
        xy.lerp(self.gamut.white, 1.0 - saturation)
    }

    /// Chromaticity of a linear RGB triplet in this color space.
    pub fn linear_rgb_to_xy(&self, rgb: RGB<f32>) -> Option<Xy> {
        self.gamut.rgb_to_xy([rgb.r, rgb.g, rgb.b])
    }

    /// Chromaticity of a gamma encoded RGB triplet, `None` for black.
    pub fn encoded_rgb_to_xy(&self, rgb: RGB<f32>) -> Option<Xy> {
        let decode = |c| self.transfer.decode(c);
        self.linear_rgb_to_xy(RGB::new(decode(rgb.r), decode(rgb.g), decode(rgb.b)))
    }
}

impl Default for RgbProfile {
    fn default() -> Self {
        Self::standard(StandardGamut::Srgb)
    }
}

/// The standard gamut named by the primaries, if any.
fn shared_standard(configs: &[PrimaryConfig; 3]) -> Result<Option<StandardGamut>, ConfigError> {
    let standard_of = |config: &PrimaryConfig| match config.source {
        PrimarySource::Standard(gamut) => Some(gamut),
        PrimarySource::Xy { .. } | PrimarySource::Wavelength(_) => None,
    };
    let first = standard_of(&configs[0]);
    if configs.iter().all(|config| standard_of(config) == first) {
        Ok(first)
    } else {
        Err(ConfigError::PartialStandardGamut)
    }
}

fn resolve_primary(
    config: &PrimaryConfig,
    index: usize,
    profile_gamma: f32,
) -> Result<Primary, ConfigError> {
    let xy = match config.source {
        PrimarySource::Xy { x, y } => Xy::new(x, y)?,
        PrimarySource::Wavelength(nm) => wavelength_to_xy(nm)?,
        PrimarySource::Standard(gamut) => gamut.gamut().vertices()[index],
    };
    let intensity = validate_intensity(config.intensity.unwrap_or(1.0))?;
    let (min, max) = config.limits.resolve()?;
    let gamma = match config.gamma {
        Some(gamma) => validate_gamma(gamma)?,
        None => profile_gamma,
    };

    Ok(Primary {
        xy,
        intensity,
        shape: ChannelShape::new(gamma, min, max)?,
    })
}
