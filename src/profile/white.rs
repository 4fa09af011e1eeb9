use super::{Impurity, ImpurityConfig, IntensityLimits, validate_kelvin};
use crate::chromaticity::{ColorTemperature, Xy, white_locus_xy};
use crate::error::ConfigError;
use crate::shaper::{ChannelShape, validate_gamma};

const DEFAULT_DECAY_GAMMA: f32 = 1.5;

/// Single white channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhiteProfileConfig {
    pub white_point_kelvin: f32,
    /// Drift of the emitted color as the channel is dimmed.
    pub impurity: ImpurityConfig,
    pub gamma: Option<f32>,
    pub limits: IntensityLimits,
}

impl WhiteProfileConfig {
    pub const fn new(white_point_kelvin: f32) -> Self {
        Self {
            white_point_kelvin,
            impurity: ImpurityConfig::NONE,
            gamma: None,
            limits: IntensityLimits::UNSET,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhiteProfile {
    white_point: ColorTemperature,
    white_xy: Xy,
    impurity: Impurity,
    shape: ChannelShape,
}

impl WhiteProfile {
    pub fn new(config: &WhiteProfileConfig) -> Result<Self, ConfigError> {
        let white_point = validate_kelvin(config.white_point_kelvin)?;
        let gamma = validate_gamma(config.gamma.unwrap_or(1.0))?;
        let (min, max) = config.limits.resolve()?;

        Ok(Self {
            white_point,
            white_xy: white_locus_xy(white_point),
            impurity: Impurity::resolve(&config.impurity, DEFAULT_DECAY_GAMMA)?,
            shape: ChannelShape::new(gamma, min, max)?,
        })
    }

    pub const fn white_point(&self) -> ColorTemperature {
        self.white_point
    }

    /// Chromaticity at full drive.
    pub const fn white_xy(&self) -> Xy {
        self.white_xy
    }

    pub const fn impurity(&self) -> &Impurity {
        &self.impurity
    }

    pub const fn channel_shape(&self) -> ChannelShape {
        self.shape
    }
}
