use super::{Impurity, ImpurityConfig, IntensityLimits, validate_kelvin};
use crate::chromaticity::{ColorTemperature, Xy, white_locus_xy};
use crate::error::ConfigError;
use crate::shaper::{ChannelShape, CombinedLimit, validate_gamma};

const DEFAULT_DECAY_GAMMA: f32 = 3.0;

/// Cold and warm white pair blended along the mired axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CwwwProfileConfig {
    pub cold_white_kelvin: f32,
    pub warm_white_kelvin: f32,
    /// Neutral reference, defaults to the mired midpoint of the pair.
    pub white_point_kelvin: Option<f32>,
    pub impurity: ImpurityConfig,
    pub gamma: Option<f32>,
    pub cold_white_limits: IntensityLimits,
    pub warm_white_limits: IntensityLimits,
    /// Lower bound on cold plus warm, defaults to no bound.
    pub min_combined: Option<f32>,
    /// Upper bound on cold plus warm, defaults to no bound.
    pub max_combined: Option<f32>,
}

impl CwwwProfileConfig {
    pub const fn new(cold_white_kelvin: f32, warm_white_kelvin: f32) -> Self {
        Self {
            cold_white_kelvin,
            warm_white_kelvin,
            white_point_kelvin: None,
            impurity: ImpurityConfig::NONE,
            gamma: None,
            cold_white_limits: IntensityLimits::UNSET,
            warm_white_limits: IntensityLimits::UNSET,
            min_combined: None,
            max_combined: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CwwwProfile {
    cold: ColorTemperature,
    warm: ColorTemperature,
    white_point: ColorTemperature,
    impurity: Impurity,
    cold_shape: ChannelShape,
    warm_shape: ChannelShape,
    combined: CombinedLimit,
}

impl CwwwProfile {
    pub fn new(config: &CwwwProfileConfig) -> Result<Self, ConfigError> {
        let cold = validate_kelvin(config.cold_white_kelvin)?;
        let warm = validate_kelvin(config.warm_white_kelvin)?;
        if config.warm_white_kelvin >= config.cold_white_kelvin {
            return Err(ConfigError::InvertedWhiteRange {
                warm: config.warm_white_kelvin,
                cold: config.cold_white_kelvin,
            });
        }

        let white_point = match config.white_point_kelvin {
            Some(kelvin) => validate_kelvin(kelvin)?,
            None => ColorTemperature::from_mired((cold.mired() + warm.mired()) / 2.0),
        };

        let gamma = validate_gamma(config.gamma.unwrap_or(1.0))?;
        let (cold_min, cold_max) = config.cold_white_limits.resolve()?;
        let (warm_min, warm_max) = config.warm_white_limits.resolve()?;

        let combined = CombinedLimit::new(
            config.min_combined.unwrap_or(0.0),
            config.max_combined.unwrap_or(CombinedLimit::UNBOUNDED.max),
        );
        let combined_ok = combined.min.is_finite()
            && combined.max.is_finite()
            && combined.min >= 0.0
            && combined.min <= combined.max;
        if !combined_ok {
            return Err(ConfigError::InvertedIntensityRange {
                min: combined.min,
                max: combined.max,
            });
        }

        Ok(Self {
            cold,
            warm,
            white_point,
            impurity: Impurity::resolve(&config.impurity, DEFAULT_DECAY_GAMMA)?,
            cold_shape: ChannelShape::new(gamma, cold_min, cold_max)?,
            warm_shape: ChannelShape::new(gamma, warm_min, warm_max)?,
            combined,
        })
    }

    pub const fn cold_white(&self) -> ColorTemperature {
        self.cold
    }

    pub const fn warm_white(&self) -> ColorTemperature {
        self.warm
    }

    pub const fn white_point(&self) -> ColorTemperature {
        self.white_point
    }

    pub const fn impurity(&self) -> &Impurity {
        &self.impurity
    }

    /// Shapes as `[cold, warm]`.
    pub const fn channel_shapes(&self) -> [ChannelShape; 2] {
        [self.cold_shape, self.warm_shape]
    }

    pub const fn combined_limit(&self) -> CombinedLimit {
        self.combined
    }

    /// Blend position of a temperature, 0 is pure warm and 1 pure cold.
    pub fn blend_position(&self, temperature: ColorTemperature) -> f32 {
        let span = self.warm.mired() - self.cold.mired();
        let t = (self.warm.mired() - temperature.mired()) / span;
        if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) }
    }

    /// Temperature at a blend position.
    pub fn temperature_at(&self, t: f32) -> ColorTemperature {
        let mired = self.warm.mired() + (self.cold.mired() - self.warm.mired()) * t.clamp(0.0, 1.0);
        ColorTemperature::from_mired(mired)
    }

    /// Ideal neutral chromaticity at a blend position.
    pub fn neutral_at(&self, t: f32) -> Xy {
        white_locus_xy(self.temperature_at(t))
    }
}
