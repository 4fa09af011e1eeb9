//! Output shaping
//!
//! Turns linear mixer weights into duty values: gamma encoding, per-channel
//! clamps and an optional cap on the sum of a group of channels.

use crate::error::ConfigError;

/// Gamma and clamp range of one physical channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelShape {
    gamma: f32,
    min: f32,
    max: f32,
}

impl ChannelShape {
    /// Identity shaping over the full duty range.
    pub const LINEAR: Self = Self {
        gamma: 1.0,
        min: 0.0,
        max: 1.0,
    };

    /// Requires `gamma > 0` and `0 <= min <= max <= 1`.
    pub fn new(gamma: f32, min: f32, max: f32) -> Result<Self, ConfigError> {
        let gamma = validate_gamma(gamma)?;
        let (min, max) = validate_limits(min, max)?;
        Ok(Self { gamma, min, max })
    }

    pub const fn gamma(&self) -> f32 {
        self.gamma
    }

    pub const fn min(&self) -> f32 {
        self.min
    }

    pub const fn max(&self) -> f32 {
        self.max
    }

    /// `weight^(1/gamma)` clamped to `[min, max]`.
    ///
    /// A channel with no weight stays off, the minimum only applies to
    /// channels that are lit.
    pub fn encode(&self, weight: f32) -> f32 {
        if weight.is_nan() || weight <= 0.0 {
            return 0.0;
        }
        let duty = if libm::fabsf(self.gamma - 1.0) <= f32::EPSILON {
            weight
        } else {
            libm::powf(weight, 1.0 / self.gamma)
        };
        duty.min(1.0).max(self.min).min(self.max)
    }
}

impl Default for ChannelShape {
    fn default() -> Self {
        Self::LINEAR
    }
}

/// Bounds on the summed duty of a channel group, e.g. cold plus warm white.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CombinedLimit {
    pub min: f32,
    pub max: f32,
}

impl CombinedLimit {
    /// No limit for a pair of channels.
    pub const UNBOUNDED: Self = Self::new(0.0, 2.0);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Rescales `duties` in place so their sum lies within the limit.
    ///
    /// Scaling is proportional, so the ratio between channels survives. A
    /// non-zero sum below `min` is raised, but never past a channel's own
    /// maximum. Per-channel minimums are restored last and win over the cap.
    pub fn apply(&self, duties: &mut [f32], shapes: &[ChannelShape]) {
        let sum: f32 = duties.iter().sum();
        if sum <= 0.0 {
            return;
        }

        if sum > self.max {
            let scale = self.max / sum;
            for duty in duties.iter_mut() {
                *duty *= scale;
            }
        } else if sum < self.min {
            let scale = self.min / sum;
            for (duty, shape) in duties.iter_mut().zip(shapes) {
                *duty = (*duty * scale).min(shape.max);
            }
        }

        for (duty, shape) in duties.iter_mut().zip(shapes) {
            if *duty > 0.0 {
                *duty = duty.max(shape.min);
            }
        }
    }
}

impl Default for CombinedLimit {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Shapes each weight through its channel.
pub fn shape<const N: usize>(weights: [f32; N], shapes: &[ChannelShape; N]) -> [f32; N] {
    let mut duties = [0.0; N];
    for ((duty, weight), shape) in duties.iter_mut().zip(weights).zip(shapes) {
        *duty = shape.encode(weight);
    }
    duties
}

pub(crate) fn validate_gamma(gamma: f32) -> Result<f32, ConfigError> {
    if gamma.is_finite() && gamma > 0.0 {
        Ok(gamma)
    } else {
        Err(ConfigError::InvalidGamma(gamma))
    }
}

pub(crate) fn validate_intensity(value: f32) -> Result<f32, ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::IntensityOutOfRange(value))
    }
}

pub(crate) fn validate_limits(min: f32, max: f32) -> Result<(f32, f32), ConfigError> {
    let min = validate_intensity(min)?;
    let max = validate_intensity(max)?;
    if min > max {
        return Err(ConfigError::InvertedIntensityRange { min, max });
    }
    Ok((min, max))
}
