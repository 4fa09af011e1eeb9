use super::{MixTarget, normalize_brightness};
use crate::chromaticity::Xy;
use crate::profile::CwwwProfile;

/// Result of a cold/warm white solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CwwwMix {
    pub cold: f32,
    pub warm: f32,
    /// Blend position, 0 is pure warm and 1 pure cold.
    pub position: f32,
    /// Ideal chromaticity at `position`.
    pub neutral: Xy,
    /// `neutral` displaced by the profile's impurities.
    pub corrected: Xy,
}

/// Splits `brightness` between the two whites.
///
/// The impurity terms only feed `corrected`. Two channels leave a single
/// degree of freedom, which the blend position already uses.
pub fn mix_cwww(profile: &CwwwProfile, target: MixTarget, brightness: f32) -> CwwwMix {
    let brightness = normalize_brightness(brightness);
    let position = profile.blend_position(target.color_temperature());
    let neutral = profile.neutral_at(position);

    // Strongest at the midpoint, gone at either end.
    let impurity = profile.impurity();
    let factor = impurity.attenuation(2.0 * position.min(1.0 - position));

    CwwwMix {
        cold: position * brightness,
        warm: (1.0 - position) * brightness,
        position,
        neutral,
        corrected: impurity.apply(neutral, factor),
    }
}
