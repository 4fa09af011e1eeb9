use super::normalize_brightness;
use crate::chromaticity::Xy;
use crate::profile::WhiteProfile;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WhiteMix {
    pub level: f32,
    /// Estimated chromaticity at this level.
    pub emitted: Xy,
}

/// A single channel only follows brightness. The emitted color drifts by the
/// profile's impurities as the level drops.
pub fn mix_white(profile: &WhiteProfile, brightness: f32) -> WhiteMix {
    let level = normalize_brightness(brightness);
    let impurity = profile.impurity();
    let factor = impurity.attenuation(1.0 - level);

    WhiteMix {
        level,
        emitted: impurity.apply(profile.white_xy(), factor),
    }
}
