//! RGB primaries combined with white channels
//!
//! The white source is treated as a fourth primary inside the RGB triangle.
//! As much of the target as possible is taken from white, the RGB remainder
//! makes up the difference in chromaticity.

use super::rgb::gamut_weights;
use super::{MixTarget, normalize_brightness};
use crate::chromaticity::Xy;
use crate::profile::{CwwwProfile, RgbProfile, WhiteProfile};

const WEIGHT_EPSILON: f32 = 1e-6;

/// Result of an RGB plus white solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeMix {
    /// Linear `[red, green, blue]` weights.
    pub rgb: [f32; 3],
    /// Total white weight.
    pub white: f32,
    /// Share of the target taken from white, in `[0, 1]`.
    pub white_share: f32,
    pub xy: Xy,
    pub clipped: bool,
}

/// Result of an RGB plus cold/warm white solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbCwwwMix {
    pub rgb: [f32; 3],
    pub cold: f32,
    pub warm: f32,
    pub white_share: f32,
    /// Cold/warm blend position of the white source.
    pub position: f32,
    pub xy: Xy,
    pub clipped: bool,
}

/// Largest `k` with `target - k * white` non-negative in every component.
fn white_share(target: [f32; 3], white: [f32; 3]) -> f32 {
    let share = target
        .iter()
        .zip(white)
        .filter(|(_, w)| *w > WEIGHT_EPSILON)
        .map(|(t, w)| t / w)
        .fold(f32::INFINITY, f32::min);
    if share.is_finite() {
        share.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

fn split(
    profile: &RgbProfile,
    target: Xy,
    white: Xy,
    brightness: f32,
) -> ([f32; 3], f32, Xy, bool) {
    let gamut = profile.gamut();
    let (weights, xy, clipped) = gamut_weights(gamut, target);
    let (white_weights, _, _) = gamut_weights(gamut, white);
    let share = white_share(weights, white_weights);

    let primaries = profile.primaries();
    let rgb = core::array::from_fn(|i| {
        let remainder = (weights[i] - share * white_weights[i]).max(0.0);
        remainder * brightness * primaries[i].intensity
    });
    (rgb, share, xy, clipped)
}

/// Solves `target` with RGB primaries and one white channel.
pub fn mix_rgbw(
    rgb: &RgbProfile,
    white: &WhiteProfile,
    target: MixTarget,
    brightness: f32,
) -> CompositeMix {
    let brightness = normalize_brightness(brightness);
    let (weights, share, xy, clipped) = split(rgb, target.xy(), white.white_xy(), brightness);
    CompositeMix {
        rgb: weights,
        white: share * brightness,
        white_share: share,
        xy,
        clipped,
    }
}

/// Solves `target` with RGB primaries and a cold/warm white pair.
///
/// The white source is the point of the pair at the target's correlated
/// color temperature, saturated to the pair's range.
pub fn mix_rgb_cwww(
    rgb: &RgbProfile,
    cwww: &CwwwProfile,
    target: MixTarget,
    brightness: f32,
) -> RgbCwwwMix {
    let brightness = normalize_brightness(brightness);
    let position = cwww.blend_position(target.color_temperature());
    let white_xy = cwww.neutral_at(position);
    let (weights, share, xy, clipped) = split(rgb, target.xy(), white_xy, brightness);
    let white = share * brightness;

    RgbCwwwMix {
        rgb: weights,
        cold: position * white,
        warm: (1.0 - position) * white,
        white_share: share,
        position,
        xy,
        clipped,
    }
}
