use super::{MixTarget, normalize_brightness};
use crate::chromaticity::{Gamut, Xy};
use crate::profile::RgbProfile;

/// Barycentric components below this are treated as outside the triangle.
const EDGE_EPSILON: f32 = 1e-6;

/// Result of an RGB solve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RgbMix {
    /// Linear `[red, green, blue]` weights.
    pub weights: [f32; 3],
    /// Chromaticity that was actually solved for.
    pub xy: Xy,
    /// Whether the target lay outside the gamut.
    pub clipped: bool,
}

/// Normalized barycentric weights of `xy`, clipping to the gamut boundary.
///
/// Returns the weights, the point they reproduce and whether clipping
/// happened. The weights are non-negative and sum to one.
pub fn gamut_weights(gamut: &Gamut, xy: Xy) -> ([f32; 3], Xy, bool) {
    let mut weights = gamut.barycentric(xy);
    let mut solved = xy;
    let clipped = weights.iter().any(|w| *w < -EDGE_EPSILON);
    if clipped {
        solved = gamut.closest_point(xy);
        weights = gamut.barycentric(solved);
    }

    for weight in &mut weights {
        if *weight < 0.0 || weight.is_nan() {
            *weight = 0.0;
        }
    }
    let sum: f32 = weights.iter().sum();
    if sum > 0.0 {
        for weight in &mut weights {
            *weight /= sum;
        }
    }

    (weights, solved, clipped)
}

/// Solves `target` against the profile's primaries.
pub fn mix_rgb(profile: &RgbProfile, target: MixTarget, brightness: f32) -> RgbMix {
    let brightness = normalize_brightness(brightness);
    let (weights, xy, clipped) = gamut_weights(profile.gamut(), target.xy());
    if clipped {
        log::debug!("target {} clipped to gamut at {}", target.xy(), xy);
    }

    let primaries = profile.primaries();
    RgbMix {
        weights: core::array::from_fn(|i| weights[i] * brightness * primaries[i].intensity),
        xy,
        clipped,
    }
}
