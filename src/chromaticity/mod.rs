//! Chromaticity primitives
//!
//! CIE 1931 xy points, CIE 1960 uv points, tristimulus values and color
//! temperatures. Everything here is pure and allocation free.

mod cct;
mod gamut;
mod locus;

pub use cct::{
    TintDirection, cct_to_xy, duv, duv_offset, planckian_xy, shift_along_locus, xy_to_cct,
};
pub(crate) use cct::white_locus_xy;
pub use gamut::{Gamut, Matrix3, StandardGamut, Transfer};
pub use locus::{MAX_WAVELENGTH_NM, MIN_WAVELENGTH_NM, wavelength_to_xy};

use core::fmt;

use crate::error::{ConfigError, RangeError};

/// Upper bound of the x coordinate accepted by this crate.
pub const X_MAX: f32 = 0.75;
/// Upper bound of the y coordinate accepted by this crate.
pub const Y_MAX: f32 = 0.85;

/// Lowest supported correlated color temperature, in Kelvin.
pub const MIN_KELVIN: f32 = 1000.0;
/// Highest supported correlated color temperature, in Kelvin.
pub const MAX_KELVIN: f32 = 25_000.0;

/// CIE 1931 chromaticity coordinate.
///
/// Points built through [`Xy::new`] are validated against
/// `[0, 0.75] x [0, 0.85]`. Points computed at runtime go through
/// [`Xy::saturating`] and are clamped into the same box.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xy {
    x: f32,
    y: f32,
}

impl Xy {
    /// Validated constructor for calibration data.
    pub fn new(x: f32, y: f32) -> Result<Self, ConfigError> {
        let in_range = x.is_finite()
            && y.is_finite()
            && (0.0..=X_MAX).contains(&x)
            && (0.0..=Y_MAX).contains(&y);
        if in_range {
            Ok(Self { x, y })
        } else {
            Err(ConfigError::XyOutOfRange { x, y })
        }
    }

    /// Clamps a computed point into the accepted box. NaN maps to zero.
    pub fn saturating(x: f32, y: f32) -> Self {
        Self {
            x: clamp_finite(x, X_MAX),
            y: clamp_finite(y, Y_MAX),
        }
    }

    /// Trusted constant data only (standard gamut vertices may sit outside
    /// the accepted box).
    pub(crate) const fn new_unchecked(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn x(self) -> f32 {
        self.x
    }

    pub const fn y(self) -> f32 {
        self.y
    }

    /// Euclidean distance in the xy plane.
    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        libm::sqrtf(dx * dx + dy * dy)
    }

    /// Linear interpolation towards `other`, `t = 0` returns `self`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::saturating(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// CIE 1960 UCS coordinates.
    pub fn to_uv(self) -> Uv {
        let denom = -2.0 * self.x + 12.0 * self.y + 3.0;
        Uv {
            u: 4.0 * self.x / denom,
            v: 6.0 * self.y / denom,
        }
    }

    /// Tristimulus values for a luminance `big_y`.
    pub fn to_xyz(self, big_y: f32) -> Xyz {
        if self.y <= 0.0 {
            return Xyz::default();
        }
        let scale = big_y / self.y;
        Xyz {
            x: self.x * scale,
            y: big_y,
            z: (1.0 - self.x - self.y) * scale,
        }
    }
}

impl From<Uv> for Xy {
    fn from(uv: Uv) -> Self {
        let denom = 2.0 * uv.u - 8.0 * uv.v + 4.0;
        Self::saturating(3.0 * uv.u / denom, 2.0 * uv.v / denom)
    }
}

impl fmt::Display for Xy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.x, self.y)
    }
}

fn clamp_finite(value: f32, max: f32) -> f32 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, max) }
}

/// CIE 1960 UCS chromaticity.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Uv {
    pub u: f32,
    pub v: f32,
}

/// CIE 1931 tristimulus values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Xyz {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Xyz {
    /// Projects onto the chromaticity plane.
    ///
    /// Returns `None` for black (all components summing to zero).
    pub fn to_xy(self) -> Option<Xy> {
        let sum = self.x + self.y + self.z;
        if sum <= f32::EPSILON || !sum.is_finite() {
            return None;
        }
        Some(Xy::saturating(self.x / sum, self.y / sum))
    }
}

/// Correlated color temperature stored as mired.
///
/// Mired grows as Kelvin falls, so a warmer white always has the larger
/// mired value.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ColorTemperature {
    mired: f32,
}

impl ColorTemperature {
    /// Validated constructor, `kelvin` must lie in `[1000, 25000]`.
    pub fn new(kelvin: f32) -> Result<Self, RangeError> {
        if kelvin.is_finite() && (MIN_KELVIN..=MAX_KELVIN).contains(&kelvin) {
            Ok(Self::from_kelvin(kelvin))
        } else {
            Err(RangeError::ColorTemperature(kelvin))
        }
    }

    pub const fn from_mired(mired: f32) -> Self {
        Self { mired }
    }

    pub const fn from_kelvin(kelvin: f32) -> Self {
        Self {
            mired: 1_000_000.0 / kelvin,
        }
    }

    pub const fn mired(self) -> f32 {
        self.mired
    }

    pub const fn kelvin(self) -> f32 {
        1_000_000.0 / self.mired
    }

    /// Shifts by a signed mired amount, positive is warmer.
    pub fn add_mired(self, mired: f32) -> Self {
        Self::from_mired(self.mired + mired)
    }

    /// Clamps into the supported Kelvin range.
    pub fn saturate(self) -> Self {
        let min_mired = 1_000_000.0 / MAX_KELVIN;
        let max_mired = 1_000_000.0 / MIN_KELVIN;
        if self.mired.is_nan() {
            return Self::from_mired(min_mired);
        }
        Self::from_mired(self.mired.clamp(min_mired, max_mired))
    }
}

/// CIE standard illuminant white points.
pub mod illuminant {
    use super::Xy;

    pub const A: Xy = Xy::new_unchecked(0.447_57, 0.407_45);
    pub const D50: Xy = Xy::new_unchecked(0.345_67, 0.358_50);
    pub const D55: Xy = Xy::new_unchecked(0.332_42, 0.347_43);
    pub const D65: Xy = Xy::new_unchecked(0.312_71, 0.329_02);
    pub const E: Xy = Xy::new_unchecked(1.0 / 3.0, 1.0 / 3.0);
    /// ACES white, close to D60.
    pub const ACES: Xy = Xy::new_unchecked(0.321_68, 0.337_67);
}
