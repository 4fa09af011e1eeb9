//! Gamut triangles and standard primaries

use super::{Xy, Xyz, illuminant};

const GAMUT_NAME_TYPICAL_LED: &str = "typical_led";
const GAMUT_NAME_SRGB: &str = "srgb";
const GAMUT_NAME_ADOBE_RGB_D55: &str = "adobe_rgb_d55";
const GAMUT_NAME_ADOBE_RGB_D65: &str = "adobe_rgb_d65";
const GAMUT_NAME_PROPHOTO: &str = "prophoto";
const GAMUT_NAME_ACES_AP0: &str = "aces_ap0";
const GAMUT_NAME_ACES_AP1: &str = "aces_ap1";

/// Twice the triangle area below which primaries count as collinear.
const DEGENERATE_AREA: f32 = 1e-6;
/// Encoded sRGB values up to here sit on the linear segment.
const SRGB_TOE: f32 = 0.040_45;

/// Named set of primaries with a white point.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StandardGamut {
    /// Generic red, green and blue LED dies.
    TypicalLed,
    Srgb,
    AdobeRgbD55,
    AdobeRgbD65,
    ProPhoto,
    /// ACES AP0. The blue and green vertices lie outside the visible gamut.
    AcesAp0,
    AcesAp1,
}

impl StandardGamut {
    pub const ALL: [Self; 7] = [
        Self::TypicalLed,
        Self::Srgb,
        Self::AdobeRgbD55,
        Self::AdobeRgbD65,
        Self::ProPhoto,
        Self::AcesAp0,
        Self::AcesAp1,
    ];

    pub const fn gamut(self) -> Gamut {
        match self {
            Self::TypicalLed => Gamut::new(
                Xy::new_unchecked(0.7, 0.3),
                Xy::new_unchecked(0.3, 0.6),
                Xy::new_unchecked(0.15, 0.06),
                illuminant::D65,
            ),
            Self::Srgb => Gamut::new(
                Xy::new_unchecked(0.64, 0.33),
                Xy::new_unchecked(0.30, 0.60),
                Xy::new_unchecked(0.15, 0.06),
                illuminant::D65,
            ),
            Self::AdobeRgbD55 => Gamut::new(
                Xy::new_unchecked(0.64, 0.33),
                Xy::new_unchecked(0.21, 0.71),
                Xy::new_unchecked(0.15, 0.06),
                illuminant::D55,
            ),
            Self::AdobeRgbD65 => Gamut::new(
                Xy::new_unchecked(0.64, 0.33),
                Xy::new_unchecked(0.21, 0.71),
                Xy::new_unchecked(0.15, 0.06),
                illuminant::D65,
            ),
            Self::ProPhoto => Gamut::new(
                Xy::new_unchecked(0.7347, 0.2653),
                Xy::new_unchecked(0.1596, 0.8404),
                Xy::new_unchecked(0.0366, 0.0001),
                illuminant::D50,
            ),
            Self::AcesAp0 => Gamut::new(
                Xy::new_unchecked(0.7347, 0.2653),
                Xy::new_unchecked(0.0, 1.0),
                Xy::new_unchecked(0.0001, -0.0770),
                illuminant::ACES,
            ),
            Self::AcesAp1 => Gamut::new(
                Xy::new_unchecked(0.713, 0.293),
                Xy::new_unchecked(0.165, 0.830),
                Xy::new_unchecked(0.128, 0.044),
                illuminant::ACES,
            ),
        }
    }

    /// Transfer function of the color space's RGB encoding.
    ///
    /// Used to decode RGB commands, not to shape LED output.
    pub const fn transfer(self) -> Transfer {
        match self {
            Self::Srgb => Transfer::Srgb,
            Self::AdobeRgbD55 | Self::AdobeRgbD65 => Transfer::Power(2.2),
            Self::ProPhoto => Transfer::Power(1.8),
            Self::TypicalLed | Self::AcesAp0 | Self::AcesAp1 => Transfer::Linear,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypicalLed => GAMUT_NAME_TYPICAL_LED,
            Self::Srgb => GAMUT_NAME_SRGB,
            Self::AdobeRgbD55 => GAMUT_NAME_ADOBE_RGB_D55,
            Self::AdobeRgbD65 => GAMUT_NAME_ADOBE_RGB_D65,
            Self::ProPhoto => GAMUT_NAME_PROPHOTO,
            Self::AcesAp0 => GAMUT_NAME_ACES_AP0,
            Self::AcesAp1 => GAMUT_NAME_ACES_AP1,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            GAMUT_NAME_TYPICAL_LED => Some(Self::TypicalLed),
            GAMUT_NAME_SRGB => Some(Self::Srgb),
            GAMUT_NAME_ADOBE_RGB_D55 => Some(Self::AdobeRgbD55),
            GAMUT_NAME_ADOBE_RGB_D65 => Some(Self::AdobeRgbD65),
            GAMUT_NAME_PROPHOTO => Some(Self::ProPhoto),
            GAMUT_NAME_ACES_AP0 => Some(Self::AcesAp0),
            GAMUT_NAME_ACES_AP1 => Some(Self::AcesAp1),
            _ => None,
        }
    }
}

/// How encoded RGB values map back to linear light.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transfer {
    Linear,
    /// Pure power law, `linear = encoded^gamma`.
    Power(f32),
    /// IEC 61966-2-1 curve with its linear toe.
    Srgb,
}

impl Transfer {
    /// Linear value of an encoded channel. Input is clamped to `[0, 1]`.
    pub fn decode(self, encoded: f32) -> f32 {
        if encoded.is_nan() || encoded <= 0.0 {
            return 0.0;
        }
        let encoded = encoded.min(1.0);
        match self {
            Self::Linear => encoded,
            Self::Power(gamma) => libm::powf(encoded, gamma),
            Self::Srgb if encoded <= SRGB_TOE => encoded / 12.92,
            Self::Srgb => libm::powf((encoded + 0.055) / 1.055, 2.4),
        }
    }
}

/// Row-major 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3(pub [[f32; 3]; 3]);

impl Matrix3 {
    pub fn determinant(&self) -> f32 {
        let m = &self.0;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Adjugate inverse, `None` when singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if libm::fabsf(det) <= f32::EPSILON || !det.is_finite() {
            return None;
        }
        let m = &self.0;
        let inv = 1.0 / det;
        Some(Self([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv,
            ],
        ]))
    }

    pub fn mul_vec(&self, v: [f32; 3]) -> [f32; 3] {
        let m = &self.0;
        [
            m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
            m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
            m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
        ]
    }
}

/// Triangle of primaries plus the white point used as neutral reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gamut {
    pub red: Xy,
    pub green: Xy,
    pub blue: Xy,
    pub white: Xy,
}

impl Gamut {
    pub const fn new(red: Xy, green: Xy, blue: Xy, white: Xy) -> Self {
        Self {
            red,
            green,
            blue,
            white,
        }
    }

    pub const fn vertices(&self) -> [Xy; 3] {
        [self.red, self.green, self.blue]
    }

    /// Twice the signed area of the triangle.
    fn doubled_area(&self) -> f32 {
        let (a, b, c) = (self.red, self.green, self.blue);
        (b.y() - c.y()) * (a.x() - c.x()) + (c.x() - b.x()) * (a.y() - c.y())
    }

    /// Collinear or coincident primaries.
    pub fn is_degenerate(&self) -> bool {
        let area = self.doubled_area();
        !area.is_finite() || libm::fabsf(area) < DEGENERATE_AREA
    }

    /// Barycentric coordinates of `p` as `[red, green, blue]`.
    ///
    /// Components are negative for points outside the triangle. A degenerate
    /// gamut yields all zeros.
    pub fn barycentric(&self, p: Xy) -> [f32; 3] {
        let d = self.doubled_area();
        if libm::fabsf(d) < DEGENERATE_AREA {
            return [0.0; 3];
        }
        let (a, b, c) = (self.red, self.green, self.blue);
        let l1 = ((b.y() - c.y()) * (p.x() - c.x()) + (c.x() - b.x()) * (p.y() - c.y())) / d;
        let l2 = ((c.y() - a.y()) * (p.x() - c.x()) + (a.x() - c.x()) * (p.y() - c.y())) / d;
        [l1, l2, 1.0 - l1 - l2]
    }

    pub fn contains(&self, p: Xy) -> bool {
        self.barycentric(p).iter().all(|w| *w >= -1e-6)
    }

    /// `p` itself when inside, otherwise the nearest point on the boundary.
    pub fn closest_point(&self, p: Xy) -> Xy {
        if self.contains(p) {
            return p;
        }
        let [r, g, b] = self.vertices();
        [(r, g), (g, b), (b, r)]
            .into_iter()
            .map(|(start, end)| closest_point_on_segment(p, start, end))
            .min_by(|lhs, rhs| p.distance(*lhs).total_cmp(&p.distance(*rhs)))
            .unwrap_or(p)
    }

    /// Linear RGB to XYZ, with `(1, 1, 1)` mapping onto the white point at
    /// unit luminance.
    pub fn rgb_to_xyz(&self) -> Option<Matrix3> {
        let column = |p: Xy| [p.x(), p.y(), 1.0 - p.x() - p.y()];
        let [r, g, b] = [column(self.red), column(self.green), column(self.blue)];
        let primaries = Matrix3([
            [r[0], g[0], b[0]],
            [r[1], g[1], b[1]],
            [r[2], g[2], b[2]],
        ]);
        let white = self.white.to_xyz(1.0);
        let scale = primaries.inverse()?.mul_vec([white.x, white.y, white.z]);

        let mut m = primaries.0;
        for row in &mut m {
            for (value, s) in row.iter_mut().zip(scale) {
                *value *= s;
            }
        }
        Some(Matrix3(m))
    }

    /// Chromaticity of a linear RGB triplet, `None` for black.
    pub fn rgb_to_xy(&self, rgb: [f32; 3]) -> Option<Xy> {
        let [x, y, z] = self.rgb_to_xyz()?.mul_vec(rgb);
        Xyz { x, y, z }.to_xy()
    }
}

fn closest_point_on_segment(p: Xy, start: Xy, end: Xy) -> Xy {
    let dx = end.x() - start.x();
    let dy = end.y() - start.y();
    let len2 = dx * dx + dy * dy;
    if len2 <= f32::EPSILON {
        return start;
    }
    let t = (((p.x() - start.x()) * dx + (p.y() - start.y()) * dy) / len2).clamp(0.0, 1.0);
    Xy::new_unchecked(start.x() + dx * t, start.y() + dy * t)
}
