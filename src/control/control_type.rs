const CONTROL_NAME_RGB: &str = "RGB";
const CONTROL_NAME_RGB_SATURATION: &str = "RGB_SATURATION";
const CONTROL_NAME_RGB_CT: &str = "RGB_CT";
const CONTROL_NAME_RGB_CWWW: &str = "RGB_CWWW";
const CONTROL_NAME_CT: &str = "CT";
const CONTROL_NAME_CWWW: &str = "CWWW";
const CONTROL_NAME_BRIGHTNESS: &str = "BRIGHTNESS";
const CONTROL_NAME_BRIGHTNESS_SHORT: &str = "W";

/// Capabilities a control type grants, as a bit set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlAttributes(u8);

impl ControlAttributes {
    pub const BRIGHTNESS: Self = Self(1);
    pub const RGB: Self = Self(1 << 1);
    pub const XY: Self = Self(1 << 2);
    pub const CT: Self = Self(1 << 3);
    pub const CW_WW: Self = Self(1 << 4);
    pub const SATURATION: Self = Self(1 << 5);
    /// An xy color replaces the white balance instead of being rebalanced.
    pub const INTERLOCK: Self = Self(1 << 6);

    pub const fn bits(self) -> u8 {
        self.0
    }

    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// True when any bit of `other` is set.
    pub const fn intersects(self, other: Self) -> bool {
        self.0 & other.0 != 0
    }
}

/// Which commands a light understands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ControlType {
    /// Hue and saturation over the full source gamut.
    Rgb = ControlAttributes::RGB.bits(),
    /// Saturation measured towards the source white point.
    RgbSaturation = ControlAttributes::RGB
        .union(ControlAttributes::SATURATION)
        .bits(),
    /// Color or color temperature, one at a time.
    RgbCt = ControlAttributes::RGB
        .union(ControlAttributes::CT)
        .union(ControlAttributes::INTERLOCK)
        .bits(),
    RgbCwww = ControlAttributes::RGB
        .union(ControlAttributes::CW_WW)
        .bits(),
    /// Color temperature only.
    Ct = ControlAttributes::CT.bits(),
    Cwww = ControlAttributes::CW_WW.bits(),
    /// Brightness only, no color.
    Brightness = ControlAttributes::BRIGHTNESS.bits(),
}

impl ControlType {
    pub const ALL: [Self; 7] = [
        Self::Rgb,
        Self::RgbSaturation,
        Self::RgbCt,
        Self::RgbCwww,
        Self::Ct,
        Self::Cwww,
        Self::Brightness,
    ];

    pub fn from_raw(value: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|control| *control as u8 == value)
    }

    pub const fn attributes(self) -> ControlAttributes {
        ControlAttributes(self as u8)
    }

    /// Accepts xy, hue/saturation and RGB commands.
    pub const fn accepts_color(self) -> bool {
        self.attributes().intersects(ControlAttributes::RGB)
    }

    /// Accepts color temperature commands.
    pub const fn accepts_color_temperature(self) -> bool {
        self.attributes()
            .intersects(ControlAttributes::CT.union(ControlAttributes::CW_WW))
    }

    /// Absolute xy commands clear the white balance set by a color
    /// temperature command.
    pub const fn interlocks_white(self) -> bool {
        self.attributes().intersects(ControlAttributes::INTERLOCK)
    }

    /// Saturation moves towards the white point instead of through RGB.
    pub const fn saturates_towards_white(self) -> bool {
        self.attributes().intersects(ControlAttributes::SATURATION)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rgb => CONTROL_NAME_RGB,
            Self::RgbSaturation => CONTROL_NAME_RGB_SATURATION,
            Self::RgbCt => CONTROL_NAME_RGB_CT,
            Self::RgbCwww => CONTROL_NAME_RGB_CWWW,
            Self::Ct => CONTROL_NAME_CT,
            Self::Cwww => CONTROL_NAME_CWWW,
            Self::Brightness => CONTROL_NAME_BRIGHTNESS,
        }
    }

    /// Case sensitive, `W` is accepted for [`ControlType::Brightness`].
    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            CONTROL_NAME_RGB => Some(Self::Rgb),
            CONTROL_NAME_RGB_SATURATION => Some(Self::RgbSaturation),
            CONTROL_NAME_RGB_CT => Some(Self::RgbCt),
            CONTROL_NAME_RGB_CWWW => Some(Self::RgbCwww),
            CONTROL_NAME_CT => Some(Self::Ct),
            CONTROL_NAME_CWWW => Some(Self::Cwww),
            CONTROL_NAME_BRIGHTNESS | CONTROL_NAME_BRIGHTNESS_SHORT => Some(Self::Brightness),
            _ => None,
        }
    }
}
