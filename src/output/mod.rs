//! Fixture outputs
//!
//! Each output binds one or two profiles to physical channels. Writing an
//! [`XyTarget`] mixes, shapes and hands one duty per channel to a
//! [`ChannelSink`]. Channels left unassigned are still computed and show up
//! in the returned [`ChannelLevels`].

mod cwww;
mod rgb;
mod rgb_cwww;
mod rgbw;
mod white;

pub use cwww::{CwwwChannels, CwwwXyOutput};
pub use rgb::{RgbChannels, RgbXyOutput};
pub use rgb_cwww::RgbCwwwXyOutput;
pub use rgbw::RgbwXyOutput;
pub use white::WhiteXyOutput;

use crate::ChannelSink;
use crate::chromaticity::{Xy, illuminant};

/// `log` target of calibration lines.
pub const CALIBRATION_LOG_TARGET: &str = "xy_output";

const CHANNEL_NAME_RED: &str = "red";
const CHANNEL_NAME_GREEN: &str = "green";
const CHANNEL_NAME_BLUE: &str = "blue";
const CHANNEL_NAME_WHITE: &str = "white";
const CHANNEL_NAME_COLD_WHITE: &str = "cold_white";
const CHANNEL_NAME_WARM_WHITE: &str = "warm_white";

/// Address of a physical channel, resolved by the [`ChannelSink`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChannelId(pub u8);

/// Role of a channel within a fixture.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum ChannelKind {
    Red = 0,
    Green = 1,
    Blue = 2,
    White = 3,
    ColdWhite = 4,
    WarmWhite = 5,
}

impl ChannelKind {
    pub const COUNT: usize = 6;

    pub const ALL: [Self; Self::COUNT] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::White,
        Self::ColdWhite,
        Self::WarmWhite,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => CHANNEL_NAME_RED,
            Self::Green => CHANNEL_NAME_GREEN,
            Self::Blue => CHANNEL_NAME_BLUE,
            Self::White => CHANNEL_NAME_WHITE,
            Self::ColdWhite => CHANNEL_NAME_COLD_WHITE,
            Self::WarmWhite => CHANNEL_NAME_WARM_WHITE,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            CHANNEL_NAME_RED => Some(Self::Red),
            CHANNEL_NAME_GREEN => Some(Self::Green),
            CHANNEL_NAME_BLUE => Some(Self::Blue),
            CHANNEL_NAME_WHITE => Some(Self::White),
            CHANNEL_NAME_COLD_WHITE => Some(Self::ColdWhite),
            CHANNEL_NAME_WARM_WHITE => Some(Self::WarmWhite),
            _ => None,
        }
    }
}

/// Duties computed by one write, indexed by channel role.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChannelLevels([Option<f32>; ChannelKind::COUNT]);

impl ChannelLevels {
    /// Duty of a channel, `None` when the output has no such channel.
    pub fn get(&self, kind: ChannelKind) -> Option<f32> {
        self.0[kind as usize]
    }

    /// Sum of every computed duty.
    pub fn total(&self) -> f32 {
        self.0.iter().flatten().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ChannelKind, f32)> + '_ {
        ChannelKind::ALL
            .into_iter()
            .zip(self.0)
            .filter_map(|(kind, level)| level.map(|level| (kind, level)))
    }

    fn set(&mut self, kind: ChannelKind, level: f32) {
        self.0[kind as usize] = Some(level);
    }
}

/// Live color of a light: a chromaticity and a brightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyTarget {
    pub xy: Xy,
    pub brightness: f32,
}

impl XyTarget {
    pub const fn new(xy: Xy, brightness: f32) -> Self {
        Self { xy, brightness }
    }
}

impl Default for XyTarget {
    fn default() -> Self {
        Self::new(illuminant::D65, 0.0)
    }
}

/// Records a duty and forwards it to the sink when the channel is wired.
fn emit<S: ChannelSink + ?Sized>(
    sink: &mut S,
    levels: &mut ChannelLevels,
    kind: ChannelKind,
    channel: Option<ChannelId>,
    duty: f32,
) {
    levels.set(kind, duty);
    if let Some(channel) = channel {
        sink.set_level(channel, duty);
    }
}

/// Output slot - enum containing all fixture layouts
#[derive(Debug, Clone, Copy)]
pub enum XyOutputSlot<'a> {
    Rgb(RgbXyOutput<'a>),
    /// RGB with one white channel
    Rgbw(RgbwXyOutput<'a>),
    /// RGB with a cold/warm white pair
    RgbCwww(RgbCwwwXyOutput<'a>),
    Cwww(CwwwXyOutput<'a>),
    White(WhiteXyOutput<'a>),
}

impl XyOutputSlot<'_> {
    pub fn write<S: ChannelSink + ?Sized>(&self, target: &XyTarget, sink: &mut S) -> ChannelLevels {
        match self {
            Self::Rgb(output) => output.write(target, sink),
            Self::Rgbw(output) => output.write(target, sink),
            Self::RgbCwww(output) => output.write(target, sink),
            Self::Cwww(output) => output.write(target, sink),
            Self::White(output) => output.write(target, sink),
        }
    }
}

impl<'a> From<RgbXyOutput<'a>> for XyOutputSlot<'a> {
    fn from(output: RgbXyOutput<'a>) -> Self {
        Self::Rgb(output)
    }
}

impl<'a> From<RgbwXyOutput<'a>> for XyOutputSlot<'a> {
    fn from(output: RgbwXyOutput<'a>) -> Self {
        Self::Rgbw(output)
    }
}

impl<'a> From<RgbCwwwXyOutput<'a>> for XyOutputSlot<'a> {
    fn from(output: RgbCwwwXyOutput<'a>) -> Self {
        Self::RgbCwww(output)
    }
}

impl<'a> From<CwwwXyOutput<'a>> for XyOutputSlot<'a> {
    fn from(output: CwwwXyOutput<'a>) -> Self {
        Self::Cwww(output)
    }
}

impl<'a> From<WhiteXyOutput<'a>> for XyOutputSlot<'a> {
    fn from(output: WhiteXyOutput<'a>) -> Self {
        Self::White(output)
    }
}
