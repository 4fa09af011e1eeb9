#![no_std]

pub mod chromaticity;
pub mod control;
pub mod error;
#[cfg(feature = "esp32-log")]
pub mod logger;
pub mod mixer;
pub mod output;
pub mod profile;
pub mod shaper;

pub use chromaticity::{
    ColorTemperature, Gamut, StandardGamut, TintDirection, Transfer, Uv, Xy, Xyz, cct_to_xy,
    duv, duv_offset, wavelength_to_xy, xy_to_cct,
};
pub use control::{
    ColorTemperatureRange, CommandQueue, CommandReceiver, CommandSender, ControlType,
    LightCommand, LightControl, LightControlConfig,
};
pub use error::{CommandError, ConfigError, RangeError};
pub use mixer::MixTarget;
pub use output::{
    ChannelId, ChannelKind, ChannelLevels, CwwwChannels, CwwwXyOutput, RgbChannels,
    RgbCwwwXyOutput, RgbXyOutput, RgbwXyOutput, WhiteXyOutput, XyOutputSlot, XyTarget,
};
pub use profile::{
    CwwwProfile, CwwwProfileConfig, ImpurityConfig, IntensityLimits, PrimaryConfig,
    PrimarySource, RgbProfile, RgbProfileConfig, WhitePoint, WhiteProfile, WhiteProfileConfig,
};
pub use shaper::{ChannelShape, CombinedLimit};
pub use smart_leds::RGB;

/// Physical channel driver
///
/// Implement this trait to route duty values to PWM peripherals, DMX
/// universes or anything else addressable by [`ChannelId`].
pub trait ChannelSink {
    /// Set one channel to a duty in `[0, 1]`
    fn set_level(&mut self, channel: ChannelId, level: f32);
}
