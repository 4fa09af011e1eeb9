use super::cwww::{emit_pair, shape_pair};
use super::{CALIBRATION_LOG_TARGET, ChannelLevels, CwwwChannels, RgbChannels, XyTarget};
use crate::ChannelSink;
use crate::mixer::{MixTarget, mix_rgb_cwww};
use crate::profile::{CwwwProfile, RgbProfile};
use crate::shaper::shape;

/// RGB primaries plus a cold/warm white pair.
#[derive(Debug, Clone, Copy)]
pub struct RgbCwwwXyOutput<'a> {
    rgb_profile: &'a RgbProfile,
    cwww_profile: &'a CwwwProfile,
    rgb_channels: RgbChannels,
    cwww_channels: CwwwChannels,
    calibration_logging: bool,
}

impl<'a> RgbCwwwXyOutput<'a> {
    pub const fn new(
        rgb_profile: &'a RgbProfile,
        cwww_profile: &'a CwwwProfile,
        rgb_channels: RgbChannels,
        cwww_channels: CwwwChannels,
    ) -> Self {
        Self {
            rgb_profile,
            cwww_profile,
            rgb_channels,
            cwww_channels,
            calibration_logging: false,
        }
    }

    #[must_use]
    pub const fn with_calibration_logging(mut self, enabled: bool) -> Self {
        self.calibration_logging = enabled;
        self
    }

    pub fn write<S: ChannelSink + ?Sized>(&self, target: &XyTarget, sink: &mut S) -> ChannelLevels {
        let mix = mix_rgb_cwww(
            self.rgb_profile,
            self.cwww_profile,
            MixTarget::Xy(target.xy),
            target.brightness,
        );
        let rgb = shape(mix.rgb, &self.rgb_profile.channel_shapes());
        let white = shape_pair(self.cwww_profile, [mix.cold, mix.warm]);

        if self.calibration_logging {
            log::info!(
                target: CALIBRATION_LOG_TARGET,
                "rgb_cwww target={} brightness={:.3} solved={} white_share={:.4} position={:.4} weights={:.4?}+[{:.4}, {:.4}] duties={:.4?}+{:.4?}",
                target.xy,
                target.brightness,
                mix.xy,
                mix.white_share,
                mix.position,
                mix.rgb,
                mix.cold,
                mix.warm,
                rgb,
                white,
            );
        }

        let mut levels = ChannelLevels::default();
        self.rgb_channels.emit(sink, &mut levels, rgb);
        emit_pair(&self.cwww_channels, sink, &mut levels, white);
        levels
    }
}
