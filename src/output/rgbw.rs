use super::{
    CALIBRATION_LOG_TARGET, ChannelId, ChannelKind, ChannelLevels, RgbChannels, XyTarget, emit,
};
use crate::ChannelSink;
use crate::mixer::{MixTarget, mix_rgbw};
use crate::profile::{RgbProfile, WhiteProfile};
use crate::shaper::shape;

/// RGB primaries plus one white channel.
#[derive(Debug, Clone, Copy)]
pub struct RgbwXyOutput<'a> {
    rgb_profile: &'a RgbProfile,
    white_profile: &'a WhiteProfile,
    channels: RgbChannels,
    white: Option<ChannelId>,
    calibration_logging: bool,
}

impl<'a> RgbwXyOutput<'a> {
    pub const fn new(
        rgb_profile: &'a RgbProfile,
        white_profile: &'a WhiteProfile,
        channels: RgbChannels,
        white: Option<ChannelId>,
    ) -> Self {
        Self {
            rgb_profile,
            white_profile,
            channels,
            white,
            calibration_logging: false,
        }
    }

    #[must_use]
    pub const fn with_calibration_logging(mut self, enabled: bool) -> Self {
        self.calibration_logging = enabled;
        self
    }

    pub fn write<S: ChannelSink + ?Sized>(&self, target: &XyTarget, sink: &mut S) -> ChannelLevels {
        let mix = mix_rgbw(
            self.rgb_profile,
            self.white_profile,
            MixTarget::Xy(target.xy),
            target.brightness,
        );
        let rgb = shape(mix.rgb, &self.rgb_profile.channel_shapes());
        let white = self.white_profile.channel_shape().encode(mix.white);

        if self.calibration_logging {
            log::info!(
                target: CALIBRATION_LOG_TARGET,
                "rgbw target={} brightness={:.3} solved={} white_share={:.4} weights={:.4?}+{:.4} duties={:.4?}+{:.4}",
                target.xy,
                target.brightness,
                mix.xy,
                mix.white_share,
                mix.rgb,
                mix.white,
                rgb,
                white,
            );
        }

        let mut levels = ChannelLevels::default();
        self.channels.emit(sink, &mut levels, rgb);
        emit(sink, &mut levels, ChannelKind::White, self.white, white);
        levels
    }
}
