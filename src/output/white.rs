use super::{CALIBRATION_LOG_TARGET, ChannelId, ChannelKind, ChannelLevels, XyTarget, emit};
use crate::ChannelSink;
use crate::mixer::mix_white;
use crate::profile::WhiteProfile;

/// Single white channel. Chromaticity is ignored, only brightness matters.
#[derive(Debug, Clone, Copy)]
pub struct WhiteXyOutput<'a> {
    profile: &'a WhiteProfile,
    channel: Option<ChannelId>,
    calibration_logging: bool,
}

impl<'a> WhiteXyOutput<'a> {
    pub const fn new(profile: &'a WhiteProfile, channel: Option<ChannelId>) -> Self {
        Self {
            profile,
            channel,
            calibration_logging: false,
        }
    }

    #[must_use]
    pub const fn with_calibration_logging(mut self, enabled: bool) -> Self {
        self.calibration_logging = enabled;
        self
    }

    pub fn write<S: ChannelSink + ?Sized>(&self, target: &XyTarget, sink: &mut S) -> ChannelLevels {
        let mix = mix_white(self.profile, target.brightness);
        let duty = self.profile.channel_shape().encode(mix.level);

        if self.calibration_logging {
            log::info!(
                target: CALIBRATION_LOG_TARGET,
                "white brightness={:.3} emitted={} weight={:.4} duty={:.4}",
                target.brightness,
                mix.emitted,
                mix.level,
                duty,
            );
        }

        let mut levels = ChannelLevels::default();
        emit(sink, &mut levels, ChannelKind::White, self.channel, duty);
        levels
    }
}
