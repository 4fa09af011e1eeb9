use super::{CALIBRATION_LOG_TARGET, ChannelId, ChannelKind, ChannelLevels, XyTarget, emit};
use crate::ChannelSink;
use crate::mixer::{MixTarget, mix_rgb};
use crate::profile::RgbProfile;
use crate::shaper::shape;

/// Physical addresses of an RGB triplet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RgbChannels {
    pub red: Option<ChannelId>,
    pub green: Option<ChannelId>,
    pub blue: Option<ChannelId>,
}

impl RgbChannels {
    pub const fn new(red: ChannelId, green: ChannelId, blue: ChannelId) -> Self {
        Self {
            red: Some(red),
            green: Some(green),
            blue: Some(blue),
        }
    }

    pub(crate) fn emit<S: ChannelSink + ?Sized>(
        &self,
        sink: &mut S,
        levels: &mut ChannelLevels,
        duties: [f32; 3],
    ) {
        emit(sink, levels, ChannelKind::Red, self.red, duties[0]);
        emit(sink, levels, ChannelKind::Green, self.green, duties[1]);
        emit(sink, levels, ChannelKind::Blue, self.blue, duties[2]);
    }
}

/// Three primaries driven from an [`RgbProfile`].
#[derive(Debug, Clone, Copy)]
pub struct RgbXyOutput<'a> {
    profile: &'a RgbProfile,
    channels: RgbChannels,
    calibration_logging: bool,
}

impl<'a> RgbXyOutput<'a> {
    pub const fn new(profile: &'a RgbProfile, channels: RgbChannels) -> Self {
        Self {
            profile,
            channels,
            calibration_logging: false,
        }
    }

    /// Logs target, weights and duties on every write.
    #[must_use]
    pub const fn with_calibration_logging(mut self, enabled: bool) -> Self {
        self.calibration_logging = enabled;
        self
    }

    pub const fn profile(&self) -> &'a RgbProfile {
        self.profile
    }

    pub fn write<S: ChannelSink + ?Sized>(&self, target: &XyTarget, sink: &mut S) -> ChannelLevels {
        let mix = mix_rgb(self.profile, MixTarget::Xy(target.xy), target.brightness);
        let duties = shape(mix.weights, &self.profile.channel_shapes());

        if self.calibration_logging {
            log::info!(
                target: CALIBRATION_LOG_TARGET,
                "rgb target={} brightness={:.3} solved={} clipped={} weights={:.4?} duties={:.4?}",
                target.xy,
                target.brightness,
                mix.xy,
                mix.clipped,
                mix.weights,
                duties,
            );
        }

        let mut levels = ChannelLevels::default();
        self.channels.emit(sink, &mut levels, duties);
        levels
    }
}
