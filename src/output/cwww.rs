use super::{CALIBRATION_LOG_TARGET, ChannelId, ChannelKind, ChannelLevels, XyTarget, emit};
use crate::ChannelSink;
use crate::mixer::{MixTarget, mix_cwww};
use crate::profile::CwwwProfile;
use crate::shaper::shape;

/// Physical addresses of a cold/warm white pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CwwwChannels {
    pub cold_white: Option<ChannelId>,
    pub warm_white: Option<ChannelId>,
}

impl CwwwChannels {
    pub const fn new(cold_white: ChannelId, warm_white: ChannelId) -> Self {
        Self {
            cold_white: Some(cold_white),
            warm_white: Some(warm_white),
        }
    }
}

/// Shapes `[cold, warm]` weights including the combined limit.
pub(super) fn shape_pair(profile: &CwwwProfile, weights: [f32; 2]) -> [f32; 2] {
    let shapes = profile.channel_shapes();
    let mut duties = shape(weights, &shapes);
    profile.combined_limit().apply(&mut duties, &shapes);
    duties
}

pub(super) fn emit_pair<S: ChannelSink + ?Sized>(
    channels: &CwwwChannels,
    sink: &mut S,
    levels: &mut ChannelLevels,
    [cold, warm]: [f32; 2],
) {
    emit(sink, levels, ChannelKind::ColdWhite, channels.cold_white, cold);
    emit(sink, levels, ChannelKind::WarmWhite, channels.warm_white, warm);
}

/// Cold/warm white fixture.
#[derive(Debug, Clone, Copy)]
pub struct CwwwXyOutput<'a> {
    profile: &'a CwwwProfile,
    channels: CwwwChannels,
    calibration_logging: bool,
}

impl<'a> CwwwXyOutput<'a> {
    pub const fn new(profile: &'a CwwwProfile, channels: CwwwChannels) -> Self {
        Self {
            profile,
            channels,
            calibration_logging: false,
        }
    }

    #[must_use]
    pub const fn with_calibration_logging(mut self, enabled: bool) -> Self {
        self.calibration_logging = enabled;
        self
    }

    pub fn write<S: ChannelSink + ?Sized>(&self, target: &XyTarget, sink: &mut S) -> ChannelLevels {
        let mix = mix_cwww(self.profile, MixTarget::Xy(target.xy), target.brightness);
        let duties = shape_pair(self.profile, [mix.cold, mix.warm]);

        if self.calibration_logging {
            log::info!(
                target: CALIBRATION_LOG_TARGET,
                "cwww target={} ({:.0} K) brightness={:.3} position={:.4} neutral={} corrected={} weights=[{:.4}, {:.4}] duties={:.4?}",
                target.xy,
                MixTarget::Xy(target.xy).color_temperature().kelvin(),
                target.brightness,
                mix.position,
                mix.neutral,
                mix.corrected,
                mix.cold,
                mix.warm,
                duties,
            );
        }

        let mut levels = ChannelLevels::default();
        emit_pair(&self.channels, sink, &mut levels, duties);
        levels
    }
}
