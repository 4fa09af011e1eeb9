//! Light control
//!
//! Interprets commands according to the light's control type, keeps the
//! live `(xy, brightness)` target and fans it out to the outputs.
//!
//! Lights that take both color and color temperature remember the last
//! temperature as a white balance: hue and RGB commands are rendered
//! against that white, so a saturation of zero stays on the chosen white.

mod command;
mod command_queue;
mod control_type;

pub use command::{ColorTemperatureRange, LightCommand};
pub use command_queue::{CommandQueue, CommandReceiver, CommandSender, QueueFull};
pub use control_type::{ControlAttributes, ControlType};

use core::cell::Cell;

use critical_section::Mutex;
use heapless::Vec;

use crate::ChannelSink;
use crate::chromaticity::{ColorTemperature, Xy, white_locus_xy};
use crate::error::CommandError;
use crate::mixer::normalize_brightness;
use crate::output::{XyOutputSlot, XyTarget};
use crate::profile::RgbProfile;
use command::hsv_to_rgb;

/// Static description of a logical light.
#[derive(Debug, Clone, Copy)]
pub struct LightControlConfig<'a> {
    pub control_type: ControlType,
    /// Color space hue, saturation and RGB commands are read in. Defaults to
    /// sRGB.
    pub source_profile: Option<&'a RgbProfile>,
    /// Defaults to [`ColorTemperatureRange::FULL`].
    pub color_temperature_range: Option<ColorTemperatureRange>,
}

impl<'a> LightControlConfig<'a> {
    pub const fn new(control_type: ControlType) -> Self {
        Self {
            control_type,
            source_profile: None,
            color_temperature_range: None,
        }
    }
}

/// What the critical section guards.
#[derive(Debug, Clone, Copy, Default)]
struct LightState {
    target: XyTarget,
    white_balance: Option<ColorTemperature>,
}

/// One logical light driving up to `N` outputs.
pub struct LightControl<'a, const N: usize> {
    control_type: ControlType,
    source_profile: Option<&'a RgbProfile>,
    default_source: RgbProfile,
    color_temperature_range: ColorTemperatureRange,
    outputs: Vec<XyOutputSlot<'a>, N>,
    state: Mutex<Cell<LightState>>,
}

impl<'a, const N: usize> LightControl<'a, N> {
    pub fn new(config: &LightControlConfig<'a>) -> Self {
        Self {
            control_type: config.control_type,
            source_profile: config.source_profile,
            default_source: RgbProfile::default(),
            color_temperature_range: config.color_temperature_range.unwrap_or_default(),
            outputs: Vec::new(),
            state: Mutex::new(Cell::new(LightState::default())),
        }
    }

    /// Registers an output. Hands it back when all `N` slots are taken.
    pub fn add_output(
        &mut self,
        output: impl Into<XyOutputSlot<'a>>,
    ) -> Result<(), XyOutputSlot<'a>> {
        self.outputs.push(output.into())
    }

    pub fn outputs(&self) -> &[XyOutputSlot<'a>] {
        &self.outputs
    }

    pub const fn control_type(&self) -> ControlType {
        self.control_type
    }

    pub fn source_profile(&self) -> &RgbProfile {
        self.source_profile.unwrap_or(&self.default_source)
    }

    pub const fn color_temperature_range(&self) -> ColorTemperatureRange {
        self.color_temperature_range
    }

    /// Current target.
    pub fn target(&self) -> XyTarget {
        self.state().target
    }

    /// Temperature color commands are currently balanced against, if any.
    pub fn white_balance(&self) -> Option<ColorTemperature> {
        self.state().white_balance
    }

    fn state(&self) -> LightState {
        critical_section::with(|cs| self.state.borrow(cs).get())
    }

    /// Applies a command and writes every output.
    ///
    /// A rejected command leaves the target and the outputs untouched.
    pub fn apply<S: ChannelSink + ?Sized>(
        &self,
        command: &LightCommand,
        sink: &mut S,
    ) -> Result<XyTarget, CommandError> {
        let target = critical_section::with(|cs| {
            let cell = self.state.borrow(cs);
            let next = self.resolve(cell.get(), command)?;
            cell.set(next);
            Ok::<_, CommandError>(next.target)
        })?;

        self.write_outputs(&target, sink);
        Ok(target)
    }

    /// Writes the current target again, e.g. after the sink was reset.
    pub fn refresh<S: ChannelSink + ?Sized>(&self, sink: &mut S) {
        self.write_outputs(&self.target(), sink);
    }

    /// Applies every queued command in order (non-blocking).
    ///
    /// Rejected commands are logged and skipped. Returns how many commands
    /// were applied.
    pub fn process_pending<S: ChannelSink + ?Sized, const SIZE: usize>(
        &self,
        commands: CommandReceiver<'_, SIZE>,
        sink: &mut S,
    ) -> usize {
        let mut applied = 0;
        while let Some(command) = commands.try_receive() {
            match self.apply(&command, sink) {
                Ok(_) => applied += 1,
                Err(err) => log::warn!("dropping {:?}: {}", command, err),
            }
        }
        applied
    }

    fn write_outputs<S: ChannelSink + ?Sized>(&self, target: &XyTarget, sink: &mut S) {
        for output in &self.outputs {
            output.write(target, sink);
        }
    }

    fn unsupported(&self) -> CommandError {
        CommandError::Unsupported(self.control_type.as_str())
    }

    /// Source profile with its white moved to the active white balance.
    fn balanced_source(&self, white_balance: Option<ColorTemperature>) -> RgbProfile {
        let source = self.source_profile();
        match white_balance {
            Some(temperature) => source.with_white_point(white_locus_xy(temperature)),
            None => *source,
        }
    }

    /// State after `command`, starting from `current`.
    fn resolve(
        &self,
        current: LightState,
        command: &LightCommand,
    ) -> Result<LightState, CommandError> {
        if !command.is_finite() {
            return Err(CommandError::NotFinite);
        }
        let LightState {
            target,
            white_balance,
        } = current;
        let next = |target| LightState {
            target,
            white_balance,
        };

        match *command {
            LightCommand::Brightness(brightness) => Ok(next(XyTarget::new(
                target.xy,
                normalize_brightness(brightness),
            ))),
            LightCommand::Xy { xy, brightness } => {
                if !self.control_type.accepts_color() {
                    return Err(self.unsupported());
                }
                let brightness = normalize_brightness(brightness);
                if white_balance.is_none() || self.control_type.interlocks_white() {
                    return Ok(LightState {
                        target: XyTarget::new(xy, brightness),
                        white_balance: None,
                    });
                }
                // Same RGB mix as in the source space, rendered against the
                // balanced white.
                let balanced = self.balanced_source(white_balance);
                let xy = self
                    .source_profile()
                    .xy_to_linear_rgb(xy)
                    .and_then(|rgb| balanced.linear_rgb_to_xy(rgb))
                    .unwrap_or(xy);
                Ok(next(XyTarget::new(xy, brightness)))
            }
            LightCommand::ColorTemperature { kelvin, brightness } => {
                if !self.control_type.accepts_color_temperature() {
                    return Err(self.unsupported());
                }
                let temperature = self.color_temperature_range.clamp(kelvin);
                let target = XyTarget::new(
                    white_locus_xy(temperature),
                    normalize_brightness(brightness),
                );
                if self.control_type.accepts_color() {
                    Ok(LightState {
                        target,
                        white_balance: Some(temperature),
                    })
                } else {
                    Ok(next(target))
                }
            }
            LightCommand::HueSaturation {
                hue,
                saturation,
                brightness,
            } => {
                if !self.control_type.accepts_color() {
                    return Err(self.unsupported());
                }
                let source = self.balanced_source(white_balance);
                let xy = self
                    .hue_saturation_xy(&source, hue, saturation)
                    .unwrap_or(target.xy);
                Ok(next(XyTarget::new(xy, normalize_brightness(brightness))))
            }
            LightCommand::Rgb { color, brightness } => {
                if !self.control_type.accepts_color() {
                    return Err(self.unsupported());
                }
                let source = self.balanced_source(white_balance);
                // Black carries no chromaticity, keep the previous one.
                Ok(next(match source.encoded_rgb_to_xy(color) {
                    Some(xy) => XyTarget::new(xy, normalize_brightness(brightness)),
                    None => XyTarget::new(target.xy, 0.0),
                }))
            }
        }
    }

    fn hue_saturation_xy(&self, source: &RgbProfile, hue: f32, saturation: f32) -> Option<Xy> {
        if self.control_type.saturates_towards_white() {
            let pure = source.encoded_rgb_to_xy(hsv_to_rgb(hue, 1.0, 1.0))?;
            Some(source.adjust_saturation(pure, saturation))
        } else {
            source.encoded_rgb_to_xy(hsv_to_rgb(hue, saturation, 1.0))
        }
    }
}
