// Input sources - one physical channel each, with its own edge state

use super::device::{DeviceSource, HatDirection};
use super::error::InputError;
use super::state::{InputState, Transition};
use crate::core::math::apply_deadzone;
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Horizontal mouse motion
pub const MOUSE_AXIS_X: u32 = 0;
/// Vertical mouse motion, growing downward
pub const MOUSE_AXIS_Y: u32 = 1;

/// Which half of an axis counts as activation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AxisDirection {
    /// Signed reading, scaled as-is
    #[default]
    Both,
    /// Only readings above zero, reported as a positive magnitude
    Positive,
    /// Only readings below zero, reported as a positive magnitude
    Negative,
}

impl AxisDirection {
    fn filter(self, value: f32) -> f32 {
        match self {
            AxisDirection::Both => value,
            AxisDirection::Positive => value.max(0.0),
            AxisDirection::Negative => (-value).max(0.0),
        }
    }
}

/// The physical channel an [`InputSource`] reads
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Channel {
    Key(KeyCode),
    Mouse(MouseButton),
    /// Mouse motion on one axis since the last frame, unclamped
    MouseAxis {
        axis: u32,
        direction: AxisDirection,
    },
    GamepadButton {
        pad: usize,
        button: u32,
    },
    GamepadHat {
        pad: usize,
        hat: u32,
        direction: HatDirection,
    },
    GamepadAxis {
        pad: usize,
        axis: u32,
        direction: AxisDirection,
        deadzone: f32,
    },
}

impl Channel {
    /// Unscaled reading for this poll. Digital channels read 1 or 0;
    /// absent controllers read 0.
    fn sample<D: DeviceSource + ?Sized>(&self, devices: &D) -> f32 {
        let held = match *self {
            Channel::Key(key) => devices.key_down(key),
            Channel::Mouse(button) => devices.mouse_down(button),
            Channel::MouseAxis { axis, direction } => {
                return direction.filter(devices.mouse_delta(axis));
            }
            Channel::GamepadButton { pad, button } => {
                devices.gamepad_button(pad, button).unwrap_or(false)
            }
            Channel::GamepadHat {
                pad,
                hat,
                direction,
            } => devices.gamepad_hat(pad, hat) == Some(direction),
            Channel::GamepadAxis {
                pad,
                axis,
                direction,
                deadzone,
            } => {
                let raw = devices.gamepad_axis(pad, axis).unwrap_or(0.0);
                let value = apply_deadzone(raw.clamp(-1.0, 1.0), deadzone);
                return direction.filter(value);
            }
        };

        if held {
            1.0
        } else {
            0.0
        }
    }

    /// Controller index for gamepad channels
    pub fn pad(&self) -> Option<usize> {
        match *self {
            Channel::Key(_) | Channel::Mouse(_) | Channel::MouseAxis { .. } => None,
            Channel::GamepadButton { pad, .. }
            | Channel::GamepadHat { pad, .. }
            | Channel::GamepadAxis { pad, .. } => Some(pad),
        }
    }
}

/// One physical input bound into an [`InputMap`](super::InputMap).
///
/// Build it with the constructors and `with_*` methods, then hand it to
/// `add_binding`. Once registered, the channel and scalar no longer change;
/// only polling advances its state.
#[derive(Debug, Clone, PartialEq)]
pub struct InputSource {
    channel: Channel,

    /// Multiplier applied to every raw reading
    scalar: f32,

    state: InputState,
}

impl InputSource {
    /// Create a source for any channel with a scalar of 1
    pub fn new(channel: Channel) -> Self {
        Self {
            channel,
            scalar: 1.0,
            state: InputState::new(),
        }
    }

    /// Create a keyboard input source
    pub fn key(code: KeyCode) -> Self {
        Self::new(Channel::Key(code))
    }

    /// Create a mouse button input source
    pub fn mouse(button: MouseButton) -> Self {
        Self::new(Channel::Mouse(button))
    }

    /// Mouse motion along `axis` ([`MOUSE_AXIS_X`] or [`MOUSE_AXIS_Y`]).
    /// Pair it with a scalar to match the speed of a stick.
    pub fn mouse_axis(axis: u32, direction: AxisDirection) -> Self {
        Self::new(Channel::MouseAxis { axis, direction })
    }

    /// Button `button` on controller `pad`
    pub fn gamepad_button(pad: usize, button: u32) -> Self {
        Self::new(Channel::GamepadButton { pad, button })
    }

    /// Hat `hat` on controller `pad` pointing exactly in `direction`
    pub fn gamepad_hat(pad: usize, hat: u32, direction: HatDirection) -> Self {
        Self::new(Channel::GamepadHat {
            pad,
            hat,
            direction,
        })
    }

    /// Axis `axis` on controller `pad`, no deadzone
    pub fn gamepad_axis(pad: usize, axis: u32, direction: AxisDirection) -> Self {
        Self::new(Channel::GamepadAxis {
            pad,
            axis,
            direction,
            deadzone: 0.0,
        })
    }

    /// Set the multiplier for every reading
    pub fn with_scalar(mut self, scalar: f32) -> Self {
        self.scalar = scalar;
        self
    }

    /// Ignore axis readings whose absolute value is at or below `deadzone`.
    /// No effect on digital channels.
    pub fn with_deadzone(mut self, deadzone: f32) -> Self {
        if let Channel::GamepadAxis { deadzone: dz, .. } = &mut self.channel {
            *dz = deadzone;
        }
        self
    }

    /// Get the channel this source reads
    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    /// Get the reading multiplier
    pub fn scalar(&self) -> f32 {
        self.scalar
    }

    /// Get the edge state from the last poll
    pub fn state(&self) -> &InputState {
        &self.state
    }

    /// Scaled reading from the last poll
    pub fn magnitude(&self) -> f32 {
        self.state.magnitude()
    }

    /// Reading that was let go of, non-zero only on a `Released` poll
    pub fn released_magnitude(&self) -> f32 {
        self.state.released_magnitude()
    }

    /// Get the transition from the last poll
    pub fn transition(&self) -> Transition {
        self.state.transition()
    }

    /// Check if this source reads 0 and is `Up`
    pub fn is_idle(&self) -> bool {
        self.state.is_idle()
    }

    /// Sample the device, scale, and advance the edge state
    pub fn poll<D: DeviceSource + ?Sized>(&mut self, devices: &D) -> Transition {
        let magnitude = self.channel.sample(devices) * self.scalar;
        self.state.update(magnitude)
    }

    pub(crate) fn reset(&mut self) {
        self.state.reset();
    }

    /// Check construction parameters before registration
    pub(crate) fn validate(&self) -> Result<(), InputError> {
        if !self.scalar.is_finite() || self.scalar == 0.0 {
            return Err(InputError::InvalidArgument(format!(
                "scalar must be finite and non-zero, got {}",
                self.scalar
            )));
        }
        if let Channel::GamepadAxis { deadzone, .. } = self.channel {
            if !(0.0..1.0).contains(&deadzone) {
                return Err(InputError::InvalidArgument(format!(
                    "axis deadzone must be in [0, 1), got {}",
                    deadzone
                )));
            }
        }
        Ok(())
    }
}
