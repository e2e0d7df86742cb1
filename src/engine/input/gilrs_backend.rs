// Live gamepad backend on top of gilrs

use super::device::{DeviceSource, HatDirection};
use super::error::InputError;
use super::profile::xbox360;
use gilrs::{Axis, Button, Event, EventType, Gamepad, Gilrs};
use log::{debug, error, info};
use winit::keyboard::KeyCode;

/// Buttons in Xbox 360 profile order
const BUTTONS: [Button; xbox360::BUTTON_COUNT as usize] = [
    Button::South,
    Button::East,
    Button::West,
    Button::North,
    Button::LeftTrigger,
    Button::RightTrigger,
    Button::Select,
    Button::Start,
    Button::LeftThumb,
    Button::RightThumb,
];

/// Gamepads read through gilrs.
///
/// Controller indices follow the enumeration order of connected pads, so
/// index 0 is the first pad gilrs reports. Hat 0 is the d-pad; there are no
/// other hats. Keyboard queries always read "not held": pair this with an
/// [`InputDevices`](super::InputDevices) for keys.
pub struct GilrsDevices {
    gilrs: Gilrs,
}

impl GilrsDevices {
    pub fn new() -> Result<Self, InputError> {
        info!("Initializing gilrs controller interface");
        let gilrs = Gilrs::new().map_err(|e| {
            error!("Failed to initialize gilrs: {}", e);
            InputError::Backend(e.to_string())
        })?;

        for (id, gamepad) in gilrs.gamepads() {
            info!("  Gamepad {}: {}", id, gamepad.name());
        }
        Ok(Self { gilrs })
    }

    /// Drain pending gilrs events so pad state is current.
    /// Call once per frame before polling the input map.
    pub fn pump(&mut self) {
        while let Some(Event { id, event, .. }) = self.gilrs.next_event() {
            match event {
                EventType::Connected => info!("Gamepad {} connected", id),
                EventType::Disconnected => info!("Gamepad {} disconnected", id),
                other => debug!("Gamepad {} event: {:?}", id, other),
            }
        }
    }

    fn pad(&self, index: usize) -> Option<Gamepad<'_>> {
        self.gilrs.gamepads().nth(index).map(|(_, gamepad)| gamepad)
    }
}

fn trigger_value(gamepad: &Gamepad<'_>, button: Button) -> f32 {
    gamepad
        .button_data(button)
        .map(|data| data.value())
        .unwrap_or(0.0)
}

impl DeviceSource for GilrsDevices {
    fn key_down(&self, _key: KeyCode) -> bool {
        false
    }

    fn gamepad_button(&self, pad: usize, button: u32) -> Option<bool> {
        let gamepad = self.pad(pad)?;
        let pressed = BUTTONS
            .get(button as usize)
            .map(|&b| gamepad.is_pressed(b))
            .unwrap_or(false);
        Some(pressed)
    }

    fn gamepad_hat(&self, pad: usize, hat: u32) -> Option<HatDirection> {
        if hat != 0 {
            return None;
        }
        let gamepad = self.pad(pad)?;
        Some(HatDirection::from_buttons(
            gamepad.is_pressed(Button::DPadUp),
            gamepad.is_pressed(Button::DPadDown),
            gamepad.is_pressed(Button::DPadLeft),
            gamepad.is_pressed(Button::DPadRight),
        ))
    }

    fn gamepad_axis(&self, pad: usize, axis: u32) -> Option<f32> {
        let gamepad = self.pad(pad)?;
        // gilrs reports y up, the profile expects y down
        let value = match axis {
            xbox360::STICK_LEFT_VERTICAL => -gamepad.value(Axis::LeftStickY),
            xbox360::STICK_LEFT_HORIZONTAL => gamepad.value(Axis::LeftStickX),
            xbox360::STICK_RIGHT_HORIZONTAL => gamepad.value(Axis::RightStickX),
            xbox360::STICK_RIGHT_VERTICAL => -gamepad.value(Axis::RightStickY),
            xbox360::TRIGGERS => {
                trigger_value(&gamepad, Button::LeftTrigger2)
                    - trigger_value(&gamepad, Button::RightTrigger2)
            }
            _ => return None,
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_table_matches_profile() {
        assert_eq!(BUTTONS[xbox360::A as usize], Button::South);
        assert_eq!(BUTTONS[xbox360::B as usize], Button::East);
        assert_eq!(BUTTONS[xbox360::START as usize], Button::Start);
        assert_eq!(BUTTONS[xbox360::RS as usize], Button::RightThumb);
    }
}
