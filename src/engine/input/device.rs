// Device boundary - raw readings from keyboards, mice and gamepads

use std::collections::{HashMap, HashSet};
use winit::event::{DeviceEvent, ElementState, KeyEvent, MouseButton, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

/// Direction reported by a gamepad hat (d-pad)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HatDirection {
    #[default]
    Center,
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl HatDirection {
    /// Combine the four d-pad buttons into a single hat direction.
    /// Opposing buttons cancel out.
    pub fn from_buttons(up: bool, down: bool, left: bool, right: bool) -> Self {
        let vertical = up as i8 - down as i8;
        let horizontal = right as i8 - left as i8;
        match (vertical, horizontal) {
            (1, -1) => HatDirection::UpLeft,
            (1, 1) => HatDirection::UpRight,
            (1, _) => HatDirection::Up,
            (-1, -1) => HatDirection::DownLeft,
            (-1, 1) => HatDirection::DownRight,
            (-1, _) => HatDirection::Down,
            (_, -1) => HatDirection::Left,
            (_, 1) => HatDirection::Right,
            _ => HatDirection::Center,
        }
    }
}

/// Read access to the host's input devices.
///
/// Gamepad queries return `None` when no controller is connected at `pad`
/// (or it lacks the requested hat/axis). Callers treat `None` as a neutral
/// reading, so a disconnected controller never produces an error.
pub trait DeviceSource {
    fn key_down(&self, key: KeyCode) -> bool;

    fn mouse_down(&self, _button: MouseButton) -> bool {
        false
    }

    /// Mouse motion on `axis` (0 = x, 1 = y) accumulated since the last frame
    fn mouse_delta(&self, _axis: u32) -> f32 {
        0.0
    }

    fn gamepad_button(&self, pad: usize, button: u32) -> Option<bool>;

    fn gamepad_hat(&self, pad: usize, hat: u32) -> Option<HatDirection>;

    /// Raw axis reading, nominally in [-1, 1]
    fn gamepad_axis(&self, pad: usize, axis: u32) -> Option<f32>;
}

impl<T: DeviceSource + ?Sized> DeviceSource for &T {
    fn key_down(&self, key: KeyCode) -> bool {
        (**self).key_down(key)
    }

    fn mouse_down(&self, button: MouseButton) -> bool {
        (**self).mouse_down(button)
    }

    fn mouse_delta(&self, axis: u32) -> f32 {
        (**self).mouse_delta(axis)
    }

    fn gamepad_button(&self, pad: usize, button: u32) -> Option<bool> {
        (**self).gamepad_button(pad, button)
    }

    fn gamepad_hat(&self, pad: usize, hat: u32) -> Option<HatDirection> {
        (**self).gamepad_hat(pad, hat)
    }

    fn gamepad_axis(&self, pad: usize, axis: u32) -> Option<f32> {
        (**self).gamepad_axis(pad, axis)
    }
}

/// Two backends layered together, e.g. a keyboard feed and a gamepad feed.
/// Keys and mouse buttons are held if either side holds them, mouse motion
/// adds up, and gamepad reads come from the first side that knows the
/// controller.
impl<A: DeviceSource, B: DeviceSource> DeviceSource for (A, B) {
    fn key_down(&self, key: KeyCode) -> bool {
        self.0.key_down(key) || self.1.key_down(key)
    }

    fn mouse_down(&self, button: MouseButton) -> bool {
        self.0.mouse_down(button) || self.1.mouse_down(button)
    }

    fn mouse_delta(&self, axis: u32) -> f32 {
        self.0.mouse_delta(axis) + self.1.mouse_delta(axis)
    }

    fn gamepad_button(&self, pad: usize, button: u32) -> Option<bool> {
        self.0
            .gamepad_button(pad, button)
            .or_else(|| self.1.gamepad_button(pad, button))
    }

    fn gamepad_hat(&self, pad: usize, hat: u32) -> Option<HatDirection> {
        self.0
            .gamepad_hat(pad, hat)
            .or_else(|| self.1.gamepad_hat(pad, hat))
    }

    fn gamepad_axis(&self, pad: usize, axis: u32) -> Option<f32> {
        self.0
            .gamepad_axis(pad, axis)
            .or_else(|| self.1.gamepad_axis(pad, axis))
    }
}

/// Snapshot of one connected controller
#[derive(Debug, Clone, Default)]
pub struct GamepadState {
    buttons: HashSet<u32>,
    hats: HashMap<u32, HatDirection>,
    axes: HashMap<u32, f32>,
}

impl GamepadState {
    /// Create a controller snapshot with nothing held
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a button is held
    pub fn set_button(&mut self, button: u32, held: bool) {
        if held {
            self.buttons.insert(button);
        } else {
            self.buttons.remove(&button);
        }
    }

    /// Point a hat in a direction
    pub fn set_hat(&mut self, hat: u32, direction: HatDirection) {
        self.hats.insert(hat, direction);
    }

    /// Store a raw axis reading
    pub fn set_axis(&mut self, axis: u32, value: f32) {
        self.axes.insert(axis, value);
    }

    /// Check if a button is held
    pub fn is_button_down(&self, button: u32) -> bool {
        self.buttons.contains(&button)
    }

    /// Get a hat direction, `None` if never reported
    pub fn hat(&self, hat: u32) -> Option<HatDirection> {
        self.hats.get(&hat).copied()
    }

    /// Get a raw axis reading, `None` if never reported
    pub fn axis(&self, axis: u32) -> Option<f32> {
        self.axes.get(&axis).copied()
    }

    /// Release every button, center every hat and zero every axis
    pub fn clear(&mut self) {
        self.buttons.clear();
        for direction in self.hats.values_mut() {
            *direction = HatDirection::Center;
        }
        for value in self.axes.values_mut() {
            *value = 0.0;
        }
    }
}

/// In-memory device state.
///
/// Keyboard and mouse buttons are fed from winit window events, mouse motion
/// from device events; gamepads are written by the host (or a test) through
/// [`InputDevices::gamepad_mut`]. Call [`InputDevices::end_frame`] after each
/// poll so motion is counted per frame.
#[derive(Debug, Clone, Default)]
pub struct InputDevices {
    keys: HashSet<KeyCode>,
    mouse_buttons: HashSet<MouseButton>,
    /// Motion since the last `end_frame`, x then y
    mouse_motion: [f32; 2],
    /// Controller slots by index, `None` when disconnected
    gamepads: Vec<Option<GamepadState>>,
}

impl InputDevices {
    /// Create device state with nothing held and no pads connected
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a winit window event. Returns true if the event was consumed.
    pub fn process_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                self.process_keyboard_event(event);
                true
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.process_mouse_button(*state, *button);
                true
            }
            WindowEvent::Focused(false) => {
                // Key-up events are not delivered while unfocused
                self.release_all();
                true
            }
            _ => false,
        }
    }

    /// Feed a winit device event. Returns true if the event was consumed.
    pub fn process_device_event(&mut self, event: &DeviceEvent) -> bool {
        match event {
            DeviceEvent::MouseMotion { delta } => {
                self.add_mouse_motion(delta.0 as f32, delta.1 as f32);
                true
            }
            _ => false,
        }
    }

    /// Process a keyboard event from winit
    pub fn process_keyboard_event(&mut self, event: &KeyEvent) {
        // Only physical keys map to bindings
        if let PhysicalKey::Code(key_code) = event.physical_key {
            if event.repeat {
                return;
            }
            self.set_key(key_code, event.state == ElementState::Pressed);
        }
    }

    /// Track a mouse button press or release
    pub fn process_mouse_button(&mut self, state: ElementState, button: MouseButton) {
        match state {
            ElementState::Pressed => {
                self.mouse_buttons.insert(button);
            }
            ElementState::Released => {
                self.mouse_buttons.remove(&button);
            }
        }
    }

    /// Add raw mouse motion to this frame's total
    pub fn add_mouse_motion(&mut self, dx: f32, dy: f32) {
        self.mouse_motion[0] += dx;
        self.mouse_motion[1] += dy;
    }

    /// Get this frame's accumulated mouse motion
    pub fn mouse_motion(&self) -> (f32, f32) {
        (self.mouse_motion[0], self.mouse_motion[1])
    }

    /// Finish a frame: motion seen so far has been polled and is dropped
    pub fn end_frame(&mut self) {
        self.mouse_motion = [0.0; 2];
    }

    /// Set whether a key is held
    pub fn set_key(&mut self, key: KeyCode, held: bool) {
        if held {
            self.keys.insert(key);
        } else {
            self.keys.remove(&key);
        }
    }

    /// Mark a controller slot as connected with a neutral state.
    /// Reconnecting an already connected slot keeps its state.
    pub fn connect_gamepad(&mut self, pad: usize) -> &mut GamepadState {
        if self.gamepads.len() <= pad {
            self.gamepads.resize_with(pad + 1, || None);
        }
        log::debug!("Gamepad {} connected", pad);
        self.gamepads[pad].get_or_insert_with(GamepadState::new)
    }

    /// Empty a controller slot. Unknown slots are ignored.
    pub fn disconnect_gamepad(&mut self, pad: usize) {
        if let Some(slot) = self.gamepads.get_mut(pad) {
            if slot.take().is_some() {
                log::debug!("Gamepad {} disconnected", pad);
            }
        }
    }

    /// Get a connected controller
    pub fn gamepad(&self, pad: usize) -> Option<&GamepadState> {
        self.gamepads.get(pad).and_then(Option::as_ref)
    }

    /// Get a connected controller for writing
    pub fn gamepad_mut(&mut self, pad: usize) -> Option<&mut GamepadState> {
        self.gamepads.get_mut(pad).and_then(Option::as_mut)
    }

    /// Number of connected controllers
    pub fn gamepad_count(&self) -> usize {
        self.gamepads.iter().filter(|slot| slot.is_some()).count()
    }

    /// Release every key, mouse button and gamepad control, and drop pending
    /// mouse motion
    pub fn release_all(&mut self) {
        self.keys.clear();
        self.mouse_buttons.clear();
        self.mouse_motion = [0.0; 2];
        for pad in self.gamepads.iter_mut().flatten() {
            pad.clear();
        }
    }
}

impl DeviceSource for InputDevices {
    fn key_down(&self, key: KeyCode) -> bool {
        self.keys.contains(&key)
    }

    fn mouse_down(&self, button: MouseButton) -> bool {
        self.mouse_buttons.contains(&button)
    }

    fn mouse_delta(&self, axis: u32) -> f32 {
        self.mouse_motion.get(axis as usize).copied().unwrap_or(0.0)
    }

    fn gamepad_button(&self, pad: usize, button: u32) -> Option<bool> {
        self.gamepad(pad).map(|state| state.is_button_down(button))
    }

    fn gamepad_hat(&self, pad: usize, hat: u32) -> Option<HatDirection> {
        let state = self.gamepad(pad)?;
        // A connected pad that never reported the hat reads as centered
        Some(state.hat(hat).unwrap_or_default())
    }

    fn gamepad_axis(&self, pad: usize, axis: u32) -> Option<f32> {
        let state = self.gamepad(pad)?;
        Some(state.axis(axis).unwrap_or(0.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hat_from_buttons() {
        assert_eq!(
            HatDirection::from_buttons(false, false, false, false),
            HatDirection::Center
        );
        assert_eq!(
            HatDirection::from_buttons(true, false, false, false),
            HatDirection::Up
        );
        assert_eq!(
            HatDirection::from_buttons(false, true, false, true),
            HatDirection::DownRight
        );
        assert_eq!(
            HatDirection::from_buttons(true, false, true, false),
            HatDirection::UpLeft
        );
        // Opposing directions cancel
        assert_eq!(
            HatDirection::from_buttons(true, true, false, false),
            HatDirection::Center
        );
        assert_eq!(
            HatDirection::from_buttons(true, true, true, false),
            HatDirection::Left
        );
    }

    #[test]
    fn test_key_tracking() {
        let mut devices = InputDevices::new();
        assert!(!devices.key_down(KeyCode::Space));

        devices.set_key(KeyCode::Space, true);
        assert!(devices.key_down(KeyCode::Space));

        devices.set_key(KeyCode::Space, false);
        assert!(!devices.key_down(KeyCode::Space));
    }

    #[test]
    fn test_mouse_tracking() {
        let mut devices = InputDevices::new();
        devices.process_mouse_button(ElementState::Pressed, MouseButton::Left);
        assert!(devices.mouse_down(MouseButton::Left));
        assert!(!devices.mouse_down(MouseButton::Right));

        devices.process_mouse_button(ElementState::Released, MouseButton::Left);
        assert!(!devices.mouse_down(MouseButton::Left));
    }

    #[test]
    fn test_mouse_motion_accumulates_until_end_frame() {
        let mut devices = InputDevices::new();
        assert!(devices.process_device_event(&DeviceEvent::MouseMotion { delta: (2.0, -1.0) }));
        assert!(devices.process_device_event(&DeviceEvent::MouseMotion { delta: (3.0, 0.5) }));

        assert_eq!(devices.mouse_delta(0), 5.0);
        assert_eq!(devices.mouse_delta(1), -0.5);
        assert_eq!(devices.mouse_delta(2), 0.0);

        devices.end_frame();
        assert_eq!(devices.mouse_motion(), (0.0, 0.0));
    }

    #[test]
    fn test_absent_gamepad_reads_none() {
        let devices = InputDevices::new();
        assert_eq!(devices.gamepad_button(0, 0), None);
        assert_eq!(devices.gamepad_hat(2, 0), None);
        assert_eq!(devices.gamepad_axis(1, 3), None);
        assert_eq!(devices.gamepad_count(), 0);
    }

    #[test]
    fn test_connected_gamepad_defaults_to_neutral() {
        let mut devices = InputDevices::new();
        devices.connect_gamepad(1);

        assert_eq!(devices.gamepad_count(), 1);
        assert_eq!(devices.gamepad_button(1, 5), Some(false));
        assert_eq!(devices.gamepad_hat(1, 0), Some(HatDirection::Center));
        assert_eq!(devices.gamepad_axis(1, 0), Some(0.0));
        // Slot 0 was never connected
        assert_eq!(devices.gamepad_button(0, 5), None);
    }

    #[test]
    fn test_gamepad_state_round_trip() {
        let mut devices = InputDevices::new();
        let pad = devices.connect_gamepad(0);
        pad.set_button(5, true);
        pad.set_hat(1, HatDirection::Left);
        pad.set_axis(2, -0.5);

        assert_eq!(devices.gamepad_button(0, 5), Some(true));
        assert_eq!(devices.gamepad_hat(0, 1), Some(HatDirection::Left));
        assert_eq!(devices.gamepad_axis(0, 2), Some(-0.5));
    }

    #[test]
    fn test_disconnect_gamepad() {
        let mut devices = InputDevices::new();
        devices.connect_gamepad(0).set_button(0, true);
        devices.disconnect_gamepad(0);

        assert_eq!(devices.gamepad_button(0, 0), None);
        assert!(devices.gamepad_mut(0).is_none());

        // Disconnecting an unknown slot is a no-op
        devices.disconnect_gamepad(7);
    }

    #[test]
    fn test_release_all() {
        let mut devices = InputDevices::new();
        devices.set_key(KeyCode::KeyA, true);
        devices.process_mouse_button(ElementState::Pressed, MouseButton::Right);
        let pad = devices.connect_gamepad(0);
        pad.set_button(3, true);
        pad.set_hat(0, HatDirection::Up);
        pad.set_axis(0, 1.0);
        devices.add_mouse_motion(4.0, 4.0);

        devices.release_all();

        assert!(!devices.key_down(KeyCode::KeyA));
        assert!(!devices.mouse_down(MouseButton::Right));
        assert_eq!(devices.gamepad_button(0, 3), Some(false));
        assert_eq!(devices.gamepad_hat(0, 0), Some(HatDirection::Center));
        assert_eq!(devices.gamepad_axis(0, 0), Some(0.0));
        assert_eq!(devices.mouse_delta(0), 0.0);
    }

    #[test]
    fn test_focus_loss_releases_keys() {
        let mut devices = InputDevices::new();
        devices.set_key(KeyCode::KeyW, true);

        assert!(devices.process_window_event(&WindowEvent::Focused(false)));
        assert!(!devices.key_down(KeyCode::KeyW));
        assert!(!devices.process_window_event(&WindowEvent::Focused(true)));
    }

    #[test]
    fn test_layered_sources() {
        let mut keyboard = InputDevices::new();
        keyboard.set_key(KeyCode::KeyJ, true);

        keyboard.add_mouse_motion(1.5, 0.0);

        let mut pads = InputDevices::new();
        pads.connect_gamepad(0).set_button(1, true);
        pads.add_mouse_motion(0.5, 0.0);

        let layered = (&keyboard, &pads);
        assert!(layered.key_down(KeyCode::KeyJ));
        assert_eq!(layered.mouse_delta(0), 2.0);
        assert_eq!(layered.gamepad_button(0, 1), Some(true));
        assert_eq!(layered.gamepad_button(1, 1), None);
    }
}
