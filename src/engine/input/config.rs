// Binding configuration - declarative (name, source) lists applied to an InputMap

use super::device::HatDirection;
use super::profile::xbox360;
use super::source::{AxisDirection, InputSource, MOUSE_AXIS_X, MOUSE_AXIS_Y};
use winit::event::MouseButton;
use winit::keyboard::KeyCode;

/// Deadzone used by the default stick bindings
pub const DEFAULT_STICK_DEADZONE: f32 = 0.1;

/// Pixels of mouse motion per frame that read as a fully tilted stick
pub const MOUSE_LOOK_PIXELS: f32 = 20.0;

/// Ordered list of bindings.
///
/// Order matters: for each name, later entries take precedence over earlier
/// ones when both are active (see [`InputMap::poll`](super::InputMap::poll)).
#[derive(Debug, Clone, Default)]
pub struct BindingConfig {
    entries: Vec<(String, InputSource)>,
}

impl BindingConfig {
    /// Create an empty configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a binding
    pub fn bind(mut self, name: impl Into<String>, source: InputSource) -> Self {
        self.entries.push((name.into(), source));
        self
    }

    /// Append every entry of `other` after this config's entries
    pub fn extend(mut self, other: BindingConfig) -> Self {
        self.entries.extend(other.entries);
        self
    }

    /// Get every `(name, source)` pair in order
    pub fn entries(&self) -> &[(String, InputSource)] {
        &self.entries
    }

    /// All sources configured for `name`, in order
    pub fn sources_for<'a>(
        &'a self,
        name: &'a str,
    ) -> impl Iterator<Item = &'a InputSource> + 'a {
        self.entries
            .iter()
            .filter(move |(entry, _)| entry == name)
            .map(|(_, source)| source)
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing is configured
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Default keyboard/mouse bindings
pub fn default_keyboard_bindings() -> BindingConfig {
    BindingConfig::new()
        // Movement (WASD plus arrows)
        .bind("move_left", InputSource::key(KeyCode::KeyA))
        .bind("move_left", InputSource::key(KeyCode::ArrowLeft))
        .bind("move_right", InputSource::key(KeyCode::KeyD))
        .bind("move_right", InputSource::key(KeyCode::ArrowRight))
        .bind("move_up", InputSource::key(KeyCode::KeyW))
        .bind("move_up", InputSource::key(KeyCode::ArrowUp))
        .bind("move_down", InputSource::key(KeyCode::KeyS))
        .bind("move_down", InputSource::key(KeyCode::ArrowDown))
        .bind("jump", InputSource::key(KeyCode::Space))
        .bind("fire", InputSource::mouse(MouseButton::Left))
        .bind("fire", InputSource::key(KeyCode::KeyK))
        .bind("menu", InputSource::key(KeyCode::Escape))
        .bind("look_x", mouse_look(MOUSE_AXIS_X))
        .bind("look_y", mouse_look(MOUSE_AXIS_Y))
}

fn mouse_look(axis: u32) -> InputSource {
    InputSource::mouse_axis(axis, AxisDirection::Both).with_scalar(1.0 / MOUSE_LOOK_PIXELS)
}

/// Default bindings for controller `pad`, laid out for an Xbox 360 pad
pub fn default_gamepad_bindings(pad: usize) -> BindingConfig {
    let stick = |direction| {
        InputSource::gamepad_axis(pad, xbox360::STICK_LEFT_HORIZONTAL, direction)
            .with_deadzone(DEFAULT_STICK_DEADZONE)
    };
    let stick_vertical = |direction| {
        InputSource::gamepad_axis(pad, xbox360::STICK_LEFT_VERTICAL, direction)
            .with_deadzone(DEFAULT_STICK_DEADZONE)
    };
    let look = |axis| {
        InputSource::gamepad_axis(pad, axis, AxisDirection::Both)
            .with_deadzone(DEFAULT_STICK_DEADZONE)
    };

    BindingConfig::new()
        .bind("move_left", stick(AxisDirection::Negative))
        .bind("move_left", InputSource::gamepad_hat(pad, 0, HatDirection::Left))
        .bind("move_right", stick(AxisDirection::Positive))
        .bind("move_right", InputSource::gamepad_hat(pad, 0, HatDirection::Right))
        // Stick y grows downward
        .bind("move_up", stick_vertical(AxisDirection::Negative))
        .bind("move_up", InputSource::gamepad_hat(pad, 0, HatDirection::Up))
        .bind("move_down", stick_vertical(AxisDirection::Positive))
        .bind("move_down", InputSource::gamepad_hat(pad, 0, HatDirection::Down))
        .bind("jump", InputSource::gamepad_button(pad, xbox360::A))
        .bind("fire", InputSource::gamepad_button(pad, xbox360::X))
        .bind("fire", InputSource::gamepad_button(pad, xbox360::RB))
        .bind("menu", InputSource::gamepad_button(pad, xbox360::START))
        .bind("look_x", look(xbox360::STICK_RIGHT_HORIZONTAL))
        .bind("look_y", look(xbox360::STICK_RIGHT_VERTICAL))
}

/// Keyboard/mouse first, then the first controller, so an active pad
/// overrides the keyboard for the same binding
pub fn default_bindings() -> BindingConfig {
    default_keyboard_bindings().extend(default_gamepad_bindings(0))
}
