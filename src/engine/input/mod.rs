// Input handling system
//
// This module turns physical inputs (keys, mouse buttons and motion,
// gamepad buttons, hats and axes) into named bindings that game code queries every frame.
//
// ## Architecture
//
// - `device`: The `DeviceSource` boundary and the winit-fed `InputDevices`
// - `source`: One physical channel per `InputSource`, sampled and scaled
// - `state`: Edge detection (Up / Pressed / Down / Released)
// - `map`: `InputMap`, named bindings aggregated from many sources
// - `config`: Declarative binding lists and default layouts
// - `profile`: Button/axis index tables per controller family
// - `gilrs_backend`: Live gamepads via gilrs (feature `gilrs`)
//
// ## Usage Example
//
// ```rust
// use rusted_input::engine::input::{InputDevices, InputMap, InputSource};
// use winit::keyboard::KeyCode;
//
// let mut map = InputMap::new();
// map.add_binding("jump", InputSource::key(KeyCode::Space))?;
// map.add_binding("jump", InputSource::gamepad_button(0, 0))?;
//
// // In your event loop, feed window and device events
// devices.process_window_event(&event);
// devices.process_device_event(&device_event);
//
// // Once per frame, poll, then drop the frame's mouse motion
// map.poll(&devices);
// devices.end_frame();
//
// if map.is_pressed("jump") {
//     // Jump was pressed this frame
// }
// ```

pub mod config;
pub mod device;
pub mod error;
#[cfg(feature = "gilrs")]
pub mod gilrs_backend;
pub mod map;
pub mod profile;
pub mod source;
pub mod state;

// Re-export commonly used types
pub use config::{default_bindings, BindingConfig};
pub use device::{DeviceSource, GamepadState, HatDirection, InputDevices};
pub use error::InputError;
#[cfg(feature = "gilrs")]
pub use gilrs_backend::GilrsDevices;
pub use map::{BindingState, InputMap};
pub use source::{AxisDirection, Channel, InputSource, MOUSE_AXIS_X, MOUSE_AXIS_Y};
pub use state::{InputState, Transition};
