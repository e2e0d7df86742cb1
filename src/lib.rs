//! Frame-polled input bindings for games.
//!
//! Physical inputs (keyboard keys, mouse buttons, gamepad buttons, hats and
//! axes) are registered under named bindings in an
//! [`InputMap`](engine::input::InputMap). The host polls the map once per
//! frame; game code then asks whether "jump" was pressed, is held, or was
//! released this frame, independent of which device produced it.

pub mod core;
pub mod engine;

pub use engine::game_loop::GameLoop;
pub use engine::input::{
    BindingConfig, BindingState, DeviceSource, InputDevices, InputError, InputMap, InputSource,
    Transition,
};
