use anyhow::Result;
use log::{debug, info};
use rusted_input::engine::input::{default_bindings, DeviceSource, InputDevices, InputMap};
use rusted_input::GameLoop;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

/// Bindings reported when they fire
const WATCHED: [&str; 3] = ["jump", "fire", "menu"];

fn run_frame<D: DeviceSource + ?Sized>(
    game_loop: &mut GameLoop,
    input: &mut InputMap,
    devices: &D,
) {
    let updates = game_loop.begin_frame(input, devices);

    if input.is_pressed("menu") {
        game_loop.toggle_pause();
    }

    for name in WATCHED {
        if input.is_pressed(name) {
            info!("{} pressed ({})", name, input.magnitude_pressed(name));
        }
        if input.is_released(name) {
            info!("{} released", name);
        }
    }

    for _ in 0..updates {
        let direction = input.vector("move_left", "move_right", "move_down", "move_up");
        if direction != glam::Vec2::ZERO {
            debug!("move {:?}", direction);
        }
        let look = glam::Vec2::new(input.magnitude_down("look_x"), input.magnitude_down("look_y"));
        if look != glam::Vec2::ZERO {
            debug!("look {:?}", look);
        }
    }
}

/// Info by default; RUST_LOG, when set, takes precedence
fn log_builder() -> env_logger::Builder {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(log::LevelFilter::Info)
        .parse_default_env();
    builder
}

fn main() -> Result<()> {
    // Initialize logger
    log_builder().init();

    info!("Starting input demo...");

    let mut input = InputMap::from_config(&default_bindings())?;
    let mut devices = InputDevices::new();
    let mut game_loop = GameLoop::new();
    info!("Registered {} bindings", input.len());

    #[cfg(feature = "gilrs")]
    let mut pads = rusted_input::engine::input::GilrsDevices::new()?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("Rusted Input")
        .with_inner_size(winit::dpi::LogicalSize::new(640, 360))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    // Main event loop
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    info!("Close requested, shutting down...");
                    elwt.exit();
                }
                WindowEvent::RedrawRequested => {
                    #[cfg(feature = "gilrs")]
                    pads.pump();
                    #[cfg(feature = "gilrs")]
                    run_frame(&mut game_loop, &mut input, &(&devices, &pads));
                    #[cfg(not(feature = "gilrs"))]
                    run_frame(&mut game_loop, &mut input, &devices);

                    // Mouse motion is counted per frame
                    devices.end_frame();
                }
                WindowEvent::Focused(false) => {
                    devices.process_window_event(&event);
                    // Held keys were dropped, re-arm edges for when focus returns
                    input.reset();
                }
                other => {
                    devices.process_window_event(&other);
                }
            },
            Event::DeviceEvent { event, .. } => {
                devices.process_device_event(&event);
            }
            Event::AboutToWait => {
                // Request redraw on next frame
                window.request_redraw();
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_overrides_default_level() {
        std::env::remove_var("RUST_LOG");
        assert_eq!(log_builder().build().filter(), log::LevelFilter::Info);

        std::env::set_var("RUST_LOG", "debug");
        assert_eq!(log_builder().build().filter(), log::LevelFilter::Debug);
        std::env::remove_var("RUST_LOG");
    }
}
