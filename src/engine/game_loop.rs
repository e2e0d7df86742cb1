//! Frame pacing for hosts that drive an InputMap
//!
//! Each call to `begin_frame` polls the input map exactly once and returns
//! how many fixed-timestep updates the host should run this frame. Queries
//! made during those updates all see the same input snapshot.
use super::input::{DeviceSource, InputMap};
use std::time::{Duration, Instant};

/// Target update rate (60 updates per second)
pub const FIXED_TIMESTEP: f32 = 1.0 / 60.0;
const FIXED_TIMESTEP_DURATION: Duration = Duration::from_micros(16_667); // ~1/60 second

/// Cap on fixed updates per frame after a long stall
const MAX_UPDATES_PER_FRAME: u32 = 5;

pub struct GameLoop {
    /// Time not yet consumed by fixed updates
    accumulator: Duration,

    last_frame_time: Instant,

    paused: bool,

    frame_count: u64,

    update_count: u64,

    /// Seconds between the last two frames
    delta_time: f32,
}

impl GameLoop {
    /// Create a new game loop
    pub fn new() -> Self {
        Self {
            accumulator: Duration::ZERO,
            last_frame_time: Instant::now(),
            paused: false,
            frame_count: 0,
            update_count: 0,
            delta_time: 0.0,
        }
    }

    /// Start a frame: poll `input` once, then return the number of fixed
    /// updates to run. Input is still polled while paused so edges are not
    /// lost, but no updates are scheduled.
    pub fn begin_frame<D: DeviceSource + ?Sized>(
        &mut self,
        input: &mut InputMap,
        devices: &D,
    ) -> u32 {
        let now = Instant::now();
        self.begin_frame_at(now, input, devices)
    }

    fn begin_frame_at<D: DeviceSource + ?Sized>(
        &mut self,
        now: Instant,
        input: &mut InputMap,
        devices: &D,
    ) -> u32 {
        let frame_time = now.saturating_duration_since(self.last_frame_time);
        self.last_frame_time = now;
        self.frame_count += 1;
        self.delta_time = frame_time.as_secs_f32();

        input.poll(devices);

        if self.paused {
            return 0;
        }

        self.accumulator += frame_time;
        let mut updates = 0;
        while self.accumulator >= FIXED_TIMESTEP_DURATION && updates < MAX_UPDATES_PER_FRAME {
            self.accumulator -= FIXED_TIMESTEP_DURATION;
            updates += 1;
        }
        if updates == MAX_UPDATES_PER_FRAME {
            // Drop the backlog instead of catching up over several frames
            self.accumulator = Duration::ZERO;
        }

        self.update_count += updates as u64;
        updates
    }

    /// Get the fixed update step in seconds
    pub fn fixed_timestep(&self) -> f32 {
        FIXED_TIMESTEP
    }

    /// Get seconds between the last two frames
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get total frames started
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get total fixed updates scheduled
    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Check if game is paused
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Pause the game loop
    pub fn pause(&mut self) {
        if !self.paused {
            self.paused = true;
            log::info!("Game loop paused");
        }
    }

    /// Resume the game loop
    pub fn resume(&mut self) {
        if self.paused {
            self.paused = false;
            // Reset accumulator to prevent update burst
            self.accumulator = Duration::ZERO;
            log::info!("Game loop resumed");
        }
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}
