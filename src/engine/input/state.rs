// Edge detection for a single input source

/// Discrete per-poll state of an input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Transition {
    /// Inactive, and was inactive on the previous poll
    #[default]
    Up,
    /// Became active (or changed magnitude) this poll
    Pressed,
    /// Active with the same magnitude as the previous poll
    Down,
    /// Became inactive this poll
    Released,
}

impl Transition {
    /// Classify a poll from whether the input is active now and whether
    /// its magnitude is unchanged since the previous poll
    pub fn classify(active: bool, unchanged: bool) -> Self {
        match (active, unchanged) {
            (true, true) => Transition::Down,
            (true, false) => Transition::Pressed,
            (false, true) => Transition::Up,
            (false, false) => Transition::Released,
        }
    }
}

/// Magnitude history and transition for one input source
///
/// Only [`InputSource::poll`](super::InputSource::poll) advances this state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InputState {
    /// Scaled reading from the latest poll, 0 when inactive
    magnitude: f32,

    /// Scaled reading from the poll before the latest one
    previous_magnitude: f32,

    /// Reading that was let go on a `Released` poll, 0 otherwise
    released_magnitude: f32,

    transition: Transition,
}

impl InputState {
    /// Create an idle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one scaled reading and return the resulting transition
    pub(crate) fn update(&mut self, magnitude: f32) -> Transition {
        // Compare against the old reading before it is overwritten
        let unchanged = self.previous_magnitude == magnitude;
        self.transition = Transition::classify(magnitude != 0.0, unchanged);
        self.released_magnitude = if self.transition == Transition::Released {
            self.previous_magnitude
        } else {
            0.0
        };
        self.magnitude = magnitude;
        self.previous_magnitude = magnitude;
        self.transition
    }

    /// Return to `Up` with no magnitude history
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Scaled reading from the latest poll
    pub fn magnitude(&self) -> f32 {
        self.magnitude
    }

    /// Reading that the next poll will be compared against
    pub fn previous_magnitude(&self) -> f32 {
        self.previous_magnitude
    }

    /// Magnitude held before a release, non-zero only on `Released` polls
    pub fn released_magnitude(&self) -> f32 {
        self.released_magnitude
    }

    /// Transition computed by the latest poll
    pub fn transition(&self) -> Transition {
        self.transition
    }

    /// Idle means no magnitude and no pending edge
    pub fn is_idle(&self) -> bool {
        self.magnitude == 0.0 && self.transition == Transition::Up
    }
}
