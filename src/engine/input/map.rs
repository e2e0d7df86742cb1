// Input map - named bindings aggregated from many physical sources

use super::config::BindingConfig;
use super::device::DeviceSource;
use super::error::InputError;
use super::source::InputSource;
use super::state::Transition;
use glam::Vec2;
use log::{debug, trace, warn};
use std::collections::HashMap;

/// Aggregated result of one binding for the current poll
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BindingState {
    pub magnitude: f32,
    pub transition: Transition,
    /// Magnitude the winning source let go of, set only on `Released`
    pub released_magnitude: f32,
}

impl BindingState {
    /// Check if the result is magnitude 0 and `Up`
    pub fn is_idle(&self) -> bool {
        self.magnitude == 0.0 && self.transition == Transition::Up
    }
}

/// One named binding: its sources in precedence order and its last result
#[derive(Debug, Clone, Default)]
struct Binding {
    sources: Vec<InputSource>,
    state: BindingState,
}

impl Binding {
    /// Poll every source and fold the results.
    ///
    /// The last non-idle source in insertion order wins; idle sources never
    /// overwrite. This is not a logical OR: a later `Released` hides an
    /// earlier source that is still `Down`.
    fn poll<D: DeviceSource + ?Sized>(&mut self, devices: &D) {
        self.state = BindingState::default();
        for source in &mut self.sources {
            source.poll(devices);
            if !source.is_idle() {
                self.state = BindingState {
                    magnitude: source.magnitude(),
                    transition: source.transition(),
                    released_magnitude: source.released_magnitude(),
                };
            }
        }
    }
}

/// Registry of named bindings, polled once per frame.
///
/// The map is an ordinary value owned by the host. Call [`InputMap::poll`]
/// exactly once per frame before querying: polling twice in one frame turns
/// every `Pressed` into `Down` early, skipping a frame freezes the state.
#[derive(Debug, Clone, Default)]
pub struct InputMap {
    bindings: HashMap<String, Binding>,

    /// Completed polls since creation or the last `clear`
    poll_count: u64,
}

impl InputMap {
    /// Create an empty input map
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a map holding every binding of `config`, in order
    pub fn from_config(config: &BindingConfig) -> Result<Self, InputError> {
        let mut map = Self::new();
        for (name, source) in config.entries() {
            map.add_binding(name.as_str(), source.clone())?;
        }
        Ok(map)
    }

    /// Append `source` to the binding `name`, creating the binding if needed.
    ///
    /// Later sources take precedence over earlier ones when both are active.
    /// The same channel may be added more than once.
    pub fn add_binding(
        &mut self,
        name: impl Into<String>,
        source: InputSource,
    ) -> Result<(), InputError> {
        let name = name.into();
        if name.trim().is_empty() {
            warn!("Rejected binding with empty name");
            return Err(InputError::InvalidArgument(
                "binding name must not be empty".to_string(),
            ));
        }
        if let Err(e) = source.validate() {
            warn!("Rejected source for binding '{}': {}", name, e);
            return Err(e);
        }

        debug!("Binding '{}' <- {:?}", name, source.channel());
        self.bindings.entry(name).or_default().sources.push(source);
        Ok(())
    }

    /// Remove a binding and all of its sources
    pub fn remove_binding(&mut self, name: &str) -> bool {
        let removed = self.bindings.remove(name).is_some();
        if removed {
            debug!("Removed binding '{}'", name);
        }
        removed
    }

    /// Drop every binding
    pub fn clear(&mut self) {
        debug!("Clearing {} bindings", self.bindings.len());
        self.bindings.clear();
        self.poll_count = 0;
    }

    /// Return every source and binding to idle, keeping the bindings.
    /// Inputs still held on the next poll fire a fresh `Pressed`.
    pub fn reset(&mut self) {
        for binding in self.bindings.values_mut() {
            binding.state = BindingState::default();
            for source in &mut binding.sources {
                source.reset();
            }
        }
    }

    /// Sample every source of every binding and update the results.
    /// Call this once per frame.
    pub fn poll<D: DeviceSource + ?Sized>(&mut self, devices: &D) {
        for (name, binding) in &mut self.bindings {
            let previous = binding.state.transition;
            binding.poll(devices);
            if binding.state.transition != previous {
                trace!(
                    "'{}' {:?} -> {:?} ({})",
                    name,
                    previous,
                    binding.state.transition,
                    binding.state.magnitude
                );
            }
        }
        self.poll_count += 1;
    }

    /// Aggregated state of a binding; idle for unknown names
    pub fn state(&self, name: &str) -> BindingState {
        self.bindings
            .get(name)
            .map(|binding| binding.state)
            .unwrap_or_default()
    }

    /// Get the aggregated transition of a binding
    pub fn transition(&self, name: &str) -> Transition {
        self.state(name).transition
    }

    /// Current magnitude regardless of transition
    pub fn magnitude_down(&self, name: &str) -> f32 {
        self.state(name).magnitude
    }

    /// Check if a binding reads non-zero
    pub fn is_down(&self, name: &str) -> bool {
        self.magnitude_down(name) != 0.0
    }

    /// Magnitude if the binding was pressed this poll, 0 otherwise
    pub fn magnitude_pressed(&self, name: &str) -> f32 {
        let state = self.state(name);
        if state.transition == Transition::Pressed {
            state.magnitude
        } else {
            0.0
        }
    }

    /// Check if a binding fired this poll
    pub fn is_pressed(&self, name: &str) -> bool {
        self.magnitude_pressed(name) != 0.0
    }

    /// Magnitude that was let go if the binding was released this poll,
    /// 0 otherwise.
    ///
    /// A released source reads 0 on the release poll, so this reports the
    /// reading it held on the poll before.
    pub fn magnitude_released(&self, name: &str) -> f32 {
        let state = self.state(name);
        if state.transition == Transition::Released {
            state.released_magnitude
        } else {
            0.0
        }
    }

    /// Check if a binding was let go this poll
    pub fn is_released(&self, name: &str) -> bool {
        self.magnitude_released(name) != 0.0
    }

    /// Signed value of a pair of opposing bindings: `positive - negative`
    pub fn axis(&self, negative: &str, positive: &str) -> f32 {
        self.magnitude_down(positive) - self.magnitude_down(negative)
    }

    /// Direction from four bindings, x right and y up
    pub fn vector(&self, left: &str, right: &str, down: &str, up: &str) -> Vec2 {
        Vec2::new(self.axis(left, right), self.axis(down, up))
    }

    /// Check if a binding is registered
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of sources bound to `name`, 0 for unknown names
    pub fn source_count(&self, name: &str) -> usize {
        self.bindings
            .get(name)
            .map(|binding| binding.sources.len())
            .unwrap_or(0)
    }

    /// Sources bound to `name`, in precedence order
    pub fn sources(&self, name: &str) -> &[InputSource] {
        self.bindings
            .get(name)
            .map(|binding| binding.sources.as_slice())
            .unwrap_or(&[])
    }

    /// Registered binding names, in no particular order
    pub fn binding_names(&self) -> impl Iterator<Item = &str> {
        self.bindings.keys().map(String::as_str)
    }

    /// Number of bindings
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if no binding is registered
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Get the number of completed polls
    pub fn poll_count(&self) -> u64 {
        self.poll_count
    }
}
