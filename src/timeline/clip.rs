// Clip - a placed region of steps on one track's timeline
// Each step inside a clip is individually activatable

use uuid::Uuid;

/// Unique identifier for clips (unique within the owning track)
pub type ClipId = String;

/// Smallest addressable unit of a clip
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Whether this step should sound
    pub active: bool,

    /// Intensity hint in [0, 1] passed to instrument dispatch
    /// Absent means full velocity
    pub velocity: Option<f32>,
}

impl Step {
    /// An active step carrying an explicit velocity
    pub fn on(velocity: f32) -> Self {
        Self {
            active: true,
            velocity: Some(velocity),
        }
    }

    /// Velocity with the default applied (1.0 when unset)
    pub fn velocity_or_default(&self) -> f32 {
        self.velocity.unwrap_or(1.0)
    }

    /// Flip the active flag, keeping the stored velocity
    /// Toggling twice restores the original value
    pub fn toggle(&mut self) -> bool {
        self.active = !self.active;
        self.active
    }
}

/// A placed region of steps on a track
///
/// Local step index `i` corresponds to global timeline step `start + i`.
/// A clip may musically extend past the visible timeline; the resolver
/// truncates anything past `total_steps` at read time.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Clip {
    /// Identifier, unique within the owning track
    pub id: ClipId,

    /// Global step index where the clip begins
    pub start: usize,

    /// One entry per step the clip spans
    pub steps: Vec<Step>,

    /// Optional label, no playback effect
    pub name: Option<String>,
}

impl Clip {
    /// Creates an empty clip with a freshly minted id
    pub fn new(start: usize, length: usize) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), start, length)
    }

    /// Creates an empty clip with a caller-chosen id
    /// Used where the resulting clip set must be deterministic
    pub fn with_id(id: impl Into<ClipId>, start: usize, length: usize) -> Self {
        assert!(length > 0, "Clip length must be at least 1 step");

        Self {
            id: id.into(),
            start,
            steps: vec![Step::default(); length],
            name: None,
        }
    }

    /// Number of steps the clip spans
    pub fn length(&self) -> usize {
        self.steps.len()
    }

    /// Local index of a global step, if this clip covers it
    pub fn covers(&self, global_step: usize) -> Option<usize> {
        if global_step >= self.start && global_step < self.start + self.steps.len() {
            Some(global_step - self.start)
        } else {
            None
        }
    }

    /// Toggle the step at a local index
    /// Returns the new active value, or None if the index is out of range
    pub fn toggle_step(&mut self, local_index: usize) -> Option<bool> {
        self.steps.get_mut(local_index).map(Step::toggle)
    }
}
