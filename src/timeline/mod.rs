// Timeline module - arrangement model for the step sequencer
// Tracks, clips, steps, and the global transport configuration

pub mod clip;
pub mod state;
pub mod track;

pub use clip::{Clip, ClipId, Step};
pub use state::TimelineState;
pub use track::{Track, TrackId};
