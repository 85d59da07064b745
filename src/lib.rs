// CodeBeat engine - sequencer timeline model and step-playback engine

pub mod messaging;
pub mod pattern;
pub mod playback;
pub mod timeline;

// Re-export commonly used types for convenience
pub use messaging::channels::{
    NotificationConsumer, NotificationProducer, create_notification_channel,
};
pub use messaging::notification::Notification;
pub use pattern::merge::merge_pattern;
pub use pattern::source::{
    BeatRequest, GeneratedPattern, PatternError, PatternSource, apply_generated,
};
pub use playback::clock::{EngineClock, ManualClock, SystemClock};
pub use playback::dispatch::{InstrumentDispatch, MemoryDispatch, NullDispatch, Trigger};
pub use playback::player::{PlaybackError, Player, SharedTimeline, shared_timeline};
pub use playback::transport::{Transport, TransportState};
pub use timeline::clip::{Clip, ClipId, Step};
pub use timeline::state::TimelineState;
pub use timeline::track::{Track, TrackId};
