// Playback module - step resolution, mute/solo policy, and the
// lookahead transport scheduler

pub mod clock;
pub mod dispatch;
pub mod player;
pub mod policy;
pub mod resolver;
pub mod transport;

pub use clock::{EngineClock, ManualClock, SystemClock};
pub use dispatch::{InstrumentDispatch, MemoryDispatch, NullDispatch, Trigger};
pub use player::{PlaybackError, Player, SharedTimeline, shared_timeline};
pub use policy::{any_solo, is_audible, track_is_audible};
pub use resolver::{ResolvedStep, resolve_track, resolved_step};
pub use transport::{Transport, TransportState};
