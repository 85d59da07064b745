// Instrument dispatch - the capability the scheduler triggers sounds through
// The engine only knows this contract; sound generation lives elsewhere

use crate::timeline::track::TrackId;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// External instrument-trigger capability consumed by the scheduler
///
/// `trigger` is fire-and-forget and must not block the scheduling thread.
/// Implementations that have no sound mapped for a slot should fall back
/// to a default percussive sound rather than failing.
pub trait InstrumentDispatch: Send + Sync {
    /// Whether the underlying sound engine is initialized
    /// Playback refuses to start while this is false
    fn is_ready(&self) -> bool {
        true
    }

    /// Schedule one hit: `time` is on the engine clock, `velocity` in [0, 1]
    fn trigger(&self, track: TrackId, time: f64, velocity: f32);

    /// Drop every scheduled-but-not-yet-fired trigger
    /// Called when the transport stops
    fn cancel_pending(&self) {}
}

/// Dispatch that swallows all triggers
pub struct NullDispatch;

impl InstrumentDispatch for NullDispatch {
    fn trigger(&self, _track: TrackId, _time: f64, _velocity: f32) {}
}

/// One recorded trigger call
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trigger {
    pub track: TrackId,
    pub time: f64,
    pub velocity: f32,
}

/// Dispatch that records triggers in memory
/// Used by tests and for offline inspection of a playback run
#[derive(Default)]
pub struct MemoryDispatch {
    not_ready: AtomicBool,
    triggers: Mutex<Vec<Trigger>>,
}

impl MemoryDispatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip readiness, to exercise the cannot-start-playback path
    pub fn set_ready(&self, ready: bool) {
        self.not_ready.store(!ready, Ordering::Relaxed);
    }

    /// Snapshot of everything triggered so far
    pub fn triggers(&self) -> Vec<Trigger> {
        self.triggers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl InstrumentDispatch for MemoryDispatch {
    fn is_ready(&self) -> bool {
        !self.not_ready.load(Ordering::Relaxed)
    }

    fn trigger(&self, track: TrackId, time: f64, velocity: f32) {
        self.triggers
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(Trigger {
                track,
                time,
                velocity,
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_dispatch_records_in_order() {
        let dispatch = MemoryDispatch::new();
        dispatch.trigger(TrackId::Kick, 0.0, 1.0);
        dispatch.trigger(TrackId::Snare, 0.5, 0.8);

        let triggers = dispatch.triggers();
        assert_eq!(triggers.len(), 2);
        assert_eq!(triggers[0].track, TrackId::Kick);
        assert_eq!(triggers[1].time, 0.5);
    }

    #[test]
    fn test_memory_dispatch_readiness() {
        let dispatch = MemoryDispatch::new();
        assert!(dispatch.is_ready());

        dispatch.set_ready(false);
        assert!(!dispatch.is_ready());

        dispatch.set_ready(true);
        assert!(dispatch.is_ready());
    }
}
