// Engine clock abstraction - monotone time source for trigger scheduling

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

/// Monotone clock the scheduler computes trigger times against
///
/// `now()` returns seconds from an arbitrary origin and never goes
/// backwards. Schedule times handed to instrument dispatch are on this
/// clock's timebase.
pub trait EngineClock: Send + Sync {
    fn now(&self) -> f64;
}

/// Wall clock over `std::time::Instant`
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineClock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Hand-driven clock for deterministic tests and offline rendering
///
/// Time only moves when `advance` or `set` is called. Stores microseconds
/// in an atomic so clones share one timebase across threads.
#[derive(Clone)]
pub struct ManualClock {
    micros: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            micros: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Move the clock forward by `seconds`
    pub fn advance(&self, seconds: f64) {
        debug_assert!(seconds >= 0.0, "manual clock never goes backwards");
        self.micros
            .fetch_add((seconds * 1_000_000.0) as u64, Ordering::Relaxed);
    }

    /// Jump the clock to an absolute time in seconds
    pub fn set(&self, seconds: f64) {
        self.micros
            .store((seconds * 1_000_000.0) as u64, Ordering::Relaxed);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineClock for ManualClock {
    fn now(&self) -> f64 {
        self.micros.load(Ordering::Relaxed) as f64 / 1_000_000.0
    }
}
