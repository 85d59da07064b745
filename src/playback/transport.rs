// Transport - lookahead step scheduler
//
// Computes target trigger times ahead of real time so audio timing is set
// by the computed schedule, not by when the timer callback happens to fire.
// Each tick reads the latest committed timeline state, so live edits are
// picked up on the next scheduled step without a rebuild.

use crate::playback::dispatch::InstrumentDispatch;
use crate::playback::{policy, resolver};
use crate::timeline::state::TimelineState;

/// Transport state (play/stop)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransportState {
    #[default]
    Stopped,
    Playing,
}

impl TransportState {
    pub fn is_playing(&self) -> bool {
        matches!(self, TransportState::Playing)
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self, TransportState::Stopped)
    }
}

/// Lookahead step scheduler with an explicit owned lifecycle
///
/// Drives playback over the loop region on a 16th-note grid. Schedule
/// times increase by exactly one step duration per step; the duration is
/// re-read from the timeline's tempo as each step is committed, so tempo
/// changes apply from the next step onward.
pub struct Transport {
    state: TransportState,
    /// Steps committed since `begin`, monotone across loop wraps
    step_count: u64,
    /// Target engine-clock time of the next uncommitted step
    next_step_time: f64,
    lookahead: f64,
}

impl Transport {
    /// How far ahead of the clock steps are committed, in seconds
    pub const DEFAULT_LOOKAHEAD: f64 = 0.1;

    pub fn new() -> Self {
        Self::with_lookahead(Self::DEFAULT_LOOKAHEAD)
    }

    pub fn with_lookahead(lookahead: f64) -> Self {
        assert!(lookahead > 0.0, "Lookahead window must be positive");
        Self {
            state: TransportState::Stopped,
            step_count: 0,
            next_step_time: 0.0,
            lookahead,
        }
    }

    pub fn state(&self) -> TransportState {
        self.state
    }

    /// Steps committed since playback began
    pub fn step_count(&self) -> u64 {
        self.step_count
    }

    /// Nominal duration of one 16th-note step at a given tempo
    pub fn step_duration(tempo: f64) -> f64 {
        60.0 / tempo / 4.0
    }

    /// Enter Playing at step 0, anchored to `now` on the engine clock
    pub fn begin(&mut self, now: f64) {
        self.state = TransportState::Playing;
        self.step_count = 0;
        self.next_step_time = now;
    }

    /// Enter Stopped and discard all scheduling state
    pub fn halt(&mut self) {
        self.state = TransportState::Stopped;
        self.step_count = 0;
        self.next_step_time = 0.0;
    }

    /// Commit every step due inside the lookahead window
    ///
    /// Returns the number of steps committed. Per step: map the monotone
    /// step count into the loop region, then trigger every track whose
    /// resolved activation passes the mute/solo policy, in roster order.
    pub fn tick(
        &mut self,
        timeline: &TimelineState,
        now: f64,
        dispatch: &dyn InstrumentDispatch,
    ) -> usize {
        self.tick_with(timeline, now, dispatch, &mut |_, _| {})
    }

    /// `tick`, reporting each committed step's position and target time
    pub fn tick_with(
        &mut self,
        timeline: &TimelineState,
        now: f64,
        dispatch: &dyn InstrumentDispatch,
        on_step: &mut dyn FnMut(usize, f64),
    ) -> usize {
        if !self.state.is_playing() {
            return 0;
        }

        if now - self.next_step_time > self.lookahead {
            log::warn!(
                "scheduler fell {:.3}s behind the lookahead window",
                now - self.next_step_time
            );
        }

        let mut committed = 0;
        while self.next_step_time < now + self.lookahead {
            let (loop_start, loop_end) = timeline.loop_bounds();
            let span = (loop_end - loop_start) as u64;
            let position = loop_start + (self.step_count % span) as usize;

            let soloed = policy::any_solo(&timeline.tracks);
            for track in &timeline.tracks {
                if !policy::track_is_audible(track, soloed) {
                    continue;
                }
                let cell = resolver::resolved_step(track, position);
                if cell.active {
                    dispatch.trigger(track.id, self.next_step_time, cell.velocity);
                }
            }

            on_step(position, self.next_step_time);

            self.step_count += 1;
            self.next_step_time += Self::step_duration(timeline.tempo());
            committed += 1;
        }

        committed
    }
}

impl Default for Transport {
    fn default() -> Self {
        Self::new()
    }
}
