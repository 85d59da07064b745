// Pattern merge - folds an external 0/1 pattern into kick/snare/hat clips
//
// Deterministic and idempotent: merging the same pattern against the same
// grid twice yields byte-identical clip sets. Never reads tempo.

use crate::timeline::clip::{Clip, Step};
use crate::timeline::state::TimelineState;
use crate::timeline::track::TrackId;

/// Fixed ids so repeated merges produce identical clips
pub const KICK_CLIP_ID: &str = "ai-kick";
pub const SNARE_CLIP_ID: &str = "ai-snare";
pub const HAT_CLIP_ID: &str = "ai-hat";

/// Rewrite the rhythm section from an externally supplied 0/1 pattern
///
/// Kick, snare, and closed hat each get a single full-timeline clip; every
/// other track is cleared. The pattern repeats over the timeline when
/// shorter than `total_steps`. Rules, with `step_in_bar = i % steps_per_bar`:
/// - kick: `i % 4 == 0` or the pattern is truthy at `i`, velocity 1.0
/// - snare: backbeat at `step_in_bar` 4 and 12, velocity 1.0
/// - hat: every step, velocity 0.6
///
/// An empty pattern behaves as all-zero (the four-on-the-floor kick and
/// backbeat remain).
pub fn merge_pattern(timeline: &mut TimelineState, pattern: &[u8]) {
    let total = timeline.total_steps();
    let steps_per_bar = timeline.steps_per_bar() as usize;
    let pattern_len = pattern.len().max(1);

    let mut kick = Clip::with_id(KICK_CLIP_ID, 0, total);
    kick.name = Some("AI Kick".to_string());
    let mut snare = Clip::with_id(SNARE_CLIP_ID, 0, total);
    snare.name = Some("AI Snare".to_string());
    let mut hat = Clip::with_id(HAT_CLIP_ID, 0, total);
    hat.name = Some("AI Hi-hat".to_string());

    for i in 0..total {
        let step_in_bar = i % steps_per_bar;
        let ai_on = pattern.get(i % pattern_len).is_some_and(|&v| v != 0);

        if i % 4 == 0 || ai_on {
            kick.steps[i] = Step::on(1.0);
        }
        if step_in_bar == 4 || step_in_bar == 12 {
            snare.steps[i] = Step::on(1.0);
        }
        hat.steps[i] = Step::on(0.6);
    }

    for track in &mut timeline.tracks {
        track.clear_clips();
    }
    if let Some(track) = timeline.track_by_id_mut(TrackId::Kick) {
        track.set_clips(vec![kick]);
    }
    if let Some(track) = timeline.track_by_id_mut(TrackId::Snare) {
        track.set_clips(vec![snare]);
    }
    if let Some(track) = timeline.track_by_id_mut(TrackId::HatClosed) {
        track.set_clips(vec![hat]);
    }
}
