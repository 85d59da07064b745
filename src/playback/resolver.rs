// Step activation resolver - flattens a track's clips into a
// per-step activation grid spanning the whole timeline

use crate::timeline::track::Track;

/// One entry of a resolved activation grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedStep {
    pub active: bool,
    pub velocity: f32,
}

impl Default for ResolvedStep {
    fn default() -> Self {
        Self {
            active: false,
            velocity: 0.0,
        }
    }
}

impl ResolvedStep {
    fn merge(&mut self, velocity: f32) {
        self.active = true;
        if velocity > self.velocity {
            self.velocity = velocity;
        }
    }
}

/// Flatten a track's clips into an activation array of exactly
/// `total_steps` entries
///
/// A step is active iff any clip covering it marks it active (logical OR,
/// never overwrite). Overlapping active steps keep the loudest velocity.
/// Clip tails extending past `total_steps` are truncated. Pure; recompute
/// whenever clip data or the timeline length changes.
pub fn resolve_track(track: &Track, total_steps: usize) -> Vec<ResolvedStep> {
    let mut grid = vec![ResolvedStep::default(); total_steps];

    for clip in track.clips() {
        for (local, step) in clip.steps.iter().enumerate() {
            let global = clip.start + local;
            if global >= total_steps {
                break;
            }
            if step.active {
                grid[global].merge(step.velocity_or_default());
            }
        }
    }

    grid
}

/// Resolve a single global step without building the full grid
///
/// Same semantics as `resolve_track`; the scheduler calls this once per
/// track per tick so live clip edits are picked up on the next step.
/// The caller is responsible for passing `global_step < total_steps`.
pub fn resolved_step(track: &Track, global_step: usize) -> ResolvedStep {
    let mut cell = ResolvedStep::default();

    for clip in track.clips() {
        if let Some(local) = clip.covers(global_step) {
            let step = &clip.steps[local];
            if step.active {
                cell.merge(step.velocity_or_default());
            }
        }
    }

    cell
}
