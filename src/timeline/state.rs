// TimelineState - global arrangement and transport configuration
// Single source of truth for timeline length and the track roster

use crate::timeline::clip::{Clip, ClipId};
use crate::timeline::track::{Track, TrackId};

/// Tempo bounds in BPM
pub const MIN_BPM: f64 = 20.0;
pub const MAX_BPM: f64 = 999.0;

/// The full arrangement: transport parameters plus the ordered track roster
///
/// Track order is significant: within one playback step, instruments are
/// triggered in roster order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimelineState {
    tempo: f64,
    swing: f64,
    bars: u32,
    steps_per_bar: u32,
    loop_start: usize,
    loop_end: usize,

    /// Ordered instrument lanes
    pub tracks: Vec<Track>,
}

impl TimelineState {
    /// Creates a timeline with the default 9-slot roster, 120 BPM,
    /// and the loop spanning the whole timeline
    pub fn new(bars: u32, steps_per_bar: u32) -> Self {
        assert!(bars > 0, "Timeline must span at least one bar");
        assert!(steps_per_bar > 0, "Bars must contain at least one step");

        let total = (bars * steps_per_bar) as usize;
        Self {
            tempo: 120.0,
            swing: 0.0,
            bars,
            steps_per_bar,
            loop_start: 0,
            loop_end: total,
            tracks: TrackId::ALL.iter().map(|&id| Track::new(id)).collect(),
        }
    }

    /// Timeline length in steps, always derived from the current bar count
    pub fn total_steps(&self) -> usize {
        (self.bars * self.steps_per_bar) as usize
    }

    pub fn tempo(&self) -> f64 {
        self.tempo
    }

    /// Set the tempo in BPM, clamped to [20, 999]
    /// Takes effect on the next scheduled step; no rebuild required
    pub fn set_tempo(&mut self, bpm: f64) {
        self.tempo = bpm.clamp(MIN_BPM, MAX_BPM);
    }

    pub fn swing(&self) -> f64 {
        self.swing
    }

    /// Set the swing fraction, clamped to [0, 1]
    /// Stored for instrument layers; does not shift the scheduling grid
    pub fn set_swing(&mut self, swing: f64) {
        self.swing = swing.clamp(0.0, 1.0);
    }

    pub fn bars(&self) -> u32 {
        self.bars
    }

    pub fn steps_per_bar(&self) -> u32 {
        self.steps_per_bar
    }

    /// Resize the timeline to a new bar count
    /// Loop bounds reset to cover the resized timeline
    pub fn set_bars(&mut self, bars: u32) {
        assert!(bars > 0, "Timeline must span at least one bar");
        self.bars = bars;
        self.reset_loop();
    }

    /// Change the step resolution per bar
    /// Loop bounds reset to cover the resized timeline
    pub fn set_steps_per_bar(&mut self, steps_per_bar: u32) {
        assert!(steps_per_bar > 0, "Bars must contain at least one step");
        self.steps_per_bar = steps_per_bar;
        self.reset_loop();
    }

    /// Playback loop bounds as (start, end), end exclusive
    pub fn loop_bounds(&self) -> (usize, usize) {
        (self.loop_start, self.loop_end)
    }

    /// Set the playback loop, clamped so that
    /// `0 <= start < end <= total_steps` always holds
    pub fn set_loop(&mut self, start: usize, end: usize) {
        let end = end.clamp(1, self.total_steps());
        self.loop_start = start.min(end - 1);
        self.loop_end = end;
    }

    fn reset_loop(&mut self) {
        self.loop_start = 0;
        self.loop_end = self.total_steps();
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn track_mut(&mut self, index: usize) -> Option<&mut Track> {
        self.tracks.get_mut(index)
    }

    pub fn track_by_id(&self, id: TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| t.id == id)
    }

    pub fn track_by_id_mut(&mut self, id: TrackId) -> Option<&mut Track> {
        self.tracks.iter_mut().find(|t| t.id == id)
    }

    /// Place a new clip on a track
    ///
    /// Start and length are clamped to the current timeline bounds rather
    /// than rejected. Returns the new clip's id, or None for an unknown
    /// track index.
    pub fn add_clip(
        &mut self,
        track_index: usize,
        step_index: usize,
        length: usize,
    ) -> Option<ClipId> {
        let total = self.total_steps();
        let track = self.tracks.get_mut(track_index)?;

        let start = step_index.min(total - 1);
        let length = length.clamp(1, total - start);

        let clip = Clip::new(start, length);
        let id = clip.id.clone();
        track.add_clip(clip);
        Some(id)
    }

    /// Remove a clip from a track by id
    pub fn remove_clip(&mut self, track_index: usize, clip_id: &ClipId) -> Option<Clip> {
        self.tracks.get_mut(track_index)?.remove_clip(clip_id)
    }

    /// Toggle one step inside a clip; returns the new active value
    pub fn toggle_step(
        &mut self,
        track_index: usize,
        clip_id: &ClipId,
        local_index: usize,
    ) -> Option<bool> {
        self.tracks
            .get_mut(track_index)?
            .clip_mut(clip_id)?
            .toggle_step(local_index)
    }

    pub fn set_mute(&mut self, track_index: usize, mute: bool) {
        if let Some(track) = self.tracks.get_mut(track_index) {
            track.mute = mute;
        }
    }

    pub fn set_solo(&mut self, track_index: usize, solo: bool) {
        if let Some(track) = self.tracks.get_mut(track_index) {
            track.solo = solo;
        }
    }
}

impl Default for TimelineState {
    /// Four bars on a 16th-note grid, the product default
    fn default() -> Self {
        Self::new(4, 16)
    }
}
