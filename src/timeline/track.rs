// Track - one fixed-identity instrument lane holding zero or more clips

use crate::timeline::clip::{Clip, ClipId};
use std::fmt;

/// Fixed instrument slots addressable by the sequencer
/// The id space is closed; dispatch logic switches exhaustively on it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackId {
    Kick,
    Snare,
    HatClosed,
    HatOpen,
    Tom1,
    Tom2,
    Tom3,
    Ride,
    Crash,
}

impl TrackId {
    /// Full roster in playback trigger order
    pub const ALL: [TrackId; 9] = [
        TrackId::Kick,
        TrackId::Snare,
        TrackId::HatClosed,
        TrackId::HatOpen,
        TrackId::Tom1,
        TrackId::Tom2,
        TrackId::Tom3,
        TrackId::Ride,
        TrackId::Crash,
    ];

    /// Display label for the default roster
    pub fn default_name(&self) -> &'static str {
        match self {
            TrackId::Kick => "Kick",
            TrackId::Snare => "Snare",
            TrackId::HatClosed => "Hi-hat (Closed)",
            TrackId::HatOpen => "Hi-hat (Open)",
            TrackId::Tom1 => "Tom 1",
            TrackId::Tom2 => "Tom 2",
            TrackId::Tom3 => "Tom 3",
            TrackId::Ride => "Ride",
            TrackId::Crash => "Crash",
        }
    }
}

impl fmt::Display for TrackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default_name())
    }
}

/// One instrument lane on the timeline
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Track {
    /// Instrument slot this lane triggers
    pub id: TrackId,

    /// Display label, no semantic effect on playback
    pub name: String,

    /// Placed clips; ids are unique within this track only
    clips: Vec<Clip>,

    /// Mute always suppresses this track, regardless of solo state
    pub mute: bool,

    /// When any track is soloed, only soloed tracks sound
    pub solo: bool,

    /// Gain hint consumed only by instrument dispatch
    pub volume: Option<f32>,

    /// Stereo position hint in [-1, 1], consumed only by dispatch
    pub pan: Option<f32>,
}

impl Track {
    /// Creates an empty lane with the slot's default label
    pub fn new(id: TrackId) -> Self {
        Self {
            id,
            name: id.default_name().to_string(),
            clips: Vec::new(),
            mute: false,
            solo: false,
            volume: None,
            pan: None,
        }
    }

    /// All clips on this track
    pub fn clips(&self) -> &[Clip] {
        &self.clips
    }

    /// Add a clip to this track
    pub fn add_clip(&mut self, clip: Clip) {
        debug_assert!(
            !self.clips.iter().any(|c| c.id == clip.id),
            "clip id must be unique within its track"
        );
        self.clips.push(clip);
    }

    /// Remove a clip by id
    pub fn remove_clip(&mut self, clip_id: &ClipId) -> Option<Clip> {
        let index = self.clips.iter().position(|c| &c.id == clip_id)?;
        Some(self.clips.remove(index))
    }

    /// Get a clip by id
    pub fn clip(&self, clip_id: &ClipId) -> Option<&Clip> {
        self.clips.iter().find(|c| &c.id == clip_id)
    }

    /// Get a mutable clip by id
    pub fn clip_mut(&mut self, clip_id: &ClipId) -> Option<&mut Clip> {
        self.clips.iter_mut().find(|c| &c.id == clip_id)
    }

    /// Replace the whole clip set (pattern merge uses this)
    pub fn set_clips(&mut self, clips: Vec<Clip>) {
        self.clips = clips;
    }

    /// Remove every clip, leaving the track silent
    pub fn clear_clips(&mut self) {
        self.clips.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_track_defaults() {
        let track = Track::new(TrackId::HatClosed);
        assert_eq!(track.name, "Hi-hat (Closed)");
        assert!(track.clips().is_empty());
        assert!(!track.mute);
        assert!(!track.solo);
    }

    #[test]
    fn test_add_remove_clip() {
        let mut track = Track::new(TrackId::Kick);
        let clip = Clip::new(0, 8);
        let id = clip.id.clone();

        track.add_clip(clip);
        assert_eq!(track.clips().len(), 1);
        assert!(track.clip(&id).is_some());

        let removed = track.remove_clip(&id);
        assert!(removed.is_some());
        assert!(track.clips().is_empty());

        // Removing again is a no-op
        assert!(track.remove_clip(&id).is_none());
    }

    #[test]
    fn test_roster_order() {
        assert_eq!(TrackId::ALL[0], TrackId::Kick);
        assert_eq!(TrackId::ALL[1], TrackId::Snare);
        assert_eq!(TrackId::ALL[2], TrackId::HatClosed);
        assert_eq!(TrackId::ALL.len(), 9);
    }
}
