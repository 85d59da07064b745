// Mute/solo policy - decides per cycle whether a track may sound
// Pure predicates, re-evaluated on every scheduler tick

use crate::timeline::track::Track;

/// Whether any track in the roster is soloed
pub fn any_solo(tracks: &[Track]) -> bool {
    tracks.iter().any(|t| t.solo)
}

/// Whether a single track may sound this cycle
///
/// Mute always wins, even over the track's own solo flag. Otherwise, if
/// any track in the roster is soloed, only soloed tracks pass.
pub fn track_is_audible(track: &Track, any_solo: bool) -> bool {
    if track.mute {
        return false;
    }
    if any_solo {
        return track.solo;
    }
    true
}

/// Roster-level convenience: is the track at `index` audible this cycle?
pub fn is_audible(tracks: &[Track], index: usize) -> bool {
    match tracks.get(index) {
        Some(track) => track_is_audible(track, any_solo(tracks)),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::track::TrackId;

    fn roster() -> Vec<Track> {
        TrackId::ALL.iter().map(|&id| Track::new(id)).collect()
    }

    #[test]
    fn test_default_roster_all_audible() {
        let tracks = roster();
        for i in 0..tracks.len() {
            assert!(is_audible(&tracks, i));
        }
    }

    #[test]
    fn test_mute_suppresses() {
        let mut tracks = roster();
        tracks[0].mute = true;

        assert!(!is_audible(&tracks, 0));
        assert!(is_audible(&tracks, 1));
    }

    #[test]
    fn test_solo_gates_everyone_else() {
        let mut tracks = roster();
        tracks[2].solo = true;

        assert!(is_audible(&tracks, 2));
        for i in [0, 1, 3, 8] {
            assert!(!is_audible(&tracks, i), "track {} should be gated", i);
        }
    }

    #[test]
    fn test_mute_wins_over_own_solo() {
        let mut tracks = roster();
        tracks[2].solo = true;
        tracks[2].mute = true;

        // The muted-and-soloed track stays silent, and its solo still
        // gates everything else
        assert!(!is_audible(&tracks, 2));
        assert!(!is_audible(&tracks, 0));
    }

    #[test]
    fn test_multiple_solos() {
        let mut tracks = roster();
        tracks[1].solo = true;
        tracks[4].solo = true;

        assert!(is_audible(&tracks, 1));
        assert!(is_audible(&tracks, 4));
        assert!(!is_audible(&tracks, 0));
    }

    #[test]
    fn test_out_of_range_index() {
        let tracks = roster();
        assert!(!is_audible(&tracks, 99));
    }
}
