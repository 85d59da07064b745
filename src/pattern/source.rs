// Pattern source - the AI beat-generation collaborator's contract
// Only the boundary is modeled here; providers live outside the engine

use crate::pattern::merge::merge_pattern;
use crate::timeline::state::TimelineState;

/// Parameters forwarded to the beat generator
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BeatRequest {
    pub genre: String,
    pub bpm: f64,
    pub bars: u32,
}

impl Default for BeatRequest {
    fn default() -> Self {
        Self {
            genre: "Hip-Hop".to_string(),
            bpm: 120.0,
            bars: 4,
        }
    }
}

/// What the generator returns: a 0/1 accent pattern plus a blurb
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeneratedPattern {
    pub pattern: Vec<u8>,
    pub description: String,
}

/// Failures from the external generator, reported upward
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("pattern source failed: {0}")]
    Source(String),
}

/// External beat-generation capability
pub trait PatternSource {
    fn generate(&self, request: &BeatRequest) -> Result<GeneratedPattern, PatternError>;
}

/// Ask the source for a pattern and merge it into the timeline
///
/// On failure the timeline is left untouched (no partial merge).
/// Returns the generator's description on success.
pub fn apply_generated(
    timeline: &mut TimelineState,
    source: &dyn PatternSource,
    request: &BeatRequest,
) -> Result<String, PatternError> {
    let generated = source.generate(request)?;
    merge_pattern(timeline, &generated.pattern);
    Ok(generated.description)
}
