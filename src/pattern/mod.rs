// Pattern module - deterministic merge of externally generated rhythms
// and the contract for the AI beat-generation collaborator

pub mod merge;
pub mod source;

pub use merge::merge_pattern;
pub use source::{BeatRequest, GeneratedPattern, PatternError, PatternSource, apply_generated};
