use crate::types::SimilarityRatio;

/// Ratio assigned to a keyword with no peers to compare against (a single-sequence
/// batch). A lone keyword is treated as fully similar to itself by convention.
pub const EMPTY_PEER_SET_RATIO: SimilarityRatio = 1.0;
