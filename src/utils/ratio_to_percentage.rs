use crate::types::{KeywordScore, SimilarityRatio};

/// Converts a mean similarity ratio into an integer percentage.
///
/// The ratio is first rounded to 2 decimal places, then `rounded * 100.0` is truncated
/// toward zero. Truncating after the intermediate rounding can shave a point off some
/// inputs (a ratio of exactly 0.29 converts to 28, not 29); this double-rounding is
/// kept for parity with the reference scoring, so callers must not assume the
/// percentage round-trips to the exact ratio.
pub fn ratio_to_percentage(ratio: SimilarityRatio) -> KeywordScore {
    let rounded = (ratio * 100.0).round() / 100.0;

    (rounded * 100.0) as KeywordScore
}
