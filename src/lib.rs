mod constants;
pub mod models;
pub use constants::EMPTY_PEER_SET_RATIO;
pub use models::{BlockMatch, Error, KeywordSimilarityAggregator, SequenceSimilarity};
pub mod types;
mod utils;
pub use types::{Keyword, KeywordScore, ResultSequence, SimilarityRatio, Token, TokenRef};
pub use utils::{arithmetic_mean, load_result_sequences, ratio_to_percentage};

/// Scores every keyword's result sequence against all the others in the batch.
///
/// Returns one integer percentage per input sequence, index-aligned with the input:
/// the average Ratcliff/Obershelp similarity of that sequence against each of its
/// peers. High scores across several keywords indicate they surface near-identical
/// SERPs (keyword cannibalization).
pub fn score_serp_similarity(sequences: &[ResultSequence]) -> Vec<KeywordScore> {
    KeywordSimilarityAggregator::new(sequences).score_percentages()
}
