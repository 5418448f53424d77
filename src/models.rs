pub mod block_match;
pub use block_match::BlockMatch;

pub mod error;
pub use error::Error;

pub mod keyword_similarity_aggregator;
pub use keyword_similarity_aggregator::KeywordSimilarityAggregator;

pub mod sequence_similarity;
pub use sequence_similarity::SequenceSimilarity;
