use log::debug;

use crate::constants::EMPTY_PEER_SET_RATIO;
use crate::models::SequenceSimilarity;
use crate::types::{KeywordScore, ResultSequence, SimilarityRatio};
use crate::utils::{arithmetic_mean, ratio_to_percentage};

/// Aggregates pairwise sequence similarity into one score per keyword.
///
/// For each sequence in the batch this computes its ratio against every *other*
/// sequence (a sequence is never compared with itself), averages the ratios, and
/// converts the mean into an integer percentage. The pipeline is three pure stages
/// (pairwise grid, mean, percentage) so each can be exercised in isolation.
pub struct KeywordSimilarityAggregator<'a> {
    sequences: &'a [ResultSequence],
}

impl<'a> KeywordSimilarityAggregator<'a> {
    pub fn new(sequences: &'a [ResultSequence]) -> Self {
        Self { sequences }
    }

    /// Computes the pairwise comparison grid.
    ///
    /// # Returns
    /// * One row per input sequence, in input order. Row `i` holds the ratios of
    ///   `sequences[i]` against every `sequences[j]` with `j != i`, also in input
    ///   order, so each row has `N - 1` entries.
    ///
    /// Peers are selected by index, not by value: two keywords that happen to share
    /// an identical sequence are still compared and contribute a ratio of `1.0`.
    pub fn pairwise_ratios(&self) -> Vec<Vec<SimilarityRatio>> {
        self.sequences
            .iter()
            .enumerate()
            .map(|(i, sequence)| {
                self.sequences
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, peer)| SequenceSimilarity::new(sequence, peer).ratio())
                    .collect()
            })
            .collect()
    }

    /// Scores every sequence in the batch.
    ///
    /// # Returns
    /// * One integer percentage in `[0, 100]` per input sequence, index-aligned with
    ///   the input. A batch with a single sequence yields `[100]`: with no peer to
    ///   differ from, the keyword falls back to full similarity.
    pub fn score_percentages(&self) -> Vec<KeywordScore> {
        debug!(
            "Scoring {} result sequences against each other",
            self.sequences.len()
        );

        self.pairwise_ratios()
            .into_iter()
            .map(|peer_ratios| {
                let mean_ratio =
                    arithmetic_mean(&peer_ratios).unwrap_or(EMPTY_PEER_SET_RATIO);
                ratio_to_percentage(mean_ratio)
            })
            .collect()
    }
}
