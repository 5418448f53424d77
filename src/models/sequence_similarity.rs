use std::collections::HashMap;

use crate::models::BlockMatch;
use crate::types::{SimilarityRatio, Token, TokenRef};

/// Computes the Ratcliff/Obershelp similarity between two ordered sequences of result
/// tokens.
///
/// Matching operates on whole tokens (e.g. `ibm.com` as a single unit), never on the
/// characters inside them. The measure is the total length of all maximal matching
/// blocks, found by repeatedly locating the longest block of tokens common to both
/// sequences and recursing into the unmatched regions on either side, normalized as
/// `2 * matched / (a.len() + b.len())`.
///
/// The comparison is pure and borrows its inputs; independent callers can run it
/// concurrently without coordination.
pub struct SequenceSimilarity<'a> {
    a: &'a [Token],
    b: &'a [Token],

    /// Every position in `b` holding a given token, in ascending order. Built once per
    /// pair so each window scan only visits candidate positions, not all of `b`.
    b_token_positions: HashMap<&'a TokenRef, Vec<usize>>,
}

impl<'a> SequenceSimilarity<'a> {
    pub fn new(a: &'a [Token], b: &'a [Token]) -> Self {
        let mut b_token_positions: HashMap<&TokenRef, Vec<usize>> = HashMap::new();
        for (j, token) in b.iter().enumerate() {
            b_token_positions.entry(token.as_str()).or_default().push(j);
        }

        Self {
            a,
            b,
            b_token_positions,
        }
    }

    /// Returns the similarity ratio in `[0.0, 1.0]`.
    ///
    /// Two empty sequences are fully similar (`1.0`); if exactly one sequence is empty
    /// there is nothing to match and the ratio is `0.0`.
    pub fn ratio(&self) -> SimilarityRatio {
        let total_len = self.a.len() + self.b.len();
        if total_len == 0 {
            // No tokens on either side means no possible mismatch.
            return 1.0;
        }

        let mut matched_len = 0;

        // Explicit work list instead of recursion; each entry is an unmatched
        // (a_lo, a_hi, b_lo, b_hi) window still to be searched.
        let mut windows = vec![(0, self.a.len(), 0, self.b.len())];

        while let Some((a_lo, a_hi, b_lo, b_hi)) = windows.pop() {
            let block = self.longest_matching_block(a_lo, a_hi, b_lo, b_hi);
            if block.len == 0 {
                continue;
            }

            matched_len += block.len;
            windows.push((a_lo, block.a_start, b_lo, block.b_start));
            windows.push((
                block.a_start + block.len,
                a_hi,
                block.b_start + block.len,
                b_hi,
            ));
        }

        2.0 * matched_len as SimilarityRatio / total_len as SimilarityRatio
    }

    /// Finds the longest block of tokens common to `a[a_lo..a_hi]` and `b[b_lo..b_hi]`.
    ///
    /// Ties are broken by the earliest start in `a`, then the earliest start in `b`,
    /// which the ascending scan order guarantees without extra bookkeeping.
    fn longest_matching_block(
        &self,
        a_lo: usize,
        a_hi: usize,
        b_lo: usize,
        b_hi: usize,
    ) -> BlockMatch {
        let mut best = BlockMatch::empty(a_lo, b_lo);

        // For the row just processed: run_lengths[j] is the length of the common run
        // ending at b[j].
        let mut run_lengths: HashMap<usize, usize> = HashMap::new();

        for i in a_lo..a_hi {
            let mut next_run_lengths: HashMap<usize, usize> = HashMap::new();

            if let Some(positions) = self.b_token_positions.get(self.a[i].as_str()) {
                for &j in positions {
                    if j < b_lo {
                        continue;
                    }
                    if j >= b_hi {
                        break;
                    }

                    let run_len = if j > b_lo {
                        run_lengths.get(&(j - 1)).copied().unwrap_or(0) + 1
                    } else {
                        1
                    };
                    next_run_lengths.insert(j, run_len);

                    if run_len > best.len {
                        best = BlockMatch {
                            a_start: i + 1 - run_len,
                            b_start: j + 1 - run_len,
                            len: run_len,
                        };
                    }
                }
            }

            run_lengths = next_run_lengths;
        }

        best
    }
}
