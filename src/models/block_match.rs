/// Represents one maximal block of tokens common to two result sequences.
///
/// A block is contiguous in both sequences: `len` tokens starting at `a_start` in the
/// first sequence equal the `len` tokens starting at `b_start` in the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMatch {
    /// The index of the block's first token in the first sequence.
    pub a_start: usize,

    /// The index of the block's first token in the second sequence.
    pub b_start: usize,

    /// The number of matching tokens in the block. Zero means no common block was found.
    pub len: usize,
}

impl BlockMatch {
    /// An empty block anchored at the given window origin, used as the search seed.
    pub fn empty(a_start: usize, b_start: usize) -> Self {
        Self {
            a_start,
            b_start,
            len: 0,
        }
    }
}
