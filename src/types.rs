// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a result identifier as an owned `String`. Tokens are the basic units of
/// comparison: a domain name (e.g. `ibm.com`) or a full URL, depending on how the caller
/// normalized the SERP upstream.
pub type Token = String;

/// Represents a borrowed view of a token as a `str`. This is used when ownership is not required.
pub type TokenRef = str;

/// Represents the query text a result sequence belongs to, as an owned `String`. The engine
/// never inspects keywords; they are carried so callers can pair scores back up with queries.
pub type Keyword = String;

/// One keyword's ranked SERP: an ordered list of result tokens, highest-ranked first.
/// Order is significant. Any length is accepted, including zero.
pub type ResultSequence = Vec<Token>;

/// A pairwise similarity ratio in the closed interval `[0.0, 1.0]`. Symmetric for any
/// pair of sequences.
pub type SimilarityRatio = f64;

/// A per-keyword similarity score in `[0, 100]`: the average ratio of that keyword's
/// sequence against every other sequence in the batch, expressed as an integer percentage.
pub type KeywordScore = usize;
