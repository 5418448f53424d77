mod test_utils;

use serp_similarity::{load_result_sequences, score_serp_similarity, ResultSequence};
use test_utils::load_result_sequences_from_file;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_serps_from_file_all_score_100() {
        let entries = load_result_sequences_from_file("tests/test_files/test_keywords_1.csv")
            .expect("Failed to load keyword rows from CSV");

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].0, "International Business Machines Corporation");

        let sequences: Vec<ResultSequence> =
            entries.into_iter().map(|(_, sequence)| sequence).collect();

        let scores = score_serp_similarity(&sequences);
        assert_eq!(scores, vec![100, 100, 100]);
    }

    #[test]
    fn test_outlier_keyword_from_file_scores_0() {
        let entries = load_result_sequences_from_file("tests/test_files/test_keywords_2.csv")
            .expect("Failed to load keyword rows from CSV");

        let sequences: Vec<ResultSequence> =
            entries.into_iter().map(|(_, sequence)| sequence).collect();

        // The first two keywords share 2 of 3 results (ratio 2/3 with each other,
        // 0 with the outlier): mean 1/3 converts to 33. The outlier shares nothing.
        let scores = score_serp_similarity(&sequences);
        assert_eq!(scores, vec![33, 33, 0]);
    }

    #[test]
    fn test_loader_accepts_mixed_length_rows() {
        let csv = "short tail,ibm.com,wikipedia.org\nlong tail,ibm.com\nno results,\n";
        let entries = load_result_sequences(csv.as_bytes()).expect("Failed to parse rows");

        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].1, vec!["ibm.com", "wikipedia.org"]);
        assert_eq!(entries[1].1, vec!["ibm.com"]);
        assert!(entries[2].1.is_empty());
    }

    #[test]
    fn test_loader_trims_whitespace() {
        let csv = "ibm careers, ibm.com , wikipedia.org\n";
        let entries = load_result_sequences(csv.as_bytes()).expect("Failed to parse rows");

        assert_eq!(entries[0].0, "ibm careers");
        assert_eq!(entries[0].1, vec!["ibm.com", "wikipedia.org"]);
    }

    #[test]
    fn test_loader_rejects_missing_keyword() {
        let csv = ",ibm.com,wikipedia.org\n";
        let result = load_result_sequences(csv.as_bytes());

        let err = result.expect_err("A keyword-less row should not parse");
        assert!(err.to_string().contains("missing keyword"));
    }

    #[test]
    fn test_loader_preserves_row_order() {
        let csv = "first,a.com\nsecond,b.com\nthird,c.com\n";
        let entries = load_result_sequences(csv.as_bytes()).expect("Failed to parse rows");

        let keywords: Vec<&str> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keywords, vec!["first", "second", "third"]);
    }
}
