use serp_similarity::{load_result_sequences, Keyword, ResultSequence};
use std::error::Error;
use std::fs::File;

/// Utility to load keyword result sequences from a CSV file for testing and benchmarking.
pub fn load_result_sequences_from_file(
    file_path: &str,
) -> Result<Vec<(Keyword, ResultSequence)>, Box<dyn Error>> {
    let file = File::open(file_path)?;
    let entries = load_result_sequences(file)?;

    Ok(entries)
}
