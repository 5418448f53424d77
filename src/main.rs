use log::error;
use serp_similarity::{load_result_sequences, score_serp_similarity, ResultSequence};
use std::io;

fn main() {
    // Initialize the logger
    #[cfg(feature = "logger-support")]
    env_logger::init();

    // Read keyword rows (`keyword,result1,result2,...`) from stdin
    let entries = match load_result_sequences(io::stdin()) {
        Ok(entries) => entries,
        Err(e) => {
            error!("Failed to parse keyword rows from stdin: {}", e);
            std::process::exit(1);
        }
    };

    if entries.is_empty() {
        error!("No keyword rows were provided on stdin");
        std::process::exit(1);
    }

    let sequences: Vec<ResultSequence> = entries
        .iter()
        .map(|(_, sequence)| sequence.clone())
        .collect();

    let scores = score_serp_similarity(&sequences);

    // Scores are index-aligned with the input rows, so zipping preserves the pairing
    for ((keyword, _), score) in entries.iter().zip(scores) {
        println!("{}: {}", keyword, score);
    }
}
