use std::io::Read;

use csv::ReaderBuilder;

use crate::models::Error;
use crate::types::{Keyword, ResultSequence};

/// Loads keyword result sequences from CSV input.
///
/// Each row is `keyword,result1,result2,...`: the first field is the keyword, every
/// following field one ranked result token. Rows may carry different numbers of
/// results; blank fields are dropped so trailing commas are harmless. A keyword with
/// no results parses as an empty sequence.
///
/// # Arguments
/// * `reader` - Any `Read` source producing the CSV rows (a file, stdin, a byte slice).
///
/// # Returns
/// * The `(keyword, sequence)` pairs in input order, or an `Error::InputParseError` if
///   a row is unreadable or has an empty keyword field.
pub fn load_result_sequences<R: Read>(
    reader: R,
) -> Result<Vec<(Keyword, ResultSequence)>, Error> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut entries = Vec::new();

    for (row_idx, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|err| {
            Error::InputParseError(format!("row {}: {}", row_idx + 1, err))
        })?;

        let mut fields = record.iter().map(str::trim);

        let keyword = match fields.next() {
            Some(keyword) if !keyword.is_empty() => keyword.to_string(),
            _ => {
                return Err(Error::InputParseError(format!(
                    "row {}: missing keyword in first field",
                    row_idx + 1
                )))
            }
        };

        let sequence: ResultSequence = fields
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();

        entries.push((keyword, sequence));
    }

    Ok(entries)
}
