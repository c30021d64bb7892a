//! CSV batch parsing.
//!
//! Input records have the headers `delivery_address,last_line`. Each parsed
//! address is written on its own line, either as the canonical one-line form
//! or as JSON. Records that fail to parse are logged and counted.

use std::io::{Read, Write};

use serde::Deserialize;
use usps_address::{AddressParser, ReferenceTables};

/// One input row.
#[derive(Debug, Deserialize)]
struct BatchRecord {
    delivery_address: String,
    last_line: String,
}

/// Counts from a batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records parsed successfully.
    pub parsed: u64,
    /// Records that could not be read or parsed.
    pub failed: u64,
}

/// Errors that abort a batch run.
#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    /// The CSV header could not be read.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing a result failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A result could not be serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Parses every record from `input`, writing one line per parsed address
/// to `output`.
///
/// # Errors
///
/// Returns a [`BatchError`] if the output cannot be written. Malformed or
/// unparseable records are skipped and counted in the summary instead.
pub fn run<T: ReferenceTables + ?Sized>(
    parser: &AddressParser<'_, T>,
    input: impl Read,
    output: &mut impl Write,
    json: bool,
) -> Result<BatchSummary, BatchError> {
    let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(input);
    let mut summary = BatchSummary::default();

    for (index, result) in reader.deserialize::<BatchRecord>().enumerate() {
        let record_number = index + 1;
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("record {record_number}: malformed row: {e}");
                summary.failed += 1;
                continue;
            }
        };

        match parser.parse(&record.delivery_address, &record.last_line) {
            Ok(address) => {
                if json {
                    writeln!(output, "{}", serde_json::to_string(&address)?)?;
                } else {
                    writeln!(output, "{} {}", address.delivery_line(), address.last_line())?;
                }
                summary.parsed += 1;
            }
            Err(e) => {
                log::warn!(
                    "record {record_number}: \"{}\" / \"{}\": {e}",
                    record.delivery_address,
                    record.last_line
                );
                summary.failed += 1;
            }
        }
    }

    log::info!(
        "Batch complete: {} parsed, {} failed",
        summary.parsed,
        summary.failed
    );

    Ok(summary)
}
