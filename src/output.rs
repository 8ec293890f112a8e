//! Output formatting and persistence for student results.
//!
//! Supports pretty-printing, JSON serialization, and CSV export.

use anyhow::Result;
use tracing::{debug, info};

use crate::records::StudentResult;
use csv::Writer;

/// Logs a student result using Rust's debug pretty-print format.
pub fn print_pretty(result: &StudentResult) {
    debug!("{:#?}", result);
}

/// Logs a student result as pretty-printed JSON.
pub fn print_json(result: &StudentResult) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

/// Writes evaluated results to a CSV file with a fixed header row.
///
/// Skips the write entirely when there are no results, so an empty run
/// never leaves behind an empty or header-only file.
pub fn write_results(path: &str, results: &[StudentResult]) -> Result<()> {
    if results.is_empty() {
        info!(path, "No results to write, skipping output file");
        return Ok(());
    }

    let mut writer = Writer::from_path(path)?;
    for result in results {
        writer.serialize(result)?;
    }
    writer.flush()?;

    info!(path, rows = results.len(), "Results written");
    Ok(())
}
