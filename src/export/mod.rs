//! Saving lookup results to a file.
//!
//! Two formats are supported:
//! - JSON: one pretty-printed array of objects
//! - CSV: header from the sorted union of all record keys

mod csv;
mod json;
mod types;

use std::path::Path;

use crate::config::OutputFormat;
use crate::error_handling::ExportError;
use crate::lookup::LookupResult;

pub use self::csv::{csv_header, write_csv, write_csv_to};
pub use self::json::{write_json, write_json_to};
pub use self::types::SaveOutcome;

/// Writes `results` to `path` in `format`.
///
/// # Errors
///
/// Returns `ExportError::Io` if the file cannot be created or written.
pub fn write_results(
    results: &[LookupResult],
    path: &Path,
    format: OutputFormat,
) -> Result<SaveOutcome, ExportError> {
    match format {
        OutputFormat::Json => write_json(results, path),
        OutputFormat::Csv => write_csv(results, path),
    }
}
