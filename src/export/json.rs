//! JSON export.
//!
//! The whole result set is written in one call as a single array of objects,
//! indented with two spaces.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error_handling::ExportError;
use crate::export::SaveOutcome;
use crate::lookup::LookupResult;

/// Writes `results` to `path`. An empty result set is written as `[]`.
pub fn write_json(results: &[LookupResult], path: &Path) -> Result<SaveOutcome, ExportError> {
    let io_error = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    write_json_to(results, &mut writer)?;
    writer.flush().map_err(io_error)?;
    Ok(SaveOutcome::Saved {
        records: results.len(),
    })
}

/// Writes `results` as pretty-printed JSON to any writer.
pub fn write_json_to<W: Write>(results: &[LookupResult], writer: W) -> Result<(), ExportError> {
    serde_json::to_writer_pretty(writer, results)?;
    Ok(())
}
