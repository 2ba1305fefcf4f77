//! CSV export.
//!
//! The header is the sorted union of the keys of every record, so successful
//! payloads and `{ip, error}` records share one table. A record without a
//! given key leaves that cell empty.

use std::collections::BTreeSet;
use std::fs::File;
use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use serde_json::Value;

use crate::error_handling::ExportError;
use crate::export::SaveOutcome;
use crate::lookup::LookupResult;

/// Sorted union of all keys across `results`.
pub fn csv_header(results: &[LookupResult]) -> Vec<String> {
    results
        .iter()
        .flat_map(LookupResult::keys)
        .cloned()
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// Writes `results` to `path`.
///
/// Returns [`SaveOutcome::NothingToSave`] without creating the file when
/// `results` is empty.
pub fn write_csv(results: &[LookupResult], path: &Path) -> Result<SaveOutcome, ExportError> {
    if results.is_empty() {
        return Ok(SaveOutcome::NothingToSave);
    }
    let file = File::create(path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    write_csv_to(results, file)?;
    Ok(SaveOutcome::Saved {
        records: results.len(),
    })
}

/// Writes the header row and one row per record to any writer.
pub fn write_csv_to<W: Write>(results: &[LookupResult], writer: W) -> Result<(), ExportError> {
    let header = csv_header(results);
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    writer.write_record(&header)?;
    for record in results {
        writer.write_record(header.iter().map(|key| cell(record.get(key))))?;
    }
    writer.flush().map_err(csv::Error::from)?;
    Ok(())
}

/// Strings are written raw, `null` and missing keys as empty cells, anything
/// else as compact JSON.
fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
