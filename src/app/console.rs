//! Console output for progress and records.
//!
//! Output goes to an injected writer. Styling is decided per call from the
//! record being printed and the sink's `color` flag. The escape codes
//! themselves come from `colored`, whose terminal and `NO_COLOR` detection
//! still applies unless `colored::control::set_override` is called; the
//! binary sets that override from `--no-color`.

use std::io::{self, Write};
use std::path::Path;

use colored::Colorize;

use crate::export::SaveOutcome;
use crate::lookup::LookupResult;

/// Renders a record as 2-space indented JSON.
///
/// With `color`, the `"ip"` key is cyan and the `"error"` key red.
pub fn render_record(record: &LookupResult, color: bool) -> String {
    let json = serde_json::to_string_pretty(record.fields()).unwrap_or_else(|_| "{}".to_string());
    if !color {
        return json;
    }
    json.lines()
        .map(|line| {
            line.replacen("\"ip\"", &"\"ip\"".cyan().to_string(), 1)
                .replacen("\"error\"", &"\"error\"".red().to_string(), 1)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Console sink.
pub struct Console<W: Write> {
    out: W,
    color: bool,
    quiet: bool,
}

impl<W: Write> Console<W> {
    /// Creates a sink writing to `out`.
    ///
    /// `quiet` suppresses progress and record output; save messages are
    /// always printed.
    pub fn new(out: W, color: bool, quiet: bool) -> Self {
        Self { out, color, quiet }
    }

    /// `[index/total] Processing <ip>...`
    pub fn progress(&mut self, index: usize, total: usize, ip: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = format!("[{index}/{total}] Processing {ip}...");
        if self.color {
            writeln!(self.out, "{}", line.green())
        } else {
            writeln!(self.out, "{line}")
        }
    }

    /// Pretty-printed record.
    pub fn record(&mut self, record: &LookupResult) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.out, "{}", render_record(record, self.color))
    }

    /// Result of saving the output file.
    pub fn saved(&mut self, path: &Path, outcome: &SaveOutcome) -> io::Result<()> {
        let (message, ok) = match outcome {
            SaveOutcome::Saved { .. } => (format!("Results saved to {}", path.display()), true),
            SaveOutcome::NothingToSave => ("No results to save.".to_string(), false),
        };
        self.line(&message, ok)
    }

    /// Failure to save the output file.
    pub fn save_failed(&mut self, error: &dyn std::fmt::Display) -> io::Result<()> {
        self.line(&format!("Failed to save output file: {error}"), false)
    }

    fn line(&mut self, message: &str, ok: bool) -> io::Result<()> {
        match (self.color, ok) {
            (false, _) => writeln!(self.out, "{message}"),
            (true, true) => writeln!(self.out, "{}", message.green()),
            (true, false) => writeln!(self.out, "{}", message.red()),
        }
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
