//! Main application modules.
//!
//! This module provides input resolution (IP validation, batch files) and
//! the console sink used by the run.

pub mod console;
pub mod input;

// Re-export public API
pub use console::{render_record, Console};
pub use input::{
    is_valid_ip, parse_ip_lines, read_ip_file, resolve_input, resolve_single, ResolvedInput,
    SkippedLine,
};
