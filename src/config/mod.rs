//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (endpoint, timeouts, retry defaults, credential paths)
//! - CLI option types and parsing
//! - The library `Config` struct

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, InputSource, LogFormat, LogLevel, Opt, OutputFormat};
