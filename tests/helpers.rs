// Shared test helpers for mock API setup and test data creation.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::io::Write;

use ipinfo_lookup::credentials::{ExplicitToken, TokenProvider};
use ipinfo_lookup::LookupResult;
use serde_json::Value;
use tempfile::NamedTempFile;

/// Writes lines to a temporary input file.
#[allow(dead_code)] // Used by other test files
pub fn write_ip_file(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    for line in lines {
        writeln!(file, "{}", line).expect("Failed to write line");
    }
    file.flush().expect("Failed to flush file");
    file
}

/// Token providers that always yield `token` (or nothing).
#[allow(dead_code)] // Used by other test files
pub fn token_providers(token: Option<&str>) -> Vec<Box<dyn TokenProvider>> {
    vec![Box::new(ExplicitToken(token.map(str::to_string)))]
}

/// Builds a record from a JSON object literal.
#[allow(dead_code)] // Used by other test files
pub fn record(value: Value) -> LookupResult {
    serde_json::from_value(value).expect("record must be a JSON object")
}

/// A typical ipinfo.io payload for `ip`.
#[allow(dead_code)] // Used by other test files
pub fn sample_payload(ip: &str) -> Value {
    serde_json::json!({
        "ip": ip,
        "hostname": "dns.google",
        "city": "Mountain View",
        "region": "California",
        "country": "US",
        "loc": "37.4056,-122.0775",
        "org": "AS15169 Google LLC",
        "postal": "94043",
        "timezone": "America/Los_Angeles"
    })
}
