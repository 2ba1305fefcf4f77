//! Tests for JSON export.

mod helpers;

use helpers::{record, sample_payload};
use ipinfo_lookup::export::{write_json, write_results, SaveOutcome};
use ipinfo_lookup::{LookupResult, OutputFormat};
use serde_json::Value;
use tempfile::TempDir;

#[test]
fn test_json_round_trip_preserves_content_and_order() {
    let results = vec![
        record(sample_payload("8.8.8.8")),
        LookupResult::error("2.2.2.2", "timeout"),
        record(serde_json::json!({"ip": "1.1.1.1", "anycast": true, "asn": {"asn": "AS13335"}})),
    ];
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("results.json");

    let outcome = write_json(&results, &output).expect("JSON export should succeed");
    assert_eq!(outcome, SaveOutcome::Saved { records: 3 });

    let contents = std::fs::read_to_string(&output).expect("Failed to read JSON");
    let parsed: Vec<LookupResult> = serde_json::from_str(&contents).expect("valid JSON");
    assert_eq!(parsed, results);
    for (original, reparsed) in results.iter().zip(&parsed) {
        let original_keys: Vec<&String> = original.keys().collect();
        let reparsed_keys: Vec<&String> = reparsed.keys().collect();
        assert_eq!(original_keys, reparsed_keys);
    }
}

#[test]
fn test_json_is_array_with_two_space_indent() {
    let results = vec![LookupResult::error("2.2.2.2", "timeout")];
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("results.json");
    write_results(&results, &output, OutputFormat::Json).expect("JSON export should succeed");

    let contents = std::fs::read_to_string(&output).expect("Failed to read JSON");
    assert!(contents.starts_with("[\n  {\n    \"ip\""));
    let parsed: Value = serde_json::from_str(&contents).expect("valid JSON");
    assert!(parsed.is_array());
}

#[test]
fn test_empty_result_set_writes_empty_array() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let output = temp_dir.path().join("empty.json");

    let outcome = write_results(&[], &output, OutputFormat::Json).expect("JSON export should succeed");
    assert_eq!(outcome, SaveOutcome::Saved { records: 0 });
    assert_eq!(std::fs::read_to_string(&output).unwrap(), "[]");
}
