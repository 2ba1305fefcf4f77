//! Tests for process exit codes of the binary.
//!
//! Configuration errors exit with 1; failed lookups and save errors do not
//! change the exit code.

use std::process::{Command, Output};

use tempfile::TempDir;

fn run_binary(dir: &TempDir, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ipinfo_lookup"))
        .args(args)
        .current_dir(dir.path())
        // Keep the developer's real token out of the test
        .env("HOME", dir.path())
        .env_remove("IPINFO_TOKEN")
        .output()
        .expect("Failed to run binary")
}

#[test]
fn test_invalid_single_ip_exits_1() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_binary(&dir, &["--ip", "999.1.1.1"]);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid IP address: 999.1.1.1"), "stderr: {}", stderr);
}

#[test]
fn test_missing_input_file_exits_1() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_binary(&dir, &["--file", "does-not-exist.txt"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_failed_lookups_exit_0() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    std::fs::write(dir.path().join("ips.txt"), "8.8.8.8\nnot-an-ip\n").unwrap();

    let output = run_binary(
        &dir,
        &[
            "--file",
            "ips.txt",
            "--api-url",
            "http://127.0.0.1:9/",
            "--retries",
            "1",
            "--output",
            "out.json",
            "--no-color",
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    let saved = std::fs::read_to_string(dir.path().join("out.json")).expect("output written");
    let parsed: serde_json::Value = serde_json::from_str(&saved).unwrap();
    let records = parsed.as_array().expect("array");
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["ip"], "8.8.8.8");
    assert!(records[0].get("error").is_some());
}

#[test]
fn test_unwritable_output_exits_0() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_binary(
        &dir,
        &[
            "--ip",
            "8.8.8.8",
            "--api-url",
            "http://127.0.0.1:9/",
            "--retries",
            "1",
            "--output",
            "missing-dir/out.json",
            "--quiet",
            "--no-color",
        ],
    );

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Failed to save output file"), "stdout: {}", stdout);
}

#[test]
fn test_missing_input_selection_is_usage_error() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let output = run_binary(&dir, &[]);
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_color_follows_no_color_flag_when_piped() {
    let dir = TempDir::new().expect("Failed to create temp directory");
    let base = ["--ip", "8.8.8.8", "--api-url", "http://127.0.0.1:9/", "--retries", "1"];

    let colored_run = run_binary(&dir, &base);
    assert_eq!(colored_run.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&colored_run.stdout);
    assert!(stdout.contains("\x1b["), "stdout: {}", stdout);

    let mut plain_args = base.to_vec();
    plain_args.push("--no-color");
    let plain_run = run_binary(&dir, &plain_args);
    assert_eq!(plain_run.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&plain_run.stdout);
    assert!(!stdout.contains("\x1b["), "stdout: {}", stdout);
    assert!(stdout.contains("Processing 8.8.8.8"), "stdout: {}", stdout);
}
