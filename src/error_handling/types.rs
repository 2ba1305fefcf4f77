//! Error type definitions.
//!
//! This module defines all error types used throughout the application.

use std::error::Error as StdError;
use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured API base URL cannot be used.
    #[error("Invalid API URL `{url}`: {reason}")]
    ApiUrlError {
        /// The rejected URL
        url: String,
        /// Why it was rejected
        reason: String,
    },
}

/// Fatal errors while resolving the input addresses.
#[derive(Error, Debug)]
pub enum InputError {
    /// The single address given on the command line is not an IP address.
    #[error("Invalid IP address: {0}")]
    InvalidIp(String),

    /// The input file could not be opened or read.
    #[error("Failed to read file {}: {source}", path.display())]
    Read {
        /// Path of the input file (`-` for stdin)
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Errors while writing the results file.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The output file could not be created or written.
    #[error("{}: {source}", path.display())]
    Io {
        /// Output path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Why a single lookup attempt failed.
///
/// Every variant is retriable; once attempts are exhausted the `Display`
/// text of the last failure becomes the record's `error` field.
#[derive(Error, Debug)]
pub enum LookupFailure {
    /// Network failure, timeout, or an unreadable response.
    #[error("{}", describe_reqwest_error(.0))]
    Transport(ReqwestError),

    /// The API answered with a non-2xx status.
    #[error("{}", describe_reqwest_error(.0))]
    Status(ReqwestError),

    /// The response body carries an `error` field.
    #[error("{0}")]
    Api(String),

    /// The response body is not a JSON object.
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl LookupFailure {
    /// Wraps a transport error, dropping the URL so the token never leaks
    /// into messages or saved records.
    pub fn transport(error: ReqwestError) -> Self {
        LookupFailure::Transport(error.without_url())
    }

    /// Wraps a status error, dropping the URL for the same reason.
    pub fn status(error: ReqwestError) -> Self {
        LookupFailure::Status(error.without_url())
    }
}

/// Describes a reqwest error with its whole source chain.
///
/// Timeouts and connection failures are labelled first, since reqwest's own
/// top-level text is the same for both.
pub fn describe_reqwest_error(error: &ReqwestError) -> String {
    let mut chain = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !chain.ends_with(&cause_text) {
            chain.push_str(": ");
            chain.push_str(&cause_text);
        }
        source = cause.source();
    }

    if error.is_timeout() {
        format!("Request timed out ({chain})")
    } else if error.is_connect() {
        format!("Connection failed ({chain})")
    } else {
        chain
    }
}
