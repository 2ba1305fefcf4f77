//! IP address validation and input resolution.

use std::net::IpAddr;
use std::path::{Path, PathBuf};

use log::warn;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::config::InputSource;
use crate::error_handling::InputError;

/// Whether `candidate` is a syntactically valid IPv4 or IPv6 address.
pub fn is_valid_ip(candidate: &str) -> bool {
    candidate.parse::<IpAddr>().is_ok()
}

/// A non-blank input line that is not an IP address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number
    pub line_number: usize,
    /// Trimmed line content
    pub content: String,
}

/// Addresses to look up, in input order, plus the lines that were skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedInput {
    /// Valid addresses
    pub ips: Vec<String>,
    /// Invalid lines (batch input only)
    pub skipped: Vec<SkippedLine>,
}

/// Resolves the configured input source.
///
/// # Errors
///
/// An invalid single address or an unreadable file is fatal.
pub async fn resolve_input(source: &InputSource) -> Result<ResolvedInput, InputError> {
    match source {
        InputSource::Single(ip) => resolve_single(ip),
        InputSource::File(path) => read_ip_file(path).await,
    }
}

/// Validates a single address from the command line.
pub fn resolve_single(ip: &str) -> Result<ResolvedInput, InputError> {
    if !is_valid_ip(ip) {
        return Err(InputError::InvalidIp(ip.to_string()));
    }
    Ok(ResolvedInput {
        ips: vec![ip.to_string()],
        skipped: Vec::new(),
    })
}

/// Reads addresses from a file, one per line; `-` reads stdin.
pub async fn read_ip_file(path: &Path) -> Result<ResolvedInput, InputError> {
    let read_error = |source: std::io::Error| InputError::Read {
        path: PathBuf::from(path),
        source,
    };

    if path.as_os_str() == "-" {
        let reader = BufReader::new(tokio::io::stdin());
        return parse_ip_lines(reader).await.map_err(read_error);
    }

    let file = tokio::fs::File::open(path).await.map_err(read_error)?;
    parse_ip_lines(BufReader::new(file))
        .await
        .map_err(read_error)
}

/// Splits a line-oriented list into valid addresses and skipped lines.
///
/// Lines are trimmed; blank lines are ignored silently, invalid lines are
/// logged and recorded in [`ResolvedInput::skipped`].
pub async fn parse_ip_lines<R>(reader: R) -> std::io::Result<ResolvedInput>
where
    R: AsyncBufRead + Unpin,
{
    let mut resolved = ResolvedInput::default();
    let mut lines = reader.lines();
    let mut line_number = 0;

    while let Some(line) = lines.next_line().await? {
        line_number += 1;
        let candidate = line.trim();
        if candidate.is_empty() {
            continue;
        }
        if is_valid_ip(candidate) {
            resolved.ips.push(candidate.to_string());
        } else {
            warn!("Skipping invalid IP: {}", candidate);
            resolved.skipped.push(SkippedLine {
                line_number,
                content: candidate.to_string(),
            });
        }
    }

    Ok(resolved)
}
