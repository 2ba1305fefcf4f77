//! HTTP client initialization.

use reqwest::ClientBuilder;

use crate::config::{DEFAULT_USER_AGENT, REQUEST_TIMEOUT};
use crate::error_handling::InitializationError;

/// Initializes the HTTP client used for lookups.
///
/// Creates a `reqwest::Client` configured with:
/// - The fixed per-request timeout (`REQUEST_TIMEOUT`)
/// - The crate's User-Agent header
/// - Rustls TLS backend (no native TLS)
///
/// # Errors
///
/// Returns `InitializationError::HttpClientError` if client creation fails.
pub fn init_client() -> Result<reqwest::Client, InitializationError> {
    let client = ClientBuilder::new()
        .timeout(REQUEST_TIMEOUT)
        .user_agent(DEFAULT_USER_AGENT)
        .build()?;
    Ok(client)
}
