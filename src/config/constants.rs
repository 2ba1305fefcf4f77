//! Configuration constants.
//!
//! This module defines the constants used throughout the application,
//! including the API endpoint, timeouts, retry defaults and credential locations.

use std::time::Duration;

/// Base URL of the ipinfo.io API.
///
/// Lookups are sent to `<base>/<ip>/json`.
pub const DEFAULT_API_URL: &str = "https://ipinfo.io/";

/// Network timeout applied to every lookup request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// User-Agent sent with lookup requests.
pub const DEFAULT_USER_AGENT: &str = concat!("ipinfo_lookup/", env!("CARGO_PKG_VERSION"));

// Retry strategy
/// Total number of attempts per IP (initial request + retries)
pub const RETRY_MAX_ATTEMPTS: usize = 3;
/// Delay in seconds before the first retry; doubled on each further retry
pub const RETRY_BASE_DELAY_SECS: f64 = 2.0;

// Credentials
/// Environment variable holding the API token
pub const TOKEN_ENV_VAR: &str = "IPINFO_TOKEN";
/// INI file (relative to the home directory) holding the API token
pub const TOKEN_CONFIG_FILE: &str = ".ipinfo.cfg";
/// Section of the INI file that carries the token
pub const TOKEN_CONFIG_SECTION: &str = "DEFAULT";
/// Key of the token inside [`TOKEN_CONFIG_SECTION`]
pub const TOKEN_CONFIG_KEY: &str = "token";

/// Query parameter carrying the API token
pub const TOKEN_QUERY_PARAM: &str = "token";

/// Message used when the API reports an error without a readable message
pub const UNKNOWN_API_ERROR: &str = "Unknown API error";
