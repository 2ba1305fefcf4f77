//! IP lookups against the ipinfo.io API.
//!
//! A lookup is an explicit retry loop over [`request::fetch_once`]: every
//! failed attempt except the last is followed by a backoff sleep taken from
//! [`RetryPolicy::delays`]. Whatever happens, exactly one [`LookupResult`]
//! comes back.

mod record;
mod request;
mod retry;

use log::{debug, info};
use url::Url;

use crate::error_handling::{InitializationError, LookupFailure};
use crate::initialization::init_client;

pub use record::{LookupResult, ResultSet};
pub use retry::RetryPolicy;

/// HTTP client bound to one API base URL.
#[derive(Debug, Clone)]
pub struct LookupClient {
    client: reqwest::Client,
    base_url: Url,
}

impl LookupClient {
    /// Creates a client for `api_url` with the standard 5-second timeout.
    ///
    /// # Errors
    ///
    /// Fails if the URL cannot be used as a base or the HTTP client cannot
    /// be built.
    pub fn new(api_url: &str) -> Result<Self, InitializationError> {
        Ok(Self::with_client(init_client()?, request::parse_api_url(api_url)?))
    }

    /// Creates a client from an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: Url) -> Self {
        Self { client, base_url }
    }

    /// URL queried for `ip` (without the token).
    pub fn endpoint(&self, ip: &str) -> Url {
        request::endpoint_url(&self.base_url, ip)
    }

    /// Looks up `ip`, retrying per `policy`.
    ///
    /// `ip` must already be a valid address. An empty `token` sends an
    /// anonymous request. Returns the API payload verbatim on success, or
    /// `{ip, error}` with the last failure's message once all attempts fail.
    pub async fn lookup(&self, ip: &str, token: &str, policy: &RetryPolicy) -> LookupResult {
        let url = self.endpoint(ip);
        let mut delays = policy.delays();
        let mut attempt = 1;

        loop {
            debug!("Attempt {}: Querying {}...", attempt, ip);
            let failure: LookupFailure =
                match request::fetch_once(&self.client, &url, token).await {
                    Ok(result) => return result,
                    Err(failure) => failure,
                };

            match delays.next() {
                Some(delay) => {
                    debug!(
                        "Error on attempt {} for {}: {}. Retrying in {:.1} seconds...",
                        attempt,
                        ip,
                        failure,
                        delay.as_secs_f64()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                None => {
                    info!(
                        "Lookup for {} failed after {} attempt{}: {}",
                        ip,
                        attempt,
                        if attempt == 1 { "" } else { "s" },
                        failure
                    );
                    return LookupResult::error(ip, failure.to_string());
                }
            }
        }
    }
}
