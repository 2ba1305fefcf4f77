//! Single lookup attempt against the API.

use log::trace;
use serde_json::Value;
use url::Url;

use crate::config::TOKEN_QUERY_PARAM;
use crate::error_handling::{InitializationError, LookupFailure};
use crate::lookup::record::{api_error_message, LookupResult};

/// Parses and checks the API base URL.
pub(crate) fn parse_api_url(api_url: &str) -> Result<Url, InitializationError> {
    let url = Url::parse(api_url).map_err(|e| InitializationError::ApiUrlError {
        url: api_url.to_string(),
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(InitializationError::ApiUrlError {
            url: api_url.to_string(),
            reason: "URL cannot be a base".to_string(),
        });
    }
    Ok(url)
}

/// Builds `<base>/<ip>/json`.
///
/// The address is pushed as a path segment rather than joined as a relative
/// reference, since IPv6 literals such as `fe80::1` would parse as a scheme.
pub(crate) fn endpoint_url(base: &Url, ip: &str) -> Url {
    let mut url = base.clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(ip).push("json");
    }
    url
}

/// Sends one GET request and classifies the outcome.
///
/// The token is attached only when non-empty. A 2xx response whose body
/// carries an `error` field is still a failure.
pub(crate) async fn fetch_once(
    client: &reqwest::Client,
    url: &Url,
    token: &str,
) -> Result<LookupResult, LookupFailure> {
    let mut request = client.get(url.clone());
    if !token.is_empty() {
        request = request.query(&[(TOKEN_QUERY_PARAM, token)]);
    }

    let response = request.send().await.map_err(LookupFailure::transport)?;
    trace!("{} answered {}", url, response.status());
    let response = response.error_for_status().map_err(LookupFailure::status)?;
    let body = response.bytes().await.map_err(LookupFailure::transport)?;

    let payload: Value =
        serde_json::from_slice(&body).map_err(|e| LookupFailure::Decode(e.to_string()))?;
    match payload {
        Value::Object(fields) => {
            if let Some(error) = fields.get("error") {
                return Err(LookupFailure::Api(api_error_message(error)));
            }
            Ok(LookupResult::from_payload(fields))
        }
        _ => Err(LookupFailure::Decode(
            "expected a JSON object".to_string(),
        )),
    }
}
