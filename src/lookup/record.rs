//! Lookup result records.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::UNKNOWN_API_ERROR;

/// Flat record describing one looked-up address.
///
/// Either the API payload exactly as received (field order preserved), or an
/// error record with exactly two fields, `ip` and `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LookupResult(Map<String, Value>);

/// All records of one run, in input order.
pub type ResultSet = Vec<LookupResult>;

impl LookupResult {
    /// Wraps a successful API payload without touching its fields.
    pub(crate) fn from_payload(payload: Map<String, Value>) -> Self {
        Self(payload)
    }

    /// Builds the `{ip, error}` record for an address whose lookup failed.
    pub fn error(ip: &str, message: impl Into<String>) -> Self {
        let mut fields = Map::with_capacity(2);
        fields.insert("ip".to_string(), Value::String(ip.to_string()));
        fields.insert("error".to_string(), Value::String(message.into()));
        Self(fields)
    }

    /// Whether this is an error record.
    pub fn is_error(&self) -> bool {
        self.0.contains_key("error")
    }

    /// Value of a single field.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Field names in record order.
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// All fields.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

/// Human-readable message for the `error` field of an API response.
///
/// ipinfo.io reports errors as `{"error": {"title": ..., "message": ...}}`;
/// a plain string is used as is.
pub(crate) fn api_error_message(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        Value::Object(fields) => fields
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or(UNKNOWN_API_ERROR)
            .to_string(),
        Value::Null => UNKNOWN_API_ERROR.to_string(),
        other => other.to_string(),
    }
}
