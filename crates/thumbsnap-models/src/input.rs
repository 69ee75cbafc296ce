//! Caller argument handling and URL comparison keys.
//!
//! The host platform hands the resolver a single argument object with a
//! `value` field. The field is untrusted: it may be absent, null, or hold a
//! non-string value, none of which should ever reach a provider.

use serde::{Deserialize, Serialize};

/// The raw caller argument: an object with an optional `value` field.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThumbnailArg {
    /// Candidate URL (untrusted; only JSON strings are accepted)
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}

impl ThumbnailArg {
    /// Wrap a known URL string.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            value: Some(serde_json::Value::String(url.into())),
        }
    }

    /// Extract the candidate URL.
    ///
    /// Returns `Some` only when `value` holds a JSON string. An empty or
    /// whitespace string is still returned; whether it resolves to anything
    /// is the cascade's problem, not the guard's.
    pub fn url(&self) -> Option<&str> {
        match &self.value {
            Some(serde_json::Value::String(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Parse from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// Derive the comparison key for a URL: query string removed, lower-cased.
///
/// Used only for extension matching. The original, unmodified URL is always
/// what gets requested or embedded.
pub fn comparison_key(url: &str) -> String {
    let without_query = url.split('?').next().unwrap_or(url);
    without_query.to_lowercase()
}
