//! Errors from the remote API and how they read to a user.
//!
//! The API reports failures in several shapes: `{"detail": ".."}`,
//! `{"error": ".."}`, `{"error": [..]}` or a field map such as
//! `{"email": ["already registered"]}`. [`server_message`] flattens any of
//! them into a single line; callers fall back to a per-operation generic
//! message when nothing usable is found.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS).
    #[error("network error: {0}")]
    Network(String),
    /// Non-success status, with the server's message when one was readable.
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The request body could not be serialized.
    #[error("invalid request body: {0}")]
    Encode(String),
    /// The response body was not the expected JSON.
    #[error("unexpected response: {0}")]
    Decode(String),
    /// Called outside the browser.
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Message to show the user, or `fallback` when the server said nothing useful.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Extract a human-readable message from an API error body.
pub fn server_message(body: &Value) -> Option<String> {
    if let Some(detail) = body.get("detail").and_then(Value::as_str) {
        return non_empty(detail);
    }
    if let Some(error) = body.get("error") {
        return flatten(error);
    }
    flatten(body)
}

fn flatten(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => non_empty(s),
        Value::Array(items) => {
            let parts: Vec<String> = items.iter().filter_map(flatten).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        Value::Object(fields) => {
            let parts: Vec<String> = fields.values().filter_map(flatten).collect();
            (!parts.is_empty()).then(|| parts.join(", "))
        }
        _ => None,
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}
