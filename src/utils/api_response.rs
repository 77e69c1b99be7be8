// Start of file: /src/utils/api_response.rs

// * Standard envelope shared by every JSON answer of the API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome reported in the `status` field of the envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
    Success,
    Error,
}

impl ApiStatus {
    /// Anything other than `"success"` or `"error"` is treated as an error.
    pub fn parse(raw: &str) -> Self {
        match raw {
            "success" => Self::Success,
            _ => Self::Error,
        }
    }
}

/// `{ "status": ..., "messages": ..., "payload": ... }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: ApiStatus,
    pub messages: Value,
    pub payload: Value,
}

/// Builds the envelope; `status` is coerced with [`ApiStatus::parse`].
pub fn format_standard_api_response(
    status: &str,
    payload: impl Into<Option<Value>>,
    messages: impl Into<Value>,
) -> ApiResponse {
    ApiResponse {
        status: ApiStatus::parse(status),
        messages: messages.into(),
        payload: payload.into().unwrap_or(Value::Null),
    }
}

/// Shorthand for an error envelope without payload.
pub fn error_response(messages: impl Into<Value>) -> ApiResponse {
    format_standard_api_response("error", None::<Value>, messages)
}


// End of file: /src/utils/api_response.rs
