//! The normalized result of every request.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Status reported when a request fails before an HTTP status is known.
pub const FAILURE_STATUS: u16 = 500;

/// Error text used when a failure carries no message of its own.
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// Outcome of [`crate::fetcher::Fetcher::request`].
///
/// * success status: `data` holds the decoded body, `error` is `None`.
/// * error status: `data` is `None`, `error` holds the parsed response body.
/// * exception (network failure, abort, malformed JSON): `data` is `None`,
///   `error` holds the failure message as a JSON string and `status` is
///   [`FAILURE_STATUS`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FetchResponse<T = Value> {
    pub data: Option<T>,
    pub error: Option<Value>,
    pub status: u16,
}

impl<T> FetchResponse<T> {
    pub fn success(data: T, status: u16) -> Self {
        Self {
            data: Some(data),
            error: None,
            status,
        }
    }

    pub fn failure(error: Value, status: u16) -> Self {
        Self {
            data: None,
            error: Some(error),
            status,
        }
    }

    pub fn exception(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            FALLBACK_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self::failure(Value::String(message), FAILURE_STATUS)
    }

    pub fn is_success(&self) -> bool {
        self.data.is_some()
    }

    /// Renders `error` as text: strings as-is, other JSON values encoded.
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(|error| match error {
            Value::String(message) => message.clone(),
            other => other.to_string(),
        })
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FetchResponse<U> {
        FetchResponse {
            data: self.data.map(f),
            error: self.error,
            status: self.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn success_shape() {
        let response = FetchResponse::success(json!({"id": 1}), 201);
        assert!(response.is_success());
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({"data": {"id": 1}, "error": null, "status": 201})
        );
    }

    #[test]
    fn failure_keeps_body_and_status() {
        let response: FetchResponse = FetchResponse::failure(json!({"detail": "nope"}), 404);
        assert!(!response.is_success());
        assert_eq!(response.status, 404);
        assert_eq!(response.error_message().as_deref(), Some(r#"{"detail":"nope"}"#));
    }

    #[test]
    fn exception_uses_sentinel_status() {
        let response: FetchResponse = FetchResponse::exception("x");
        assert_eq!(response.data, None);
        assert_eq!(response.error, Some(json!("x")));
        assert_eq!(response.status, FAILURE_STATUS);
    }

    #[test]
    fn exception_without_message_falls_back() {
        let response: FetchResponse = FetchResponse::exception("");
        assert_eq!(response.error_message().as_deref(), Some(FALLBACK_ERROR_MESSAGE));
    }

    #[test]
    fn map_transforms_data_only() {
        let response = FetchResponse::success(2, 200).map(|n| n * 10);
        assert_eq!(response.data, Some(20));
        assert_eq!(response.status, 200);
    }
}
