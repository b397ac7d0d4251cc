//! Shared error types and utilities for fetchkit.
#[cfg(not(target_arch = "wasm32"))]
pub use color_eyre::Report;

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install color_eyre: {0}")]
    ColorEyre(color_eyre::Report),
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[cfg(target_arch = "wasm32")]
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    #[error("Failed to install tracing-subscriber")]
    TracingSubscriber(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Message used for aborted requests, matching what browsers report.
pub const ABORTED_MESSAGE: &str = "The operation was aborted.";

/// Failures raised while sending a request or reading its response.
///
/// Every variant ends up in the exception path of
/// [`crate::fetcher::Fetcher::request`], where only its message survives.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("{0}")]
    Network(String),
    #[error("{}", ABORTED_MESSAGE)]
    Aborted,
    #[error("{0}")]
    Parse(#[from] serde_json::Error),
    #[error("Failed to encode request body: {0}")]
    Encode(String),
}

impl TransportError {
    pub fn is_aborted(&self) -> bool {
        matches!(self, TransportError::Aborted)
    }
}

impl From<futures::future::Aborted> for TransportError {
    fn from(_: futures::future::Aborted) -> Self {
        TransportError::Aborted
    }
}

impl From<gloo_net::Error> for TransportError {
    fn from(err: gloo_net::Error) -> Self {
        match err {
            gloo_net::Error::JsError(js) if js.name == "AbortError" => TransportError::Aborted,
            gloo_net::Error::JsError(js) => TransportError::Network(js.message),
            other => TransportError::Network(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aborted_uses_browser_message() {
        assert_eq!(TransportError::Aborted.to_string(), ABORTED_MESSAGE);
        assert!(TransportError::Aborted.is_aborted());
    }

    #[test]
    fn network_error_is_passed_through() {
        let err = TransportError::Network("connection refused".to_string());
        assert_eq!(err.to_string(), "connection refused");
        assert!(!err.is_aborted());
    }

    #[test]
    fn parse_error_keeps_serde_message() {
        let serde_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let expected = serde_err.to_string();
        let err = TransportError::from(serde_err);
        assert_eq!(err.to_string(), expected);
    }
}
