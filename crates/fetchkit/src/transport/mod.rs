//! The seam between the request helper and whatever actually performs HTTP.

mod gloo;

pub use gloo::GlooTransport;

use serde_json::Value;

use crate::errors::TransportError;
use crate::options::PreparedRequest;

/// A completed HTTP exchange with its body read as text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    pub body: String,
}

impl TransportResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for any 2xx status.
    pub fn ok(&self) -> bool {
        (200..=299).contains(&self.status)
    }

    /// Parses the body as JSON. An empty or non-JSON body is an error.
    pub fn json(&self) -> Result<Value, TransportError> {
        serde_json::from_str(&self.body).map_err(TransportError::from)
    }
}

/// Performs a single HTTP request.
///
/// Implementations should stop early when `request.signal` aborts; the
/// helper also stops waiting on its own, so observing the signal is about
/// releasing the underlying connection rather than correctness.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse, TransportError>;
}

#[async_trait::async_trait(?Send)]
impl<T> Transport for std::rc::Rc<T>
where
    T: Transport + ?Sized,
{
    async fn send(&self, request: PreparedRequest) -> Result<TransportResponse, TransportError> {
        (**self).send(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ok_covers_2xx_only() {
        assert!(TransportResponse::new(200, "").ok());
        assert!(TransportResponse::new(204, "").ok());
        assert!(!TransportResponse::new(199, "").ok());
        assert!(!TransportResponse::new(304, "").ok());
        assert!(!TransportResponse::new(422, "").ok());
    }

    #[test]
    fn json_parses_body() {
        let response = TransportResponse::new(200, r#"{"hello":"world"}"#);
        assert_eq!(response.json().unwrap(), serde_json::json!({"hello": "world"}));
    }

    #[test]
    fn json_rejects_empty_body() {
        let response = TransportResponse::new(204, "");
        assert!(matches!(response.json(), Err(TransportError::Parse(_))));
    }
}
