//! Data structures used between the demo frontend and backend.

use serde::{Deserialize, Serialize};

/// Returned by `POST /echo`: the JSON body as received plus the request's
/// content type.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Echo {
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

/// JSON body attached to every non-2xx response from the demo API.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ApiErrorBody {
    pub status: u16,
    pub message: String,
}

/// Returned by `GET /slow` once its delay has elapsed.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Delayed {
    pub waited_ms: u64,
}

/// One received part of a multipart upload.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadedPart {
    pub name: String,
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub size: usize,
}

/// Returned by `POST /upload`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UploadSummary {
    pub parts: Vec<UploadedPart>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn health_status_is_lowercase() {
        let json = serde_json::to_value(HealthStatus::Healthy).unwrap();
        assert_eq!(json, "healthy");
    }

    #[test]
    fn echo_accepts_any_json_body() {
        let echo: Echo =
            serde_json::from_str(r#"{"content_type":null,"body":[1,"two",{"three":3}]}"#).unwrap();
        assert!(echo.content_type.is_none());
        assert_eq!(echo.body[2]["three"], 3);
    }
}
