use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use fetchkit::data::ApiErrorBody;

/// Errors returned by the demo API. Every variant renders as an
/// [`ApiErrorBody`] so clients always get JSON back.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{message}")]
    Status { status: StatusCode, message: String },
    #[error("Invalid status code: {0}")]
    InvalidStatus(u16),
    #[error("{0}")]
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Status { status, .. } => *status,
            ApiError::InvalidStatus(_) | ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ApiErrorBody {
            status: status.as_u16(),
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
