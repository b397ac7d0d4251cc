use axum::{
    Json,
    extract::Path,
    http::{StatusCode, header},
    response::IntoResponse,
};
use fetchkit::data::ApiErrorBody;

use crate::error::ApiError;

/// Statuses that must not carry a body.
const BODYLESS: [u16; 3] = [204, 205, 304];

/// Respond with the requested status and a JSON body describing it.
pub async fn respond_with(Path(code): Path<u16>) -> Result<impl IntoResponse, ApiError> {
    if !(200..=599).contains(&code) || BODYLESS.contains(&code) {
        return Err(ApiError::InvalidStatus(code));
    }
    let status = StatusCode::from_u16(code).map_err(|_| ApiError::InvalidStatus(code))?;

    let body = ApiErrorBody {
        status: code,
        message: status.canonical_reason().unwrap_or("Unknown").to_string(),
    };
    Ok((status, Json(body)))
}

/// A 200 whose body claims to be JSON but is cut off.
pub async fn malformed() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        r#"{"truncated": "#,
    )
}
