use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderMap, header},
};
use fetchkit::data::Echo;
use fetchkit::serde_json::Value;

use crate::error::ApiError;

/// Echo the JSON body back along with the content type it arrived with.
pub async fn echo(
    headers: HeaderMap,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Echo>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::Status {
        status: rejection.status(),
        message: rejection.body_text(),
    })?;

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    Ok(Json(Echo { content_type, body }))
}
