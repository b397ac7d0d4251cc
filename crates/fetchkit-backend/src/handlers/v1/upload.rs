use axum::{Json, extract::Multipart};
use fetchkit::data::{UploadSummary, UploadedPart};

use crate::error::ApiError;

/// Summarize the parts of a multipart upload without keeping them.
pub async fn upload(mut multipart: Multipart) -> Result<Json<UploadSummary>, ApiError> {
    let mut parts = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        let name = field.name().unwrap_or_default().to_string();
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let size = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?
            .len();

        parts.push(UploadedPart {
            name,
            file_name,
            content_type,
            size,
        });
    }

    Ok(Json(UploadSummary { parts }))
}
