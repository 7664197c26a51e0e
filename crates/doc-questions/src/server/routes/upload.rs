//! Document upload endpoint

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::error::{Error, Result};
use crate::server::state::AppState;
use crate::types::{ExtractionReport, UploadedFile};

/// POST /upload - Extract unique questions from uploaded documents
pub async fn upload_documents(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractionReport>> {
    let limits = state.processor().limits();
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::InvalidUpload(format!("Failed to read multipart field: {}", e)))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name != limits.field_name {
            tracing::debug!("Ignoring multipart field '{}'", name);
            continue;
        }

        if files.len() == limits.max_files {
            return Err(Error::TooManyFiles {
                count: files.len() + 1,
                max: limits.max_files,
            });
        }

        let filename = field.file_name().unwrap_or("").to_string();
        let data = field.bytes().await.map_err(|e| {
            Error::InvalidUpload(format!("Failed to read file '{}': {}", filename, e))
        })?;

        files.push(UploadedFile::new(filename, data));
    }

    let report = state.processor().process(&files).await?;
    Ok(Json(report))
}
