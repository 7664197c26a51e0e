//! HTTP routes for the upload server

pub mod upload;

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Json, Router,
};

use crate::server::state::AppState;

/// Upload route, with a body limit sized for a full batch
pub fn upload_routes(max_request_size: usize) -> Router<AppState> {
    Router::new().route(
        "/upload",
        post(upload::upload_documents).layer(DefaultBodyLimit::max(max_request_size)),
    )
}

/// Routes nested under `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new().route("/info", get(info))
}

/// API info endpoint
async fn info(State(state): State<AppState>) -> Json<serde_json::Value> {
    let upload = &state.config().upload;
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Extract deduplicated questions from Word documents",
        "limits": {
            "fieldName": upload.field_name,
            "maxFiles": upload.max_files,
            "maxFileSize": upload.max_file_size,
            "extensions": [".doc", ".docx"],
            "legacyDoc": state.config().conversion.enable_legacy_doc,
        },
        "endpoints": {
            "POST /upload": "Upload documents, returns unique questions",
            "GET /api/info": "Service information",
            "GET /health": "Liveness check",
            "GET /ready": "Readiness check"
        }
    }))
}
