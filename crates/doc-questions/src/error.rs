//! Error types for document question extraction

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::types::ErrorBody;

/// Result type alias for extraction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Document question extraction errors
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Upload contained no files
    #[error("No files uploaded")]
    NoFilesProvided,

    /// Upload exceeded the per-request file count
    #[error("Too many files: {count} uploaded, at most {max} allowed")]
    TooManyFiles { count: usize, max: usize },

    /// Extension other than .doc / .docx
    #[error("Invalid file type: {extension} ({filename}). Only .doc and .docx files are supported.")]
    UnsupportedFileType { filename: String, extension: String },

    /// Single file over the size limit
    #[error("File '{filename}' is {size} bytes, limit is {max} bytes")]
    FileTooLarge { filename: String, size: usize, max: usize },

    /// Document could not be turned into text
    #[error("Failed to process file {filename}: {message}")]
    ConversionFailure { filename: String, message: String },

    /// Malformed multipart request
    #[error("Invalid upload: {0}")]
    InvalidUpload(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a conversion failure for a named file
    pub fn conversion(filename: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ConversionFailure {
            filename: filename.into(),
            message: message.into(),
        }
    }

    /// Create an unsupported file type error
    pub fn unsupported(filename: impl Into<String>, extension: impl Into<String>) -> Self {
        Self::UnsupportedFileType {
            filename: filename.into(),
            extension: extension.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Stable machine-readable kind, used in response bodies
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Config(_) => "config_error",
            Error::NoFilesProvided => "no_files",
            Error::TooManyFiles { .. } => "too_many_files",
            Error::UnsupportedFileType { .. } => "unsupported_type",
            Error::FileTooLarge { .. } => "file_too_large",
            Error::ConversionFailure { .. } => "conversion_failure",
            Error::InvalidUpload(_) => "invalid_upload",
            Error::Internal(_) => "internal_error",
        }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            Error::NoFilesProvided
            | Error::TooManyFiles { .. }
            | Error::UnsupportedFileType { .. }
            | Error::InvalidUpload(_) => StatusCode::BAD_REQUEST,
            Error::FileTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            Error::ConversionFailure { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Config(_) | Error::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let headline = match &self {
            Error::NoFilesProvided => "No files uploaded",
            _ => "Error processing files",
        };

        let body = Json(ErrorBody {
            error: headline.to_string(),
            details: self.to_string(),
            kind: self.kind().to_string(),
        });

        (status, body).into_response()
    }
}
