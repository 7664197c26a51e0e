//! Core types for uploads and extraction reports

pub mod document;
pub mod response;

pub use document::{DocumentKind, UploadedFile};
pub use response::{ErrorBody, ExtractionReport};
