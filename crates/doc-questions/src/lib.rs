//! doc-questions: extract deduplicated question lists from Word documents
//!
//! Uploaded `.doc`/`.docx` files are converted to raw text, lines that look
//! like questions are selected, and the result is deduplicated by
//! case- and whitespace-insensitive comparison, keeping first occurrences.

pub mod config;
pub mod conversion;
pub mod error;
pub mod extraction;
pub mod processing;
pub mod server;
pub mod types;

pub use config::AppConfig;
pub use error::{Error, Result};
pub use extraction::{extract_questions, remove_duplicates};
pub use processing::BatchProcessor;
pub use types::{DocumentKind, ExtractionReport, UploadedFile};
