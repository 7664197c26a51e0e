//! Document-to-text conversion
//!
//! `.docx` files are read in-process with docx-rs. Legacy `.doc` files are
//! first converted to `.docx` by a headless LibreOffice run.

mod docx;
mod legacy;

pub use docx::docx_to_text;
pub use legacy::LegacyDocConverter;

use async_trait::async_trait;
use bytes::Bytes;
use std::time::Duration;

use crate::config::ConversionConfig;
use crate::error::{Error, Result};
use crate::types::document::extension_of;
use crate::types::{DocumentKind, UploadedFile};

/// Turns one uploaded document into raw text
///
/// Implementations:
/// - `DocumentConverter`: docx-rs, with LibreOffice for `.doc`
#[async_trait]
pub trait TextConverter: Send + Sync {
    /// Convert a single document. Errors name the file.
    async fn convert(&self, file: &UploadedFile) -> Result<String>;

    /// Get converter name for logging
    fn name(&self) -> &str;
}

/// Default converter for `.doc` and `.docx`
pub struct DocumentConverter {
    config: ConversionConfig,
    legacy: LegacyDocConverter,
}

impl DocumentConverter {
    /// Create a new converter
    pub fn new(config: ConversionConfig) -> Self {
        let legacy = LegacyDocConverter::new(config.libreoffice_binary.clone());
        Self { config, legacy }
    }

    async fn convert_inner(&self, file: &UploadedFile) -> Result<String> {
        let kind = file
            .kind()
            .ok_or_else(|| Error::unsupported(&file.filename, extension_of(&file.filename)))?;

        let docx_bytes = match kind {
            DocumentKind::Docx => file.data.clone(),
            DocumentKind::Doc => {
                if !self.config.enable_legacy_doc {
                    return Err(Error::conversion(
                        &file.filename,
                        "legacy .doc conversion is disabled",
                    ));
                }
                tracing::info!("Converting legacy format: {}", file.filename);
                Bytes::from(self.legacy.convert(&file.filename, &file.data).await?)
            }
        };

        let filename = file.filename.clone();
        tokio::task::spawn_blocking(move || docx_to_text(&filename, &docx_bytes))
            .await
            .map_err(|e| Error::internal(format!("Conversion task failed: {}", e)))?
    }
}

#[async_trait]
impl TextConverter for DocumentConverter {
    async fn convert(&self, file: &UploadedFile) -> Result<String> {
        let limit = Duration::from_secs(self.config.timeout_secs);
        match tokio::time::timeout(limit, self.convert_inner(file)).await {
            Ok(result) => result,
            Err(_) => {
                tracing::error!(
                    "TIMEOUT converting '{}' after {}s ({} bytes)",
                    file.filename,
                    limit.as_secs(),
                    file.size()
                );
                Err(Error::conversion(
                    &file.filename,
                    format!("conversion timed out after {}s", limit.as_secs()),
                ))
            }
        }
    }

    fn name(&self) -> &str {
        "docx-rs"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_unknown_extension() {
        let converter = DocumentConverter::new(ConversionConfig::default());
        let file = UploadedFile::new("notes.txt", b"hello".to_vec());
        let err = converter.convert(&file).await.unwrap_err();
        assert!(matches!(err, Error::UnsupportedFileType { .. }));
    }

    #[tokio::test]
    async fn test_legacy_disabled() {
        let config = ConversionConfig {
            enable_legacy_doc: false,
            ..ConversionConfig::default()
        };
        let converter = DocumentConverter::new(config);
        let file = UploadedFile::new("old.doc", b"\xd0\xcf\x11\xe0".to_vec());
        let err = converter.convert(&file).await.unwrap_err();
        match err {
            Error::ConversionFailure { filename, message } => {
                assert_eq!(filename, "old.doc");
                assert!(message.contains("disabled"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_invalid_docx_is_conversion_failure() {
        let converter = DocumentConverter::new(ConversionConfig::default());
        let file = UploadedFile::new("broken.docx", b"not a zip".to_vec());
        let err = converter.convert(&file).await.unwrap_err();
        assert!(matches!(err, Error::ConversionFailure { ref filename, .. } if filename == "broken.docx"));
    }
}
