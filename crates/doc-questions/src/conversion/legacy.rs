//! Legacy .doc conversion via headless LibreOffice

use std::path::Path;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Converts `.doc` files to `.docx` with a LibreOffice subprocess.
///
/// Each conversion runs in its own temporary directory, removed on drop.
pub struct LegacyDocConverter {
    binary: String,
}

impl LegacyDocConverter {
    /// Create a converter that invokes `binary` (usually `libreoffice` or `soffice`)
    pub fn new(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }

    /// Check if the LibreOffice binary can be launched
    pub async fn is_available(&self) -> bool {
        Command::new(&self.binary)
            .arg("--version")
            .output()
            .await
            .map(|o| o.status.success())
            .unwrap_or(false)
    }

    /// Convert a `.doc` payload and return the `.docx` bytes
    pub async fn convert(&self, filename: &str, data: &[u8]) -> Result<Vec<u8>> {
        let temp_dir = tempfile::Builder::new()
            .prefix("doc-questions-")
            .tempdir()
            .map_err(|e| Error::conversion(filename, format!("Failed to create temp dir: {}", e)))?;

        // The client-supplied name never touches the filesystem.
        let input_path = temp_dir.path().join("input.doc");
        tokio::fs::write(&input_path, data)
            .await
            .map_err(|e| Error::conversion(filename, format!("Failed to write temp file: {}", e)))?;

        let output = Command::new(&self.binary)
            .arg("--headless")
            .arg("--convert-to")
            .arg("docx")
            .arg("--outdir")
            .arg(temp_dir.path())
            .arg(&input_path)
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|e| {
                Error::conversion(filename, format!("Failed to run {}: {}", self.binary, e))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(Error::conversion(
                filename,
                format!("LibreOffice error: {}", stderr.trim()),
            ));
        }

        read_converted(filename, &temp_dir.path().join("input.docx")).await
    }
}

async fn read_converted(filename: &str, path: &Path) -> Result<Vec<u8>> {
    tokio::fs::read(path).await.map_err(|e| {
        Error::conversion(filename, format!("Failed to read converted file: {}", e))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_binary_is_conversion_failure() {
        let converter = LegacyDocConverter::new("definitely-not-libreoffice-binary");
        assert!(!converter.is_available().await);

        let err = converter.convert("old.doc", b"data").await.unwrap_err();
        match err {
            Error::ConversionFailure { filename, message } => {
                assert_eq!(filename, "old.doc");
                assert!(message.contains("definitely-not-libreoffice-binary"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
