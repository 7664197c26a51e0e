//! Uploaded document types

use bytes::Bytes;
use serde::{Deserialize, Serialize};

/// Word-processor formats accepted for extraction
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Old Microsoft Word document (.doc) - requires LibreOffice
    Doc,
    /// Microsoft Word document (.docx)
    Docx,
}

impl DocumentKind {
    /// Detect the kind from a filename, ignoring extension case
    pub fn from_filename(filename: &str) -> Option<Self> {
        match extension_of(filename).as_str() {
            ".doc" => Some(Self::Doc),
            ".docx" => Some(Self::Docx),
            _ => None,
        }
    }
}

/// Lowercased extension of `filename` including the leading dot, or an empty
/// string when there is none.
///
/// Leading dots of dotfiles do not count: `".docx"` has no extension.
pub fn extension_of(filename: &str) -> String {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    match base.rfind('.') {
        Some(idx) if idx > 0 => base[idx..].to_lowercase(),
        _ => String::new(),
    }
}

/// A single uploaded file, kept in memory for the lifetime of one request
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Original filename as submitted by the client
    pub filename: String,
    /// Raw file bytes
    pub data: Bytes,
}

impl UploadedFile {
    pub fn new(filename: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            filename: filename.into(),
            data: data.into(),
        }
    }

    /// Size in bytes
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// Document kind, if the extension is supported
    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::from_filename(&self.filename)
    }
}
