//! Response types for the upload endpoint

use serde::{Deserialize, Serialize};

/// Result of extracting questions from one upload batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionReport {
    /// Question candidates found before deduplication
    pub original_count: usize,
    /// Questions left after deduplication
    pub unique_count: usize,
    /// Deduplicated questions, in order of first occurrence
    pub questions: Vec<String>,
    /// Number of documents converted
    pub files_processed: usize,
}

impl ExtractionReport {
    /// Number of candidates dropped as duplicates
    pub fn duplicates_removed(&self) -> usize {
        self.original_count - self.unique_count
    }
}

/// JSON body returned for failed requests
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Short headline
    pub error: String,
    /// Full message, naming the failing file where there is one
    pub details: String,
    /// Machine-readable error kind
    #[serde(rename = "type")]
    pub kind: String,
}
