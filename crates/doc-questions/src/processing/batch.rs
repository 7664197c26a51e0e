//! Fail-fast batch processor

use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::time::Instant;
use tracing::Instrument;
use uuid::Uuid;

use crate::config::{AppConfig, UploadConfig};
use crate::conversion::TextConverter;
use crate::error::{Error, Result};
use crate::extraction::{extract_questions, remove_duplicates};
use crate::types::document::extension_of;
use crate::types::{ExtractionReport, UploadedFile};

/// Separator appended after each document's text
const DOCUMENT_SEPARATOR: &str = "\n\n";

/// Runs one upload batch through conversion and question extraction
#[derive(Clone)]
pub struct BatchProcessor {
    converter: Arc<dyn TextConverter>,
    limits: UploadConfig,
    concurrency: usize,
}

impl BatchProcessor {
    /// Create a processor using `converter` and the limits in `config`
    pub fn new(converter: Arc<dyn TextConverter>, config: &AppConfig) -> Self {
        Self {
            converter,
            limits: config.upload.clone(),
            concurrency: config.conversion.concurrency.max(1),
        }
    }

    /// Upload limits this processor enforces
    pub fn limits(&self) -> &UploadConfig {
        &self.limits
    }

    /// Check the batch-level limits before any file is read
    pub fn validate_batch(&self, files: &[UploadedFile]) -> Result<()> {
        if files.is_empty() {
            return Err(Error::NoFilesProvided);
        }
        if files.len() > self.limits.max_files {
            return Err(Error::TooManyFiles {
                count: files.len(),
                max: self.limits.max_files,
            });
        }
        Ok(())
    }

    /// Check a single file's extension and size
    pub fn validate_file(&self, file: &UploadedFile) -> Result<()> {
        if file.kind().is_none() {
            return Err(Error::unsupported(&file.filename, extension_of(&file.filename)));
        }
        if file.size() > self.limits.max_file_size {
            return Err(Error::FileTooLarge {
                filename: file.filename.clone(),
                size: file.size(),
                max: self.limits.max_file_size,
            });
        }
        Ok(())
    }

    /// Convert every file and extract the deduplicated questions.
    ///
    /// Files may convert concurrently, but texts are joined in submission
    /// order and the first failing file in that order aborts the batch.
    pub async fn process(&self, files: &[UploadedFile]) -> Result<ExtractionReport> {
        self.validate_batch(files)?;

        let batch_id = Uuid::new_v4();
        let span = tracing::info_span!("batch", id = %batch_id, files = files.len());

        async move {
            let start = Instant::now();
            let raw_text = self.collect_text(files).await?;
            let report = build_report(&raw_text, files.len());

            tracing::info!(
                "Processed {} files in {:.1}s",
                report.files_processed,
                start.elapsed().as_secs_f64()
            );
            tracing::info!(
                "Found {} questions, {} unique ({} duplicates removed)",
                report.original_count,
                report.unique_count,
                report.duplicates_removed()
            );
            Ok::<_, Error>(report)
        }
        .instrument(span)
        .await
    }

    async fn collect_text(&self, files: &[UploadedFile]) -> Result<String> {
        // Owned items keep the stream future Send inside axum handlers.
        let this = self.clone();
        let mut conversions = stream::iter(files.to_vec())
            .map(move |file| {
                let this = this.clone();
                async move { this.convert_one(&file).await }
            })
            .buffered(self.concurrency);

        let mut raw_text = String::new();
        while let Some(result) = conversions.next().await {
            raw_text.push_str(&result?);
            raw_text.push_str(DOCUMENT_SEPARATOR);
        }
        Ok(raw_text)
    }

    async fn convert_one(&self, file: &UploadedFile) -> Result<String> {
        self.validate_file(file)?;

        tracing::info!("Processing file: {} ({} bytes)", file.filename, file.size());
        match self.converter.convert(file).await {
            Ok(text) => {
                tracing::info!("Successfully extracted text from: {}", file.filename);
                Ok(text)
            }
            Err(e) => {
                tracing::error!("Error processing file {}: {}", file.filename, e);
                Err(e)
            }
        }
    }
}

/// Extract and deduplicate questions from already converted text
pub fn build_report(raw_text: &str, files_processed: usize) -> ExtractionReport {
    let candidates = extract_questions(raw_text);
    let original_count = candidates.len();
    let questions: Vec<String> = remove_duplicates(candidates)
        .into_iter()
        .map(str::to_string)
        .collect();

    ExtractionReport {
        original_count,
        unique_count: questions.len(),
        questions,
        files_processed,
    }
}
