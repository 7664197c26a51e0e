//! Application state for the upload server

use parking_lot::RwLock;
use std::sync::Arc;

use crate::config::AppConfig;
use crate::conversion::{DocumentConverter, TextConverter};
use crate::processing::BatchProcessor;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Configuration
    config: AppConfig,
    /// Batch processor (owns the converter)
    processor: BatchProcessor,
    /// Ready state
    ready: RwLock<bool>,
}

impl AppState {
    /// Create state with the default docx-rs / LibreOffice converter
    pub fn new(config: AppConfig) -> Self {
        let converter = Arc::new(DocumentConverter::new(config.conversion.clone()));
        Self::with_converter(config, converter)
    }

    /// Create state around a specific converter
    pub fn with_converter(config: AppConfig, converter: Arc<dyn TextConverter>) -> Self {
        tracing::info!("Initializing application state (converter: {})", converter.name());
        let processor = BatchProcessor::new(converter, &config);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                processor,
                ready: RwLock::new(true),
            }),
        }
    }

    /// Get configuration
    pub fn config(&self) -> &AppConfig {
        &self.inner.config
    }

    /// Get batch processor
    pub fn processor(&self) -> &BatchProcessor {
        &self.inner.processor
    }

    /// Check if the server is ready
    pub fn is_ready(&self) -> bool {
        *self.inner.ready.read()
    }

    /// Set ready state
    pub fn set_ready(&self, ready: bool) {
        *self.inner.ready.write() = ready;
    }
}
