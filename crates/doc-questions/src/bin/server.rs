//! Upload server binary
//!
//! Run with: cargo run -p doc-questions --bin doc-questions-server

use doc_questions::{config::AppConfig, server::QuestionServer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doc_questions=info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::load()?;

    tracing::info!("Configuration loaded");
    tracing::info!("  - Upload field: {}", config.upload.field_name);
    tracing::info!(
        "  - Limits: {} files, {} bytes each",
        config.upload.max_files,
        config.upload.max_file_size
    );
    tracing::info!(
        "  - Legacy .doc via {}: {}",
        config.conversion.libreoffice_binary,
        config.conversion.enable_legacy_doc
    );

    if config.conversion.enable_legacy_doc {
        let legacy = doc_questions::conversion::LegacyDocConverter::new(
            config.conversion.libreoffice_binary.clone(),
        );
        if !legacy.is_available().await {
            tracing::warn!(
                "{} not found, .doc uploads will fail until it is installed",
                config.conversion.libreoffice_binary
            );
        }
    }

    let server = QuestionServer::new(config);
    server.start().await?;

    Ok(())
}
