//! Command-line extraction over local files
//!
//! Run with: cargo run -p doc-questions --features cli --bin doc-questions -- quiz.docx

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use doc_questions::{conversion::DocumentConverter, AppConfig, BatchProcessor, UploadedFile};

/// Extract unique questions from .doc / .docx files
#[derive(Debug, Parser)]
#[command(name = "doc-questions", version, about)]
struct Cli {
    /// Documents to scan, in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Pretty-print the JSON report
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "doc_questions=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    let mut files = Vec::with_capacity(cli.files.len());
    for path in &cli.files {
        let data = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        files.push(UploadedFile::new(filename, data));
    }

    let converter = Arc::new(DocumentConverter::new(config.conversion.clone()));
    let processor = BatchProcessor::new(converter, &config);
    let report = processor.process(&files).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{}", json);

    Ok(())
}
