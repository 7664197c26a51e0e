//! Configuration for the question extraction service

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Env var naming an optional TOML config file
pub const CONFIG_PATH_ENV: &str = "DOCQ_CONFIG";

/// Main service configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,
    /// Upload limits
    pub upload: UploadConfig,
    /// Document conversion configuration
    pub conversion: ConversionConfig,
}

impl AppConfig {
    /// Load configuration: TOML file from `DOCQ_CONFIG` if set, then env overrides
    pub fn load() -> Result<Self> {
        let mut config = match std::env::var_os(CONFIG_PATH_ENV) {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Read a TOML config file. Missing sections and fields take defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse TOML config text
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::Config(e.to_string()))
    }

    /// Apply `HOST`, `PORT` and `DOCQ_STATIC_DIR` overrides from `lookup`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            self.server.port = port
                .parse()
                .map_err(|_| Error::Config(format!("Invalid PORT: {}", port)))?;
        }
        if let Some(dir) = lookup("DOCQ_STATIC_DIR") {
            self.server.static_dir = PathBuf::from(dir);
        }
        Ok(())
    }

    /// Largest request body the upload route accepts
    pub fn max_request_size(&self) -> usize {
        // Room for multipart framing and non-file fields
        self.upload.max_files * self.upload.max_file_size + 1024 * 1024
    }
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Host address
    pub host: String,
    /// Port number
    pub port: u16,
    /// Enable CORS
    pub enable_cors: bool,
    /// Directory served as static files, `index.html` at `/`
    pub static_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            enable_cors: true,
            static_dir: PathBuf::from("public"),
        }
    }
}

/// Upload limits
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadConfig {
    /// Multipart field carrying the documents
    pub field_name: String,
    /// Maximum files per request
    pub max_files: usize,
    /// Maximum size of a single file in bytes (default: 5MB)
    pub max_file_size: usize,
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            field_name: "docFiles".to_string(),
            max_files: 10,
            max_file_size: 5 * 1024 * 1024, // 5MB
        }
    }
}

/// Document conversion configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConversionConfig {
    /// Convert legacy .doc files through LibreOffice
    pub enable_legacy_doc: bool,
    /// LibreOffice executable
    pub libreoffice_binary: String,
    /// Timeout for converting a single file in seconds
    pub timeout_secs: u64,
    /// Files converted concurrently within one batch
    pub concurrency: usize,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            enable_legacy_doc: true,
            libreoffice_binary: "libreoffice".to_string(),
            timeout_secs: 60,
            concurrency: 4,
        }
    }
}
