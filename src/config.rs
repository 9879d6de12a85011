use anyhow::Result;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub ocr: OcrConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub port: u16,
    pub host: String,
    pub cors_allowed_origins: Vec<String>,
    /// Coarse wall-clock deadline for a whole batch request, in seconds.
    /// Hitting it abandons the batch; no partial results are returned.
    pub request_timeout_secs: u64,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory uploaded files are staged in for the duration of a batch.
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OcrConfig {
    /// Tesseract language code, e.g. "eng".
    pub language: String,
    /// Optional tessdata directory; falls back to the system default when unset.
    pub tessdata_dir: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            server: ServerConfig {
                port: env::var("PORT")
                    .unwrap_or_else(|_| "3000".to_string())
                    .parse()?,
                host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                cors_allowed_origins: env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| "*".to_string())
                    .split(',')
                    .map(|s| s.trim().to_string())
                    .collect(),
                request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "120".to_string())
                    .parse()?,
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .unwrap_or_else(|_| (50 * 1024 * 1024).to_string())
                    .parse()?,
            },
            storage: StorageConfig {
                upload_dir: env::var("UPLOAD_DIR")
                    .unwrap_or_else(|_| "temp_uploads".to_string())
                    .into(),
            },
            ocr: OcrConfig {
                language: env::var("OCR_LANGUAGE").unwrap_or_else(|_| "eng".to_string()),
                tessdata_dir: env::var("TESSDATA_DIR").ok(),
            },
        })
    }
}
