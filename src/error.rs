//! Error types for loading result documents

use std::path::PathBuf;
use thiserror::Error;

/// Result type for loader and configuration operations
pub type Result<T> = std::result::Result<T, ResultError>;

/// Errors raised while locating, reading or configuring result documents
#[derive(Error, Debug)]
pub enum ResultError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Path not found: {0}")]
    InvalidPath(PathBuf),

    #[error("Directory walk error: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config_crate::ConfigError),
}
