//! Error types for the Claimlens core library.
//!
//! The verification pipeline itself is total and never returns errors. Failures only
//! arise at the edges: loading configuration and reading summary documents.

use std::path::PathBuf;

/// Top-level error type for the Claimlens core library.
#[derive(Debug, thiserror::Error)]
pub enum ClaimlensError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Document error: {0}")]
    Document(#[from] DocumentError),
}

/// Errors from the configuration system.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: String, message: String },
}

impl ConfigError {
    pub(crate) fn invalid(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Invalid {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Errors from reading a summary document.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("Failed to read document: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse document JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A type alias for results using the top-level `ClaimlensError`.
pub type Result<T> = std::result::Result<T, ClaimlensError>;
