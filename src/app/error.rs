//! Demo application error types

use crate::queue::api::QueueError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error("Configuration file does not exist: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    #[error("Error reading configuration file {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Error parsing configuration file {}: {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Logging setup failed: {message}")]
    Logging { message: String },

    #[error("A {role} thread panicked")]
    ThreadPanicked { role: String },

    #[error(transparent)]
    Queue(#[from] QueueError),
}

/// Result type for demo operations
pub type DemoResult<T> = Result<T, DemoError>;
