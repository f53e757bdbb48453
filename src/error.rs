//! Error types for the storage layer
//!
//! Store operations never surface these to callers; they are logged and the
//! in-memory state stays authoritative. The storage domain itself reports
//! them so the degraded paths stay observable.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a storage domain
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Value (de)serialization errors
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// The domain refused the write (read-only or detached)
    #[error("Write rejected by storage domain '{0}'")]
    WriteRejected(String),

    /// The domain location could not be opened
    #[error("Storage domain unavailable at {path}: {message}")]
    Unavailable { path: PathBuf, message: String },
}

/// Result type alias for storage operations
pub type StoreResult<T> = Result<T, StoreError>;
