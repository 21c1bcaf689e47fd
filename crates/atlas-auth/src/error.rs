//! Error types for token storage.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in a token storage backend.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Failed to read the token file.
    #[error("failed to read token file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the token file.
    #[error("failed to write token file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Token file is not valid JSON.
    #[error("malformed token file {path}: {source}")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// In-memory store lock was poisoned by a panicking holder.
    #[error("token store lock poisoned")]
    LockPoisoned,
}

/// Result type for token storage operations.
pub type Result<T> = std::result::Result<T, AuthError>;
