//! Error type for storage and state store operations.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing persisted data.
///
/// Missing data is never an error; it resolves to defaults.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error for {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to encode document: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Stored item '{key}' is not valid: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}
