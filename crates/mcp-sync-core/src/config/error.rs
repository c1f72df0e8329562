//! Failure modes of the cache store.

use std::path::PathBuf;

/// Errors raised while reading or rewriting the cache file.
///
/// `NotFound` is recoverable: callers report it and continue with an empty
/// cache. `MalformedData` is not and must reach the top of the program.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Cache file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Cache file is not a valid JSON object: {}", .path.display())]
    MalformedData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to access cache file: {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound { .. })
    }
}
