//! Cache store for loading and rewriting mcp.json.

use std::path::{Path, PathBuf};

use serde_json::{Map, Value};

use super::{CacheEntries, StoreError};

/// Result of removing one entry from the cache file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteEntryOutcome {
    /// The entry existed and the file was rewritten without it.
    Deleted,
    /// The entry was not in the cache; the file was left untouched.
    NotPresent,
}

#[derive(Debug, Clone)]
pub struct ConfigStore {
    cache_path: PathBuf,
}

impl ConfigStore {
    pub fn new(cache_path: impl Into<PathBuf>) -> Self {
        Self {
            cache_path: cache_path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.cache_path
    }

    /// Read and parse the cache file.
    ///
    /// Fails with [`StoreError::NotFound`] when the file is absent and with
    /// [`StoreError::MalformedData`] when it is not valid JSON or its root is
    /// not an object. Entries themselves are never rejected.
    pub fn load(&self) -> Result<CacheEntries, StoreError> {
        let bytes = match std::fs::read(&self.cache_path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %self.cache_path.display(), "cache file not found");
                return Err(StoreError::NotFound {
                    path: self.cache_path.clone(),
                });
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.cache_path.clone(),
                    source,
                });
            }
        };

        let raw: Map<String, Value> =
            serde_json::from_slice(&bytes).map_err(|source| self.malformed(source))?;
        let entries = CacheEntries::from_raw(raw);
        tracing::debug!(
            path = %self.cache_path.display(),
            entries = entries.len(),
            "loaded cache"
        );
        Ok(entries)
    }

    /// Whether the cache on disk currently holds `name`.
    pub fn contains(&self, name: &str) -> Result<bool, StoreError> {
        Ok(self.load()?.contains(name))
    }

    /// Remove `name` from the cache file.
    ///
    /// The file is rewritten in place with 2-space indentation and non-ASCII
    /// text kept literal. The write is not atomic.
    pub fn delete_entry(&self, name: &str) -> Result<DeleteEntryOutcome, StoreError> {
        let mut entries = self.load()?;
        if !entries.remove(name) {
            return Ok(DeleteEntryOutcome::NotPresent);
        }
        self.save(&entries)?;
        tracing::debug!(path = %self.cache_path.display(), name, "removed cache entry");
        Ok(DeleteEntryOutcome::Deleted)
    }

    fn save(&self, entries: &CacheEntries) -> Result<(), StoreError> {
        let content =
            serde_json::to_string_pretty(entries.raw()).map_err(|source| self.malformed(source))?;
        std::fs::write(&self.cache_path, content).map_err(|source| StoreError::Io {
            path: self.cache_path.clone(),
            source,
        })
    }

    fn malformed(&self, source: serde_json::Error) -> StoreError {
        StoreError::MalformedData {
            path: self.cache_path.clone(),
            source,
        }
    }
}
