//! Synchronization status between the cache and the Codex config.
//!
//! Collects, without mutating anything:
//! - codex-enabled entries of the cache
//! - server tables declared in the Codex config
//! - modification times of both files
//! - the set comparison and strict TOML validation

use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::codex::scanner::extract_table_names;
use crate::codex::strict::{self, StrictTomlParser, StrictValidation, TomlCrateParser};
use crate::config::{CODEX_PLATFORM, ConfigStore, StoreError, filter_by_platform};
use crate::fs::{modified_timestamp, read_optional};
use crate::paths::SyncPaths;

// =============================================================================
// Data Structures
// =============================================================================

/// Full result of a sync check
#[derive(Debug, Clone)]
pub struct SyncReport {
    pub cache: CacheStatus,
    pub codex: CodexStatus,
    pub comparison: SyncComparison,
    pub validation: StrictValidation,
}

/// Cache side of the check
#[derive(Debug, Clone)]
pub struct CacheStatus {
    pub path: PathBuf,
    pub exists: bool,
    /// Entries with `codex` in `enable_platform`
    pub codex_enabled: BTreeSet<String>,
    pub modified: Option<String>,
}

/// Codex config side of the check
#[derive(Debug, Clone)]
pub struct CodexStatus {
    pub path: PathBuf,
    pub exists: bool,
    /// Declared server tables, file order, duplicates kept
    pub servers: Vec<String>,
    pub modified: Option<String>,
}

impl CodexStatus {
    pub fn server_set(&self) -> BTreeSet<String> {
        self.servers.iter().cloned().collect()
    }
}

/// Set comparison between the two sides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncComparison {
    pub manager_count: usize,
    pub codex_count: usize,
    pub counts_match: bool,
    pub in_sync: bool,
    /// Enabled for Codex in the cache, missing from config.toml (sorted)
    pub only_in_manager: Vec<String>,
    /// Declared in config.toml, not enabled for Codex in the cache (sorted)
    pub only_in_codex: Vec<String>,
}

impl SyncComparison {
    pub fn compare(manager: &BTreeSet<String>, codex: &BTreeSet<String>) -> Self {
        Self {
            manager_count: manager.len(),
            codex_count: codex.len(),
            counts_match: manager.len() == codex.len(),
            in_sync: manager == codex,
            only_in_manager: manager.difference(codex).cloned().collect(),
            only_in_codex: codex.difference(manager).cloned().collect(),
        }
    }
}

// =============================================================================
// Checker
// =============================================================================

#[derive(Debug)]
pub struct SyncChecker {
    paths: SyncPaths,
    parser: Option<Box<dyn StrictTomlParser>>,
}

impl SyncChecker {
    pub fn new(paths: SyncPaths) -> Self {
        Self {
            paths,
            parser: Some(Box::new(TomlCrateParser)),
        }
    }

    /// Replace the strict parser; `None` skips validation.
    pub fn with_strict_parser(mut self, parser: Option<Box<dyn StrictTomlParser>>) -> Self {
        self.parser = parser;
        self
    }

    /// Run the check.
    ///
    /// Missing files count as empty. A cache file that is not valid JSON is
    /// returned as [`StoreError::MalformedData`].
    pub fn run(&self) -> anyhow::Result<SyncReport> {
        let cache = self.cache_status()?;

        let codex_path = self.paths.codex_config();
        let codex_text = read_optional(codex_path)?;
        let codex = CodexStatus {
            path: codex_path.to_path_buf(),
            exists: codex_text.is_some(),
            servers: codex_text
                .as_deref()
                .map(extract_table_names)
                .unwrap_or_default(),
            modified: modified_timestamp(codex_path),
        };

        let comparison = SyncComparison::compare(&cache.codex_enabled, &codex.server_set());
        let validation = strict::validate(self.parser.as_deref(), codex_text.as_deref());

        tracing::debug!(
            manager = comparison.manager_count,
            codex = comparison.codex_count,
            in_sync = comparison.in_sync,
            "sync check complete"
        );

        Ok(SyncReport {
            cache,
            codex,
            comparison,
            validation,
        })
    }

    fn cache_status(&self) -> Result<CacheStatus, StoreError> {
        let store = ConfigStore::new(self.paths.cache_file());
        let (exists, codex_enabled) = match store.load() {
            Ok(entries) => (true, filter_by_platform(&entries, CODEX_PLATFORM)),
            Err(err) if err.is_not_found() => (false, BTreeSet::new()),
            Err(err) => return Err(err),
        };
        Ok(CacheStatus {
            path: store.path().to_path_buf(),
            exists,
            codex_enabled,
            modified: modified_timestamp(store.path()),
        })
    }
}
