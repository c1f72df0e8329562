//! The env-switcher's JSON cache of MCP server definitions.
//!
//! The cache is the source of truth: a JSON object mapping server name to
//! server definition, each carrying the list of platforms it is enabled on.

pub mod error;
pub mod schema;
pub mod store;

use std::collections::BTreeSet;

pub use error::StoreError;
pub use schema::{CacheEntries, ServerEntry};
pub use store::{ConfigStore, DeleteEntryOutcome};

/// Platform identifier the Codex config is generated for.
pub const CODEX_PLATFORM: &str = "codex";

/// Names of the entries whose `enable_platform` list contains `platform`.
pub fn filter_by_platform(entries: &CacheEntries, platform: &str) -> BTreeSet<String> {
    entries
        .iter()
        .filter(|(_, entry)| entry.is_enabled_on(platform))
        .map(|(name, _)| name.to_string())
        .collect()
}
