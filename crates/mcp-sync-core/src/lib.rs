//! mcp-sync Core Library
//!
//! Reconciles MCP server definitions between the env-switcher's JSON cache
//! and the Codex `config.toml`.

pub mod codex;
pub mod config;
pub mod fs;
pub mod paths;
pub mod status;

/// Re-exports of commonly used types
pub mod prelude {
    // Cache
    pub use crate::config::{
        CacheEntries, ConfigStore, DeleteEntryOutcome, ServerEntry, StoreError,
        filter_by_platform,
    };

    // Codex config
    pub use crate::codex::scanner::{
        TableRemoval, contains_table, delete_table, extract_table_names,
    };
    pub use crate::codex::strict::{
        SkipReason, StrictTomlParser, StrictValidation, TomlCrateParser,
    };

    // Paths
    pub use crate::paths::SyncPaths;

    // Status
    pub use crate::status::{SyncChecker, SyncComparison, SyncReport};
}
