//! Location of the two files being reconciled.

use std::path::{Path, PathBuf};

/// Directory of the env-switcher cache, relative to the home directory.
pub const CACHE_DIR: &str = ".claude-env-switcher";
/// Cache file name.
pub const CACHE_FILE: &str = "mcp.json";
/// Codex configuration directory, relative to the home directory.
pub const CODEX_DIR: &str = ".codex";
/// Codex configuration file name.
pub const CODEX_CONFIG_FILE: &str = "config.toml";

/// The cache file and Codex config paths, resolved once and passed around.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncPaths {
    cache_file: PathBuf,
    codex_config: PathBuf,
}

impl SyncPaths {
    /// Resolve both paths under the current user's home directory.
    pub fn from_home_dir() -> anyhow::Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?;
        Ok(Self::under_home(&home))
    }

    /// Resolve both paths under an explicit home directory.
    pub fn under_home(home: &Path) -> Self {
        Self {
            cache_file: home.join(CACHE_DIR).join(CACHE_FILE),
            codex_config: home.join(CODEX_DIR).join(CODEX_CONFIG_FILE),
        }
    }

    pub fn new(cache_file: PathBuf, codex_config: PathBuf) -> Self {
        Self {
            cache_file,
            codex_config,
        }
    }

    pub fn cache_file(&self) -> &Path {
        &self.cache_file
    }

    pub fn codex_config(&self) -> &Path {
        &self.codex_config
    }
}
