//! Strict TOML validation of the Codex config.
//!
//! The parser is an injected capability: the checker runs with one by
//! default, and tests (or a build without a parser) pass `None` to get the
//! skipped branch.

use anyhow::Context;

use super::MCP_SERVERS_TABLE;

/// A full TOML parser used only to verify the file and count its servers.
pub trait StrictTomlParser: std::fmt::Debug {
    fn parse(&self, text: &str) -> anyhow::Result<toml::Table>;
}

/// [`StrictTomlParser`] backed by the `toml` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TomlCrateParser;

impl StrictTomlParser for TomlCrateParser {
    fn parse(&self, text: &str) -> anyhow::Result<toml::Table> {
        toml::from_str(text).context("Failed to parse TOML config")
    }
}

/// Why strict validation did not run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    ParserUnavailable,
    FileMissing,
}

/// Outcome of strict validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StrictValidation {
    /// The document parsed; `server_count` entries sit directly under
    /// `mcp_servers`.
    Valid { server_count: usize },
    /// The document did not parse.
    Invalid { message: String },
    /// Validation was not attempted.
    Skipped(SkipReason),
}

impl StrictValidation {
    pub fn is_valid(&self) -> bool {
        matches!(self, StrictValidation::Valid { .. })
    }
}

/// Validate `text` (the Codex config, `None` when the file is absent).
pub fn validate(parser: Option<&dyn StrictTomlParser>, text: Option<&str>) -> StrictValidation {
    let Some(parser) = parser else {
        return StrictValidation::Skipped(SkipReason::ParserUnavailable);
    };
    let Some(text) = text else {
        return StrictValidation::Skipped(SkipReason::FileMissing);
    };

    match parser.parse(text) {
        Ok(table) => StrictValidation::Valid {
            server_count: count_servers(&table),
        },
        Err(err) => StrictValidation::Invalid {
            message: format!("{err:#}"),
        },
    }
}

fn count_servers(table: &toml::Table) -> usize {
    table
        .get(MCP_SERVERS_TABLE)
        .and_then(toml::Value::as_table)
        .map(|servers| servers.len())
        .unwrap_or(0)
}
