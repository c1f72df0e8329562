//! Codex `config.toml` handling.
//!
//! The server tables are found and removed with a line scan, never by
//! re-serializing the document, so comments, blank lines and key order in
//! the rest of the file survive untouched. A full TOML parse is only used to
//! validate the file.

pub mod scanner;
pub mod strict;

pub use scanner::{TableRemoval, contains_table, delete_table, extract_table_names};
pub use strict::{SkipReason, StrictTomlParser, StrictValidation, TomlCrateParser};

/// Name of the table holding MCP server definitions.
pub const MCP_SERVERS_TABLE: &str = "mcp_servers";

/// Header line of the table for server `name`.
pub fn server_header(name: &str) -> String {
    format!("[{MCP_SERVERS_TABLE}.{name}]")
}
