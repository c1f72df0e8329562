//! Shared pieces of the `check-mcp-sync` and `delete-mcp-server` binaries.

pub mod delete_flow;
pub mod logging;
pub mod markers;
pub mod prompt;
pub mod report;
