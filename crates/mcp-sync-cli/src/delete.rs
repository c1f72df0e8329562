//! delete-mcp-server - interactive MCP server removal
//!
//! Removes one server from `~/.claude-env-switcher/mcp.json` and its table
//! from `~/.codex/config.toml`, then re-reads both files to confirm.

use std::io::{IsTerminal, Write};

use anyhow::Result;
use clap::Parser;

use mcp_sync_cli::delete_flow::DeleteFlow;
use mcp_sync_cli::logging;
use mcp_sync_cli::prompt::{LineInput, ReaderInput, TerminalInput};
use mcp_sync_core::paths::SyncPaths;

#[derive(Parser)]
#[command(name = "delete-mcp-server", version)]
#[command(about = "Delete an MCP server from the env-switcher cache and Codex config", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    logging::init_tracing();
    let _cli = Cli::parse();

    let paths = SyncPaths::from_home_dir()?;
    let stdout = std::io::stdout();

    if std::io::stdin().is_terminal() && console::user_attended_stderr() {
        run(paths, TerminalInput::new(), stdout)
    } else {
        run(paths, ReaderInput::new(std::io::stdin().lock()), stdout)
    }
}

fn run<I: LineInput, W: Write>(paths: SyncPaths, input: I, writer: W) -> Result<()> {
    let outcome = DeleteFlow::new(paths, input, writer).run()?;
    tracing::debug!(?outcome, "delete flow finished");
    Ok(())
}
