//! check-mcp-sync - MCP config sync checker
//!
//! Compares the Codex-enabled servers of `~/.claude-env-switcher/mcp.json`
//! with the `[mcp_servers.*]` tables of `~/.codex/config.toml`.

use std::io::{IsTerminal, Write};

use anyhow::Result;
use clap::Parser;

use mcp_sync_cli::prompt::{TerminalInput, wait_for_enter};
use mcp_sync_cli::{logging, report};
use mcp_sync_core::paths::SyncPaths;
use mcp_sync_core::status::SyncChecker;

#[derive(Parser)]
#[command(name = "check-mcp-sync", version)]
#[command(about = "Check MCP server sync between the env-switcher cache and Codex", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    logging::init_tracing();
    let _cli = Cli::parse();

    let paths = SyncPaths::from_home_dir()?;
    let report = SyncChecker::new(paths).run()?;

    let mut stdout = std::io::stdout().lock();
    report::render(&mut stdout, &report)?;
    stdout.flush()?;
    drop(stdout);

    // The pause reads stdin; a pipe or closed stdin has nothing to wait for.
    wait_for_enter(&mut TerminalInput::new(), std::io::stdin().is_terminal())?;
    Ok(())
}
