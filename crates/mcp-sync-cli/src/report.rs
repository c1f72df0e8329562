//! Human-readable rendering of a sync report.

use std::io::Write;

use anyhow::Result;
use console::style;

use mcp_sync_core::codex::strict::{SkipReason, StrictValidation};
use mcp_sync_core::status::{SyncComparison, SyncReport};

use crate::markers;

/// Write the five report sections to `writer`.
pub fn render<W: Write>(writer: &mut W, report: &SyncReport) -> Result<()> {
    writeln!(writer, "{}", markers::banner())?;
    writeln!(writer, "{}", style("  MCP Config Sync Check").bold().cyan())?;
    writeln!(writer, "{}", markers::banner())?;
    writeln!(writer)?;

    render_cache(writer, report)?;
    render_codex(writer, report)?;
    render_timestamps(writer, report)?;
    render_comparison(writer, &report.comparison)?;
    writeln!(writer, "{}", markers::banner())?;
    writeln!(writer)?;
    render_validation(writer, &report.validation)?;
    writeln!(writer)?;

    Ok(())
}

fn section<W: Write>(writer: &mut W, index: usize, title: &str) -> Result<()> {
    writeln!(writer, "[{index}] {}", style(title).bold())?;
    writeln!(writer, "{}", markers::rule())?;
    Ok(())
}

fn render_cache<W: Write>(writer: &mut W, report: &SyncReport) -> Result<()> {
    section(writer, 1, "Env-switcher cache")?;
    let cache = &report.cache;
    if cache.exists {
        writeln!(
            writer,
            "Codex-enabled MCP servers: {}",
            cache.codex_enabled.len()
        )?;
        for name in &cache.codex_enabled {
            writeln!(writer, "  - {name}")?;
        }
    } else {
        writeln!(
            writer,
            "{} Cache file not found: {}",
            markers::warn(),
            cache.path.display()
        )?;
    }
    writeln!(writer)?;
    Ok(())
}

fn render_codex<W: Write>(writer: &mut W, report: &SyncReport) -> Result<()> {
    section(writer, 2, "Codex config")?;
    let codex = &report.codex;
    if codex.exists {
        let mut names = codex.servers.clone();
        names.sort();
        writeln!(writer, "MCP servers in config.toml: {}", names.len())?;
        for name in &names {
            writeln!(writer, "  - {name}")?;
        }
    } else {
        writeln!(
            writer,
            "{} Config file not found: {}",
            markers::warn(),
            codex.path.display()
        )?;
    }
    writeln!(writer)?;
    Ok(())
}

fn render_timestamps<W: Write>(writer: &mut W, report: &SyncReport) -> Result<()> {
    section(writer, 3, "Last modified")?;
    if let Some(modified) = &report.cache.modified {
        writeln!(writer, "mcp.json:    {modified}")?;
    }
    if let Some(modified) = &report.codex.modified {
        writeln!(writer, "config.toml: {modified}")?;
    }
    writeln!(writer)?;
    Ok(())
}

fn render_comparison<W: Write>(writer: &mut W, comparison: &SyncComparison) -> Result<()> {
    section(writer, 4, "Sync status")?;

    if comparison.counts_match {
        writeln!(
            writer,
            "{} Counts match ({})",
            markers::ok(),
            comparison.manager_count
        )?;
        if comparison.in_sync {
            writeln!(writer, "{} Configs fully in sync", markers::ok())?;
        } else {
            writeln!(writer, "{} Configs differ", markers::fail())?;
        }
    } else {
        writeln!(writer, "{} Counts differ", markers::fail())?;
        writeln!(writer, "  Env-switcher: {}", comparison.manager_count)?;
        writeln!(writer, "  Codex config: {}", comparison.codex_count)?;
    }

    if !comparison.in_sync {
        writeln!(writer)?;
        writeln!(writer, "Differences:")?;
        if !comparison.only_in_manager.is_empty() {
            writeln!(writer, "  In env-switcher, missing from Codex:")?;
            for name in &comparison.only_in_manager {
                writeln!(writer, "    - {name}")?;
            }
        }
        if !comparison.only_in_codex.is_empty() {
            writeln!(writer, "  In Codex, missing from env-switcher:")?;
            for name in &comparison.only_in_codex {
                writeln!(writer, "    + {name}")?;
            }
        }
    }

    writeln!(writer)?;
    Ok(())
}

fn render_validation<W: Write>(writer: &mut W, validation: &StrictValidation) -> Result<()> {
    section(writer, 5, "TOML validation")?;
    match validation {
        StrictValidation::Valid { server_count } => {
            writeln!(writer, "{} TOML is well-formed", markers::ok())?;
            writeln!(writer, "{} MCP servers: {server_count}", markers::ok())?;
        }
        StrictValidation::Invalid { message } => {
            writeln!(writer, "{} TOML error: {message}", markers::fail())?;
        }
        StrictValidation::Skipped(SkipReason::ParserUnavailable) => {
            writeln!(
                writer,
                "{} No TOML parser available, skipping validation",
                markers::warn()
            )?;
        }
        StrictValidation::Skipped(SkipReason::FileMissing) => {
            writeln!(
                writer,
                "{} Config file not found, skipping validation",
                markers::warn()
            )?;
        }
    }
    Ok(())
}
