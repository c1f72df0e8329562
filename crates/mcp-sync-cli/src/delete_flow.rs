//! Interactive removal of one MCP server from both configs.
//!
//! Steps, in order, with no way back:
//! 1. Load the cache and list its entries
//! 2. Read a 1-based selection (`0` or bad input cancels)
//! 3. Read a `y` confirmation (anything else cancels)
//! 4. Remove the entry from the cache file
//! 5. Remove the server table from the Codex config
//! 6. Re-read both files and report what is still there
//!
//! Every cancellation happens before the first write.

use std::io::Write;

use anyhow::Result;
use console::style;

use mcp_sync_core::codex::scanner::{contains_table, delete_table};
use mcp_sync_core::config::{CacheEntries, ConfigStore, DeleteEntryOutcome};
use mcp_sync_core::fs::{read_optional, write_in_place};
use mcp_sync_core::paths::SyncPaths;

use crate::markers;
use crate::prompt::LineInput;

/// Why the flow stopped without touching any file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The cache holds no entries to choose from.
    NoEntries,
    /// The user entered `0`.
    UserDeclined,
    /// Non-numeric, out-of-range, or interrupted selection.
    InvalidSelection,
    /// Anything but `y` at the confirmation prompt.
    NotConfirmed,
}

/// What happened to the Codex config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodexRemoval {
    Removed,
    NotPresent,
    FileMissing,
}

/// Result of a completed deletion, as re-read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletionReport {
    pub name: String,
    pub cache: DeleteEntryOutcome,
    pub codex: CodexRemoval,
    pub still_in_cache: bool,
    /// `None` when the Codex config does not exist.
    pub still_in_codex: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The cache file does not exist; nothing to delete from.
    CacheMissing,
    Cancelled(CancelReason),
    Completed(DeletionReport),
}

/// Parsed answer to the selection question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Cancel,
    Invalid,
    OutOfRange(i64),
    /// Zero-based index into the sorted names.
    Chosen(usize),
}

impl Selection {
    /// Parse a 1-based choice among `count` entries. `None` input (EOF or
    /// interrupt) is invalid.
    pub fn parse(input: Option<&str>, count: usize) -> Self {
        let Some(choice) = input.and_then(|s| s.trim().parse::<i64>().ok()) else {
            return Selection::Invalid;
        };
        if choice == 0 {
            return Selection::Cancel;
        }
        match usize::try_from(choice) {
            Ok(n) if n <= count => Selection::Chosen(n - 1),
            _ => Selection::OutOfRange(choice),
        }
    }
}

/// Whether a confirmation answer accepts the deletion.
pub fn is_confirmed(input: Option<&str>) -> bool {
    input.is_some_and(|s| s.trim().to_lowercase() == "y")
}

pub struct DeleteFlow<I: LineInput, W: Write> {
    paths: SyncPaths,
    input: I,
    writer: W,
}

impl<I: LineInput, W: Write> DeleteFlow<I, W> {
    pub fn new(paths: SyncPaths, input: I, writer: W) -> Self {
        Self {
            paths,
            input,
            writer,
        }
    }

    /// Run the flow to completion or cancellation.
    ///
    /// A cache file that is not valid JSON aborts with an error.
    pub fn run(&mut self) -> Result<DeleteOutcome> {
        self.print_header()?;

        let store = ConfigStore::new(self.paths.cache_file());
        let Some(entries) = self.load_entries(&store)? else {
            return Ok(DeleteOutcome::CacheMissing);
        };
        if entries.is_empty() {
            writeln!(self.writer, "   {} No servers to delete", markers::info())?;
            return Ok(DeleteOutcome::Cancelled(CancelReason::NoEntries));
        }

        let names = entries.sorted_names();
        self.list_entries(&entries)?;

        let name = match self.await_selection(&names)? {
            Ok(name) => name,
            Err(reason) => return self.cancel(reason),
        };
        if !self.await_confirmation(&name)? {
            return self.cancel(CancelReason::NotConfirmed);
        }

        let cache = self.delete_from_cache(&store, &name)?;
        let codex = self.delete_from_toml(&name)?;
        let report = self.verify(&store, name, cache, codex)?;

        writeln!(self.writer, "{}", markers::banner())?;
        writeln!(self.writer, "Done")?;
        writeln!(self.writer, "{}", markers::banner())?;

        Ok(DeleteOutcome::Completed(report))
    }

    fn print_header(&mut self) -> Result<()> {
        writeln!(self.writer, "{}", markers::banner())?;
        writeln!(
            self.writer,
            "{}",
            style("  Delete MCP Server").bold().cyan()
        )?;
        writeln!(self.writer, "{}", markers::banner())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn load_entries(&mut self, store: &ConfigStore) -> Result<Option<CacheEntries>> {
        writeln!(self.writer, "[1] Reading cache file...")?;
        match store.load() {
            Ok(entries) => {
                writeln!(
                    self.writer,
                    "   {} {} servers in cache",
                    markers::ok(),
                    entries.len()
                )?;
                writeln!(self.writer)?;
                Ok(Some(entries))
            }
            Err(err) if err.is_not_found() => {
                writeln!(
                    self.writer,
                    "   {} Cache file not found: {}",
                    markers::fail(),
                    store.path().display()
                )?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn list_entries(&mut self, entries: &CacheEntries) -> Result<()> {
        writeln!(self.writer, "[2] Current servers:")?;
        for (i, (name, entry)) in entries.iter().enumerate() {
            writeln!(
                self.writer,
                "   {:2}. {:30} - {}",
                i + 1,
                name,
                entry.enable_platform.join(", ")
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }

    fn await_selection(&mut self, names: &[String]) -> Result<Result<String, CancelReason>> {
        writeln!(
            self.writer,
            "[3] Enter the number of the server to delete (0 to cancel):"
        )?;
        let answer = self.input.read_line("Server number")?;

        match Selection::parse(answer.as_deref(), names.len()) {
            Selection::Chosen(index) => {
                let name = names[index].clone();
                writeln!(self.writer, "   Selected: {}", style(&name).green())?;
                writeln!(self.writer)?;
                Ok(Ok(name))
            }
            Selection::Cancel => Ok(Err(CancelReason::UserDeclined)),
            Selection::OutOfRange(choice) => {
                writeln!(
                    self.writer,
                    "   {} Invalid selection: {choice}",
                    markers::fail()
                )?;
                Ok(Err(CancelReason::InvalidSelection))
            }
            Selection::Invalid => Ok(Err(CancelReason::InvalidSelection)),
        }
    }

    fn await_confirmation(&mut self, name: &str) -> Result<bool> {
        writeln!(self.writer, "[4] Delete '{name}'? (y/n)")?;
        let answer = self.input.read_line("Confirm")?;
        let confirmed = is_confirmed(answer.as_deref());
        if confirmed {
            writeln!(self.writer)?;
        }
        Ok(confirmed)
    }

    fn cancel(&mut self, reason: CancelReason) -> Result<DeleteOutcome> {
        tracing::debug!(?reason, "deletion cancelled");
        writeln!(self.writer, "   Deletion cancelled")?;
        Ok(DeleteOutcome::Cancelled(reason))
    }

    fn delete_from_cache(&mut self, store: &ConfigStore, name: &str) -> Result<DeleteEntryOutcome> {
        writeln!(self.writer, "[5] Removing from cache file...")?;
        let outcome = store.delete_entry(name)?;
        match outcome {
            DeleteEntryOutcome::Deleted => {
                writeln!(self.writer, "   {} Removed from cache", markers::ok())?;
            }
            DeleteEntryOutcome::NotPresent => {
                writeln!(
                    self.writer,
                    "   {} Server not found in cache",
                    markers::fail()
                )?;
            }
        }
        writeln!(self.writer)?;
        Ok(outcome)
    }

    fn delete_from_toml(&mut self, name: &str) -> Result<CodexRemoval> {
        writeln!(self.writer, "[6] Removing from Codex config...")?;
        let path = self.paths.codex_config();

        let outcome = match read_optional(path)? {
            None => {
                writeln!(
                    self.writer,
                    "   {} Codex config file not found",
                    markers::info()
                )?;
                CodexRemoval::FileMissing
            }
            Some(content) => {
                let removal = delete_table(&content, name);
                if removal.was_present {
                    write_in_place(path, &removal.text)?;
                    tracing::debug!(path = %path.display(), name, "removed codex table");
                    writeln!(self.writer, "   {} Removed from Codex config", markers::ok())?;
                    CodexRemoval::Removed
                } else {
                    writeln!(
                        self.writer,
                        "   {} Server not in Codex config",
                        markers::info()
                    )?;
                    CodexRemoval::NotPresent
                }
            }
        };
        writeln!(self.writer)?;
        Ok(outcome)
    }

    fn verify(
        &mut self,
        store: &ConfigStore,
        name: String,
        cache: DeleteEntryOutcome,
        codex: CodexRemoval,
    ) -> Result<DeletionReport> {
        writeln!(self.writer, "[7] Verifying...")?;

        let still_in_cache = store.contains(&name)?;
        if still_in_cache {
            writeln!(self.writer, "   {} Still in cache: {name}", markers::fail())?;
        } else {
            writeln!(self.writer, "   {} Gone from cache: {name}", markers::ok())?;
        }

        let still_in_codex = read_optional(self.paths.codex_config())?
            .map(|content| contains_table(&content, &name));
        match still_in_codex {
            Some(true) => {
                writeln!(
                    self.writer,
                    "   {} Still in Codex config: {name}",
                    markers::fail()
                )?;
            }
            Some(false) => {
                writeln!(
                    self.writer,
                    "   {} Gone from Codex config: {name}",
                    markers::ok()
                )?;
            }
            None => {}
        }
        writeln!(self.writer)?;

        Ok(DeletionReport {
            name,
            cache,
            codex,
            still_in_cache,
            still_in_codex,
        })
    }
}
