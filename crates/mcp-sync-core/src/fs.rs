//! Filesystem helpers shared by the checker and the deletion flow.

use std::path::Path;

use anyhow::Context;
use chrono::{DateTime, Local};

/// Format used for modification timestamps in reports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Read a UTF-8 file, returning `None` when it does not exist.
pub fn read_optional(path: &Path) -> anyhow::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(err) => {
            Err(err).with_context(|| format!("Failed to read file: {}", path.display()))
        }
    }
}

/// Overwrite a file in place. Not atomic: there is no temp file and rename.
pub fn write_in_place(path: &Path, content: &str) -> anyhow::Result<()> {
    std::fs::write(path, content)
        .with_context(|| format!("Failed to write file: {}", path.display()))
}

/// Last modification time in local time, or `None` when unavailable.
pub fn modified_at(path: &Path) -> Option<DateTime<Local>> {
    let modified = std::fs::metadata(path).and_then(|m| m.modified()).ok()?;
    Some(DateTime::<Local>::from(modified))
}

/// Last modification time formatted as `YYYY-MM-DD HH:MM:SS`.
pub fn modified_timestamp(path: &Path) -> Option<String> {
    modified_at(path).map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}
