//! Status markers prefixed to every outcome line.

use console::{StyledObject, style};

pub fn ok() -> StyledObject<&'static str> {
    style("✓").green()
}

pub fn warn() -> StyledObject<&'static str> {
    style("⚠").yellow()
}

pub fn fail() -> StyledObject<&'static str> {
    style("✗").red()
}

pub fn info() -> StyledObject<&'static str> {
    style("ℹ").cyan()
}

/// Heavy rule framing a program's output.
pub fn banner() -> String {
    "=".repeat(60)
}

/// Light rule under a section heading.
pub fn rule() -> String {
    "-".repeat(60)
}
