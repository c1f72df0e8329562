//! Line-oriented scanner for `[mcp_servers.<name>]` tables.
//!
//! Server names containing `.` cannot be represented: the header pattern
//! stops at the first segment, so `[mcp_servers.a.b]` reads as a nested
//! table of `a` rather than as a server called `a.b`.

use std::sync::OnceLock;

use regex::Regex;

use super::server_header;

/// Prefix shared by every server table header, nested ones included.
const HEADER_PREFIX: &str = "[mcp_servers.";

fn header_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^\[mcp_servers\.([^.]+)\]$").expect("server header pattern is valid")
    })
}

/// Server names declared by `[mcp_servers.<name>]` headers, in file order.
///
/// Headers are matched on the trimmed line. Nested tables such as
/// `[mcp_servers.foo.env]` are skipped. Duplicate headers yield duplicate
/// names.
pub fn extract_table_names(text: &str) -> Vec<String> {
    text.split('\n')
        .filter_map(|line| {
            header_pattern()
                .captures(line.trim())
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}

/// Whether any line is exactly the header of server `name`.
pub fn contains_table(text: &str, name: &str) -> bool {
    let header = server_header(name);
    text.split('\n').any(|line| line.trim() == header)
}

/// Output of [`delete_table`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRemoval {
    pub text: String,
    pub was_present: bool,
}

/// Remove the table of server `name` from the document text.
///
/// Dropping starts at the header line and ends just before the next line
/// beginning with `[mcp_servers.`, which is kept. A table at the end of the
/// file is dropped up to end of file. Other tables (`[profiles]`, ...)
/// following the target do not end the block. Lines are split and rejoined
/// on `\n`, so `\r\n` endings pass through.
pub fn delete_table(text: &str, name: &str) -> TableRemoval {
    let header = server_header(name);
    let mut kept: Vec<&str> = Vec::new();
    let mut skipping = false;
    let mut was_present = false;

    for line in text.split('\n') {
        let trimmed = line.trim();
        if trimmed == header {
            skipping = true;
            was_present = true;
            continue;
        }
        if skipping && trimmed.starts_with(HEADER_PREFIX) {
            skipping = false;
        }
        if !skipping {
            kept.push(line);
        }
    }

    if !was_present {
        return TableRemoval {
            text: text.to_string(),
            was_present,
        };
    }

    TableRemoval {
        text: kept.join("\n"),
        was_present,
    }
}
