//! Schema of the cache file.

use std::collections::{BTreeMap, btree_map};

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One MCP server definition as stored by the env-switcher.
///
/// Only `enable_platform` is typed. Every other field the switcher writes
/// (`type`, `command`, `args`, `env`, `url`, ...) stays as raw JSON in
/// `fields` and is never checked.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServerEntry {
    #[serde(default, deserialize_with = "platform_list")]
    pub enable_platform: Vec<String>,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl ServerEntry {
    /// Read an entry without failing: a value that is not an object has no
    /// platforms and no fields.
    pub fn from_value(value: &Value) -> Self {
        match serde_json::from_value(value.clone()) {
            Ok(entry) => entry,
            Err(err) => {
                tracing::debug!(%err, "cache entry is not an object");
                Self::default()
            }
        }
    }

    pub fn is_enabled_on(&self, platform: &str) -> bool {
        self.enable_platform.iter().any(|p| p == platform)
    }

    /// Raw value of any other field.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Transport (`stdio`, `http` or `sse`) when stored as a string.
    pub fn transport(&self) -> Option<&str> {
        self.field("type").and_then(Value::as_str)
    }
}

// `null`, a missing key or a non-list all mean no platforms; non-string
// items are ignored.
fn platform_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let platforms = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(platform) => Some(platform),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    };
    Ok(platforms)
}

/// A loaded cache file.
///
/// Keeps the raw JSON object (in file order) for rewriting, alongside the
/// typed entries sorted by name for reporting.
#[derive(Debug, Clone, Default)]
pub struct CacheEntries {
    raw: Map<String, Value>,
    servers: BTreeMap<String, ServerEntry>,
}

impl CacheEntries {
    /// Build from the top-level JSON object.
    pub fn from_raw(raw: Map<String, Value>) -> Self {
        let servers = raw
            .iter()
            .map(|(name, value)| (name.clone(), ServerEntry::from_value(value)))
            .collect();
        Self { raw, servers }
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.servers.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&ServerEntry> {
        self.servers.get(name)
    }

    /// Entries in alphabetical order of name.
    pub fn iter(&self) -> btree_map::Iter<'_, String, ServerEntry> {
        self.servers.iter()
    }

    /// Names in alphabetical order.
    pub fn sorted_names(&self) -> Vec<String> {
        self.servers.keys().cloned().collect()
    }

    /// Remove an entry, returning whether it existed.
    pub fn remove(&mut self, name: &str) -> bool {
        self.servers.remove(name);
        self.raw.shift_remove(name).is_some()
    }

    /// The JSON object as it will be written back, in original key order.
    pub fn raw(&self) -> &Map<String, Value> {
        &self.raw
    }
}
