use serde_json::{Value, json};
use tempfile::TempDir;

use mcp_sync_core::config::{
    CODEX_PLATFORM, ConfigStore, DeleteEntryOutcome, StoreError, filter_by_platform,
};

fn write_cache(temp: &TempDir, content: &str) -> ConfigStore {
    let path = temp.path().join("mcp.json");
    std::fs::write(&path, content).unwrap();
    ConfigStore::new(path)
}

#[test]
fn load_missing_returns_not_found() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new(temp.path().join("mcp.json"));

    let err = store.load().unwrap_err();

    assert!(err.is_not_found());
    assert!(matches!(err, StoreError::NotFound { .. }));
}

#[test]
fn load_invalid_json_is_malformed() {
    let temp = TempDir::new().unwrap();
    let store = write_cache(&temp, "{\"a\": ");

    let err = store.load().unwrap_err();

    assert!(matches!(err, StoreError::MalformedData { .. }));
}

#[test]
fn load_non_object_root_is_malformed() {
    let temp = TempDir::new().unwrap();
    let store = write_cache(&temp, "[1, 2, 3]");

    let err = store.load().unwrap_err();

    assert!(matches!(err, StoreError::MalformedData { .. }));
}

#[test]
fn load_reads_entries() {
    let temp = TempDir::new().unwrap();
    let store = write_cache(
        &temp,
        r#"{
  "context7": {
    "type": "stdio",
    "command": "npx",
    "args": ["-y", "@upstash/context7-mcp"],
    "env": {"API_KEY": "secret"},
    "enable_platform": ["codex"]
  },
  "legacy": {"enable_platform": null, "command": "node"}
}"#,
    );

    let entries = store.load().unwrap();

    assert_eq!(entries.len(), 2);
    let context7 = entries.get("context7").unwrap();
    assert_eq!(context7.transport(), Some("stdio"));
    assert_eq!(context7.enable_platform, vec!["codex"]);
    assert_eq!(
        context7.field("args"),
        Some(&json!(["-y", "@upstash/context7-mcp"]))
    );
    assert!(context7.field("enable_platform").is_none());
    assert!(entries.get("legacy").unwrap().enable_platform.is_empty());
}

#[test]
fn load_accepts_unexpected_field_types() {
    let temp = TempDir::new().unwrap();
    let store = write_cache(
        &temp,
        r#"{
  "a": {"enable_platform": ["codex"], "env": {"PORT": 8080}, "args": "--stdio"},
  "b": {"enable_platform": ["codex"], "type": 3, "url": null}
}"#,
    );

    let entries = store.load().unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries.get("a").unwrap().field("env"), Some(&json!({"PORT": 8080})));
    assert_eq!(entries.get("b").unwrap().transport(), None);
    let codex = filter_by_platform(&entries, CODEX_PLATFORM);
    assert_eq!(codex.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn load_tolerates_odd_platform_lists_and_entries() {
    let temp = TempDir::new().unwrap();
    let store = write_cache(
        &temp,
        r#"{
  "as_string": {"enable_platform": "codex"},
  "mixed": {"enable_platform": [1, "codex", null]},
  "scalar": 42,
  "missing": {"command": "x"}
}"#,
    );

    let entries = store.load().unwrap();

    assert_eq!(entries.len(), 4);
    assert!(entries.get("as_string").unwrap().enable_platform.is_empty());
    assert_eq!(entries.get("mixed").unwrap().enable_platform, vec!["codex"]);
    assert!(entries.get("scalar").unwrap().enable_platform.is_empty());
    let codex = filter_by_platform(&entries, CODEX_PLATFORM);
    assert_eq!(codex.into_iter().collect::<Vec<_>>(), vec!["mixed"]);
}

#[test]
fn delete_keeps_entries_with_unexpected_field_types_verbatim() {
    let temp = TempDir::new().unwrap();
    let store = write_cache(
        &temp,
        r#"{"a": {"enable_platform": ["codex"], "env": {"PORT": 8080}}, "b": {"enable_platform": []}}"#,
    );

    assert_eq!(store.delete_entry("b").unwrap(), DeleteEntryOutcome::Deleted);

    let written: Value =
        serde_json::from_str(&std::fs::read_to_string(store.path()).unwrap()).unwrap();
    assert_eq!(
        written,
        json!({"a": {"enable_platform": ["codex"], "env": {"PORT": 8080}}})
    );
}

#[test]
fn filter_by_platform_selects_enabled_entries() {
    let temp = TempDir::new().unwrap();
    let store = write_cache(
        &temp,
        r#"{
  "a": {"enable_platform": ["codex"]},
  "b": {"enable_platform": ["claude-code", "codex"]},
  "c": {"enable_platform": ["other"]},
  "d": {}
}"#,
    );
    let entries = store.load().unwrap();

    let codex = filter_by_platform(&entries, CODEX_PLATFORM);
    let claude = filter_by_platform(&entries, "claude-code");

    assert_eq!(codex.into_iter().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(claude.into_iter().collect::<Vec<_>>(), vec!["b"]);
}

#[test]
fn delete_entry_removes_only_that_key() {
    let temp = TempDir::new().unwrap();
    let store = write_cache(
        &temp,
        r#"{
  "zeta": {"enable_platform": ["codex"], "tips": "last"},
  "alpha": {"enable_platform": ["codex", "gemini"]},
  "mid": {"custom": {"nested": true}, "enable_platform": []}
}"#,
    );

    let outcome = store.delete_entry("alpha").unwrap();

    assert_eq!(outcome, DeleteEntryOutcome::Deleted);
    let content = std::fs::read_to_string(store.path()).unwrap();
    let reloaded: Value = serde_json::from_str(&content).unwrap();
    assert_eq!(
        reloaded,
        json!({
            "zeta": {"enable_platform": ["codex"], "tips": "last"},
            "mid": {"custom": {"nested": true}, "enable_platform": []}
        })
    );
    // File order is kept, not re-sorted.
    assert!(content.find("\"zeta\"").unwrap() < content.find("\"mid\"").unwrap());
    assert!(!store.contains("alpha").unwrap());
}

#[test]
fn delete_entry_writes_two_space_indent_and_literal_unicode() {
    let temp = TempDir::new().unwrap();
    let store = write_cache(
        &temp,
        r#"{"a": {"enable_platform": ["codex"]}, "b": {"tips": "文档检索"}}"#,
    );

    store.delete_entry("a").unwrap();

    let content = std::fs::read_to_string(store.path()).unwrap();
    assert_eq!(content, "{\n  \"b\": {\n    \"tips\": \"文档检索\"\n  }\n}");
}

#[test]
fn delete_entry_missing_key_leaves_file_untouched() {
    let temp = TempDir::new().unwrap();
    let original = r#"{"a":{"enable_platform":["codex"]}}"#;
    let store = write_cache(&temp, original);

    let outcome = store.delete_entry("nope").unwrap();

    assert_eq!(outcome, DeleteEntryOutcome::NotPresent);
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), original);
}

#[test]
fn delete_entry_on_missing_file_is_not_found() {
    let temp = TempDir::new().unwrap();
    let store = ConfigStore::new(temp.path().join("mcp.json"));

    let err = store.delete_entry("a").unwrap_err();

    assert!(err.is_not_found());
    assert!(!store.path().exists());
}
