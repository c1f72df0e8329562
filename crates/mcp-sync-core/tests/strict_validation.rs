use mcp_sync_core::codex::strict::{
    SkipReason, StrictTomlParser, StrictValidation, TomlCrateParser, validate,
};

#[derive(Debug)]
struct RejectingParser;

impl StrictTomlParser for RejectingParser {
    fn parse(&self, _text: &str) -> anyhow::Result<toml::Table> {
        anyhow::bail!("parser rejected input")
    }
}

#[test]
fn counts_direct_children_of_mcp_servers() {
    let text = r#"
[mcp_servers.context7]
command = "npx"

[mcp_servers.context7.env]
API_KEY = "secret"

[mcp_servers.figma]
url = "https://mcp.figma.com/mcp"
"#;

    let result = validate(Some(&TomlCrateParser), Some(text));

    assert_eq!(result, StrictValidation::Valid { server_count: 2 });
    assert!(result.is_valid());
}

#[test]
fn document_without_servers_counts_zero() {
    let result = validate(Some(&TomlCrateParser), Some("model = \"o3\"\n"));

    assert_eq!(result, StrictValidation::Valid { server_count: 0 });
}

#[test]
fn inline_server_tables_are_counted() {
    let text = "mcp_servers = { a = { command = \"x\" }, b = { url = \"u\" } }\n";

    let result = validate(Some(&TomlCrateParser), Some(text));

    assert_eq!(result, StrictValidation::Valid { server_count: 2 });
}

#[test]
fn duplicate_tables_are_invalid() {
    let text = "[mcp_servers.a]\nx = 1\n[mcp_servers.a]\ny = 2\n";

    let result = validate(Some(&TomlCrateParser), Some(text));

    assert!(matches!(result, StrictValidation::Invalid { .. }));
}

#[test]
fn parser_errors_carry_their_message() {
    let result = validate(Some(&RejectingParser), Some("anything"));

    assert_eq!(
        result,
        StrictValidation::Invalid {
            message: "parser rejected input".to_string()
        }
    );
}

#[test]
fn missing_parser_skips() {
    let result = validate(None, Some("[mcp_servers.a]\n"));

    assert_eq!(
        result,
        StrictValidation::Skipped(SkipReason::ParserUnavailable)
    );
}

#[test]
fn missing_file_skips() {
    let result = validate(Some(&TomlCrateParser), None);

    assert_eq!(result, StrictValidation::Skipped(SkipReason::FileMissing));
}
