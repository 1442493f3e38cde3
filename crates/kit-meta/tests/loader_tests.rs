use kit_content::{ScalarValue, TermMapping};
use kit_fs::NormalizedPath;
use kit_meta::{FieldRule, InstallStrategy, Scope, ToolLoader};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::TempDir;

fn write_tool(root: &TempDir, file: &str, content: &str) {
    let dir = root.path().join("tools");
    fs::create_dir_all(&dir).unwrap();
    fs::write(dir.join(file), content).unwrap();
}

#[test]
fn test_load_generic_tool() {
    let temp = TempDir::new().unwrap();
    write_tool(
        &temp,
        "zed.toml",
        r#"
id = "zed"
name = "Zed"
path = ".zed"
rules_file = ".rules"
rules_source = "AGENTS.md"
"#,
    );

    let tools = ToolLoader::new()
        .load_tools(&NormalizedPath::new(temp.path()))
        .unwrap();

    let zed = &tools["zed"];
    assert_eq!(zed.name, "Zed");
    assert_eq!(zed.strategy, InstallStrategy::Generic);
    assert_eq!(zed.folder(Scope::Global), ".zed");
}

#[test]
fn test_load_divergent_tool() {
    let temp = TempDir::new().unwrap();
    write_tool(
        &temp,
        "windsurf.toml",
        r#"
id = "windsurf"
name = "Windsurf"
path = ".windsurf"
rules_file = ".windsurf/rules/kit.md"
rules_source = "GEMINI.md"

[strategy]
kind = "schema_divergent"
workflow_folder = "commands"
agent_fields = [
    { key = "name" },
    { key = "model", default = "inherit" },
    { key = "readonly", default = false, fixed = true },
]
workflow_fields = [{ key = "description" }]
terminology = { from = "workflow", to = "command" }
"#,
    );

    let tools = ToolLoader::new()
        .load_tools(&NormalizedPath::new(temp.path()))
        .unwrap();

    let InstallStrategy::SchemaDivergent(schema) = &tools["windsurf"].strategy else {
        panic!("expected a schema-divergent strategy");
    };
    assert_eq!(
        schema.agent_fields,
        vec![
            FieldRule::keep("name"),
            FieldRule::keep_or("model", "inherit"),
            FieldRule::fixed("readonly", false),
        ]
    );
    assert_eq!(schema.terminology, Some(TermMapping::new("workflow", "command")));
    assert_eq!(
        schema.agent_fields[2].default,
        Some(ScalarValue::Bool(false))
    );
}

#[test]
fn test_invalid_files_are_skipped() {
    let temp = TempDir::new().unwrap();
    write_tool(&temp, "broken.toml", "id = [unclosed");
    write_tool(
        &temp,
        "escape.toml",
        r#"
id = "escape"
name = "Escape"
path = "../outside"
rules_file = "RULES.md"
rules_source = "AGENTS.md"
"#,
    );
    write_tool(&temp, "notes.txt", "not a descriptor");
    write_tool(
        &temp,
        "ok.toml",
        r#"
id = "ok"
name = "Ok"
path = ".ok"
rules_file = "OK.md"
rules_source = "AGENTS.md"
"#,
    );

    let tools = ToolLoader::new()
        .load_tools(&NormalizedPath::new(temp.path()))
        .unwrap();

    assert_eq!(tools.keys().collect::<Vec<_>>(), vec!["ok"]);
}
