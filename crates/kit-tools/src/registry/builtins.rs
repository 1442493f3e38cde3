//! Built-in tool registrations
//!
//! Every built-in tool is a descriptor; none of them needs code of its own.
//! Cursor is the only tool whose agent schema and folder layout differ from
//! the kit sources.

use super::{ToolCategory, ToolRegistration};
use kit_content::TermMapping;
use kit_meta::{AiTool, DivergentSchema, FieldRule, InstallStrategy};

/// Number of built-in tools.
pub const BUILTIN_COUNT: usize = 5;

/// Returns all built-in tool registrations.
pub fn builtin_registrations() -> Vec<ToolRegistration> {
    vec![
        ToolRegistration::new(antigravity(), ToolCategory::Ide).with_priority(10),
        ToolRegistration::new(cursor(), ToolCategory::Ide).with_priority(20),
        ToolRegistration::new(claude(), ToolCategory::CliAgent).with_priority(30),
        ToolRegistration::new(gemini(), ToolCategory::CliAgent).with_priority(40),
        ToolRegistration::new(codex(), ToolCategory::CliAgent).with_priority(50),
    ]
}

fn generic(
    id: &str,
    name: &str,
    path: &str,
    rules_file: &str,
    rules_source: &str,
    global_rules_file: Option<&str>,
) -> AiTool {
    AiTool {
        id: id.into(),
        name: name.into(),
        path: path.into(),
        rules_file: rules_file.into(),
        rules_source: rules_source.into(),
        global_path: None,
        global_rules_file: global_rules_file.map(Into::into),
        strategy: InstallStrategy::Generic,
    }
}

/// Antigravity reads the canonical `.agent/` layout as-is.
fn antigravity() -> AiTool {
    generic(
        "antigravity",
        "Antigravity",
        ".agent",
        ".agent/rules/GEMINI.md",
        "GEMINI.md",
        None,
    )
}

fn claude() -> AiTool {
    generic(
        "claude",
        "Claude Code",
        ".claude",
        "CLAUDE.md",
        "CLAUDE.md",
        Some(".claude/CLAUDE.md"),
    )
}

fn gemini() -> AiTool {
    generic(
        "gemini",
        "Gemini CLI",
        ".gemini",
        "GEMINI.md",
        "GEMINI.md",
        Some(".gemini/GEMINI.md"),
    )
}

fn codex() -> AiTool {
    generic(
        "codex",
        "Codex CLI",
        ".codex",
        "AGENTS.md",
        "AGENTS.md",
        Some(".codex/AGENTS.md"),
    )
}

/// Cursor subagents carry `model`, `readonly` and `is_background` and
/// drop the kit's `skills`/`tools`/`tier` fields. Workflows become
/// commands.
fn cursor() -> AiTool {
    AiTool {
        id: "cursor".into(),
        name: "Cursor".into(),
        path: ".cursor".into(),
        rules_file: ".cursor/rules/agent-kit.mdc".into(),
        rules_source: "CURSOR.md".into(),
        global_path: None,
        global_rules_file: None,
        strategy: InstallStrategy::SchemaDivergent(DivergentSchema {
            agent_fields: vec![
                FieldRule::keep("name"),
                FieldRule::keep("description"),
                FieldRule::keep_or("model", "inherit"),
                FieldRule::fixed("readonly", false),
                FieldRule::fixed("is_background", false),
            ],
            workflow_fields: vec![FieldRule::keep("description")],
            workflow_folder: "commands".into(),
            terminology: Some(TermMapping::new("workflow", "command")),
        }),
    }
}
