//! Tool descriptor schema
//!
//! Built-in tools are constructed in code; custom tools can be declared in
//! TOML:
//!
//! ```toml
//! id = "windsurf"
//! name = "Windsurf"
//! path = ".windsurf"
//! rules_file = ".windsurf/rules/kit.md"
//! rules_source = "GEMINI.md"
//!
//! [strategy]
//! kind = "schema_divergent"
//! workflow_folder = "commands"
//! agent_fields = [
//!     { key = "name" },
//!     { key = "description" },
//!     { key = "model", default = "inherit" },
//! ]
//! workflow_fields = [{ key = "description" }]
//! terminology = { from = "workflow", to = "command" }
//! ```

use super::Scope;
use crate::{Error, Result};
use kit_content::{FolderRename, PathToken, ScalarValue, TermMapping};
use kit_fs::NormalizedPath;
use serde::{Deserialize, Serialize};

/// Folder name used for workflows in kit sources.
pub const SOURCE_WORKFLOW_FOLDER: &str = "workflows";

/// Target AI assistant descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiTool {
    /// Machine identifier (e.g. "cursor")
    pub id: String,
    /// Display name (e.g. "Cursor")
    pub name: String,
    /// Install folder relative to the scope base (e.g. ".cursor")
    pub path: String,
    /// Aggregated rules document, relative to the workspace
    pub rules_file: String,
    /// Rules variant inside `<kit>/rules/` (e.g. "CURSOR.md")
    pub rules_source: String,
    /// Install folder relative to the home directory, defaults to `path`
    #[serde(default)]
    pub global_path: Option<String>,
    /// Rules document relative to the home directory, defaults to `rules_file`
    #[serde(default)]
    pub global_rules_file: Option<String>,
    #[serde(default)]
    pub strategy: InstallStrategy,
}

impl AiTool {
    /// Folder of the install root relative to the scope base.
    pub fn folder(&self, scope: Scope) -> &str {
        match scope {
            Scope::Global => self.global_path.as_deref().unwrap_or(&self.path),
            Scope::Workspace => &self.path,
        }
    }

    /// Directory the kit tree is materialized into.
    pub fn install_root(&self, scope: Scope, base: &NormalizedPath) -> NormalizedPath {
        base.join(self.folder(scope))
    }

    /// Location of the aggregated rules document.
    pub fn rules_path(&self, scope: Scope, base: &NormalizedPath) -> NormalizedPath {
        let relative = match scope {
            Scope::Global => self.global_rules_file.as_deref().unwrap_or(&self.rules_file),
            Scope::Workspace => &self.rules_file,
        };
        base.join(relative)
    }

    /// Token rewriting canonical `.agent/` references for this tool.
    ///
    /// Workspace installs keep references relative (`.cursor/`); global
    /// installs point into the home directory (`~/.cursor/`).
    pub fn path_token(&self, scope: Scope) -> PathToken {
        let folder = self.folder(scope).trim_end_matches('/');
        match scope {
            Scope::Workspace => PathToken::canonical(format!("{folder}/")),
            Scope::Global => PathToken::canonical(format!("~/{folder}/")),
        }
    }

    /// Folder the tool reads workflow/command files from.
    pub fn workflow_folder(&self) -> &str {
        match &self.strategy {
            InstallStrategy::Generic => SOURCE_WORKFLOW_FOLDER,
            InstallStrategy::SchemaDivergent(schema) => &schema.workflow_folder,
        }
    }

    /// Rename applied to workflow folder references, if the tool renames it.
    pub fn folder_rename(&self) -> Option<FolderRename> {
        let target = self.workflow_folder();
        (target != SOURCE_WORKFLOW_FOLDER).then(|| FolderRename::new(SOURCE_WORKFLOW_FOLDER, target))
    }

    /// Check that paths are relative and stay inside their base.
    pub fn validate(&self) -> Result<()> {
        let invalid = |message: String| Error::InvalidTool {
            id: self.id.clone(),
            message,
        };

        if self.id.trim().is_empty() {
            return Err(invalid("id must not be empty".into()));
        }
        if self.rules_source.contains(['/', '\\']) || self.rules_source.is_empty() {
            return Err(invalid(format!(
                "rules_source must be a plain file name, got '{}'",
                self.rules_source
            )));
        }

        let mut paths = vec![("path", self.path.as_str()), ("rules_file", self.rules_file.as_str())];
        if let Some(global) = &self.global_path {
            paths.push(("global_path", global.as_str()));
        }
        if let Some(global) = &self.global_rules_file {
            paths.push(("global_rules_file", global.as_str()));
        }
        for (field, value) in paths {
            check_relative(value).map_err(|reason| invalid(format!("{field} {reason}")))?;
        }

        if let InstallStrategy::SchemaDivergent(schema) = &self.strategy {
            check_relative(&schema.workflow_folder)
                .map_err(|reason| invalid(format!("workflow_folder {reason}")))?;
        }
        Ok(())
    }
}

fn check_relative(value: &str) -> std::result::Result<(), String> {
    let normalized = value.replace('\\', "/");
    if normalized.trim().is_empty() {
        return Err("must not be empty".into());
    }
    if normalized.starts_with('/') || normalized.chars().nth(1) == Some(':') {
        return Err(format!("must be relative, got '{value}'"));
    }
    if normalized.split('/').any(|segment| segment == "..") {
        return Err(format!("must not contain '..', got '{value}'"));
    }
    Ok(())
}

/// How a kit is laid out for a tool.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InstallStrategy {
    /// Copy the kit tree verbatim (with path substitution)
    #[default]
    Generic,
    /// Reshape agent/workflow metadata and rename the workflow folder
    SchemaDivergent(DivergentSchema),
}

/// Target schema for tools whose metadata differs from the kit sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivergentSchema {
    /// Frontmatter fields kept on agent files, in output order
    pub agent_fields: Vec<FieldRule>,
    /// Frontmatter fields kept on workflow files, in output order
    pub workflow_fields: Vec<FieldRule>,
    /// Folder that replaces `workflows/` in the target
    pub workflow_folder: String,
    /// Terminology applied to workflow bodies
    #[serde(default)]
    pub terminology: Option<TermMapping>,
}

/// One allowed frontmatter field in a target schema.
///
/// Fields without a rule are dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldRule {
    pub key: String,
    /// Value used when the source lacks the field
    #[serde(default)]
    pub default: Option<ScalarValue>,
    /// Always emit `default`, ignoring the source value
    #[serde(default)]
    pub fixed: bool,
}

impl FieldRule {
    /// Copy the source value when present.
    pub fn keep(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            default: None,
            fixed: false,
        }
    }

    /// Copy the source value, falling back to `default`.
    pub fn keep_or(key: impl Into<String>, default: impl Into<ScalarValue>) -> Self {
        Self {
            key: key.into(),
            default: Some(default.into()),
            fixed: false,
        }
    }

    /// Always emit `value`.
    pub fn fixed(key: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        Self {
            key: key.into(),
            default: Some(value.into()),
            fixed: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn tool(strategy: InstallStrategy) -> AiTool {
        AiTool {
            id: "test".into(),
            name: "Test".into(),
            path: ".test".into(),
            rules_file: "TEST.md".into(),
            rules_source: "TEST.md".into(),
            global_path: None,
            global_rules_file: Some(".test/TEST.md".into()),
            strategy,
        }
    }

    #[test]
    fn test_generic_has_no_folder_rename() {
        let tool = tool(InstallStrategy::Generic);
        assert_eq!(tool.workflow_folder(), "workflows");
        assert!(tool.folder_rename().is_none());
    }

    #[test]
    fn test_divergent_folder_rename() {
        let tool = tool(InstallStrategy::SchemaDivergent(DivergentSchema {
            agent_fields: vec![],
            workflow_fields: vec![],
            workflow_folder: "commands".into(),
            terminology: None,
        }));
        assert_eq!(tool.folder_rename(), Some(FolderRename::new("workflows", "commands")));
    }

    #[test]
    fn test_rules_path_per_scope() {
        let tool = tool(InstallStrategy::Generic);
        let base = NormalizedPath::new("/home/dev");
        assert_eq!(tool.rules_path(Scope::Workspace, &base).as_str(), "/home/dev/TEST.md");
        assert_eq!(tool.rules_path(Scope::Global, &base).as_str(), "/home/dev/.test/TEST.md");
    }

    #[test]
    fn test_path_token_per_scope() {
        let tool = tool(InstallStrategy::Generic);
        assert_eq!(tool.path_token(Scope::Workspace).to, ".test/");
        assert_eq!(tool.path_token(Scope::Global).to, "~/.test/");
        assert_eq!(tool.path_token(Scope::Global).from, ".agent/");
    }

    #[rstest]
    #[case::parent_dir("path", "../outside")]
    #[case::absolute("rules_file", "/etc/rules.md")]
    #[case::drive_letter("path", "C:/tools")]
    #[case::nested_source("rules_source", "rules/X.md")]
    #[case::empty_source("rules_source", "")]
    #[case::empty_path("path", "  ")]
    fn test_validate_rejects(#[case] field: &str, #[case] value: &str) {
        let mut bad = tool(InstallStrategy::Generic);
        match field {
            "path" => bad.path = value.into(),
            "rules_file" => bad.rules_file = value.into(),
            "rules_source" => bad.rules_source = value.into(),
            other => panic!("unexpected field {other}"),
        }
        assert!(bad.validate().is_err(), "{field} = {value:?} should be rejected");
    }

    #[test]
    fn test_validate_accepts_relative_paths() {
        assert!(tool(InstallStrategy::Generic).validate().is_ok());
    }
}
