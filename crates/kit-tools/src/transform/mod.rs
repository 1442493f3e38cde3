//! Content transformers
//!
//! A transformer maps one resource file from the kit schema to a target
//! tool's schema:
//!
//! 1. parse the frontmatter
//! 2. build a new map from the target's field rules (unlisted keys are dropped)
//! 3. rewrite the body
//! 4. serialize the new map in front of the rewritten body

mod agent;
mod workflow;

pub use agent::{AgentTransformer, REQUIRED_SKILLS_HEADING, SKILL_PLACEHOLDER, parse_skill_list};
pub use workflow::WorkflowTransformer;

use kit_content::{FolderRename, Frontmatter, PathToken};
use kit_fs::NormalizedPath;
use kit_meta::FieldRule;
use std::collections::HashMap;

/// Per-file transformation parameters.
#[derive(Debug, Clone)]
pub struct TransformContext {
    pub path_token: PathToken,
    pub folder_rename: Option<FolderRename>,
    pub source_path: NormalizedPath,
    pub target_path: NormalizedPath,
    /// Skill name to description, used by the agent transformer
    pub skill_descriptions: Option<HashMap<String, String>>,
}

impl TransformContext {
    pub fn new(path_token: PathToken, source_path: NormalizedPath, target_path: NormalizedPath) -> Self {
        Self {
            path_token,
            folder_rename: None,
            source_path,
            target_path,
            skill_descriptions: None,
        }
    }

    pub fn with_folder_rename(mut self, rename: Option<FolderRename>) -> Self {
        self.folder_rename = rename;
        self
    }

    pub fn with_skill_descriptions(mut self, descriptions: HashMap<String, String>) -> Self {
        self.skill_descriptions = Some(descriptions);
        self
    }

    /// Apply the path token, then the folder rename if any.
    pub fn rewrite_paths(&self, text: &str) -> String {
        let text = self.path_token.apply(text);
        match &self.folder_rename {
            Some(rename) => rename.apply(&text),
            None => text,
        }
    }
}

/// Maps a raw resource file to the target tool's dialect.
pub trait ContentTransformer {
    /// Kind of resource handled, used in logs
    fn kind(&self) -> &'static str;

    fn transform(&self, raw: &str, ctx: &TransformContext) -> String;
}

/// Build a new map holding only the fields named by `rules`, in rule order.
pub fn project_fields(rules: &[FieldRule], source: &Frontmatter) -> Frontmatter {
    let mut out = Frontmatter::new();
    for rule in rules {
        let value = if rule.fixed {
            rule.default.clone()
        } else {
            source.get(&rule.key).cloned().or_else(|| rule.default.clone())
        };
        if let Some(value) = value {
            out.insert(rule.key.clone(), value);
        }
    }
    out
}

/// Warn about identity fields the output is missing.
fn warn_missing(kind: &str, rules: &[FieldRule], out: &Frontmatter, ctx: &TransformContext) {
    for key in ["name", "description"] {
        if rules.iter().any(|r| r.key == key) && !out.contains_key(key) {
            tracing::warn!(
                "{} {} has no '{}' field; emitting it without one",
                kind,
                ctx.source_path,
                key
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kit_content::ScalarValue;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_project_fields_allow_list() {
        let source: Frontmatter = [
            ("tools", ScalarValue::from("Read, Write")),
            ("name", ScalarValue::from("planner")),
            ("model", ScalarValue::from("opus")),
            ("readonly", ScalarValue::from(true)),
        ]
        .into_iter()
        .collect();
        let rules = vec![
            FieldRule::keep("name"),
            FieldRule::keep("description"),
            FieldRule::keep_or("model", "inherit"),
            FieldRule::fixed("readonly", false),
        ];

        let out = project_fields(&rules, &source);

        assert_eq!(out.keys().collect::<Vec<_>>(), vec!["name", "model", "readonly"]);
        assert_eq!(out.get("model"), Some(&ScalarValue::from("opus")));
        assert_eq!(out.get("readonly"), Some(&ScalarValue::Bool(false)));
    }

    #[test]
    fn test_rewrite_paths_order() {
        let ctx = TransformContext::new(
            PathToken::canonical(".cursor/"),
            NormalizedPath::new("a.md"),
            NormalizedPath::new("b.md"),
        )
        .with_folder_rename(Some(FolderRename::new("workflows", "commands")));
        assert_eq!(
            ctx.rewrite_paths("see .agent/workflows/deploy.md"),
            "see .cursor/commands/deploy.md"
        );
    }
}
