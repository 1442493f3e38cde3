//! [`KitBuilder`] for kit source trees.

use std::fs;
use std::path::{Path, PathBuf};

/// Writes resources into a kit (or `common/`) directory.
///
/// ```rust,no_run
/// use kit_test_utils::TestCatalog;
///
/// let catalog = TestCatalog::new();
/// catalog
///     .kit("coder")
///     .agent("planner", "Plans work", &["clean-code"], "# Planner\n")
///     .skill("clean-code", "Readable code");
/// ```
pub struct KitBuilder {
    root: PathBuf,
}

impl KitBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        let root = root.into();
        fs::create_dir_all(&root).unwrap();
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Write an arbitrary file relative to the kit root.
    pub fn file(&self, relative: &str, content: &str) -> &Self {
        let path = self.root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
        self
    }

    /// Write `agents/<name>.md`. An empty `skills` slice omits the field.
    pub fn agent(&self, name: &str, description: &str, skills: &[&str], body: &str) -> &Self {
        let mut header = format!("---\nname: {name}\ndescription: {description}\ntools: Read, Write\n");
        if !skills.is_empty() {
            header.push_str(&format!("skills: {}\n", skills.join(", ")));
        }
        header.push_str("tier: 2\n---\n");
        self.file(&format!("agents/{name}.md"), &format!("{header}{body}"))
    }

    /// Write `skills/<name>/SKILL.md`.
    pub fn skill(&self, name: &str, description: &str) -> &Self {
        self.file(
            &format!("skills/{name}/SKILL.md"),
            &format!("---\nname: {name}\ndescription: {description}\n---\n# {name}\n\nSee .agent/skills/{name}/.\n"),
        )
    }

    /// Write a script under `skills/<name>/scripts/`.
    pub fn skill_script(&self, name: &str, script: &str) -> &Self {
        self.file(&format!("skills/{name}/scripts/{script}"), "print('ok')\n")
    }

    /// Write `workflows/<name>.md`.
    pub fn workflow(&self, name: &str, description: &str, body: &str) -> &Self {
        self.file(
            &format!("workflows/{name}.md"),
            &format!("---\ndescription: {description}\n---\n{body}"),
        )
    }

    /// Write `rules/<variant>`.
    pub fn rules(&self, variant: &str, content: &str) -> &Self {
        self.file(&format!("rules/{variant}"), content)
    }

    /// Populate a complete, valid kit.
    ///
    /// - agents: `frontend-specialist` (skills `clean-code`, `react-patterns`)
    ///   and `planner` (skill `plan-writing`)
    /// - skills: `clean-code`, `react-patterns` (with a script), `plan-writing`
    /// - workflows: `plan`, `deploy`
    /// - rules for every built-in tool, plus `ARCHITECTURE.md`
    pub fn standard(&self) -> &Self {
        self.agent(
            "frontend-specialist",
            "Builds UIs",
            &["clean-code", "react-patterns"],
            "# Frontend Specialist\n\nShort blurb.\n\n## Approach\n\nRead .agent/skills/react-patterns/SKILL.md first.\n",
        )
        .agent(
            "planner",
            "Breaks work into tasks",
            &["plan-writing"],
            "# Planner\n\nPlans before coding. Uses the /plan workflow.\n",
        )
        .skill("clean-code", "Readable, maintainable code")
        .skill("react-patterns", "Component and hook patterns")
        .skill_script("react-patterns", "check.py")
        .skill("plan-writing", "Structured task plans")
        .workflow(
            "plan",
            "Create an implementation plan",
            "Route to .agent/agents/planner.md via the workflow system.\n",
        )
        .workflow(
            "deploy",
            "Ship to production",
            "Run the checks in .agent/workflows/ before deploying.\n",
        )
        .rules(
            "GEMINI.md",
            "---\ntrigger: always_on\n---\n# Rules\n\nAgents live in .agent/agents/.\n",
        )
        .rules("CLAUDE.md", "# Rules\n\nAgents live in .agent/agents/.\n")
        .rules("AGENTS.md", "# Rules\n\nAgents live in .agent/agents/.\n")
        .rules(
            "CURSOR.md",
            "---\ndescription: Kit rules\nalwaysApply: true\n---\n# Rules\n\nAgents live in .agent/agents/, commands in .agent/workflows/.\n",
        )
        .file(
            "ARCHITECTURE.md",
            "# Architecture\n\n## Overview\n\n## Agents\n\n## Skills\n\n## Statistics\n",
        )
    }
}
