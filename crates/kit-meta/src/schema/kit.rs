//! Kit descriptor

use kit_fs::NormalizedPath;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Subtree of a kit holding agent personas.
pub const AGENTS_DIR: &str = "agents";
/// Subtree of a kit holding skills (`skills/<name>/SKILL.md`).
pub const SKILLS_DIR: &str = "skills";
/// Subtree of a kit holding rules variants (`rules/<TOOL>.md`).
pub const RULES_DIR: &str = "rules";
/// File naming a skill inside its directory.
pub const SKILL_FILE: &str = "SKILL.md";

/// A named bundle of agents, skills and workflows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Kit {
    pub id: String,
    pub name: String,
    /// Root of the kit's resource tree
    pub source_path: PathBuf,
    #[serde(default = "default_available")]
    pub available: bool,
}

fn default_available() -> bool {
    true
}

impl Kit {
    pub fn new(id: impl Into<String>, name: impl Into<String>, source_path: impl Into<PathBuf>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            source_path: source_path.into(),
            available: true,
        }
    }

    pub fn source(&self) -> NormalizedPath {
        NormalizedPath::new(&self.source_path)
    }

    pub fn agents_dir(&self) -> NormalizedPath {
        self.source().join(AGENTS_DIR)
    }

    pub fn skills_dir(&self) -> NormalizedPath {
        self.source().join(SKILLS_DIR)
    }

    pub fn workflows_dir(&self) -> NormalizedPath {
        self.source().join(super::tool::SOURCE_WORKFLOW_FOLDER)
    }

    pub fn rules_dir(&self) -> NormalizedPath {
        self.source().join(RULES_DIR)
    }
}
