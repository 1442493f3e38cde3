//! Core types for the tool registry

use kit_meta::{AiTool, InstallStrategy};
use serde::{Deserialize, Serialize};

/// Tool category for listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolCategory {
    /// Editor-based assistants (Cursor, Antigravity)
    Ide,
    /// Terminal agents (Claude Code, Codex, Gemini CLI)
    CliAgent,
    /// Tools declared in `tools/*.toml`
    Custom,
}

/// A tool descriptor plus listing metadata.
#[derive(Debug, Clone)]
pub struct ToolRegistration {
    pub tool: AiTool,
    pub category: ToolCategory,
    /// Priority for ordering (lower = higher priority)
    pub priority: u8,
}

impl ToolRegistration {
    /// Create a new registration with default priority.
    pub fn new(tool: AiTool, category: ToolCategory) -> Self {
        Self {
            tool,
            category,
            priority: 50,
        }
    }

    /// Set the priority (builder pattern).
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority;
        self
    }

    pub fn id(&self) -> &str {
        &self.tool.id
    }

    /// Whether installs for this tool reshape agent/workflow metadata.
    pub fn is_schema_divergent(&self) -> bool {
        matches!(self.tool.strategy, InstallStrategy::SchemaDivergent(_))
    }
}
