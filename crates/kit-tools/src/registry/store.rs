//! Tool registry storage

use super::{ToolCategory, ToolRegistration};
use kit_meta::AiTool;
use std::collections::HashMap;

/// Central registry for tool descriptors.
///
/// Provides lookup by id, listing and priority-based ordering.
pub struct ToolRegistry {
    tools: HashMap<String, ToolRegistration>,
}

impl ToolRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with all built-in tools.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for reg in super::builtins::builtin_registrations() {
            registry.register(reg);
        }
        registry
    }

    /// Register a tool, replacing any registration with the same id.
    pub fn register(&mut self, reg: ToolRegistration) {
        if self.tools.contains_key(reg.id()) {
            tracing::debug!("Replacing registration for tool '{}'", reg.id());
        }
        self.tools.insert(reg.id().to_string(), reg);
    }

    /// Register custom tools loaded from descriptor files.
    pub fn register_custom(&mut self, tools: impl IntoIterator<Item = AiTool>) {
        for tool in tools {
            self.register(ToolRegistration::new(tool, ToolCategory::Custom).with_priority(100));
        }
    }

    /// Get a registration by id.
    pub fn get(&self, id: &str) -> Option<&ToolRegistration> {
        self.tools.get(id)
    }

    /// Get a tool descriptor by id.
    pub fn tool(&self, id: &str) -> Option<&AiTool> {
        self.get(id).map(|reg| &reg.tool)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.tools.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// List all registered tool ids (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<_> = self.tools.keys().map(|s| s.as_str()).collect();
        ids.sort();
        ids
    }

    /// Get all registrations sorted by priority, then id.
    pub fn by_priority(&self) -> Vec<&ToolRegistration> {
        let mut tools: Vec<_> = self.tools.values().collect();
        tools.sort_by(|a, b| a.priority.cmp(&b.priority).then_with(|| a.id().cmp(b.id())));
        tools
    }

    pub fn iter(&self) -> impl Iterator<Item = &ToolRegistration> {
        self.tools.values()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kit_meta::InstallStrategy;

    fn make_tool(id: &str) -> AiTool {
        AiTool {
            id: id.into(),
            name: id.to_uppercase(),
            path: format!(".{id}"),
            rules_file: "AGENTS.md".into(),
            rules_source: "AGENTS.md".into(),
            global_path: None,
            global_rules_file: None,
            strategy: InstallStrategy::Generic,
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = ToolRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
    }

    #[test]
    fn test_register_and_get() {
        let mut registry = ToolRegistry::new();
        registry.register(ToolRegistration::new(make_tool("test"), ToolCategory::Ide));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("test"));
        assert_eq!(registry.tool("test").map(|t| t.path.as_str()), Some(".test"));
        assert!(!registry.contains("unknown"));
    }

    #[test]
    fn test_list_sorted() {
        let mut registry = ToolRegistry::new();
        registry.register_custom(["zed", "aider", "claude"].map(make_tool));
        assert_eq!(registry.list(), vec!["aider", "claude", "zed"]);
    }

    #[test]
    fn test_custom_overrides_builtin() {
        let mut registry = ToolRegistry::with_builtins();
        let before = registry.len();
        registry.register_custom([make_tool("claude")]);

        assert_eq!(registry.len(), before);
        assert_eq!(registry.get("claude").map(|r| r.category), Some(ToolCategory::Custom));
    }

    #[test]
    fn test_by_priority() {
        let mut registry = ToolRegistry::new();
        registry.register(ToolRegistration::new(make_tool("low"), ToolCategory::Ide).with_priority(100));
        registry.register(ToolRegistration::new(make_tool("high"), ToolCategory::Ide).with_priority(10));
        registry.register(ToolRegistration::new(make_tool("mid"), ToolCategory::Ide).with_priority(50));

        let ordered: Vec<_> = registry.by_priority().iter().map(|r| r.id()).collect();
        assert_eq!(ordered, vec!["high", "mid", "low"]);
    }
}
