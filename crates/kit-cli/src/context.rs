//! Kits root context
//!
//! Every command runs against a kits root given by `--root` or `KITS_ROOT`.

use kit_core::KitCatalog;
use kit_fs::NormalizedPath;
use kit_tools::ToolRegistry;
use std::path::Path;

use crate::error::Result;

/// Resolved kits root shared by all commands.
#[derive(Debug, Clone)]
pub struct CliContext {
    root: NormalizedPath,
}

impl CliContext {
    pub fn new(root: &Path) -> Self {
        let root = if root.is_relative() {
            std::env::current_dir()
                .map(|cwd| cwd.join(root))
                .unwrap_or_else(|_| root.to_path_buf())
        } else {
            root.to_path_buf()
        };
        Self {
            root: NormalizedPath::new(root),
        }
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// Discover the kits under the root.
    pub fn catalog(&self) -> Result<KitCatalog> {
        Ok(KitCatalog::discover(&self.root)?)
    }

    /// Built-in tools plus any custom descriptors from `<root>/tools/`.
    pub fn registry(&self) -> Result<ToolRegistry> {
        let mut registry = ToolRegistry::with_builtins();
        let custom = kit_meta::ToolLoader::new().load_tools(&self.root)?;
        if !custom.is_empty() {
            tracing::debug!("Loaded {} custom tool(s) from {}", custom.len(), self.root);
        }
        registry.register_custom(custom.into_values());
        Ok(registry)
    }
}
