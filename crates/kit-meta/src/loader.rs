//! Loader for custom tool descriptors
//!
//! Tools beyond the built-in set are declared one per file:
//!
//! ```text
//! <kits root>/
//!   tools/
//!     windsurf.toml
//!     zed.toml
//! ```

use crate::AiTool;
use crate::Result;
use kit_fs::{ConfigStore, NormalizedPath, io};
use std::collections::BTreeMap;

/// Directory under a kits root holding custom tool descriptors.
pub const TOOLS_DIR: &str = "tools";

/// Loads tool descriptors from a directory of TOML files.
pub struct ToolLoader {
    store: ConfigStore,
}

impl ToolLoader {
    pub fn new() -> Self {
        Self {
            store: ConfigStore::new(),
        }
    }

    /// Load every tool from `<root>/tools/`, keyed by id.
    pub fn load_tools(&self, root: &NormalizedPath) -> Result<BTreeMap<String, AiTool>> {
        self.load_dir(&root.join(TOOLS_DIR))
    }

    /// Load every `*.toml` descriptor in `dir`.
    ///
    /// Files that fail to parse or validate are logged and skipped. A
    /// missing directory yields an empty map.
    pub fn load_dir(&self, dir: &NormalizedPath) -> Result<BTreeMap<String, AiTool>> {
        let mut tools = BTreeMap::new();

        for entry in io::list_dir(dir)? {
            if entry.is_dir || entry.path.extension() != Some("toml") {
                continue;
            }
            let tool = match self.store.load::<AiTool>(&entry.path) {
                Ok(tool) => tool,
                Err(e) => {
                    tracing::warn!("Failed to load {}: {}", entry.path, e);
                    continue;
                }
            };
            if let Err(e) = tool.validate() {
                tracing::warn!("Skipping {}: {}", entry.path, e);
                continue;
            }
            tracing::debug!("Loaded tool '{}' from {}", tool.id, entry.path);
            tools.insert(tool.id.clone(), tool);
        }

        Ok(tools)
    }
}

impl Default for ToolLoader {
    fn default() -> Self {
        Self::new()
    }
}
