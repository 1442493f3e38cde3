//! Kit catalog
//!
//! A kits root is laid out as:
//!
//! ```text
//! <root>/
//!   kits/
//!     coder/        one directory per kit
//!   common/         shared assets overlaid on every install
//!   kits.toml       optional display names and availability
//!   tools/*.toml    optional custom tool descriptors
//! ```
//!
//! `kits.toml`:
//!
//! ```toml
//! [kits.coder]
//! name = "Coder Kit"
//!
//! [kits.writer]
//! available = false
//! ```

use crate::{Error, Result};
use kit_fs::{ConfigStore, NormalizedPath, io};
use kit_meta::{AiTool, Kit, ToolLoader};
use serde::Deserialize;
use std::collections::BTreeMap;

pub const KITS_DIR: &str = "kits";
pub const COMMON_DIR: &str = "common";
pub const CATALOG_FILE: &str = "kits.toml";

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    kits: BTreeMap<String, KitOverride>,
}

/// Per-kit entry in `kits.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct KitOverride {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
}

/// Kits discovered under a kits root.
#[derive(Debug, Clone)]
pub struct KitCatalog {
    root: NormalizedPath,
    kits: Vec<Kit>,
    common_dir: Option<NormalizedPath>,
}

impl KitCatalog {
    /// Scan `root` for kits.
    pub fn discover(root: &NormalizedPath) -> Result<Self> {
        let kits_dir = root.join(KITS_DIR);
        if !kits_dir.is_dir() {
            return Err(Error::CatalogNotFound {
                path: kits_dir.to_native(),
            });
        }

        let overrides = ConfigStore::new()
            .load_optional::<CatalogFile>(&root.join(CATALOG_FILE))?
            .unwrap_or_default()
            .kits;

        let mut kits = Vec::new();
        for entry in io::list_dir(&kits_dir)? {
            if !entry.is_dir || entry.name.starts_with('.') {
                continue;
            }
            let mut kit = Kit::new(&entry.name, display_name(&entry.name), entry.path.to_native());
            if let Some(over) = overrides.get(&entry.name) {
                if let Some(name) = &over.name {
                    kit.name = name.clone();
                }
                kit.available = over.available.unwrap_or(true);
            }
            kits.push(kit);
        }

        for id in overrides.keys() {
            if !kits.iter().any(|k| &k.id == id) {
                tracing::warn!("{} lists kit '{}' but {} has no such directory", CATALOG_FILE, id, kits_dir);
            }
        }

        let common = root.join(COMMON_DIR);
        let common_dir = common.is_dir().then_some(common);
        tracing::debug!("Discovered {} kit(s) under {}", kits.len(), root);

        Ok(Self {
            root: root.clone(),
            kits,
            common_dir,
        })
    }

    pub fn root(&self) -> &NormalizedPath {
        &self.root
    }

    /// All kits, sorted by id.
    pub fn kits(&self) -> &[Kit] {
        &self.kits
    }

    pub fn available(&self) -> impl Iterator<Item = &Kit> {
        self.kits.iter().filter(|k| k.available)
    }

    pub fn get(&self, id: &str) -> Option<&Kit> {
        self.kits.iter().find(|k| k.id == id)
    }

    pub fn common_dir(&self) -> Option<&NormalizedPath> {
        self.common_dir.as_ref()
    }

    /// Look up kits by id, preserving request order.
    ///
    /// Fails on the first unknown or unavailable id.
    pub fn resolve(&self, ids: &[String]) -> Result<Vec<Kit>> {
        ids.iter()
            .map(|id| match self.get(id) {
                None => Err(Error::KitNotFound { id: id.clone() }),
                Some(kit) if !kit.available => Err(Error::KitUnavailable { id: id.clone() }),
                Some(kit) => Ok(kit.clone()),
            })
            .collect()
    }

    /// Custom tool descriptors from `<root>/tools/`.
    pub fn custom_tools(&self) -> Result<Vec<AiTool>> {
        Ok(ToolLoader::new().load_tools(&self.root)?.into_values().collect())
    }
}

/// `web-dev` -> `Web Dev`
fn display_name(id: &str) -> String {
    id.split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
