//! [`TestCatalog`] fixture.

use crate::KitBuilder;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a kits root (`catalog/`), a workspace
/// (`workspace/`) and a stand-in home directory (`home/`).
pub struct TestCatalog {
    temp_dir: TempDir,
}

impl Default for TestCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCatalog {
    pub fn new() -> Self {
        let catalog = Self {
            temp_dir: TempDir::new().unwrap(),
        };
        for dir in [catalog.kits_root(), catalog.workspace(), catalog.home()] {
            fs::create_dir_all(dir).unwrap();
        }
        catalog
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Root containing `kits/`, `common/`, `kits.toml` and `tools/`.
    pub fn kits_root(&self) -> PathBuf {
        self.root().join("catalog")
    }

    pub fn workspace(&self) -> PathBuf {
        self.root().join("workspace")
    }

    pub fn home(&self) -> PathBuf {
        self.root().join("home")
    }

    /// Builder for `catalog/kits/<id>/`.
    pub fn kit(&self, id: &str) -> KitBuilder {
        KitBuilder::new(self.kits_root().join("kits").join(id))
    }

    /// Builder for `catalog/common/`.
    pub fn common(&self) -> KitBuilder {
        KitBuilder::new(self.kits_root().join("common"))
    }

    /// Write a file relative to the kits root.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.kits_root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, content).unwrap();
    }

    /// Read a file relative to the workspace.
    pub fn read_workspace(&self, relative: &str) -> String {
        fs::read_to_string(self.workspace().join(relative))
            .unwrap_or_else(|e| panic!("failed to read workspace/{relative}: {e}"))
    }

    pub fn assert_workspace_file(&self, relative: &str) {
        assert!(
            self.workspace().join(relative).is_file(),
            "expected workspace/{relative} to exist"
        );
    }

    pub fn assert_no_workspace_path(&self, relative: &str) {
        assert!(
            !self.workspace().join(relative).exists(),
            "expected workspace/{relative} to be absent"
        );
    }
}
