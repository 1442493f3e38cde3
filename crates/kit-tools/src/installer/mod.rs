//! Installer strategies
//!
//! One [`KitInstaller`] per strategy variant. The tool descriptor picks the
//! variant; see [`installer_for`].

mod divergent;
mod generic;

pub use divergent::SchemaDivergentInstaller;
pub use generic::GenericInstaller;

use crate::{Error, Result};
use kit_content::PathToken;
use kit_fs::{NormalizedPath, io};
use kit_meta::schema::{AGENTS_DIR, SKILLS_DIR};
use kit_meta::{AiTool, InstallStrategy, Kit, Scope};
use serde::{Deserialize, Serialize};

/// Resolved destination of an install run, shared by every kit in it.
#[derive(Debug, Clone)]
pub struct InstallContext {
    pub scope: Scope,
    /// Directory the kit trees are materialized into (`<base>/<tool path>`)
    pub target_root: NormalizedPath,
    /// Where the aggregated rules document is written
    pub rules_path: NormalizedPath,
    pub path_token: PathToken,
    /// Shared assets overlaid after each kit
    pub common_dir: Option<NormalizedPath>,
}

impl InstallContext {
    /// Resolve the destination of `tool` under `base` for `scope`.
    pub fn new(tool: &AiTool, scope: Scope, base: &NormalizedPath) -> Self {
        Self {
            scope,
            target_root: tool.install_root(scope, base),
            rules_path: tool.rules_path(scope, base),
            path_token: tool.path_token(scope),
            common_dir: None,
        }
    }

    pub fn with_common_dir(mut self, dir: Option<NormalizedPath>) -> Self {
        self.common_dir = dir;
        self
    }
}

/// Counts of installed resources for one kit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstallResult {
    pub kit: String,
    pub agents: usize,
    pub skills: usize,
    pub workflows: usize,
}

/// Installs one kit into a tool's layout.
pub trait KitInstaller {
    fn tool(&self) -> &AiTool;

    /// Install `kit`, stopping at the first error.
    ///
    /// Nothing written before a failure is rolled back.
    fn install(&self, kit: &Kit, ctx: &InstallContext) -> Result<InstallResult>;
}

/// Select the installer for the tool's strategy.
pub fn installer_for(tool: &AiTool) -> Box<dyn KitInstaller> {
    match &tool.strategy {
        InstallStrategy::Generic => Box::new(GenericInstaller::new(tool.clone())),
        InstallStrategy::SchemaDivergent(schema) => {
            Box::new(SchemaDivergentInstaller::new(tool.clone(), schema.clone()))
        }
    }
}

/// Check the kit source and create the install root.
fn prepare(kit: &Kit, ctx: &InstallContext) -> Result<NormalizedPath> {
    let source = kit.source();
    if !source.is_dir() {
        return Err(Error::KitSourceMissing {
            kit: kit.id.clone(),
            path: source.to_native(),
        });
    }
    io::ensure_dir(&ctx.target_root)?;
    Ok(source)
}

/// Count what is present in an install root.
///
/// Counts `.md` files in `agents/`, skill directories in `skills/` and
/// `.md` files in the workflow folder.
pub fn count_installed(
    kit: &Kit,
    target_root: &NormalizedPath,
    workflow_folder: &str,
) -> Result<InstallResult> {
    let count_markdown = |dir: NormalizedPath| -> Result<usize> {
        Ok(io::list_dir(&dir)?
            .iter()
            .filter(|e| !e.is_dir && e.path.extension() == Some("md"))
            .count())
    };

    let skills = io::list_dir(&target_root.join(SKILLS_DIR))?
        .iter()
        .filter(|e| e.is_dir)
        .count();

    Ok(InstallResult {
        kit: kit.id.clone(),
        agents: count_markdown(target_root.join(AGENTS_DIR))?,
        skills,
        workflows: count_markdown(target_root.join(workflow_folder))?,
    })
}
