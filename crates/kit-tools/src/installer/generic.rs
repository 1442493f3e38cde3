//! Verbatim installer

use super::{InstallContext, InstallResult, KitInstaller, count_installed, prepare};
use crate::Result;
use crate::materialize::{copy_directory, copy_rules_file, merge_common_assets};
use kit_meta::schema::RULES_DIR;
use kit_meta::{AiTool, Kit};

/// Copies the kit tree as-is, rewriting only path tokens.
///
/// Used by tools that read the kit schema unchanged.
#[derive(Debug, Clone)]
pub struct GenericInstaller {
    tool: AiTool,
}

impl GenericInstaller {
    pub fn new(tool: AiTool) -> Self {
        Self { tool }
    }
}

impl KitInstaller for GenericInstaller {
    fn tool(&self) -> &AiTool {
        &self.tool
    }

    fn install(&self, kit: &Kit, ctx: &InstallContext) -> Result<InstallResult> {
        let source = prepare(kit, ctx)?;

        let copied = copy_directory(&source, &ctx.target_root, &[RULES_DIR], &ctx.path_token)?;
        copy_rules_file(kit, &self.tool, &ctx.rules_path, &ctx.path_token, None)?;
        if let Some(common) = &ctx.common_dir {
            merge_common_assets(common, &ctx.target_root, &ctx.path_token, &[])?;
        }

        let result = count_installed(kit, &ctx.target_root, self.tool.workflow_folder())?;
        tracing::info!(
            "Installed kit '{}' for {} ({} files copied)",
            kit.id,
            self.tool.name,
            copied
        );
        Ok(result)
    }
}
