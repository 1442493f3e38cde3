//! Schema-divergent installer

use super::{InstallContext, InstallResult, KitInstaller, count_installed, prepare};
use crate::Result;
use crate::materialize::{copy_directory, copy_file, copy_rules_file};
use crate::skills::load_skill_descriptions;
use crate::transform::{AgentTransformer, ContentTransformer, TransformContext, WorkflowTransformer};
use kit_fs::{NormalizedPath, io};
use kit_meta::schema::{AGENTS_DIR, RULES_DIR, SKILLS_DIR, SOURCE_WORKFLOW_FOLDER};
use kit_meta::{AiTool, DivergentSchema, Kit};
use std::collections::HashMap;

/// Installs a kit for a tool whose metadata and folder layout differ from
/// the kit sources.
///
/// Agents and workflows go through transformers; everything else is
/// mirrored. Shared agents and workflows are transformed the same way.
#[derive(Debug, Clone)]
pub struct SchemaDivergentInstaller {
    tool: AiTool,
    schema: DivergentSchema,
    agents: AgentTransformer,
    workflows: WorkflowTransformer,
}

impl SchemaDivergentInstaller {
    pub fn new(tool: AiTool, schema: DivergentSchema) -> Self {
        Self {
            agents: AgentTransformer::new(schema.agent_fields.clone()),
            workflows: WorkflowTransformer::new(
                schema.workflow_fields.clone(),
                schema.terminology.clone(),
            ),
            tool,
            schema,
        }
    }

    /// Transform the agents and workflows found under `source_root`.
    fn transform_resources(
        &self,
        source_root: &NormalizedPath,
        ctx: &InstallContext,
        descriptions: &HashMap<String, String>,
    ) -> Result<()> {
        let workflow_target = ctx.target_root.join(&self.schema.workflow_folder);
        self.transform_dir(
            &self.agents,
            &source_root.join(AGENTS_DIR),
            &ctx.target_root.join(AGENTS_DIR),
            ctx,
            Some(descriptions),
        )?;
        self.transform_dir(
            &self.workflows,
            &source_root.join(SOURCE_WORKFLOW_FOLDER),
            &workflow_target,
            ctx,
            None,
        )
    }

    fn transform_dir(
        &self,
        transformer: &dyn ContentTransformer,
        source: &NormalizedPath,
        target: &NormalizedPath,
        ctx: &InstallContext,
        descriptions: Option<&HashMap<String, String>>,
    ) -> Result<()> {
        for entry in io::list_dir(source)? {
            let destination = target.join(&entry.name);
            if entry.is_dir {
                copy_directory(&entry.path, &destination, &[], &ctx.path_token)?;
                continue;
            }
            if entry.path.extension() != Some("md") {
                copy_file(&entry.path, &destination, &ctx.path_token)?;
                continue;
            }

            let raw = match String::from_utf8(io::read_bytes(&entry.path)?) {
                Ok(raw) => raw,
                Err(_) => {
                    tracing::warn!("{} is not UTF-8; copying it unchanged", entry.path);
                    copy_file(&entry.path, &destination, &ctx.path_token)?;
                    continue;
                }
            };

            let mut file_ctx =
                TransformContext::new(ctx.path_token.clone(), entry.path.clone(), destination.clone())
                    .with_folder_rename(self.tool.folder_rename());
            if let Some(table) = descriptions {
                file_ctx = file_ctx.with_skill_descriptions(table.clone());
            }

            io::write_text(&destination, &transformer.transform(&raw, &file_ctx))?;
            tracing::debug!("Transformed {} {} -> {}", transformer.kind(), entry.path, destination);
        }
        Ok(())
    }
}

impl KitInstaller for SchemaDivergentInstaller {
    fn tool(&self) -> &AiTool {
        &self.tool
    }

    fn install(&self, kit: &Kit, ctx: &InstallContext) -> Result<InstallResult> {
        let source = prepare(kit, ctx)?;

        let mut skill_dirs = vec![kit.skills_dir()];
        if let Some(common) = &ctx.common_dir {
            skill_dirs.push(common.join(SKILLS_DIR));
        }
        let descriptions = load_skill_descriptions(&skill_dirs)?;

        let carved_out = [RULES_DIR, AGENTS_DIR, SOURCE_WORKFLOW_FOLDER];
        let copied = copy_directory(&source, &ctx.target_root, &carved_out, &ctx.path_token)?;
        self.transform_resources(&source, ctx, &descriptions)?;

        let rename = self.tool.folder_rename();
        copy_rules_file(kit, &self.tool, &ctx.rules_path, &ctx.path_token, rename.as_ref())?;

        if let Some(common) = ctx.common_dir.as_ref().filter(|dir| dir.is_dir()) {
            copy_directory(common, &ctx.target_root, &carved_out, &ctx.path_token)?;
            self.transform_resources(common, ctx, &descriptions)?;
        }

        let result = count_installed(kit, &ctx.target_root, &self.schema.workflow_folder)?;
        tracing::info!(
            "Installed kit '{}' for {} ({} files copied, {} agents transformed)",
            kit.id,
            self.tool.name,
            copied,
            result.agents
        );
        Ok(result)
    }
}
