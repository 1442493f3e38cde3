//! Workflow (slash command) transformer

use super::{ContentTransformer, TransformContext, project_fields, warn_missing};
use kit_content::{TermMapping, frontmatter};
use kit_meta::FieldRule;

/// Reshapes workflow files into a tool's command schema.
#[derive(Debug, Clone)]
pub struct WorkflowTransformer {
    fields: Vec<FieldRule>,
    terminology: Option<TermMapping>,
}

impl WorkflowTransformer {
    pub fn new(fields: Vec<FieldRule>, terminology: Option<TermMapping>) -> Self {
        Self { fields, terminology }
    }
}

impl ContentTransformer for WorkflowTransformer {
    fn kind(&self) -> &'static str {
        "workflow"
    }

    fn transform(&self, raw: &str, ctx: &TransformContext) -> String {
        let parsed = frontmatter::parse(raw);
        let data = project_fields(&self.fields, &parsed.data);
        warn_missing(self.kind(), &self.fields, &data, ctx);

        let mut body = ctx.rewrite_paths(&parsed.content);
        if let Some(mapping) = &self.terminology {
            body = mapping.apply(&body);
        }

        frontmatter::render(&data, &body)
    }
}
