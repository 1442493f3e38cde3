//! Agent persona transformer

use super::{ContentTransformer, TransformContext, project_fields, warn_missing};
use kit_content::frontmatter;
use kit_meta::FieldRule;

/// Heading of the generated skills section. Its presence in a body marks
/// the section as already inserted.
pub const REQUIRED_SKILLS_HEADING: &str = "## Required Skills";

/// Description used for skills missing from the lookup table.
pub const SKILL_PLACEHOLDER: &str = "No description available";

const SKILLS_FIELD: &str = "skills";

/// Reshapes agent files into a tool's subagent schema.
///
/// The kit's `skills` field is not part of the target schema, so the
/// referenced skills are listed in the body instead.
#[derive(Debug, Clone)]
pub struct AgentTransformer {
    fields: Vec<FieldRule>,
}

impl AgentTransformer {
    pub fn new(fields: Vec<FieldRule>) -> Self {
        Self { fields }
    }
}

impl ContentTransformer for AgentTransformer {
    fn kind(&self) -> &'static str {
        "agent"
    }

    fn transform(&self, raw: &str, ctx: &TransformContext) -> String {
        let parsed = frontmatter::parse(raw);
        let data = project_fields(&self.fields, &parsed.data);
        warn_missing(self.kind(), &self.fields, &data, ctx);

        let mut body = ctx.rewrite_paths(&parsed.content);

        let skills = parsed
            .data
            .get_text(SKILLS_FIELD)
            .map(|list| parse_skill_list(&list))
            .unwrap_or_default();
        if !skills.is_empty() {
            if has_skills_section(&body) {
                tracing::debug!("{} already lists its skills", ctx.source_path);
            } else {
                let section = skills_section(&skills, ctx);
                body = insert_after_intro(&body, &section);
            }
        }

        frontmatter::render(&data, &body)
    }
}

/// Split a `skills` value into names.
///
/// Accepts `a, b` and `[a, b]`; quotes around names are stripped.
pub fn parse_skill_list(value: &str) -> Vec<String> {
    let value = value.trim();
    let value = value.strip_prefix('[').unwrap_or(value);
    let value = value.strip_suffix(']').unwrap_or(value);
    value
        .split(',')
        .map(|s| s.trim().trim_matches(['"', '\'']).trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn has_skills_section(body: &str) -> bool {
    body.lines().any(|line| line.trim_end() == REQUIRED_SKILLS_HEADING)
}

fn skills_section(skills: &[String], ctx: &TransformContext) -> String {
    let mut section = format!("{REQUIRED_SKILLS_HEADING}\n\n");
    for skill in skills {
        let description = ctx
            .skill_descriptions
            .as_ref()
            .and_then(|table| table.get(skill))
            .map(String::as_str)
            .unwrap_or(SKILL_PLACEHOLDER);
        section.push_str(&format!("- **{skill}**: {description}\n"));
    }
    section
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

fn is_fence(line: &str) -> bool {
    let line = line.trim_start();
    line.starts_with("```") || line.starts_with("~~~")
}

/// Index of the first `# ` heading outside fenced code blocks.
fn first_heading(lines: &[&str]) -> Option<usize> {
    let mut in_fence = false;
    for (idx, line) in lines.iter().enumerate() {
        if is_fence(line) {
            in_fence = !in_fence;
        } else if !in_fence && line.starts_with("# ") {
            return Some(idx);
        }
    }
    None
}

/// Insert `section` after the first `# ` heading, the blank lines after it
/// and the paragraph that follows. Without such a heading the section
/// opens the body.
fn insert_after_intro(body: &str, section: &str) -> String {
    let lines: Vec<&str> = body.split_inclusive('\n').collect();

    let Some(heading) = first_heading(&lines) else {
        return if body.is_empty() {
            section.to_string()
        } else {
            format!("{section}\n{body}")
        };
    };

    let mut idx = heading + 1;
    while idx < lines.len() && is_blank(lines[idx]) {
        idx += 1;
    }
    while idx < lines.len() && !is_blank(lines[idx]) && !lines[idx].starts_with('#') {
        idx += 1;
    }

    let (head, tail) = lines.split_at(idx);
    let mut out: String = head.concat();
    if !out.ends_with('\n') {
        out.push('\n');
    }
    if head.last().is_some_and(|l| !is_blank(l)) {
        out.push('\n');
    }
    out.push_str(section);
    if tail.first().is_some_and(|l| !is_blank(l)) {
        out.push('\n');
    }
    out.push_str(&tail.concat());
    out
}
