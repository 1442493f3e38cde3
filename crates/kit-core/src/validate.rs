//! Kit structure validation
//!
//! Checks a kit source tree before it is distributed: required folders,
//! one rules variant per built-in tool, `ARCHITECTURE.md`, and the
//! frontmatter of agents, skills and workflows.

use crate::Result;
use crate::status::KitInventory;
use kit_content::frontmatter;
use kit_fs::{NormalizedPath, io};
use kit_meta::Kit;
use kit_meta::schema::{SKILL_FILE, SKILLS_DIR};
use kit_tools::ToolRegistry;
use serde::Serialize;
use std::collections::BTreeSet;

const REQUIRED_DIRS: [&str; 3] = ["agents", "skills", "rules"];
const RECOMMENDED_DIRS: [&str; 2] = ["workflows", "scripts"];
const ARCHITECTURE_FILE: &str = "ARCHITECTURE.md";
const ARCHITECTURE_SECTIONS: [&str; 4] = ["Overview", "Agents", "Skills", "Statistics"];
const AGENT_FIELDS: [&str; 3] = ["name", "description", "skills"];

/// Frontmatter a rules variant must carry: any one of the listed keys.
const RULES_FRONTMATTER: [(&str, &[&str]); 2] = [
    ("GEMINI.md", &["trigger"]),
    ("CURSOR.md", &["description", "alwaysApply"]),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub severity: Severity,
    /// Area checked: structure, content, rules, agents, skills, workflows
    pub category: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KitStats {
    pub agents: usize,
    pub skills: usize,
    pub workflows: usize,
    pub rule_files: usize,
    pub required_rule_files: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub kit: String,
    pub findings: Vec<Finding>,
    pub stats: KitStats,
}

impl ValidationReport {
    /// True when no finding is an error.
    pub fn passed(&self) -> bool {
        self.count(Severity::Error) == 0
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.severity == Severity::Warning)
    }
}

/// Validates kit source trees.
pub struct KitValidator {
    required_rules: Vec<String>,
    shared_skills: Option<NormalizedPath>,
}

impl KitValidator {
    /// Require a rules variant for every built-in tool.
    pub fn new() -> Self {
        let registry = ToolRegistry::with_builtins();
        let variants: BTreeSet<String> = registry
            .iter()
            .map(|reg| reg.tool.rules_source.clone())
            .collect();
        Self {
            required_rules: variants.into_iter().collect(),
            shared_skills: None,
        }
    }

    pub fn with_required_rules<I, S>(mut self, variants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_rules = variants.into_iter().map(Into::into).collect();
        self
    }

    /// Also accept agent skill references resolved by `common/skills/`.
    pub fn with_shared_skills(mut self, common_dir: Option<&NormalizedPath>) -> Self {
        self.shared_skills = common_dir.map(|dir| dir.join(SKILLS_DIR));
        self
    }

    pub fn validate(&self, kit: &Kit) -> Result<ValidationReport> {
        let mut report = ValidationReport {
            kit: kit.id.clone(),
            findings: Vec::new(),
            stats: KitStats {
                required_rule_files: self.required_rules.len(),
                ..KitStats::default()
            },
        };
        let root = kit.source();
        if !root.is_dir() {
            push(&mut report, Severity::Error, "structure", format!("Kit path does not exist: {root}"));
            return Ok(report);
        }

        check_structure(&root, &mut report);
        check_architecture(&root, &mut report)?;
        self.check_rules(kit, &mut report)?;
        check_agents(kit, &mut report)?;
        check_skills(&root, &mut report)?;
        check_workflows(kit, &mut report)?;
        self.check_skill_references(&root, &mut report)?;

        tracing::debug!(
            "Validated kit '{}': {} error(s), {} warning(s)",
            kit.id,
            report.count(Severity::Error),
            report.count(Severity::Warning)
        );
        Ok(report)
    }

    fn check_rules(&self, kit: &Kit, report: &mut ValidationReport) -> Result<()> {
        let rules_dir = kit.rules_dir();
        if !rules_dir.is_dir() {
            return Ok(());
        }

        for variant in &self.required_rules {
            let path = rules_dir.join(variant);
            if !path.is_file() {
                push(report, Severity::Error, "rules", format!("Missing required rule file: {variant}"));
                continue;
            }
            report.stats.rule_files += 1;

            let Some((_, keys)) = RULES_FRONTMATTER.iter().find(|(name, _)| *name == variant.as_str()) else {
                continue;
            };
            let parsed = frontmatter::parse(&io::read_text(&path)?);
            if parsed.raw.is_empty() && parsed.data.is_empty() {
                push(report, Severity::Error, "rules", format!("Missing frontmatter: {variant}"));
            } else if !keys.iter().any(|key| parsed.data.contains_key(key)) {
                push(
                    report,
                    Severity::Error,
                    "rules",
                    format!("Missing {} in frontmatter: {variant}", keys.join(" or ")),
                );
            }
        }
        Ok(())
    }

    fn check_skill_references(&self, root: &NormalizedPath, report: &mut ValidationReport) -> Result<()> {
        let inventory = KitInventory::scan(root)?;
        let shared: Vec<String> = match &self.shared_skills {
            Some(dir) => io::list_dir(dir)?
                .into_iter()
                .filter(|e| e.is_dir)
                .map(|e| e.name)
                .collect(),
            None => Vec::new(),
        };

        for (agent, skill) in inventory.missing_skills() {
            if !shared.iter().any(|s| s == skill) {
                push(
                    report,
                    Severity::Warning,
                    "agents",
                    format!("Agent '{agent}' references missing skill: {skill}"),
                );
            }
        }
        Ok(())
    }
}

impl Default for KitValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn push(report: &mut ValidationReport, severity: Severity, category: &'static str, message: String) {
    report.findings.push(Finding {
        severity,
        category,
        message,
    });
}

fn check_structure(root: &NormalizedPath, report: &mut ValidationReport) {
    for dir in REQUIRED_DIRS {
        if !root.join(dir).is_dir() {
            push(report, Severity::Error, "structure", format!("Missing required directory: {dir}/"));
        }
    }
    for dir in RECOMMENDED_DIRS {
        if !root.join(dir).is_dir() {
            push(
                report,
                Severity::Warning,
                "structure",
                format!("Optional directory missing: {dir}/ (recommended)"),
            );
        }
    }
}

fn check_architecture(root: &NormalizedPath, report: &mut ValidationReport) -> Result<()> {
    let path = root.join(ARCHITECTURE_FILE);
    if !path.is_file() {
        push(report, Severity::Error, "content", format!("Missing required file: {ARCHITECTURE_FILE}"));
        return Ok(());
    }

    let content = io::read_text(&path)?;
    for section in ARCHITECTURE_SECTIONS {
        let needle = section.to_lowercase();
        let found = content
            .lines()
            .any(|line| line.starts_with("##") && line.to_lowercase().contains(&needle));
        if !found {
            push(
                report,
                Severity::Error,
                "content",
                format!("Missing section in {ARCHITECTURE_FILE}: {section}"),
            );
        }
    }
    Ok(())
}

fn check_agents(kit: &Kit, report: &mut ValidationReport) -> Result<()> {
    let dir = kit.agents_dir();
    if !dir.is_dir() {
        return Ok(());
    }

    let files: Vec<_> = io::list_dir(&dir)?
        .into_iter()
        .filter(|e| !e.is_dir && e.path.extension() == Some("md"))
        .collect();
    report.stats.agents = files.len();
    if files.is_empty() {
        push(report, Severity::Error, "agents", "No agent files found in agents/".into());
        return Ok(());
    }
    push(report, Severity::Info, "agents", format!("Found {} agent(s)", files.len()));

    for file in files {
        let parsed = frontmatter::parse(&io::read_text(&file.path)?);
        if parsed.raw.is_empty() && parsed.data.is_empty() {
            push(report, Severity::Error, "agents", format!("Missing frontmatter: {}", file.name));
            continue;
        }
        for field in AGENT_FIELDS {
            if !parsed.data.contains_key(field) {
                push(report, Severity::Warning, "agents", format!("{}: missing {field}", file.name));
            }
        }
    }
    Ok(())
}

fn check_skills(root: &NormalizedPath, report: &mut ValidationReport) -> Result<()> {
    let dir = root.join(SKILLS_DIR);
    if !dir.is_dir() {
        return Ok(());
    }

    let skills: Vec<_> = io::list_dir(&dir)?
        .into_iter()
        .filter(|e| e.is_dir && !e.name.starts_with('.'))
        .collect();
    report.stats.skills = skills.len();
    if skills.is_empty() {
        push(report, Severity::Error, "skills", "No skill directories found in skills/".into());
        return Ok(());
    }
    push(report, Severity::Info, "skills", format!("Found {} skill(s)", skills.len()));

    for skill in skills {
        let skill_file = skill.path.join(SKILL_FILE);
        if !skill_file.is_file() {
            push(report, Severity::Error, "skills", format!("Missing {SKILL_FILE} in: {}/", skill.name));
            continue;
        }
        let parsed = frontmatter::parse(&io::read_text(&skill_file)?);
        if parsed.raw.is_empty() && parsed.data.is_empty() {
            push(
                report,
                Severity::Error,
                "skills",
                format!("Missing frontmatter: {}/{SKILL_FILE}", skill.name),
            );
        } else if !(parsed.data.contains_key("name") && parsed.data.contains_key("description")) {
            push(report, Severity::Warning, "skills", format!("{}: missing name/description", skill.name));
        }
    }
    Ok(())
}

fn check_workflows(kit: &Kit, report: &mut ValidationReport) -> Result<()> {
    let dir = kit.workflows_dir();
    let files: Vec<_> = io::list_dir(&dir)?
        .into_iter()
        .filter(|e| !e.is_dir && e.path.extension() == Some("md"))
        .collect();
    report.stats.workflows = files.len();
    if files.is_empty() {
        // A missing folder is already reported as a structure warning
        if dir.is_dir() {
            push(report, Severity::Warning, "workflows", "No workflow files (optional)".into());
        }
        return Ok(());
    }
    push(report, Severity::Info, "workflows", format!("Found {} workflow(s)", files.len()));

    for file in files {
        let parsed = frontmatter::parse(&io::read_text(&file.path)?);
        if !parsed.data.contains_key("description") {
            push(report, Severity::Warning, "workflows", format!("Missing description in: {}", file.name));
        }
    }
    Ok(())
}
