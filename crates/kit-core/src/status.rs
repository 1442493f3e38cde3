//! Kit inventory
//!
//! Lists the agents, skills and workflows of a kit source or of an
//! installed tree.

use crate::Result;
use kit_content::frontmatter;
use kit_fs::{NormalizedPath, io};
use kit_meta::schema::{AGENTS_DIR, SKILL_FILE, SKILLS_DIR, SOURCE_WORKFLOW_FOLDER};
use kit_tools::transform::parse_skill_list;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgentEntry {
    pub name: String,
    /// Path relative to the scanned root
    pub file: String,
    pub description: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillEntry {
    pub name: String,
    pub file: String,
    pub description: String,
    pub has_scripts: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowEntry {
    pub name: String,
    /// Slash command invoking the workflow (e.g. `/plan`)
    pub command: String,
    pub file: String,
    pub description: String,
}

/// Contents of a kit tree, each list sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KitInventory {
    pub agents: Vec<AgentEntry>,
    pub skills: Vec<SkillEntry>,
    pub workflows: Vec<WorkflowEntry>,
}

impl KitInventory {
    /// Scan a kit source tree.
    pub fn scan(root: &NormalizedPath) -> Result<Self> {
        Self::scan_with_folder(root, SOURCE_WORKFLOW_FOLDER)
    }

    /// Scan a tree whose workflows live in `workflow_folder`.
    pub fn scan_with_folder(root: &NormalizedPath, workflow_folder: &str) -> Result<Self> {
        Ok(Self {
            agents: scan_agents(root)?,
            skills: scan_skills(root)?,
            workflows: scan_workflows(root, workflow_folder)?,
        })
    }

    /// Agent skill references with no matching skill, as (agent, skill).
    pub fn missing_skills(&self) -> Vec<(&str, &str)> {
        self.agents
            .iter()
            .flat_map(|agent| {
                agent
                    .skills
                    .iter()
                    .filter(|skill| !self.skills.iter().any(|s| &s.name == *skill))
                    .map(move |skill| (agent.name.as_str(), skill.as_str()))
            })
            .collect()
    }
}

fn markdown_files(dir: &NormalizedPath) -> Result<Vec<io::DirEntry>> {
    Ok(io::list_dir(dir)?
        .into_iter()
        .filter(|e| !e.is_dir && e.path.extension() == Some("md"))
        .collect())
}

fn read_frontmatter(path: &NormalizedPath) -> Result<frontmatter::Frontmatter> {
    Ok(frontmatter::parse(&io::read_text(path)?).data)
}

fn stem(entry: &io::DirEntry) -> String {
    entry.path.file_stem().unwrap_or(&entry.name).to_string()
}

fn scan_agents(root: &NormalizedPath) -> Result<Vec<AgentEntry>> {
    let mut agents = Vec::new();
    for entry in markdown_files(&root.join(AGENTS_DIR))? {
        let data = read_frontmatter(&entry.path)?;
        agents.push(AgentEntry {
            name: stem(&entry),
            file: format!("{AGENTS_DIR}/{}", entry.name),
            description: data.get_text("description").unwrap_or_default(),
            skills: data
                .get_text("skills")
                .map(|list| parse_skill_list(&list))
                .unwrap_or_default(),
        });
    }
    Ok(agents)
}

fn scan_skills(root: &NormalizedPath) -> Result<Vec<SkillEntry>> {
    let mut skills = Vec::new();
    for entry in io::list_dir(&root.join(SKILLS_DIR))? {
        // `.disabled/` and other dot directories hold inactive skills
        if !entry.is_dir || entry.name.starts_with('.') {
            continue;
        }
        let skill_file = entry.path.join(SKILL_FILE);
        if !skill_file.is_file() {
            continue;
        }
        let data = read_frontmatter(&skill_file)?;
        let has_scripts = io::list_dir(&entry.path.join("scripts"))?
            .iter()
            .any(|script| !script.is_dir);
        skills.push(SkillEntry {
            file: format!("{SKILLS_DIR}/{}/{SKILL_FILE}", entry.name),
            name: entry.name,
            description: data.get_text("description").unwrap_or_default(),
            has_scripts,
        });
    }
    Ok(skills)
}

fn scan_workflows(root: &NormalizedPath, folder: &str) -> Result<Vec<WorkflowEntry>> {
    let mut workflows = Vec::new();
    for entry in markdown_files(&root.join(folder))? {
        let data = read_frontmatter(&entry.path)?;
        let name = stem(&entry);
        workflows.push(WorkflowEntry {
            command: format!("/{name}"),
            file: format!("{folder}/{}", entry.name),
            description: data.get_text("description").unwrap_or_default(),
            name,
        });
    }
    Ok(workflows)
}
