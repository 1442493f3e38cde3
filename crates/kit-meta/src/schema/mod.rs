//! Descriptor schemas

mod kit;
mod scope;
mod tool;

pub use kit::{AGENTS_DIR, Kit, RULES_DIR, SKILL_FILE, SKILLS_DIR};
pub use scope::{Scope, home_dir};
pub use tool::{SOURCE_WORKFLOW_FOLDER, AiTool, DivergentSchema, FieldRule, InstallStrategy};
