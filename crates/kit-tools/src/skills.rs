//! Skill description lookup

use crate::Result;
use kit_content::frontmatter;
use kit_fs::{NormalizedPath, io};
use kit_meta::schema::SKILL_FILE;
use std::collections::HashMap;

/// Build a skill name to description table from `skills/<name>/SKILL.md`.
///
/// Directories are scanned in order; the first description found for a
/// name wins, so a kit's own skills shadow shared ones. Skills without a
/// `SKILL.md` or without a description are left out.
pub fn load_skill_descriptions(skill_dirs: &[NormalizedPath]) -> Result<HashMap<String, String>> {
    let mut table = HashMap::new();

    for dir in skill_dirs {
        for entry in io::list_dir(dir)? {
            if !entry.is_dir || table.contains_key(&entry.name) {
                continue;
            }
            let skill_file = entry.path.join(SKILL_FILE);
            if !skill_file.is_file() {
                continue;
            }
            let parsed = frontmatter::parse(&io::read_text(&skill_file)?);
            match parsed.data.get_text("description") {
                Some(description) => {
                    table.insert(entry.name, description);
                }
                None => tracing::debug!("{} has no description", skill_file),
            }
        }
    }

    Ok(table)
}
