//! Directory materializer
//!
//! Mirrors kit subtrees into an install root. Every UTF-8 file passes
//! through path substitution so references inside untransformed files
//! (skills, docs) point at the tool's folder. Other files are copied as
//! bytes.

use crate::Result;
use kit_content::{FolderRename, PathToken};
use kit_fs::{NormalizedPath, io};
use kit_meta::{AiTool, Kit};

/// Copy one file, rewriting path tokens when it is text.
pub fn copy_file(source: &NormalizedPath, target: &NormalizedPath, token: &PathToken) -> Result<()> {
    let bytes = io::read_bytes(source)?;
    match String::from_utf8(bytes) {
        Ok(text) => io::write_text(target, &token.apply(&text))?,
        Err(e) => io::write_atomic(target, e.as_bytes())?,
    }
    tracing::debug!("Copied {} -> {}", source, target);
    Ok(())
}

/// Recursively mirror `source` into `target`.
///
/// Top-level entries named in `exclude` are skipped. Returns the number of
/// files written.
pub fn copy_directory(
    source: &NormalizedPath,
    target: &NormalizedPath,
    exclude: &[&str],
    token: &PathToken,
) -> Result<usize> {
    io::ensure_dir(target)?;
    let mut written = 0;

    for entry in io::list_dir(source)? {
        if exclude.contains(&entry.name.as_str()) {
            tracing::debug!("Skipping {}", entry.path);
            continue;
        }
        let destination = target.join(&entry.name);
        if entry.is_dir {
            written += copy_directory(&entry.path, &destination, &[], token)?;
        } else {
            copy_file(&entry.path, &destination, token)?;
            written += 1;
        }
    }

    Ok(written)
}

/// Copy the kit's rules variant for `tool` to `rules_path`.
///
/// Returns `false` when the kit has no variant for the tool.
pub fn copy_rules_file(
    kit: &Kit,
    tool: &AiTool,
    rules_path: &NormalizedPath,
    token: &PathToken,
    folder_rename: Option<&FolderRename>,
) -> Result<bool> {
    let source = kit.rules_dir().join(&tool.rules_source);
    if !source.is_file() {
        tracing::warn!(
            "Kit '{}' has no {} rules; {} gets no rules file",
            kit.id,
            tool.rules_source,
            tool.name
        );
        return Ok(false);
    }

    let mut content = token.apply(&io::read_text(&source)?);
    if let Some(rename) = folder_rename {
        content = rename.apply(&content);
    }
    io::write_text(rules_path, &content)?;
    tracing::debug!("Wrote rules {} -> {}", source, rules_path);
    Ok(true)
}

/// Overlay the shared subtree onto an install root, overwriting on conflict.
///
/// Returns the number of files written; a missing common directory writes
/// nothing.
pub fn merge_common_assets(
    common_dir: &NormalizedPath,
    target_root: &NormalizedPath,
    token: &PathToken,
    exclude: &[&str],
) -> Result<usize> {
    if !common_dir.is_dir() {
        tracing::debug!("No common assets at {}", common_dir);
        return Ok(0);
    }
    copy_directory(common_dir, target_root, exclude, token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_binary_file_copied_verbatim() {
        let temp = TempDir::new().unwrap();
        let source = NormalizedPath::new(temp.path().join("logo.bin"));
        let target = NormalizedPath::new(temp.path().join("out/logo.bin"));
        let bytes = vec![0xff, 0xfe, b'.', b'a', b'g', b'e', b'n', b't', b'/'];
        std::fs::write(source.to_native(), &bytes).unwrap();

        copy_file(&source, &target, &PathToken::canonical(".cursor/")).unwrap();

        assert_eq!(std::fs::read(target.to_native()).unwrap(), bytes);
    }

    #[test]
    fn test_missing_common_dir() {
        let temp = TempDir::new().unwrap();
        let written = merge_common_assets(
            &NormalizedPath::new(temp.path().join("missing")),
            &NormalizedPath::new(temp.path().join("out")),
            &PathToken::canonical(".claude/"),
            &[],
        )
        .unwrap();
        assert_eq!(written, 0);
        assert!(!temp.path().join("out").exists());
    }
}
