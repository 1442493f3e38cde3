//! Path and terminology rewriting
//!
//! Kits reference their own files through a canonical `.agent/` prefix and
//! call slash-command files "workflows". When a kit is retargeted those
//! references are rewritten with the helpers here. All of them are pure
//! `(text, params) -> text` functions and compose freely.

use regex::{NoExpand, Regex};
use serde::{Deserialize, Serialize};

/// Path prefix used inside kit sources to reference the install folder.
pub const CANONICAL_PATH_TOKEN: &str = ".agent/";

/// Replace every occurrence of `from` with `to` (case-sensitive).
pub fn replace_path_token(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() || from == to {
        return text.to_string();
    }
    text.replace(from, to)
}

/// Rename a folder segment in path-like references.
///
/// Rewrites `from/` to `to/` and `/from` to `/to`. Bare words are left alone.
pub fn rename_folder(text: &str, from: &str, to: &str) -> String {
    if from.is_empty() || from == to {
        return text.to_string();
    }
    text.replace(&format!("{from}/"), &format!("{to}/"))
        .replace(&format!("/{from}"), &format!("/{to}"))
}

/// Replace a term and its plural in all common case variants.
///
/// For each pair (plural first, then singular) and each variant
/// (lowercase, Capitalized, UPPERCASE) the compound forms `term/` and
/// `/term` are rewritten before the whole-word form.
pub fn replace_terminology(text: &str, mapping: &TermMapping) -> String {
    let mut out = text.to_string();
    for (from, to) in mapping.pairs() {
        for (from, to) in case_variants(&from, &to) {
            let escaped = regex::escape(&from);
            let passes = [
                (format!(r"\b{escaped}/"), format!("{to}/")),
                (format!(r"/{escaped}\b"), format!("/{to}")),
                (format!(r"\b{escaped}\b"), to.clone()),
            ];
            for (pattern, replacement) in passes {
                match Regex::new(&pattern) {
                    Ok(re) => out = re.replace_all(&out, NoExpand(&replacement)).into_owned(),
                    Err(e) => tracing::warn!("Skipping terminology pattern {}: {}", pattern, e),
                }
            }
        }
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

fn case_variants(from: &str, to: &str) -> Vec<(String, String)> {
    let mut variants: Vec<(String, String)> = Vec::with_capacity(3);
    for candidate in [
        (from.to_lowercase(), to.to_lowercase()),
        (capitalize(from), capitalize(to)),
        (from.to_uppercase(), to.to_uppercase()),
    ] {
        if !candidate.0.is_empty() && !variants.iter().any(|(f, _)| *f == candidate.0) {
            variants.push(candidate);
        }
    }
    variants
}

/// A source path prefix and the prefix it is rewritten to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathToken {
    pub from: String,
    pub to: String,
}

impl PathToken {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Token rewriting the canonical `.agent/` prefix to `to`.
    pub fn canonical(to: impl Into<String>) -> Self {
        Self::new(CANONICAL_PATH_TOKEN, to)
    }

    pub fn apply(&self, text: &str) -> String {
        replace_path_token(text, &self.from, &self.to)
    }
}

/// A folder rename applied to path references (e.g. `workflows` -> `commands`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderRename {
    pub from: String,
    pub to: String,
}

impl FolderRename {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    pub fn apply(&self, text: &str) -> String {
        rename_folder(text, &self.from, &self.to)
    }
}

/// Terminology mapping, e.g. `workflow` -> `command`.
///
/// Plurals default to the singular with an `s` appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TermMapping {
    pub from: String,
    pub to: String,
    #[serde(default)]
    pub from_plural: Option<String>,
    #[serde(default)]
    pub to_plural: Option<String>,
}

impl TermMapping {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            from_plural: None,
            to_plural: None,
        }
    }

    pub fn with_plurals(mut self, from_plural: impl Into<String>, to_plural: impl Into<String>) -> Self {
        self.from_plural = Some(from_plural.into());
        self.to_plural = Some(to_plural.into());
        self
    }

    /// Replacement pairs in application order (plural first).
    pub fn pairs(&self) -> [(String, String); 2] {
        let from_plural = self
            .from_plural
            .clone()
            .unwrap_or_else(|| format!("{}s", self.from));
        let to_plural = self
            .to_plural
            .clone()
            .unwrap_or_else(|| format!("{}s", self.to));
        [(from_plural, to_plural), (self.from.clone(), self.to.clone())]
    }

    pub fn apply(&self, text: &str) -> String {
        replace_terminology(text, self)
    }
}
