//! Install requests, pre-flight inspection and conflict policy

use kit_fs::NormalizedPath;
use kit_meta::{AiTool, Scope};
use kit_tools::InstallResult;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A fully resolved install request.
#[derive(Debug, Clone)]
pub struct InstallRequest {
    pub tool: AiTool,
    /// Kit ids, installed in this order
    pub kits: Vec<String>,
    /// Workspace directory; unused for global installs
    pub target_path: NormalizedPath,
    pub scope: Scope,
}

impl InstallRequest {
    pub fn new(tool: AiTool, scope: Scope, target_path: NormalizedPath) -> Self {
        Self {
            tool,
            kits: Vec::new(),
            target_path,
            scope,
        }
    }

    pub fn with_kits<I, S>(mut self, kits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.kits = kits.into_iter().map(Into::into).collect();
        self
    }
}

/// What to do when the target already holds an installation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConflictPolicy {
    /// Back up the existing installation, then install fresh
    Replace,
    /// Install over the existing files
    Merge,
    /// Leave the existing installation alone
    Skip,
    /// Abort without touching anything
    Cancel,
}

impl ConflictPolicy {
    pub const ALL: [ConflictPolicy; 4] = [Self::Replace, Self::Merge, Self::Skip, Self::Cancel];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Replace => "replace",
            Self::Merge => "merge",
            Self::Skip => "skip",
            Self::Cancel => "cancel",
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            Self::Replace => "Back up the existing installation and replace it",
            Self::Merge => "Install over the existing files",
            Self::Skip => "Keep the existing installation",
            Self::Cancel => "Cancel",
        }
    }
}

impl fmt::Display for ConflictPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConflictPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown policy '{s}' (expected replace, merge, skip or cancel)"))
    }
}

/// Destination of a request, inspected before anything is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preflight {
    pub target_root: NormalizedPath,
    pub rules_path: NormalizedPath,
    /// The target root already exists
    pub existing: bool,
}

impl Preflight {
    pub fn check(tool: &AiTool, scope: Scope, base: &NormalizedPath) -> Self {
        let target_root = tool.install_root(scope, base);
        Self {
            existing: target_root.is_dir(),
            rules_path: tool.rules_path(scope, base),
            target_root,
        }
    }

    /// Whether a [`ConflictPolicy`] must be chosen before installing.
    pub fn needs_decision(&self) -> bool {
        self.existing
    }

    /// The rules file lives outside the target root.
    pub fn rules_outside_root(&self) -> bool {
        !self
            .rules_path
            .as_str()
            .starts_with(&format!("{}/", self.target_root.as_str().trim_end_matches('/')))
    }
}

/// Result of an install run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallOutcome {
    /// One result per requested kit, in request order
    Installed(Vec<InstallResult>),
    Skipped,
    Cancelled,
}

impl InstallOutcome {
    pub fn results(&self) -> &[InstallResult] {
        match self {
            Self::Installed(results) => results,
            Self::Skipped | Self::Cancelled => &[],
        }
    }
}
