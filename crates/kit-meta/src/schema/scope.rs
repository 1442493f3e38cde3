//! Install scope

use crate::{Error, Result};
use kit_fs::NormalizedPath;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a kit is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The user's home directory, shared by every project
    Global,
    /// A single workspace directory
    Workspace,
}

impl Scope {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Workspace => "workspace",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "workspace" | "local" => Ok(Self::Workspace),
            other => Err(format!("unknown scope '{other}' (expected global or workspace)")),
        }
    }
}

/// Resolve the current user's home directory.
pub fn home_dir() -> Result<NormalizedPath> {
    dirs::home_dir()
        .map(NormalizedPath::new)
        .ok_or(Error::HomeDirNotFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Global", Scope::Global)]
    #[case("global", Scope::Global)]
    #[case("workspace", Scope::Workspace)]
    #[case("LOCAL", Scope::Workspace)]
    fn test_from_str(#[case] input: &str, #[case] expected: Scope) {
        assert_eq!(input.parse::<Scope>(), Ok(expected));
    }

    #[rstest]
    #[case("project")]
    #[case("")]
    fn test_from_str_rejects_unknown(#[case] input: &str) {
        assert!(input.parse::<Scope>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for scope in [Scope::Global, Scope::Workspace] {
            assert_eq!(scope.to_string().parse::<Scope>(), Ok(scope));
        }
    }
}
