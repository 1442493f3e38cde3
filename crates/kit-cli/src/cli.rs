//! CLI argument parsing using clap derive

use clap::{Parser, Subcommand, ValueEnum};
use kit_core::ConflictPolicy;
use kit_meta::Scope;
use std::path::PathBuf;

/// Agent Kits - Install agent, skill and workflow kits into AI coding tools
#[derive(Parser, Debug)]
#[command(name = "kits")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Kits root containing kits/, common/ and kits.toml
    #[arg(long, global = true, env = "KITS_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Install kits into a tool's layout
    ///
    /// Prompts for anything not given on the command line when run in a
    /// terminal.
    ///
    /// Examples:
    ///   kits install -t cursor -k coder
    ///   kits install -t claude -s global -k coder -k writer
    ///   kits install -t codex -k coder --policy replace
    Install {
        /// Target tool (use 'kits list-tools' to see options)
        #[arg(short, long)]
        tool: Option<String>,

        /// Install into the workspace or the home directory
        #[arg(short, long, value_enum)]
        scope: Option<ScopeArg>,

        /// Kit to install (repeatable)
        #[arg(short = 'k', long = "kit")]
        kits: Vec<String>,

        /// What to do when the tool folder already exists
        #[arg(short, long, value_enum)]
        policy: Option<PolicyArg>,

        /// Workspace directory (defaults to the current directory)
        #[arg(short, long)]
        workspace: Option<PathBuf>,

        /// Output results as JSON
        #[arg(long)]
        json: bool,
    },

    /// List supported tools
    ListTools,

    /// List kits in the kits root
    ListKits,

    /// Show the agents, skills and workflows of a kit
    Status {
        /// Kit id
        kit: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Check a kit's structure
    Validate {
        /// Kit id
        kit: String,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeArg {
    Workspace,
    Global,
}

impl From<ScopeArg> for Scope {
    fn from(arg: ScopeArg) -> Self {
        match arg {
            ScopeArg::Workspace => Scope::Workspace,
            ScopeArg::Global => Scope::Global,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    Replace,
    Merge,
    Skip,
    Cancel,
}

impl From<PolicyArg> for ConflictPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Replace => ConflictPolicy::Replace,
            PolicyArg::Merge => ConflictPolicy::Merge,
            PolicyArg::Skip => ConflictPolicy::Skip,
            PolicyArg::Cancel => ConflictPolicy::Cancel,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_install() {
        let cli = Cli::try_parse_from([
            "kits", "install", "-t", "cursor", "-k", "coder", "-k", "writer", "--policy", "replace",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Install {
                tool, kits, policy, scope, ..
            }) => {
                assert_eq!(tool.as_deref(), Some("cursor"));
                assert_eq!(kits, vec!["coder", "writer"]);
                assert_eq!(policy, Some(PolicyArg::Replace));
                assert_eq!(scope, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_root_flag() {
        let cli = Cli::try_parse_from(["kits", "--root", "/srv/kits", "list-kits"]).unwrap();
        assert_eq!(cli.root, PathBuf::from("/srv/kits"));
        assert_eq!(cli.command, Some(Commands::ListKits));
    }
}
