//! Install command
//!
//! Resolves the tool, scope, kits and conflict policy (from flags, or by
//! prompting when attached to a terminal) and hands the request to the
//! install engine.

use colored::Colorize;
use kit_core::{ConflictPolicy, InstallEngine, InstallOutcome, InstallRequest, KitCatalog};
use kit_fs::NormalizedPath;
use kit_meta::{AiTool, Scope};
use kit_tools::ToolRegistry;
use serde_json::json;
use std::path::PathBuf;

use crate::context::CliContext;
use crate::error::{CliError, Result};
use crate::interactive;

/// Arguments of `kits install` after flag parsing.
#[derive(Debug, Clone, Default)]
pub struct InstallArgs {
    pub tool: Option<String>,
    pub scope: Option<Scope>,
    pub kits: Vec<String>,
    pub policy: Option<ConflictPolicy>,
    pub workspace: PathBuf,
    pub json: bool,
}

pub fn run_install(ctx: &CliContext, args: InstallArgs) -> Result<()> {
    run_install_with(ctx, args, None)
}

/// Run an install, optionally with `home` as the global scope base.
pub fn run_install_with(ctx: &CliContext, args: InstallArgs, home: Option<NormalizedPath>) -> Result<()> {
    let catalog = ctx.catalog()?;
    let registry = ctx.registry()?;
    let interactive = interactive::is_interactive() && !args.json;

    let tool = resolve_tool(&registry, args.tool.as_deref(), interactive)?;
    let scope = match args.scope {
        Some(scope) => scope,
        None if interactive => interactive::select_scope(&tool)?,
        None => Scope::Workspace,
    };
    let kits = resolve_kits(&catalog, args.kits, interactive)?;

    let request = InstallRequest::new(tool, scope, NormalizedPath::new(&args.workspace)).with_kits(kits);
    let mut engine = InstallEngine::new(&catalog);
    if let Some(home) = home {
        engine = engine.with_home(home);
    }

    let preflight = engine.preflight(&request)?;
    let policy = if preflight.needs_decision() {
        match args.policy {
            Some(policy) => policy,
            None if interactive => interactive::select_policy(preflight.target_root.as_str())?,
            None => {
                return Err(CliError::user(format!(
                    "{} already exists. Pass --policy replace|merge|skip|cancel.",
                    preflight.target_root
                )));
            }
        }
    } else {
        // Nothing to conflict with; any policy installs
        ConflictPolicy::Merge
    };

    tracing::debug!(
        "Installing {:?} for {} ({}) with policy {}",
        request.kits,
        request.tool.id,
        scope,
        policy
    );
    let outcome = engine.run(&request, policy)?;

    if args.json {
        let status = match &outcome {
            InstallOutcome::Installed(_) => "installed",
            InstallOutcome::Skipped => "skipped",
            InstallOutcome::Cancelled => "cancelled",
        };
        let report = json!({
            "tool": request.tool.id,
            "scope": scope.as_str(),
            "target_root": preflight.target_root.as_str(),
            "rules_path": preflight.rules_path.as_str(),
            "status": status,
            "results": outcome.results(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_outcome(&request.tool, &preflight.target_root, &preflight.rules_path, &outcome);
    Ok(())
}

fn resolve_tool(registry: &ToolRegistry, requested: Option<&str>, interactive: bool) -> Result<AiTool> {
    match requested {
        Some(id) => registry.tool(id).cloned().ok_or_else(|| {
            CliError::user(format!(
                "Unknown tool '{}'. Available: {}",
                id,
                registry.list().join(", ")
            ))
        }),
        None if interactive => interactive::select_tool(registry),
        None => Err(CliError::user(format!(
            "No tool given. Pass --tool ({}).",
            registry.list().join(", ")
        ))),
    }
}

fn resolve_kits(catalog: &KitCatalog, requested: Vec<String>, interactive: bool) -> Result<Vec<String>> {
    if !requested.is_empty() {
        return Ok(requested);
    }
    if interactive {
        return interactive::select_kits(catalog);
    }
    Err(CliError::user("No kits given. Pass --kit <id> (see 'kits list-kits')."))
}

fn print_outcome(tool: &AiTool, target_root: &NormalizedPath, rules_path: &NormalizedPath, outcome: &InstallOutcome) {
    match outcome {
        InstallOutcome::Cancelled => {
            println!("{} Install cancelled; nothing was changed.", "=>".yellow().bold());
        }
        InstallOutcome::Skipped => {
            println!(
                "{} Kept the existing installation at {}.",
                "=>".yellow().bold(),
                target_root.as_str().cyan()
            );
        }
        InstallOutcome::Installed(results) => {
            println!(
                "{} Installed for {} into {}",
                "OK".green().bold(),
                tool.name.bold(),
                target_root.as_str().cyan()
            );
            println!();
            for result in results {
                println!(
                    "  {:<16} {} agents, {} skills, {} {}",
                    result.kit.green(),
                    result.agents,
                    result.skills,
                    result.workflows,
                    tool.workflow_folder()
                );
            }
            println!();
            println!("{} {}", "Rules:".dimmed(), rules_path.as_str());
        }
    }
}
