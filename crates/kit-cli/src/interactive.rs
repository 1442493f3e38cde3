//! Interactive prompts for CLI commands
//!
//! Uses dialoguer for terminal-based selection. Prompts only run when
//! stdin is a terminal; otherwise the caller reports the missing flag.

use dialoguer::{MultiSelect, Select};
use kit_core::{ConflictPolicy, KitCatalog};
use kit_meta::{AiTool, Scope};
use kit_tools::ToolRegistry;
use std::io::IsTerminal;

use crate::error::{CliError, Result};

/// Whether prompts can be shown.
pub fn is_interactive() -> bool {
    std::io::stdin().is_terminal()
}

/// Pick a tool from the registry, in priority order.
pub fn select_tool(registry: &ToolRegistry) -> Result<AiTool> {
    let tools = registry.by_priority();
    let items: Vec<String> = tools
        .iter()
        .map(|reg| format!("{} ({})", reg.tool.name, reg.id()))
        .collect();
    let idx = Select::new()
        .with_prompt("Select a tool")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(tools[idx].tool.clone())
}

pub fn select_scope(tool: &AiTool) -> Result<Scope> {
    let scopes = [Scope::Workspace, Scope::Global];
    let items = [
        format!("Workspace ({}/ in the current directory)", tool.folder(Scope::Workspace)),
        format!("Global (~/{})", tool.folder(Scope::Global)),
    ];
    let idx = Select::new()
        .with_prompt("Install scope")
        .items(&items)
        .default(0)
        .interact()?;
    Ok(scopes[idx])
}

/// Pick one or more available kits.
pub fn select_kits(catalog: &KitCatalog) -> Result<Vec<String>> {
    let kits: Vec<_> = catalog.available().collect();
    if kits.is_empty() {
        return Err(CliError::user(format!("No kits available in {}", catalog.root())));
    }
    let items: Vec<String> = kits.iter().map(|kit| format!("{} ({})", kit.name, kit.id)).collect();
    let indices = MultiSelect::new()
        .with_prompt("Select kits (space to toggle, enter to confirm)")
        .items(&items)
        .interact()?;
    if indices.is_empty() {
        return Err(CliError::user("No kits selected."));
    }
    Ok(indices.into_iter().map(|i| kits[i].id.clone()).collect())
}

pub fn select_policy(target: &str) -> Result<ConflictPolicy> {
    let items: Vec<&str> = ConflictPolicy::ALL.iter().map(|p| p.describe()).collect();
    let idx = Select::new()
        .with_prompt(format!("{target} already exists"))
        .items(&items)
        .default(0)
        .interact()?;
    Ok(ConflictPolicy::ALL[idx])
}
