//! List commands for tools and kits

use colored::Colorize;
use kit_meta::Scope;
use kit_tools::ToolCategory;

use crate::context::CliContext;
use crate::error::Result;

/// Run the list-tools command
pub fn run_list_tools(ctx: &CliContext) -> Result<()> {
    let registry = ctx.registry()?;

    println!("{}", "Available Tools".bold());
    println!();

    let categories = [
        (ToolCategory::Ide, "IDE Tools"),
        (ToolCategory::CliAgent, "CLI Agents"),
        (ToolCategory::Custom, "Custom Tools"),
    ];

    for (cat, label) in categories {
        let tools: Vec<_> = registry
            .by_priority()
            .into_iter()
            .filter(|reg| reg.category == cat)
            .collect();
        if tools.is_empty() {
            continue;
        }

        println!("{}:", label.cyan().bold());
        for reg in tools {
            let layout = if reg.is_schema_divergent() {
                format!("{}/, {}/", reg.tool.path, reg.tool.workflow_folder())
            } else {
                format!("{}/", reg.tool.path)
            };
            println!(
                "  {:<14} {} ({}, rules {})",
                reg.id().green(),
                reg.tool.name,
                layout.dimmed(),
                reg.tool.rules_file.dimmed()
            );
        }
        println!();
    }

    println!(
        "{} {} tools available. Use {} to install a kit.",
        "Total:".dimmed(),
        registry.len(),
        "kits install --tool <id> --kit <kit>".cyan()
    );

    Ok(())
}

/// Run the list-kits command
pub fn run_list_kits(ctx: &CliContext) -> Result<()> {
    let catalog = ctx.catalog()?;

    println!("{} {}", "Kits in".bold(), catalog.root().as_str().cyan());
    println!();

    if catalog.kits().is_empty() {
        println!("  {}", "(none)".dimmed());
        return Ok(());
    }

    for kit in catalog.kits() {
        let marker = if kit.available {
            String::new()
        } else {
            format!(" {}", "(unavailable)".yellow())
        };
        println!("  {:<16} {}{}", kit.id.green(), kit.name, marker);
    }

    if let Some(common) = catalog.common_dir() {
        println!();
        println!("{} {}", "Shared assets:".dimmed(), common.as_str());
    }
    println!();
    println!(
        "{} {} into the workspace, or {} for the home directory.",
        "Install:".dimmed(),
        "kits install -k <kit>".cyan(),
        format!("-s {}", Scope::Global).cyan()
    );

    Ok(())
}
