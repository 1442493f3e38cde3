//! Status command: what a kit contains

use colored::Colorize;
use kit_core::{Error as CoreError, KitInventory};

use crate::context::CliContext;
use crate::error::Result;

pub fn run_status(ctx: &CliContext, kit_id: &str, json: bool) -> Result<()> {
    let catalog = ctx.catalog()?;
    let kit = catalog.get(kit_id).ok_or_else(|| CoreError::KitNotFound { id: kit_id.to_string() })?;
    let inventory = KitInventory::scan(&kit.source())?;

    if json {
        println!("{}", serde_json::to_string_pretty(&inventory)?);
        return Ok(());
    }

    println!("{} {} ({})", "Kit".bold(), kit.name.bold(), kit.id.cyan());
    println!();

    println!("{} ({}):", "Agents".cyan().bold(), inventory.agents.len());
    for agent in &inventory.agents {
        println!("  {:<24} {}", agent.name.green(), agent.description);
        if !agent.skills.is_empty() {
            println!("  {:<24} {}", "", format!("skills: {}", agent.skills.join(", ")).dimmed());
        }
    }
    println!();

    println!("{} ({}):", "Skills".cyan().bold(), inventory.skills.len());
    for skill in &inventory.skills {
        let scripts = if skill.has_scripts { " [scripts]" } else { "" };
        println!("  {:<24} {}{}", skill.name.green(), skill.description, scripts.dimmed());
    }
    println!();

    println!("{} ({}):", "Workflows".cyan().bold(), inventory.workflows.len());
    for workflow in &inventory.workflows {
        println!("  {:<24} {}", workflow.command.green(), workflow.description);
    }

    let missing = inventory.missing_skills();
    if !missing.is_empty() {
        println!();
        for (agent, skill) in missing {
            println!(
                "{} agent '{}' references missing skill '{}'",
                "warning:".yellow().bold(),
                agent,
                skill
            );
        }
    }

    Ok(())
}
