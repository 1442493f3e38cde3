//! Validate command: structural checks on a kit source

use colored::Colorize;
use kit_core::{Error as CoreError, KitValidator, Severity};

use crate::context::CliContext;
use crate::error::{CliError, Result};

/// Validate a kit. Fails when any finding is an error.
pub fn run_validate(ctx: &CliContext, kit_id: &str, json: bool) -> Result<()> {
    let catalog = ctx.catalog()?;
    let kit = catalog.get(kit_id).ok_or_else(|| CoreError::KitNotFound { id: kit_id.to_string() })?;
    let report = KitValidator::new()
        .with_shared_skills(catalog.common_dir())
        .validate(kit)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{} {}", "Validating".bold(), kit.id.cyan());
        println!();
        for finding in &report.findings {
            let label = match finding.severity {
                Severity::Error => "error".red().bold(),
                Severity::Warning => "warning".yellow().bold(),
                Severity::Info => "info".blue(),
            };
            println!("  {:<8} [{}] {}", label, finding.category.dimmed(), finding.message);
        }
        if !report.findings.is_empty() {
            println!();
        }
        let stats = &report.stats;
        println!(
            "{} {} agents, {} skills, {} workflows, {}/{} rules variants",
            "Stats:".dimmed(),
            stats.agents,
            stats.skills,
            stats.workflows,
            stats.rule_files,
            stats.required_rule_files
        );
    }

    let errors = report.count(Severity::Error);
    if errors > 0 {
        return Err(CliError::user(format!(
            "Kit '{}' failed validation with {} error(s)",
            kit.id, errors
        )));
    }
    if !json {
        println!(
            "{} Kit '{}' passed ({} warning(s))",
            "OK".green().bold(),
            kit.id,
            report.count(Severity::Warning)
        );
    }
    Ok(())
}
