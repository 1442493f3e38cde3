//! Agent Kits CLI
//!
//! Installs kits of agents, skills and workflows into AI coding tools.

mod cli;
mod commands;
mod context;
mod error;
mod interactive;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::InstallArgs;
use context::CliContext;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let directive = if cli.verbose { "debug" } else { "warn" };
    if let Err(e) = kit_tools::logging::init(directive) {
        eprintln!("{} could not set up logging: {}", "warning:".yellow().bold(), e);
    }
    tracing::debug!("Kits root: {}", cli.root.display());

    let ctx = CliContext::new(&cli.root);
    match cli.command {
        Some(cmd) => execute_command(&ctx, cmd),
        None => {
            println!("{} Agent kit distributor", "kits".green().bold());
            println!();
            println!("Run {} for available commands.", "kits --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(ctx: &CliContext, cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Install {
            tool,
            scope,
            kits,
            policy,
            workspace,
            json,
        } => {
            let workspace = match workspace {
                Some(path) => path,
                None => std::env::current_dir()?,
            };
            commands::run_install(
                ctx,
                InstallArgs {
                    tool,
                    scope: scope.map(Into::into),
                    kits,
                    policy: policy.map(Into::into),
                    workspace,
                    json,
                },
            )
        }
        Commands::ListTools => commands::run_list_tools(ctx),
        Commands::ListKits => commands::run_list_kits(ctx),
        Commands::Status { kit, json } => commands::run_status(ctx, &kit, json),
        Commands::Validate { kit, json } => commands::run_validate(ctx, &kit, json),
    }
}
