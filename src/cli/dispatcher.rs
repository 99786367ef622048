//! Command dispatcher
//!
//! Routes CLI commands to their appropriate handlers.

use crate::cli::args::{Cli, Command};
use crate::commands;
use crate::commands::context::CommandContext;
use crate::config::Settings;
use crate::error::{Result, UniError};
use crate::traits::SystemPath;
use clap::CommandFactory;

/// Dispatch the parsed CLI command to the appropriate handler
pub fn dispatch(args: &Cli, settings: Settings) -> Result<()> {
    let Some(command) = &args.command else {
        return print_help();
    };
    let context = |settings| CommandContext::new(settings, args.global.pkg.clone());

    match command {
        Command::Install { args } => commands::run::run(
            &context(settings)?,
            commands::run::RunOptions {
                args: verb_args("install", args),
            },
        ),
        Command::Uninstall { args } => commands::run::run(
            &context(settings)?,
            commands::run::RunOptions {
                args: verb_args("uninstall", args),
            },
        ),
        Command::External(args) => commands::run::run(
            &context(settings)?,
            commands::run::RunOptions { args: args.clone() },
        ),
        Command::Search { query } => {
            let ctx = context(settings)?;
            let resolution = ctx.resolve()?;
            let options = commands::search::SearchOptions::new(query.join(" "), &ctx.settings);
            commands::search::run(&resolution, options, ctx.finder.as_ref())
        }
        Command::Init { manager } => commands::init::run(
            &context(settings)?,
            commands::init::InitOptions {
                manager: manager.clone(),
            },
        ),
        Command::Exec { command } => commands::exec::run(
            &context(settings)?,
            commands::exec::ExecOptions {
                command: command.clone(),
            },
        ),
        Command::Which => commands::which::run(&context(settings)?),
        Command::Managers { format } => commands::managers::run(
            commands::managers::ManagersOptions {
                format: format.clone(),
            },
            &SystemPath,
        ),
        Command::Completions { shell } => commands::completions::run(*shell),
    }
}

/// Canonical verb followed by the user's arguments.
fn verb_args(verb: &str, rest: &[String]) -> Vec<String> {
    std::iter::once(verb.to_string())
        .chain(rest.iter().cloned())
        .collect()
}

fn print_help() -> Result<()> {
    Cli::command()
        .print_help()
        .map_err(|e| UniError::Other(format!("Failed to print help: {}", e)))?;
    println!();
    Ok(())
}
