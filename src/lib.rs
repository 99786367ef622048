pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod project_identity;
pub mod traits;
pub mod ui;
pub mod utils;

use clap::Parser;
use std::process::exit;

/// Run uni CLI entrypoint.
pub fn run_cli() {
    // 0. Settings first: color preference must apply before any output
    let (settings, warnings) = config::Settings::from_env();
    ui::init_colors(&settings.color);

    // 1. Signal Handling (the child sees Ctrl-C too; we only record it)
    if let Err(e) = ctrlc::set_handler(move || {
        eprintln!();
        ui::mark_interrupted();
        ui::warning("Operation cancelled by user.");
    }) {
        ui::warning(&format!("Could not install Ctrl-C handler: {}", e));
    }

    // 2. Parse & Run
    let args = cli::args::Cli::parse();
    ui::set_quiet(args.global.quiet);
    ui::set_verbose(args.global.verbose);

    for warning in &warnings {
        ui::warning(warning);
    }

    if let Err(e) = cli::dispatcher::dispatch(&args, settings) {
        if !ui::was_interrupted() {
            ui::error(&format!("{}", e));
            if let Some(hint) = e.hint() {
                ui::hint(&hint);
            }
        }
        exit(e.exit_code());
    }
}
