//! `uni init <manager>`
//!
//! Pins a manager for the working directory by writing the marker file, then
//! runs the manager's own project scaffolding if it has one.

use crate::commands::context::CommandContext;
use crate::core::registry;
use crate::core::translate;
use crate::error::{Result, UniError};
use crate::project_identity::MARKER_FILE;
use crate::ui as output;
use crate::utils::process;
use std::fs;
use std::path::{Path, PathBuf};

pub struct InitOptions {
    pub manager: String,
}

pub fn run(ctx: &CommandContext, options: InitOptions) -> Result<()> {
    let profile = registry::lookup(options.manager.trim())?;

    output::success(&format!("Initializing new {} project...", profile.display_name));
    let marker = write_marker(&ctx.cwd, profile.id)?;
    output::success(&format!(
        "Created '{}' to use {} in this directory.",
        MARKER_FILE, profile.display_name
    ));
    output::verbose(&format!("marker: {}", marker.display()));

    if let Some(invocation) = translate::init_invocation(profile) {
        output::info(&format!("Running '{}'...", invocation));
        process::run_for_profile(profile, &invocation, ctx.finder.as_ref())?;
    }

    Ok(())
}

/// Write the marker naming `id`. Overwrites an existing marker.
pub fn write_marker(dir: &Path, id: &str) -> Result<PathBuf> {
    let path = dir.join(MARKER_FILE);
    fs::write(&path, format!("{}\n", id)).map_err(|e| UniError::IoError {
        path: path.clone(),
        source: e,
    })?;
    Ok(path)
}
