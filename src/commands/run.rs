//! Forward install, uninstall and pass-through verbs to the resolved manager.

use crate::commands::context::CommandContext;
use crate::core::translate;
use crate::error::Result;
use crate::ui as output;
use crate::utils::process;

pub struct RunOptions {
    /// Verb first, then its arguments, exactly as typed.
    pub args: Vec<String>,
}

pub fn run(ctx: &CommandContext, options: RunOptions) -> Result<()> {
    let resolution = ctx.resolve()?;
    let profile = resolution.profile;

    let invocation = translate::translate(profile, &options.args)?;
    output::info(&format!("Using {}...", profile.display_name));

    process::run_for_profile(profile, &invocation, ctx.finder.as_ref())
}
