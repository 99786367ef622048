//! `uni x <command>`: run a package binary without installing it.

use crate::commands::context::CommandContext;
use crate::core::translate;
use crate::error::Result;
use crate::ui as output;
use crate::utils::process;

pub struct ExecOptions {
    pub command: Vec<String>,
}

pub fn run(ctx: &CommandContext, options: ExecOptions) -> Result<()> {
    let resolution = ctx.resolve()?;
    let profile = resolution.profile;

    let invocation = translate::exec_invocation(profile, &options.command)?;
    output::info(&format!(
        "Executing command: {} {}",
        profile.exec_prefix,
        options.command.join(" ")
    ));

    process::run_for_profile(profile, &invocation, ctx.finder.as_ref())
}
