//! `uni which`: show the manager that would handle a command here, and why.

use crate::commands::context::CommandContext;
use crate::core::resolver::{self, ResolutionContext};
use crate::error::Result;
use crate::ui as output;

pub fn run(ctx: &CommandContext) -> Result<()> {
    let resolution_ctx = ResolutionContext::load(&ctx.cwd, ctx.override_id.clone());
    let resolution = resolver::resolve(&resolution_ctx, ctx.finder.as_ref())?;
    let profile = resolution.profile;

    output::keyval("Manager", &format!("{} ({})", profile.display_name, profile.id));
    output::keyval("Selected by", &resolution.source.to_string());
    match ctx.finder.find(profile.executable) {
        Some(path) => output::keyval("Executable", &path.display().to_string()),
        None => {
            output::keyval("Executable", &format!("{} (not found)", profile.executable));
            output::hint(profile.install_hint);
        }
    }

    Ok(())
}
