//! Per-invocation state shared by the manager-facing commands.

use crate::config::Settings;
use crate::core::resolver::{self, ResolutionContext};
use crate::core::types::{Resolution, ResolutionSource};
use crate::error::{Result, UniError};
use crate::project_identity::MARKER_FILE;
use crate::traits::{ExecutableFinder, SystemPath};
use crate::ui as output;
use std::path::PathBuf;

pub struct CommandContext {
    pub settings: Settings,
    pub cwd: PathBuf,
    pub override_id: Option<String>,
    pub finder: Box<dyn ExecutableFinder>,
}

impl CommandContext {
    pub fn new(settings: Settings, override_id: Option<String>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| UniError::IoError {
            path: PathBuf::from("."),
            source: e,
        })?;

        Ok(Self {
            settings,
            cwd,
            override_id,
            finder: Box::new(SystemPath),
        })
    }

    /// Resolve the manager for the working directory and say how it was chosen.
    pub fn resolve(&self) -> Result<Resolution> {
        let ctx = ResolutionContext::load(&self.cwd, self.override_id.clone());
        let resolution = resolver::resolve(&ctx, self.finder.as_ref())?;
        announce(&resolution);
        Ok(resolution)
    }
}

fn announce(resolution: &Resolution) {
    let name = resolution.profile.display_name;
    match &resolution.source {
        ResolutionSource::Override => {
            output::verbose(&format!("Using {} (--pkg override)", name))
        }
        ResolutionSource::Marker => output::info(&format!(
            "Found '{}' config file, using {}.",
            MARKER_FILE, name
        )),
        ResolutionSource::LockFile(file) => {
            output::info(&format!("Found '{}' lock file, using {}.", file, name))
        }
        ResolutionSource::ProjectFile(file) => {
            output::info(&format!("Found '{}' project file, using {}.", file, name))
        }
        ResolutionSource::SystemManager | ResolutionSource::Fallback => output::info(&format!(
            "No project file detected, falling back to system package manager ({}).",
            name
        )),
    }
}
