use crate::core::registry::{self, FALLBACK_MANAGER_ID, SYSTEM_MANAGER_ID};
use crate::core::types::{Resolution, ResolutionSource};
use crate::error::{Result, UniError};
use crate::project_identity::MARKER_FILE;
use crate::traits::ExecutableFinder;
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Everything resolution looks at, captured once per invocation.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext {
    pub dir: PathBuf,
    pub override_id: Option<String>,
    /// Raw marker file contents, if the file could be read.
    pub marker: Option<String>,
    /// Entry names present in `dir`.
    pub files: BTreeSet<String>,
}

impl ResolutionContext {
    /// Snapshot `dir`. Unreadable marker or directory counts as absent.
    pub fn load(dir: &Path, override_id: Option<String>) -> Self {
        let marker = fs::read_to_string(dir.join(MARKER_FILE)).ok();

        let files = fs::read_dir(dir)
            .map(|entries| {
                entries
                    .filter_map(|entry| entry.ok())
                    .filter_map(|entry| entry.file_name().into_string().ok())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            dir: dir.to_path_buf(),
            override_id,
            marker,
            files,
        }
    }

    pub fn has_file(&self, name: &str) -> bool {
        self.files.contains(name)
    }

    /// Trimmed marker contents, `None` when missing or blank.
    pub fn marker_id(&self) -> Option<&str> {
        self.marker
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())
    }
}

/// Pick exactly one manager.
///
/// Precedence: override, marker file, lock/project files, system manager on
/// PATH, fallback. Only an unknown override can fail.
pub fn resolve(ctx: &ResolutionContext, finder: &dyn ExecutableFinder) -> Result<Resolution> {
    if let Some(id) = ctx.override_id.as_deref() {
        let profile = registry::lookup(id.trim())?;
        return Ok(Resolution {
            profile,
            source: ResolutionSource::Override,
        });
    }

    if let Some(profile) = ctx.marker_id().and_then(registry::find) {
        return Ok(Resolution {
            profile,
            source: ResolutionSource::Marker,
        });
    }

    if let Some(resolution) = detect_from_files(ctx) {
        return Ok(resolution);
    }

    if finder.exists(SYSTEM_MANAGER_ID) {
        return Ok(Resolution {
            profile: fixed(SYSTEM_MANAGER_ID)?,
            source: ResolutionSource::SystemManager,
        });
    }

    Ok(Resolution {
        profile: fixed(FALLBACK_MANAGER_ID)?,
        source: ResolutionSource::Fallback,
    })
}

fn detect_from_files(ctx: &ResolutionContext) -> Option<Resolution> {
    for profile in registry::all() {
        if let Some(lock) = profile.lock_files.iter().find(|f| ctx.has_file(f)) {
            return Some(Resolution {
                profile,
                source: ResolutionSource::LockFile(lock.to_string()),
            });
        }
        if let Some(project) = profile.project_files.iter().find(|f| ctx.has_file(f)) {
            return Some(Resolution {
                profile,
                source: ResolutionSource::ProjectFile(project.to_string()),
            });
        }
    }
    None
}

fn fixed(id: &str) -> Result<&'static crate::core::types::ManagerProfile> {
    registry::find(id)
        .ok_or_else(|| UniError::Other(format!("built-in manager '{}' missing from registry", id)))
}
