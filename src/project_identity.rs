//! Central project identity contract.
//!
//! This module is the single source of truth for runtime identity values.
//! Keep `MARKER_FILE` stable: existing projects carry it on disk.

pub const BINARY_NAME: &str = "uni";
pub const TAGLINE: &str = "The Universal Package Manager Wrapper";
pub const ENV_PREFIX: &str = "UNI";
pub const USER_AGENT: &str = concat!("uni-cli/", env!("CARGO_PKG_VERSION"));

/// Per-project file recording the manager chosen by `uni init`.
pub const MARKER_FILE: &str = ".unirc";

pub fn env_key(suffix: &str) -> String {
    format!("{}_{}", ENV_PREFIX, suffix)
}
