//! Built-in manager table
//!
//! Order matters: lock-file detection walks this slice front to back.

use crate::core::types::{ExecStyle, ManagerProfile, SearchProvider};
use crate::error::{Result, UniError};

/// Selected when a Homebrew executable is on PATH and nothing project-local matched.
pub const SYSTEM_MANAGER_ID: &str = "brew";

/// Selected when nothing else matched. pkgx runs anything without prior setup.
pub const FALLBACK_MANAGER_ID: &str = "pkgx";

static MANAGERS: &[ManagerProfile] = &[
    // === Node ===
    ManagerProfile {
        id: "npm",
        display_name: "NPM",
        executable: "npm",
        lock_files: &["package-lock.json"],
        project_files: &[],
        init_args: &["init", "-y"],
        install_verb: "install",
        install_all_verb: "install",
        exec_prefix: "npx",
        exec_style: ExecStyle::Standalone,
        uninstall_verb: "uninstall",
        search: Some(SearchProvider::NpmRegistry),
        install_hint: "Install Node.js and npm from https://nodejs.org/",
    },
    ManagerProfile {
        id: "pnpm",
        display_name: "PNPM",
        executable: "pnpm",
        lock_files: &["pnpm-lock.yaml"],
        project_files: &[],
        init_args: &["init"],
        install_verb: "add",
        install_all_verb: "install",
        exec_prefix: "dlx",
        exec_style: ExecStyle::Joined,
        uninstall_verb: "remove",
        search: Some(SearchProvider::NpmRegistry),
        install_hint: "Run: npm install -g pnpm",
    },
    ManagerProfile {
        id: "yarn",
        display_name: "Yarn",
        executable: "yarn",
        lock_files: &["yarn.lock"],
        project_files: &[],
        init_args: &["init", "-y"],
        install_verb: "add",
        install_all_verb: "install",
        exec_prefix: "dlx",
        exec_style: ExecStyle::Joined,
        uninstall_verb: "remove",
        search: Some(SearchProvider::NpmRegistry),
        install_hint: "Run: npm install -g yarn",
    },
    ManagerProfile {
        id: "bun",
        display_name: "Bun",
        executable: "bun",
        lock_files: &["bun.lockb", "bun.lock"],
        project_files: &[],
        init_args: &["init", "-y"],
        install_verb: "add",
        install_all_verb: "install",
        exec_prefix: "bunx",
        exec_style: ExecStyle::Standalone,
        uninstall_verb: "remove",
        search: Some(SearchProvider::NpmRegistry),
        install_hint: "Run: curl -fsSL https://bun.sh/install | bash",
    },
    // === CocoaPods ===
    ManagerProfile {
        id: "pod",
        display_name: "CocoaPods",
        executable: "pod",
        lock_files: &["Podfile.lock"],
        project_files: &["Podfile"],
        init_args: &["init"],
        install_verb: "install",
        install_all_verb: "",
        exec_prefix: "",
        exec_style: ExecStyle::Standalone,
        uninstall_verb: "",
        search: Some(SearchProvider::CocoaPods),
        install_hint: "Run: sudo gem install cocoapods",
    },
    // === System ===
    ManagerProfile {
        id: "brew",
        display_name: "Homebrew",
        executable: "brew",
        lock_files: &[],
        project_files: &[],
        init_args: &[],
        install_verb: "install",
        install_all_verb: "",
        exec_prefix: "",
        exec_style: ExecStyle::Standalone,
        uninstall_verb: "uninstall",
        search: Some(SearchProvider::HomebrewCli),
        install_hint: "Install Homebrew from https://brew.sh/",
    },
    ManagerProfile {
        id: "pkgx",
        display_name: "pkgx",
        executable: "pkgx",
        lock_files: &["pkgx.yaml"],
        project_files: &[],
        init_args: &[],
        install_verb: "install",
        install_all_verb: "",
        exec_prefix: "pkgx",
        exec_style: ExecStyle::Standalone,
        uninstall_verb: "uninstall",
        search: None,
        install_hint: "Run: curl -fsS https://pkgx.sh | sh",
    },
    // === Python ===
    ManagerProfile {
        id: "pip",
        display_name: "Pip",
        executable: "pip",
        lock_files: &["requirements.txt"],
        project_files: &[],
        init_args: &[],
        install_verb: "install",
        install_all_verb: "",
        exec_prefix: "",
        exec_style: ExecStyle::Standalone,
        uninstall_verb: "uninstall",
        search: None,
        install_hint: "Install Python and pip from https://www.python.org/",
    },
    ManagerProfile {
        id: "pipx",
        display_name: "Pipx",
        executable: "pipx",
        lock_files: &["pipx.json"],
        project_files: &[],
        init_args: &[],
        install_verb: "install",
        install_all_verb: "",
        exec_prefix: "",
        exec_style: ExecStyle::Standalone,
        uninstall_verb: "uninstall",
        search: None,
        install_hint: "Run: pip install --user pipx && python -m pipx ensurepath",
    },
    ManagerProfile {
        id: "uv",
        display_name: "uv",
        executable: "uv",
        lock_files: &["uv.lock", "pylock.toml"],
        project_files: &[],
        init_args: &["init"],
        install_verb: "add",
        install_all_verb: "",
        exec_prefix: "",
        exec_style: ExecStyle::Standalone,
        uninstall_verb: "remove",
        search: None,
        install_hint: "Install uv from https://docs.astral.sh/uv",
    },
    // === Go ===
    ManagerProfile {
        id: "go",
        display_name: "Go",
        executable: "go",
        lock_files: &["go.mod"],
        project_files: &[],
        init_args: &[],
        install_verb: "get",
        install_all_verb: "",
        exec_prefix: "",
        exec_style: ExecStyle::Standalone,
        uninstall_verb: "get -u",
        search: None,
        install_hint: "Install Go from https://golang.org/dl/",
    },
];

/// All known managers in detection order.
pub fn all() -> &'static [ManagerProfile] {
    MANAGERS
}

pub fn ids() -> Vec<String> {
    MANAGERS.iter().map(|m| m.id.to_string()).collect()
}

pub fn find(id: &str) -> Option<&'static ManagerProfile> {
    MANAGERS.iter().find(|m| m.id == id)
}

pub fn lookup(id: &str) -> Result<&'static ManagerProfile> {
    find(id).ok_or_else(|| UniError::UnsupportedManager {
        id: id.to_string(),
        supported: ids(),
    })
}
