use std::fmt;

/// How a manager runs a package binary without installing it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStyle {
    /// The prefix is its own program: `npx cowsay hi`.
    Standalone,
    /// The manager executable receives the prefix and the command as ONE
    /// argument: `pnpm "dlx cowsay hi"`.
    Joined,
}

/// Where structured search results come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchProvider {
    /// registry.npmjs.org search endpoint
    NpmRegistry,
    /// search.cocoapods.org flat hash endpoint
    CocoaPods,
    /// `brew search` + `brew info --json=v2`
    HomebrewCli,
}

impl fmt::Display for SearchProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NpmRegistry => write!(f, "npm registry"),
            Self::CocoaPods => write!(f, "CocoaPods search API"),
            Self::HomebrewCli => write!(f, "brew info --json"),
        }
    }
}

/// Static description of one package manager.
///
/// Empty verbs mean "not available for this manager".
#[derive(Debug, PartialEq, Eq)]
pub struct ManagerProfile {
    pub id: &'static str,
    pub display_name: &'static str,
    pub executable: &'static str,
    pub lock_files: &'static [&'static str],
    /// Descriptor files that count as a match even without a lock file.
    pub project_files: &'static [&'static str],
    pub init_args: &'static [&'static str],
    pub install_verb: &'static str,
    pub install_all_verb: &'static str,
    pub exec_prefix: &'static str,
    pub exec_style: ExecStyle,
    pub uninstall_verb: &'static str,
    pub search: Option<SearchProvider>,
    pub install_hint: &'static str,
}

impl ManagerProfile {
    pub fn supports_search_api(&self) -> bool {
        self.search.is_some()
    }

    pub fn has_exec(&self) -> bool {
        !self.exec_prefix.is_empty()
    }
}

impl fmt::Display for ManagerProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name)
    }
}

/// Which precedence level picked the manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    Override,
    Marker,
    LockFile(String),
    ProjectFile(String),
    SystemManager,
    Fallback,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Override => write!(f, "--pkg override"),
            Self::Marker => write!(f, "{} marker file", crate::project_identity::MARKER_FILE),
            Self::LockFile(name) => write!(f, "lock file '{}'", name),
            Self::ProjectFile(name) => write!(f, "project file '{}'", name),
            Self::SystemManager => write!(f, "system package manager on PATH"),
            Self::Fallback => write!(f, "default fallback"),
        }
    }
}

/// Outcome of manager resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub profile: &'static ManagerProfile,
    pub source: ResolutionSource,
}

/// A concrete program + argument vector, ready to spawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

impl Invocation {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Shell-quoted rendering for echo and error messages.
    pub fn command_line(&self) -> String {
        let parts = std::iter::once(self.program.as_str()).chain(self.args.iter().map(String::as_str));
        shlex::try_join(parts).unwrap_or_else(|_| {
            std::iter::once(self.program.clone())
                .chain(self.args.iter().cloned())
                .collect::<Vec<_>>()
                .join(" ")
        })
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.command_line())
    }
}
