use crate::project_identity;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

#[derive(Parser, Debug)]
#[command(
    name = project_identity::BINARY_NAME,
    about = project_identity::TAGLINE,
    long_about = "The Universal Package Manager Wrapper.\n\nDetects the package manager a project uses (from --pkg, a .unirc file, \
                  or lock files) and forwards install, uninstall, search and exec \
                  commands to it. Unknown commands are passed through unchanged.",
    version,
    disable_help_subcommand = true,
    next_line_help = false,
    term_width = 80
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalFlags,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Parser, Debug)]
pub struct GlobalFlags {
    /// Use this package manager instead of detecting one
    #[arg(long = "pkg", value_name = "MANAGER", global = true)]
    pub pkg: Option<String>,

    /// Verbose output (only before the command; later flags go to the manager)
    #[arg(short = 'v', long)]
    pub verbose: bool,

    /// Quiet mode (only before the command)
    #[arg(short = 'q', long)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Install packages, or all project dependencies when none are given
    #[command(visible_aliases = ["i", "add"])]
    Install {
        /// Packages and extra flags for the manager
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Remove packages
    #[command(visible_aliases = ["remove", "rm", "un"])]
    Uninstall {
        /// Packages and extra flags for the manager
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Search the manager's registry
    #[command(visible_alias = "s")]
    Search {
        /// Search terms (joined with spaces)
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Pin a package manager for this directory (.unirc)
    Init {
        /// Manager id, e.g. npm, pnpm, yarn, bun, pod, uv
        manager: String,
    },

    /// Run a package binary without installing it (npx, pnpm dlx, bunx, ...)
    #[command(visible_alias = "x")]
    Exec {
        /// Command and its arguments
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
    },

    /// List supported package managers
    Managers {
        /// Output format: table or json
        #[arg(long, value_name = "FORMAT")]
        format: Option<String>,
    },

    /// Show which package manager would be used here and why
    Which,

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Any other command is passed to the package manager unchanged
    #[command(external_subcommand)]
    External(Vec<String>),
}
