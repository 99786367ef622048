//! Verb translation
//!
//! Turns manager-agnostic argument vectors into concrete invocations. Nothing
//! here spawns a process.

use crate::core::types::{ExecStyle, Invocation, ManagerProfile};
use crate::error::{Result, UniError};

pub const INSTALL_ALIASES: &[&str] = &["install", "i", "add"];
pub const UNINSTALL_ALIASES: &[&str] = &["uninstall", "remove", "rm", "un"];

/// Rewrite the leading verb of `args` for `profile`.
///
/// Install and uninstall aliases are substituted; every other verb passes
/// through untouched so manager-specific subcommands keep working.
pub fn translate(profile: &ManagerProfile, args: &[String]) -> Result<Invocation> {
    let Some((verb, rest)) = args.split_first() else {
        return Ok(Invocation::new(profile.executable, Vec::new()));
    };

    let replacement = if INSTALL_ALIASES.contains(&verb.as_str()) {
        if rest.is_empty() && !profile.install_all_verb.is_empty() {
            profile.install_all_verb
        } else if profile.install_verb.is_empty() {
            return Err(unsupported(profile, "install"));
        } else {
            profile.install_verb
        }
    } else if UNINSTALL_ALIASES.contains(&verb.as_str()) {
        if profile.uninstall_verb.is_empty() {
            return Err(unsupported(profile, "uninstall"));
        }
        profile.uninstall_verb
    } else {
        return Ok(Invocation::new(profile.executable, args.to_vec()));
    };

    // Multi-word verbs such as `get -u` become separate tokens.
    let mut translated: Vec<String> = replacement.split_whitespace().map(String::from).collect();
    translated.extend(rest.iter().cloned());

    Ok(Invocation::new(profile.executable, translated))
}

/// Invocation running `command` through the manager's execution prefix.
pub fn exec_invocation(profile: &ManagerProfile, command: &[String]) -> Result<Invocation> {
    if !profile.has_exec() {
        return Err(unsupported(profile, "exec"));
    }

    let invocation = match profile.exec_style {
        ExecStyle::Standalone => Invocation::new(profile.exec_prefix, command.to_vec()),
        ExecStyle::Joined => {
            let mut joined = String::from(profile.exec_prefix);
            for part in command {
                joined.push(' ');
                joined.push_str(part);
            }
            Invocation::new(profile.executable, vec![joined])
        }
    };

    Ok(invocation)
}

/// Project scaffolding command run by `init`, if the manager has one.
pub fn init_invocation(profile: &ManagerProfile) -> Option<Invocation> {
    if profile.init_args.is_empty() {
        return None;
    }
    Some(Invocation::new(
        profile.executable,
        profile.init_args.iter().map(|a| a.to_string()).collect(),
    ))
}

/// Native `search` subcommand for managers without a structured search source.
pub fn native_search_invocation(profile: &ManagerProfile, query: &str) -> Result<Invocation> {
    translate(profile, &["search".to_string(), query.to_string()])
}

fn unsupported(profile: &ManagerProfile, operation: &str) -> UniError {
    UniError::UnsupportedOperation {
        manager: profile.display_name.to_string(),
        operation: operation.to_string(),
    }
}
