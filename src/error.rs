use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UniError {
    #[error("Package manager '{id}' is not supported")]
    UnsupportedManager { id: String, supported: Vec<String> },

    #[error("{manager} does not have a standard {operation} command")]
    UnsupportedOperation { manager: String, operation: String },

    #[error("{manager} ({executable}) is not installed or not in your PATH")]
    ExecutableNotFound {
        manager: String,
        executable: String,
        hint: String,
    },

    /// Remote search endpoint unreachable or returned a non-success status
    #[error("Network error: {0}")]
    NetworkFailed(String),

    /// Search response could not be decoded
    #[error("Could not parse {source_name} response: {message}")]
    ParseFailed {
        source_name: String,
        message: String,
    },

    #[error("Command '{command}' exited with status {code}")]
    ChildFailed { command: String, code: i32 },

    #[error("System command '{command}' failed: {reason}")]
    SystemCommandFailed { command: String, reason: String },

    #[error("IO error at '{path}': {source}")]
    IoError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl UniError {
    /// Process exit code for this failure. Child failures mirror the child.
    pub fn exit_code(&self) -> i32 {
        match self {
            UniError::ChildFailed { code, .. } if *code != 0 => *code,
            _ => 1,
        }
    }

    /// Advisory text shown under the error message, if any.
    pub fn hint(&self) -> Option<String> {
        match self {
            UniError::ExecutableNotFound { hint, .. } if !hint.is_empty() => Some(hint.clone()),
            UniError::UnsupportedManager { supported, .. } if !supported.is_empty() => {
                Some(format!("Supported managers: {}", supported.join(", ")))
            }
            _ => None,
        }
    }

    /// Search failures are reported as warnings instead of aborting.
    pub fn is_search_warning(&self) -> bool {
        matches!(
            self,
            UniError::NetworkFailed(_) | UniError::ParseFailed { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, UniError>;
