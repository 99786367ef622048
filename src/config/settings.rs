//! Settings Module
//!
//! Runtime settings (color, HTTP timeout, search limit, registry endpoints)
//! read from `UNI_*` environment variables.

use crate::error::{Result, UniError};
use crate::project_identity;
use std::time::Duration;

pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SEARCH_LIMIT: usize = 10;
pub const MAX_SEARCH_LIMIT: usize = 250;
pub const DEFAULT_NPM_REGISTRY: &str = "https://registry.npmjs.org";
pub const DEFAULT_COCOAPODS_SEARCH: &str = "https://search.cocoapods.org";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub color: String,
    pub http_timeout: Duration,
    pub search_limit: usize,
    pub npm_registry_url: String,
    pub cocoapods_search_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: "auto".to_string(),
            http_timeout: Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            search_limit: DEFAULT_SEARCH_LIMIT,
            npm_registry_url: DEFAULT_NPM_REGISTRY.to_string(),
            cocoapods_search_url: DEFAULT_COCOAPODS_SEARCH.to_string(),
        }
    }
}

impl Settings {
    /// Load settings from the process environment.
    ///
    /// Returns the settings plus one warning per rejected value; rejected
    /// values keep their default.
    pub fn from_env() -> (Self, Vec<String>) {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> (Self, Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();
        let mut warnings = Vec::new();

        if lookup("NO_COLOR").is_some_and(|v| !v.is_empty()) {
            settings.color = "never".to_string();
        }

        for key in ["COLOR", "HTTP_TIMEOUT", "SEARCH_LIMIT", "NPM_REGISTRY", "COCOAPODS_SEARCH"] {
            let env_name = project_identity::env_key(key);
            let Some(value) = lookup(&env_name) else {
                continue;
            };
            if let Err(e) = settings.apply(key, value.trim()) {
                warnings.push(format!("Ignoring {}: {}", env_name, e));
            }
        }

        (settings, warnings)
    }

    fn apply(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "COLOR" => {
                let valid = ["auto", "always", "never"];
                if !valid.contains(&value) {
                    return Err(invalid_value(value, &valid.join(", ")));
                }
                self.color = value.to_string();
            }
            "HTTP_TIMEOUT" => {
                let secs: u64 = value
                    .parse()
                    .map_err(|_| invalid_value(value, "a whole number of seconds"))?;
                if secs == 0 {
                    return Err(invalid_value(value, "a timeout greater than 0"));
                }
                self.http_timeout = Duration::from_secs(secs);
            }
            "SEARCH_LIMIT" => {
                let limit: usize = value
                    .parse()
                    .map_err(|_| invalid_value(value, "a number"))?;
                if !(1..=MAX_SEARCH_LIMIT).contains(&limit) {
                    return Err(invalid_value(
                        value,
                        &format!("a limit between 1 and {}", MAX_SEARCH_LIMIT),
                    ));
                }
                self.search_limit = limit;
            }
            "NPM_REGISTRY" => self.npm_registry_url = validate_url(value)?,
            "COCOAPODS_SEARCH" => self.cocoapods_search_url = validate_url(value)?,
            _ => return Err(UniError::Other(format!("Unknown setting: '{}'", key))),
        }

        Ok(())
    }
}

fn invalid_value(value: &str, expected: &str) -> UniError {
    UniError::Other(format!("invalid value '{}', expected {}", value, expected))
}

fn validate_url(value: &str) -> Result<String> {
    if !(value.starts_with("https://") || value.starts_with("http://")) {
        return Err(invalid_value(value, "an http(s) URL"));
    }
    Ok(value.trim_end_matches('/').to_string())
}
