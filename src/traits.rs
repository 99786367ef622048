//! Core traits for dependency injection and testability
//!
//! Resolution and search touch the outside world in two places: PATH lookups
//! and HTTP GETs. Both sit behind a trait so tests can run without either.

use crate::error::{Result, UniError};
use std::path::PathBuf;
use std::time::Duration;

/// Trait for locating executables
pub trait ExecutableFinder {
    /// Full path of `name` if it resolves on the search path.
    fn find(&self, name: &str) -> Option<PathBuf>;

    fn exists(&self, name: &str) -> bool {
        self.find(name).is_some()
    }
}

/// `PATH` lookup backed by the `which` crate
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemPath;

impl ExecutableFinder for SystemPath {
    fn find(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}

/// Trait for fetching remote documents
pub trait Transport {
    /// GET `url` and return the body. Non-success statuses are errors.
    fn get(&self, url: &str) -> Result<String>;
}

/// Blocking reqwest client with a fixed request timeout
pub struct HttpTransport {
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .user_agent(crate::project_identity::USER_AGENT)
            .build()
            .map_err(|e| UniError::NetworkFailed(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &str) -> Result<String> {
        let resp = self
            .client
            .get(url)
            .send()
            .map_err(|e| UniError::NetworkFailed(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(UniError::NetworkFailed(format!("{} returned {}", url, status)));
        }

        resp.text()
            .map_err(|e| UniError::NetworkFailed(format!("failed to read body: {}", e)))
    }
}
