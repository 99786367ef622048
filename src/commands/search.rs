//! Package search command
//!
//! Managers with a structured search source (npm registry, CocoaPods API,
//! Homebrew's JSON CLI) get a uniform listing. Everything else falls back to
//! the manager's own `search` subcommand.

mod cocoapods;
mod homebrew;
mod npm;
mod render;

use crate::config::Settings;
use crate::core::translate;
use crate::core::types::{Invocation, ManagerProfile, Resolution, SearchProvider};
use crate::error::{Result, UniError};
use crate::traits::{ExecutableFinder, HttpTransport, Transport};
use crate::ui as output;
use crate::utils::process;
use std::time::Duration;

pub use render::render;

pub struct SearchOptions {
    pub query: String,
    pub limit: usize,
    pub timeout: Duration,
    pub npm_registry_url: String,
    pub cocoapods_search_url: String,
}

impl SearchOptions {
    pub fn new(query: String, settings: &Settings) -> Self {
        Self {
            query,
            limit: settings.search_limit,
            timeout: settings.http_timeout,
            npm_registry_url: settings.npm_registry_url.clone(),
            cocoapods_search_url: settings.cocoapods_search_url.clone(),
        }
    }
}

/// One package in a search listing. Every field but `name` is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHit {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
    pub license: Option<String>,
    pub kind: Option<String>,
    pub homepage: Option<String>,
    pub source: Option<String>,
    pub author: Option<String>,
}

/// How a search will be carried out for a given manager.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchPlan {
    Api(SearchProvider),
    Native(Invocation),
}

pub fn plan(profile: &ManagerProfile, query: &str) -> Result<SearchPlan> {
    match profile.search {
        Some(provider) => Ok(SearchPlan::Api(provider)),
        None => translate::native_search_invocation(profile, query).map(SearchPlan::Native),
    }
}

/// Terminal states of a structured query.
#[derive(Debug)]
pub enum SearchOutcome {
    Parsed(Vec<SearchHit>),
    ParseFailed(String),
    NetworkFailed(String),
    CommandFailed(String),
}

impl From<Result<Vec<SearchHit>>> for SearchOutcome {
    fn from(result: Result<Vec<SearchHit>>) -> Self {
        match result {
            Ok(hits) => SearchOutcome::Parsed(hits),
            Err(e @ UniError::ParseFailed { .. }) => SearchOutcome::ParseFailed(e.to_string()),
            Err(UniError::NetworkFailed(msg)) => SearchOutcome::NetworkFailed(msg),
            Err(e) => SearchOutcome::CommandFailed(e.to_string()),
        }
    }
}

/// Issue the query for `provider` and parse the response.
pub fn query(
    provider: SearchProvider,
    options: &SearchOptions,
    transport: &dyn Transport,
) -> SearchOutcome {
    let result = match provider {
        SearchProvider::NpmRegistry => npm::search(
            transport,
            &options.npm_registry_url,
            &options.query,
            options.limit,
        ),
        SearchProvider::CocoaPods => cocoapods::search(
            transport,
            &options.cocoapods_search_url,
            &options.query,
            options.limit,
        ),
        SearchProvider::HomebrewCli => {
            homebrew::search(&options.query, options.limit, options.timeout)
        }
    };
    SearchOutcome::from(result)
}

fn build_url(base: &str, path: &str, params: &[(&str, &str)]) -> Result<String> {
    let endpoint = format!("{}{}", base.trim_end_matches('/'), path);
    reqwest::Url::parse_with_params(&endpoint, params)
        .map(String::from)
        .map_err(|e| UniError::NetworkFailed(format!("invalid search URL '{}': {}", endpoint, e)))
}

/// Print a finished outcome. Failures are warnings, never errors.
pub fn report(outcome: &SearchOutcome, query: &str) {
    match outcome {
        SearchOutcome::Parsed(hits) => print!("{}", render(hits, query)),
        SearchOutcome::ParseFailed(msg) => output::warning(&format!("Search failed: {}", msg)),
        SearchOutcome::NetworkFailed(msg) => {
            output::warning(&format!("Search failed: network error: {}", msg))
        }
        SearchOutcome::CommandFailed(msg) => output::warning(&format!("Search failed: {}", msg)),
    }
}

pub fn run(
    resolution: &Resolution,
    options: SearchOptions,
    finder: &dyn ExecutableFinder,
) -> Result<()> {
    let profile = resolution.profile;

    match plan(profile, &options.query)? {
        SearchPlan::Native(invocation) => {
            output::warning(&format!(
                "{} does not support API search. Falling back to CLI.",
                profile.display_name
            ));
            process::run_for_profile(profile, &invocation, finder)
        }
        SearchPlan::Api(provider) => {
            if provider == SearchProvider::HomebrewCli {
                let probe = Invocation::new(profile.executable, Vec::new());
                process::ensure_executable(profile, &probe, finder)?;
            }

            output::info(&format!(
                "Searching for '{}' using {}...",
                options.query, profile.display_name
            ));
            output::verbose(&format!("source: {}", provider));

            let outcome = match HttpTransport::new(options.timeout) {
                Ok(transport) => query(provider, &options, &transport),
                Err(e) => SearchOutcome::from(Err(e)),
            };
            report(&outcome, &options.query);
            Ok(())
        }
    }
}
