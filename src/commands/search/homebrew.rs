use super::SearchHit;
use crate::core::types::Invocation;
use crate::error::{Result, UniError};
use crate::ui;
use crate::utils::process;
use serde::Deserialize;
use std::time::{Duration, Instant};

#[derive(Debug, Default, Deserialize)]
struct BrewInfo {
    #[serde(default)]
    formulae: Vec<Formula>,
    #[serde(default)]
    casks: Vec<Cask>,
}

#[derive(Debug, Deserialize)]
struct Formula {
    name: String,
    desc: Option<String>,
    license: Option<String>,
    homepage: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Cask {
    token: String,
    desc: Option<String>,
    homepage: Option<String>,
}

/// `brew search` then `brew info --json=v2` for each listed name.
///
/// All calls share one deadline `timeout` from now. A failing `brew search`
/// means no matches. Names whose info call fails or cannot be parsed are
/// skipped, and names left over when the deadline passes are dropped.
pub(super) fn search(query: &str, limit: usize, timeout: Duration) -> Result<Vec<SearchHit>> {
    let deadline = Instant::now() + timeout;

    let listing = Invocation::new("brew", vec!["search".to_string(), query.to_string()]);
    let output = process::run_captured(&listing, deadline)?;
    if !output.status.success() {
        ui::verbose(&format!("'{}' exited with {}", listing, output.status));
        return Ok(Vec::new());
    }

    let mut hits = Vec::new();
    for name in parse_listing(&String::from_utf8_lossy(&output.stdout))
        .into_iter()
        .take(limit)
    {
        if Instant::now() >= deadline {
            ui::warning(&format!(
                "Homebrew search stopped after {}s; showing partial results",
                timeout.as_secs()
            ));
            break;
        }
        let info = Invocation::new(
            "brew",
            vec!["info".to_string(), "--json=v2".to_string(), name.clone()],
        );
        let output = match process::run_captured(&info, deadline) {
            Ok(output) if output.status.success() => output,
            Ok(_) => continue,
            Err(e) => {
                ui::verbose(&format!("skipping '{}': {}", name, e));
                continue;
            }
        };
        match parse_info(&String::from_utf8_lossy(&output.stdout)) {
            Ok(mut found) => hits.append(&mut found),
            Err(e) => ui::verbose(&format!("skipping '{}': {}", name, e)),
        }
    }

    Ok(hits)
}

/// Package names from `brew search` output, headers and blank lines dropped.
pub(super) fn parse_listing(stdout: &str) -> Vec<String> {
    stdout
        .lines()
        .filter(|line| !line.starts_with("==>"))
        .filter_map(|line| line.split_whitespace().next())
        .map(String::from)
        .collect()
}

pub(super) fn parse_info(body: &str) -> Result<Vec<SearchHit>> {
    let info: BrewInfo = serde_json::from_str(body).map_err(|e| UniError::ParseFailed {
        source_name: "Homebrew".to_string(),
        message: e.to_string(),
    })?;

    let formulae = info.formulae.into_iter().map(|f| SearchHit {
        name: f.name,
        description: f.desc,
        license: f.license,
        kind: Some("Formula".to_string()),
        homepage: f.homepage,
        ..Default::default()
    });
    let casks = info.casks.into_iter().map(|c| SearchHit {
        name: c.token,
        description: c.desc,
        kind: Some("Cask".to_string()),
        homepage: c.homepage,
        ..Default::default()
    });

    Ok(formulae.chain(casks).collect())
}
