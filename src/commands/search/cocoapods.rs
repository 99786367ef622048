use super::SearchHit;
use crate::error::{Result, UniError};
use crate::traits::Transport;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct FlatHashSearch {
    #[serde(default)]
    results: Vec<Pod>,
    #[serde(default)]
    total: u64,
}

#[derive(Debug, Deserialize)]
struct Pod {
    id: String,
    summary: Option<String>,
    version: Option<String>,
    source: Option<PodSource>,
}

#[derive(Debug, Deserialize)]
struct PodSource {
    git: Option<String>,
}

pub(super) fn search_url(base: &str, query: &str, limit: usize) -> Result<String> {
    super::build_url(
        base,
        "/api/v1/pods.flat.hash.json",
        &[("query", query), ("amount", limit.to_string().as_str())],
    )
}

pub(super) fn search(
    transport: &dyn Transport,
    base: &str,
    query: &str,
    limit: usize,
) -> Result<Vec<SearchHit>> {
    let body = transport.get(&search_url(base, query, limit)?)?;
    parse(&body)
}

pub(super) fn parse(body: &str) -> Result<Vec<SearchHit>> {
    let results: FlatHashSearch =
        serde_json::from_str(body).map_err(|e| UniError::ParseFailed {
            source_name: "CocoaPods".to_string(),
            message: e.to_string(),
        })?;

    if results.total == 0 {
        return Ok(Vec::new());
    }

    Ok(results
        .results
        .into_iter()
        .map(|pod| SearchHit {
            name: pod.id,
            description: pod.summary,
            version: pod.version,
            source: pod.source.and_then(|s| s.git),
            ..Default::default()
        })
        .collect())
}
