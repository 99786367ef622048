use super::SearchHit;
use crate::error::{Result, UniError};
use crate::traits::Transport;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct RegistrySearch {
    #[serde(default)]
    objects: Vec<RegistryObject>,
}

#[derive(Debug, Deserialize)]
struct RegistryObject {
    package: RegistryPackage,
}

#[derive(Debug, Deserialize)]
struct RegistryPackage {
    name: String,
    description: Option<String>,
    version: Option<String>,
    #[serde(default)]
    links: Links,
    author: Option<Author>,
}

#[derive(Debug, Default, Deserialize)]
struct Links {
    homepage: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Author {
    name: Option<String>,
}

pub(super) fn search_url(base: &str, query: &str, limit: usize) -> Result<String> {
    super::build_url(
        base,
        "/-/v1/search",
        &[("text", query), ("size", limit.to_string().as_str())],
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
    let results: RegistrySearch =
        serde_json::from_str(body).map_err(|e| UniError::ParseFailed {
            source_name: "NPM".to_string(),
            message: e.to_string(),
        })?;

    Ok(results
        .objects
        .into_iter()
        .map(|object| {
            let pkg = object.package;
            SearchHit {
                name: pkg.name,
                description: pkg.description,
                version: pkg.version,
                homepage: pkg.links.homepage,
                author: pkg.author.and_then(|a| a.name),
                ..Default::default()
            }
        })
        .collect())
}
