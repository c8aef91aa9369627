use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::process::Stdio;
use thiserror::Error;
use tokio::process::Command;
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::models::{Description, SearchResult};

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("result count must be greater than 0")]
    InvalidCount,

    #[error("failed to run search provider `{binary}`: {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },

    #[error("search provider exited with {status}: {stderr}")]
    Provider { status: String, stderr: String },

    #[error("malformed provider output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Keyword search against an external video platform.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Up to `count` listing entries for `query`, in provider order.
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchResult>, SearchError>;

    async fn version(&self) -> Result<String, SearchError>;
}

#[derive(Debug, Deserialize)]
struct Listing {
    #[serde(default)]
    entries: Option<Vec<Option<ListingEntry>>>,
}

#[derive(Debug, Deserialize)]
struct ListingEntry {
    title: Option<String>,
    url: Option<String>,
    webpage_url: Option<String>,
    view_count: Option<u64>,
    /// Outer `None` when the key is absent, inner `None` for `null`.
    #[serde(default, deserialize_with = "present")]
    description: Option<Option<String>>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

/// Parses a flat-playlist JSON document. A missing `entries` key is an
/// empty result, not an error.
pub fn parse_listing(raw: &[u8]) -> Result<Vec<SearchResult>, SearchError> {
    let listing: Listing = serde_json::from_slice(raw)?;

    let results = listing
        .entries
        .unwrap_or_default()
        .into_iter()
        .flatten()
        .filter_map(|entry| {
            let url = entry.url.or(entry.webpage_url);
            match (entry.title, url) {
                (Some(title), Some(url)) => Some(SearchResult {
                    view_count: entry.view_count,
                    description: Description::from(entry.description),
                    ..SearchResult::new(title, url)
                }),
                (title, url) => {
                    debug!(?title, ?url, "Skipping entry without title or url");
                    None
                }
            }
        })
        .collect();

    Ok(results)
}

pub fn search_target(query: &str, count: usize) -> String {
    format!("ytsearch{}:{}", count, query.trim())
}

#[derive(Debug, Clone)]
pub struct YtDlpSearchService {
    binary: String,
    extra_args: Vec<String>,
}

impl YtDlpSearchService {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            extra_args: config.extra_args.clone(),
        }
    }

    async fn run(&self, args: &[String]) -> Result<Vec<u8>, SearchError> {
        let output = Command::new(&self.binary)
            .args(args)
            .stdin(Stdio::null())
            .kill_on_drop(true)
            .output()
            .await
            .map_err(|source| SearchError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(SearchError::Provider {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(output.stdout)
    }
}

#[async_trait]
impl SearchProvider for YtDlpSearchService {
    async fn search(&self, query: &str, count: usize) -> Result<Vec<SearchResult>, SearchError> {
        if count == 0 {
            return Err(SearchError::InvalidCount);
        }

        let mut args: Vec<String> = [
            "--flat-playlist",
            "--dump-single-json",
            "--skip-download",
            "--no-warnings",
            "--quiet",
        ]
        .iter()
        .map(|arg| arg.to_string())
        .collect();
        args.extend(self.extra_args.iter().cloned());
        args.push(search_target(query, count));

        debug!(binary = %self.binary, ?args, "Invoking search provider");
        let stdout = self.run(&args).await?;
        let results = parse_listing(&stdout)?;
        info!(query, count, found = results.len(), "Search completed");
        Ok(results)
    }

    async fn version(&self) -> Result<String, SearchError> {
        let stdout = self.run(&["--version".to_string()]).await?;
        Ok(String::from_utf8_lossy(&stdout).trim().to_string())
    }
}
