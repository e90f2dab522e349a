use reqwest::Client;
use tracing::info;
use vidscout_models::VideoRecord;

use crate::error::SourceError;
use crate::youtube::api;

/// Result of a search, including whether the query had to be narrowed to get
/// any hits (so the caller can tell the user they are seeing similar videos).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchOutcome {
    pub ids: Vec<String>,
    pub narrowed: Option<String>,
}

/// Read-only client for the video catalog API.
#[derive(Clone)]
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    max_results: u32,
}

impl YoutubeClient {
    pub fn new(api_key: String, max_results: u32) -> Self {
        Self {
            client: Client::new(),
            api_key,
            max_results,
        }
    }

    /// Ids of currently-popular videos, optionally scoped to a region code.
    pub async fn fetch_trending(&self, region: Option<&str>) -> Result<Vec<String>, SourceError> {
        api::fetch_trending_ids(&self.client, &self.api_key, self.max_results, region).await
    }

    /// Search for videos matching a free-text query.
    ///
    /// A zero-result search is retried exactly once with the first
    /// whitespace-delimited token of the query; the outcome reports the
    /// narrowed query when that happened. One retry, never a loop.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SourceError> {
        if query.trim().is_empty() {
            return Ok(SearchOutcome { ids: Vec::new(), narrowed: None });
        }

        let ids = api::search_ids(&self.client, &self.api_key, self.max_results, query).await?;
        if !ids.is_empty() {
            return Ok(SearchOutcome { ids, narrowed: None });
        }

        let Some(fallback) = narrowed_query(query) else {
            return Ok(SearchOutcome { ids, narrowed: None });
        };
        info!("Search '{}' had no results, retrying with '{}'", query, fallback);
        let ids = api::search_ids(&self.client, &self.api_key, self.max_results, &fallback).await?;
        Ok(SearchOutcome { ids, narrowed: Some(fallback) })
    }

    /// Hydrate a batch of ids into full records in a single request.
    pub async fn hydrate(&self, ids: &[String]) -> Result<Vec<VideoRecord>, SourceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        api::fetch_video_details(&self.client, &self.api_key, ids).await
    }
}

/// The first whitespace-delimited token of the query, when narrowing would
/// actually change it. A single-word query retried verbatim would just fail
/// identically, so it never narrows.
fn narrowed_query(query: &str) -> Option<String> {
    let first = query.split_whitespace().next()?;
    if first == query.trim() {
        return None;
    }
    Some(first.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_narrowed_query_takes_first_token() {
        assert_eq!(narrowed_query("xyzzy foobar"), Some("xyzzy".to_string()));
        assert_eq!(narrowed_query("one two three"), Some("one".to_string()));
    }

    #[test]
    fn test_single_token_does_not_narrow() {
        assert_eq!(narrowed_query("xyzzy"), None);
        assert_eq!(narrowed_query("  xyzzy  "), None);
    }

    #[test]
    fn test_empty_query_does_not_narrow() {
        assert_eq!(narrowed_query(""), None);
        assert_eq!(narrowed_query("   "), None);
    }
}
