use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use vidscout_models::{parse_iso8601_minutes, VideoRecord};

use crate::error::SourceError;

const API_BASE: &str = "https://www.googleapis.com/youtube/v3";

#[derive(Debug, Deserialize)]
struct VideoListResponse {
    #[serde(default)]
    items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoItem {
    id: String,
    #[serde(default)]
    snippet: Snippet,
    #[serde(default)]
    statistics: Statistics,
    #[serde(rename = "contentDetails", default)]
    content_details: ContentDetails,
}

#[derive(Debug, Deserialize, Default)]
struct Snippet {
    title: Option<String>,
    #[serde(default)]
    description: String,
    #[serde(default)]
    thumbnails: Thumbnails,
}

#[derive(Debug, Deserialize, Default)]
struct Thumbnails {
    medium: Option<Thumbnail>,
}

#[derive(Debug, Deserialize)]
struct Thumbnail {
    url: String,
}

// The API sends view/comment counts as decimal strings, and omits them
// entirely when the uploader hides stats.
#[derive(Debug, Deserialize, Default)]
struct Statistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "commentCount")]
    comment_count: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct ContentDetails {
    duration: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchListResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: SearchItemId,
}

// Search can also return channels and playlists; only video hits carry
// a videoId.
#[derive(Debug, Deserialize)]
struct SearchItemId {
    #[serde(rename = "videoId")]
    video_id: Option<String>,
}

/// Parse an API count field, defaulting to 0 when absent or non-numeric.
pub(crate) fn parse_count(raw: Option<&str>) -> u64 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(0)
}

impl VideoItem {
    pub(crate) fn into_record(self) -> VideoRecord {
        let views = parse_count(self.statistics.view_count.as_deref());
        let comments = parse_count(self.statistics.comment_count.as_deref());
        let length_minutes =
            parse_iso8601_minutes(self.content_details.duration.as_deref().unwrap_or("PT0M"));
        VideoRecord::new(
            self.id,
            self.snippet.title.unwrap_or_else(|| "No Title".to_string()),
            self.snippet.description,
            self.snippet
                .thumbnails
                .medium
                .map(|t| t.url)
                .unwrap_or_default(),
            views,
            comments,
            length_minutes,
        )
    }
}

async fn check_status(response: reqwest::Response) -> Result<reqwest::Response, SourceError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(SourceError::Api { status, body });
    }
    Ok(response)
}

/// Fetch the ids of currently-popular videos, optionally scoped to a region.
pub async fn fetch_trending_ids(
    client: &Client,
    api_key: &str,
    max_results: u32,
    region: Option<&str>,
) -> Result<Vec<String>, SourceError> {
    let mut params = vec![
        ("part", "snippet,statistics,contentDetails".to_string()),
        ("chart", "mostPopular".to_string()),
        ("maxResults", max_results.to_string()),
        ("key", api_key.to_string()),
    ];
    if let Some(region) = region {
        params.push(("regionCode", region.to_string()));
    }

    let response = client
        .get(format!("{}/videos", API_BASE))
        .query(&params)
        .send()
        .await?;
    let response = check_status(response).await?;

    let data: VideoListResponse = response.json().await?;
    debug!("Trending listing returned {} items", data.items.len());
    Ok(data.items.into_iter().map(|item| item.id).collect())
}

/// Search for video ids matching a free-text query. Items without a videoId
/// (channels, playlists) are skipped.
pub async fn search_ids(
    client: &Client,
    api_key: &str,
    max_results: u32,
    query: &str,
) -> Result<Vec<String>, SourceError> {
    let max_results = max_results.to_string();
    let params = [
        ("part", "snippet"),
        ("q", query),
        ("type", "video"),
        ("maxResults", max_results.as_str()),
        ("key", api_key),
    ];

    let response = client
        .get(format!("{}/search", API_BASE))
        .query(&params)
        .send()
        .await?;
    let response = check_status(response).await?;

    let data: SearchListResponse = response.json().await?;
    let ids: Vec<String> = data
        .items
        .into_iter()
        .filter_map(|item| item.id.video_id)
        .collect();
    debug!("Search '{}' returned {} video ids", query, ids.len());
    Ok(ids)
}

/// Hydrate a batch of ids into full records with one request (the API takes
/// comma-joined ids).
pub async fn fetch_video_details(
    client: &Client,
    api_key: &str,
    ids: &[String],
) -> Result<Vec<VideoRecord>, SourceError> {
    let joined_ids = ids.join(",");
    let params = [
        ("part", "snippet,statistics,contentDetails"),
        ("id", joined_ids.as_str()),
        ("key", api_key),
    ];

    let response = client
        .get(format!("{}/videos", API_BASE))
        .query(&params)
        .send()
        .await?;
    let response = check_status(response).await?;

    let data: VideoListResponse = response.json().await?;
    Ok(data.items.into_iter().map(VideoItem::into_record).collect())
}
