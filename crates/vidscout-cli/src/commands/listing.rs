use crate::output::{Output, OutputFormat};
use color_eyre::Result;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use vidscout_config::{Config, PathManager};
use vidscout_core::rank_videos;
use vidscout_models::{LengthBucket, VideoRecord};
use vidscout_sources::YoutubeClient;

/// Load config and build an API client, failing up-front when no key is set.
pub fn load_client() -> Result<(Config, YoutubeClient)> {
    let paths = PathManager::new().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    let config = Config::load_with_env(&paths.config_file());
    config.validate().map_err(|e| color_eyre::eyre::eyre!("{}", e))?;
    tracing::debug!(
        "Using config from {:?} (max_results={})",
        paths.config_file(),
        config.youtube.max_results
    );
    let client = YoutubeClient::new(config.youtube.api_key.clone(), config.youtube.max_results);
    Ok((config, client))
}

pub async fn run_search(query: &str, length: LengthBucket, output: &Output) -> Result<()> {
    let (_, client) = load_client()?;

    let ids = match client.search(query).await {
        Ok(outcome) => {
            if outcome.narrowed.is_some() {
                output.warn("No exact matches found. Showing similar videos.");
            }
            outcome.ids
        }
        Err(e) => {
            output.error(format!("Error fetching search results: {}", e));
            Vec::new()
        }
    };

    let videos = hydrate_and_rank(&client, &ids, length, output).await;
    render_listing(&videos, output);
    Ok(())
}

pub async fn run_trending(
    region: Option<&str>,
    length: LengthBucket,
    output: &Output,
) -> Result<()> {
    let (config, client) = load_client()?;
    // CLI flag wins over the configured default region.
    let region = region
        .map(str::to_string)
        .or_else(|| config.youtube.region.clone());

    let ids = match client.fetch_trending(region.as_deref()).await {
        Ok(ids) => ids,
        Err(e) => {
            output.error(format!("Error fetching trending videos: {}", e));
            Vec::new()
        }
    };

    let videos = hydrate_and_rank(&client, &ids, length, output).await;
    render_listing(&videos, output);
    Ok(())
}

/// Hydrate ids into records and rank them. An API failure degrades to an
/// empty listing with a user-visible notice; it never aborts the command.
pub async fn hydrate_and_rank(
    client: &YoutubeClient,
    ids: &[String],
    length: LengthBucket,
    output: &Output,
) -> Vec<VideoRecord> {
    let videos = match client.hydrate(ids).await {
        Ok(videos) => videos,
        Err(e) => {
            output.error(format!("Error fetching video details: {}", e));
            Vec::new()
        }
    };
    rank_videos(videos, length)
}

pub fn render_listing(videos: &[VideoRecord], output: &Output) {
    match output.format() {
        OutputFormat::Json | OutputFormat::JsonPretty => {
            output.json(&serde_json::to_value(videos).unwrap_or_default());
        }
        OutputFormat::Human => {
            if videos.is_empty() {
                output.info("No videos found.");
                return;
            }
            output.info(format!("{}", videos_table(videos)));
        }
    }
}

pub fn videos_table(videos: &[VideoRecord]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["#", "Title", "Rating", "Views", "Comments", "Length"]);
    for (i, video) in videos.iter().enumerate() {
        table.add_row(vec![
            (i + 1).to_string(),
            video.title.clone(),
            format!("{:.1}", video.rating),
            video.views.to_string(),
            video.comments.to_string(),
            format!("{:.1} min", video.length_minutes),
        ]);
    }
    table
}
