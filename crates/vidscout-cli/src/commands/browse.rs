use crate::commands::listing::{hydrate_and_rank, load_client, videos_table};
use crate::output::Output;
use color_eyre::Result;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use vidscout_core::session::{Session, WATCH_POINTS};
use vidscout_models::{LengthBucket, VideoRecord};
use vidscout_sources::YoutubeClient;

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

/// Interactive browsing session. Owns the session state for its whole
/// lifetime; everything is dropped on exit except what the user explicitly
/// records through the history command.
pub async fn run_browse(region: Option<String>, output: &Output) -> Result<()> {
    let (config, client) = load_client()?;
    let region = region.or_else(|| config.youtube.region.clone());
    let theme = ColorfulTheme::default();
    let mut session = Session::new();

    output.info("Points: 10 per new search, 20 per video watched.");

    loop {
        let menu = [
            "Search videos",
            "Browse trending",
            "Session history",
            "Watch later",
            "Quit",
        ];
        let choice = Select::with_theme(&theme)
            .with_prompt(format!("vidscout ({} points)", session.points()))
            .items(&menu)
            .default(0)
            .interact()?;

        match choice {
            0 => run_search_round(&client, &theme, &mut session, output).await?,
            1 => run_trending_round(&client, region.as_deref(), &theme, &mut session, output).await?,
            2 => show_watched(&session, output),
            3 => show_watch_later(&session, output),
            _ => break,
        }
    }

    output.success(format!(
        "Session over: watched {} video(s), {} queued for later, {} points earned.",
        session.watched().len(),
        session.watch_later().len(),
        session.points()
    ));
    Ok(())
}

async fn run_search_round(
    client: &YoutubeClient,
    theme: &ColorfulTheme,
    session: &mut Session,
    output: &Output,
) -> Result<()> {
    let query: String = Input::with_theme(theme)
        .with_prompt("Search for videos")
        .allow_empty(true)
        .interact_text()?;
    let query = query.trim().to_string();
    if query.is_empty() {
        return Ok(());
    }

    let awarded = session.record_search(&query);
    if awarded > 0 {
        output.info(format!("+{} points for a new search", awarded));
    }

    let bucket = prompt_bucket(theme)?;
    let ids = match client.search(&query).await {
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

    let videos = hydrate_and_rank(client, &ids, bucket, output).await;
    review_videos(&videos, theme, session, output)
}

async fn run_trending_round(
    client: &YoutubeClient,
    region: Option<&str>,
    theme: &ColorfulTheme,
    session: &mut Session,
    output: &Output,
) -> Result<()> {
    let bucket = prompt_bucket(theme)?;
    let ids = match client.fetch_trending(region).await {
        Ok(ids) => ids,
        Err(e) => {
            output.error(format!("Error fetching trending videos: {}", e));
            Vec::new()
        }
    };

    let videos = hydrate_and_rank(client, &ids, bucket, output).await;
    review_videos(&videos, theme, session, output)
}

fn prompt_bucket(theme: &ColorfulTheme) -> Result<LengthBucket> {
    let options = [
        ("All", LengthBucket::All),
        ("Short (<5 min)", LengthBucket::Short),
        ("Medium (5-15 min)", LengthBucket::Medium),
        ("Long (>15 min)", LengthBucket::Long),
    ];
    let labels: Vec<&str> = options.iter().map(|(label, _)| *label).collect();
    let pick = Select::with_theme(theme)
        .with_prompt("Filter by length")
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(options[pick].1)
}

/// Show the ranked listing and let the user act on individual videos until
/// they back out.
fn review_videos(
    videos: &[VideoRecord],
    theme: &ColorfulTheme,
    session: &mut Session,
    output: &Output,
) -> Result<()> {
    if videos.is_empty() {
        output.info("No videos found.");
        return Ok(());
    }
    output.info(format!("{}", videos_table(videos)));

    loop {
        let mut items: Vec<String> = videos
            .iter()
            .map(|v| format!("{} ({:.1})", v.title, v.rating))
            .collect();
        items.push("Back".to_string());
        let pick = Select::with_theme(theme)
            .with_prompt("Pick a video")
            .items(&items)
            .default(items.len() - 1)
            .interact()?;
        if pick == videos.len() {
            return Ok(());
        }
        act_on_video(&videos[pick], theme, session, output)?;
    }
}

fn act_on_video(
    video: &VideoRecord,
    theme: &ColorfulTheme,
    session: &mut Session,
    output: &Output,
) -> Result<()> {
    output.info(format!(
        "{}\n{} views | {} comments | {:.1} min | rating {:.1}\n{}",
        preview(&video.description),
        video.views,
        video.comments,
        video.length_minutes,
        video.rating,
        video.playback_url
    ));

    let actions = [
        format!("Mark as watched (+{} points)", WATCH_POINTS),
        "Add to Watch Later".to_string(),
        "Back".to_string(),
    ];
    let choice = Select::with_theme(theme)
        .with_prompt(video.title.clone())
        .items(&actions)
        .default(2)
        .interact()?;

    match choice {
        0 => {
            session.mark_watched(video.clone());
            output.success(format!(
                "Marked '{}' as watched (+{} points)",
                video.title, WATCH_POINTS
            ));
        }
        1 => {
            if session.add_watch_later(video.clone()) {
                output.success(format!("Added '{}' to Watch Later", video.title));
            } else {
                output.info(format!("'{}' is already in Watch Later", video.title));
            }
        }
        _ => {}
    }
    Ok(())
}

fn show_watched(session: &Session, output: &Output) {
    if session.watched().is_empty() {
        output.info("No videos watched yet.");
        return;
    }
    for video in session.watched() {
        output.info(format!(
            "{} - {:.1} min | Rating: {:.1}",
            video.title, video.length_minutes, video.rating
        ));
    }
}

fn show_watch_later(session: &Session, output: &Output) {
    if session.watch_later().is_empty() {
        output.info("No videos saved for later.");
        return;
    }
    for video in session.watch_later() {
        output.info(format!("{} - {}", video.title, video.playback_url));
    }
}

fn preview(description: &str) -> String {
    if description.chars().count() <= DESCRIPTION_PREVIEW_CHARS {
        return description.to_string();
    }
    let truncated: String = description.chars().take(DESCRIPTION_PREVIEW_CHARS).collect();
    format!("{}...", truncated)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_short_description_unchanged() {
        assert_eq!(preview("short"), "short");
    }

    #[test]
    fn test_preview_truncates_long_description() {
        let long = "x".repeat(500);
        let previewed = preview(&long);
        assert_eq!(previewed.chars().count(), DESCRIPTION_PREVIEW_CHARS + 3);
        assert!(previewed.ends_with("..."));
    }

    #[test]
    fn test_preview_respects_char_boundaries() {
        let long = "é".repeat(300);
        let previewed = preview(&long);
        assert!(previewed.starts_with('é'));
        assert!(previewed.ends_with("..."));
    }
}
