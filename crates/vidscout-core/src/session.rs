use vidscout_models::VideoRecord;

/// Points for a search the user has not already been charged for.
pub const SEARCH_POINTS: u64 = 10;

/// Points for every video marked watched, repeats included.
pub const WATCH_POINTS: u64 = 20;

/// In-memory engagement state for one interactive session.
///
/// Owned by the session's command handler and passed explicitly; nothing
/// here is global. Dropped when the session ends — cross-session persistence
/// is the ledger's job, not this one's.
#[derive(Debug, Default)]
pub struct Session {
    watched: Vec<VideoRecord>,
    watch_later: Vec<VideoRecord>,
    points: u64,
    last_query: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Award search points unless this exact query was the last one charged.
    /// Returns the points awarded (0 for a back-to-back repeat).
    pub fn record_search(&mut self, query: &str) -> u64 {
        if self.last_query.as_deref() == Some(query) {
            return 0;
        }
        self.last_query = Some(query.to_string());
        self.points += SEARCH_POINTS;
        SEARCH_POINTS
    }

    /// Append to the watched list and award points. Duplicates are allowed
    /// and each one awards points again.
    pub fn mark_watched(&mut self, video: VideoRecord) {
        self.points += WATCH_POINTS;
        self.watched.push(video);
    }

    /// Add to watch-later unless an equal record is already queued.
    /// Returns whether the video was added.
    pub fn add_watch_later(&mut self, video: VideoRecord) -> bool {
        if self.watch_later.contains(&video) {
            return false;
        }
        self.watch_later.push(video);
        true
    }

    pub fn watched(&self) -> &[VideoRecord] {
        &self.watched
    }

    pub fn watch_later(&self) -> &[VideoRecord] {
        &self.watch_later
    }

    pub fn points(&self) -> u64 {
        self.points
    }
}
