use serde::{Deserialize, Serialize};

use crate::rating::calculate_rating;

/// One fully-hydrated video from the catalog API.
///
/// Built once per hydration call and immutable afterwards; copies of the same
/// record may live in both the watched and watch-later lists.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoRecord {
    pub video_id: String,
    pub title: String,
    pub description: String,
    pub thumbnail_url: String,
    pub views: u64,
    pub comments: u64,
    pub length_minutes: f64,
    pub rating: f64,
    pub playback_url: String,
}

impl VideoRecord {
    /// Derived fields (`rating`, `playback_url`) are computed here so they can
    /// never drift from the inputs.
    pub fn new(
        video_id: String,
        title: String,
        description: String,
        thumbnail_url: String,
        views: u64,
        comments: u64,
        length_minutes: f64,
    ) -> Self {
        let rating = calculate_rating(views, comments, length_minutes);
        let playback_url = format!("https://www.youtube.com/embed/{}", video_id);
        Self {
            video_id,
            title,
            description,
            thumbnail_url,
            views,
            comments,
            length_minutes,
            rating,
            playback_url,
        }
    }
}

// Identity is the API's video id; this is the equality the watch-later
// duplicate check relies on.
impl PartialEq for VideoRecord {
    fn eq(&self, other: &Self) -> bool {
        self.video_id == other.video_id
    }
}

impl Eq for VideoRecord {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_fields() {
        let video = VideoRecord::new(
            "abc123".to_string(),
            "Test".to_string(),
            String::new(),
            String::new(),
            5000,
            0,
            0.0,
        );
        assert_eq!(video.playback_url, "https://www.youtube.com/embed/abc123");
        assert_eq!(video.rating, 1.0);
    }

    #[test]
    fn test_equality_is_by_id() {
        let a = VideoRecord::new(
            "same".to_string(),
            "Title A".to_string(),
            String::new(),
            String::new(),
            100,
            10,
            3.0,
        );
        let b = VideoRecord::new(
            "same".to_string(),
            "Title B".to_string(),
            "different".to_string(),
            String::new(),
            999,
            0,
            20.0,
        );
        assert_eq!(a, b);
    }
}
