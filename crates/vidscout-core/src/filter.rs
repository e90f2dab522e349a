use std::cmp::Ordering;

use vidscout_models::{LengthBucket, VideoRecord};

/// Keep the videos whose length passes the bucket, ordered by rating
/// descending. The sort is stable, so equal ratings keep their original
/// relative order (the API's own ordering).
pub fn rank_videos(videos: Vec<VideoRecord>, bucket: LengthBucket) -> Vec<VideoRecord> {
    let mut filtered: Vec<VideoRecord> = videos
        .into_iter()
        .filter(|v| bucket.contains(v.length_minutes))
        .collect();
    filtered.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    filtered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, views: u64, length_minutes: f64) -> VideoRecord {
        VideoRecord::new(
            id.to_string(),
            format!("Video {}", id),
            String::new(),
            String::new(),
            views,
            0,
            length_minutes,
        )
    }

    #[test]
    fn test_sorted_by_rating_descending() {
        // views of 50k/250k/150k at zero length give ratings 10/50/30.
        let videos = vec![
            video("a", 50_000, 0.0),
            video("b", 250_000, 0.0),
            video("c", 150_000, 0.0),
        ];
        let ranked = rank_videos(videos, LengthBucket::All);
        let ids: Vec<&str> = ranked.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn test_ties_keep_original_order() {
        let videos = vec![
            video("first", 100_000, 0.0),
            video("second", 100_000, 0.0),
            video("third", 100_000, 0.0),
        ];
        let ranked = rank_videos(videos, LengthBucket::All);
        let ids: Vec<&str> = ranked.iter().map(|v| v.video_id.as_str()).collect();
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_bucket_filters_before_sort() {
        let videos = vec![
            video("short", 500_000, 2.0),
            video("medium", 500_000, 10.0),
            video("long", 500_000, 30.0),
        ];
        let ranked = rank_videos(videos, LengthBucket::Medium);
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].video_id, "medium");
    }

    #[test]
    fn test_empty_input() {
        assert!(rank_videos(Vec::new(), LengthBucket::All).is_empty());
    }
}
