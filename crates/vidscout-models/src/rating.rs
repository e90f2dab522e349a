/// Score a video from its engagement numbers.
///
/// `views/5000 + comments/50 - length_minutes/2`, clamped to [0, 100].
/// The coefficients are load-bearing: rankings produced elsewhere assume
/// exactly this formula (popular short videos float to the top).
pub fn calculate_rating(views: u64, comments: u64, length_minutes: f64) -> f64 {
    let raw = views as f64 / 5000.0 + comments as f64 / 50.0 - length_minutes / 2.0;
    raw.clamp(0.0, 100.0)
}
