/// Parse an ISO-8601 duration (as emitted by the YouTube API, e.g. "PT5M30S"
/// or "P1DT2H") into minutes.
///
/// Total function: anything that does not look like a duration yields 0.0.
/// Listing must never fail because one video carried a bad duration string.
pub fn parse_iso8601_minutes(duration: &str) -> f64 {
    let rest = match duration.strip_prefix('P') {
        Some(rest) => rest,
        None => return 0.0,
    };

    let mut seconds = 0u64;
    let mut num = String::new();
    let mut in_time = false;
    for c in rest.chars() {
        if c.is_ascii_digit() {
            num.push(c);
            continue;
        }
        if c == 'T' {
            // Separates the date part from the time part; 'M' means months
            // before it and minutes after.
            in_time = true;
            num.clear();
            continue;
        }
        let n: u64 = num.parse().unwrap_or(0);
        num.clear();
        match c {
            'D' if !in_time => seconds += n * 86_400,
            'H' if in_time => seconds += n * 3_600,
            'M' if in_time => seconds += n * 60,
            'S' if in_time => seconds += n,
            // Unsupported designator (weeks, months, fractional parts):
            // treat the whole string as unparseable.
            _ => return 0.0,
        }
    }
    if !num.is_empty() {
        // Trailing digits with no designator.
        return 0.0;
    }

    seconds as f64 / 60.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minutes_and_seconds() {
        assert_eq!(parse_iso8601_minutes("PT5M30S"), 5.5);
        assert_eq!(parse_iso8601_minutes("PT21S"), 0.35);
        assert_eq!(parse_iso8601_minutes("PT4M"), 4.0);
    }

    #[test]
    fn test_hours_and_days() {
        assert_eq!(parse_iso8601_minutes("PT1H2M"), 62.0);
        assert_eq!(parse_iso8601_minutes("P1DT1H"), 1500.0);
    }

    #[test]
    fn test_zero_duration() {
        assert_eq!(parse_iso8601_minutes("PT0M"), 0.0);
    }

    #[test]
    fn test_malformed_returns_zero() {
        assert_eq!(parse_iso8601_minutes(""), 0.0);
        assert_eq!(parse_iso8601_minutes("5 minutes"), 0.0);
        assert_eq!(parse_iso8601_minutes("PT5"), 0.0);
        assert_eq!(parse_iso8601_minutes("P3W"), 0.0);
        assert_eq!(parse_iso8601_minutes("garbage"), 0.0);
    }
}
