use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The durable cross-session record. On disk this is exactly these three
/// keys; anything that fails to parse into this shape is treated as absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct WatchLedger {
    pub short_videos: Vec<String>,
    pub long_videos: Vec<String>,
    pub points: u64,
}

/// Which ledger bucket a finished video lands in. Serde names match the
/// on-disk keys.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VideoClass {
    #[serde(rename = "short_videos")]
    Short,
    #[serde(rename = "long_videos")]
    Long,
}

impl VideoClass {
    /// Points awarded when a video of this class is recorded.
    pub fn points_value(self) -> u64 {
        match self {
            VideoClass::Short => 5,
            VideoClass::Long => 10,
        }
    }
}

impl FromStr for VideoClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" | "short_videos" => Ok(VideoClass::Short),
            "long" | "long_videos" => Ok(VideoClass::Long),
            _ => Err(format!("Invalid video class: {}. Use 'short' or 'long'", s)),
        }
    }
}

impl fmt::Display for VideoClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoClass::Short => write!(f, "short"),
            VideoClass::Long => write!(f, "long"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ledger_disk_shape() {
        let ledger = WatchLedger {
            short_videos: vec!["A".to_string()],
            long_videos: vec![],
            points: 5,
        };
        let json = serde_json::to_value(&ledger).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"short_videos": ["A"], "long_videos": [], "points": 5})
        );
    }

    #[test]
    fn test_points_per_class() {
        assert_eq!(VideoClass::Short.points_value(), 5);
        assert_eq!(VideoClass::Long.points_value(), 10);
    }

    #[test]
    fn test_class_from_str() {
        assert_eq!("short".parse::<VideoClass>().unwrap(), VideoClass::Short);
        assert_eq!("long_videos".parse::<VideoClass>().unwrap(), VideoClass::Long);
        assert!("medium".parse::<VideoClass>().is_err());
    }
}
