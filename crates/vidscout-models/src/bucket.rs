use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Length filter buckets. The 5 and 15 minute boundaries belong to Medium.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum LengthBucket {
    #[default]
    All,
    Short,
    Medium,
    Long,
}

impl LengthBucket {
    pub fn contains(self, length_minutes: f64) -> bool {
        match self {
            LengthBucket::All => true,
            LengthBucket::Short => length_minutes < 5.0,
            LengthBucket::Medium => (5.0..=15.0).contains(&length_minutes),
            LengthBucket::Long => length_minutes > 15.0,
        }
    }
}

impl FromStr for LengthBucket {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "all" => Ok(LengthBucket::All),
            "short" => Ok(LengthBucket::Short),
            "medium" => Ok(LengthBucket::Medium),
            "long" => Ok(LengthBucket::Long),
            _ => Err(format!(
                "Invalid length filter: {}. Use 'all', 'short', 'medium', or 'long'",
                s
            )),
        }
    }
}

impl fmt::Display for LengthBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LengthBucket::All => "all",
            LengthBucket::Short => "short",
            LengthBucket::Medium => "medium",
            LengthBucket::Long => "long",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_medium() {
        assert!(!LengthBucket::Short.contains(5.0));
        assert!(LengthBucket::Medium.contains(5.0));
        assert!(LengthBucket::Medium.contains(15.0));
        assert!(!LengthBucket::Long.contains(15.0));
    }

    #[test]
    fn test_bucket_ranges() {
        assert!(LengthBucket::Short.contains(4.9));
        assert!(LengthBucket::Medium.contains(10.0));
        assert!(LengthBucket::Long.contains(15.1));
        for m in [0.0, 5.0, 15.0, 120.0] {
            assert!(LengthBucket::All.contains(m));
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!("short".parse::<LengthBucket>().unwrap(), LengthBucket::Short);
        assert_eq!("MEDIUM".parse::<LengthBucket>().unwrap(), LengthBucket::Medium);
        assert!("tiny".parse::<LengthBucket>().is_err());
    }
}
