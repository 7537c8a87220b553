//! Performance buckets on the three-level ordinal scale.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an employee's performance rating falls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceBucket {
    Low,
    Medium,
    High,
}

impl PerformanceBucket {
    /// Bucket name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }

    /// Parse a bucket from its name (case-insensitive) or its 1-based ordinal.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" | "1" => Some(Self::Low),
            "medium" | "2" => Some(Self::Medium),
            "high" | "3" => Some(Self::High),
            _ => None,
        }
    }

    pub fn is_high(&self) -> bool {
        matches!(self, Self::High)
    }
}

impl fmt::Display for PerformanceBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_names_and_ordinals() {
        assert_eq!(PerformanceBucket::parse("HIGH"), Some(PerformanceBucket::High));
        assert_eq!(PerformanceBucket::parse(" medium "), Some(PerformanceBucket::Medium));
        assert_eq!(PerformanceBucket::parse("1"), Some(PerformanceBucket::Low));
        assert_eq!(PerformanceBucket::parse("4"), None);
        assert_eq!(PerformanceBucket::parse(""), None);
    }

    #[test]
    fn ordering_follows_scale() {
        assert!(PerformanceBucket::Low < PerformanceBucket::Medium);
        assert!(PerformanceBucket::Medium < PerformanceBucket::High);
    }
}
