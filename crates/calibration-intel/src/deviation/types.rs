//! Core types for deviation analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How strongly a group's rate departs from its baseline.
///
/// Ordered: `None < Low < Moderate < Critical`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Not distinguishable from baseline.
    None,
    /// Marginal; also the ceiling for groups below the small-sample floor.
    Low,
    /// Statistically notable (conventionally p < 0.05).
    Moderate,
    /// Statistically extreme (conventionally p < 0.01).
    Critical,
}

impl Severity {
    /// Severity name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::Critical => "critical",
        }
    }

    /// End-user framing for summary cards, assuming default thresholds.
    pub fn description(&self) -> &'static str {
        match self {
            Self::None => "Consistent with the baseline",
            Self::Low => "Weak signal; not statistically distinguishable from the baseline",
            Self::Moderate => "Less than 5% chance this pattern is random",
            Self::Critical => "Less than 1% chance this pattern is random",
        }
    }

    /// Anything above `None` is an anomaly.
    pub fn is_anomaly(&self) -> bool {
        !matches!(self, Self::None)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One group's deviation from its dimension baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deviation {
    pub category: String,
    pub sample_size: u32,
    pub observed_high_count: u32,
    pub observed_high_pct: f64,
    pub expected_high_pct: f64,
    /// observed_high_pct − expected_high_pct, in percentage points.
    /// Positive means the group over-rates "High".
    pub deviation_magnitude: f64,
    pub z_score: f64,
    /// Two-sided p-value of the deviation given the sample size.
    pub p_value: f64,
    /// (1 − p) × 100, for "N% confidence" framing.
    pub confidence_pct: f64,
    pub severity: Severity,
}

impl Deviation {
    pub fn is_anomaly(&self) -> bool {
        self.severity.is_anomaly()
    }

    pub fn abs_magnitude(&self) -> f64 {
        self.deviation_magnitude.abs()
    }
}
