//! Three-bucket level distribution for the level chart.
//!
//! Level analysis yields only a high rate per level. The approximate
//! distribution splits the remainder 40/60 between Low and Medium; this is a
//! known approximation kept for compatibility with existing charts, not a
//! statistical derivation. `observed_level_distribution` gives the exact
//! split from the records and is offered alongside it.

use std::collections::BTreeMap;

use calibration_core::constants::{LEVEL_LOW_SHARE, LEVEL_MEDIUM_SHARE};
use calibration_core::types::{Dimension, PerformanceBucket, RatingRecord};
use serde::{Deserialize, Serialize};

use crate::report::DimensionAnalysis;

/// One level's Low/Medium/High split.
///
/// Invariant: `low_count + medium_count + high_count == sample_size`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDistributionRow {
    pub level: String,
    pub sample_size: u32,
    pub low_pct: f64,
    pub medium_pct: f64,
    pub high_pct: f64,
    pub low_count: u32,
    pub medium_count: u32,
    pub high_count: u32,
}

impl LevelDistributionRow {
    /// Approximate a row from a level's high rate alone.
    ///
    /// Counts are `round(pct / 100 × n)`; Medium absorbs the rounding
    /// remainder so the three counts always sum to `sample_size`.
    pub fn approximate(level: impl Into<String>, sample_size: u32, high_pct: f64) -> Self {
        let high_pct = if high_pct.is_finite() {
            high_pct.clamp(0.0, 100.0)
        } else {
            0.0
        };
        let remainder = 100.0 - high_pct;
        let low_pct = remainder * LEVEL_LOW_SHARE;
        let medium_pct = remainder * LEVEL_MEDIUM_SHARE;

        let high_count = rounded_count(high_pct, sample_size).min(sample_size);
        let low_count = rounded_count(low_pct, sample_size).min(sample_size - high_count);
        let medium_count = sample_size - high_count - low_count;

        Self {
            level: level.into(),
            sample_size,
            low_pct,
            medium_pct,
            high_pct,
            low_count,
            medium_count,
            high_count,
        }
    }
}

fn rounded_count(pct: f64, sample_size: u32) -> u32 {
    (pct / 100.0 * sample_size as f64).round() as u32
}

/// Approximate rows for every level in the level analysis, ordered by label.
pub fn approximate_level_distribution(
    level_analysis: &DimensionAnalysis,
) -> Vec<LevelDistributionRow> {
    let mut rows: Vec<LevelDistributionRow> = level_analysis
        .deviations
        .iter()
        .map(|d| {
            LevelDistributionRow::approximate(
                d.category.clone(),
                d.sample_size,
                d.observed_high_pct,
            )
        })
        .collect();
    rows.sort_by(|a, b| a.level.cmp(&b.level));
    rows
}

/// Exact rows counted from the records, ordered by label.
///
/// Records without a level are excluded, as in aggregation.
pub fn observed_level_distribution(records: &[RatingRecord]) -> Vec<LevelDistributionRow> {
    // level -> [low, medium, high]
    let mut counts: BTreeMap<&str, [u32; 3]> = BTreeMap::new();
    for record in records {
        let Some(level) = record.category(Dimension::Level) else {
            continue;
        };
        let slot = match record.performance_bucket {
            PerformanceBucket::Low => 0,
            PerformanceBucket::Medium => 1,
            PerformanceBucket::High => 2,
        };
        counts.entry(level).or_insert([0; 3])[slot] += 1;
    }

    counts
        .into_iter()
        .map(|(level, [low, medium, high])| {
            let n = low + medium + high;
            let pct = |count: u32| count as f64 / n as f64 * 100.0;
            LevelDistributionRow {
                level: level.to_string(),
                sample_size: n,
                low_pct: pct(low),
                medium_pct: pct(medium),
                high_pct: pct(high),
                low_count: low,
                medium_count: medium,
                high_count: high,
            }
        })
        .collect()
}
