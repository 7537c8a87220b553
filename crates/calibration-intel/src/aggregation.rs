//! Category aggregation: partition records by one dimension's labels.

use calibration_core::types::{Dimension, RatingRecord};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// One category label within one dimension, with its observed high rate.
///
/// Never constructed with `sample_size == 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionGroup {
    pub category_label: String,
    pub sample_size: u32,
    pub observed_high_count: u32,
    /// observed_high_count / sample_size × 100.
    pub observed_high_pct: f64,
}

impl DimensionGroup {
    /// Build a group from raw counts. Returns `None` for an empty partition.
    pub fn from_counts(
        category_label: impl Into<String>,
        sample_size: u32,
        observed_high_count: u32,
    ) -> Option<Self> {
        if sample_size == 0 {
            return None;
        }
        let observed_high_count = observed_high_count.min(sample_size);
        Some(Self {
            category_label: category_label.into(),
            sample_size,
            observed_high_count,
            observed_high_pct: observed_high_count as f64 / sample_size as f64 * 100.0,
        })
    }
}

/// Partition `records` by `dimension` and count each label.
///
/// Records without a value for the dimension are excluded rather than
/// pooled under an "unknown" label. Output is ordered by label.
pub fn aggregate(records: &[RatingRecord], dimension: Dimension) -> Vec<DimensionGroup> {
    // label -> (sample_size, high_count)
    let mut counts: FxHashMap<&str, (u32, u32)> = FxHashMap::default();
    for record in records {
        let Some(label) = record.category(dimension) else {
            continue;
        };
        let entry = counts.entry(label).or_insert((0, 0));
        entry.0 += 1;
        if record.is_high() {
            entry.1 += 1;
        }
    }

    let mut groups: Vec<DimensionGroup> = counts
        .into_iter()
        .filter_map(|(label, (n, high))| DimensionGroup::from_counts(label, n, high))
        .collect();
    groups.sort_by(|a, b| a.category_label.cmp(&b.category_label));
    groups
}
