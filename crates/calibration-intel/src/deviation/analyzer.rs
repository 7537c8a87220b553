//! Per-group deviation against the dimension baseline.

use std::cmp::Ordering;

use calibration_core::config::SeverityConfig;

use super::significance::proportion_z_test;
use super::types::{Deviation, Severity};
use crate::aggregation::DimensionGroup;
use crate::baseline::Baseline;

/// Classifies group deviations. Thresholds come from configuration at
/// construction and never change afterwards.
#[derive(Debug, Clone)]
pub struct DeviationAnalyzer {
    critical_p: f64,
    moderate_p: f64,
    low_p: f64,
    min_sample_size: u32,
}

impl DeviationAnalyzer {
    pub fn new(config: &SeverityConfig) -> Self {
        Self {
            critical_p: config.effective_critical_p(),
            moderate_p: config.effective_moderate_p(),
            low_p: config.effective_low_p(),
            min_sample_size: config.effective_min_sample_size(),
        }
    }

    pub fn min_sample_size(&self) -> u32 {
        self.min_sample_size
    }

    /// Compare one group to the baseline.
    pub fn analyze(&self, group: &DimensionGroup, baseline: &Baseline) -> Deviation {
        let expected = baseline.expected_high_pct;
        let magnitude = group.observed_high_pct - expected;
        let significance = proportion_z_test(magnitude, expected, group.sample_size);

        Deviation {
            category: group.category_label.clone(),
            sample_size: group.sample_size,
            observed_high_count: group.observed_high_count,
            observed_high_pct: group.observed_high_pct,
            expected_high_pct: expected,
            deviation_magnitude: magnitude,
            z_score: significance.z_score,
            p_value: significance.p_value,
            confidence_pct: (1.0 - significance.p_value) * 100.0,
            severity: self.classify(significance.p_value, group.sample_size),
        }
    }

    /// Compare every group and order the result for presentation.
    pub fn analyze_all(&self, groups: &[DimensionGroup], baseline: &Baseline) -> Vec<Deviation> {
        let mut deviations: Vec<Deviation> = groups
            .iter()
            .map(|group| self.analyze(group, baseline))
            .collect();
        deviations.sort_by(presentation_order);
        deviations
    }

    /// Tier a p-value, capping groups below the small-sample floor at `Low`.
    pub fn classify(&self, p_value: f64, sample_size: u32) -> Severity {
        let tier = if p_value < self.critical_p {
            Severity::Critical
        } else if p_value < self.moderate_p {
            Severity::Moderate
        } else if p_value < self.low_p {
            Severity::Low
        } else {
            Severity::None
        };

        if sample_size < self.min_sample_size {
            tier.min(Severity::Low)
        } else {
            tier
        }
    }
}

impl Default for DeviationAnalyzer {
    fn default() -> Self {
        Self::new(&SeverityConfig::default())
    }
}

/// Severity descending, then |magnitude| descending, then label ascending.
fn presentation_order(a: &Deviation, b: &Deviation) -> Ordering {
    b.severity
        .cmp(&a.severity)
        .then_with(|| b.abs_magnitude().total_cmp(&a.abs_magnitude()))
        .then_with(|| a.category.cmp(&b.category))
}
