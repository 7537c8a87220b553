//! Baseline estimation: the dimension-local expected high-performer rate.
//!
//! Each category counts as one equally weighted cohort, so the baseline is
//! the unweighted mean of the groups' observed rates. Large categories do
//! not dominate the expectation.

use calibration_core::config::BaselineConfig;
use serde::{Deserialize, Serialize};

use crate::aggregation::DimensionGroup;

/// Expected high-performer percentage for one dimension in one run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub expected_high_pct: f64,
    /// Number of groups the mean was taken over.
    pub group_count: usize,
    /// True when the dimension had no groups and the configured fallback
    /// was used. Such a baseline is advisory only.
    pub is_fallback: bool,
}

/// Computes baselines. Holds only its configured fallback; nothing is cached
/// across runs.
#[derive(Debug, Clone)]
pub struct BaselineEstimator {
    fallback_high_pct: f64,
}

impl BaselineEstimator {
    pub fn new(config: &BaselineConfig) -> Self {
        Self {
            fallback_high_pct: config.effective_fallback_high_pct(),
        }
    }

    pub fn fallback_high_pct(&self) -> f64 {
        self.fallback_high_pct
    }

    /// Mean of the groups' `observed_high_pct`, or the fallback when empty.
    pub fn estimate(&self, groups: &[DimensionGroup]) -> Baseline {
        if groups.is_empty() {
            return Baseline {
                expected_high_pct: self.fallback_high_pct,
                group_count: 0,
                is_fallback: true,
            };
        }
        let sum: f64 = groups.iter().map(|g| g.observed_high_pct).sum();
        Baseline {
            expected_high_pct: (sum / groups.len() as f64).clamp(0.0, 100.0),
            group_count: groups.len(),
            is_fallback: false,
        }
    }
}

impl Default for BaselineEstimator {
    fn default() -> Self {
        Self::new(&BaselineConfig::default())
    }
}
