//! Quality score: one 0-100 number for overall calibration health.
//!
//! score = 100 − (critical_w·C + moderate_w·M + low_w·L
//!               + concentration_w·Σ_dim max(0, anomalies_in_dim − 1)),
//! floored at 0. Only per-dimension counts enter the formula, so the score
//! does not depend on the order dimensions or deviations are presented in.

use calibration_core::config::ScoringConfig;
use serde::{Deserialize, Serialize};

use crate::deviation::{Deviation, Severity};

/// Counts and penalties behind a quality score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityBreakdown {
    pub critical_count: u32,
    pub moderate_count: u32,
    pub low_count: u32,
    /// Penalty from per-anomaly severity weights.
    pub severity_penalty: u32,
    /// Extra penalty for anomalies clustered within a single dimension.
    pub concentration_penalty: u32,
}

impl QualityBreakdown {
    pub fn anomaly_count(&self) -> u32 {
        self.critical_count + self.moderate_count + self.low_count
    }

    pub fn total_penalty(&self) -> u32 {
        self.severity_penalty.saturating_add(self.concentration_penalty)
    }
}

#[derive(Debug, Clone)]
pub struct QualityScorer {
    critical_weight: u32,
    moderate_weight: u32,
    low_weight: u32,
    concentration_weight: u32,
}

impl QualityScorer {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            critical_weight: config.effective_critical_weight(),
            moderate_weight: config.effective_moderate_weight(),
            low_weight: config.effective_low_weight(),
            concentration_weight: config.effective_concentration_weight(),
        }
    }

    /// Score the deviations of every dimension. Each slice is one dimension.
    pub fn score<'a, I>(&self, dimensions: I) -> (u8, QualityBreakdown)
    where
        I: IntoIterator<Item = &'a [Deviation]>,
    {
        let mut breakdown = QualityBreakdown::default();
        let mut clustered_excess: u32 = 0;

        for deviations in dimensions {
            let mut in_dimension: u32 = 0;
            for deviation in deviations {
                match deviation.severity {
                    Severity::Critical => breakdown.critical_count += 1,
                    Severity::Moderate => breakdown.moderate_count += 1,
                    Severity::Low => breakdown.low_count += 1,
                    Severity::None => continue,
                }
                in_dimension += 1;
            }
            clustered_excess += in_dimension.saturating_sub(1);
        }

        breakdown.severity_penalty = self
            .critical_weight
            .saturating_mul(breakdown.critical_count)
            .saturating_add(self.moderate_weight.saturating_mul(breakdown.moderate_count))
            .saturating_add(self.low_weight.saturating_mul(breakdown.low_count));
        breakdown.concentration_penalty =
            self.concentration_weight.saturating_mul(clustered_excess);

        let score = 100u32.saturating_sub(breakdown.total_penalty());
        (score as u8, breakdown)
    }
}

impl Default for QualityScorer {
    fn default() -> Self {
        Self::new(&ScoringConfig::default())
    }
}
