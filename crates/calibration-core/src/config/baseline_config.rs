//! Baseline estimation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct BaselineConfig {
    /// Expected high-performer percentage for a dimension with no groups. Default: 25.0.
    pub fallback_high_pct: Option<f64>,
}

impl BaselineConfig {
    /// Returns the effective fallback baseline, defaulting to 25%.
    pub fn effective_fallback_high_pct(&self) -> f64 {
        self.fallback_high_pct
            .unwrap_or(constants::DEFAULT_FALLBACK_HIGH_PCT)
    }
}
