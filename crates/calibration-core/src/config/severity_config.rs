//! Severity tiering configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Thresholds used by the deviation analyzer to tier significance.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct SeverityConfig {
    /// p-value below which a deviation is Critical. Default: 0.01.
    pub critical_p: Option<f64>,
    /// p-value below which a deviation is Moderate. Default: 0.05.
    pub moderate_p: Option<f64>,
    /// p-value below which a deviation is Low. Default: 0.10.
    pub low_p: Option<f64>,
    /// Groups smaller than this are capped at Low. Default: 3.
    pub min_sample_size: Option<u32>,
}

impl SeverityConfig {
    /// Returns the effective Critical threshold, defaulting to 0.01.
    pub fn effective_critical_p(&self) -> f64 {
        self.critical_p.unwrap_or(constants::DEFAULT_CRITICAL_P)
    }

    /// Returns the effective Moderate threshold, defaulting to 0.05.
    pub fn effective_moderate_p(&self) -> f64 {
        self.moderate_p.unwrap_or(constants::DEFAULT_MODERATE_P)
    }

    /// Returns the effective Low threshold, defaulting to 0.10.
    pub fn effective_low_p(&self) -> f64 {
        self.low_p.unwrap_or(constants::DEFAULT_LOW_P)
    }

    /// Returns the effective small-sample floor, defaulting to 3.
    pub fn effective_min_sample_size(&self) -> u32 {
        self.min_sample_size.unwrap_or(constants::DEFAULT_MIN_SAMPLE_SIZE)
    }
}
