//! Quality score configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Penalty weights subtracted from 100 by the quality scorer.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    /// Penalty per Critical anomaly. Default: 15.
    pub critical_weight: Option<u32>,
    /// Penalty per Moderate anomaly. Default: 5.
    pub moderate_weight: Option<u32>,
    /// Penalty per Low anomaly. Default: 1.
    pub low_weight: Option<u32>,
    /// Penalty per anomaly beyond the first within a single dimension. Default: 2.
    pub concentration_weight: Option<u32>,
}

impl ScoringConfig {
    pub fn effective_critical_weight(&self) -> u32 {
        self.critical_weight.unwrap_or(constants::DEFAULT_CRITICAL_WEIGHT)
    }

    pub fn effective_moderate_weight(&self) -> u32 {
        self.moderate_weight.unwrap_or(constants::DEFAULT_MODERATE_WEIGHT)
    }

    pub fn effective_low_weight(&self) -> u32 {
        self.low_weight.unwrap_or(constants::DEFAULT_LOW_WEIGHT)
    }

    pub fn effective_concentration_weight(&self) -> u32 {
        self.concentration_weight
            .unwrap_or(constants::DEFAULT_CONCENTRATION_WEIGHT)
    }
}
