//! Top-level engine configuration with 3-layer resolution.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::{BaselineConfig, ScoringConfig, SeverityConfig};
use crate::constants;
use crate::errors::ConfigError;

/// Configuration value object handed to the engine at construction.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`CALIBRATION_*`)
/// 2. Project config (`calibration.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct IntelligenceConfig {
    pub severity: SeverityConfig,
    pub baseline: BaselineConfig,
    pub scoring: ScoringConfig,
}

impl IntelligenceConfig {
    /// Load configuration with 3-layer resolution, then validate it.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config
        let project_config_path = root.join(constants::CONFIG_FILE_NAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "loaded project config");
        }

        // Layer 1: environment variables
        Self::apply_env_overrides(&mut config);

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the effective configuration values.
    pub fn validate(config: &IntelligenceConfig) -> Result<(), ConfigError> {
        let severity = &config.severity;
        let thresholds = [
            ("severity.critical_p", severity.effective_critical_p()),
            ("severity.moderate_p", severity.effective_moderate_p()),
            ("severity.low_p", severity.effective_low_p()),
        ];
        for (field, p) in thresholds {
            if !(p > 0.0 && p < 1.0) {
                return Err(invalid(field, "must be strictly between 0.0 and 1.0"));
            }
        }
        if severity.effective_critical_p() >= severity.effective_moderate_p() {
            return Err(invalid(
                "severity.critical_p",
                "must be smaller than severity.moderate_p",
            ));
        }
        if severity.effective_moderate_p() >= severity.effective_low_p() {
            return Err(invalid(
                "severity.moderate_p",
                "must be smaller than severity.low_p",
            ));
        }
        // The floor may be raised, never lowered below the default.
        if severity.effective_min_sample_size() < constants::DEFAULT_MIN_SAMPLE_SIZE {
            return Err(invalid(
                "severity.min_sample_size",
                "must be at least 3",
            ));
        }

        let fallback = config.baseline.effective_fallback_high_pct();
        if !(0.0..=100.0).contains(&fallback) {
            return Err(invalid(
                "baseline.fallback_high_pct",
                "must be between 0.0 and 100.0",
            ));
        }

        // A zero weight would let an anomaly leave the score at 100.
        let weights = [
            ("scoring.critical_weight", config.scoring.effective_critical_weight()),
            ("scoring.moderate_weight", config.scoring.effective_moderate_weight()),
            ("scoring.low_weight", config.scoring.effective_low_weight()),
        ];
        for (field, weight) in weights {
            if weight == 0 {
                return Err(invalid(field, "must be greater than 0"));
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut IntelligenceConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: IntelligenceConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut IntelligenceConfig, other: &IntelligenceConfig) {
        // Severity
        if other.severity.critical_p.is_some() {
            base.severity.critical_p = other.severity.critical_p;
        }
        if other.severity.moderate_p.is_some() {
            base.severity.moderate_p = other.severity.moderate_p;
        }
        if other.severity.low_p.is_some() {
            base.severity.low_p = other.severity.low_p;
        }
        if other.severity.min_sample_size.is_some() {
            base.severity.min_sample_size = other.severity.min_sample_size;
        }

        // Baseline
        if other.baseline.fallback_high_pct.is_some() {
            base.baseline.fallback_high_pct = other.baseline.fallback_high_pct;
        }

        // Scoring
        if other.scoring.critical_weight.is_some() {
            base.scoring.critical_weight = other.scoring.critical_weight;
        }
        if other.scoring.moderate_weight.is_some() {
            base.scoring.moderate_weight = other.scoring.moderate_weight;
        }
        if other.scoring.low_weight.is_some() {
            base.scoring.low_weight = other.scoring.low_weight;
        }
        if other.scoring.concentration_weight.is_some() {
            base.scoring.concentration_weight = other.scoring.concentration_weight;
        }
    }

    fn apply_env_overrides(config: &mut IntelligenceConfig) {
        env_override("CALIBRATION_CRITICAL_P", &mut config.severity.critical_p);
        env_override("CALIBRATION_MODERATE_P", &mut config.severity.moderate_p);
        env_override("CALIBRATION_LOW_P", &mut config.severity.low_p);
        env_override(
            "CALIBRATION_MIN_SAMPLE_SIZE",
            &mut config.severity.min_sample_size,
        );
        env_override(
            "CALIBRATION_FALLBACK_HIGH_PCT",
            &mut config.baseline.fallback_high_pct,
        );
        env_override(
            "CALIBRATION_CRITICAL_WEIGHT",
            &mut config.scoring.critical_weight,
        );
        env_override(
            "CALIBRATION_MODERATE_WEIGHT",
            &mut config.scoring.moderate_weight,
        );
        env_override("CALIBRATION_LOW_WEIGHT", &mut config.scoring.low_weight);
        env_override(
            "CALIBRATION_CONCENTRATION_WEIGHT",
            &mut config.scoring.concentration_weight,
        );
    }
}

/// Overwrite `slot` with the parsed value of `key`, if set and parseable.
fn env_override<T: FromStr>(key: &str, slot: &mut Option<T>) {
    if let Ok(val) = std::env::var(key) {
        match val.parse::<T>() {
            Ok(v) => *slot = Some(v),
            Err(_) => tracing::warn!(key, value = %val, "ignoring unparseable config override"),
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
