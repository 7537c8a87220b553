//! Tests for the calibration configuration system.

use std::sync::Mutex;

use calibration_core::config::IntelligenceConfig;
use calibration_core::errors::{CalibrationErrorCode, ConfigError};

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all CALIBRATION_ env vars to prevent cross-test contamination.
fn clear_calibration_env_vars() {
    for key in [
        "CALIBRATION_CRITICAL_P",
        "CALIBRATION_MODERATE_P",
        "CALIBRATION_LOW_P",
        "CALIBRATION_MIN_SAMPLE_SIZE",
        "CALIBRATION_FALLBACK_HIGH_PCT",
        "CALIBRATION_CRITICAL_WEIGHT",
        "CALIBRATION_MODERATE_WEIGHT",
        "CALIBRATION_LOW_WEIGHT",
        "CALIBRATION_CONCENTRATION_WEIGHT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn empty_toml_yields_documented_defaults() {
    let config = IntelligenceConfig::from_toml("").unwrap();

    assert_eq!(config.severity.effective_critical_p(), 0.01);
    assert_eq!(config.severity.effective_moderate_p(), 0.05);
    assert_eq!(config.severity.effective_low_p(), 0.10);
    assert_eq!(config.severity.effective_min_sample_size(), 3);
    assert_eq!(config.baseline.effective_fallback_high_pct(), 25.0);
    assert_eq!(config.scoring.effective_critical_weight(), 15);
    assert_eq!(config.scoring.effective_moderate_weight(), 5);
    assert_eq!(config.scoring.effective_low_weight(), 1);
    assert_eq!(config.scoring.effective_concentration_weight(), 2);
    assert!(IntelligenceConfig::validate(&config).is_ok());
}

#[test]
fn partial_toml_keeps_unset_defaults() {
    let config = IntelligenceConfig::from_toml(
        r#"
[severity]
critical_p = 0.001

[scoring]
critical_weight = 20
"#,
    )
    .unwrap();

    assert_eq!(config.severity.effective_critical_p(), 0.001);
    assert_eq!(config.severity.effective_moderate_p(), 0.05);
    assert_eq!(config.scoring.effective_critical_weight(), 20);
    assert_eq!(config.scoring.effective_moderate_weight(), 5);
}

#[test]
fn invalid_toml_is_parse_error() {
    let err = IntelligenceConfig::from_toml("[severity\ncritical_p = ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseError { .. }));
    assert_eq!(err.error_code(), "CONFIG_ERROR");
}

#[test]
fn validation_rejects_unordered_thresholds() {
    let config = IntelligenceConfig::from_toml(
        r#"
[severity]
critical_p = 0.05
moderate_p = 0.01
"#,
    )
    .unwrap();
    match IntelligenceConfig::validate(&config) {
        Err(ConfigError::ValidationFailed { field, .. }) => {
            assert_eq!(field, "severity.critical_p");
        }
        other => panic!("expected validation failure, got {other:?}"),
    }
}

#[test]
fn validation_rejects_out_of_range_values() {
    let cases = [
        ("[severity]\nlow_p = 1.5", "severity.low_p"),
        ("[severity]\nmin_sample_size = 0", "severity.min_sample_size"),
        ("[severity]\nmin_sample_size = 1", "severity.min_sample_size"),
        ("[severity]\nmin_sample_size = 2", "severity.min_sample_size"),
        ("[baseline]\nfallback_high_pct = 120.0", "baseline.fallback_high_pct"),
        ("[scoring]\nlow_weight = 0", "scoring.low_weight"),
    ];
    for (toml, expected_field) in cases {
        let config = IntelligenceConfig::from_toml(toml).unwrap();
        match IntelligenceConfig::validate(&config) {
            Err(ConfigError::ValidationFailed { field, .. }) => {
                assert_eq!(field, expected_field, "for input {toml:?}");
            }
            other => panic!("expected validation failure for {toml:?}, got {other:?}"),
        }
    }
}

#[test]
fn small_sample_floor_can_only_be_raised() {
    for (min, ok) in [(2, false), (3, true), (25, true)] {
        let config =
            IntelligenceConfig::from_toml(&format!("[severity]\nmin_sample_size = {min}")).unwrap();
        assert_eq!(IntelligenceConfig::validate(&config).is_ok(), ok, "min_sample_size = {min}");
    }
}

#[test]
fn zero_concentration_weight_is_allowed() {
    let config = IntelligenceConfig::from_toml("[scoring]\nconcentration_weight = 0").unwrap();
    assert!(IntelligenceConfig::validate(&config).is_ok());
}

#[test]
fn load_without_project_file_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_calibration_env_vars();

    let dir = tempdir();
    let config = IntelligenceConfig::load(dir.path()).unwrap();
    assert_eq!(config, IntelligenceConfig::default());
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_calibration_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("calibration.toml"),
        r#"
[severity]
min_sample_size = 5

[baseline]
fallback_high_pct = 30.0
"#,
    )
    .unwrap();
    std::env::set_var("CALIBRATION_MIN_SAMPLE_SIZE", "10");

    let config = IntelligenceConfig::load(dir.path()).unwrap();
    assert_eq!(config.severity.min_sample_size, Some(10));
    assert_eq!(config.baseline.fallback_high_pct, Some(30.0));

    clear_calibration_env_vars();
}

#[test]
fn unparseable_env_value_is_ignored() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_calibration_env_vars();

    let dir = tempdir();
    std::env::set_var("CALIBRATION_CRITICAL_WEIGHT", "lots");
    let config = IntelligenceConfig::load(dir.path()).unwrap();
    assert_eq!(config.scoring.critical_weight, None);

    clear_calibration_env_vars();
}

#[test]
fn load_rejects_invalid_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_calibration_env_vars();

    let dir = tempdir();
    std::fs::write(
        dir.path().join("calibration.toml"),
        "[scoring]\ncritical_weight = 0\n",
    )
    .unwrap();
    let err = IntelligenceConfig::load(dir.path()).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { .. }));
}
