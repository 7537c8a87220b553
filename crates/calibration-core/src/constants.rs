/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Two-sided p-value below which a deviation is Critical ("<1% chance this pattern is random").
pub const DEFAULT_CRITICAL_P: f64 = 0.01;

/// Two-sided p-value below which a deviation is Moderate.
pub const DEFAULT_MODERATE_P: f64 = 0.05;

/// Two-sided p-value below which a deviation is Low.
pub const DEFAULT_LOW_P: f64 = 0.10;

/// Groups smaller than this never classify above Low.
pub const DEFAULT_MIN_SAMPLE_SIZE: u32 = 3;

/// Expected high-performer percentage used when a dimension has no groups.
pub const DEFAULT_FALLBACK_HIGH_PCT: f64 = 25.0;

/// Quality score penalty per Critical anomaly.
pub const DEFAULT_CRITICAL_WEIGHT: u32 = 15;

/// Quality score penalty per Moderate anomaly.
pub const DEFAULT_MODERATE_WEIGHT: u32 = 5;

/// Quality score penalty per Low anomaly.
pub const DEFAULT_LOW_WEIGHT: u32 = 1;

/// Quality score penalty per anomaly beyond the first within one dimension.
pub const DEFAULT_CONCENTRATION_WEIGHT: u32 = 2;

/// Share of the non-high remainder assigned to Low in the approximate level distribution.
pub const LEVEL_LOW_SHARE: f64 = 0.40;

/// Share of the non-high remainder assigned to Medium in the approximate level distribution.
pub const LEVEL_MEDIUM_SHARE: f64 = 0.60;

/// Project config file name looked up in the analysis root.
pub const CONFIG_FILE_NAME: &str = "calibration.toml";
