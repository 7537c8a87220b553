//! Configuration system for the calibration engine.
//! TOML-based, 3-layer resolution: env > project > defaults.

pub mod baseline_config;
pub mod intelligence_config;
pub mod scoring_config;
pub mod severity_config;

pub use baseline_config::BaselineConfig;
pub use intelligence_config::IntelligenceConfig;
pub use scoring_config::ScoringConfig;
pub use severity_config::SeverityConfig;
