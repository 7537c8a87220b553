//! # calibration-core
//!
//! Foundation crate for the calibration intelligence engine.
//! Defines the rating domain types, errors, config, tracing setup, and constants.
//! The analysis crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing_setup;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::IntelligenceConfig;
pub use errors::{CalibrationErrorCode, ConfigError, InvalidRecordError};
pub use tracing_setup::init_tracing;
pub use types::{Dimension, PerformanceBucket, RatingRecord, RawRatingRecord};
