//! Error handling for the calibration engine.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod record_error;

pub use config_error::ConfigError;
pub use error_code::CalibrationErrorCode;
pub use record_error::{InvalidRecordError, RecordRef};
