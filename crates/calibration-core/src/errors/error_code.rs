//! CalibrationErrorCode trait for the presentation boundary.

/// Trait for mapping engine errors to stable machine-readable codes.
/// Every error enum implements this so callers can branch on the code
/// instead of parsing messages.
pub trait CalibrationErrorCode {
    /// Returns the error code string (e.g., "INVALID_RECORD").
    fn error_code(&self) -> &'static str;

    /// Returns the tagged error string: `[ERROR_CODE] message`.
    fn tagged_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const INVALID_RECORD: &str = "INVALID_RECORD";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
