//! Malformed input records.

use std::fmt;

use super::error_code::{self, CalibrationErrorCode};

/// Identifies an offending record by its position in the input and,
/// when the caller supplied one, its employee id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRef {
    pub position: usize,
    pub employee_id: Option<String>,
}

impl fmt::Display for RecordRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.employee_id {
            Some(id) => write!(f, "record #{} (employee {})", self.position, id),
            None => write!(f, "record #{}", self.position),
        }
    }
}

/// A record the engine refuses to analyze.
///
/// Malformed records are never coerced or dropped: doing so would skew
/// group percentages without any visible signal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidRecordError {
    #[error("{record}: missing required field `{field}`")]
    MissingField {
        record: RecordRef,
        field: &'static str,
    },

    #[error("{record}: unrecognized performance bucket `{value}`")]
    UnrecognizedBucket { record: RecordRef, value: String },
}

impl InvalidRecordError {
    /// The offending record.
    pub fn record(&self) -> &RecordRef {
        match self {
            Self::MissingField { record, .. } | Self::UnrecognizedBucket { record, .. } => record,
        }
    }

    /// Position of the offending record in the input sequence.
    pub fn position(&self) -> usize {
        self.record().position
    }
}

impl CalibrationErrorCode for InvalidRecordError {
    fn error_code(&self) -> &'static str {
        error_code::INVALID_RECORD
    }
}
