//! The four categorical axes used for bias analysis.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A categorical dimension employees are grouped by.
///
/// The set is closed: the assembler iterates [`Dimension::ALL`] rather than
/// dispatching over an open registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    Location,
    Function,
    Level,
    Tenure,
}

impl Dimension {
    /// All dimensions, in report order.
    pub const ALL: [Dimension; 4] = [
        Dimension::Location,
        Dimension::Function,
        Dimension::Level,
        Dimension::Tenure,
    ];

    /// Canonical dimension name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Location => "location",
            Self::Function => "function",
            Self::Level => "level",
            Self::Tenure => "tenure",
        }
    }

    /// Parse a dimension key as the data layer spells it.
    ///
    /// Case-insensitive; accepts `job_function`, `job_level`, and
    /// `tenure_band` as aliases.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "location" => Some(Self::Location),
            "function" | "job_function" => Some(Self::Function),
            "level" | "job_level" => Some(Self::Level),
            "tenure" | "tenure_band" => Some(Self::Tenure),
            _ => None,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
