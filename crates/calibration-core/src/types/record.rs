//! Rating records: the engine's input snapshot.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Dimension, PerformanceBucket};

/// One employee's validated rating, as of analysis time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RatingRecord {
    /// Optional identity, used only when reporting problems.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employee_id: Option<String>,
    /// Category label per dimension. A missing key means "no value".
    #[serde(default)]
    pub category_values: BTreeMap<Dimension, String>,
    pub performance_bucket: PerformanceBucket,
}

impl RatingRecord {
    /// Create a record with no category values.
    pub fn new(performance_bucket: PerformanceBucket) -> Self {
        Self {
            employee_id: None,
            category_values: BTreeMap::new(),
            performance_bucket,
        }
    }

    /// Set the label for one dimension.
    pub fn with_category(mut self, dimension: Dimension, label: impl Into<String>) -> Self {
        self.category_values.insert(dimension, label.into());
        self
    }

    pub fn with_employee_id(mut self, id: impl Into<String>) -> Self {
        self.employee_id = Some(id.into());
        self
    }

    /// The record's label in `dimension`, trimmed.
    ///
    /// Blank labels read as missing.
    pub fn category(&self, dimension: Dimension) -> Option<&str> {
        self.category_values
            .get(&dimension)
            .map(|label| label.trim())
            .filter(|label| !label.is_empty())
    }

    pub fn is_high(&self) -> bool {
        self.performance_bucket.is_high()
    }
}

/// An unvalidated row as handed over by the session/data layer.
///
/// Keys of `category_values` are dimension names (see [`Dimension::from_name`]);
/// `performance` is the raw bucket text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRatingRecord {
    pub employee_id: Option<String>,
    pub category_values: BTreeMap<String, String>,
    pub performance: Option<String>,
}

impl RawRatingRecord {
    pub fn new(performance: impl Into<String>) -> Self {
        Self {
            performance: Some(performance.into()),
            ..Default::default()
        }
    }

    pub fn with_category(mut self, dimension: impl Into<String>, label: impl Into<String>) -> Self {
        self.category_values.insert(dimension.into(), label.into());
        self
    }

    pub fn with_employee_id(mut self, id: impl Into<String>) -> Self {
        self.employee_id = Some(id.into());
        self
    }
}
