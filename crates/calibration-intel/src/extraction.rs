//! Raw row validation: `RawRatingRecord` → `RatingRecord`.
//!
//! Fails fast on the first malformed row. Unknown dimension keys are not
//! analysis axes and are ignored; blank labels count as missing values.

use std::collections::BTreeMap;

use calibration_core::errors::{InvalidRecordError, RecordRef};
use calibration_core::types::{Dimension, PerformanceBucket, RatingRecord, RawRatingRecord};

/// Validate every raw row, preserving input order.
pub fn extract_records(raw: &[RawRatingRecord]) -> Result<Vec<RatingRecord>, InvalidRecordError> {
    raw.iter()
        .enumerate()
        .map(|(position, row)| extract_record(position, row))
        .collect()
}

/// Validate a single raw row found at `position` in the input.
pub fn extract_record(
    position: usize,
    raw: &RawRatingRecord,
) -> Result<RatingRecord, InvalidRecordError> {
    let record_ref = || RecordRef {
        position,
        employee_id: raw.employee_id.clone(),
    };

    let performance = match raw.performance.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => value,
        _ => {
            return Err(InvalidRecordError::MissingField {
                record: record_ref(),
                field: "performance",
            })
        }
    };
    let performance_bucket =
        PerformanceBucket::parse(performance).ok_or_else(|| InvalidRecordError::UnrecognizedBucket {
            record: record_ref(),
            value: performance.to_string(),
        })?;

    Ok(RatingRecord {
        employee_id: raw.employee_id.clone(),
        category_values: resolve_categories(&raw.category_values),
        performance_bucket,
    })
}

/// Map raw dimension keys onto the closed dimension set.
///
/// When both a canonical name and an alias are present (`tenure` and
/// `tenure_band`), the canonical key wins.
fn resolve_categories(raw: &BTreeMap<String, String>) -> BTreeMap<Dimension, String> {
    let mut resolved = BTreeMap::new();
    for (key, label) in raw {
        let Some(dimension) = Dimension::from_name(key) else {
            continue;
        };
        let label = label.trim();
        if label.is_empty() {
            continue;
        }
        let is_canonical = key.trim().eq_ignore_ascii_case(dimension.name());
        if is_canonical || !resolved.contains_key(&dimension) {
            resolved.insert(dimension, label.to_string());
        }
    }
    resolved
}
