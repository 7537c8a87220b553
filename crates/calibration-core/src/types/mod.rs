//! Rating domain types shared across the workspace.

pub mod bucket;
pub mod dimension;
pub mod record;

pub use bucket::PerformanceBucket;
pub use dimension::Dimension;
pub use record::{RatingRecord, RawRatingRecord};
