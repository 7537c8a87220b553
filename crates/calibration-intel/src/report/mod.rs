//! Intelligence report assembly across the four fixed dimensions.

pub mod engine;
pub mod types;

pub use engine::IntelligenceEngine;
pub use types::{DimensionAnalysis, IntelligenceReport};
