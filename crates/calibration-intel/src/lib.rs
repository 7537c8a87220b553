//! # calibration-intel
//!
//! Calibration intelligence engine. Scans a snapshot of rated employees,
//! compares each category's high-performer rate against its dimension's
//! baseline, flags statistically anomalous groups, and summarizes overall
//! calibration health in a 0-100 quality score.
//!
//! Pipeline: extraction → aggregation (per dimension) → baseline →
//! deviation → scoring → report.

pub mod aggregation;
pub mod baseline;
pub mod deviation;
pub mod extraction;
pub mod level_distribution;
pub mod report;
pub mod scoring;

pub use aggregation::{aggregate, DimensionGroup};
pub use baseline::{Baseline, BaselineEstimator};
pub use deviation::{Deviation, DeviationAnalyzer, Severity};
pub use extraction::extract_records;
pub use level_distribution::{
    approximate_level_distribution, observed_level_distribution, LevelDistributionRow,
};
pub use report::{DimensionAnalysis, IntelligenceEngine, IntelligenceReport};
pub use scoring::{QualityBreakdown, QualityScorer};
