//! Deviation analysis: observed vs. baseline high rate, with significance.
//!
//! One-sample z-test for a proportion, tiered into None/Low/Moderate/Critical
//! with a hard small-sample floor.

pub mod analyzer;
pub mod significance;
pub mod types;

pub use analyzer::DeviationAnalyzer;
pub use significance::{proportion_z_test, Significance};
pub use types::{Deviation, Severity};
