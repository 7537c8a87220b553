//! Report types consumed by the presentation layer.

use calibration_core::types::Dimension;
use serde::{Deserialize, Serialize};

use crate::deviation::{Deviation, Severity};
use crate::scoring::QualityBreakdown;

/// Analysis of one dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionAnalysis {
    pub dimension: Dimension,
    /// Expected high-performer rate, for chart reference lines.
    pub baseline_high_pct: f64,
    /// The dimension had no data and the baseline is the configured fallback.
    pub baseline_is_fallback: bool,
    /// Ordered by severity, then |magnitude|, then label.
    pub deviations: Vec<Deviation>,
    /// Deviations with severity above `None`.
    pub anomaly_count: u32,
}

impl DimensionAnalysis {
    /// Whether the dimension had any groups at all.
    pub fn has_data(&self) -> bool {
        !self.deviations.is_empty()
    }

    pub fn anomalies(&self) -> impl Iterator<Item = &Deviation> {
        self.deviations.iter().filter(|d| d.is_anomaly())
    }

    pub fn count_with_severity(&self, severity: Severity) -> usize {
        self.deviations.iter().filter(|d| d.severity == severity).count()
    }

    /// Look up a group's deviation by its label.
    pub fn deviation_for(&self, category: &str) -> Option<&Deviation> {
        self.deviations.iter().find(|d| d.category == category)
    }
}

/// Full engine output for one record snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntelligenceReport {
    pub location_analysis: DimensionAnalysis,
    pub function_analysis: DimensionAnalysis,
    pub level_analysis: DimensionAnalysis,
    pub tenure_analysis: DimensionAnalysis,
    /// 0-100; 100 iff there are no anomalies in any dimension.
    pub quality_score: u8,
    pub quality_breakdown: QualityBreakdown,
    /// Number of records analyzed.
    pub record_count: usize,
}

impl IntelligenceReport {
    pub fn analysis(&self, dimension: Dimension) -> &DimensionAnalysis {
        match dimension {
            Dimension::Location => &self.location_analysis,
            Dimension::Function => &self.function_analysis,
            Dimension::Level => &self.level_analysis,
            Dimension::Tenure => &self.tenure_analysis,
        }
    }

    /// All four analyses in report order.
    pub fn analyses(&self) -> [&DimensionAnalysis; 4] {
        [
            &self.location_analysis,
            &self.function_analysis,
            &self.level_analysis,
            &self.tenure_analysis,
        ]
    }

    pub fn baseline_high_pct(&self, dimension: Dimension) -> f64 {
        self.analysis(dimension).baseline_high_pct
    }

    pub fn total_anomalies(&self) -> u32 {
        self.analyses().iter().map(|a| a.anomaly_count).sum()
    }

    pub fn has_anomalies(&self) -> bool {
        self.total_anomalies() > 0
    }
}
