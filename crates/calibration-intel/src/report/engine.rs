//! IntelligenceEngine: orchestrates aggregation → baseline → deviation →
//! scoring for every dimension and assembles the report.

use calibration_core::config::IntelligenceConfig;
use calibration_core::errors::{ConfigError, InvalidRecordError};
use calibration_core::types::{Dimension, RatingRecord, RawRatingRecord};
use tracing::{debug, info};

use super::types::{DimensionAnalysis, IntelligenceReport};
use crate::aggregation;
use crate::baseline::BaselineEstimator;
use crate::deviation::DeviationAnalyzer;
use crate::extraction;
use crate::scoring::QualityScorer;

/// The calibration intelligence engine.
///
/// Holds only immutable configuration, so one engine can be shared across
/// threads and invoked concurrently on different snapshots. Each call is
/// pure: the same records always produce the same report.
#[derive(Debug, Clone, Default)]
pub struct IntelligenceEngine {
    baseline: BaselineEstimator,
    analyzer: DeviationAnalyzer,
    scorer: QualityScorer,
}

impl IntelligenceEngine {
    /// Create an engine from a validated configuration.
    pub fn new(config: &IntelligenceConfig) -> Result<Self, ConfigError> {
        IntelligenceConfig::validate(config)?;
        Ok(Self {
            baseline: BaselineEstimator::new(&config.baseline),
            analyzer: DeviationAnalyzer::new(&config.severity),
            scorer: QualityScorer::new(&config.scoring),
        })
    }

    /// Create an engine with default thresholds and weights.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    /// Analyze a validated record snapshot.
    ///
    /// Never fails: dimensions without data yield empty analyses with an
    /// advisory fallback baseline, and the others are still computed.
    pub fn analyze(&self, records: &[RatingRecord]) -> IntelligenceReport {
        let [location_analysis, function_analysis, level_analysis, tenure_analysis] =
            Dimension::ALL.map(|dimension| self.analyze_dimension(records, dimension));

        let (quality_score, quality_breakdown) = self.scorer.score([
            location_analysis.deviations.as_slice(),
            function_analysis.deviations.as_slice(),
            level_analysis.deviations.as_slice(),
            tenure_analysis.deviations.as_slice(),
        ]);

        info!(
            records = records.len(),
            quality_score,
            anomalies = quality_breakdown.anomaly_count(),
            critical = quality_breakdown.critical_count,
            "intelligence report assembled"
        );

        IntelligenceReport {
            location_analysis,
            function_analysis,
            level_analysis,
            tenure_analysis,
            quality_score,
            quality_breakdown,
            record_count: records.len(),
        }
    }

    /// Validate raw rows, then analyze them.
    ///
    /// Fails on the first malformed row; nothing is silently dropped.
    pub fn analyze_raw(
        &self,
        raw: &[RawRatingRecord],
    ) -> Result<IntelligenceReport, InvalidRecordError> {
        let records = extraction::extract_records(raw)?;
        Ok(self.analyze(&records))
    }

    /// Run the per-dimension pipeline for a single dimension.
    pub fn analyze_dimension(
        &self,
        records: &[RatingRecord],
        dimension: Dimension,
    ) -> DimensionAnalysis {
        let groups = aggregation::aggregate(records, dimension);
        let baseline = self.baseline.estimate(&groups);
        let deviations = self.analyzer.analyze_all(&groups, &baseline);
        let anomaly_count = deviations.iter().filter(|d| d.is_anomaly()).count() as u32;

        debug!(
            %dimension,
            groups = groups.len(),
            baseline_high_pct = baseline.expected_high_pct,
            fallback = baseline.is_fallback,
            anomalies = anomaly_count,
            "dimension analyzed"
        );

        DimensionAnalysis {
            dimension,
            baseline_high_pct: baseline.expected_high_pct,
            baseline_is_fallback: baseline.is_fallback,
            deviations,
            anomaly_count,
        }
    }
}
