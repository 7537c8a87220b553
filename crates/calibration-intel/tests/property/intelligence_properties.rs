use calibration_core::config::IntelligenceConfig;
use calibration_core::types::{Dimension, PerformanceBucket, RatingRecord};
use calibration_intel::level_distribution::LevelDistributionRow;
use calibration_intel::{Baseline, DeviationAnalyzer, DimensionGroup, IntelligenceEngine, Severity};
use proptest::prelude::*;

fn bucket_strategy() -> impl Strategy<Value = PerformanceBucket> {
    prop_oneof![
        Just(PerformanceBucket::Low),
        Just(PerformanceBucket::Medium),
        Just(PerformanceBucket::High),
    ]
}

fn label_strategy(prefix: &'static str, count: u8) -> impl Strategy<Value = Option<String>> {
    proptest::option::of((0..count).prop_map(move |i| format!("{prefix}{i}")))
}

fn record_strategy() -> impl Strategy<Value = RatingRecord> {
    (
        label_strategy("loc", 4),
        label_strategy("fn", 3),
        label_strategy("lvl", 5),
        label_strategy("ten", 3),
        bucket_strategy(),
    )
        .prop_map(|(location, function, level, tenure, bucket)| {
            let mut record = RatingRecord::new(bucket);
            for (dimension, label) in [
                (Dimension::Location, location),
                (Dimension::Function, function),
                (Dimension::Level, level),
                (Dimension::Tenure, tenure),
            ] {
                if let Some(label) = label {
                    record = record.with_category(dimension, label);
                }
            }
            record
        })
}

fn baseline(pct: f64) -> Baseline {
    Baseline {
        expected_high_pct: pct,
        group_count: 3,
        is_fallback: false,
    }
}

/// Severity of a group whose high rate sits `magnitude` points from `base`.
fn severity_at(analyzer: &DeviationAnalyzer, base: f64, magnitude: f64, n: u32) -> Severity {
    let group = DimensionGroup {
        category_label: "g".to_string(),
        sample_size: n,
        observed_high_count: 0,
        observed_high_pct: base + magnitude,
    };
    analyzer.analyze(&group, &baseline(base)).severity
}

proptest! {
    #[test]
    fn analysis_is_deterministic(records in prop::collection::vec(record_strategy(), 0..300)) {
        let engine = IntelligenceEngine::with_defaults();
        prop_assert_eq!(engine.analyze(&records), engine.analyze(&records));
    }

    #[test]
    fn quality_score_bounds_and_perfect_iff_clean(
        records in prop::collection::vec(record_strategy(), 0..300),
    ) {
        let report = IntelligenceEngine::with_defaults().analyze(&records);
        prop_assert!(report.quality_score <= 100);
        prop_assert_eq!(report.quality_score == 100, report.total_anomalies() == 0);
    }

    #[test]
    fn anomaly_counts_match_deviations(
        records in prop::collection::vec(record_strategy(), 0..200),
    ) {
        let report = IntelligenceEngine::with_defaults().analyze(&records);
        for analysis in report.analyses() {
            let counted = analysis
                .deviations
                .iter()
                .filter(|d| d.severity != Severity::None)
                .count();
            prop_assert_eq!(analysis.anomaly_count as usize, counted);
            for pair in analysis.deviations.windows(2) {
                prop_assert!(pair[0].severity >= pair[1].severity);
            }
        }
    }

    #[test]
    fn level_rows_always_sum(n in 0u32..5_000, high_pct in 0.0f64..=100.0) {
        let row = LevelDistributionRow::approximate("L", n, high_pct);
        prop_assert_eq!(row.low_count + row.medium_count + row.high_count, n);
    }

    #[test]
    fn severity_monotonic_in_magnitude(
        base in 5.0f64..95.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
        n in 1u32..2_000,
        positive in any::<bool>(),
    ) {
        let analyzer = DeviationAnalyzer::default();
        let room = if positive { 100.0 - base } else { base };
        let sign = if positive { 1.0 } else { -1.0 };
        let (small, large) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            severity_at(&analyzer, base, sign * small * room, n)
                <= severity_at(&analyzer, base, sign * large * room, n)
        );
    }

    #[test]
    fn severity_monotonic_in_sample_size(
        base in 5.0f64..95.0,
        fraction in -1.0f64..1.0,
        n1 in 1u32..2_000,
        n2 in 1u32..2_000,
    ) {
        let analyzer = DeviationAnalyzer::default();
        let magnitude = if fraction >= 0.0 { fraction * (100.0 - base) } else { fraction * base };
        let (small, large) = if n1 <= n2 { (n1, n2) } else { (n2, n1) };
        prop_assert!(
            severity_at(&analyzer, base, magnitude, small)
                <= severity_at(&analyzer, base, magnitude, large)
        );
    }

    #[test]
    fn small_samples_never_critical(
        base in 0.0f64..=100.0,
        observed in 0.0f64..=100.0,
        n in 1u32..3,
    ) {
        let analyzer = DeviationAnalyzer::default();
        let severity = severity_at(&analyzer, base, observed - base, n);
        prop_assert!(severity <= Severity::Low);
    }

    #[test]
    fn floor_follows_configuration(min in 3u32..50, n in 1u32..100) {
        let config =
            IntelligenceConfig::from_toml(&format!("[severity]\nmin_sample_size = {min}")).unwrap();
        prop_assert!(IntelligenceConfig::validate(&config).is_ok());
        let analyzer = DeviationAnalyzer::new(&config.severity);
        let severity = analyzer.classify(0.0, n);
        if n < min {
            prop_assert_eq!(severity, Severity::Low);
        } else {
            prop_assert_eq!(severity, Severity::Critical);
        }
    }
}
