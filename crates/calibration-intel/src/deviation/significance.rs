//! One-sample z-test for a proportion via `statrs`.
//!
//! z = (p̂ − p0) / sqrt(p0 (1 − p0) / n), two-sided p = erfc(|z| / √2).
//! |z| grows with both |p̂ − p0| and √n, so the p-value is monotonic in
//! magnitude and sample size for a fixed baseline.

use std::f64::consts::SQRT_2;

use statrs::function::erf::erfc;

/// |z| is reported up to this bound; beyond it p is 0 at f64 precision anyway.
pub const MAX_ABS_Z: f64 = 40.0;

/// Differences smaller than this (in percentage points) are treated as zero.
const MAGNITUDE_EPSILON: f64 = 1e-9;

/// Test statistic and two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Significance {
    pub z_score: f64,
    pub p_value: f64,
}

impl Significance {
    /// No evidence of a difference.
    pub fn none() -> Self {
        Self {
            z_score: 0.0,
            p_value: 1.0,
        }
    }
}

/// Test a group's deviation against its baseline.
///
/// `magnitude_pct`: observed − expected, in percentage points.
/// `expected_pct`: the baseline, in percent.
/// `sample_size`: group size n.
///
/// A degenerate baseline (0% or 100%) has zero variance: any non-zero
/// deviation from it is maximally significant.
pub fn proportion_z_test(magnitude_pct: f64, expected_pct: f64, sample_size: u32) -> Significance {
    if sample_size == 0 || !magnitude_pct.is_finite() || magnitude_pct.abs() < MAGNITUDE_EPSILON {
        return Significance::none();
    }

    let p0 = (expected_pct / 100.0).clamp(0.0, 1.0);
    let variance = p0 * (1.0 - p0) / sample_size as f64;

    let z = if variance > 0.0 && variance.is_finite() {
        (magnitude_pct / 100.0) / variance.sqrt()
    } else {
        magnitude_pct.signum() * MAX_ABS_Z
    };
    let z = z.clamp(-MAX_ABS_Z, MAX_ABS_Z);

    let p_value = erfc(z.abs() / SQRT_2).clamp(0.0, 1.0);
    Significance { z_score: z, p_value }
}
