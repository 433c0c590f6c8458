//! Profile interpolation and half-width extraction.
//!
//! The half-width of an anomaly profile — the horizontal distance over
//! which it falls to half its peak amplitude — is a classic rule-of-thumb
//! depth estimator. The search resamples the profile onto a fine uniform
//! grid, ranks the resampled points by distance from the half-amplitude
//! target, and pairs the best candidate with the nearest-ranked point more
//! than one station spacing away.

use crate::forward::ForwardError;
use crate::types::{HalfWidth, ProfileData};

/// Number of resampled points used by the half-width search.
pub const HALF_WIDTH_SAMPLES: usize = 200;

/// Piecewise-linear interpolation of (xs, ys) at `x`.
///
/// `xs` must be ascending. Queries outside the sample range clamp to the
/// endpoint values.
pub fn interp_linear(xs: &[f64], ys: &[f64], x: f64) -> f64 {
    debug_assert_eq!(xs.len(), ys.len());

    if x <= xs[0] {
        return ys[0];
    }
    if x >= xs[xs.len() - 1] {
        return ys[ys.len() - 1];
    }

    // partition_point finds the first sample at or beyond x.
    let hi = xs.partition_point(|&v| v < x).max(1);
    let lo = hi - 1;
    let t = (x - xs[lo]) / (xs[hi] - xs[lo]);
    ys[lo] + t * (ys[hi] - ys[lo])
}

/// Locate the half-amplitude pair of a profile.
///
/// The target is half the signed value at the absolute peak. Returns
/// [`ForwardError::DegenerateProfile`] when no resampled point lies more
/// than `spacing` from the best candidate, which happens for profiles
/// narrower than a couple of stations.
pub fn half_width(profile: &ProfileData, spacing: f64) -> Result<HalfWidth, ForwardError> {
    let xs = &profile.positions;
    let ys = &profile.values;
    if xs.len() < 2 {
        return Err(ForwardError::DegenerateProfile { spacing });
    }

    let peak_idx = (0..ys.len())
        .max_by(|&a, &b| ys[a].abs().total_cmp(&ys[b].abs()))
        .unwrap_or(0);
    let target = ys[peak_idx] / 2.0;

    // Resample onto a fine uniform grid spanning the profile.
    let x_min = xs[0];
    let x_max = xs[xs.len() - 1];
    let step = (x_max - x_min) / (HALF_WIDTH_SAMPLES - 1) as f64;
    let x_fine: Vec<f64> = (0..HALF_WIDTH_SAMPLES)
        .map(|i| x_min + i as f64 * step)
        .collect();
    let y_fine: Vec<f64> = x_fine.iter().map(|&x| interp_linear(xs, ys, x)).collect();

    // Rank by distance from the half-amplitude target.
    let mut order: Vec<usize> = (0..HALF_WIDTH_SAMPLES).collect();
    order.sort_by(|&a, &b| {
        (y_fine[a] - target)
            .abs()
            .total_cmp(&(y_fine[b] - target).abs())
    });

    let first = order[0];
    let second = order
        .iter()
        .copied()
        .find(|&i| (x_fine[i] - x_fine[first]).abs() > spacing)
        .ok_or(ForwardError::DegenerateProfile { spacing })?;

    Ok(HalfWidth {
        positions: [x_fine[first], x_fine[second]],
        values: [y_fine[first], y_fine[second]],
        width: (x_fine[second] - x_fine[first]).abs(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn synthetic_profile(f: impl Fn(f64) -> f64) -> ProfileData {
        let positions: Vec<f64> = (0..37).map(|i| -36.0 + i as f64 * 2.0).collect();
        let values: Vec<f64> = positions.iter().map(|&x| f(x)).collect();
        let track = positions.iter().map(|&x| [0.0, x]).collect();
        ProfileData {
            positions,
            values,
            track,
        }
    }

    #[test]
    fn test_interp_linear_exact_and_midpoint() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [0.0, 10.0, 0.0];
        assert_abs_diff_eq!(interp_linear(&xs, &ys, 1.0), 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(interp_linear(&xs, &ys, 0.5), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(interp_linear(&xs, &ys, 1.5), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_interp_linear_clamps_outside_range() {
        let xs = [0.0, 1.0];
        let ys = [3.0, 7.0];
        assert_abs_diff_eq!(interp_linear(&xs, &ys, -5.0), 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(interp_linear(&xs, &ys, 5.0), 7.0, epsilon = 1e-12);
    }

    #[test]
    fn test_half_width_symmetric_for_even_profile() {
        // Gaussian peaked at the origin: half-amplitude crossings at
        // ±σ√(2 ln 2) ≈ ±5.89 for σ = 5.
        let sigma = 5.0;
        let profile = synthetic_profile(|x| 40.0 * (-x * x / (2.0 * sigma * sigma)).exp());
        let hw = half_width(&profile, 2.0).unwrap();

        let step = 72.0 / (HALF_WIDTH_SAMPLES - 1) as f64;
        assert!(
            (hw.positions[0] + hw.positions[1]).abs() <= step,
            "positions {:?} not symmetric about the origin",
            hw.positions
        );
        let expected = 2.0 * sigma * (2.0_f64.ln() * 2.0).sqrt();
        assert_abs_diff_eq!(hw.width, expected, epsilon = 1.0);
    }

    #[test]
    fn test_half_width_uses_signed_peak_for_negative_anomaly() {
        let sigma = 5.0;
        let profile = synthetic_profile(|x| -40.0 * (-x * x / (2.0 * sigma * sigma)).exp());
        let hw = half_width(&profile, 2.0).unwrap();
        assert!(hw.values[0] < 0.0);
        assert!(hw.values[1] < 0.0);
    }

    #[test]
    fn test_half_width_degenerate_profile_is_an_error() {
        // A flat profile offers no second crossing beyond a huge spacing.
        let profile = synthetic_profile(|_| 1.0);
        let result = half_width(&profile, 100.0);
        assert!(matches!(
            result,
            Err(ForwardError::DegenerateProfile { .. })
        ));
    }
}
