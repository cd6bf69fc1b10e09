//! Largest-Triangle-Three-Buckets point selection.
//!
//! ## Purpose
//!
//! This module implements the LTTB bucket walk: a reduction that keeps the
//! `threshold` points (always including the first and the last) that best
//! preserve the visual shape of a curve, measured by triangle area. The
//! walk is formulated over a retention mask so the single-pass, stacked,
//! two-pass, and multi-dimensional families all share one kernel.
//!
//! ## Design notes
//!
//! * **Bucketing**: The interior `n-2` points are partitioned into
//!   `threshold-2` contiguous buckets of fractional, floor-rounded size
//!   `every = (n-2)/(threshold-2)`.
//! * **Look-ahead**: Each bucket's candidates are scored against the
//!   average point of the *next* bucket, which approximates where the
//!   curve goes and avoids bias toward local noise.
//! * **Area**: Standard shoelace/cross-product formula, `abs(...) * 0.5`,
//!   computed in `f64` on the epoch-millisecond axis.
//! * **Multi-dimensional**: With several value rows, a candidate wins its
//!   bucket as soon as it posts a new maximum area in *any* dimension;
//!   ties resolve to the first maximum.
//! * **NaN**: NaN values count as `0.0` for area arithmetic only; the
//!   retained sample keeps its original value.
//!
//! ## Invariants
//!
//! * Input timestamps are non-decreasing (caller's responsibility).
//! * All value rows have the same length as the time axis.
//! * The first and last indices are always retained.
//!
//! ## Non-goals
//!
//! * This module does not coordinate passes across a series set (see the
//!   two-pass transform) and does not cache masks (see the stacked
//!   transform).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::mask::RetentionMask;
use crate::primitives::sample::Series;

// ============================================================================
// Area Helpers
// ============================================================================

/// NaN-to-zero substitution for area arithmetic.
#[inline]
fn nan0(v: f64) -> f64 {
    if v.is_nan() {
        0.0
    } else {
        v
    }
}

/// Area of the triangle `(a, c, b)` on the epoch-millisecond axis.
#[inline]
fn triangle_area(ax: f64, ay: f64, cx: f64, cy: f64, bx: f64, by: f64) -> f64 {
    ((ax - bx) * (cy - ay) - (ax - cx) * (by - ay)).abs() * 0.5
}

// ============================================================================
// Retention Mask Walk
// ============================================================================

/// Run the LTTB bucket walk over one shared time axis and one value row
/// per dimension, producing the per-index retention decision.
///
/// Degenerate thresholds follow the reduction conventions: a threshold of
/// zero (reduction disabled) or a series already at or below the
/// threshold retains everything; a threshold of one or two retains only
/// the endpoints.
pub fn retention_mask(times_ms: &[f64], dims: &[Vec<f64>], threshold: usize) -> RetentionMask {
    let n = times_ms.len();
    if n == 0 {
        return RetentionMask::new(0, false);
    }
    if threshold == 0 || n <= threshold || dims.is_empty() {
        return RetentionMask::new(n, true);
    }

    let mut mask = RetentionMask::new(n, false);
    mask.mark(0);
    mask.mark(n - 1);
    if threshold <= 2 {
        return mask;
    }

    // Bucket size. Leave room for start and end data points.
    let every = (n - 2) as f64 / (threshold - 2) as f64;
    let n_dims = dims.len();
    let mut a = 0usize;
    let mut avg_y = vec![0.0f64; n_dims];

    for i in 0..threshold - 2 {
        // Calculate the average point of the next bucket (containing c)
        let avg_from = ((i + 1) as f64 * every).floor() as usize + 1;
        let avg_to = ((((i + 2) as f64 * every).floor() as usize) + 1).min(n);
        let avg_len = avg_to.saturating_sub(avg_from).max(1);
        let mut avg_x = 0.0f64;
        avg_y.fill(0.0);
        for c in avg_from..avg_to {
            avg_x += times_ms[c];
            for (j, dim) in dims.iter().enumerate() {
                avg_y[j] += nan0(dim[c]);
            }
        }
        avg_x /= avg_len as f64;
        for y in avg_y.iter_mut() {
            *y /= avg_len as f64;
        }

        // The range for this bucket
        let range_from = (i as f64 * every).floor() as usize + 1;
        let range_to = ((((i + 1) as f64 * every).floor() as usize) + 1).min(n - 1);

        // Point a
        let ax = times_ms[a];
        let mut max_area = -1.0f64;
        let mut representative = range_from.min(n - 2);
        let mut next_a = a;
        for c in range_from..range_to {
            let cx = times_ms[c];
            for (j, dim) in dims.iter().enumerate() {
                let ay = nan0(dim[a]);
                let area = triangle_area(ax, ay, cx, nan0(dim[c]), avg_x, avg_y[j]);
                // First dimension to post a new maximum sets the representative
                if area > max_area {
                    max_area = area;
                    representative = c;
                    next_a = c;
                }
            }
        }
        mask.mark(representative);
        a = next_a;
    }

    mask
}

// ============================================================================
// Single-Series Reduction
// ============================================================================

/// Reduce a single series to at most `max(threshold, 2)` samples with the
/// single-pass LTTB walk. No-op when the threshold is zero or the series
/// is already within budget.
pub fn reduce<T: Float>(series: &Series<T>, threshold: usize) -> Series<T> {
    let n = series.len();
    if threshold == 0 || n <= threshold {
        return series.clone();
    }
    let mask = series_retention_mask(series, threshold);
    mask.filter(series)
}

/// The retention mask the single-pass walk would keep for `series`.
pub fn series_retention_mask<T: Float>(series: &Series<T>, threshold: usize) -> RetentionMask {
    retention_mask(
        &series.times_epoch_millis(),
        &[series.values_f64()],
        threshold,
    )
}
