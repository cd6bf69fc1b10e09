//! Linear stride-based decimation.
//!
//! ## Purpose
//!
//! This module implements the cheapest reduction policy: pick `threshold`
//! evenly spaced samples from the input by real-valued stride, always
//! keeping the first and last points. No interpolation is performed;
//! selected samples are the originals nearest each stride offset.
//!
//! ## Design notes
//!
//! * **Stride**: `every = (n-2)/(threshold-2)`, the same bucket size the
//!   LTTB walk uses, so decimation and LTTB agree on endpoints.
//! * **Rounding**: The interior sample for slot `i` sits at
//!   `round(i * every) - 1`, clamped to the interior `[1, n-2]`.
//! * **Determinism**: O(threshold), no data-dependent branches.
//!
//! ## Invariants
//!
//! * First and last samples are always emitted.
//! * Output length is `min(n, max(threshold, 2))`.
//!
//! ## Non-goals
//!
//! * This module does not preserve curve shape; use LTTB for that.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::Series;

// ============================================================================
// Decimation
// ============================================================================

/// Reduce a series to at most `max(threshold, 2)` evenly strided samples.
/// No-op when the threshold is zero or the series is already within
/// budget.
pub fn decimate<T: Float>(series: &Series<T>, threshold: usize) -> Series<T> {
    let n = series.len();
    if threshold == 0 || n <= threshold {
        return series.clone();
    }

    let samples = series.as_slice();
    let mut sampled = Vec::with_capacity(threshold.max(2));
    sampled.push(samples[0]); // Always add the first point
    if threshold > 2 {
        let every = (n - 2) as f64 / (threshold - 2) as f64;
        for i in 1..threshold - 1 {
            let offset = (i as f64 * every).round() as usize;
            sampled.push(samples[offset.saturating_sub(1).clamp(1, n - 2)]);
        }
    }
    sampled.push(samples[n - 1]); // Always add the last point
    Series::from_samples(sampled)
}
