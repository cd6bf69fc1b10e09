//! Linear interpolation utilities.
//!
//! ## Purpose
//!
//! This module provides two-point linear interpolation on the
//! epoch-millisecond axis, used by boundary alignment to synthesize
//! exact-boundary samples, and an even-grid resampling reduction built on
//! top of it.
//!
//! ## Design notes
//!
//! * **Axis**: Interpolation operates on `(epoch-millisecond, value)`
//!   pairs; timestamps are converted before any arithmetic.
//! * **Tied instants**: A zero or negative time span between the anchor
//!   points degenerates to the average of the two values.
//! * **NaN**: Interpolating from a NaN endpoint yields NaN; callers that
//!   need a substitute check finiteness first.
//!
//! ## Invariants
//!
//! * Input anchors bracket the requested instant for meaningful results;
//!   extrapolation is numerically valid but never requested by callers.
//!
//! ## Non-goals
//!
//! * This module does not provide higher-order interpolation.
//! * This module does not decide when interpolation is appropriate (see
//!   the boundary alignment transform).

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::{Sample, Series};

// ============================================================================
// Two-Point Linear Interpolation
// ============================================================================

/// Interpolate the value at `t_ms` between anchors `(t0_ms, v0)` and
/// `(t1_ms, v1)`.
#[inline]
pub fn lerp<T: Float>(t0_ms: f64, v0: T, t1_ms: f64, v1: T, t_ms: f64) -> T {
    let span = t1_ms - t0_ms;
    if span <= 0.0 {
        // Tied or decreasing instants: use the simple average
        return (v0 + v1) / T::from(2.0).unwrap();
    }
    let alpha = (t_ms - t0_ms) / span;
    v0 + (v1 - v0) * T::from(alpha).unwrap()
}

// ============================================================================
// Even-Grid Linear Resampling
// ============================================================================

/// Reduce a series to exactly `max(threshold, 2)` evenly spaced points,
/// values linearly interpolated from the bracketing samples. The first
/// and last samples are emitted unmodified. No-op when the threshold is
/// zero or the series is already within budget.
pub fn resample_linear<T: Float>(series: &Series<T>, threshold: usize) -> Series<T> {
    let n = series.len();
    if threshold == 0 || n <= threshold {
        return series.clone();
    }

    let samples = series.as_slice();
    let first = samples[0];
    let last = samples[n - 1];
    let mut reduced = Vec::with_capacity(threshold.max(2));
    reduced.push(first);
    if threshold > 2 {
        let step_nanos = last.time.nanos_since(first.time) as f64 / (threshold - 1) as f64;
        let mut cursor = 0usize;
        for i in 1..threshold - 1 {
            let t = first.time.add_nanos((i as f64 * step_nanos).round() as i64);
            // Advance to the rightmost sample at or before t
            while cursor + 1 < n - 1 && samples[cursor + 1].time <= t {
                cursor += 1;
            }
            let left = samples[cursor];
            let right = samples[cursor + 1];
            let value = lerp(
                left.time.epoch_millis(),
                left.value,
                right.time.epoch_millis(),
                right.value,
                t.epoch_millis(),
            );
            reduced.push(Sample::new(t, value));
        }
    }
    reduced.push(last);
    Series::from_samples(reduced)
}
