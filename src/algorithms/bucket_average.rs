//! Bucket-average resampling.
//!
//! ## Purpose
//!
//! This module divides a series into `threshold` time-proportional buckets,
//! averages the values of all samples strictly inside each bucket, and
//! emits one point per bucket at the bucket's *end* boundary timestamp,
//! plus the unmodified first and last samples.
//!
//! ## Design notes
//!
//! * **Bucketing**: `step_nanos = total_span_nanos / threshold`, floored
//!   once and advanced additively, matching the historical behavior this
//!   policy reproduces.
//! * **Known bias**: Emitting at the bucket end boundary produces a
//!   systematic left-to-right temporal offset relative to true bucket
//!   centers. This is an accepted, documented bias of the policy, kept
//!   for compatibility; it is not a bug to silently fix.
//! * **NaN**: NaN samples contribute `0.0` to bucket sums; a bucket with
//!   no samples emits the substitute value rather than dividing by zero.
//!
//! ## Invariants
//!
//! * First and last samples are emitted unmodified.
//! * Interior emission timestamps fall on bucket boundaries.
//!
//! ## Non-goals
//!
//! * This module does not resample to a calendar grid; bucket widths are
//!   derived from the observed span, not from wall-clock units.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::{Sample, Series};

// ============================================================================
// Bucket-Average Resampling
// ============================================================================

/// Reduce a series by averaging `threshold` time-proportional buckets.
/// No-op when the threshold is zero, the series is already within budget,
/// or the series spans less than one nanosecond per bucket.
pub fn bucket_average<T: Float>(series: &Series<T>, threshold: usize, substitute: T) -> Series<T> {
    let n = series.len();
    if threshold == 0 || n <= threshold {
        return series.clone();
    }

    let samples = series.as_slice();
    let start = samples[0].time;
    let end = samples[n - 1].time;
    let step_nanos = (end.nanos_since(start) as f64 / threshold as f64).floor() as i64;
    if step_nanos <= 0 {
        // Degenerate span: buckets would never advance
        return series.clone();
    }

    let mut reduced = Vec::with_capacity(threshold + 2);
    reduced.push(samples[0]);
    let mut next_sample_time = start.add_nanos(step_nanos);
    let mut bucket_agg = T::zero();
    let mut bucket_size: usize = 0;
    for sample in &samples[1..n - 1] {
        if sample.time < next_sample_time {
            bucket_agg = bucket_agg + sample.value_or_zero();
            bucket_size += 1;
        } else {
            let value = if bucket_size > 0 {
                bucket_agg / T::from(bucket_size).unwrap()
            } else {
                substitute
            };
            reduced.push(Sample::new(next_sample_time, value));
            // Initialize the next bucket with the current sample
            next_sample_time = next_sample_time.add_nanos(step_nanos);
            bucket_agg = sample.value_or_zero();
            bucket_size = 1;
        }
    }
    reduced.push(samples[n - 1]);
    Series::from_samples(reduced)
}
