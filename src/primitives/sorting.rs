//! Sorting utilities for time series input.
//!
//! ## Purpose
//!
//! This module restores the timestamp-ascending invariant that every
//! reduction kernel relies on. Insertion order is assumed, but not
//! guaranteed, to match timestamp order; collectors fetching from skewed
//! clocks or interleaved agents can violate it.
//!
//! ## Design notes
//!
//! * **Stability**: Uses a stable sort so samples with equal timestamps
//!   keep their relative insertion order, for determinism.
//! * **Fast path**: Already-sorted input is detected in O(n) and returned
//!   as a plain copy without sorting.
//!
//! ## Invariants
//!
//! * Output timestamps are non-decreasing.
//!
//! ## Non-goals
//!
//! * This module does not deduplicate samples or validate values.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::{Sample, Series};

// ============================================================================
// Sorting Functions
// ============================================================================

/// Sort a series by timestamp in ascending order.
///
/// 1. Checks if the series is already sorted (fast path).
/// 2. Performs a stable sort on the timestamp key.
#[inline]
pub fn sort_by_time<T: Float>(series: &Series<T>) -> Series<T> {
    if series.is_sorted_by_time() {
        return series.clone();
    }

    let mut samples: Vec<Sample<T>> = series.as_slice().to_vec();
    // Stable sort to preserve order of equal timestamps for determinism
    samples.sort_by_key(|s| s.time);
    Series::from_samples(samples)
}

/// Index of the first sample that breaks ascending timestamp order, if any.
#[inline]
pub fn first_unsorted_index<T: Float>(series: &Series<T>) -> Option<usize> {
    series
        .as_slice()
        .windows(2)
        .position(|w| w[0].time > w[1].time)
        .map(|i| i + 1)
}
