//! Single-series reduction transforms.
//!
//! ## Purpose
//!
//! This module wraps the pure reduction kernels into transform instances:
//! stride decimation, single-pass LTTB, bucket averaging, and even-grid
//! linear resampling. Each carries only its threshold (plus the bucket
//! substitute value) and delegates the numeric work to the algorithm
//! layer.
//!
//! ## Design notes
//!
//! * **Guards**: Every reduction is a no-op when the threshold is zero or
//!   the series is already within budget; the kernels enforce this.
//! * **Statelessness**: Nothing here accumulates across calls; the
//!   stateful families live in the two-pass and stacked modules.
//!
//! ## Non-goals
//!
//! * This module does not coordinate retention across several series.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::bucket_average::bucket_average;
use crate::algorithms::decimation::decimate;
use crate::algorithms::interpolation::resample_linear;
use crate::algorithms::lttb;
use crate::primitives::sample::Series;

// ============================================================================
// Decimation
// ============================================================================

/// Linear stride-based decimation to at most `threshold` samples.
#[derive(Debug, Clone)]
pub struct DecimationTransform {
    pub(crate) enabled: bool,
    pub(crate) threshold: usize,
}

impl DecimationTransform {
    /// Create a decimation transform keeping at most `threshold` samples.
    pub fn new(threshold: usize) -> Self {
        Self {
            enabled: true,
            threshold,
        }
    }

    pub(crate) fn apply_inner<T: Float>(&self, series: &Series<T>) -> Series<T> {
        decimate(series, self.threshold)
    }
}

// ============================================================================
// Single-Pass LTTB
// ============================================================================

/// Single-pass Largest-Triangle-Three-Buckets reduction.
#[derive(Debug, Clone)]
pub struct LttbTransform {
    pub(crate) enabled: bool,
    pub(crate) threshold: usize,
}

impl LttbTransform {
    /// Create an LTTB transform keeping at most `threshold` samples.
    pub fn new(threshold: usize) -> Self {
        Self {
            enabled: true,
            threshold,
        }
    }

    pub(crate) fn apply_inner<T: Float>(&self, series: &Series<T>) -> Series<T> {
        lttb::reduce(series, self.threshold)
    }
}

// ============================================================================
// Bucket Average
// ============================================================================

/// Time-proportional bucket averaging, emitting at bucket end boundaries.
#[derive(Debug, Clone)]
pub struct BucketAverageTransform<T> {
    pub(crate) enabled: bool,
    pub(crate) threshold: usize,
    pub(crate) substitute: T,
}

impl<T: Float> BucketAverageTransform<T> {
    /// Create a bucket-average transform with `threshold` buckets and the
    /// given substitute value for empty buckets.
    pub fn new(threshold: usize, substitute: T) -> Self {
        Self {
            enabled: true,
            threshold,
            substitute,
        }
    }

    pub(crate) fn apply_inner(&self, series: &Series<T>) -> Series<T> {
        bucket_average(series, self.threshold, self.substitute)
    }
}

// ============================================================================
// Linear Resampling
// ============================================================================

/// Even-grid reduction via two-point linear interpolation.
#[derive(Debug, Clone)]
pub struct LinearResamplingTransform {
    pub(crate) enabled: bool,
    pub(crate) threshold: usize,
}

impl LinearResamplingTransform {
    /// Create a linear resampling transform emitting `threshold` points.
    pub fn new(threshold: usize) -> Self {
        Self {
            enabled: true,
            threshold,
        }
    }

    pub(crate) fn apply_inner<T: Float>(&self, series: &Series<T>) -> Series<T> {
        resample_linear(series, self.threshold)
    }
}
