//! High-level API for time-series reduction.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point for building
//! reduction pipelines. It implements a fluent builder pattern for
//! choosing a reduction algorithm, a sample budget, and the optional
//! boundary-alignment and gap-handling stages.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * **Algorithm**: Which reduction kernel runs (decimation, the LTTB
//!   family, bucket averaging, or linear resampling).
//! * **Gap Policy**: Whether missing data renders as gaps (NaN) or as
//!   zeroes; this also picks the substitute value synthesized at aligned
//!   boundaries.
//! * **Configuration Flow**: `Downsample::new()`, chain configuration
//!   methods, then `.build()` to obtain a [`Downsampler`].

// External dependencies
use core::marker::PhantomData;
use num_traits::Float;

// Internal dependencies
use crate::engine::composer::Pipeline;
use crate::engine::validator::Validator;
use crate::primitives::sample::{Series, SeriesSet, Timestamp};
use crate::transforms::{
    AlignBoundariesTransform, BucketAverageTransform, DecimationTransform, FirstPassLttbTransform,
    LinearResamplingTransform, LttbTransform, MultiDimLttbTransform, NanToZeroTransform,
    SortTransform, StackedLttbTransform, Transform,
};

// Publicly re-exported types
pub use crate::primitives::errors::DownsampleError;

/// Default sample budget, sized for a full-width chart on a large
/// display.
pub const DEFAULT_THRESHOLD: usize = 1500;

// ============================================================================
// Configuration Enums
// ============================================================================

/// The reduction algorithm a pipeline runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// Linear stride-based decimation; fastest, shape-blind.
    Decimation,

    /// Single-pass Largest-Triangle-Three-Buckets.
    Lttb,

    /// Two-pass LTTB coordinating every series of a set through a shared
    /// retention mask.
    TwoPassLttb,

    /// LTTB reusing one cached mask across repeated redraws.
    StackedLttb,

    /// Joint LTTB over all value dimensions of an aligned set.
    MultiDimLttb,

    /// Time-proportional bucket averaging.
    BucketAverage,

    /// Even-grid linear resampling.
    LinearInterpolation,
}

/// How missing data is represented in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GapPolicy {
    /// Keep NaN samples; renders as gaps.
    KeepGaps,

    /// Substitute zero for NaN samples; renders as a drop to the axis.
    ZeroFill,
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a reduction pipeline.
#[derive(Debug, Clone)]
pub struct DownsampleBuilder<T> {
    /// Maximum number of samples to retain per series.
    pub threshold: Option<usize>,

    /// Reduction algorithm.
    pub algorithm: Option<Algorithm>,

    /// Requested range for boundary alignment.
    pub range: Option<(Timestamp, Timestamp)>,

    /// Interpolate synthetic boundary samples from their neighbors.
    pub interpolate: Option<bool>,

    /// Representation of missing data.
    pub gap_policy: Option<GapPolicy>,

    /// Sort input by timestamp before reducing.
    pub sort_input: Option<bool>,

    /// Reject misaligned sets up front instead of degrading.
    pub strict_alignment: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: Float> Default for DownsampleBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> DownsampleBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            threshold: None,
            algorithm: None,
            range: None,
            interpolate: None,
            gap_policy: None,
            sort_input: None,
            strict_alignment: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the maximum number of samples to retain per series.
    ///
    /// A threshold of 0 disables reduction entirely.
    pub fn threshold(mut self, threshold: usize) -> Self {
        if self.threshold.is_some() {
            self.duplicate_param = Some("threshold");
        }
        self.threshold = Some(threshold);
        self
    }

    /// Set the reduction algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Align output boundaries with the exact `[start, end]` range the
    /// caller requested.
    pub fn align_to(mut self, start: Timestamp, end: Timestamp) -> Self {
        if self.range.is_some() {
            self.duplicate_param = Some("align_to");
        }
        self.range = Some((start, end));
        self
    }

    /// Interpolate synthetic boundary samples from their bracketing
    /// neighbors instead of substituting.
    pub fn interpolate(mut self, interpolate: bool) -> Self {
        if self.interpolate.is_some() {
            self.duplicate_param = Some("interpolate");
        }
        self.interpolate = Some(interpolate);
        self
    }

    /// Set how missing data is represented in the output.
    pub fn gap_policy(mut self, policy: GapPolicy) -> Self {
        if self.gap_policy.is_some() {
            self.duplicate_param = Some("gap_policy");
        }
        self.gap_policy = Some(policy);
        self
    }

    /// Sort input by timestamp before reducing (default: enabled). When
    /// disabled, ordering is verified instead and unsorted input is an
    /// error.
    pub fn sort_input(mut self, sort: bool) -> Self {
        if self.sort_input.is_some() {
            self.duplicate_param = Some("sort_input");
        }
        self.sort_input = Some(sort);
        self
    }

    /// Reject a series set whose series lengths disagree instead of
    /// degrading to independent per-series reduction (default: off).
    /// Useful when upstream alignment is a hard contract and silent
    /// degradation would mask a collection bug.
    pub fn strict_set_alignment(mut self, strict: bool) -> Self {
        if self.strict_alignment.is_some() {
            self.duplicate_param = Some("strict_set_alignment");
        }
        self.strict_alignment = Some(strict);
        self
    }

    /// Validate the configuration and build the pipeline.
    pub fn build(self) -> Result<Downsampler<T>, DownsampleError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let threshold = self.threshold.unwrap_or(DEFAULT_THRESHOLD);
        let algorithm = self.algorithm.unwrap_or(Algorithm::Lttb);
        let interpolate = self.interpolate.unwrap_or(true);
        let gap_policy = self.gap_policy.unwrap_or(GapPolicy::KeepGaps);
        let sort_input = self.sort_input.unwrap_or(true);

        if let Some((start, end)) = self.range {
            Validator::validate_range(start, end)?;
        }

        let substitute = match gap_policy {
            GapPolicy::KeepGaps => T::nan(),
            GapPolicy::ZeroFill => T::zero(),
        };

        let mut stages: Vec<Transform<T>> = Vec::new();

        let mut sort = SortTransform::new();
        sort.enabled = sort_input;
        stages.push(Transform::Sort(sort));

        stages.push(match algorithm {
            Algorithm::Decimation => Transform::Decimation(DecimationTransform::new(threshold)),
            Algorithm::Lttb => Transform::Lttb(LttbTransform::new(threshold)),
            Algorithm::TwoPassLttb => {
                Transform::FirstPassLttb(FirstPassLttbTransform::new(threshold))
            }
            Algorithm::StackedLttb => Transform::StackedLttb(StackedLttbTransform::new(threshold)),
            Algorithm::MultiDimLttb => {
                Transform::MultiDimLttb(MultiDimLttbTransform::new(threshold))
            }
            Algorithm::BucketAverage => {
                Transform::BucketAverage(BucketAverageTransform::new(threshold, substitute))
            }
            Algorithm::LinearInterpolation => {
                Transform::LinearResampling(LinearResamplingTransform::new(threshold))
            }
        });

        if let Some((start, end)) = self.range {
            stages.push(Transform::AlignBoundaries(AlignBoundariesTransform::new(
                start,
                end,
                interpolate,
                substitute,
            )));
        }

        if gap_policy == GapPolicy::ZeroFill {
            stages.push(Transform::NanToZero(NanToZeroTransform::new()));
        }

        Ok(Downsampler {
            pipeline: Pipeline::new(stages),
            check_sorted: !sort_input,
            check_alignment: self.strict_alignment.unwrap_or(false),
        })
    }
}

// ============================================================================
// Downsampler
// ============================================================================

/// A configured reduction pipeline, ready to run over series or series
/// sets.
#[derive(Debug, Clone)]
pub struct Downsampler<T> {
    pipeline: Pipeline<T>,
    check_sorted: bool,
    check_alignment: bool,
}

impl<T: Float> Downsampler<T> {
    /// Reduce a single series.
    pub fn reduce(&self, series: &Series<T>) -> Result<Series<T>, DownsampleError> {
        if self.check_sorted {
            Validator::validate_sorted(series)?;
        }
        Ok(self.pipeline.run(series))
    }

    /// The underlying pipeline.
    pub fn pipeline(&self) -> &Pipeline<T> {
        &self.pipeline
    }

    /// Mutable access to the underlying pipeline.
    pub fn pipeline_mut(&mut self) -> &mut Pipeline<T> {
        &mut self.pipeline
    }
}

impl<T: Float + Send + Sync> Downsampler<T> {
    /// Reduce every series of a set, coordinating multi-pass stages
    /// across the whole set.
    pub fn reduce_set(&self, set: &SeriesSet<T>) -> Result<SeriesSet<T>, DownsampleError> {
        if self.check_alignment {
            Validator::validate_set_alignment(set)?;
        }
        if self.check_sorted {
            for (_, series) in set.iter() {
                Validator::validate_sorted(series)?;
            }
        }
        Ok(self.pipeline.run_set(set))
    }
}
