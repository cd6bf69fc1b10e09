//! Layer 2: Transforms
//!
//! This layer wraps the numeric kernels into named, independently
//! enable/disable-able units of work and defines the closed transform
//! family the composer dispatches over. A transform maps one series to
//! another; a disabled transform is the identity and never executes its
//! algorithm body (no timing side effects either). Multi-pass families
//! additionally expose a "next pass" derived after every first-pass call
//! has completed.

// Boundary alignment against the requested range.
pub mod align;

// Identity, sorting, and NaN substitution.
pub mod cleanup;

// Joint reduction of aligned series sets.
pub mod multi_dim;

// Stateless single-series reductions.
pub mod reduction;

// Cached-mask reduction for repeated redraws.
pub mod stacked;

// Shared-accumulator two-pass reduction.
pub mod two_pass;

// External dependencies
use log::{debug, trace};
use num_traits::Float;
use std::time::Instant;

// Internal dependencies
use crate::primitives::sample::{Series, SeriesSet};

// Publicly re-exported types
pub use align::AlignBoundariesTransform;
pub use cleanup::{IdentityTransform, NanToZeroTransform, SortTransform};
pub use multi_dim::MultiDimLttbTransform;
pub use reduction::{
    BucketAverageTransform, DecimationTransform, LinearResamplingTransform, LttbTransform,
};
pub use stacked::StackedLttbTransform;
pub use two_pass::{FirstPassLttbTransform, ReductionPlan, SecondPassLttbTransform};

// ============================================================================
// Transform Family
// ============================================================================

/// The closed set of pipeline transforms, dispatched by the composer.
/// Each variant carries only the state it needs.
#[derive(Debug, Clone)]
pub enum Transform<T> {
    /// The do-nothing transform (default next pass).
    Identity(IdentityTransform),

    /// Timestamp-ordering repair.
    Sort(SortTransform),

    /// NaN-to-zero substitution for gap-less rendering targets.
    NanToZero(NanToZeroTransform),

    /// Linear stride-based decimation.
    Decimation(DecimationTransform),

    /// Single-pass Largest-Triangle-Three-Buckets.
    Lttb(LttbTransform),

    /// Even-grid linear resampling.
    LinearResampling(LinearResamplingTransform),

    /// Time-proportional bucket averaging.
    BucketAverage(BucketAverageTransform<T>),

    /// First pass of the shared-accumulator two-pass family.
    FirstPassLttb(FirstPassLttbTransform),

    /// Second pass applying a derived reduction plan.
    SecondPassLttb(SecondPassLttbTransform),

    /// Cached-mask variant for repeated stacked redraws.
    StackedLttb(StackedLttbTransform),

    /// Joint reduction of an aligned series set.
    MultiDimLttb(MultiDimLttbTransform),

    /// Exact boundary alignment against the requested range.
    AlignBoundaries(AlignBoundariesTransform<T>),
}

impl<T: Float> Transform<T> {
    /// The name of this transform, for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity(_) => "identity",
            Self::Sort(_) => "sort",
            Self::NanToZero(_) => "nan-to-zero",
            Self::Decimation(_) => "decimation",
            Self::Lttb(_) => "lttb",
            Self::LinearResampling(_) => "linear-resampling",
            Self::BucketAverage(_) => "bucket-average",
            Self::FirstPassLttb(_) => "first-pass-lttb",
            Self::SecondPassLttb(_) => "second-pass-lttb",
            Self::StackedLttb(_) => "stacked-lttb",
            Self::MultiDimLttb(_) => "multi-dim-lttb",
            Self::AlignBoundaries(_) => "align-boundaries",
        }
    }

    /// Whether this transform will execute when applied.
    pub fn enabled(&self) -> bool {
        match self {
            Self::Identity(t) => t.enabled,
            Self::Sort(t) => t.enabled,
            Self::NanToZero(t) => t.enabled,
            Self::Decimation(t) => t.enabled,
            Self::Lttb(t) => t.enabled,
            Self::LinearResampling(t) => t.enabled,
            Self::BucketAverage(t) => t.enabled,
            Self::FirstPassLttb(t) => t.enabled,
            Self::SecondPassLttb(t) => t.enabled,
            Self::StackedLttb(t) => t.enabled,
            Self::MultiDimLttb(t) => t.enabled,
            Self::AlignBoundaries(t) => t.enabled,
        }
    }

    /// Enable or disable this transform.
    pub fn set_enabled(&mut self, enabled: bool) {
        match self {
            Self::Identity(t) => t.enabled = enabled,
            Self::Sort(t) => t.enabled = enabled,
            Self::NanToZero(t) => t.enabled = enabled,
            Self::Decimation(t) => t.enabled = enabled,
            Self::Lttb(t) => t.enabled = enabled,
            Self::LinearResampling(t) => t.enabled = enabled,
            Self::BucketAverage(t) => t.enabled = enabled,
            Self::FirstPassLttb(t) => t.enabled = enabled,
            Self::SecondPassLttb(t) => t.enabled = enabled,
            Self::StackedLttb(t) => t.enabled = enabled,
            Self::MultiDimLttb(t) => t.enabled = enabled,
            Self::AlignBoundaries(t) => t.enabled = enabled,
        }
    }

    /// Apply this transform to a series. A disabled transform returns its
    /// input unchanged without running the algorithm body or taking any
    /// timing measurement.
    pub fn apply(&self, series: &Series<T>) -> Series<T> {
        if !self.enabled() {
            debug!("transform {} is disabled", self.name());
            return series.clone();
        }
        let started = Instant::now();
        let output = self.apply_inner(series);
        trace!(
            "applied {} in {:?} ({} -> {} samples)",
            self.name(),
            started.elapsed(),
            series.len(),
            output.len()
        );
        output
    }

    fn apply_inner(&self, series: &Series<T>) -> Series<T> {
        match self {
            Self::Identity(t) => t.apply_inner(series),
            Self::Sort(t) => t.apply_inner(series),
            Self::NanToZero(t) => t.apply_inner(series),
            Self::Decimation(t) => t.apply_inner(series),
            Self::Lttb(t) => t.apply_inner(series),
            Self::LinearResampling(t) => t.apply_inner(series),
            Self::BucketAverage(t) => t.apply_inner(series),
            Self::FirstPassLttb(t) => t.apply_inner(series),
            Self::SecondPassLttb(t) => t.apply_inner(series),
            Self::StackedLttb(t) => t.apply_inner(series),
            Self::MultiDimLttb(t) => t.apply_inner(series),
            Self::AlignBoundaries(t) => t.apply_inner(series),
        }
    }

    /// Apply this transform jointly across a whole set, when it reduces
    /// jointly. Returns `None` for per-series transforms; a disabled
    /// joint transform is the identity over the set.
    pub fn apply_joint(&self, set: &SeriesSet<T>) -> Option<SeriesSet<T>> {
        let Self::MultiDimLttb(t) = self else {
            return None;
        };
        if !t.enabled {
            debug!("transform {} is disabled", self.name());
            return Some(set.clone());
        }
        let started = Instant::now();
        let output = t.apply_set(set);
        trace!(
            "applied {} jointly over {} series in {:?}",
            self.name(),
            set.len(),
            started.elapsed()
        );
        Some(output)
    }

    /// The transform to run after every application of this one has
    /// completed. Identity unless this transform is part of a multi-pass
    /// family.
    pub fn next_pass(&self) -> Transform<T> {
        match self {
            Self::FirstPassLttb(t) => Self::SecondPassLttb(t.derive_second_pass()),
            _ => Self::Identity(IdentityTransform::new()),
        }
    }

    /// True for the identity transform.
    pub fn is_identity(&self) -> bool {
        matches!(self, Self::Identity(_))
    }

    /// True for transforms that reduce a whole series set in one call.
    pub fn reduces_jointly(&self) -> bool {
        matches!(self, Self::MultiDimLttb(_))
    }

    /// A copy of this transform ready for the next pipeline run: per-run
    /// accumulator state starts empty, while deliberately persistent
    /// state (the stacked mask cache) is carried over.
    pub fn fresh(&self) -> Transform<T> {
        match self {
            Self::FirstPassLttb(t) => Self::FirstPassLttb(t.fresh()),
            other => other.clone(),
        }
    }
}
