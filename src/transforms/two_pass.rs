//! Two-pass LTTB: multi-series coordination through a shared accumulator.
//!
//! ## Purpose
//!
//! This module implements the two-phase reduction used when several series
//! share one time axis and must drop the *same* indices for visual
//! coherence (stacked charts, correlated gauges). The first pass records
//! every series' values into a shared accumulator; the derived second pass
//! runs the multi-dimensional LTTB walk once and filters each series by
//! the resulting shared retention mask.
//!
//! ## Design notes
//!
//! * **Locking**: The accumulator sits behind a reader/writer lock;
//!   first-pass calls arriving from concurrent fetch workers take the
//!   write lock at most once per series, and plan derivation takes a read
//!   lock. Lock poisoning is tolerated by adopting the inner value: the
//!   accumulator is only ever appended to, so a panicking writer cannot
//!   leave it torn in a way later passes would misread.
//! * **Lifetime**: One accumulator per pipeline run over one series set;
//!   the composer creates the first-pass transform fresh per run and
//!   discards it after the second pass completes.
//! * **Two-step protocol**: `derive_second_pass()` produces an explicit
//!   [`ReductionPlan`]; the transform never mutates itself into a
//!   different behavior.
//!
//! ## Key concepts
//!
//! * **Coherence check**: Performed under a read lock when the plan is
//!   derived. Nothing recorded degrades to identity; inconsistent row
//!   lengths degrade to independent single-pass reduction per series with
//!   a diagnostic warning. Neither is a hard failure.
//!
//! ## Invariants
//!
//! * Every first-pass call completes before the plan is derived (the
//!   composer sequences this; see the engine layer).
//! * A shared mask only filters series whose length matches it.
//!
//! ## Non-goals
//!
//! * This module does not verify that timestamps agree at each index
//!   across the set; aligned sampling is a caller precondition.

// External dependencies
use log::{debug, warn};
use num_traits::Float;
use std::sync::{Arc, PoisonError, RwLock};

// Internal dependencies
use crate::algorithms::lttb;
use crate::primitives::mask::RetentionMask;
use crate::primitives::sample::Series;

// ============================================================================
// Accumulator
// ============================================================================

/// Cross-series statistics collected by the first pass: the shared time
/// axis (recorded once) and one value row per recorded series.
#[derive(Debug, Default)]
struct LttbAccumulator {
    times_ms: Vec<f64>,
    values: Vec<Vec<f64>>,
}

// ============================================================================
// First Pass
// ============================================================================

/// First pass of the two-pass LTTB family. Applying it reduces nothing;
/// it records the series for the second pass and returns its input
/// unchanged.
#[derive(Debug, Clone)]
pub struct FirstPassLttbTransform {
    pub(crate) enabled: bool,
    pub(crate) threshold: usize,
    accumulator: Arc<RwLock<LttbAccumulator>>,
}

impl FirstPassLttbTransform {
    /// Create a first-pass transform with a fresh, empty accumulator.
    pub fn new(threshold: usize) -> Self {
        Self {
            enabled: true,
            threshold,
            accumulator: Arc::new(RwLock::new(LttbAccumulator::default())),
        }
    }

    /// A copy with its own empty accumulator, for the next pipeline run.
    pub(crate) fn fresh(&self) -> Self {
        let mut copy = Self::new(self.threshold);
        copy.enabled = self.enabled;
        copy
    }

    pub(crate) fn apply_inner<T: Float>(&self, series: &Series<T>) -> Series<T> {
        // Collect values for the second pass
        if self.threshold > 0 && series.len() > self.threshold {
            let mut acc = self
                .accumulator
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            if acc.times_ms.is_empty() {
                acc.times_ms = series.times_epoch_millis();
            }
            acc.values.push(series.values_f64());
        }
        series.clone()
    }

    /// Derive the second-pass transform from the recorded statistics,
    /// running the coherence check under a read lock.
    pub fn derive_second_pass(&self) -> SecondPassLttbTransform {
        let acc = self
            .accumulator
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        let axis_len = acc.times_ms.len();
        let plan = if axis_len == 0 {
            ReductionPlan::Identity
        } else if acc.values.iter().any(|row| row.len() != axis_len) {
            warn!(
                "recorded value rows do not all match the shared time axis of {axis_len} samples; \
                 falling back to independent per-series reduction"
            );
            ReductionPlan::PerSeries(self.threshold)
        } else {
            ReductionPlan::SharedMask(lttb::retention_mask(
                &acc.times_ms,
                &acc.values,
                self.threshold,
            ))
        };
        SecondPassLttbTransform {
            enabled: self.enabled,
            threshold: self.threshold,
            plan,
        }
    }
}

// ============================================================================
// Reduction Plan
// ============================================================================

/// The explicit outcome of first-pass accumulation: what the second pass
/// will do to each series.
#[derive(Debug, Clone)]
pub enum ReductionPlan {
    /// Nothing was recorded; the second pass is the identity.
    Identity,

    /// The set was incoherent; each series is reduced independently with
    /// the single-pass walk.
    PerSeries(usize),

    /// The set was coherent; every series is filtered by this shared
    /// retention mask.
    SharedMask(RetentionMask),
}

// ============================================================================
// Second Pass
// ============================================================================

/// Second pass of the two-pass LTTB family: applies the derived
/// [`ReductionPlan`] to each series.
#[derive(Debug, Clone)]
pub struct SecondPassLttbTransform {
    pub(crate) enabled: bool,
    pub(crate) threshold: usize,
    plan: ReductionPlan,
}

impl SecondPassLttbTransform {
    /// The plan this pass will apply.
    pub fn plan(&self) -> &ReductionPlan {
        &self.plan
    }

    pub(crate) fn apply_inner<T: Float>(&self, series: &Series<T>) -> Series<T> {
        match &self.plan {
            ReductionPlan::Identity => series.clone(),
            ReductionPlan::PerSeries(threshold) => lttb::reduce(series, *threshold),
            ReductionPlan::SharedMask(mask) => {
                if series.len() == mask.len() {
                    let reduced = mask.filter(series);
                    debug!(
                        "series reduced from {} to {} samples",
                        series.len(),
                        reduced.len()
                    );
                    reduced
                } else if series.len() <= self.threshold {
                    // Below budget; the first pass never recorded it
                    series.clone()
                } else {
                    warn!(
                        "series of {} samples does not match the shared mask of {}; \
                         reducing independently",
                        series.len(),
                        mask.len()
                    );
                    lttb::reduce(series, self.threshold)
                }
            }
        }
    }
}
