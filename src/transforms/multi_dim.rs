//! Multi-dimensional LTTB: joint reduction of an aligned series set.
//!
//! ## Purpose
//!
//! This module reduces several index-aligned series in one call: the LTTB
//! walk scores every candidate against all value dimensions at once, a
//! candidate wins its bucket by posting a new maximum area in any
//! dimension, and the resulting shared retention mask filters every
//! series identically.
//!
//! ## Design notes
//!
//! * **Single shot**: Unlike the two-pass family, no accumulation phase is
//!   needed; the whole set is available up front.
//! * **Degradation**: Misaligned series lengths are a coherence failure,
//!   reported at warning level and degraded to independent single-pass
//!   reduction per series, never a hard error.
//! * **Single series**: Applied to one series (outside a set), this
//!   transform is exactly the single-pass walk.
//!
//! ## Invariants
//!
//! * Timestamps agreeing at each index across the set is a caller
//!   precondition; only lengths are checked here.
//!
//! ## Non-goals
//!
//! * This module does not cache masks between calls (see the stacked
//!   variant).

// External dependencies
use log::warn;
use num_traits::Float;

// Internal dependencies
use crate::algorithms::lttb;
use crate::primitives::sample::{Series, SeriesSet};

// ============================================================================
// Multi-Dimensional LTTB
// ============================================================================

/// Joint LTTB reduction over every series of an aligned set.
#[derive(Debug, Clone)]
pub struct MultiDimLttbTransform {
    pub(crate) enabled: bool,
    pub(crate) threshold: usize,
}

impl MultiDimLttbTransform {
    /// Create a multi-dimensional LTTB transform keeping at most
    /// `threshold` samples per series.
    pub fn new(threshold: usize) -> Self {
        Self {
            enabled: true,
            threshold,
        }
    }

    /// Reduce every series in the set by one shared retention mask.
    pub fn apply_set<T: Float>(&self, set: &SeriesSet<T>) -> SeriesSet<T> {
        let Some((_, first)) = set.iter().next() else {
            return set.clone();
        };
        let n = first.len();
        if self.threshold == 0 || n <= self.threshold {
            return set.clone();
        }

        if set.iter().any(|(_, series)| series.len() != n) {
            warn!(
                "multi-dim reduction over a misaligned series set; \
                 reducing each series independently"
            );
            return set
                .iter()
                .map(|(name, series)| (name.clone(), lttb::reduce(series, self.threshold)))
                .collect();
        }

        let times_ms = first.times_epoch_millis();
        let dims: Vec<Vec<f64>> = set.iter().map(|(_, series)| series.values_f64()).collect();
        let mask = lttb::retention_mask(&times_ms, &dims, self.threshold);
        set.iter()
            .map(|(name, series)| (name.clone(), mask.filter(series)))
            .collect()
    }

    pub(crate) fn apply_inner<T: Float>(&self, series: &Series<T>) -> Series<T> {
        // A single series is just the one-dimensional walk
        lttb::reduce(series, self.threshold)
    }
}
