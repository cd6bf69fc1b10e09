//! Stacked LTTB: cached-mask reduction for repeated redraws.
//!
//! ## Purpose
//!
//! This module implements the cached-mask LTTB variant used by stacked
//! area views that redraw several correlated series in rapid succession.
//! The first series reduced builds a retention mask; every subsequent
//! series of the same length is filtered by the cached mask instead of
//! recomputing, so successive redraws never "jitter" the retained
//! indices.
//!
//! ## Design notes
//!
//! * **Cache**: `Arc<RwLock<Option<RetentionMask>>>`; reads (applying a
//!   built mask) are concurrent, the rebuild takes the write lock with a
//!   double check for racing builders.
//! * **Invalidation**: A series whose length differs from the cached mask
//!   rebuilds the cache from that series.
//! * **Lifetime**: Unlike the two-pass accumulator, the cache survives
//!   across pipeline runs on purpose; consistency across redraws is the
//!   point of this variant.
//!
//! ## Invariants
//!
//! * The cached mask length always equals the length of the series that
//!   built it.
//!
//! ## Non-goals
//!
//! * This variant does not consider the values of any series but the one
//!   that built the mask; use the two-pass family when every dimension
//!   should influence retention.

// External dependencies
use num_traits::Float;
use std::sync::{Arc, PoisonError, RwLock};

// Internal dependencies
use crate::algorithms::lttb;
use crate::primitives::mask::RetentionMask;
use crate::primitives::sample::Series;

// ============================================================================
// Stacked LTTB
// ============================================================================

/// LTTB variant that caches the retention mask of the first series it
/// reduces and reuses it for every same-length series thereafter.
#[derive(Debug, Clone)]
pub struct StackedLttbTransform {
    pub(crate) enabled: bool,
    pub(crate) threshold: usize,
    cache: Arc<RwLock<Option<RetentionMask>>>,
}

impl StackedLttbTransform {
    /// Create a stacked LTTB transform with an empty mask cache.
    pub fn new(threshold: usize) -> Self {
        Self {
            enabled: true,
            threshold,
            cache: Arc::new(RwLock::new(None)),
        }
    }

    /// Whether a mask is currently cached.
    pub fn has_cached_mask(&self) -> bool {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    pub(crate) fn apply_inner<T: Float>(&self, series: &Series<T>) -> Series<T> {
        let n = series.len();
        if self.threshold == 0 || n <= self.threshold {
            return series.clone();
        }

        // Fast path: an already-built mask of the right shape
        {
            let cache = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(mask) = cache.as_ref() {
                if mask.len() == n {
                    return mask.filter(series);
                }
            }
        }

        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        // Double check: another series may have rebuilt while we waited
        if let Some(mask) = cache.as_ref() {
            if mask.len() == n {
                return mask.filter(series);
            }
        }
        let mask = lttb::series_retention_mask(series, self.threshold);
        let reduced = mask.filter(series);
        *cache = Some(mask);
        reduced
    }
}
