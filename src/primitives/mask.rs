//! Retention masks shared across jointly reduced series.
//!
//! ## Purpose
//!
//! This module defines the boolean per-index "keep" decision produced once
//! per reduction pass over a series set and applied, read-only, to every
//! series in that set.
//!
//! ## Design notes
//!
//! * **Shape**: One entry per input index; `true` means the sample at that
//!   index survives the reduction.
//! * **Sharing**: A mask is computed once and then only read, so it can be
//!   handed to concurrent per-series filters without further locking.
//!
//! ## Invariants
//!
//! * A mask only filters series whose length equals the mask length;
//!   mismatches are a coherence failure handled by the caller.
//!
//! ## Non-goals
//!
//! * This module does not decide which indices to keep (see the LTTB
//!   kernels); it only records and applies the decision.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::Series;

// ============================================================================
// Retention Mask
// ============================================================================

/// A boolean per-index retention decision over one input length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetentionMask {
    keep: Vec<bool>,
}

impl RetentionMask {
    /// Create a mask of `len` entries, all initialized to `keep_all`.
    pub fn new(len: usize, keep_all: bool) -> Self {
        Self {
            keep: vec![keep_all; len],
        }
    }

    /// Number of entries (equals the input series length).
    pub fn len(&self) -> usize {
        self.keep.len()
    }

    /// True when the mask covers zero indices.
    pub fn is_empty(&self) -> bool {
        self.keep.is_empty()
    }

    /// Mark the sample at `index` as retained.
    pub fn mark(&mut self, index: usize) {
        self.keep[index] = true;
    }

    /// Whether the sample at `index` is retained.
    pub fn is_kept(&self, index: usize) -> bool {
        self.keep.get(index).copied().unwrap_or(false)
    }

    /// Number of retained indices.
    pub fn kept_count(&self) -> usize {
        self.keep.iter().filter(|&&k| k).count()
    }

    /// The retained indices in ascending order.
    pub fn retained_indices(&self) -> Vec<usize> {
        self.keep
            .iter()
            .enumerate()
            .filter_map(|(i, &k)| if k { Some(i) } else { None })
            .collect()
    }

    /// Filter a series by this mask, keeping the samples at retained
    /// indices. The series length must equal the mask length; callers
    /// detect mismatches beforehand and degrade instead of filtering.
    pub fn filter<T: Float>(&self, series: &Series<T>) -> Series<T> {
        series
            .iter()
            .enumerate()
            .filter(|(i, _)| self.keep[*i])
            .map(|(_, s)| *s)
            .collect()
    }
}
