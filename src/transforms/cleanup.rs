//! Identity, sorting, and NaN-substitution transforms.
//!
//! ## Purpose
//!
//! This module provides the auxiliary transforms that keep the rest of the
//! pipeline honest: an explicit identity (the default "next pass"), the
//! ordering repair that restores the timestamp-ascending invariant, and
//! the NaN-to-zero substitution for rendering targets that cannot
//! represent gaps.
//!
//! ## Design notes
//!
//! * **Sort**: Stable by timestamp, delegating to the sorting primitive;
//!   must run before any reduction when input ordering is not externally
//!   guaranteed.
//! * **NaN substitution**: Maps every NaN value to `0.0`, identity on
//!   timestamps; opt-in via the gap policy.
//!
//! ## Non-goals
//!
//! * These transforms never change the number of samples.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::sample::{Sample, Series};
use crate::primitives::sorting::sort_by_time;

// ============================================================================
// Identity
// ============================================================================

/// The do-nothing transform, returned as the default next pass.
#[derive(Debug, Clone)]
pub struct IdentityTransform {
    pub(crate) enabled: bool,
}

impl Default for IdentityTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl IdentityTransform {
    /// Create a new identity transform.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub(crate) fn apply_inner<T: Float>(&self, series: &Series<T>) -> Series<T> {
        series.clone()
    }
}

// ============================================================================
// Sort
// ============================================================================

/// Timestamp-ordering repair: stable sort by ascending timestamp.
#[derive(Debug, Clone)]
pub struct SortTransform {
    pub(crate) enabled: bool,
}

impl Default for SortTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl SortTransform {
    /// Create a new sort transform.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub(crate) fn apply_inner<T: Float>(&self, series: &Series<T>) -> Series<T> {
        sort_by_time(series)
    }
}

// ============================================================================
// NaN Substitution
// ============================================================================

/// Maps every NaN value to `0.0`, for rendering targets without gap
/// support.
#[derive(Debug, Clone)]
pub struct NanToZeroTransform {
    pub(crate) enabled: bool,
}

impl Default for NanToZeroTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl NanToZeroTransform {
    /// Create a new NaN-substitution transform.
    pub fn new() -> Self {
        Self { enabled: true }
    }

    pub(crate) fn apply_inner<T: Float>(&self, series: &Series<T>) -> Series<T> {
        series
            .iter()
            .map(|s| Sample::new(s.time, s.value_or_zero()))
            .collect()
    }
}
