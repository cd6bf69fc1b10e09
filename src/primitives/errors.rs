//! Error types for downsampling operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions surfaced by the builder and
//! the validator. The pipeline itself never hard-fails: coherence failures
//! degrade to per-series reduction, invalid thresholds disable reduction,
//! and empty input passes through unchanged.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (e.g., the index of
//!   the first out-of-order sample).
//! * **Deferred**: Builder misconfiguration is caught and stored during
//!   configuration, then reported by `build()`.
//!
//! ## Key concepts
//!
//! 1. **Configuration validation**: Inverted ranges, duplicate parameters.
//! 2. **Input validation**: Out-of-order samples when auto-sorting is
//!    explicitly disabled, misaligned series sets.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Error messages are consistent in tone and formatting.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not model recoverable pipeline conditions; those
//!   degrade silently with a diagnostic log instead.

// External dependencies
use core::fmt::{Display, Formatter, Result};
use std::error::Error;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for downsampling operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownsampleError {
    /// The requested alignment range has `start` after `end`.
    InvalidRange {
        /// Requested start instant, in epoch nanoseconds.
        start: i64,
        /// Requested end instant, in epoch nanoseconds.
        end: i64,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },

    /// Input samples are not timestamp-ascending and auto-sorting was
    /// explicitly disabled.
    UnsortedInput {
        /// Index of the first sample that breaks the ordering.
        index: usize,
    },

    /// A series in a jointly reduced set does not match the shared time
    /// axis length.
    MisalignedSeriesSet {
        /// Name of the offending series.
        name: String,
        /// Length of the offending series.
        len: usize,
        /// Length of the shared time axis.
        expected: usize,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DownsampleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidRange { start, end } => {
                write!(
                    f,
                    "Invalid alignment range: start {start}ns is after end {end}ns"
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
            Self::UnsortedInput { index } => {
                write!(
                    f,
                    "Input is not timestamp-ascending (first violation at index {index}) and sorting is disabled"
                )
            }
            Self::MisalignedSeriesSet {
                name,
                len,
                expected,
            } => {
                write!(
                    f,
                    "Series '{name}' has {len} samples, expected {expected} to match the shared time axis"
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

impl Error for DownsampleError {}
