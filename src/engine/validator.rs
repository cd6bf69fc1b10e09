//! Input validation for pipeline configuration and data.
//!
//! ## Purpose
//!
//! This module provides the validation functions applied to pipeline
//! configuration and input series before any transform runs. It checks
//! requirements such as range ordering, timestamp ordering, and
//! series-set alignment.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Range Bounds**: A requested range must satisfy `start <= end`.
//! * **Ordering Checks**: Reductions assume timestamp-ascending input;
//!   when input sorting is disabled, ordering is verified instead.
//! * **Alignment Checks**: Joint reductions require every series of a
//!   set to have the same length.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort, transform, or filter input data.
//! * This module does not provide automatic correction of invalid inputs.
//! * This module does not perform any reduction itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::DownsampleError;
use crate::primitives::sample::{Series, SeriesSet, Timestamp};
use crate::primitives::sorting::first_unsorted_index;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for pipeline configuration and input data.
///
/// Provides static methods returning `Result<(), DownsampleError>` that
/// fail fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate that a requested alignment range is well formed.
    pub fn validate_range(start: Timestamp, end: Timestamp) -> Result<(), DownsampleError> {
        if start > end {
            return Err(DownsampleError::InvalidRange {
                start: start.epoch_nanos(),
                end: end.epoch_nanos(),
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DownsampleError> {
        if let Some(param) = duplicate_param {
            return Err(DownsampleError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }

    // ========================================================================
    // Input Validation
    // ========================================================================

    /// Validate that a series is timestamp-ascending.
    pub fn validate_sorted<T: Float>(series: &Series<T>) -> Result<(), DownsampleError> {
        if let Some(index) = first_unsorted_index(series) {
            return Err(DownsampleError::UnsortedInput { index });
        }
        Ok(())
    }

    /// Validate that every series of a set has the same length.
    pub fn validate_set_alignment<T: Float>(set: &SeriesSet<T>) -> Result<(), DownsampleError> {
        let Some((_, first)) = set.iter().next() else {
            return Ok(());
        };
        let expected = first.len();
        for (name, series) in set.iter() {
            if series.len() != expected {
                return Err(DownsampleError::MisalignedSeriesSet {
                    name: name.clone(),
                    len: series.len(),
                    expected,
                });
            }
        }
        Ok(())
    }
}
