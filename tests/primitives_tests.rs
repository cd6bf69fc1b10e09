//! Tests for the primitive data model.
//!
//! These tests verify timestamps, samples, series containers, retention
//! masks, and the sorting utilities the transforms build on.
//!
//! ## Test Organization
//!
//! 1. **Timestamps** - Conversions and arithmetic
//! 2. **Series** - Construction and projections
//! 3. **Retention Masks** - Marking, counting, filtering
//! 4. **Sorting** - Fast path and repair

use approx::assert_relative_eq;

use downsample::internals::primitives::sorting::{first_unsorted_index, sort_by_time};
use downsample::prelude::*;

// ============================================================================
// Timestamp Tests
// ============================================================================

/// Test the unit conversions into and out of a timestamp.
#[test]
fn test_timestamp_conversions() {
    assert_eq!(Timestamp::from_epoch_millis(5).epoch_nanos(), 5_000_000);
    assert_eq!(
        Timestamp::from_epoch_seconds(2).epoch_nanos(),
        2_000_000_000
    );
    assert_relative_eq!(Timestamp::from_epoch_nanos(1_500_000).epoch_millis(), 1.5);
}

/// Test nanosecond offsets and distances.
#[test]
fn test_timestamp_arithmetic() {
    let t = Timestamp::from_epoch_nanos(100);

    assert_eq!(t.add_nanos(-1), Timestamp::from_epoch_nanos(99));
    assert_eq!(t.add_nanos(1).nanos_since(t), 1);
    assert_eq!(t.nanos_since(t.add_nanos(10)), -10);
}

// ============================================================================
// Series Tests
// ============================================================================

/// Test construction from raw pairs and the axis projections.
#[test]
fn test_series_projections() {
    let series: Series<f64> =
        Series::from_epoch_nanos(&[(0, 1.0), (1_000_000, f64::NAN), (2_000_000, 3.0)]);

    assert_eq!(series.times_epoch_millis(), vec![0.0, 1.0, 2.0]);
    let values = series.values_f64();
    assert_eq!(values[0], 1.0);
    assert!(values[1].is_nan());
}

/// Test the NaN-aware value accessor on samples.
#[test]
fn test_sample_value_or_zero() {
    let t = Timestamp::from_epoch_nanos(0);

    assert_eq!(Sample::new(t, 4.0).value_or_zero(), 4.0);
    assert_eq!(Sample::new(t, f64::NAN).value_or_zero(), 0.0);
}

/// Test ordering detection.
#[test]
fn test_series_is_sorted_by_time() {
    let sorted: Series<f64> = Series::from_epoch_nanos(&[(0, 1.0), (1, 2.0), (1, 3.0)]);
    let unsorted: Series<f64> = Series::from_epoch_nanos(&[(5, 1.0), (1, 2.0)]);

    assert!(sorted.is_sorted_by_time());
    assert!(!unsorted.is_sorted_by_time());
}

/// Test that consuming a set iterates `(name, series)` pairs in name
/// order through the standard `IntoIterator` conversion.
#[test]
fn test_series_set_into_iterator() {
    let mut set = SeriesSet::new();
    set.insert("b", Series::from_epoch_nanos(&[(0, 1.0f64)]));
    set.insert("a", Series::from_epoch_nanos(&[(0, 2.0), (1, 3.0)]));

    let entries: Vec<(String, usize)> = set
        .into_iter()
        .map(|(name, series)| (name, series.len()))
        .collect();
    assert_eq!(
        entries,
        vec![("a".to_owned(), 2), ("b".to_owned(), 1)]
    );
}

// ============================================================================
// Retention Mask Tests
// ============================================================================

/// Test marking, counting, and index listing.
#[test]
fn test_mask_marking_and_counting() {
    let mut mask = RetentionMask::new(5, false);
    assert_eq!(mask.kept_count(), 0);

    mask.mark(0);
    mask.mark(3);
    mask.mark(3);

    assert_eq!(mask.kept_count(), 2);
    assert!(mask.is_kept(0));
    assert!(!mask.is_kept(1));
    assert_eq!(mask.retained_indices(), vec![0, 3]);
}

/// Test filtering a series down to the kept indices.
#[test]
fn test_mask_filters_series() {
    let series: Series<f64> =
        Series::from_epoch_nanos(&[(0, 0.0), (1, 1.0), (2, 2.0), (3, 3.0)]);
    let mut mask = RetentionMask::new(4, false);
    mask.mark(0);
    mask.mark(2);

    let filtered = mask.filter(&series);
    let values: Vec<f64> = filtered.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![0.0, 2.0]);
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Test that sorted input is returned unchanged through the fast path.
#[test]
fn test_sort_fast_path() {
    let series: Series<f64> = Series::from_epoch_nanos(&[(0, 1.0), (1, 2.0), (2, 3.0)]);

    assert_eq!(sort_by_time(&series), series);
    assert_eq!(first_unsorted_index(&series), None);
}

/// Test that sorting is stable for tied timestamps.
#[test]
fn test_sort_is_stable_for_ties() {
    let series: Series<f64> =
        Series::from_epoch_nanos(&[(5, 1.0), (0, 2.0), (5, 3.0), (0, 4.0)]);
    let sorted = sort_by_time(&series);

    let values: Vec<f64> = sorted.iter().map(|s| s.value).collect();
    assert_eq!(values, vec![2.0, 4.0, 1.0, 3.0]);
}

/// Test that the first ordering violation is located correctly.
#[test]
fn test_first_unsorted_index() {
    let series: Series<f64> = Series::from_epoch_nanos(&[(0, 1.0), (2, 2.0), (1, 3.0)]);

    assert_eq!(first_unsorted_index(&series), Some(2));
}
