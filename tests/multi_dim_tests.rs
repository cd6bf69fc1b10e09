//! Tests for multi-dimensional LTTB over series sets.
//!
//! These tests verify the one-call joint reduction: a shared retention
//! decision influenced by every value dimension, identical timestamps in
//! every reduced series, and the degradation path for misaligned sets.
//!
//! ## Test Organization
//!
//! 1. **Joint Retention** - Shared timestamps, any-dimension influence
//! 2. **Degradation** - Misaligned sets reduce independently
//! 3. **Guards** - Empty and within-budget sets

use downsample::prelude::*;

fn ms(millis: i64) -> Timestamp {
    Timestamp::from_epoch_millis(millis)
}

fn constant(n: i64, value: f64) -> Series<f64> {
    (0..n).map(|i| Sample::new(ms(i), value)).collect()
}

fn times(series: &Series<f64>) -> Vec<Timestamp> {
    series.iter().map(|s| s.time).collect()
}

fn model(threshold: usize) -> Downsampler<f64> {
    Downsample::new()
        .threshold(threshold)
        .algorithm(MultiDimLttb)
        .build()
        .unwrap()
}

// ============================================================================
// Joint Retention Tests
// ============================================================================

/// Test that every series of an aligned set keeps identical timestamps.
#[test]
fn test_aligned_set_keeps_identical_timestamps() {
    let mut set = SeriesSet::new();
    set.insert("a", constant(500, 1.0));
    set.insert("b", constant(500, 2.0));
    set.insert("c", constant(500, 3.0));

    let reduced = model(50).reduce_set(&set).unwrap();

    let a_times = times(reduced.get("a").unwrap());
    assert_eq!(a_times.len(), 50);
    assert_eq!(a_times, times(reduced.get("b").unwrap()));
    assert_eq!(a_times, times(reduced.get("c").unwrap()));
}

/// Test that a spike in any one dimension is retained in every series:
/// the joint walk scores candidates across all dimensions.
#[test]
fn test_spike_in_one_dimension_retained_everywhere() {
    let mut spiky = constant(500, 0.0).into_samples();
    spiky[250].value = 1000.0;

    let mut set = SeriesSet::new();
    set.insert("flat", constant(500, 0.0));
    set.insert("spiky", Series::from_samples(spiky));

    let reduced = model(50).reduce_set(&set).unwrap();

    let spike_time = ms(250);
    assert!(times(reduced.get("spiky").unwrap()).contains(&spike_time));
    assert!(times(reduced.get("flat").unwrap()).contains(&spike_time));
}

// ============================================================================
// Degradation Tests
// ============================================================================

/// Test that a misaligned set degrades to independent per-series
/// reduction instead of failing.
#[test]
fn test_misaligned_set_reduces_independently() {
    let mut set = SeriesSet::new();
    set.insert("long", constant(500, 1.0));
    set.insert("short", constant(400, 1.0));

    let reduced = model(50).reduce_set(&set).unwrap();

    assert_eq!(reduced.get("long").unwrap().len(), 50);
    assert_eq!(reduced.get("short").unwrap().len(), 50);
}

/// Test that opting into strict alignment turns the degradation into an
/// error naming the offending series.
#[test]
fn test_strict_alignment_rejects_misaligned_set() {
    let mut set = SeriesSet::new();
    set.insert("long", constant(500, 1.0));
    set.insert("short", constant(400, 1.0));

    let strict = Downsample::new()
        .threshold(50)
        .algorithm(MultiDimLttb)
        .strict_set_alignment(true)
        .build()
        .unwrap();

    assert_eq!(
        strict.reduce_set(&set).unwrap_err(),
        DownsampleError::MisalignedSeriesSet {
            name: "short".to_owned(),
            len: 400,
            expected: 500,
        }
    );
}

/// Test that strict alignment accepts an aligned set.
#[test]
fn test_strict_alignment_accepts_aligned_set() {
    let mut set = SeriesSet::new();
    set.insert("a", constant(500, 1.0));
    set.insert("b", constant(500, 2.0));

    let strict = Downsample::new()
        .threshold(50)
        .algorithm(MultiDimLttb)
        .strict_set_alignment(true)
        .build()
        .unwrap();

    let reduced = strict.reduce_set(&set).unwrap();
    assert_eq!(reduced.get("a").unwrap().len(), 50);
}

// ============================================================================
// Guard Tests
// ============================================================================

/// Test that an empty set passes through unchanged.
#[test]
fn test_empty_set_passes_through() {
    let set: SeriesSet<f64> = SeriesSet::new();
    let reduced = model(50).reduce_set(&set).unwrap();

    assert!(reduced.is_empty());
}

/// Test that a set already within budget passes through unchanged.
#[test]
fn test_within_budget_set_passes_through() {
    let mut set = SeriesSet::new();
    set.insert("a", constant(30, 1.0));
    set.insert("b", constant(30, 2.0));

    let reduced = model(50).reduce_set(&set).unwrap();

    assert_eq!(reduced, set);
}
