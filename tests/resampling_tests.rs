//! Tests for bucket-average and even-grid linear resampling.
//!
//! These tests verify the two value-synthesizing reductions: bucket
//! averaging with its end-boundary emission and empty-bucket substitute,
//! and even-grid linear resampling with its exact output size.
//!
//! ## Test Organization
//!
//! 1. **Bucket Average** - Emission points, averages, NaN, empty buckets
//! 2. **Linear Resampling** - Grid placement and interpolated values
//! 3. **Guards** - Degenerate spans and within-budget inputs

use approx::assert_relative_eq;

use downsample::internals::algorithms::bucket_average::bucket_average;
use downsample::internals::algorithms::interpolation::{lerp, resample_linear};
use downsample::prelude::*;

fn ms(millis: i64) -> Timestamp {
    Timestamp::from_epoch_millis(millis)
}

fn ramp_ms(n: i64) -> Series<f64> {
    (0..n)
        .map(|i| Sample::new(ms(i), i as f64))
        .collect()
}

// ============================================================================
// Bucket Average Tests
// ============================================================================

/// Test the full emission pattern over a small ramp: the original first
/// and last samples plus one averaged point per advanced bucket, emitted
/// at the bucket's end boundary.
#[test]
fn test_bucket_average_emission_pattern() {
    // Eleven samples over [0, 10]ms with five buckets of 2ms each
    let series = ramp_ms(11);
    let reduced = bucket_average(&series, 5, f64::NAN);

    let expected = vec![
        (ms(0), 0.0),
        (ms(2), 1.0),
        (ms(4), 2.5),
        (ms(6), 4.5),
        (ms(8), 6.5),
        (ms(10), 10.0),
    ];
    assert_eq!(reduced.len(), expected.len());
    for (sample, (time, value)) in reduced.iter().zip(expected) {
        assert_eq!(sample.time, time);
        assert_relative_eq!(sample.value, value);
    }
}

/// Test that NaN samples contribute zero to their bucket's sum while
/// still counting toward its size.
#[test]
fn test_bucket_average_nan_contributes_zero() {
    let mut samples: Vec<Sample<f64>> = (0..11i64).map(|i| Sample::new(ms(i), i as f64)).collect();
    samples[2].value = f64::NAN;
    let series = Series::from_samples(samples);
    let reduced = bucket_average(&series, 5, f64::NAN);

    // The [2, 4)ms bucket averaged {NaN->0.0, 3.0}
    assert_eq!(reduced.get(2).unwrap().time, ms(4));
    assert_relative_eq!(reduced.get(2).unwrap().value, 1.5);
}

/// Test that a bucket containing no samples emits the substitute value.
#[test]
fn test_bucket_average_empty_bucket_emits_substitute() {
    let series: Series<f64> = Series::from_samples(vec![
        Sample::new(ms(0), 1.0),
        Sample::new(ms(5), 7.0),
        Sample::new(ms(10), 3.0),
    ]);
    let reduced = bucket_average(&series, 2, f64::NAN);

    assert_eq!(reduced.len(), 3);
    assert_eq!(reduced.get(1).unwrap().time, ms(5));
    assert!(reduced.get(1).unwrap().value.is_nan());
}

/// Test that a degenerate span (all samples within one nanosecond per
/// bucket) passes through unchanged instead of looping on a zero step.
#[test]
fn test_bucket_average_degenerate_span_is_noop() {
    let series: Series<f64> = (0..10i64)
        .map(|i| Sample::new(Timestamp::from_epoch_nanos(i / 5), i as f64))
        .collect();
    let reduced = bucket_average(&series, 8, f64::NAN);

    assert_eq!(reduced, series);
}

/// Test the within-budget and zero-threshold guards.
#[test]
fn test_bucket_average_guards() {
    let series = ramp_ms(10);

    assert_eq!(bucket_average(&series, 0, f64::NAN), series);
    assert_eq!(bucket_average(&series, 10, f64::NAN), series);
}

// ============================================================================
// Linear Resampling Tests
// ============================================================================

/// Test that resampling a linear ramp reproduces the ramp exactly on the
/// even grid.
#[test]
fn test_resample_linear_ramp_is_exact() {
    let series = ramp_ms(101);
    let reduced = resample_linear(&series, 5);

    assert_eq!(reduced.len(), 5);
    let expected = [(0i64, 0.0), (25, 25.0), (50, 50.0), (75, 75.0), (100, 100.0)];
    for (sample, (time, value)) in reduced.iter().zip(expected) {
        assert_eq!(sample.time, ms(time));
        assert_relative_eq!(sample.value, value);
    }
}

/// Test that the first and last samples are emitted unmodified.
#[test]
fn test_resample_linear_keeps_endpoints() {
    let series: Series<f64> = (0..1_000i64)
        .map(|i| Sample::new(ms(i * 3), (i as f64 / 11.0).sin()))
        .collect();
    let reduced = resample_linear(&series, 20);

    assert_eq!(reduced.len(), 20);
    assert_eq!(reduced.first(), series.first());
    assert_eq!(reduced.last(), series.last());
}

/// Test interpolation between two anchor points.
#[test]
fn test_lerp_between_anchors() {
    assert_relative_eq!(lerp(0.0, 0.0, 10.0, 10.0, 2.5), 2.5);
    assert_relative_eq!(lerp(0.0, 4.0, 10.0, 4.0, 7.0), 4.0);
}

/// Test that tied anchor instants degrade to the average of the two
/// values instead of dividing by zero.
#[test]
fn test_lerp_tied_instants_average() {
    assert_relative_eq!(lerp(5.0, 2.0, 5.0, 4.0, 5.0), 3.0);
}

/// Test the within-budget and zero-threshold guards.
#[test]
fn test_resample_linear_guards() {
    let series = ramp_ms(10);

    assert_eq!(resample_linear(&series, 0), series);
    assert_eq!(resample_linear(&series, 10), series);
}
