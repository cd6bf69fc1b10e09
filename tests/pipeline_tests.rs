//! Tests for the builder API and pipeline behavior.
//!
//! These tests verify the configuration surface end to end: builder
//! validation, default settings, input sorting, stage toggling, and the
//! invariants every configured pipeline upholds (size bound, endpoint
//! retention, idempotence).
//!
//! ## Test Organization
//!
//! 1. **Builder Validation** - Duplicates and invalid ranges
//! 2. **Defaults** - The out-of-the-box configuration
//! 3. **Sorting** - Auto-sort on, verification when off
//! 4. **Stage Control** - Disabling a stage by name
//! 5. **Invariants** - Size bound, endpoints, idempotence

use downsample::internals::transforms::{
    IdentityTransform, NanToZeroTransform, SortTransform, Transform,
};
use downsample::prelude::*;

fn ms(millis: i64) -> Timestamp {
    Timestamp::from_epoch_millis(millis)
}

fn wave(n: i64) -> Series<f64> {
    (0..n)
        .map(|i| Sample::new(ms(i), (i as f64 / 30.0).sin()))
        .collect()
}

// ============================================================================
// Builder Validation Tests
// ============================================================================

/// Test that setting a parameter twice is reported by `build()`.
#[test]
fn test_duplicate_parameter_is_rejected() {
    let result = Downsample::<f64>::new().threshold(100).threshold(200).build();

    assert_eq!(
        result.unwrap_err(),
        DownsampleError::DuplicateParameter {
            parameter: "threshold"
        }
    );
}

/// Test that an inverted alignment range is rejected.
#[test]
fn test_inverted_range_is_rejected() {
    let result = Downsample::<f64>::new().align_to(ms(10), ms(5)).build();

    assert!(matches!(
        result.unwrap_err(),
        DownsampleError::InvalidRange { .. }
    ));
}

/// Test that error messages render with context.
#[test]
fn test_error_display() {
    let err = DownsampleError::UnsortedInput { index: 7 };
    assert!(err.to_string().contains("index 7"));

    let err = DownsampleError::MisalignedSeriesSet {
        name: "cpu".to_owned(),
        len: 90,
        expected: 100,
    };
    assert!(err.to_string().contains("cpu"));
}

// ============================================================================
// Default Configuration Tests
// ============================================================================

/// Test that the default configuration builds and applies the default
/// budget.
#[test]
fn test_default_configuration() {
    let model = Downsample::new().build().unwrap();
    let reduced = model.reduce(&wave(10_000)).unwrap();

    assert_eq!(reduced.len(), DEFAULT_THRESHOLD);
}

// ============================================================================
// Sorting Tests
// ============================================================================

/// Test that unsorted input is repaired by the default sort stage.
#[test]
fn test_unsorted_input_is_sorted_by_default() {
    let series: Series<f64> = Series::from_samples(vec![
        Sample::new(ms(5), 5.0),
        Sample::new(ms(0), 0.0),
        Sample::new(ms(10), 10.0),
    ]);
    let model = Downsample::new().threshold(0).build().unwrap();
    let reduced = model.reduce(&series).unwrap();

    assert!(reduced.is_sorted_by_time());
    assert_eq!(reduced.first().unwrap().time, ms(0));
}

/// Test that with sorting explicitly disabled, unsorted input is an
/// error naming the first out-of-order index.
#[test]
fn test_unsorted_input_rejected_when_sorting_disabled() {
    let series: Series<f64> = Series::from_samples(vec![
        Sample::new(ms(5), 5.0),
        Sample::new(ms(0), 0.0),
    ]);
    let model = Downsample::new().sort_input(false).build().unwrap();

    assert_eq!(
        model.reduce(&series).unwrap_err(),
        DownsampleError::UnsortedInput { index: 1 }
    );
}

/// Test that sorted input passes verification when sorting is disabled.
#[test]
fn test_sorted_input_accepted_when_sorting_disabled() {
    let model = Downsample::new()
        .sort_input(false)
        .threshold(100)
        .build()
        .unwrap();
    let reduced = model.reduce(&wave(1_000)).unwrap();

    assert_eq!(reduced.len(), 100);
}

// ============================================================================
// Stage Control Tests
// ============================================================================

/// Test that a disabled reduction stage passes data through unchanged.
#[test]
fn test_disabled_stage_passes_through() {
    let series = wave(1_000);
    let mut model = Downsample::new().threshold(100).algorithm(Lttb).build().unwrap();
    for stage in model.pipeline_mut().stages_mut() {
        if stage.name() == "lttb" {
            stage.set_enabled(false);
        }
    }

    let reduced = model.reduce(&series).unwrap();
    assert_eq!(reduced, series);
}

/// Test that default construction agrees with `new()`: a stage built
/// either way starts enabled.
#[test]
fn test_default_constructed_stages_are_enabled() {
    let stages = [
        Transform::<f64>::Identity(IdentityTransform::default()),
        Transform::<f64>::Sort(SortTransform::default()),
        Transform::<f64>::NanToZero(NanToZeroTransform::default()),
    ];
    for stage in &stages {
        assert!(stage.enabled(), "{} starts disabled", stage.name());
    }
}

/// Test that the configured stages carry inspectable names in order.
#[test]
fn test_stage_names_reflect_configuration() {
    let model = Downsample::<f64>::new()
        .threshold(100)
        .algorithm(BucketAverage)
        .align_to(ms(0), ms(100))
        .gap_policy(ZeroFill)
        .build()
        .unwrap();

    let names: Vec<&str> = model.pipeline().stages().iter().map(|s| s.name()).collect();
    assert_eq!(
        names,
        vec!["sort", "bucket-average", "align-boundaries", "nan-to-zero"]
    );
}

// ============================================================================
// Invariant Tests
// ============================================================================

/// Test the size bound across every algorithm: never more than
/// `max(threshold, 2)` samples out.
#[test]
fn test_size_bound_for_every_algorithm() {
    let series = wave(2_000);
    for algorithm in [
        Decimation,
        Lttb,
        TwoPassLttb,
        StackedLttb,
        MultiDimLttb,
        BucketAverage,
        LinearInterpolation,
    ] {
        let model = Downsample::new()
            .threshold(100)
            .algorithm(algorithm)
            .build()
            .unwrap();
        let reduced = model.reduce(&series).unwrap();
        assert!(
            reduced.len() <= 102,
            "{algorithm:?} produced {} samples",
            reduced.len()
        );
    }
}

/// Test that the selecting algorithms always keep the first and last
/// samples.
#[test]
fn test_endpoints_kept_by_selecting_algorithms() {
    let series = wave(2_000);
    for algorithm in [Decimation, Lttb, TwoPassLttb, StackedLttb, MultiDimLttb] {
        let model = Downsample::new()
            .threshold(100)
            .algorithm(algorithm)
            .build()
            .unwrap();
        let reduced = model.reduce(&series).unwrap();
        assert_eq!(reduced.first(), series.first(), "{algorithm:?}");
        assert_eq!(reduced.last(), series.last(), "{algorithm:?}");
    }
}

/// Test idempotence: reducing an already reduced series is a no-op, as
/// the result is within budget.
#[test]
fn test_reduction_is_idempotent() {
    let model = Downsample::new().threshold(100).algorithm(Lttb).build().unwrap();
    let once = model.reduce(&wave(2_000)).unwrap();
    let twice = model.reduce(&once).unwrap();

    assert_eq!(once, twice);
}

/// Test that reducing an empty series yields an empty series.
#[test]
fn test_empty_series_reduces_to_empty() {
    let model = Downsample::new().threshold(100).build().unwrap();
    let reduced = model.reduce(&Series::<f64>::new()).unwrap();

    assert!(reduced.is_empty());
}
