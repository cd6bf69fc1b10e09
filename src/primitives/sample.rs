//! Core data model for time series reduction.
//!
//! ## Purpose
//!
//! This module defines the data units that flow through every transform:
//! timestamps, samples, series, and named sets of series that share a
//! common time axis.
//!
//! ## Design notes
//!
//! * **Immutability**: Samples are plain `Copy` values; transforms produce
//!   new series rather than mutating their input.
//! * **Time axis**: Timestamps are nanosecond instants; area arithmetic
//!   projects them onto a linear epoch-millisecond axis in `f64`.
//! * **Generics**: Sample values are generic over `Float` so the same
//!   kernels serve `f32` and `f64` payloads.
//! * **NaN payload**: NaN is a valid sample value meaning "no data" and is
//!   preserved by every transform unless the caller opts into zero-fill.
//!
//! ## Key concepts
//!
//! * **Series**: ordered sample sequence, assumed (not guaranteed) to be
//!   timestamp-ascending; the sort transform restores this invariant.
//! * **SeriesSet**: named series sharing one time axis, reduced jointly by
//!   the multi-series transform families.
//!
//! ## Invariants
//!
//! * Reduction kernels require non-decreasing timestamps.
//! * Series in a set consumed by joint reduction must be index-aligned;
//!   this is a caller precondition, checked (and degraded on) downstream.
//!
//! ## Non-goals
//!
//! * This module does not parse source formats into samples.
//! * This module does not enforce timestamp ordering (see the sort transform).

// External dependencies
use core::fmt;
use num_traits::Float;
use std::collections::BTreeMap;

/// Nanoseconds per millisecond, used when projecting onto the area axis.
const NANOS_PER_MILLI: f64 = 1_000_000.0;

// ============================================================================
// Timestamp
// ============================================================================

/// A monotonic instant, stored as nanoseconds since the Unix epoch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a timestamp from nanoseconds since the epoch.
    pub const fn from_epoch_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Create a timestamp from milliseconds since the epoch.
    pub const fn from_epoch_millis(millis: i64) -> Self {
        Self(millis * 1_000_000)
    }

    /// Create a timestamp from seconds since the epoch.
    pub const fn from_epoch_seconds(seconds: i64) -> Self {
        Self(seconds * 1_000_000_000)
    }

    /// Nanoseconds since the epoch.
    pub const fn epoch_nanos(&self) -> i64 {
        self.0
    }

    /// Position on the linear epoch-millisecond axis used for area
    /// arithmetic and interpolation.
    pub fn epoch_millis(&self) -> f64 {
        self.0 as f64 / NANOS_PER_MILLI
    }

    /// Offset this instant by a (possibly negative) number of nanoseconds.
    pub const fn add_nanos(&self, nanos: i64) -> Self {
        Self(self.0.saturating_add(nanos))
    }

    /// Signed distance to `earlier`, in nanoseconds.
    pub const fn nanos_since(&self, earlier: Timestamp) -> i64 {
        self.0.saturating_sub(earlier.0)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ns", self.0)
    }
}

// ============================================================================
// Sample
// ============================================================================

/// A single timestamped value. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample<T> {
    /// The instant this value was observed.
    pub time: Timestamp,

    /// The observed value; NaN represents "no data".
    pub value: T,
}

impl<T: Float> Sample<T> {
    /// Create a new sample.
    pub fn new(time: Timestamp, value: T) -> Self {
        Self { time, value }
    }

    /// The sample value with NaN substituted by zero, used by arithmetic
    /// kernels that must not let NaN poison comparisons or averages. The
    /// emitted sample always keeps the original value.
    pub fn value_or_zero(&self) -> T {
        if self.value.is_nan() {
            T::zero()
        } else {
            self.value
        }
    }
}

// ============================================================================
// Series
// ============================================================================

/// An ordered sequence of samples.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series<T> {
    samples: Vec<Sample<T>>,
}

impl<T: Float> Series<T> {
    /// Create an empty series.
    pub fn new() -> Self {
        Self {
            samples: Vec::new(),
        }
    }

    /// Create a series from pre-built samples.
    pub fn from_samples(samples: Vec<Sample<T>>) -> Self {
        Self { samples }
    }

    /// Create a series from `(epoch-nanosecond, value)` pairs.
    pub fn from_epoch_nanos(points: &[(i64, T)]) -> Self {
        Self {
            samples: points
                .iter()
                .map(|&(t, v)| Sample::new(Timestamp::from_epoch_nanos(t), v))
                .collect(),
        }
    }

    /// Number of samples in the series.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// True when the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The earliest sample, if any.
    pub fn first(&self) -> Option<&Sample<T>> {
        self.samples.first()
    }

    /// The latest sample, if any.
    pub fn last(&self) -> Option<&Sample<T>> {
        self.samples.last()
    }

    /// Sample at `index`, if in bounds.
    pub fn get(&self, index: usize) -> Option<&Sample<T>> {
        self.samples.get(index)
    }

    /// Append a sample. Ordering is the caller's responsibility.
    pub fn push(&mut self, sample: Sample<T>) {
        self.samples.push(sample);
    }

    /// Borrow the underlying samples.
    pub fn as_slice(&self) -> &[Sample<T>] {
        &self.samples
    }

    /// Consume the series, yielding its samples.
    pub fn into_samples(self) -> Vec<Sample<T>> {
        self.samples
    }

    /// Iterate over the samples in order.
    pub fn iter(&self) -> core::slice::Iter<'_, Sample<T>> {
        self.samples.iter()
    }

    /// True when timestamps are non-decreasing, the invariant required by
    /// every reduction kernel.
    pub fn is_sorted_by_time(&self) -> bool {
        self.samples.windows(2).all(|w| w[0].time <= w[1].time)
    }

    /// Project the time axis onto epoch milliseconds.
    pub fn times_epoch_millis(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.time.epoch_millis()).collect()
    }

    /// Values as `f64`, preserving NaN.
    pub fn values_f64(&self) -> Vec<f64> {
        self.samples
            .iter()
            .map(|s| s.value.to_f64().unwrap_or(f64::NAN))
            .collect()
    }
}

impl<T: Float> FromIterator<Sample<T>> for Series<T> {
    fn from_iter<I: IntoIterator<Item = Sample<T>>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

// ============================================================================
// SeriesSet
// ============================================================================

/// A named mapping of series identifier to series, used when several
/// correlated series must be reduced with a shared retention decision.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesSet<T> {
    series: BTreeMap<String, Series<T>>,
}

impl<T: Float> SeriesSet<T> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self {
            series: BTreeMap::new(),
        }
    }

    /// Insert a series under `name`, replacing any previous entry.
    pub fn insert(&mut self, name: impl Into<String>, series: Series<T>) {
        self.series.insert(name.into(), series);
    }

    /// Series registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<&Series<T>> {
        self.series.get(name)
    }

    /// Number of series in the set.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True when the set holds no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Iterate over `(name, series)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Series<T>)> {
        self.series.iter()
    }

    /// Names in iteration order.
    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.series.keys()
    }
}

impl<T: Float> FromIterator<(String, Series<T>)> for SeriesSet<T> {
    fn from_iter<I: IntoIterator<Item = (String, Series<T>)>>(iter: I) -> Self {
        Self {
            series: iter.into_iter().collect(),
        }
    }
}

impl<T> IntoIterator for SeriesSet<T> {
    type Item = (String, Series<T>);
    type IntoIter = std::collections::btree_map::IntoIter<String, Series<T>>;

    /// Consume the set, yielding `(name, series)` pairs in name order.
    fn into_iter(self) -> Self::IntoIter {
        self.series.into_iter()
    }
}
