//! Boundary alignment against the requested query range.
//!
//! ## Purpose
//!
//! This module forces a series' first and last timestamps to match the
//! `[start, end]` range the caller originally requested, regardless of
//! what the data source actually returned under clock or agent skew:
//! truncating samples outside the range and synthesizing exact-boundary
//! samples by interpolation or substitution.
//!
//! ## Design notes
//!
//! * **Late data**: When the first sample is *after* `start`, two
//!   synthetic points are inserted, one at `first - 1ns` and one at
//!   exactly `start`, both holding the substitute value. This renders an
//!   abrupt drop to "no data" instead of a misleading slope.
//! * **Early data**: When the first sample is *before* `start`, leading
//!   samples are dropped and one sample at exactly `start` is inserted,
//!   linearly interpolated between the last dropped and first retained
//!   samples. Interpolation disabled, or a NaN endpoint, falls back to
//!   the substitute value.
//! * **Tail**: Symmetric handling against `end`.
//! * **Substitute**: NaN when the rendering target supports gaps, `0.0`
//!   otherwise; chosen by the caller at construction.
//! * **Fully outside**: A series entirely before `start` or entirely
//!   after `end` degrades to the two-sample substitute envelope at the
//!   boundaries.
//!
//! ## Invariants
//!
//! * Input is assumed timestamp-ascending (sort first otherwise).
//! * Output of a non-empty input starts at exactly `start` and ends at
//!   exactly `end`.
//! * Empty input passes through unchanged.
//!
//! ## Non-goals
//!
//! * This transform does not reduce point counts; it runs after the
//!   reduction stage.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::interpolation::lerp;
use crate::primitives::sample::{Sample, Series, Timestamp};

// ============================================================================
// Boundary Alignment
// ============================================================================

/// Aligns a series' first and last samples with the exact instants the
/// caller requested.
#[derive(Debug, Clone)]
pub struct AlignBoundariesTransform<T> {
    pub(crate) enabled: bool,
    pub(crate) start: Timestamp,
    pub(crate) end: Timestamp,
    pub(crate) interpolate: bool,
    pub(crate) substitute: T,
}

impl<T: Float> AlignBoundariesTransform<T> {
    /// Create an alignment transform for the requested `[start, end]`
    /// range.
    pub fn new(start: Timestamp, end: Timestamp, interpolate: bool, substitute: T) -> Self {
        Self {
            enabled: true,
            start,
            end,
            interpolate,
            substitute,
        }
    }

    pub(crate) fn apply_inner(&self, series: &Series<T>) -> Series<T> {
        if series.is_empty() {
            return series.clone();
        }
        let mut samples: Vec<Sample<T>> = series.as_slice().to_vec();

        // A series with no overlap at all degrades to the substitute
        // envelope at the requested boundaries.
        let fully_before = samples[samples.len() - 1].time < self.start;
        let fully_after = samples[0].time > self.end;
        if fully_before || fully_after {
            return Series::from_samples(vec![
                Sample::new(self.start, self.substitute),
                Sample::new(self.end, self.substitute),
            ]);
        }

        self.align_head(&mut samples);
        self.align_tail(&mut samples);
        Series::from_samples(samples)
    }

    /// Align the lower (earlier) boundary of the series.
    fn align_head(&self, samples: &mut Vec<Sample<T>>) {
        let first = samples[0];
        if first.time > self.start {
            // Data begins after the requested start: drop abruptly to
            // "no data" right before the first real sample.
            let edge = first.time.add_nanos(-1);
            if edge > self.start {
                samples.insert(0, Sample::new(edge, self.substitute));
            }
            samples.insert(0, Sample::new(self.start, self.substitute));
        } else if first.time < self.start {
            // Drop every leading sample strictly before the start; the
            // envelope check guarantees at least one sample remains.
            let cut = samples
                .iter()
                .position(|s| s.time >= self.start)
                .unwrap_or(samples.len() - 1);
            let previous = samples[cut - 1];
            let next = samples[cut];
            samples.drain(..cut);
            if samples[0].time > self.start {
                let value = self.boundary_value(&previous, &next, self.start);
                samples.insert(0, Sample::new(self.start, value));
            }
        }
    }

    /// Align the higher (later) boundary of the series.
    fn align_tail(&self, samples: &mut Vec<Sample<T>>) {
        let last = samples[samples.len() - 1];
        if last.time < self.end {
            let edge = last.time.add_nanos(1);
            if edge < self.end {
                samples.push(Sample::new(edge, self.substitute));
            }
            samples.push(Sample::new(self.end, self.substitute));
        } else if last.time > self.end {
            let cut = samples
                .iter()
                .rposition(|s| s.time <= self.end)
                .unwrap_or(0);
            let kept = samples[cut];
            let dropped = samples[cut + 1];
            samples.truncate(cut + 1);
            if samples[samples.len() - 1].time < self.end {
                let value = self.boundary_value(&kept, &dropped, self.end);
                samples.push(Sample::new(self.end, value));
            }
        }
    }

    /// Value of the synthetic sample at `at`, interpolated between the
    /// bracketing samples when enabled and both endpoints are finite
    /// numbers, otherwise the substitute.
    fn boundary_value(&self, left: &Sample<T>, right: &Sample<T>, at: Timestamp) -> T {
        if self.interpolate && !left.value.is_nan() && !right.value.is_nan() {
            lerp(
                left.time.epoch_millis(),
                left.value,
                right.time.epoch_millis(),
                right.value,
                at.epoch_millis(),
            )
        } else {
            self.substitute
        }
    }
}
