//! # downsample — time-series reduction for charting
//!
//! A reduction pipeline that shrinks large time series down to what a
//! chart can usefully draw, while preserving the visual shape of the
//! data: peaks, troughs, slopes, and gaps survive; redundant samples do
//! not.
//!
//! ## What does it do?
//!
//! Given a series of timestamped samples and a sample budget (the
//! *threshold*), the pipeline picks at most that many samples using one
//! of several algorithms — from plain stride decimation to the
//! Largest-Triangle-Three-Buckets (LTTB) family, which scores each
//! candidate by the area of the triangle it forms with its neighbors and
//! keeps the visually influential ones. Multi-series variants coordinate
//! reduction across a whole set so correlated charts drop the *same*
//! indices. An optional alignment stage then pins the output to the
//! exact time range the caller requested, interpolating or substituting
//! at the boundaries.
//!
//! ## Quick Start
//!
//! ```rust
//! use downsample::prelude::*;
//!
//! let series: Series<f64> = Series::from_epoch_nanos(&[
//!     (0, 1.0),
//!     (1_000_000, 4.0),
//!     (2_000_000, 2.0),
//!     (3_000_000, 8.0),
//!     (4_000_000, 3.0),
//!     (5_000_000, 5.0),
//! ]);
//!
//! // Build the pipeline
//! let model = Downsample::new()
//!     .threshold(4)       // Keep at most 4 samples
//!     .algorithm(Lttb)    // Largest-Triangle-Three-Buckets
//!     .build()?;
//!
//! let reduced = model.reduce(&series)?;
//!
//! assert!(reduced.len() <= 4);
//! assert_eq!(reduced.first().unwrap().time, series.first().unwrap().time);
//! assert_eq!(reduced.last().unwrap().time, series.last().unwrap().time);
//! # Result::<(), DownsampleError>::Ok(())
//! ```
//!
//! ### Full Features
//!
//! ```rust
//! use downsample::prelude::*;
//!
//! let series: Series<f64> = (0..10_000i64)
//!     .map(|i| Sample::new(
//!         Timestamp::from_epoch_millis(i),
//!         (i as f64 / 100.0).sin(),
//!     ))
//!     .collect();
//!
//! // Build pipeline with alignment and gap handling configured
//! let model = Downsample::new()
//!     .threshold(500)                                  // Sample budget
//!     .algorithm(Lttb)                                 // Reduction algorithm
//!     .align_to(
//!         Timestamp::from_epoch_millis(0),
//!         Timestamp::from_epoch_millis(12_000),
//!     )                                                // Pin output to this range
//!     .interpolate(true)                               // Interpolate boundary samples
//!     .gap_policy(KeepGaps)                            // NaN renders as a gap
//!     .build()?;
//!
//! let reduced = model.reduce(&series)?;
//!
//! assert_eq!(reduced.first().unwrap().time, Timestamp::from_epoch_millis(0));
//! assert_eq!(reduced.last().unwrap().time, Timestamp::from_epoch_millis(12_000));
//! # Result::<(), DownsampleError>::Ok(())
//! ```
//!
//! ### Series Sets
//!
//! Several series drawn in one chart reduce together, so that every
//! series keeps the same timestamps:
//!
//! ```rust
//! use downsample::prelude::*;
//!
//! let cpu: Series<f64> = (0..5_000i64)
//!     .map(|i| Sample::new(Timestamp::from_epoch_millis(i), (i % 97) as f64))
//!     .collect();
//! let mem: Series<f64> = (0..5_000i64)
//!     .map(|i| Sample::new(Timestamp::from_epoch_millis(i), (i % 31) as f64))
//!     .collect();
//!
//! let mut set = SeriesSet::new();
//! set.insert("cpu".to_owned(), cpu);
//! set.insert("mem".to_owned(), mem);
//!
//! let model = Downsample::new()
//!     .threshold(200)
//!     .algorithm(TwoPassLttb)   // Shared retention across the set
//!     .build()?;
//!
//! let reduced = model.reduce_set(&set)?;
//! let cpu_times: Vec<_> = reduced.get("cpu").unwrap().iter().map(|s| s.time).collect();
//! let mem_times: Vec<_> = reduced.get("mem").unwrap().iter().map(|s| s.time).collect();
//! assert_eq!(cpu_times, mem_times);
//! # Result::<(), DownsampleError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! `reduce` and `reduce_set` return `Result<_, DownsampleError>`;
//! configuration mistakes (an inverted range, a parameter set twice) are
//! reported by `build()`. The `?` operator is idiomatic:
//!
//! ```rust
//! use downsample::prelude::*;
//! # let series: Series<f64> = Series::from_epoch_nanos(&[(0, 1.0), (1, 2.0)]);
//!
//! let model = Downsample::new().build()?;
//! let reduced = model.reduce(&series)?;
//! # Result::<(), DownsampleError>::Ok(())
//! ```
//!
//! ## References
//!
//! - Steinarsson, S. (2013). "Downsampling Time Series for Visual
//!   Representation" (LTTB)

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 1: Algorithms - pure reduction and interpolation kernels.
mod algorithms;

// Layer 2: Transforms - named pipeline stages over the kernels.
mod transforms;

// Layer 3: Engine - orchestration and execution control.
mod engine;

// High-level fluent API for building reduction pipelines.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Algorithm::BucketAverage, Algorithm::Decimation, Algorithm::LinearInterpolation,
        Algorithm::Lttb, Algorithm::MultiDimLttb, Algorithm::StackedLttb, Algorithm::TwoPassLttb,
        DownsampleBuilder as Downsample, DownsampleError, Downsampler,
        GapPolicy::KeepGaps, GapPolicy::ZeroFill, DEFAULT_THRESHOLD,
    };
    pub use crate::primitives::mask::RetentionMask;
    pub use crate::primitives::sample::{Sample, Series, SeriesSet, Timestamp};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes; it is not part of the stable API surface.
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod transforms {
        pub use crate::transforms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
