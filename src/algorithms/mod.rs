//! Layer 2: Algorithms
//!
//! This layer implements the pure numeric reduction kernels: stride
//! decimation, the LTTB bucket walk, bucket averaging, and linear
//! interpolation. Kernels are free functions over series and value rows;
//! orchestration, state, and coordination live in the transform layer.

// Linear stride-based decimation.
pub mod decimation;

// LTTB bucket walk and retention mask construction.
pub mod lttb;

// Time-proportional bucket averaging.
pub mod bucket_average;

// Two-point linear interpolation and even-grid resampling.
pub mod interpolation;
