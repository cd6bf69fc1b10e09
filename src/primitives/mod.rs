//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data model, retention masks, error types, and
//! sorting utilities used throughout the crate. It has zero internal
//! dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Transforms / Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Timestamps, samples, series, and series sets.
pub mod sample;

/// Shared per-index retention decisions.
pub mod mask;

/// Shared error types.
pub mod errors;

/// Timestamp-ordering repair utilities.
pub mod sorting;
