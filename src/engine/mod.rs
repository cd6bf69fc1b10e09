//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a reduction run by coordinating between
//! primitives (series, masks, errors) and transforms (the reduction and
//! alignment stages). It sequences multi-pass stages and fans runs out
//! over series sets.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Transforms
//!   ↓
//! Layer 1: Primitives / Algorithms
//! ```

/// Pipeline composition and execution.
pub mod composer;

/// Validation utilities.
pub mod validator;
