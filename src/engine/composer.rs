//! Pipeline composition and execution.
//!
//! ## Purpose
//!
//! This module runs an ordered list of transforms over a series or a
//! series set, sequencing the multi-pass families correctly: for each
//! stage, every first-pass application completes before the next pass is
//! derived, and the derived pass then runs over every series.
//!
//! ## Design notes
//!
//! * **Freshness**: Per-run accumulator state is reset at the start of
//!   each run via `Transform::fresh()`; deliberately persistent state
//!   (the stacked mask cache) is carried across runs.
//! * **Joint stages**: A stage that reduces a whole set in one call
//!   (multi-dimensional LTTB) short-circuits the per-series fan-out.
//! * **Parallelism**: Per-series fan-out over a set runs on the rayon
//!   thread pool; transforms are `Sync` and their shared state is behind
//!   reader/writer locks.
//!
//! ## Invariants
//!
//! * Stages run in insertion order.
//! * Within a stage, all first passes complete before plan derivation.
//!
//! ## Non-goals
//!
//! * This module does not validate inputs (see the validator).
//! * This module does not decide which transforms to compose (see the
//!   builder in the API layer).

// External dependencies
use num_traits::Float;
use rayon::prelude::*;

// Internal dependencies
use crate::primitives::sample::{Series, SeriesSet};
use crate::transforms::Transform;

// ============================================================================
// Pipeline
// ============================================================================

/// An ordered list of transforms applied in sequence.
#[derive(Debug, Clone)]
pub struct Pipeline<T> {
    stages: Vec<Transform<T>>,
}

impl<T: Float> Pipeline<T> {
    /// Create a pipeline from its stages, applied in order.
    pub fn new(stages: Vec<Transform<T>>) -> Self {
        Self { stages }
    }

    /// The stages of this pipeline, in application order.
    pub fn stages(&self) -> &[Transform<T>] {
        &self.stages
    }

    /// Mutable access to the stages, e.g. to disable one.
    pub fn stages_mut(&mut self) -> &mut [Transform<T>] {
        &mut self.stages
    }

    /// Run the pipeline over a single series.
    pub fn run(&self, series: &Series<T>) -> Series<T> {
        let mut current = series.clone();
        for stage in &self.stages {
            let stage = stage.fresh();
            current = stage.apply(&current);
            let next = stage.next_pass();
            if !next.is_identity() {
                current = next.apply(&current);
            }
        }
        current
    }
}

impl<T: Float + Send + Sync> Pipeline<T> {
    /// Run the pipeline over a whole series set.
    ///
    /// Each stage either reduces the set jointly in one call or fans out
    /// over the series in parallel; for multi-pass stages, the next pass
    /// is derived only after every first-pass application has completed,
    /// then applied to every series.
    pub fn run_set(&self, set: &SeriesSet<T>) -> SeriesSet<T> {
        let mut current = set.clone();
        for stage in &self.stages {
            let stage = stage.fresh();
            if let Some(reduced) = stage.apply_joint(&current) {
                current = reduced;
                continue;
            }
            current = Self::apply_to_all(&stage, &current);
            let next = stage.next_pass();
            if !next.is_identity() {
                current = Self::apply_to_all(&next, &current);
            }
        }
        current
    }

    fn apply_to_all(stage: &Transform<T>, set: &SeriesSet<T>) -> SeriesSet<T> {
        let entries: Vec<(&String, &Series<T>)> = set.iter().collect();
        entries
            .par_iter()
            .map(|(name, series)| ((*name).clone(), stage.apply(series)))
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    }
}
