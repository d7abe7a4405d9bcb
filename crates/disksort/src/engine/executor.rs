//! Execution engine for disk sorting operations.
//!
//! ## Purpose
//!
//! This module orchestrates a sort call: it checks the alternation
//! precondition, clones the input into a private working copy, dispatches
//! to the selected algorithm, and packages the outcome.
//!
//! ## Design notes
//!
//! * **Purity**: The input row is borrowed immutably and never aliased by
//!   the output; each call owns its working copy, so concurrent callers
//!   share no mutable state.
//! * **Dispatch**: Strategy selection is a plain match; both algorithms
//!   share the same contract.
//!
//! ## Invariants
//!
//! * The returned row satisfies `is_sorted()`.
//! * The returned swap count equals the number of adjacent transpositions
//!   the algorithm performed on the working copy.
//!
//! ## Non-goals
//!
//! * This module does not implement the sweeps (handled by `algorithms`).
//! * This module does not provide public-facing result formatting.

// Internal dependencies
use crate::algorithms::{SortStrategy, lawnmower, left_to_right};
use crate::engine::output::SortedRow;
use crate::engine::validator::Validator;
use crate::primitives::errors::DiskSortError;
use crate::primitives::row::DiskRow;

// ============================================================================
// Sort Executor
// ============================================================================

/// Unified entry point for running a sorting algorithm over a disk row.
pub struct SortExecutor;

impl SortExecutor {
    /// Sort `before` with the selected strategy.
    ///
    /// Validates the alternation precondition, then runs the algorithm on
    /// a private clone, leaving `before` untouched.
    pub fn run(before: &DiskRow, strategy: SortStrategy) -> Result<SortedRow, DiskSortError> {
        Validator::validate_alternating(before)?;

        let mut working = before.clone();
        let swap_count = match strategy {
            SortStrategy::LeftToRight => left_to_right::run(&mut working),
            SortStrategy::Lawnmower => lawnmower::run(&mut working),
        };

        Ok(SortedRow::new(working, swap_count))
    }
}
