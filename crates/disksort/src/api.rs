//! High-level API for sorting alternating disk rows.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the two free sort
//! functions and a fluent builder for configuring a reusable sorter.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with a sensible default strategy.
//! * **Validated**: Builder configuration is validated when `.build()` is
//!   called; the alternation precondition is validated per sort call.
//! * **Pure**: Every sort call borrows its input immutably and returns a
//!   freshly owned result.
//!
//! ## Key concepts
//!
//! * **Free functions**: `sort_left_to_right` and `sort_lawnmower` for
//!   one-off calls.
//! * **Configuration flow**: `DiskSortBuilder::new()` → `.strategy(...)` →
//!   `.build()` → `DiskSorter::sort(&row)`.

// Internal dependencies
use crate::engine::executor::SortExecutor;
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::SortStrategy;
pub use crate::engine::output::SortedRow;
pub use crate::primitives::errors::DiskSortError;
pub use crate::primitives::row::{DiskColor, DiskRow};

// ============================================================================
// Free Sort Functions
// ============================================================================

/// Sort an alternating row with the left-to-right bubble algorithm.
///
/// The input must satisfy `is_alternating()`; it is left unmodified and the
/// result holds a new row together with the swap count.
pub fn sort_left_to_right(before: &DiskRow) -> Result<SortedRow, DiskSortError> {
    SortExecutor::run(before, SortStrategy::LeftToRight)
}

/// Sort an alternating row with the bidirectional lawnmower algorithm.
///
/// Same contract as [`sort_left_to_right`]; only the pass structure (and
/// therefore the per-pass work) differs.
pub fn sort_lawnmower(before: &DiskRow) -> Result<SortedRow, DiskSortError> {
    SortExecutor::run(before, SortStrategy::Lawnmower)
}

// ============================================================================
// Disk Sort Builder
// ============================================================================

/// Fluent builder for configuring a reusable disk sorter.
#[derive(Debug, Clone)]
pub struct DiskSortBuilder {
    /// Sorting algorithm to run.
    pub strategy: Option<SortStrategy>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for DiskSortBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DiskSortBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            strategy: None,
            duplicate_param: None,
        }
    }

    /// Set the sorting strategy.
    pub fn strategy(mut self, strategy: SortStrategy) -> Self {
        if self.strategy.is_some() {
            self.duplicate_param = Some("strategy");
        }
        self.strategy = Some(strategy);
        self
    }

    /// Build the sorter.
    pub fn build(self) -> Result<DiskSorter, DiskSortError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(DiskSorter {
            strategy: self.strategy.unwrap_or_default(),
        })
    }
}

// ============================================================================
// Disk Sorter
// ============================================================================

/// Configured sorter, reusable across any number of rows.
#[derive(Debug, Clone)]
pub struct DiskSorter {
    strategy: SortStrategy,
}

impl DiskSorter {
    /// Sort an alternating row with the configured strategy.
    pub fn sort(&self, before: &DiskRow) -> Result<SortedRow, DiskSortError> {
        SortExecutor::run(before, self.strategy)
    }

    /// The strategy this sorter runs.
    #[inline]
    pub fn strategy(&self) -> SortStrategy {
        self.strategy
    }
}
