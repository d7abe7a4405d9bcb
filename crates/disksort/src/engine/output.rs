//! Output types for disk sorting operations.
//!
//! ## Purpose
//!
//! This module defines the `SortedRow` struct which encapsulates the
//! outcome of a sort call: the final disk row and the number of adjacent
//! swaps it took to produce it.
//!
//! ## Design notes
//!
//! * **Immutable**: Fields are private and exposed through accessors; a
//!   `SortedRow` is created once at the end of a sort call and never
//!   mutated afterward.
//! * **Ergonomics**: Implements `Display` for human-readable output.
//!
//! ## Invariants
//!
//! * The stored row satisfies `is_sorted()` whenever it was produced by
//!   the executor from a valid alternating input.
//! * The swap count is exact, not an estimate.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting; it only stores results.

// External dependencies
use core::fmt::{Display, Formatter};

// Internal dependencies
use crate::primitives::row::DiskRow;

// ============================================================================
// Result Structure
// ============================================================================

/// Outcome of a sort call: the final row plus its swap count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedRow {
    after: DiskRow,
    swap_count: usize,
}

impl SortedRow {
    /// Package a finished row with its swap count.
    #[inline]
    pub fn new(after: DiskRow, swap_count: usize) -> Self {
        Self { after, swap_count }
    }

    /// The row after sorting.
    #[inline]
    pub fn after(&self) -> &DiskRow {
        &self.after
    }

    /// Number of adjacent swaps performed by the sort call.
    #[inline]
    pub fn swap_count(&self) -> usize {
        self.swap_count
    }

    /// Consume the outcome, yielding the final row.
    #[inline]
    pub fn into_row(self) -> DiskRow {
        self.after
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortedRow {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Summary:")?;
        writeln!(f, "  Disks:  {}", self.after.total_count())?;
        writeln!(f, "  Swaps:  {}", self.swap_count)?;
        writeln!(
            f,
            "  Sorted: {}",
            if self.after.is_sorted() { "yes" } else { "no" }
        )?;
        writeln!(f)?;
        writeln!(f, "Final row:")?;
        write!(f, "  {}", self.after)
    }
}
