//! Input validation for disk sorting.
//!
//! ## Purpose
//!
//! This module provides the precondition checks that guard the sorting
//! engine: the alternation requirement on input rows and the
//! duplicate-parameter check used by the builder API.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first violation encountered.
//! * **Contextual**: Failures name the offending index or parameter.
//!
//! ## Invariants
//!
//! * Validation is deterministic and side-effect free.
//! * A row that passes `validate_alternating` satisfies `is_alternating()`.
//!
//! ## Non-goals
//!
//! * This module does not perform the sorting itself.
//! * This module does not check row indices (`DiskRow` owns those checks).

// Internal dependencies
use crate::primitives::errors::DiskSortError;
use crate::primitives::row::DiskRow;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sorting preconditions.
///
/// Provides static methods returning `Result<(), DiskSortError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate that `row` is in alternating order.
    ///
    /// Reports the index of the first disk whose right neighbor has the
    /// same color. Sorting a non-alternating row is a caller-side
    /// programming error, not a recoverable condition.
    pub fn validate_alternating(row: &DiskRow) -> Result<(), DiskSortError> {
        for index in 0..row.total_count().saturating_sub(1) {
            if row.get(index)? == row.get(index + 1)? {
                return Err(DiskSortError::NotAlternating { index });
            }
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), DiskSortError> {
        if let Some(parameter) = duplicate_param {
            return Err(DiskSortError::DuplicateParameter { parameter });
        }
        Ok(())
    }
}
