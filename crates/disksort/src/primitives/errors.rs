//! Error types for disk row construction and sorting.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur while building a
//! disk row, accessing it by index, or sorting it.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending values (index, row length).
//! * **Uniform**: Every precondition violation maps to a typed error; there
//!   is no panic-based failure path on the public surface.
//! * **No-std**: Implements `Display` via `core::fmt` and gates the
//!   `std::error::Error` impl behind the `std` feature.
//!
//! ## Non-goals
//!
//! * This module does not perform the checks themselves.
//! * This module does not provide recovery or fallback strategies; every
//!   error here signals a caller-side programming mistake.

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for disk row operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiskSortError {
    /// A row must contain at least one light disk (and therefore one dark disk).
    ZeroLightCount,

    /// Index-based access outside `0..len`.
    IndexOutOfRange {
        /// The index that was requested.
        index: usize,
        /// Number of disks in the row.
        len: usize,
    },

    /// An adjacent swap whose right partner `left_index + 1` would leave the row.
    SwapOutOfRange {
        /// Left index of the requested swap.
        left_index: usize,
        /// Number of disks in the row.
        len: usize,
    },

    /// The sorters require an alternating input row; the disk at `index`
    /// matches the color of its right neighbor.
    NotAlternating {
        /// Index of the first disk whose right neighbor has the same color.
        index: usize,
    },

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DiskSortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::ZeroLightCount => {
                write!(f, "Row must contain at least one light disk")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index out of range: {index} (row has {len} disks)")
            }
            Self::SwapOutOfRange { left_index, len } => {
                write!(
                    f,
                    "Swap out of range: left index {left_index} has no right neighbor (row has {len} disks)"
                )
            }
            Self::NotAlternating { index } => {
                write!(
                    f,
                    "Row is not alternating: disks at {index} and {} have the same color",
                    index + 1
                )
            }
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl std::error::Error for DiskSortError {}
