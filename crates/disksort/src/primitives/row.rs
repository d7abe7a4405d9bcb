//! Disk row primitives for the alternating disks problem.
//!
//! ## Purpose
//!
//! This module provides the core data structures for a row of two-colored
//! disks: the `DiskColor` enum and the `DiskRow` sequence with its
//! construction, access, swap, and classification operations.
//!
//! ## Design notes
//!
//! * **Fixed length**: A row never grows or shrinks after construction.
//! * **Typed failures**: Out-of-range access returns `DiskSortError`
//!   instead of panicking.
//! * **Value semantics**: Rows are plain owned data; cloning is the only
//!   way to obtain a mutable working copy of an input.
//!
//! ## Key concepts
//!
//! * **Alternating row**: every adjacent pair of disks differs in color.
//! * **Sorted row**: all light disks precede all dark disks.
//! * **Adjacent swap**: the only mutation, exchanging a disk with its right
//!   neighbor.
//!
//! ## Invariants
//!
//! * Length is always `2 * light_count` and therefore even and nonzero.
//! * Light and dark counts are equal by construction and preserved by swaps.
//! * Valid indices are exactly `0..total_count()`.
//!
//! ## Non-goals
//!
//! * This module does not implement the sorting algorithms.
//! * This module does not validate sorting preconditions (engine's job).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter};

// Internal dependencies
use crate::primitives::errors::DiskSortError;

// ============================================================================
// Disk Color
// ============================================================================

/// Color of a single disk in the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiskColor {
    /// Light disk, rendered as `L`.
    Light,

    /// Dark disk, rendered as `D`.
    Dark,
}

impl DiskColor {
    /// Return the other color.
    #[inline]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Single-letter rendering code.
    #[inline]
    pub fn code(self) -> char {
        match self {
            Self::Light => 'L',
            Self::Dark => 'D',
        }
    }
}

impl Display for DiskColor {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Disk Row
// ============================================================================

/// Ordered, fixed-length sequence of two-colored disks.
///
/// Constructed in strict alternating order (`L D L D ...`) with an equal
/// count of each color. Equality is element-wise and position-sensitive;
/// rows of differing length compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiskRow {
    colors: Vec<DiskColor>,
}

impl DiskRow {
    // ========================================================================
    // Construction
    // ========================================================================

    /// Build a row of `2 * light_count` disks in alternating order, starting
    /// with a light disk at index 0.
    ///
    /// Fails with `ZeroLightCount` when `light_count` is zero.
    pub fn new(light_count: usize) -> Result<Self, DiskSortError> {
        if light_count == 0 {
            return Err(DiskSortError::ZeroLightCount);
        }

        let colors = (0..light_count * 2)
            .map(|i| {
                if i % 2 == 0 {
                    DiskColor::Light
                } else {
                    DiskColor::Dark
                }
            })
            .collect();

        Ok(Self { colors })
    }

    // ========================================================================
    // Counts and Indexing
    // ========================================================================

    /// Total number of disks in the row.
    #[inline]
    pub fn total_count(&self) -> usize {
        self.colors.len()
    }

    /// Number of dark disks, `total_count() / 2` by construction.
    #[inline]
    pub fn dark_count(&self) -> usize {
        self.total_count() / 2
    }

    /// Number of light disks, equal to the dark count.
    #[inline]
    pub fn light_count(&self) -> usize {
        self.dark_count()
    }

    /// Check whether `index` addresses a disk in the row.
    #[inline]
    pub fn is_index(&self, index: usize) -> bool {
        index < self.total_count()
    }

    /// Color of the disk at `index`.
    pub fn get(&self, index: usize) -> Result<DiskColor, DiskSortError> {
        if !self.is_index(index) {
            return Err(DiskSortError::IndexOutOfRange {
                index,
                len: self.total_count(),
            });
        }
        Ok(self.colors[index])
    }

    // ========================================================================
    // Mutation
    // ========================================================================

    /// Exchange the disks at `left_index` and `left_index + 1`.
    ///
    /// Fails with `SwapOutOfRange` when either partner lies outside the row;
    /// in particular `left_index == total_count() - 1` fails because the
    /// right partner would be out of range.
    pub fn swap(&mut self, left_index: usize) -> Result<(), DiskSortError> {
        let len = self.total_count();
        if left_index >= len.saturating_sub(1) {
            return Err(DiskSortError::SwapOutOfRange { left_index, len });
        }
        self.colors.swap(left_index, left_index + 1);
        Ok(())
    }

    // ========================================================================
    // Classification
    // ========================================================================

    /// True iff every adjacent pair of disks differs in color.
    ///
    /// Returns false at the first matching pair; vacuously true when the row
    /// has no adjacent pairs.
    pub fn is_alternating(&self) -> bool {
        self.colors.windows(2).all(|pair| pair[0] != pair[1])
    }

    /// True iff the first half is all light and the second half is all dark.
    pub fn is_sorted(&self) -> bool {
        let half = self.total_count() / 2;
        self.colors[..half].iter().all(|&c| c == DiskColor::Light)
            && self.colors[half..].iter().all(|&c| c == DiskColor::Dark)
    }

    // ========================================================================
    // Crate-Internal Access
    // ========================================================================

    // Unchecked accessors for the sweep loops, whose bounds make the index
    // checks redundant.

    #[inline]
    pub(crate) fn color_at(&self, index: usize) -> DiskColor {
        debug_assert!(self.is_index(index), "color_at: index out of bounds");
        self.colors[index]
    }

    #[inline]
    pub(crate) fn exchange(&mut self, left_index: usize) {
        debug_assert!(
            left_index + 1 < self.total_count(),
            "exchange: right partner out of bounds"
        );
        self.colors.swap(left_index, left_index + 1);
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for DiskRow {
    /// Render the row as space-separated single-letter codes, e.g. `L D L D`.
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for (i, color) in self.colors.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{color}")?;
        }
        Ok(())
    }
}
