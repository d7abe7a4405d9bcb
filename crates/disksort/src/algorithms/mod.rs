//! Layer 2: Algorithms
//!
//! This layer implements the two sorting passes for the alternating disks
//! problem. It contains the raw sweep logic but is orchestrated by the
//! engine layer, which owns validation and result packaging.

// Single-direction bubble pass.
pub mod left_to_right;

// Bidirectional bubble pass.
pub mod lawnmower;

// ============================================================================
// Sort Strategy
// ============================================================================

/// Sorting algorithm selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortStrategy {
    /// Left-to-right bubble pass - default.
    ///
    /// `n - 1` forward passes with a shrinking inner scan. Simple and
    /// cache-friendly; performs one directional correction per pass.
    #[default]
    LeftToRight,

    /// Bidirectional "lawnmower" pass.
    ///
    /// `(n - 1) / 2` passes, each sweeping forward then backward. Needs
    /// half as many outer passes at the cost of two inner scans per pass.
    Lawnmower,
}
