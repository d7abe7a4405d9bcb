//! Left-to-right bubble pass over a disk row.
//!
//! ## Purpose
//!
//! This module implements the single-direction sorting algorithm for the
//! alternating disks problem: a classic adjacent-transposition bubble pass
//! biased to move dark disks rightward.
//!
//! ## Design notes
//!
//! * **Shrinking bound**: After pass `i`, the `i` darkest disks occupy the
//!   tail, so the inner scan stops at `n - i - 1`.
//! * **Raw compute**: The sweep assumes its input is valid; the alternation
//!   precondition is checked by the engine, not here.
//!
//! ## Invariants
//!
//! * Each swap moves exactly one dark disk one position to the right, past
//!   a light disk.
//! * The color multiset of the row is preserved.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by the engine validator).
//! * This module does not clone the row (caller owns the working copy).

// Internal dependencies
use crate::primitives::row::{DiskColor, DiskRow};

// ============================================================================
// Bubble Pass
// ============================================================================

/// Sort `row` in place with `n - 1` left-to-right bubble passes, moving
/// dark disks rightward. Returns the number of swaps performed.
pub fn run(row: &mut DiskRow) -> usize {
    let n = row.total_count();
    let mut swap_count = 0;

    for pass in 0..n.saturating_sub(1) {
        // The last `pass` disks are already in final position.
        for j in 0..n - pass - 1 {
            if row.color_at(j) == DiskColor::Dark && row.color_at(j + 1) == DiskColor::Light {
                row.exchange(j);
                swap_count += 1;
            }
        }
    }

    swap_count
}
