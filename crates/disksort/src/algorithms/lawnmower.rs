//! Bidirectional ("lawnmower") pass over a disk row.
//!
//! ## Purpose
//!
//! This module implements the bidirectional sorting algorithm for the
//! alternating disks problem. Each pass sweeps the row forward moving dark
//! disks rightward, then backward moving light disks leftward, which halves
//! the number of full passes needed versus the single-direction variant.
//!
//! ## Design notes
//!
//! * **Pass budget**: `(n - 1) / 2` full passes suffice for an alternating
//!   input row; each pass performs both a forward and a backward correction.
//! * **Raw compute**: The sweep assumes its input is valid; the alternation
//!   precondition is checked by the engine, not here.
//!
//! ## Invariants
//!
//! * Forward sweeps only swap a dark disk past a light right neighbor;
//!   backward sweeps only swap a light disk past a dark left neighbor.
//! * The color multiset of the row is preserved.
//!
//! ## Non-goals
//!
//! * This module does not validate input (handled by the engine validator).
//! * This module does not clone the row (caller owns the working copy).

// Internal dependencies
use crate::primitives::row::{DiskColor, DiskRow};

// ============================================================================
// Lawnmower Pass
// ============================================================================

/// Sort `row` in place with `(n - 1) / 2` bidirectional passes. Returns the
/// number of swaps performed.
pub fn run(row: &mut DiskRow) -> usize {
    let n = row.total_count();
    let mut swap_count = 0;

    for _pass in 0..n.saturating_sub(1) / 2 {
        // Forward sweep: bubble dark disks toward the right end.
        for i in 0..n - 1 {
            if row.color_at(i) == DiskColor::Dark && row.color_at(i + 1) == DiskColor::Light {
                row.exchange(i);
                swap_count += 1;
            }
        }

        // Backward sweep: bubble light disks toward the left end.
        for i in (1..n).rev() {
            if row.color_at(i) == DiskColor::Light && row.color_at(i - 1) == DiskColor::Dark {
                row.exchange(i - 1);
                swap_count += 1;
            }
        }
    }

    swap_count
}
