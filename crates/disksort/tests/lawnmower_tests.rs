//! Tests for the lawnmower sorting algorithm.
//!
//! These tests verify the public contract of `sort_lawnmower`: the sorted
//! postcondition, the exact swap count, purity with respect to the input,
//! rejection of non-alternating rows, and agreement with the left-to-right
//! algorithm.
//!
//! ## Test Organization
//!
//! 1. **Concrete Scenarios** - small rows with known outcomes
//! 2. **Postconditions** - sortedness and swap-count law across sizes
//! 3. **Purity** - input left untouched, counts preserved
//! 4. **Preconditions** - non-alternating input rejection
//! 5. **Algorithm Agreement** - identical outcomes to left-to-right

use disksort::prelude::*;

/// Number of dark/light inversions in an alternating row with `k` light
/// disks; both algorithms resolve each inversion with exactly one swap.
fn expected_swaps(light_count: usize) -> usize {
    light_count * (light_count - 1) / 2
}

// ============================================================================
// Concrete Scenario Tests
// ============================================================================

/// Test the three-light reference scenario.
///
/// `L D L D L D` sorts to `L L L D D D` in exactly 3 swaps, the same
/// outcome as the left-to-right algorithm.
#[test]
fn test_three_lights() {
    let row = DiskRow::new(3).unwrap();

    let sorted = sort_lawnmower(&row).unwrap();

    assert_eq!(sorted.after().to_string(), "L L L D D D");
    assert_eq!(sorted.swap_count(), 3);
}

/// Test the smallest row, which is already sorted.
///
/// With two disks the pass budget `(n - 1) / 2` is zero, so the sorter
/// performs no sweeps at all.
#[test]
fn test_one_light_is_noop() {
    let row = DiskRow::new(1).unwrap();

    let sorted = sort_lawnmower(&row).unwrap();

    assert_eq!(sorted.swap_count(), 0);
    assert_eq!(sorted.after(), &row);
}

// ============================================================================
// Postcondition Tests
// ============================================================================

/// Test that the result is sorted for a range of sizes.
///
/// The bidirectional pass budget must be sufficient at every size, not
/// just on even-looking examples.
#[test]
fn test_result_is_sorted() {
    for light_count in 1..=16 {
        let row = DiskRow::new(light_count).unwrap();

        let sorted = sort_lawnmower(&row).unwrap();

        assert!(
            sorted.after().is_sorted(),
            "Row with {light_count} light disks should be sorted, got {}",
            sorted.after()
        );
    }
}

/// Test the analytic swap-count law.
#[test]
fn test_swap_count_law() {
    for light_count in 1..=16 {
        let row = DiskRow::new(light_count).unwrap();

        let sorted = sort_lawnmower(&row).unwrap();

        assert_eq!(
            sorted.swap_count(),
            expected_swaps(light_count),
            "Swap count mismatch for {light_count} light disks"
        );
    }
}

// ============================================================================
// Purity Tests
// ============================================================================

/// Test that the input row is left unmodified.
#[test]
fn test_input_unmodified() {
    let row = DiskRow::new(6).unwrap();
    let snapshot = row.clone();

    let _ = sort_lawnmower(&row).unwrap();

    assert_eq!(row, snapshot, "Sorting must not alias or mutate its input");
}

/// Test that the color multiset is preserved.
#[test]
fn test_counts_preserved() {
    let row = DiskRow::new(9).unwrap();

    let sorted = sort_lawnmower(&row).unwrap();

    assert_eq!(sorted.after().light_count(), row.light_count());
    assert_eq!(sorted.after().dark_count(), row.dark_count());
}

// ============================================================================
// Precondition Tests
// ============================================================================

/// Test that a non-alternating row is rejected.
#[test]
fn test_non_alternating_rejected() {
    let mut row = DiskRow::new(2).unwrap();
    row.swap(1).unwrap();

    assert_eq!(
        sort_lawnmower(&row),
        Err(DiskSortError::NotAlternating { index: 0 })
    );
}

// ============================================================================
// Algorithm Agreement Tests
// ============================================================================

/// Test that both algorithms agree on the final row and swap count.
///
/// The two differ only in pass structure; the set of inversions they
/// resolve is identical.
#[test]
fn test_agrees_with_left_to_right() {
    for light_count in 1..=12 {
        let row = DiskRow::new(light_count).unwrap();

        let bubble = sort_left_to_right(&row).unwrap();
        let lawnmower = sort_lawnmower(&row).unwrap();

        assert_eq!(bubble.after(), lawnmower.after());
        assert_eq!(bubble.swap_count(), lawnmower.swap_count());
    }
}
