//! Tests for the prelude module.
//!
//! These tests verify that the prelude exports everything needed for
//! convenient usage: the row and outcome types, the error type, the free
//! sort functions, and unqualified enum variants.
//!
//! ## Test Organization
//!
//! 1. **Import Verification** - all prelude exports are accessible
//! 2. **Complete Workflow** - end-to-end usage with prelude imports only

use disksort::prelude::*;

// ============================================================================
// Import Verification Tests
// ============================================================================

/// Test that color variants are usable unqualified.
#[test]
fn test_prelude_color_variants() {
    let row = DiskRow::new(1).unwrap();

    assert_eq!(row.get(0).unwrap(), Light);
    assert_eq!(row.get(1).unwrap(), Dark);
}

/// Test that strategy variants are usable unqualified.
#[test]
fn test_prelude_strategy_variants() {
    let _ = DiskSort::new().strategy(LeftToRight);
    let _ = DiskSort::new().strategy(Lawnmower);
}

/// Test that the free sort functions are exported.
#[test]
fn test_prelude_free_functions() {
    let row = DiskRow::new(2).unwrap();

    assert!(sort_left_to_right(&row).is_ok());
    assert!(sort_lawnmower(&row).is_ok());
}

// ============================================================================
// Complete Workflow Tests
// ============================================================================

/// Test a complete workflow with only prelude imports.
#[test]
fn test_prelude_complete_workflow() {
    let row = DiskRow::new(4).unwrap();

    let sorted: SortedRow = DiskSort::new()
        .strategy(Lawnmower)
        .build()
        .expect("Builder with a single strategy should build")
        .sort(&row)
        .expect("Alternating input should sort");

    assert!(sorted.after().is_sorted());
    assert_eq!(sorted.swap_count(), 6);

    let err: DiskSortError = DiskRow::new(0).unwrap_err();
    assert_eq!(err, DiskSortError::ZeroLightCount);
}
