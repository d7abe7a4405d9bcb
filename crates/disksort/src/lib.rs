//! # disksort: the alternating disks problem in Rust
//!
//! Deterministic sorting of a fixed-size row of two-colored disks with two
//! classic algorithms: a left-to-right bubble pass and a bidirectional
//! "lawnmower" pass.
//!
//! ## What is the alternating disks problem?
//!
//! A row of `2n` disks alternates between light and dark (`L D L D ...`).
//! The task is to move every light disk to the left half and every dark
//! disk to the right half using only adjacent swaps, counting the swaps
//! performed. Both algorithms here resolve exactly the
//! `n * (n - 1) / 2` dark/light inversions of the starting position; they
//! differ only in how many passes over the row they need.
//!
//! ## Quick Start
//!
//! ```rust
//! use disksort::prelude::*;
//!
//! let row = DiskRow::new(3)?;
//! assert_eq!(row.to_string(), "L D L D L D");
//! assert!(row.is_alternating());
//!
//! let sorted = sort_left_to_right(&row)?;
//! assert_eq!(sorted.after().to_string(), "L L L D D D");
//! assert_eq!(sorted.swap_count(), 3);
//!
//! // The input row is never modified.
//! assert_eq!(row.to_string(), "L D L D L D");
//! # Result::<(), DiskSortError>::Ok(())
//! ```
//!
//! ### Configured sorter
//!
//! ```rust
//! use disksort::prelude::*;
//!
//! let sorter = DiskSort::new().strategy(Lawnmower).build()?;
//!
//! let small = DiskRow::new(1)?;
//! let large = DiskRow::new(64)?;
//!
//! assert_eq!(sorter.sort(&small)?.swap_count(), 0);
//! assert!(sorter.sort(&large)?.after().is_sorted());
//! # Result::<(), DiskSortError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every fallible operation returns `Result<_, DiskSortError>`. Violating
//! a precondition (constructing an empty row, indexing past the end, or
//! sorting a non-alternating row) is a caller-side programming error and
//! surfaces as a typed error rather than a panic:
//!
//! ```rust
//! use disksort::prelude::*;
//!
//! assert_eq!(DiskRow::new(0), Err(DiskSortError::ZeroLightCount));
//!
//! let mut row = DiskRow::new(2)?;
//! // The last index has no right neighbor to swap with.
//! assert!(row.swap(row.total_count() - 1).is_err());
//! # Result::<(), DiskSortError>::Ok(())
//! ```
//!
//! ## no_std
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! disksort = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - disk row data structures and shared errors.
mod primitives;

// Layer 2: Algorithms - the two sorting passes.
mod algorithms;

// Layer 3: Engine - validation, execution, and output packaging.
mod engine;

// High-level API: free sort functions and the fluent builder.
mod api;

// Standard disksort prelude.
pub mod prelude {
    pub use crate::api::{
        DiskColor,
        DiskColor::{Dark, Light},
        DiskRow, DiskSortBuilder as DiskSort, DiskSortError, DiskSorter, SortStrategy,
        SortStrategy::{Lawnmower, LeftToRight},
        SortedRow, sort_lawnmower, sort_left_to_right,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
