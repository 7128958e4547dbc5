//! # maxsort — descending sort by repeated maximum-extraction
//!
//! A small, allocation-light implementation of selection sort for integer
//! sequences, ordering values from largest to smallest. For each output
//! position the remaining candidates are scanned for the current maximum,
//! which is then marked as consumed and appended to a scratch sequence;
//! once every position is filled the scratch is copied back over the input.
//!
//! The strategy is deliberately the straightforward O(n²) one: no early
//! termination, no detection of already-sorted runs. It exists for workloads
//! where the sequence is short, the code must be auditable, and the memory
//! behavior must be exactly predictable (one scratch buffer, one mask, both
//! reusable across calls).
//!
//! ## Quick Start
//!
//! ```rust
//! use maxsort::prelude::*;
//!
//! let mut data = [4, 1, 7, 3, 7];
//! sort_descending(&mut data);
//!
//! assert_eq!(data, [7, 7, 4, 3, 1]);
//! ```
//!
//! ## Reusing scratch memory
//!
//! Sorting allocates a scratch sequence and a consumed mask, both the same
//! length as the input. When sorting many sequences, hold a [`MaxSorter`] so
//! the workspace is allocated once and recycled:
//!
//! ```rust
//! use maxsort::prelude::*;
//!
//! let mut sorter = MaxSorter::with_capacity(8);
//!
//! let mut a = [3_i64, -1, 0, 2];
//! let mut b = [10_i64, 20];
//!
//! sorter.sort(&mut a)?;
//! sorter.sort(&mut b)?;
//!
//! assert_eq!(a, [3, 2, 0, -1]);
//! assert_eq!(b, [20, 10]);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Sorting a prefix
//!
//! The original formulation of this routine takes an explicit element count
//! alongside the sequence. That surface survives as [`MaxSorter::sort_prefix`]
//! and [`sort_descending_prefix`]: only the first `n` elements participate,
//! the rest of the slice is left untouched. A count larger than the slice
//! fails fast with [`SortError::LengthOutOfBounds`] before anything is
//! mutated:
//!
//! ```rust
//! use maxsort::prelude::*;
//!
//! let mut data = [2, 9, 4, 100, 200];
//! sort_descending_prefix(&mut data, 3)?;
//! assert_eq!(data, [9, 4, 2, 100, 200]);
//!
//! let err = sort_descending_prefix(&mut data, 6).unwrap_err();
//! assert_eq!(
//!     err,
//!     SortError::LengthOutOfBounds {
//!         requested: 6,
//!         available: 5,
//!     }
//! );
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency (`alloc` is still required for the
//! scratch workspace):
//!
//! ```toml
//! [dependencies]
//! maxsort = { version = "0.1", default-features = false }
//! ```
//!
//! ## Notes on history
//!
//! The routine this crate descends from was named "bubblesort" despite
//! implementing selection by repeated maximum-extraction, and marked consumed
//! positions by overwriting them with `0` — which silently miscomputes
//! whenever the input contains negative numbers or legitimate zeros. This
//! implementation names the algorithm for what it does and tracks consumption
//! with an explicit mask, so every integer value sorts correctly.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types and the reusable scratch workspace.
mod primitives;

// Layer 2: Algorithms - the maximum-extraction kernel.
mod algorithms;

// Layer 3: Engine - validation and orchestration of a full sort.
mod engine;

// High-level API for descending sorts.
mod api;

// Standard maxsort prelude.
pub mod prelude {
    pub use crate::api::{MaxSorter, SortError, sort_descending, sort_descending_prefix};
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
