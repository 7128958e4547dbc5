//! High-level API for descending sorts.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: a [`MaxSorter`] handle
//! that owns a reusable scratch workspace, and free convenience functions
//! that allocate a fresh workspace per call.
//!
//! ## Design notes
//!
//! * **Ergonomic**: The common case (`sort_descending(&mut data)`) is one
//!   call with no setup and no failure path.
//! * **Recycling**: `MaxSorter` keeps scratch memory alive between calls for
//!   hot loops that sort many sequences.
//! * **Explicit counts**: The `_prefix` variants take the element count the
//!   caller wants sorted and validate it against the slice, failing fast
//!   instead of reading out of bounds.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::selection::extract_descending;
use crate::engine::executor::sort_prefix_with;
use crate::primitives::buffer::SortBuffer;

// Publicly re-exported types
pub use crate::primitives::errors::SortError;

// ============================================================================
// MaxSorter
// ============================================================================

/// Sorter handle owning a reusable scratch workspace.
///
/// Sorting requires auxiliary storage proportional to the sequence length.
/// A `MaxSorter` allocates that storage once, grows it on demand, and
/// recycles it across calls.
///
/// # Example
///
/// ```rust
/// use maxsort::prelude::*;
///
/// let mut sorter = MaxSorter::new();
/// let mut data = [5, 5, 3];
///
/// sorter.sort(&mut data)?;
/// assert_eq!(data, [5, 5, 3]);
/// # Result::<(), SortError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct MaxSorter<T> {
    buffer: SortBuffer<T>,
}

impl<T: PrimInt> MaxSorter<T> {
    /// Create a sorter with an empty workspace.
    pub fn new() -> Self {
        Self {
            buffer: SortBuffer::new(),
        }
    }

    /// Create a sorter pre-sized for sequences of up to `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: SortBuffer::with_capacity(capacity),
        }
    }

    /// Sort the whole slice into non-increasing order, in place.
    ///
    /// The length contract cannot be violated here, so the only observable
    /// outcome is `Ok(())` with the slice sorted.
    pub fn sort(&mut self, data: &mut [T]) -> Result<(), SortError> {
        let n = data.len();
        sort_prefix_with(data, n, &mut self.buffer)
    }

    /// Sort the first `n` elements into non-increasing order, in place.
    ///
    /// Elements at or beyond `n` are untouched. Fails with
    /// [`SortError::LengthOutOfBounds`] when `n` exceeds the slice length,
    /// leaving the slice unmodified.
    pub fn sort_prefix(&mut self, data: &mut [T], n: usize) -> Result<(), SortError> {
        sort_prefix_with(data, n, &mut self.buffer)
    }
}

impl<T> Default for MaxSorter<T> {
    fn default() -> Self {
        Self {
            buffer: SortBuffer::new(),
        }
    }
}

// ============================================================================
// Convenience Functions
// ============================================================================

/// Sort a slice into non-increasing order, in place.
///
/// Allocates a scratch workspace sized to the slice for the duration of the
/// call. Use a [`MaxSorter`] to amortize that allocation across many sorts.
///
/// # Example
///
/// ```rust
/// use maxsort::prelude::*;
///
/// let mut data = [4, 1, 7, 3, 7];
/// sort_descending(&mut data);
/// assert_eq!(data, [7, 7, 4, 3, 1]);
/// ```
pub fn sort_descending<T: PrimInt>(data: &mut [T]) {
    let mut buffer = SortBuffer::with_capacity(data.len());

    // The whole slice participates, so the length contract holds by
    // construction and no validation is needed.
    extract_descending(data, &mut buffer);
    data.copy_from_slice(&buffer.scratch);
}

/// Sort the first `n` elements of a slice into non-increasing order, in
/// place.
///
/// Allocates a scratch workspace sized to `n` for the duration of the call.
/// Fails with [`SortError::LengthOutOfBounds`] when `n` exceeds the slice
/// length, leaving the slice unmodified.
pub fn sort_descending_prefix<T: PrimInt>(data: &mut [T], n: usize) -> Result<(), SortError> {
    let mut buffer = SortBuffer::with_capacity(n.min(data.len()));
    sort_prefix_with(data, n, &mut buffer)
}
