//! Scratch workspace management for sorting operations.
//!
//! ## Purpose
//!
//! This module provides a reusable workspace holding the two auxiliary
//! sequences a sort needs: the scratch sequence that accumulates extracted
//! maxima in output order, and the consumed mask marking which source
//! positions have already been extracted. Allocating both once and recycling
//! them across calls keeps repeated sorts allocation-free after warm-up.
//!
//! ## Design notes
//!
//! * **Centralized Ownership**: The buffer owns all scratch space a sort
//!   requires; callers pass it in mutably for the duration of one call.
//! * **Lazy Expansion**: Capacity grows on demand in [`SortBuffer::prepare`]
//!   but is never shrunk, stabilizing at the largest sequence seen.
//! * **Logical Clearing**: Between calls the vectors are cleared, not
//!   deallocated.
//!
//! ## Invariants
//!
//! * After `prepare(n)`, `consumed` has length `n` with every entry `false`,
//!   and `scratch` is empty with capacity at least `n`.
//! * Capacity is monotonically increasing across calls.
//!
//! ## Non-goals
//!
//! * Thread-local automatic caching (buffers are explicitly passed; use one
//!   buffer per thread for parallel callers).
//! * Dynamic shrinking or aggressive memory reclamation.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// SortBuffer
// ============================================================================

/// Reusable workspace for a descending sort.
#[derive(Debug, Clone)]
pub struct SortBuffer<T> {
    /// Extracted maxima, in output (non-increasing) order.
    pub scratch: Vec<T>,

    /// `consumed[j]` is `true` once source position `j` has been extracted.
    pub consumed: Vec<bool>,
}

impl<T> SortBuffer<T> {
    /// Create an empty workspace.
    pub fn new() -> Self {
        Self {
            scratch: Vec::new(),
            consumed: Vec::new(),
        }
    }

    /// Create a workspace pre-sized for sequences of up to `capacity`
    /// elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            scratch: Vec::with_capacity(capacity),
            consumed: Vec::with_capacity(capacity),
        }
    }

    /// Ready the workspace for a sort of `n` elements.
    ///
    /// Clears the scratch sequence and resets the consumed mask to `n`
    /// `false` entries. Only reallocates if the current capacity is
    /// insufficient.
    pub fn prepare(&mut self, n: usize) {
        self.scratch.clear();
        self.scratch.reserve(n);

        self.consumed.clear();
        self.consumed.resize(n, false);
    }

    /// Largest element count this workspace can serve without reallocating.
    pub fn capacity(&self) -> usize {
        self.scratch.capacity().min(self.consumed.capacity())
    }
}

impl<T> Default for SortBuffer<T> {
    fn default() -> Self {
        Self::new()
    }
}
