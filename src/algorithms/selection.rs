//! Selection by repeated maximum-extraction.
//!
//! ## Purpose
//!
//! This module implements the sorting kernel: for each output position, scan
//! every not-yet-consumed source position for the largest value, record that
//! value into the scratch sequence, and mark its source position consumed.
//! After as many passes as there are elements, the scratch holds the input's
//! values in non-increasing order.
//!
//! ## Design notes
//!
//! * **Explicit consumption**: A parallel boolean mask tracks which positions
//!   have been extracted. Earlier formulations of this routine overwrote the
//!   selected position with `0` instead, which confuses a consumed slot with
//!   a legitimate zero and makes negative inputs sort incorrectly; the mask
//!   handles every integer value.
//! * **First-max tie-break**: The scan compares with strict `>`, so among
//!   equal maxima the lowest index encountered left-to-right wins.
//! * **No shortcuts**: Every pass scans the full window. There is no early
//!   termination and no detection of already-sorted runs.
//!
//! ## Invariants
//!
//! * Each pass consumes exactly one position; after `n` passes the mask is
//!   all-`true` and the scratch holds a permutation of the input.
//! * Scratch entries are non-increasing in the order they are appended.
//!
//! ## Non-goals
//!
//! * This module does not validate lengths (handled by the engine).
//! * This module does not copy results back into the input sequence.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::primitives::buffer::SortBuffer;

/// Find the position of the largest unconsumed value in `values`.
///
/// Scans left to right with a strict comparison, so the earliest occurrence
/// of the maximum is selected. Returns `None` once every position is
/// consumed.
#[inline]
pub fn select_max<T: PrimInt>(values: &[T], consumed: &[bool]) -> Option<usize> {
    debug_assert_eq!(
        values.len(),
        consumed.len(),
        "select_max: mask must cover the sequence"
    );

    let mut best: Option<usize> = None;

    for j in 0..values.len() {
        if consumed[j] {
            continue;
        }

        match best {
            Some(b) if values[j] <= values[b] => {}
            _ => best = Some(j),
        }
    }

    best
}

/// Fill `buffer.scratch` with the values of `values` in non-increasing order.
///
/// Runs one [`select_max`] pass per element, marking each selected position
/// in the consumed mask. The input sequence is not modified; the caller is
/// responsible for copying the scratch back if an in-place result is wanted.
pub fn extract_descending<T: PrimInt>(values: &[T], buffer: &mut SortBuffer<T>) {
    let n = values.len();
    buffer.prepare(n);

    for _ in 0..n {
        // One position is consumed per pass, so a candidate always remains.
        if let Some(max) = select_max(values, &buffer.consumed) {
            buffer.scratch.push(values[max]);
            buffer.consumed[max] = true;
        }
    }

    debug_assert_eq!(buffer.scratch.len(), n, "extract_descending: short fill");
}
