//! Execution engine for descending sorts.
//!
//! ## Purpose
//!
//! This module coordinates the full sorting operation: validate the element
//! count against the sequence, run the maximum-extraction kernel into the
//! scratch workspace, then copy the scratch back over the participating
//! prefix of the sequence.
//!
//! ## Design notes
//!
//! * **All-or-nothing**: Validation precedes every mutation. On error the
//!   sequence is returned exactly as it was.
//! * **Borrowed workspace**: The caller supplies the [`SortBuffer`], so
//!   repeated sorts recycle one allocation.
//! * **Prefix semantics**: Only the first `n` elements participate; the
//!   remainder of the slice is never read or written.
//!
//! ## Invariants
//!
//! * After a successful call, `data[i] >= data[i + 1]` for all `i + 1 < n`.
//! * Positions `[0, n)` hold a permutation of their prior contents.
//! * Positions at or beyond `n` are untouched.
//!
//! ## Non-goals
//!
//! * This module does not allocate on the caller's behalf (the API layer
//!   offers convenience wrappers that do).
//! * This module does not sort in ascending order.

// External dependencies
use num_traits::PrimInt;

// Internal dependencies
use crate::algorithms::selection::extract_descending;
use crate::engine::validator::Validator;
use crate::primitives::buffer::SortBuffer;
use crate::primitives::errors::SortError;

/// Sort the first `n` elements of `data` into non-increasing order.
///
/// The scratch workspace is prepared for `n` elements, filled by the
/// extraction kernel, and copied back over `data[..n]`. Fails with
/// [`SortError::LengthOutOfBounds`] when `n` exceeds the slice length, in
/// which case `data` is left unmodified.
pub fn sort_prefix_with<T: PrimInt>(
    data: &mut [T],
    n: usize,
    buffer: &mut SortBuffer<T>,
) -> Result<(), SortError> {
    Validator::validate_count(n, data.len())?;

    let prefix = &mut data[..n];
    extract_descending(prefix, buffer);
    prefix.copy_from_slice(&buffer.scratch);

    Ok(())
}
