//! Input validation for sorting operations.
//!
//! ## Purpose
//!
//! This module enforces the length contract between the caller-supplied
//! element count and the sequence's actual storage. The count describes how
//! many leading elements participate in the sort; nothing ties it to the
//! slice's real length, so it is checked explicitly before any mutation.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation happens once at entry; a violation surfaces
//!   as an error before the sequence is touched.
//! * **Deterministic**: Checks are pure and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not inspect element values; any integer is sortable.
//! * This module does not perform the sort itself.

// Internal dependencies
use crate::primitives::errors::SortError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for sort inputs.
///
/// Provides static methods returning `Result<(), SortError>` that fail fast
/// upon the first violation.
pub struct Validator;

impl Validator {
    /// Validate that a requested element count fits within the sequence.
    ///
    /// A count of zero is valid and sorts nothing.
    pub fn validate_count(requested: usize, available: usize) -> Result<(), SortError> {
        if requested > available {
            return Err(SortError::LengthOutOfBounds {
                requested,
                available,
            });
        }
        Ok(())
    }
}
