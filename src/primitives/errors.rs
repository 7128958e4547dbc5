//! Error types for sorting operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur when sorting a
//! sequence, currently limited to violations of the length contract between
//! the requested element count and the sequence's actual storage.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (requested vs. available
//!   lengths) so callers can diagnose the violation without re-deriving it.
//! * **Fail-Fast**: Every error is raised before the input is mutated; a
//!   failed call leaves the sequence exactly as it was.
//! * **No-std**: Supports `no_std` environments; `std::error::Error` is only
//!   implemented when the `std` feature is enabled.
//!
//! ## Invariants
//!
//! * All variants provide sufficient context for diagnosis.
//! * Numeric values in errors use the same types as the public API.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(feature = "std")]
use std::error::Error;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The requested element count exceeds the sequence's actual length.
    LengthOutOfBounds {
        /// Number of elements the caller asked to sort.
        requested: usize,
        /// Number of elements the sequence actually holds.
        available: usize,
    },
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::LengthOutOfBounds {
                requested,
                available,
            } => {
                write!(
                    f,
                    "Length out of bounds: requested {requested} elements, sequence has {available}"
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl Error for SortError {}
