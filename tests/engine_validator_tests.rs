#![cfg(feature = "dev")]
//! Tests for input validation.
//!
//! These tests verify the length contract between the requested element
//! count and the sequence's actual storage:
//! - Counts within bounds pass
//! - Counts beyond bounds fail with contextual lengths
//! - Boundary counts (zero, exact length) are valid
//!
//! ## Test Organization
//!
//! 1. **Accepting Counts** - valid count/length combinations
//! 2. **Rejecting Counts** - out-of-bounds combinations
//! 3. **Error Reporting** - Display formatting and context fields

use maxsort::internals::engine::validator::Validator;
use maxsort::internals::primitives::errors::SortError;

// ============================================================================
// Accepting Count Tests
// ============================================================================

/// Test a count strictly below the length.
///
/// Verifies partial participation validates.
#[test]
fn test_validate_count_within_bounds() {
    assert!(Validator::validate_count(3, 5).is_ok());
}

/// Test a count equal to the length.
///
/// Verifies full participation validates.
#[test]
fn test_validate_count_exact() {
    assert!(Validator::validate_count(5, 5).is_ok());
}

/// Test a zero count.
///
/// Verifies sorting nothing is always valid, even over empty storage.
#[test]
fn test_validate_count_zero() {
    assert!(Validator::validate_count(0, 5).is_ok());
    assert!(Validator::validate_count(0, 0).is_ok());
}

// ============================================================================
// Rejecting Count Tests
// ============================================================================

/// Test a count one past the length.
///
/// Verifies the off-by-one boundary is rejected.
#[test]
fn test_validate_count_one_past_end() {
    let err = Validator::validate_count(6, 5).unwrap_err();

    assert_eq!(
        err,
        SortError::LengthOutOfBounds {
            requested: 6,
            available: 5,
        }
    );
}

/// Test a nonzero count over empty storage.
///
/// Verifies the empty sequence rejects any positive count.
#[test]
fn test_validate_count_nonzero_over_empty() {
    let err = Validator::validate_count(1, 0).unwrap_err();

    assert_eq!(
        err,
        SortError::LengthOutOfBounds {
            requested: 1,
            available: 0,
        }
    );
}

// ============================================================================
// Error Reporting Tests
// ============================================================================

/// Test the error's Display output.
///
/// Verifies both lengths appear in the rendered message.
#[test]
fn test_length_error_display() {
    let err = SortError::LengthOutOfBounds {
        requested: 9,
        available: 4,
    };

    let rendered = err.to_string();
    assert!(rendered.contains('9'), "message should name the request: {rendered}");
    assert!(rendered.contains('4'), "message should name the storage: {rendered}");
}

/// Test the error implements the standard Error trait.
///
/// Verifies it can be boxed and propagated like any other error.
#[test]
fn test_length_error_is_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(SortError::LengthOutOfBounds {
        requested: 2,
        available: 1,
    });

    assert!(err.to_string().starts_with("Length out of bounds"));
}
