//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the shared error types and the reusable scratch
//! workspace used throughout the crate. It has zero internal dependencies
//! within the crate.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Scratch workspace management.
pub mod buffer;
