//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer orchestrates a full sort: it enforces the length contract,
//! drives the extraction kernel, and copies the finished scratch back over
//! the input sequence.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sort orchestration.
pub mod executor;

/// Validation utilities.
pub mod validator;
