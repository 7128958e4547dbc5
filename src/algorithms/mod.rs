//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer implements the core sorting kernel: repeated selection of the
//! maximum remaining value. It depends only on the primitives layer.
//!
//! # Architecture
//!
//! ```text
//! API
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Maximum-extraction kernel.
pub mod selection;
