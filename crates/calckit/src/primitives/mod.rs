//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the value types and the error type used throughout
//! the crate. It has zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Math
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types.
pub mod errors;

/// Validated numeric values.
pub mod number;

/// Loosely typed input values.
pub mod input;
