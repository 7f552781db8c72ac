//! Layer 2: Engine
//!
//! # Purpose
//!
//! This layer turns loosely typed inputs into validated numbers and hosts
//! the measurement helper used when comparing implementations.
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
//! Layer 2: Engine ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Validation utilities.
pub mod validator;

/// Wall-clock timing helper.
#[cfg(feature = "std")]
pub mod timing;
