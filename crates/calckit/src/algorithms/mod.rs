//! Layer 4: Algorithms
//!
//! # Purpose
//!
//! This layer provides the sequence operations built on validated numbers:
//! - Mean, maximum and batch mean
//! - The sign-based transform with its zero policy
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Algorithms ← You are here
//!   ↓
//! Layer 3: Math
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives
//! ```

/// Mean, maximum and batch mean.
pub mod statistics;

/// Sign-based transform and zero policy.
pub mod transform;
