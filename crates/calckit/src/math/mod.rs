//! Layer 3: Math
//!
//! # Purpose
//!
//! This layer provides the scalar operations of the calculator:
//! - Validated binary arithmetic
//! - Factorial with a bounded argument
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Algorithms
//!   ↓
//! Layer 3: Math ← You are here
//!   ↓
//! Layer 2: Engine
//!   ↓
//! Layer 1: Primitives
//! ```

/// Addition, subtraction, multiplication and division.
pub mod arithmetic;

/// Factorial in iterative and recursive forms.
pub mod factorial;
