//! Error types for calculator operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions reported by every validated
//! operation: malformed input, division by zero, and arguments outside an
//! operation's mathematical domain.
//!
//! ## Design notes
//!
//! * **Contextual**: Messages name the offending parameter or index.
//! * **Nestable**: Outer operations prefix an index to an inner message
//!   without repeating the variant label.
//! * **No-std**: Uses `alloc` for dynamic messages when `std` is disabled.
//!
//! ## Key concepts
//!
//! 1. **Invalid input**: Non-numeric values, empty lists, bad policy names,
//!    non-integral or oversized factorial arguments.
//! 2. **Division by zero**: The validated divisor equals zero.
//! 3. **Domain errors**: Negative factorial arguments.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or fallback strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String};
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for calculator operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// Input failed validation; the message names the field or index.
    InvalidInput(String),

    /// The validated divisor equals zero.
    DivisionByZero,

    /// Argument lies outside the operation's domain (e.g. negative factorial).
    DomainError(String),
}

impl CalcError {
    /// Build an `InvalidInput` error from any displayable message.
    pub fn invalid(msg: impl Display) -> Self {
        Self::InvalidInput(format!("{msg}"))
    }

    /// Build a `DomainError` from any displayable message.
    pub fn domain(msg: impl Display) -> Self {
        Self::DomainError(format!("{msg}"))
    }

    /// Bare message text without the variant label.
    pub fn message(&self) -> &str {
        match self {
            Self::InvalidInput(msg) | Self::DomainError(msg) => msg,
            Self::DivisionByZero => "Division by zero is not allowed",
        }
    }

    /// Re-raise as `InvalidInput`, prefixing the inner message with `context`.
    ///
    /// Used when a batch or element-wise operation reports which entry failed.
    pub fn annotate(self, context: impl Display) -> Self {
        Self::InvalidInput(format!("{context}: {}", self.message()))
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for CalcError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::DivisionByZero => write!(f, "Division by zero is not allowed"),
            Self::DomainError(msg) => write!(f, "Domain error: {msg}"),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for CalcError {}
