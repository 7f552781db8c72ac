//! Input validation for calculator operations.
//!
//! ## Purpose
//!
//! This module resolves loosely typed inputs ([`NumericLike`]) into validated
//! [`Number`]s and checks operation-specific constraints such as the
//! factorial argument range.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Contextual**: Every message names the field, and the index for
//!   sequence elements.
//! * **Text coercion**: Text without a `.` parses as an integer, otherwise as
//!   a float. Surrounding whitespace is ignored.
//!
//! ## Invariants
//!
//! * Native floats pass through unchanged, including NaN and ±inf.
//! * Validation is deterministic and side-effect free (apart from logging).
//!
//! ## Non-goals
//!
//! * This module does not perform any arithmetic.
//! * This module does not correct invalid inputs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::Display;

// Internal dependencies
use crate::primitives::errors::CalcError;
use crate::primitives::input::NumericLike;
use crate::primitives::number::Number;

/// Largest accepted factorial argument.
pub const MAX_FACTORIAL_INPUT: u64 = 1000;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for calculator inputs.
///
/// All methods fail fast and return `CalcError::InvalidInput` (or
/// `DomainError` for out-of-domain factorial arguments).
pub struct Validator;

impl Validator {
    // ========================================================================
    // Scalar Validation
    // ========================================================================

    /// Resolve a single value into a [`Number`].
    ///
    /// `field` only needs to be displayable, so callers can pass lazily
    /// formatted names such as `format_args!("{name}[{i}]")`.
    pub fn validate_number<F>(value: &NumericLike, field: F) -> Result<Number, CalcError>
    where
        F: Display + Copy,
    {
        match value {
            NumericLike::Int(i) => Ok(Number::Int(*i)),
            NumericLike::Float(v) => Ok(Number::Float(*v)),
            NumericLike::Text(text) => Self::parse_text(text, field),
            other => {
                log::debug!("rejected {field}: unsupported type {}", other.type_name());
                Err(CalcError::invalid(format_args!(
                    "Parameter '{field}' must be numeric, got {}",
                    other.type_name()
                )))
            }
        }
    }

    /// Parse numeric text. Integers are tried when no decimal point is present.
    fn parse_text<F: Display>(text: &str, field: F) -> Result<Number, CalcError> {
        let trimmed = text.trim();
        let parsed = if trimmed.contains('.') {
            trimmed.parse::<f64>().ok().map(Number::Float)
        } else {
            trimmed.parse::<i64>().ok().map(Number::Int)
        };

        parsed.ok_or_else(|| {
            log::debug!("rejected {field}: cannot parse {text:?}");
            CalcError::invalid(format_args!(
                "Parameter '{field}' must be numeric, got '{text}'"
            ))
        })
    }

    // ========================================================================
    // Sequence Validation
    // ========================================================================

    /// Resolve every element of a non-empty sequence.
    ///
    /// # Notes
    ///
    /// * Elements are validated under the field name `field[i]`.
    /// * The first failing element aborts validation.
    pub fn validate_numeric_sequence<I>(values: I, field: &str) -> Result<Vec<Number>, CalcError>
    where
        I: IntoIterator,
        I::Item: Into<NumericLike>,
    {
        let iter = values.into_iter();
        let mut validated = Vec::with_capacity(iter.size_hint().0);

        for (i, item) in iter.enumerate() {
            let item: NumericLike = item.into();
            let number = Self::validate_number(&item, format_args!("{field}[{i}]"))
                .map_err(|e| e.annotate(format_args!("Invalid item at index {i} in {field}")))?;
            validated.push(number);
        }

        if validated.is_empty() {
            log::debug!("rejected {field}: empty list");
            return Err(CalcError::invalid(format_args!(
                "Parameter '{field}' cannot be an empty list"
            )));
        }

        Ok(validated)
    }

    /// Validate a single dynamically typed value that must hold a list.
    pub fn validate_sequence_value(
        value: &NumericLike,
        field: &str,
    ) -> Result<Vec<Number>, CalcError> {
        match value {
            NumericLike::List(items) => Self::validate_numeric_sequence(items, field),
            other => {
                log::debug!("rejected {field}: expected list, got {}", other.type_name());
                Err(CalcError::invalid(format_args!(
                    "Parameter '{field}' must be a list, got {}",
                    other.type_name()
                )))
            }
        }
    }

    // ========================================================================
    // Factorial Validation
    // ========================================================================

    /// Check a factorial argument and return it as an unsigned integer.
    ///
    /// # Notes
    ///
    /// * Checks run in order: integrality, sign, then the `limit` cap.
    /// * Integral floats such as `5.0` are accepted.
    pub fn validate_factorial_arg(n: Number, limit: u64) -> Result<u64, CalcError> {
        if !n.is_integral() {
            return Err(CalcError::invalid("Factorial is only defined for integers"));
        }

        if n.is_negative() {
            return Err(CalcError::domain(
                "Factorial is not defined for negative numbers",
            ));
        }

        n.as_integer()
            .and_then(|i| u64::try_from(i).ok())
            .filter(|&value| value <= limit)
            .ok_or_else(|| {
                CalcError::invalid(format_args!("Factorial input too large (max {limit})"))
            })
    }

    /// Validate a configured factorial cap.
    pub fn validate_factorial_limit(limit: u64) -> Result<(), CalcError> {
        if limit > MAX_FACTORIAL_INPUT {
            return Err(CalcError::invalid(format_args!(
                "Invalid factorial_limit: {limit} (must be at most {MAX_FACTORIAL_INPUT})"
            )));
        }
        Ok(())
    }

    // ========================================================================
    // Builder Validation
    // ========================================================================

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), CalcError> {
        if let Some(param) = duplicate_param {
            return Err(CalcError::invalid(format_args!(
                "Parameter '{param}' was set multiple times"
            )));
        }
        Ok(())
    }
}
