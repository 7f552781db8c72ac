//! Validated binary arithmetic.
//!
//! ## Purpose
//!
//! This module implements addition, subtraction, multiplication and division
//! over loosely typed operands. Both operands are validated (fields `a` and
//! `b`) before the operator is applied.
//!
//! ## Design notes
//!
//! * **Integer-preserving**: `add("5", "3")` yields `Int(8)`, not `Float(8.0)`.
//! * **True division**: `divide` always returns `f64`.
//! * **Zero divisor**: Rejected after validation, so `"0"` and `0.0` both fail.

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::CalcError;
use crate::primitives::input::NumericLike;
use crate::primitives::number::Number;

// External dependencies
use num_traits::Zero;

// ============================================================================
// Operators
// ============================================================================

/// Closed binary operators on [`Number`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `a + b`
    Add,

    /// `a - b`
    Subtract,

    /// `a * b`
    Multiply,
}

impl BinaryOp {
    /// Validate both operands and apply the operator.
    pub fn apply<A, B>(self, a: A, b: B) -> Result<Number, CalcError>
    where
        A: Into<NumericLike>,
        B: Into<NumericLike>,
    {
        let (a, b) = validate_operands(a, b)?;
        Ok(self.compute(a, b))
    }

    /// Apply the operator to already validated numbers.
    #[inline]
    pub fn compute(self, a: Number, b: Number) -> Number {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
        }
    }
}

// Resolve both operands, reporting `a` before `b`.
fn validate_operands<A, B>(a: A, b: B) -> Result<(Number, Number), CalcError>
where
    A: Into<NumericLike>,
    B: Into<NumericLike>,
{
    let a = Validator::validate_number(&a.into(), "a")?;
    let b = Validator::validate_number(&b.into(), "b")?;
    Ok((a, b))
}

// ============================================================================
// Public Operations
// ============================================================================

/// Sum of two numeric-like values.
///
/// # Examples
/// ```
/// use calckit::add;
/// assert_eq!(add("5", "3").unwrap(), 8i64);
/// assert_eq!(add(1.5, "2.5").unwrap(), 4.0);
/// ```
pub fn add<A, B>(a: A, b: B) -> Result<Number, CalcError>
where
    A: Into<NumericLike>,
    B: Into<NumericLike>,
{
    BinaryOp::Add.apply(a, b)
}

/// Difference `a - b`.
pub fn subtract<A, B>(a: A, b: B) -> Result<Number, CalcError>
where
    A: Into<NumericLike>,
    B: Into<NumericLike>,
{
    BinaryOp::Subtract.apply(a, b)
}

/// Product of two numeric-like values.
pub fn multiply<A, B>(a: A, b: B) -> Result<Number, CalcError>
where
    A: Into<NumericLike>,
    B: Into<NumericLike>,
{
    BinaryOp::Multiply.apply(a, b)
}

/// True quotient `a / b`.
///
/// # Errors
///
/// * `InvalidInput` if either operand is not numeric.
/// * `DivisionByZero` if `b` validates to zero.
pub fn divide<A, B>(a: A, b: B) -> Result<f64, CalcError>
where
    A: Into<NumericLike>,
    B: Into<NumericLike>,
{
    let (a, b) = validate_operands(a, b)?;

    if b.is_zero() {
        log::debug!("rejected division of {a} by zero");
        return Err(CalcError::DivisionByZero);
    }

    Ok(a.quotient(b))
}
