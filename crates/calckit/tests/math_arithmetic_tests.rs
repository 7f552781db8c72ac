//! Tests for validated binary arithmetic.
//!
//! These tests verify:
//! - Numeric-string coercion (`add("5", "3") == 8`)
//! - Integer preservation and float promotion
//! - Division by zero handling
//!
//! ## Test Organization
//!
//! 1. **Addition / Subtraction / Multiplication**
//! 2. **Division**
//! 3. **Error Messages**
//! 4. **Non-Finite Operands**
//! 5. **Workflow**

use approx::assert_relative_eq;

use calckit::{BinaryOp, CalcError, Number, NumericLike, add, divide, multiply, subtract};

// ============================================================================
// Addition / Subtraction / Multiplication Tests
// ============================================================================

/// Test addition of native numbers and numeric strings.
#[test]
fn test_add_coerces_strings() {
    assert!(matches!(add(5, 3), Ok(Number::Int(8))));
    assert!(matches!(add("5", "3"), Ok(Number::Int(8))));
    assert!(matches!(add(-5, 3), Ok(Number::Int(-2))));

    let sum = add("1.5", "2.5").unwrap();
    assert!(matches!(sum, Number::Float(_)));
    assert_relative_eq!(sum.to_f64(), 4.0);
}

/// Test mixed int/float operands produce a float.
#[test]
fn test_mixed_operands_promote_to_float() {
    assert!(matches!(add(1, 0.5), Ok(Number::Float(v)) if v == 1.5));
    assert!(matches!(multiply("2", 1.5), Ok(Number::Float(v)) if v == 3.0));
}

/// Test integer overflow promotes to float instead of wrapping.
#[test]
fn test_overflow_promotes_to_float() {
    let sum = add(i64::MAX, 1).unwrap();
    assert!(matches!(sum, Number::Float(_)));
    assert_relative_eq!(sum.to_f64(), i64::MAX as f64 + 1.0);

    let product = multiply(i64::MAX, 2).unwrap();
    assert!(matches!(product, Number::Float(_)));
}

/// Test subtraction and multiplication.
#[test]
fn test_subtract_and_multiply() {
    assert!(matches!(subtract(10, 4), Ok(Number::Int(6))));
    assert!(matches!(subtract("10", "4.5"), Ok(Number::Float(v)) if v == 5.5));
    assert!(matches!(multiply(6, 7), Ok(Number::Int(42))));
    assert!(matches!(multiply("-3", "3"), Ok(Number::Int(-9))));
}

/// Test non-numeric operands are rejected.
#[test]
fn test_arithmetic_rejects_invalid_operands() {
    assert!(matches!(add("abc", 5), Err(CalcError::InvalidInput(_))));
    assert!(matches!(
        add(5, NumericLike::list([1, 2, 3])),
        Err(CalcError::InvalidInput(_))
    ));
    assert!(matches!(
        subtract(NumericLike::Null, 1),
        Err(CalcError::InvalidInput(_))
    ));
    assert!(matches!(multiply(2, ""), Err(CalcError::InvalidInput(_))));
}

/// Test the operator enum applies the same rules as the free functions.
#[test]
fn test_binary_op_apply() {
    assert!(matches!(BinaryOp::Add.apply("2", 3), Ok(Number::Int(5))));
    assert!(matches!(BinaryOp::Subtract.apply(2, "3"), Ok(Number::Int(-1))));
    assert!(matches!(BinaryOp::Multiply.apply(2.0, 3), Ok(Number::Float(v)) if v == 6.0));
    assert!(BinaryOp::Add.apply("x", 1).is_err());
}

// ============================================================================
// Division Tests
// ============================================================================

/// Test division always yields a float quotient.
#[test]
fn test_divide() {
    assert_relative_eq!(divide(15, 3).unwrap(), 5.0);
    assert_relative_eq!(divide("10", "2").unwrap(), 5.0);
    assert_relative_eq!(divide(7, 2).unwrap(), 3.5);
    assert_relative_eq!(divide(-1, "4.0").unwrap(), -0.25);
}

/// Test every zero divisor form fails with DivisionByZero.
#[test]
fn test_divide_by_zero() {
    assert_eq!(divide(10, 0), Err(CalcError::DivisionByZero));
    assert_eq!(divide("10", "0"), Err(CalcError::DivisionByZero));
    assert_eq!(divide(1.5, 0.0), Err(CalcError::DivisionByZero));
    assert_eq!(divide(1, -0.0), Err(CalcError::DivisionByZero));
    assert_eq!(divide(0, "0.0"), Err(CalcError::DivisionByZero));
}

/// Test operand validation happens before the zero check.
#[test]
fn test_divide_invalid_dividend_reported_first() {
    assert!(matches!(divide("abc", 0), Err(CalcError::InvalidInput(_))));
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test messages name the offending operand.
#[test]
fn test_error_messages_name_operand() {
    let err = add(1, "abc").unwrap_err();
    assert_eq!(err.message(), "Parameter 'b' must be numeric, got 'abc'");
    assert_eq!(
        err.to_string(),
        "Invalid input: Parameter 'b' must be numeric, got 'abc'"
    );

    let err = divide(10, 0).unwrap_err();
    assert!(err.to_string().contains("Division by zero"));
}

// ============================================================================
// Non-Finite Operand Tests
// ============================================================================

/// Test infinite operands follow IEEE-754 arithmetic.
#[test]
fn test_infinite_operands() {
    assert!(matches!(add(f64::INFINITY, 1), Ok(Number::Float(v)) if v == f64::INFINITY));
    assert!(matches!(
        subtract(1, f64::INFINITY),
        Ok(Number::Float(v)) if v == f64::NEG_INFINITY
    ));
    assert_eq!(divide(1, f64::INFINITY).unwrap(), 0.0);
    assert_eq!(divide(f64::INFINITY, 2).unwrap(), f64::INFINITY);
}

/// Test NaN operands propagate instead of failing validation.
#[test]
fn test_nan_operands() {
    assert!(matches!(multiply(f64::NAN, 2), Ok(Number::Float(v)) if v.is_nan()));
    assert!(divide(1, f64::NAN).unwrap().is_nan());
}

// ============================================================================
// Workflow Tests
// ============================================================================

/// Test operations compose through their results.
#[test]
fn test_chained_workflow() {
    let a = add("10", "5").unwrap();
    let b = subtract(a, 3).unwrap();
    let c = multiply(b, 2).unwrap();
    let d = divide(c, 4).unwrap();

    assert_eq!(a, Number::Int(15));
    assert_eq!(b, Number::Int(12));
    assert_eq!(c, Number::Int(24));
    assert_relative_eq!(d, 6.0);
}
