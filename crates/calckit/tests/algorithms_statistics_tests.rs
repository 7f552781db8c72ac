//! Tests for list statistics.
//!
//! These tests verify:
//! - Mean and maximum over numeric and text sequences
//! - Empty and non-numeric sequence rejection
//! - Batch mean ordering and error annotation
//!
//! ## Test Organization
//!
//! 1. **Average**
//! 2. **Maximum**
//! 3. **Batch Average**

use approx::assert_relative_eq;

use calckit::{CalcError, Number, NumericLike, average, batch_average, maximum};

// ============================================================================
// Average Tests
// ============================================================================

/// Test the mean of integer and text sequences.
#[test]
fn test_average_basic() {
    assert_relative_eq!(average([1, 2, 3, 4, 5]).unwrap(), 3.0);
    assert_relative_eq!(average(["1", "2", "3"]).unwrap(), 2.0);
    assert_relative_eq!(average(1..=10).unwrap(), 5.5);
    assert_relative_eq!(average([0.1, 0.2, 0.3]).unwrap(), 0.2, epsilon = 1e-12);
}

/// Test a single-element sequence averages to itself.
#[test]
fn test_average_single() {
    assert_relative_eq!(average([42]).unwrap(), 42.0);
}

/// Test a large range averages correctly.
#[test]
fn test_average_large_range() {
    let data: Vec<i64> = (0..50_000).collect();
    assert_relative_eq!(average(data).unwrap(), 24_999.5);
}

/// Test an infinite element makes the mean infinite.
#[test]
fn test_average_infinite() {
    assert_eq!(average([1.0, f64::INFINITY]).unwrap(), f64::INFINITY);
}

/// Test empty sequences are rejected.
#[test]
fn test_average_empty() {
    let empty: [i32; 0] = [];
    let err = average(empty).unwrap_err();

    assert!(matches!(err, CalcError::InvalidInput(_)));
    assert!(err.message().contains("cannot be an empty list"));
}

/// Test a non-numeric element is rejected with its index.
#[test]
fn test_average_non_numeric() {
    let data = vec![
        NumericLike::from(1),
        NumericLike::from(2),
        NumericLike::from("abc"),
        NumericLike::from(4),
    ];
    let err = average(data).unwrap_err();

    assert!(matches!(err, CalcError::InvalidInput(_)));
    assert!(err.message().starts_with("Invalid item at index 2 in numbers"));
}

// ============================================================================
// Maximum Tests
// ============================================================================

/// Test the largest element is returned.
#[test]
fn test_maximum_basic() {
    assert_eq!(maximum([10, 5, 8, 3, 12]).unwrap(), Number::Int(12));
    assert_eq!(maximum(["10", "5", "8"]).unwrap(), Number::Int(10));
    assert_eq!(maximum([-3, -1, -2]).unwrap(), Number::Int(-1));
}

/// Test equal values yield that value.
#[test]
fn test_maximum_all_equal() {
    assert_eq!(maximum([5, 5, 5]).unwrap(), Number::Int(5));
}

/// Test ties between an int and an equal float keep the first occurrence.
#[test]
fn test_maximum_tie_keeps_first() {
    let data = vec![NumericLike::from(3), NumericLike::from(7), NumericLike::from(7.0)];
    assert!(matches!(maximum(data), Ok(Number::Int(7))));

    let data = vec![NumericLike::from(7.0), NumericLike::from(7)];
    assert!(matches!(maximum(data), Ok(Number::Float(_))));
}

/// Test mixed int and float values compare numerically.
#[test]
fn test_maximum_mixed() {
    let data = vec![NumericLike::from(2), NumericLike::from("2.5"), NumericLike::from(1)];
    assert!(matches!(maximum(data), Ok(Number::Float(v)) if v == 2.5));
}

/// Test infinities are ordinary values and a NaN after the first element is skipped.
#[test]
fn test_maximum_non_finite() {
    assert!(matches!(
        maximum([1.0, f64::INFINITY, 3.0]),
        Ok(Number::Float(v)) if v == f64::INFINITY
    ));
    assert!(matches!(maximum([1.0, f64::NAN, 3.0]), Ok(Number::Float(v)) if v == 3.0));
    assert!(matches!(maximum([f64::NAN, 3.0]), Ok(Number::Float(v)) if v.is_nan()));
}

/// Test empty sequences are rejected.
#[test]
fn test_maximum_empty() {
    let empty: Vec<f64> = Vec::new();
    let err = maximum(empty).unwrap_err();

    assert!(matches!(err, CalcError::InvalidInput(_)));
    assert!(err.message().contains("cannot be an empty list"));
}

// ============================================================================
// Batch Average Tests
// ============================================================================

/// Test the mean of each inner list, in order.
#[test]
fn test_batch_average_basic() {
    let means = batch_average([vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
    assert_eq!(means, vec![2.0, 5.0, 8.0]);

    let means = batch_average([vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    assert_eq!(means, vec![2.0, 5.0]);
}

/// Test an empty batch yields no results.
#[test]
fn test_batch_average_no_lists() {
    let lists: Vec<Vec<i32>> = vec![];
    assert_eq!(batch_average(lists).unwrap(), Vec::<f64>::new());
}

/// Test the failing list index is reported and the batch is aborted.
#[test]
fn test_batch_average_reports_failing_index() {
    let err = batch_average([vec![1, 2], vec![]]).unwrap_err();

    assert!(matches!(err, CalcError::InvalidInput(_)));
    assert_eq!(
        err.message(),
        "Error in list 1: Parameter 'numbers' cannot be an empty list"
    );
}

/// Test a non-numeric element inside a later list aborts the batch.
#[test]
fn test_batch_average_non_numeric() {
    let err = batch_average([vec!["1", "2"], vec!["3", "x"], vec!["5"]]).unwrap_err();

    assert!(err.message().starts_with("Error in list 1: Invalid item at index 1 in numbers"));
}
