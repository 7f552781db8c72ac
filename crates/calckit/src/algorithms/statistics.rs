//! List statistics over validated sequences.
//!
//! ## Purpose
//!
//! This module computes the arithmetic mean and the maximum of a numeric
//! sequence, plus a batch form of the mean over several sequences.
//!
//! ## Design notes
//!
//! * **Validated**: Every sequence is validated (field `numbers`) before use,
//!   so empty or non-numeric input fails with `InvalidInput`.
//! * **Single pass**: Both statistics are one linear scan, O(1) extra space
//!   beyond the validated copy.
//! * **Exact integer sums**: Integer sums stay in `i64` until they overflow.
//!
//! ## Invariants
//!
//! * `average(S) == sum(S) / len(S)` within floating-point tolerance.
//! * `maximum` returns the first of several equal largest values.
//! * A NaN never replaces the running maximum, so it is only returned when it
//!   is the first element.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Zero;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::CalcError;
use crate::primitives::input::NumericLike;
use crate::primitives::number::Number;

/// Field name reported for sequence arguments.
const FIELD: &str = "numbers";

// ============================================================================
// Kernels
// ============================================================================

// Mean of an already validated, non-empty slice.
#[inline]
fn mean_of(values: &[Number]) -> f64 {
    let total = values.iter().fold(Number::zero(), |acc, &x| acc + x);
    total.to_f64() / values.len() as f64
}

// Largest element of an already validated slice; ties keep the first.
#[inline]
fn max_of(values: &[Number]) -> Option<Number> {
    let (first, rest) = values.split_first()?;
    let mut best = *first;
    for &x in rest {
        if x > best {
            best = x;
        }
    }
    Some(best)
}

// ============================================================================
// Public Operations
// ============================================================================

/// Arithmetic mean of a numeric sequence.
///
/// # Errors
///
/// * `InvalidInput` if the sequence is empty or holds a non-numeric value.
///
/// # Examples
/// ```
/// use calckit::average;
/// assert_eq!(average([1, 2, 3, 4, 5]).unwrap(), 3.0);
/// assert_eq!(average(["1", "2", "3"]).unwrap(), 2.0);
/// ```
pub fn average<I>(values: I) -> Result<f64, CalcError>
where
    I: IntoIterator,
    I::Item: Into<NumericLike>,
{
    let validated = Validator::validate_numeric_sequence(values, FIELD)?;
    Ok(mean_of(&validated))
}

/// Largest value of a numeric sequence.
///
/// Elements are compared with `>` in order, so a NaN after the first element
/// is skipped and a leading NaN is kept.
///
/// # Errors
///
/// * `InvalidInput` if the sequence is empty or holds a non-numeric value.
///
/// # Examples
/// ```
/// use calckit::maximum;
/// assert_eq!(maximum([10, 5, 8, 3, 12]).unwrap(), 12i64);
/// ```
pub fn maximum<I>(values: I) -> Result<Number, CalcError>
where
    I: IntoIterator,
    I::Item: Into<NumericLike>,
{
    let validated = Validator::validate_numeric_sequence(values, FIELD)?;
    max_of(&validated).ok_or_else(|| {
        CalcError::invalid(format_args!("Parameter '{FIELD}' cannot be an empty list"))
    })
}

/// Mean of each inner sequence, in order.
///
/// The first failing sequence aborts the batch; no partial results are
/// returned.
///
/// # Errors
///
/// * `InvalidInput` prefixed with `Error in list <i>` for the failing index.
///
/// # Examples
/// ```
/// use calckit::batch_average;
/// let means = batch_average([vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
/// assert_eq!(means, vec![2.0, 5.0]);
/// ```
pub fn batch_average<I, S>(lists: I) -> Result<Vec<f64>, CalcError>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator,
    S::Item: Into<NumericLike>,
{
    lists
        .into_iter()
        .enumerate()
        .map(|(i, list)| {
            average(list).map_err(|e| e.annotate(format_args!("Error in list {i}")))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn max_of_empty_is_none() {
        assert!(max_of(&[]).is_none());
    }

    #[test]
    fn max_of_keeps_first_of_equal_values() {
        // Int(5) and Float(5.0) compare equal; the first one wins.
        let values = [Number::Int(1), Number::Int(5), Number::Float(5.0)];
        assert!(matches!(max_of(&values), Some(Number::Int(5))));
    }

    #[test]
    fn mean_of_large_integers_stays_exact_until_division() {
        let values = [Number::Int(i64::MAX / 2), Number::Int(i64::MAX / 2)];
        let expected = (i64::MAX / 2) as f64;
        assert_eq!(mean_of(&values), expected);
    }
}
