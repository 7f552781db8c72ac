//! Sign-based data transform with an explicit zero policy.
//!
//! ## Purpose
//!
//! This module maps each element of a numeric sequence by its sign:
//! positives are doubled, negatives become their absolute value, and zeros
//! follow the selected [`ZeroPolicy`].
//!
//! ## Design notes
//!
//! * **Order-preserving**: Output keeps input order.
//! * **Length**: Equal to the input under `Include`/`Double`, shorter under
//!   `Drop` when zeros are present.
//! * **Empty input**: Returns an empty output rather than an error.
//!
//! ## Non-goals
//!
//! * This module does not compute statistics over the output.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Display, Formatter};
use core::str::FromStr;

// Internal dependencies
use crate::engine::validator::Validator;
use crate::primitives::errors::CalcError;
use crate::primitives::input::NumericLike;
use crate::primitives::number::Number;

// ============================================================================
// Zero Policy
// ============================================================================

/// How zero-valued elements appear in the transform output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZeroPolicy {
    /// Emit `0`.
    #[default]
    Include,

    /// Emit nothing.
    Drop,

    /// Emit `0` (zero doubled is still zero), same output as `Include`.
    Double,
}

impl ZeroPolicy {
    /// Parse a policy name (`include`, `drop` or `double`).
    pub fn parse(name: &str) -> Result<Self, CalcError> {
        match name {
            "include" => Ok(Self::Include),
            "drop" => Ok(Self::Drop),
            "double" => Ok(Self::Double),
            other => {
                log::debug!("rejected zero policy {other:?}");
                Err(CalcError::invalid(
                    "handle_zeros must be 'include', 'drop', or 'double'",
                ))
            }
        }
    }

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Drop => "drop",
            Self::Double => "double",
        }
    }

    /// Output for a zero-valued element, or `None` if it is skipped.
    #[inline]
    fn zero_output(self) -> Option<Number> {
        match self {
            Self::Include | Self::Double => Some(Number::Int(0)),
            Self::Drop => None,
        }
    }
}

impl FromStr for ZeroPolicy {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ZeroPolicy {
    type Error = CalcError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Display for ZeroPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Transform
// ============================================================================

/// Map a single validated value by its sign.
///
/// NaN is neither positive nor negative and follows the zero policy.
#[inline]
pub fn transform_value(value: Number, policy: ZeroPolicy) -> Option<Number> {
    match value.signum() {
        Ordering::Greater => Some(value * Number::Int(2)),
        Ordering::Less => Some(value.abs()),
        Ordering::Equal => policy.zero_output(),
    }
}

/// Apply the sign-based transform to every element.
///
/// Elements are validated one at a time under the field name `data_list[i]`.
///
/// # Errors
///
/// * `InvalidInput` prefixed with `Error processing item at index <i>` for
///   the first element that is not numeric.
///
/// # Examples
/// ```
/// use calckit::{ZeroPolicy, process_data};
///
/// let data = [2, -3, 0, 4, -1];
/// assert_eq!(process_data(data, ZeroPolicy::Include).unwrap(), [4i64, 3, 0, 8, 1]);
/// assert_eq!(process_data(data, ZeroPolicy::Drop).unwrap(), [4i64, 3, 8, 1]);
/// ```
pub fn process_data<I>(values: I, policy: ZeroPolicy) -> Result<Vec<Number>, CalcError>
where
    I: IntoIterator,
    I::Item: Into<NumericLike>,
{
    let iter = values.into_iter();
    let mut results = Vec::with_capacity(iter.size_hint().0);

    for (i, item) in iter.enumerate() {
        let value = Validator::validate_number(&item.into(), format_args!("data_list[{i}]"))
            .map_err(|e| e.annotate(format_args!("Error processing item at index {i}")))?;
        results.extend(transform_value(value, policy));
    }

    Ok(results)
}

/// Apply the transform with the policy given by name.
///
/// # Errors
///
/// * `InvalidInput` if `policy` is not a known policy name. The name is
///   checked before the data, so this also fails for empty input.
pub fn process_data_named<I>(values: I, policy: &str) -> Result<Vec<Number>, CalcError>
where
    I: IntoIterator,
    I::Item: Into<NumericLike>,
{
    process_data(values, ZeroPolicy::parse(policy)?)
}
