//! Factorial with bounded input.
//!
//! ## Purpose
//!
//! This module computes `n!` as an arbitrary-size integer for validated,
//! non-negative, integral `n` up to a cap (1000 by default).
//!
//! ## Design notes
//!
//! * **Iterative** (default): multiplies `1..=n` in a loop, O(n) time and
//!   constant call depth.
//! * **Recursive**: one stack frame per step. Kept for benchmarking parity
//!   with the iterative form; the cap bounds its depth.
//!
//! ## Invariants
//!
//! * Both modes return identical results for every accepted `n`.
//! * `0! = 1`.

// External dependencies
use num_bigint::BigUint;
use num_traits::One;

// Internal dependencies
use crate::engine::validator::{MAX_FACTORIAL_INPUT, Validator};
use crate::primitives::errors::CalcError;
use crate::primitives::input::NumericLike;

// ============================================================================
// Mode
// ============================================================================

/// Evaluation strategy for factorial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FactorialMode {
    /// Loop over `1..=n`.
    #[default]
    Iterative,

    /// Recurse `n` times. Only for comparison against `Iterative`.
    Recursive,
}

impl FactorialMode {
    /// Compute `n!` using this strategy. `n` must already be validated.
    pub fn compute(self, n: u64) -> BigUint {
        match self {
            Self::Iterative => factorial_iterative(n),
            Self::Recursive => {
                log::trace!("recursive factorial, depth {n}");
                factorial_recursive(n)
            }
        }
    }
}

#[inline]
fn factorial_iterative(n: u64) -> BigUint {
    let mut result = BigUint::one();
    for i in 2..=n {
        result *= i;
    }
    result
}

fn factorial_recursive(n: u64) -> BigUint {
    if n == 0 {
        BigUint::one()
    } else {
        factorial_recursive(n - 1) * n
    }
}

// ============================================================================
// Public Operations
// ============================================================================

/// `n!` using the iterative strategy and the default cap.
///
/// # Errors
///
/// * `InvalidInput` if `n` is not numeric, not integral, or above 1000.
/// * `DomainError` if `n` is negative.
///
/// # Examples
/// ```
/// use calckit::{BigUint, factorial};
/// assert_eq!(factorial(5).unwrap(), BigUint::from(120u32));
/// assert_eq!(factorial("0").unwrap(), BigUint::from(1u32));
/// ```
pub fn factorial<N: Into<NumericLike>>(n: N) -> Result<BigUint, CalcError> {
    factorial_with_mode(n, FactorialMode::Iterative)
}

/// `n!` using the given strategy and the default cap.
pub fn factorial_with_mode<N: Into<NumericLike>>(
    n: N,
    mode: FactorialMode,
) -> Result<BigUint, CalcError> {
    factorial_bounded(n, mode, MAX_FACTORIAL_INPUT)
}

/// `n!` using the given strategy, rejecting arguments above `limit`.
pub fn factorial_bounded<N: Into<NumericLike>>(
    n: N,
    mode: FactorialMode,
    limit: u64,
) -> Result<BigUint, CalcError> {
    let value = Validator::validate_number(&n.into(), "n")?;
    let n = Validator::validate_factorial_arg(value, limit)?;
    Ok(mode.compute(n))
}
