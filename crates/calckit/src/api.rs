//! High-level API for the calculator.
//!
//! ## Purpose
//!
//! This module provides the user-facing entry points: the free functions
//! re-exported at the crate root, and a fluent builder for callers that want
//! a non-default zero policy, factorial strategy or factorial cap.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Validated**: Parameters are validated when `.build()` is called.
//! * **Stateless**: A built [`Calculator`] is immutable and `Copy`; every
//!   operation is a pure function of its inputs and the configuration.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`CalculatorBuilder`] via `Calculator::new()`.
//! 2. Chain configuration methods (`.zero_policy()`, `.factorial_mode()`, ...).
//! 3. Call `.build()` to validate and obtain a [`Calculator`].

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_bigint::BigUint;

// Internal dependencies
use crate::algorithms::statistics;
use crate::algorithms::transform;
use crate::engine::validator::{MAX_FACTORIAL_INPUT, Validator};
use crate::math::arithmetic;
use crate::math::factorial;

// Publicly re-exported types
pub use crate::algorithms::transform::ZeroPolicy;
pub use crate::math::arithmetic::BinaryOp;
pub use crate::math::factorial::FactorialMode;
pub use crate::primitives::errors::CalcError;
pub use crate::primitives::input::NumericLike;
pub use crate::primitives::number::Number;

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring a [`Calculator`].
#[derive(Debug, Clone, Default)]
pub struct CalculatorBuilder {
    /// Zero handling for `process_data` (default: Include).
    pub zero_policy: Option<ZeroPolicy>,

    /// Factorial evaluation strategy (default: Iterative).
    pub factorial_mode: Option<FactorialMode>,

    /// Largest accepted factorial argument (default and maximum: 1000).
    pub factorial_limit: Option<u64>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl CalculatorBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the zero handling policy for `process_data`.
    pub fn zero_policy(mut self, policy: ZeroPolicy) -> Self {
        if self.zero_policy.is_some() {
            self.duplicate_param = Some("zero_policy");
        }
        self.zero_policy = Some(policy);
        self
    }

    /// Set the factorial evaluation strategy.
    pub fn factorial_mode(mut self, mode: FactorialMode) -> Self {
        if self.factorial_mode.is_some() {
            self.duplicate_param = Some("factorial_mode");
        }
        self.factorial_mode = Some(mode);
        self
    }

    /// Set the largest accepted factorial argument (at most 1000).
    pub fn factorial_limit(mut self, limit: u64) -> Self {
        if self.factorial_limit.is_some() {
            self.duplicate_param = Some("factorial_limit");
        }
        self.factorial_limit = Some(limit);
        self
    }

    /// Validate the configuration and build a [`Calculator`].
    pub fn build(self) -> Result<Calculator, CalcError> {
        // Check for duplicate parameter configuration
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let factorial_limit = self.factorial_limit.unwrap_or(MAX_FACTORIAL_INPUT);
        Validator::validate_factorial_limit(factorial_limit)?;

        Ok(Calculator {
            zero_policy: self.zero_policy.unwrap_or_default(),
            factorial_mode: self.factorial_mode.unwrap_or_default(),
            factorial_limit,
        })
    }
}

// ============================================================================
// Calculator
// ============================================================================

/// A validated calculator configuration.
///
/// # Examples
/// ```
/// use calckit::prelude::*;
///
/// let calc = Calculator::new()
///     .zero_policy(ZeroPolicy::Drop)
///     .factorial_mode(Recursive)
///     .build()?;
///
/// assert_eq!(calc.process_data([2, -3, 0])?, [4i64, 3]);
/// assert_eq!(calc.factorial(10)?, BigUint::from(3_628_800u32));
/// # Result::<(), CalcError>::Ok(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Calculator {
    zero_policy: ZeroPolicy,
    factorial_mode: FactorialMode,
    factorial_limit: u64,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            zero_policy: ZeroPolicy::default(),
            factorial_mode: FactorialMode::default(),
            factorial_limit: MAX_FACTORIAL_INPUT,
        }
    }
}

impl Calculator {
    /// Start configuring a calculator.
    #[allow(clippy::new_ret_no_self)]
    pub fn new() -> CalculatorBuilder {
        CalculatorBuilder::new()
    }

    /// Configured zero policy.
    pub fn zero_policy(&self) -> ZeroPolicy {
        self.zero_policy
    }

    /// Configured factorial strategy.
    pub fn factorial_mode(&self) -> FactorialMode {
        self.factorial_mode
    }

    /// Configured factorial cap.
    pub fn factorial_limit(&self) -> u64 {
        self.factorial_limit
    }

    /// See [`add`](crate::add).
    pub fn add<A: Into<NumericLike>, B: Into<NumericLike>>(
        &self,
        a: A,
        b: B,
    ) -> Result<Number, CalcError> {
        arithmetic::add(a, b)
    }

    /// See [`subtract`](crate::subtract).
    pub fn subtract<A: Into<NumericLike>, B: Into<NumericLike>>(
        &self,
        a: A,
        b: B,
    ) -> Result<Number, CalcError> {
        arithmetic::subtract(a, b)
    }

    /// See [`multiply`](crate::multiply).
    pub fn multiply<A: Into<NumericLike>, B: Into<NumericLike>>(
        &self,
        a: A,
        b: B,
    ) -> Result<Number, CalcError> {
        arithmetic::multiply(a, b)
    }

    /// See [`divide`](crate::divide).
    pub fn divide<A: Into<NumericLike>, B: Into<NumericLike>>(
        &self,
        a: A,
        b: B,
    ) -> Result<f64, CalcError> {
        arithmetic::divide(a, b)
    }

    /// See [`average`](crate::average).
    pub fn average<I>(&self, values: I) -> Result<f64, CalcError>
    where
        I: IntoIterator,
        I::Item: Into<NumericLike>,
    {
        statistics::average(values)
    }

    /// See [`maximum`](crate::maximum).
    pub fn maximum<I>(&self, values: I) -> Result<Number, CalcError>
    where
        I: IntoIterator,
        I::Item: Into<NumericLike>,
    {
        statistics::maximum(values)
    }

    /// See [`batch_average`](crate::batch_average).
    pub fn batch_average<I, S>(&self, lists: I) -> Result<Vec<f64>, CalcError>
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator,
        S::Item: Into<NumericLike>,
    {
        statistics::batch_average(lists)
    }

    /// `n!` using the configured strategy and cap.
    pub fn factorial<N: Into<NumericLike>>(&self, n: N) -> Result<BigUint, CalcError> {
        factorial::factorial_bounded(n, self.factorial_mode, self.factorial_limit)
    }

    /// Sign-based transform using the configured zero policy.
    pub fn process_data<I>(&self, values: I) -> Result<Vec<Number>, CalcError>
    where
        I: IntoIterator,
        I::Item: Into<NumericLike>,
    {
        transform::process_data(values, self.zero_policy)
    }
}

// ============================================================================
// Free Validation Functions
// ============================================================================

/// Resolve a numeric-like value, reporting failures under `field`.
///
/// # Examples
/// ```
/// use calckit::{Number, validate_number};
///
/// assert!(matches!(validate_number("42", "x"), Ok(Number::Int(42))));
/// assert!(matches!(validate_number("4.5", "x"), Ok(Number::Float(_))));
/// assert!(validate_number("abc", "x").is_err());
/// ```
pub fn validate_number<V: Into<NumericLike>>(value: V, field: &str) -> Result<Number, CalcError> {
    Validator::validate_number(&value.into(), field)
}

/// Resolve every element of a non-empty sequence, reporting failures under
/// `field` and the element index.
pub fn validate_numeric_sequence<I>(values: I, field: &str) -> Result<Vec<Number>, CalcError>
where
    I: IntoIterator,
    I::Item: Into<NumericLike>,
{
    Validator::validate_numeric_sequence(values, field)
}

/// Resolve a single dynamically shaped value that must hold a list.
///
/// # Errors
///
/// * `InvalidInput` if `value` is not a list, or as for
///   [`validate_numeric_sequence`].
///
/// # Examples
/// ```
/// use calckit::{NumericLike, validate_sequence_value};
///
/// let list = NumericLike::list(["1", "2"]);
/// assert_eq!(validate_sequence_value(list, "values").unwrap(), [1i64, 2]);
/// assert!(validate_sequence_value(5, "values").is_err());
/// ```
pub fn validate_sequence_value<V: Into<NumericLike>>(
    value: V,
    field: &str,
) -> Result<Vec<Number>, CalcError> {
    Validator::validate_sequence_value(&value.into(), field)
}
