//! # calckit — Validated arithmetic and list statistics for Rust
//!
//! Basic arithmetic, list statistics, factorial and a sign-based data
//! transform, where every input is validated before use and every failure is
//! reported as a descriptive [`CalcError`].
//!
//! Inputs are "numeric-like": native integers and floats, or text that
//! parses as one. Text without a decimal point is read as an integer,
//! otherwise as a float.
//!
//! ## Quick Start
//!
//! ```rust
//! use calckit::prelude::*;
//!
//! // Text is coerced to numbers; integer arithmetic stays integral.
//! assert_eq!(add("5", "3")?, 8i64);
//! assert_eq!(divide(15, 3)?, 5.0);
//!
//! // Statistics over validated sequences.
//! assert_eq!(average([1, 2, 3, 4, 5])?, 3.0);
//! assert_eq!(maximum(["10", "5", "8"])?, 10i64);
//!
//! // Arbitrary-size factorial.
//! assert_eq!(factorial(5)?, BigUint::from(120u32));
//!
//! // Sign-based transform with an explicit zero policy.
//! let data = [2, -3, 0, 4, -1];
//! assert_eq!(process_data(data, ZeroPolicy::Drop)?, [4i64, 3, 8, 1]);
//! # Result::<(), CalcError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Every operation returns `Result<_, CalcError>`:
//!
//! - **`InvalidInput`**: non-numeric value, empty list, unknown policy name,
//!   non-integral or oversized factorial argument.
//! - **`DivisionByZero`**: the divisor validates to zero.
//! - **`DomainError`**: negative factorial argument.
//!
//! ```rust
//! use calckit::prelude::*;
//!
//! match divide(10, "0") {
//!     Ok(q) => println!("quotient: {q}"),
//!     Err(CalcError::DivisionByZero) => eprintln!("cannot divide by zero"),
//!     Err(e) => eprintln!("failed: {e}"),
//! }
//!
//! let err = batch_average([vec![1, 2], vec![]]).unwrap_err();
//! assert!(err.message().starts_with("Error in list 1"));
//! ```
//!
//! ### Configuration
//!
//! The free functions use the defaults (`Include` zeros, iterative factorial,
//! cap of 1000). Use the builder for anything else:
//!
//! ```rust
//! use calckit::prelude::*;
//!
//! let calc = Calculator::new()
//!     .zero_policy(ZeroPolicy::Drop)
//!     .factorial_limit(20)
//!     .build()?;
//!
//! assert!(calc.factorial(21).is_err());
//! # Result::<(), CalcError>::Ok(())
//! ```
//!
//! ## Minimal Usage (no_std)
//!
//! Disable default features to drop the standard library dependency. The
//! timing helper is only available with `std`.
//!
//! ```toml
//! [dependencies]
//! calckit = { version = "0.2", default-features = false }
//! ```
//!
//! ## Logging
//!
//! Rejected inputs are reported through the [`log`](https://docs.rs/log)
//! facade at `debug` level. The crate never installs a logger.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - value types and the error type.
mod primitives;

// Layer 2: Engine - input validation and timing.
mod engine;

// Layer 3: Math - scalar operations.
mod math;

// Layer 4: Algorithms - sequence operations.
mod algorithms;

// High-level API and builder.
mod api;

pub use crate::algorithms::statistics::{average, batch_average, maximum};
pub use crate::algorithms::transform::{process_data, process_data_named};
pub use crate::api::{
    BinaryOp, CalcError, Calculator, CalculatorBuilder, FactorialMode, Number, NumericLike,
    ZeroPolicy, validate_number, validate_numeric_sequence, validate_sequence_value,
};
#[cfg(feature = "std")]
pub use crate::engine::timing::timed_execution;
pub use crate::engine::validator::MAX_FACTORIAL_INPUT;
pub use crate::math::arithmetic::{add, divide, multiply, subtract};
pub use crate::math::factorial::{factorial, factorial_with_mode};
pub use num_bigint::BigUint;

// Standard calckit prelude.
pub mod prelude {
    #[cfg(feature = "std")]
    pub use crate::timed_execution;
    pub use crate::{
        BigUint, CalcError, Calculator, CalculatorBuilder,
        FactorialMode::{self, Iterative, Recursive},
        Number, NumericLike, ZeroPolicy, add, average, batch_average, divide, factorial,
        factorial_with_mode, maximum, multiply, process_data, subtract,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
