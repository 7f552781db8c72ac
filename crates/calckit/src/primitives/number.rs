//! Validated numeric values.
//!
//! ## Purpose
//!
//! This module defines [`Number`], the value every validated input resolves
//! to, together with the integer-preserving arithmetic the calculator applies.
//!
//! ## Design notes
//!
//! * **Integer-preserving**: `Int op Int` stays `Int` while it fits in `i64`.
//! * **Promotion**: Overflowing integer results and mixed operands become `Float`.
//! * **Division**: Always produces `Float`; zero checks happen in the caller.
//!
//! ## Invariants
//!
//! * `Float` may hold NaN or ±inf; they follow IEEE-754 arithmetic.
//! * Comparisons between two `Int`s are exact.

// External dependencies
use core::cmp::Ordering;
use core::fmt::{Display, Formatter, Result};
use core::ops::{Add, Mul, Sub};
use num_traits::float::FloatCore;
use num_traits::{ToPrimitive, Zero};

// ============================================================================
// Number
// ============================================================================

/// An integer or floating-point value.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    /// Native integer.
    Int(i64),

    /// Native double.
    Float(f64),
}

impl Number {
    /// Value as `f64` (lossy for integers above 2^53).
    #[inline]
    pub fn to_f64(self) -> f64 {
        match self {
            Self::Int(i) => i as f64,
            Self::Float(v) => v,
        }
    }

    /// Integral value, if this is an `Int` or a `Float` with no fractional part
    /// that fits in `i64`.
    pub fn as_integer(self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(i),
            Self::Float(v) if FloatCore::fract(v) == 0.0 => v.to_i64(),
            Self::Float(_) => None,
        }
    }

    /// Returns `true` for `Int`, and for `Float` with no fractional part.
    pub fn is_integral(self) -> bool {
        match self {
            Self::Int(_) => true,
            Self::Float(v) => v.is_finite() && FloatCore::fract(v) == 0.0,
        }
    }

    /// Returns `true` if the value is strictly negative.
    pub fn is_negative(self) -> bool {
        match self {
            Self::Int(i) => i < 0,
            Self::Float(v) => v < 0.0,
        }
    }

    /// Sign of the value: `Less` for negative, `Equal` for (signed) zero.
    pub fn signum(self) -> Ordering {
        match self {
            Self::Int(i) => i.cmp(&0),
            Self::Float(v) => v.partial_cmp(&0.0).unwrap_or(Ordering::Equal),
        }
    }

    /// True quotient. The caller is responsible for rejecting a zero divisor.
    #[inline]
    pub fn quotient(self, rhs: Self) -> f64 {
        self.to_f64() / rhs.to_f64()
    }

    /// Absolute value, promoting `i64::MIN` to `Float`.
    pub fn abs(self) -> Self {
        match self {
            Self::Int(i) => i
                .checked_abs()
                .map_or_else(|| Self::Float(FloatCore::abs(i as f64)), Self::Int),
            Self::Float(v) => Self::Float(FloatCore::abs(v)),
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::Int(0)
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Self::Int(0)
    }

    fn is_zero(&self) -> bool {
        match *self {
            Self::Int(i) => i == 0,
            Self::Float(v) => v == 0.0,
        }
    }
}

// ============================================================================
// Arithmetic
// ============================================================================

// Integer pairs use checked arithmetic and fall back to `f64` on overflow.
macro_rules! number_binop {
    ($trait:ident, $method:ident, $checked:ident, $op:tt) => {
        impl $trait for Number {
            type Output = Number;

            fn $method(self, rhs: Self) -> Self::Output {
                match (self, rhs) {
                    (Self::Int(a), Self::Int(b)) => a
                        .$checked(b)
                        .map_or_else(|| Self::Float(a as f64 $op b as f64), Self::Int),
                    (a, b) => Self::Float(a.to_f64() $op b.to_f64()),
                }
            }
        }
    };
}

number_binop!(Add, add, checked_add, +);
number_binop!(Sub, sub, checked_sub, -);
number_binop!(Mul, mul, checked_mul, *);

// ============================================================================
// Comparison
// ============================================================================

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
        }
    }
}

impl PartialEq<i64> for Number {
    fn eq(&self, other: &i64) -> bool {
        *self == Number::Int(*other)
    }
}

impl PartialEq<i32> for Number {
    fn eq(&self, other: &i32) -> bool {
        *self == Number::Int(i64::from(*other))
    }
}

impl PartialEq<f64> for Number {
    fn eq(&self, other: &f64) -> bool {
        *self == Number::Float(*other)
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! number_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Number {
                fn from(v: $t) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )*
    };
}

number_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for Number {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for Number {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            // Keep a trailing `.0` so floats stay distinguishable from ints.
            Self::Float(v) if v.is_finite() && FloatCore::fract(*v) == 0.0 => write!(f, "{v:.1}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}
