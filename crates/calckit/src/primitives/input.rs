//! Loosely typed input values.
//!
//! ## Purpose
//!
//! [`NumericLike`] is what callers hand to the calculator: a native number, or
//! text that should parse as one. `List` and `Null` exist for callers holding
//! dynamically shaped data (bindings, deserialised records); they always fail
//! scalar validation with a message naming their type.
//!
//! ## Non-goals
//!
//! * This module does not parse text; see the validator.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// Internal dependencies
use crate::primitives::number::Number;

// ============================================================================
// NumericLike
// ============================================================================

/// A value that is either a native number or text to be parsed as one.
#[derive(Debug, Clone, PartialEq)]
pub enum NumericLike {
    /// Native integer.
    Int(i64),

    /// Native double.
    Float(f64),

    /// Text, parsed by the validator.
    Text(String),

    /// A nested list; only valid where a sequence is expected.
    List(Vec<NumericLike>),

    /// Absent value.
    Null,
}

impl NumericLike {
    /// Short type name used in validation messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Text(_) => "str",
            Self::List(_) => "list",
            Self::Null => "NoneType",
        }
    }

    /// Build a `List` from any iterable of convertible values.
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<NumericLike>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! numeric_like_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for NumericLike {
                fn from(v: $t) -> Self {
                    Self::Int(i64::from(v))
                }
            }
        )*
    };
}

numeric_like_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for NumericLike {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for NumericLike {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<&str> for NumericLike {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for NumericLike {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&String> for NumericLike {
    fn from(v: &String) -> Self {
        Self::Text(v.clone())
    }
}

impl From<Number> for NumericLike {
    fn from(v: Number) -> Self {
        match v {
            Number::Int(i) => Self::Int(i),
            Number::Float(f) => Self::Float(f),
        }
    }
}

impl<T: Into<NumericLike>> From<Vec<T>> for NumericLike {
    fn from(v: Vec<T>) -> Self {
        Self::list(v)
    }
}

impl<T: Into<NumericLike>> From<Option<T>> for NumericLike {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

impl From<&NumericLike> for NumericLike {
    fn from(v: &NumericLike) -> Self {
        v.clone()
    }
}

macro_rules! numeric_like_from_ref {
    ($($t:ty),*) => {
        $(
            impl From<&$t> for NumericLike {
                fn from(v: &$t) -> Self {
                    Self::from(*v)
                }
            }
        )*
    };
}

numeric_like_from_ref!(i32, i64, u32, f64, Number);
