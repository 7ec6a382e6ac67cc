//! # Scalar Kinds & Values
//!
//! This module defines the scalar half of the casting layer: [`ScalarKind`],
//! the tag naming which Rust type a raw token should be parsed into, and
//! [`Value`], the tagged result of a successful cast.
//!
//! ## Features
//! - Casting for common Rust primitives: `bool`, all integer widths,
//!   `f32`/`f64` and plain strings
//! - A [`Value::List`] variant for delimited iterable literals
//! - Lowercase, human-readable kind names via `Display` and `FromStr`
//! - Structured cast failures carrying the offending token, the target kind
//!   and the parser's own message
//!
//! ## Examples
//!
//! ### Cast a token
//! ```rust
//! use linecast::cast::{ScalarKind, Value};
//!
//! let v = ScalarKind::I64.cast("42").unwrap();
//! assert_eq!(v, Value::I64(42));
//!
//! let err = ScalarKind::U8.cast("256").unwrap_err();
//! assert_eq!(format!("{}", err), "Couldn't cast the value (256) to u8");
//! ```
//!
//! ### Parse a kind name
//! ```rust
//! use linecast::cast::ScalarKind;
//!
//! let kind: ScalarKind = "f64".parse().unwrap();
//! assert_eq!(kind, ScalarKind::F64);
//! ```

use std::fmt::Display;
use std::str::FromStr;

use thiserror::Error;

/// Names the type a raw token should be cast into.
///
/// Used on its own for single-value reads and inside
/// [`TypeSpec`](crate::cast::TypeSpec) for multi-value reads.
///
/// Currently supports:
/// - `Str`
/// - `Bool`
/// - Unsigned integers: `U8`, `U16`, `U32`, `U64`, `U128`
/// - Signed integers: `I8`, `I16`, `I32`, `I64`, `I128`
/// - Floats: `F32`, `F64`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-dep", derive(serde::Serialize, serde::Deserialize))]
pub enum ScalarKind {
    Str,
    Bool,
    U8,
    U16,
    U32,
    U64,
    U128,
    I8,
    I16,
    I32,
    I64,
    I128,
    F32,
    F64,
}

/// A successfully cast token.
///
/// Carries one variant per [`ScalarKind`] plus [`Value::List`] for iterable
/// literals. Positions whose cast was skipped or failed under a non-raising
/// policy keep their original text as [`Value::Str`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-dep", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    Str(String),
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    U128(u128),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    I128(i128),
    F32(f32),
    F64(f64),
    List(Vec<Value>),
}

/// Error returned when a token could not be parsed into the requested kind.
///
/// `detail` keeps the underlying parser's message so callers can forward it.
#[derive(Debug, Error)]
#[error("Couldn't cast the value ({value}) to {target}")]
pub struct CastFailure {
    pub value: String,
    pub target: ScalarKind,
    pub detail: String,
}

/// Parses `$input` as `$t` and wraps it into the matching [`Value`] variant,
/// or a [`CastFailure`] naming `$kind`.
macro_rules! cast_as {
    ($input:expr, $kind:expr, $t:ty, $variant:ident) => {
        $input
            .parse::<$t>()
            .map(Value::$variant)
            .map_err(|e| CastFailure {
                value: $input.to_string(),
                target: $kind,
                detail: e.to_string(),
            })
    };
}

impl ScalarKind {
    /// Attempts to cast `input` into a [`Value`] of this kind.
    ///
    /// Numeric and boolean parsing trims surrounding whitespace first;
    /// `Str` keeps the text verbatim.
    pub fn cast(&self, input: &str) -> Result<Value, CastFailure> {
        let clean = input.trim();
        match self {
            ScalarKind::Str => Ok(Value::Str(input.to_string())),
            ScalarKind::Bool => cast_as!(clean, ScalarKind::Bool, bool, Bool),
            ScalarKind::U8 => cast_as!(clean, ScalarKind::U8, u8, U8),
            ScalarKind::U16 => cast_as!(clean, ScalarKind::U16, u16, U16),
            ScalarKind::U32 => cast_as!(clean, ScalarKind::U32, u32, U32),
            ScalarKind::U64 => cast_as!(clean, ScalarKind::U64, u64, U64),
            ScalarKind::U128 => cast_as!(clean, ScalarKind::U128, u128, U128),
            ScalarKind::I8 => cast_as!(clean, ScalarKind::I8, i8, I8),
            ScalarKind::I16 => cast_as!(clean, ScalarKind::I16, i16, I16),
            ScalarKind::I32 => cast_as!(clean, ScalarKind::I32, i32, I32),
            ScalarKind::I64 => cast_as!(clean, ScalarKind::I64, i64, I64),
            ScalarKind::I128 => cast_as!(clean, ScalarKind::I128, i128, I128),
            ScalarKind::F32 => cast_as!(clean, ScalarKind::F32, f32, F32),
            ScalarKind::F64 => cast_as!(clean, ScalarKind::F64, f64, F64),
        }
    }
}

impl Display for ScalarKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str => write!(f, "string"),
            Self::Bool => write!(f, "bool"),
            Self::U8 => write!(f, "u8"),
            Self::U16 => write!(f, "u16"),
            Self::U32 => write!(f, "u32"),
            Self::U64 => write!(f, "u64"),
            Self::U128 => write!(f, "u128"),
            Self::I8 => write!(f, "i8"),
            Self::I16 => write!(f, "i16"),
            Self::I32 => write!(f, "i32"),
            Self::I64 => write!(f, "i64"),
            Self::I128 => write!(f, "i128"),
            Self::F32 => write!(f, "f32"),
            Self::F64 => write!(f, "f64"),
        }
    }
}

/// Error returned when a kind name doesn't match any [`ScalarKind`].
#[derive(Debug, Error)]
#[error("Unknown scalar kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for ScalarKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "string" | "str" => Ok(Self::Str),
            "bool" => Ok(Self::Bool),
            "u8" => Ok(Self::U8),
            "u16" => Ok(Self::U16),
            "u32" => Ok(Self::U32),
            "u64" => Ok(Self::U64),
            "u128" => Ok(Self::U128),
            "i8" => Ok(Self::I8),
            "i16" => Ok(Self::I16),
            "i32" => Ok(Self::I32),
            "i64" => Ok(Self::I64),
            "i128" => Ok(Self::I128),
            "f32" => Ok(Self::F32),
            "f64" => Ok(Self::F64),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Str(v) => write!(f, "{}", v),
            Self::Bool(v) => write!(f, "{}", v),
            Self::U8(v) => write!(f, "{}", v),
            Self::U16(v) => write!(f, "{}", v),
            Self::U32(v) => write!(f, "{}", v),
            Self::U64(v) => write!(f, "{}", v),
            Self::U128(v) => write!(f, "{}", v),
            Self::I8(v) => write!(f, "{}", v),
            Self::I16(v) => write!(f, "{}", v),
            Self::I32(v) => write!(f, "{}", v),
            Self::I64(v) => write!(f, "{}", v),
            Self::I128(v) => write!(f, "{}", v),
            Self::F32(v) => write!(f, "{}", v),
            Self::F64(v) => write!(f, "{}", v),
            Self::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cast_bool() {
        assert_eq!(ScalarKind::Bool.cast("true").unwrap(), Value::Bool(true));
        assert_eq!(ScalarKind::Bool.cast("false").unwrap(), Value::Bool(false));
        assert!(ScalarKind::Bool.cast("maybe").is_err());
    }

    #[test]
    fn test_cast_u8() {
        assert_eq!(ScalarKind::U8.cast("42").unwrap(), Value::U8(42));
        assert!(ScalarKind::U8.cast("-42").is_err());
        assert!(ScalarKind::U8.cast("256").is_err()); // u8 max is 255
        assert!(ScalarKind::U8.cast("abc").is_err());
    }

    #[test]
    fn test_cast_i32() {
        assert_eq!(
            ScalarKind::I32.cast("2147483647").unwrap(),
            Value::I32(2147483647) // i32 max
        );
        assert_eq!(ScalarKind::I32.cast("-123").unwrap(), Value::I32(-123));
        assert!(ScalarKind::I32.cast("2147483648").is_err()); // overflow
    }

    #[test]
    fn test_cast_f64() {
        assert_eq!(ScalarKind::F64.cast("2.5").unwrap(), Value::F64(2.5));
        assert!(ScalarKind::F64.cast("2,5").is_err());
    }

    #[test]
    fn test_cast_trims_numeric_but_not_str() {
        assert_eq!(ScalarKind::I64.cast(" 5 ").unwrap(), Value::I64(5));
        assert_eq!(
            ScalarKind::Str.cast(" x ").unwrap(),
            Value::Str(" x ".to_string())
        );
    }

    #[test]
    fn test_cast_failure_message() {
        let err = ScalarKind::I64.cast("x").unwrap_err();
        assert_eq!(format!("{}", err), "Couldn't cast the value (x) to i64");
        assert!(!err.detail.is_empty());
    }

    #[test]
    fn test_kind_names_round_trip() {
        let kinds = [
            ScalarKind::Str,
            ScalarKind::Bool,
            ScalarKind::U8,
            ScalarKind::U16,
            ScalarKind::U32,
            ScalarKind::U64,
            ScalarKind::U128,
            ScalarKind::I8,
            ScalarKind::I16,
            ScalarKind::I32,
            ScalarKind::I64,
            ScalarKind::I128,
            ScalarKind::F32,
            ScalarKind::F64,
        ];
        for kind in kinds {
            assert_eq!(format!("{}", kind).parse::<ScalarKind>().unwrap(), kind);
        }
        assert!("banana".parse::<ScalarKind>().is_err());
    }

    #[test]
    fn test_value_display() {
        let v = Value::List(vec![Value::I64(1), Value::Str("a".into()), Value::F64(2.5)]);
        assert_eq!(format!("{}", v), "[1, a, 2.5]");
    }
}
