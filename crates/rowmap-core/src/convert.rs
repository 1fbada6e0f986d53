// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! Coercion of row values into entity field types.
//!
//! Materialization reads dynamically typed [`SqlValue`]s and must land them
//! in statically typed fields. The rules, in the order they are applied:
//!
//! 1. `Null` coerces to the target's default/zero value (`0`, `0.0`,
//!    `false`, `""`, empty bytes, `None`).
//! 2. A value already in the target's variant passes through unchanged.
//! 3. `Option<T>` unwraps to `T`, with `Null` becoming `None`.
//! 4. Anything else goes through the explicit cross-variant table below.
//!    Combinations not listed fail with a [`ConvertError`].
//!
//! # Conversion table
//!
//! | from \ to | int              | float | bool          | text      |
//! |-----------|------------------|-------|---------------|-----------|
//! | int       | range-checked    | exact | nonzero       | display   |
//! | float     | rounded, checked | —     | error         | display   |
//! | bool      | 0 / 1            | 0 / 1 | —             | display   |
//! | text      | trimmed parse    | parse | `true`/`false`| —         |
//!
//! Bytes convert only to bytes. Float-to-integer rounds ties to even and
//! rejects non-finite and out-of-range inputs rather than saturating.

use thiserror::Error;

use crate::value::SqlValue;

/// A value could not be converted to the requested target type.
///
/// Carries the source variant name and the target type name; the row layer
/// attaches the column name before surfacing it to callers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot convert {found} to `{target}`")]
pub struct ConvertError {
    /// Variant name of the offending value (see [`SqlValue::type_name`]).
    pub found: &'static str,

    /// Name of the requested target type.
    pub target: &'static str
}

impl ConvertError {
    /// Build an error for a value that has no conversion to `target`.
    pub fn new(value: &SqlValue, target: &'static str) -> Self {
        Self {
            found: value.type_name(),
            target
        }
    }
}

/// Conversion of a [`SqlValue`] into an application value.
///
/// Implementations follow the module-level coercion rules. The derive macro
/// reads every column through this trait via [`Row::read`](crate::Row::read).
pub trait FromSqlValue: Sized {
    /// Coerce a borrowed SQL value into `Self`.
    fn from_sql_value(value: &SqlValue) -> Result<Self, ConvertError>;
}

fn float_to_i64(f: f64) -> Option<i64> {
    if !f.is_finite() {
        return None;
    }
    let rounded = f.round_ties_even();
    // i64::MAX is not exactly representable as f64; the strict comparison
    // against the 2^63 boundary is exact.
    if rounded >= -(2f64.powi(63)) && rounded < 2f64.powi(63) {
        Some(rounded as i64)
    } else {
        None
    }
}

impl FromSqlValue for i64 {
    fn from_sql_value(value: &SqlValue) -> Result<Self, ConvertError> {
        match value {
            SqlValue::Null => Ok(0),
            SqlValue::Int(v) => Ok(*v),
            SqlValue::Float(f) => {
                float_to_i64(*f).ok_or_else(|| ConvertError::new(value, "i64"))
            }
            SqlValue::Bool(b) => Ok(i64::from(*b)),
            SqlValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ConvertError::new(value, "i64")),
            SqlValue::Bytes(_) => Err(ConvertError::new(value, "i64"))
        }
    }
}

macro_rules! narrow_from_sql_value {
    ($($ty:ty),+) => {
        $(
            impl FromSqlValue for $ty {
                fn from_sql_value(value: &SqlValue) -> Result<Self, ConvertError> {
                    let wide = i64::from_sql_value(value)
                        .map_err(|_| ConvertError::new(value, stringify!($ty)))?;
                    <$ty>::try_from(wide).map_err(|_| ConvertError::new(value, stringify!($ty)))
                }
            }
        )+
    };
}

narrow_from_sql_value!(i8, i16, i32, u8, u16, u32, u64);

impl FromSqlValue for f64 {
    fn from_sql_value(value: &SqlValue) -> Result<Self, ConvertError> {
        match value {
            SqlValue::Null => Ok(0.0),
            SqlValue::Float(f) => Ok(*f),
            SqlValue::Int(v) => Ok(*v as f64),
            SqlValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            SqlValue::Text(s) => s
                .trim()
                .parse()
                .map_err(|_| ConvertError::new(value, "f64")),
            SqlValue::Bytes(_) => Err(ConvertError::new(value, "f64"))
        }
    }
}

impl FromSqlValue for f32 {
    fn from_sql_value(value: &SqlValue) -> Result<Self, ConvertError> {
        f64::from_sql_value(value)
            .map(|f| f as f32)
            .map_err(|_| ConvertError::new(value, "f32"))
    }
}

impl FromSqlValue for bool {
    fn from_sql_value(value: &SqlValue) -> Result<Self, ConvertError> {
        match value {
            SqlValue::Null => Ok(false),
            SqlValue::Bool(b) => Ok(*b),
            SqlValue::Int(v) => Ok(*v != 0),
            SqlValue::Text(s) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("true") {
                    Ok(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Ok(false)
                } else {
                    Err(ConvertError::new(value, "bool"))
                }
            }
            _ => Err(ConvertError::new(value, "bool"))
        }
    }
}

impl FromSqlValue for String {
    fn from_sql_value(value: &SqlValue) -> Result<Self, ConvertError> {
        match value {
            SqlValue::Null => Ok(String::new()),
            SqlValue::Text(s) => Ok(s.clone()),
            SqlValue::Int(v) => Ok(v.to_string()),
            SqlValue::Float(f) => Ok(f.to_string()),
            SqlValue::Bool(b) => Ok(b.to_string()),
            SqlValue::Bytes(_) => Err(ConvertError::new(value, "String"))
        }
    }
}

impl FromSqlValue for Vec<u8> {
    fn from_sql_value(value: &SqlValue) -> Result<Self, ConvertError> {
        match value {
            SqlValue::Null => Ok(Vec::new()),
            SqlValue::Bytes(b) => Ok(b.clone()),
            _ => Err(ConvertError::new(value, "Vec<u8>"))
        }
    }
}

impl<T: FromSqlValue> FromSqlValue for Option<T> {
    fn from_sql_value(value: &SqlValue) -> Result<Self, ConvertError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_sql_value(value).map(Some)
        }
    }
}
