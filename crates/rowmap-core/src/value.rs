// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! Dynamic SQL value model.
//!
//! Everything an entity map reads from or writes to a database travels as a
//! [`SqlValue`]. The variant set is deliberately small: the integer family
//! collapses to `i64`, floats to `f64`. Narrowing back out happens in
//! [`FromSqlValue`](crate::convert::FromSqlValue) with explicit range checks.

/// A dynamically typed SQL value.
///
/// [`SqlValue::Null`] denotes SQL `NULL`; there is no separate "absent"
/// state.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// SQL NULL.
    Null,

    /// Boolean value.
    Bool(bool),

    /// Integer value. All integer widths are stored as `i64`.
    Int(i64),

    /// Floating-point value. Stored as `f64`.
    Float(f64),

    /// Text value.
    Text(String),

    /// Raw byte blob.
    Bytes(Vec<u8>)
}

impl SqlValue {
    /// Check whether this value is SQL NULL.
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Human-readable name of the value's variant.
    ///
    /// Used in coercion error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "boolean",
            Self::Int(_) => "integer",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::Bytes(_) => "bytes"
        }
    }
}

/// Conversion of an application value into a [`SqlValue`].
///
/// Implemented for the primitive types an entity field may hold. The derive
/// macro calls this when building parameter lists; `Option<T>` maps `None`
/// to [`SqlValue::Null`].
pub trait ToSqlValue {
    /// Convert a borrowed value into its SQL representation.
    fn to_sql_value(&self) -> SqlValue;
}

impl ToSqlValue for SqlValue {
    fn to_sql_value(&self) -> SqlValue {
        self.clone()
    }
}

impl ToSqlValue for bool {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Bool(*self)
    }
}

macro_rules! int_to_sql_value {
    ($($ty:ty),+) => {
        $(
            impl ToSqlValue for $ty {
                fn to_sql_value(&self) -> SqlValue {
                    SqlValue::Int(i64::from(*self))
                }
            }
        )+
    };
}

int_to_sql_value!(i8, i16, i32, i64, u8, u16, u32);

impl ToSqlValue for f32 {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Float(f64::from(*self))
    }
}

impl ToSqlValue for f64 {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Float(*self)
    }
}

impl ToSqlValue for String {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Text(self.clone())
    }
}

impl ToSqlValue for &str {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Text((*self).to_string())
    }
}

impl ToSqlValue for Vec<u8> {
    fn to_sql_value(&self) -> SqlValue {
        SqlValue::Bytes(self.clone())
    }
}

impl<T: ToSqlValue> ToSqlValue for Option<T> {
    fn to_sql_value(&self) -> SqlValue {
        match self {
            Some(value) => value.to_sql_value(),
            None => SqlValue::Null
        }
    }
}

impl<T: ToSqlValue + ?Sized> ToSqlValue for &T {
    fn to_sql_value(&self) -> SqlValue {
        (*self).to_sql_value()
    }
}
