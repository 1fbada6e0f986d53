// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! Named SQL parameters.

use crate::value::{SqlValue, ToSqlValue};

/// A named SQL parameter and its value.
///
/// The name is whatever the command text expects; dialects normalize prefix
/// markers (`@`, `:`, `$`) before quoting or re-prefixing, so both `"Id"`
/// and `"@Id"` address the same parameter. [`SqlValue::Null`] passes
/// database NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct SqlParameterValue {
    /// Parameter name as expected by the command text.
    pub name: String,

    /// Parameter value.
    pub value: SqlValue
}

impl SqlParameterValue {
    /// Create a parameter from any value with a SQL representation.
    pub fn new(name: impl Into<String>, value: impl ToSqlValue) -> Self {
        Self {
            name: name.into(),
            value: value.to_sql_value()
        }
    }

    /// Create a NULL-valued parameter.
    pub fn null(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: SqlValue::Null
        }
    }
}
