// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! Row abstraction consumed by materializers.
//!
//! Executors hand each result row to the entity map as a [`Row`]: an ordered
//! list of `(column, value)` pairs with case-insensitive named lookup. The
//! order is the select list order; duplicate names resolve to the first
//! match, like the positional lookup of the usual database record APIs.

use crate::{
    convert::FromSqlValue,
    error::Error,
    value::{SqlValue, ToSqlValue}
};

/// One result row: ordered named columns.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Row {
    columns: Vec<(String, SqlValue)>
}

impl Row {
    /// Create an empty row.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Returns `self` for builder-style construction.
    pub fn with(mut self, column: impl Into<String>, value: impl ToSqlValue) -> Self {
        self.columns.push((column.into(), value.to_sql_value()));
        self
    }

    /// Number of columns in the row.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column value by name, case-insensitively.
    pub fn value(&self, column: &str) -> Option<&SqlValue> {
        self.columns
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(column))
            .map(|(_, value)| value)
    }

    /// Column value by position in the select list.
    pub fn value_at(&self, index: usize) -> Option<&SqlValue> {
        self.columns.get(index).map(|(_, value)| value)
    }

    /// Whether the named column holds SQL NULL.
    ///
    /// A missing column is not NULL; it is reported by [`Row::read`] as
    /// [`Error::MissingColumn`].
    pub fn is_null(&self, column: &str) -> bool {
        self.value(column).is_some_and(SqlValue::is_null)
    }

    /// Read and coerce the named column into `V`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] when no column matches the name, or
    /// [`Error::Coercion`] when the value has no conversion to `V`. The
    /// error names the column and the target type.
    pub fn read<V: FromSqlValue>(&self, column: &str) -> Result<V, Error> {
        let value = self.value(column).ok_or_else(|| Error::MissingColumn {
            column: column.to_string()
        })?;

        V::from_sql_value(value).map_err(|source| Error::Coercion {
            column: column.to_string(),
            found: source.found,
            target: source.target
        })
    }
}

impl FromIterator<(String, SqlValue)> for Row {
    fn from_iter<I: IntoIterator<Item = (String, SqlValue)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect()
        }
    }
}
