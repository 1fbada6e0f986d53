// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! Entity map traits.
//!
//! An entity map is the immutable product of shape analysis: it knows the
//! table, the key column, the writable column set, and how to move values
//! between an entity instance and a row. `#[derive(Entity)]` synthesizes one
//! map type per entity; both traits can also be implemented by hand for
//! shapes the derive cannot express.

use std::fmt;

use crate::{error::Error, param::SqlParameterValue, row::Row, value::SqlValue};

/// Table and materialization mapping for an entity type.
///
/// Implementations are stateless or internally immutable and shared
/// read-only by every repository built from them.
pub trait EntityMap<T>: Send + Sync {
    /// Mapped table name.
    fn table_name(&self) -> &str;

    /// Mapped key column name.
    fn key_column(&self) -> &str;

    /// Writable column names, in field declaration order.
    fn writable_columns(&self) -> &[&str];

    /// Key value of an entity instance.
    fn key(&self, entity: &T) -> SqlValue;

    /// Insert parameters: one per writable column, declaration order, key
    /// included.
    fn insert_parameters(&self, entity: &T) -> Vec<SqlParameterValue>;

    /// Update parameters: the same set as insert, key included.
    ///
    /// Excluding the key from the SET clause is the repository's job, not
    /// the map's.
    fn update_parameters(&self, entity: &T) -> Vec<SqlParameterValue>;

    /// Reconstruct an entity from a row.
    ///
    /// # Errors
    ///
    /// [`Error::MissingColumn`] or [`Error::Coercion`] when a required
    /// column is absent or cannot be coerced to the field type.
    fn materialize(&self, row: &Row) -> Result<T, Error>;
}

impl<T> fmt::Debug for dyn EntityMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EntityMap")
            .field("table_name", &self.table_name())
            .finish_non_exhaustive()
    }
}

/// An entity type with a synthesized map.
///
/// Implemented by `#[derive(Entity)]`. The map is constructed at most once
/// per process and published as an immutable `&'static` value; lookups after
/// publication are plain reads.
pub trait Entity: Sized + 'static {
    /// The map type synthesized for this entity.
    type Map: EntityMap<Self> + 'static;

    /// The process-wide map instance for this entity type.
    fn entity_map() -> &'static Self::Map;
}
