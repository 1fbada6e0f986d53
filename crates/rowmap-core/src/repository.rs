// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! SQL-backed repository over an entity map and a dialect.
//!
//! The repository holds an entity map, a dialect, and a command executor,
//! and is stateless beyond them. Command building is pure and synchronous;
//! only the delegated executor call performs I/O.

use std::any::type_name;

use futures::StreamExt;
use tracing::debug;

use crate::{
    dialect::{BracketDialect, SqlDialect},
    error::Error,
    executor::{CommandExecutor, RowStream},
    map::{Entity, EntityMap},
    param::SqlParameterValue,
    value::ToSqlValue
};

/// Key-based and raw-predicate access to one table through one entity map.
///
/// Create one per entity type per executor/dialect pairing; the map is
/// shared read-only with every other repository for the same entity.
///
/// # Example
///
/// ```rust,ignore
/// let repo: SqlRepository<User, _, _> =
///     SqlRepository::with_dialect(executor, PostgresDialect);
/// let user = repo.get_by_key(42i64).await?;
/// ```
pub struct SqlRepository<T: Entity, E, D = BracketDialect> {
    executor: E,
    dialect: D,
    map: &'static T::Map
}

impl<T: Entity, E: CommandExecutor> SqlRepository<T, E> {
    /// Create a repository with the default bracket-quoting dialect.
    pub fn new(executor: E) -> Self {
        Self::with_dialect(executor, BracketDialect)
    }
}

impl<T: Entity, E: CommandExecutor, D: SqlDialect> SqlRepository<T, E, D> {
    /// Create a repository with an explicit dialect.
    pub fn with_dialect(executor: E, dialect: D) -> Self {
        Self {
            executor,
            dialect,
            map: T::entity_map()
        }
    }

    /// The underlying executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// The shared entity map.
    pub fn map(&self) -> &'static T::Map {
        self.map
    }

    /// Retrieve the entity with the given key, or `None`.
    ///
    /// Consumes at most one row of the result stream; the stream is dropped
    /// immediately after, releasing the cursor.
    ///
    /// # Errors
    ///
    /// Materialization or executor failures.
    pub async fn get_by_key(&self, id: impl ToSqlValue + Send) -> Result<Option<T>, Error>
    where
        T: Send
    {
        let table = self.quote(self.map.table_name());
        let key = self.quote(self.map.key_column());
        let key_parameter = self.dialect.build_parameter_name(self.map.key_column());
        let command = format!("SELECT * FROM {table} WHERE {key} = {key_parameter}");
        debug!(command = %command, "get_by_key");

        let parameters = vec![SqlParameterValue::new(
            self.dialect.normalize_parameter_name(self.map.key_column()),
            id
        )];
        let map = self.map;
        let mut rows = self
            .executor
            .query(command, move |row| map.materialize(row), parameters);
        rows.next().await.transpose()
    }

    /// Query the table with an optional raw `WHERE` clause body.
    ///
    /// A `None` or whitespace-only clause selects the whole table. The
    /// clause is caller-supplied raw SQL; beyond parameter binding, clause
    /// safety is the caller's responsibility.
    pub fn query<'a>(
        &'a self,
        where_clause: Option<&str>,
        parameters: Vec<SqlParameterValue>
    ) -> RowStream<'a, T>
    where
        T: Send
    {
        let table = self.quote(self.map.table_name());
        let mut command = format!("SELECT * FROM {table}");
        if let Some(clause) = where_clause {
            if !clause.trim().is_empty() {
                command.push_str(" WHERE ");
                command.push_str(clause);
            }
        }
        debug!(command = %command, "query");

        let map = self.map;
        self.executor
            .query(command, move |row| map.materialize(row), parameters)
    }

    /// Insert an entity. Returns the provider's affected-row count.
    ///
    /// # Errors
    ///
    /// Executor failures.
    pub async fn insert(&self, entity: &T) -> Result<u64, Error> {
        let parameters = self.map.insert_parameters(entity);
        let command = self.insert_command(&parameters);
        debug!(command = %command, "insert");
        self.executor.execute(&command, &parameters).await
    }

    /// Update an entity by key. Returns the provider's affected-row count.
    ///
    /// # Errors
    ///
    /// [`Error::NoNonKeyColumns`] before any SQL is issued when the map
    /// yields only the key parameter; otherwise executor failures.
    pub async fn update(&self, entity: &T) -> Result<u64, Error> {
        let parameters = self.map.update_parameters(entity);
        let command = self.update_command(&parameters)?;
        debug!(command = %command, "update");
        self.executor.execute(&command, &parameters).await
    }

    /// Delete the entity with the given key. Returns the affected-row count.
    ///
    /// # Errors
    ///
    /// Executor failures.
    pub async fn delete_by_key(&self, id: impl ToSqlValue + Send) -> Result<u64, Error> {
        let table = self.quote(self.map.table_name());
        let key = self.quote(self.map.key_column());
        let key_parameter = self.dialect.build_parameter_name(self.map.key_column());
        let command = format!("DELETE FROM {table} WHERE {key} = {key_parameter}");
        debug!(command = %command, "delete_by_key");

        let parameters = vec![SqlParameterValue::new(
            self.dialect.normalize_parameter_name(self.map.key_column()),
            id
        )];
        self.executor.execute(&command, &parameters).await
    }

    fn insert_command(&self, parameters: &[SqlParameterValue]) -> String {
        let table = self.quote(self.map.table_name());
        let columns = parameters
            .iter()
            .map(|p| self.quote(self.dialect.normalize_parameter_name(&p.name)))
            .collect::<Vec<_>>()
            .join(", ");
        let values = parameters
            .iter()
            .map(|p| self.dialect.build_parameter_name(&p.name))
            .collect::<Vec<_>>()
            .join(", ");

        format!("INSERT INTO {table} ({columns}) VALUES ({values})")
    }

    fn update_command(&self, parameters: &[SqlParameterValue]) -> Result<String, Error> {
        let key_name = self.dialect.normalize_parameter_name(self.map.key_column());
        let mut assignments = Vec::new();

        for parameter in parameters {
            let name = self.dialect.normalize_parameter_name(&parameter.name);
            if name.eq_ignore_ascii_case(key_name) {
                continue;
            }
            assignments.push(format!(
                "{} = {}",
                self.quote(name),
                self.dialect.build_parameter_name(name)
            ));
        }

        if assignments.is_empty() {
            return Err(Error::NoNonKeyColumns {
                type_name: type_name::<T>()
            });
        }

        let table = self.quote(self.map.table_name());
        let key = self.quote(self.map.key_column());
        let key_parameter = self.dialect.build_parameter_name(self.map.key_column());
        Ok(format!(
            "UPDATE {table} SET {} WHERE {key} = {key_parameter}",
            assignments.join(", ")
        ))
    }

    fn quote(&self, identifier: &str) -> String {
        self.dialect.quote_identifier(identifier)
    }
}
