// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! External collaborator interfaces: connections and command execution.
//!
//! This crate builds command text; it never performs I/O. Providers
//! implement these traits over their transport of choice. The contract
//! callers rely on:
//!
//! - every operation acquires its own scoped connection and releases it on
//!   every exit path, including early drop and cancellation;
//! - queries yield rows lazily, one at a time, without buffering the result
//!   set; dropping the stream stops row production and releases the cursor;
//! - no two operations share a connection instance.

use async_trait::async_trait;
use futures::stream::BoxStream;

use crate::{error::Error, param::SqlParameterValue, row::Row};

/// A lazily produced stream of materialized query results.
pub type RowStream<'a, T> = BoxStream<'a, Result<T, Error>>;

/// Opens scoped database connections.
#[async_trait]
pub trait ConnectionFactory: Send + Sync {
    /// Provider connection handle.
    type Connection: Send;

    /// Open a connection.
    ///
    /// # Errors
    ///
    /// Any transport failure, propagated unchanged.
    async fn open_connection(&self) -> Result<Self::Connection, Error>;
}

/// Executes commands and queries built by a repository.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute a non-query command.
    ///
    /// # Errors
    ///
    /// Any provider failure (I/O, constraint violation, timeout),
    /// propagated unchanged.
    async fn execute(
        &self,
        command_text: &str,
        parameters: &[SqlParameterValue]
    ) -> Result<u64, Error>;

    /// Execute a query, applying `materialize` to each row.
    ///
    /// Rows are produced one at a time; the materializer's failure for a row
    /// surfaces as that stream item.
    fn query<'a, T, F>(
        &'a self,
        command_text: String,
        materialize: F,
        parameters: Vec<SqlParameterValue>
    ) -> RowStream<'a, T>
    where
        T: Send + 'a,
        F: Fn(&Row) -> Result<T, Error> + Send + Sync + 'a;
}
