// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! Convenient re-exports.
//!
//! ```rust,ignore
//! use rowmap_core::prelude::*;
//! ```

pub use crate::{
    convert::FromSqlValue,
    dialect::{BracketDialect, PostgresDialect, SqlDialect, SqliteDialect},
    error::Error,
    executor::{CommandExecutor, ConnectionFactory, RowStream},
    map::{Entity, EntityMap},
    param::SqlParameterValue,
    repository::SqlRepository,
    row::Row,
    value::{SqlValue, ToSqlValue}
};
