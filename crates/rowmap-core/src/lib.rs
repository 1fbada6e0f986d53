// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

//! # Architecture
//!
//! ```text
//! #[derive(Entity)]            (rowmap-derive)
//!        │ generates
//!        ▼
//! EntityMap<T> ──┬── SqlRepository<T, E, D> ──► CommandExecutor (yours)
//!                │          │
//!                │          └── SqlDialect (Bracket / Postgres / Sqlite)
//!                └── registry (TypeId → &'static dyn EntityMap<T>)
//! ```
//!
//! The entity map is synthesized once per entity type and published as an
//! immutable `&'static` value; every repository built from it shares it
//! read-only. Command text is fully constructed before any I/O is attempted,
//! so a half-built statement never reaches an executor.

pub mod convert;
pub mod dialect;
pub mod error;
pub mod executor;
pub mod map;
pub mod param;
pub mod prelude;
pub mod registry;
pub mod repository;
pub mod row;
pub mod value;

/// Re-export for generated code and manual trait implementations.
pub use async_trait::async_trait;
pub use convert::{ConvertError, FromSqlValue};
pub use dialect::{BracketDialect, PostgresDialect, SqlDialect, SqliteDialect};
pub use error::Error;
pub use executor::{CommandExecutor, ConnectionFactory, RowStream};
pub use map::{Entity, EntityMap};
pub use param::SqlParameterValue;
pub use repository::SqlRepository;
pub use row::Row;
pub use value::{SqlValue, ToSqlValue};
