// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

//! # Attribute Quick Reference
//!
//! ## Entity-Level `#[entity(...)]`
//!
//! ```rust,ignore
//! #[derive(Entity)]
//! #[entity(
//!     table = "TestEntities", // Required: mapped table name
//!     key = "Id",             // Optional: key column (default: "Id")
//!     default                 // Optional: construct via Default + assignment
//! )]
//! pub struct TestEntity { /* ... */ }
//! ```
//!
//! ## Field-Level `#[column(...)]`
//!
//! ```rust,ignore
//! pub struct TestEntity {
//!     #[column(rename = "Id")]   // Column name override (default: field name)
//!     pub id: i64,
//!
//!     #[column(rename = "Name")]
//!     pub name: String,
//!
//!     #[column(skip)]            // Not mapped to any column
//!     pub cached_display: String,
//! }
//! ```
//!
//! # Shape Resolution
//!
//! The derive analyzes the struct once and either synthesizes a map or
//! fails with one of two diagnostics:
//!
//! - **unsupported entity shape** — not a named-field struct, no mapped
//!   fields, or skipped fields without the `default` construction strategy;
//! - **missing key property** — no mapped field matches the key column
//!   (matching is ASCII case-insensitive).
//!
//! Each diagnostic names the offending type, and a failing entity never
//! blocks resolution of the others.

use proc_macro::TokenStream;

mod entity;
mod sql_enum;

/// Derive an entity map for a named-field struct.
///
/// Generates `{Name}EntityMap` implementing `rowmap_core::EntityMap` and an
/// `impl rowmap_core::Entity` that publishes the map once per process.
///
/// See the [crate documentation](crate) for the attribute reference.
#[proc_macro_derive(Entity, attributes(entity, column))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    entity::derive(input)
}

/// Derive SQL value conversions for a fieldless enum.
///
/// The enum is stored as its integer discriminant: `ToSqlValue` writes the
/// discriminant, `FromSqlValue` converts the row value to `i64` first and
/// then to the member with that value. An unknown discriminant is a
/// coercion error.
///
/// ```rust,ignore
/// #[derive(SqlEnum, Clone, Copy, Debug, PartialEq)]
/// enum Status {
///     Draft = 0,
///     Published = 1,
///     Archived = 2,
/// }
/// ```
#[proc_macro_derive(SqlEnum)]
pub fn derive_sql_enum(input: TokenStream) -> TokenStream {
    sql_enum::derive(input)
}
