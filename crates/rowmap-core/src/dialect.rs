// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! SQL dialects: identifier quoting and parameter naming.
//!
//! A dialect is a stateless rule set. Command text must be byte-for-byte
//! stable per dialect, so the rules are deliberately minimal:
//!
//! | Dialect | Identifier | Parameter |
//! |-----------------|------------|-----------|
//! | [`BracketDialect`] | `[x]`   | `@x`      |
//! | [`PostgresDialect`] | `"x"`  | `@x`      |
//! | [`SqliteDialect`] | `"x"`    | `@x`      |
//!
//! Quoting performs no escaping of embedded delimiters; identifiers come
//! from entity metadata, not user input, and callers own their safety.

/// SQL syntax customization points for a provider dialect.
pub trait SqlDialect: Send + Sync {
    /// Quote a table or column identifier.
    fn quote_identifier(&self, identifier: &str) -> String;

    /// Strip parameter prefix markers (`@`, `:`, `$`) from the front of a
    /// name, repeatedly, until none remain.
    fn normalize_parameter_name<'a>(&self, name: &'a str) -> &'a str {
        name.trim_start_matches(['@', ':', '$'])
    }

    /// Build the dialect-formatted parameter name: `@` plus the normalized
    /// name. Idempotent.
    fn build_parameter_name(&self, name: &str) -> String {
        format!("@{}", self.normalize_parameter_name(name))
    }
}

/// Bracket-quoting dialect (`[identifier]`), the default.
///
/// Matches SQL Server style quoting.
#[derive(Debug, Clone, Copy, Default)]
pub struct BracketDialect;

impl SqlDialect for BracketDialect {
    fn quote_identifier(&self, identifier: &str) -> String {
        format!("[{identifier}]")
    }
}

/// PostgreSQL dialect: double-quoted identifiers, `@` parameters.
///
/// `@`-prefixed parameters match the default binding behavior of the common
/// PostgreSQL client libraries that accept named parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct PostgresDialect;

impl SqlDialect for PostgresDialect {
    fn quote_identifier(&self, identifier: &str) -> String {
        format!("\"{identifier}\"")
    }
}

/// SQLite dialect: double-quoted identifiers, `@` parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteDialect;

impl SqlDialect for SqliteDialect {
    fn quote_identifier(&self, identifier: &str) -> String {
        format!("\"{identifier}\"")
    }
}
