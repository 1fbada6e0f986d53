// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! Error taxonomy for mapping and repository operations.
//!
//! Shape-resolution problems ("unsupported entity shape", "missing key
//! property") are compile errors emitted by `#[derive(Entity)]` and never
//! appear here. Everything at runtime is synchronous and result-based:
//! command text and parameters are fully constructed before any I/O, so a
//! half-built statement never escapes.

use thiserror::Error;

/// Errors produced by entity maps, the registry, and repositories.
#[derive(Debug, Error)]
pub enum Error {
    /// A mapping was requested for a type that was never registered.
    #[error("no entity map registered for type `{type_name}`")]
    NoMappingFound {
        /// Name of the requesting type.
        type_name: &'static str
    },

    /// An update was attempted on an entity whose map yields only the key.
    #[error(
        "entity map for `{type_name}` must provide at least one non-key parameter for update"
    )]
    NoNonKeyColumns {
        /// Name of the entity type.
        type_name: &'static str
    },

    /// A materializer asked for a column the row does not contain.
    #[error("row has no column named `{column}`")]
    MissingColumn {
        /// Requested column name.
        column: String
    },

    /// A row value could not be coerced to the target field type.
    #[error("cannot convert {found} value in column `{column}` to `{target}`")]
    Coercion {
        /// Column the value came from.
        column: String,

        /// Variant name of the offending value.
        found: &'static str,

        /// Name of the target type.
        target: &'static str
    },

    /// A failure from the connection or execution collaborator.
    ///
    /// Propagated unchanged; this layer performs no retries and swallows
    /// nothing.
    #[error(transparent)]
    Executor(#[from] Box<dyn std::error::Error + Send + Sync>)
}

impl Error {
    /// Wrap a collaborator failure.
    pub fn executor(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Executor(Box::new(source))
    }
}
