// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

//! # One crate, all features
//!
//! Re-exports:
//! - [`Entity`](macro@Entity) and [`SqlEnum`](macro@SqlEnum) derive macros
//!   from `rowmap-derive`
//! - All runtime types from `rowmap-core` ([`SqlRepository`], [`EntityMap`],
//!   [`SqlValue`], the dialects, the registry)

// Re-export all core types
pub use rowmap_core::*;
// Re-export derive macros
pub use rowmap_derive::{Entity, SqlEnum};
