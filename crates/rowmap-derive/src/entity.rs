// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! `#[derive(Entity)]` implementation.
//!
//! ```text
//! entity/
//! ├── parse.rs   — shape resolution (attributes, fields, strategy)
//! └── codegen.rs — mapping synthesis (EntityMap + Entity impls)
//! ```

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

pub mod codegen;
pub mod parse;

/// Main entry point for the Entity derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match parse::EntityDef::from_derive_input(&input) {
        Ok(entity) => codegen::generate(&entity).into(),
        Err(err) => err.write_errors().into()
    }
}
