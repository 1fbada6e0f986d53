// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! Mapping synthesis: generated `EntityMap` and `Entity` impls.
//!
//! For an entity `User`, the derive emits:
//!
//! ```rust,ignore
//! pub struct UserEntityMap;
//!
//! impl ::rowmap_core::EntityMap<User> for UserEntityMap { /* ... */ }
//!
//! impl ::rowmap_core::Entity for User {
//!     type Map = UserEntityMap;
//!     fn entity_map() -> &'static UserEntityMap { /* OnceLock */ }
//! }
//! ```
//!
//! The map is a unit struct; all mapping data is baked in as literals, so
//! sharing it is free and construction through the `OnceLock` publishes an
//! immutable value exactly once per process.

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

use super::parse::{ConstructionStrategy, EntityDef};

/// Generate all code for a resolved entity shape.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let ident = &entity.ident;
    let vis = &entity.vis;
    let map_ident = format_ident!("{ident}EntityMap");
    let table = &entity.table;
    let key_column = &entity.key_column;
    let key_field = &entity.key_field().ident;

    let columns: Vec<&str> = entity.mapped_fields().map(|f| f.column.as_str()).collect();

    let parameters = entity.mapped_fields().map(|field| {
        let column = &field.column;
        let ident = &field.ident;
        quote! {
            ::rowmap_core::SqlParameterValue::new(
                #column,
                ::rowmap_core::ToSqlValue::to_sql_value(&entity.#ident)
            )
        }
    });

    let materialize_body = match entity.strategy {
        ConstructionStrategy::Literal => {
            let reads = entity.mapped_fields().map(|field| {
                let ident = &field.ident;
                let column = &field.column;
                quote! { #ident: row.read(#column)? }
            });
            quote! {
                ::core::result::Result::Ok(#ident { #(#reads),* })
            }
        }
        ConstructionStrategy::DefaultAssign => {
            let assigns = entity.mapped_fields().map(|field| {
                let ident = &field.ident;
                let column = &field.column;
                quote! { entity.#ident = row.read(#column)?; }
            });
            quote! {
                let mut entity = <#ident as ::core::default::Default>::default();
                #(#assigns)*
                ::core::result::Result::Ok(entity)
            }
        }
    };

    let map_doc = format!("Generated entity map for [`{ident}`].");

    quote! {
        #[doc = #map_doc]
        #[derive(Debug)]
        #vis struct #map_ident;

        #[automatically_derived]
        impl ::rowmap_core::EntityMap<#ident> for #map_ident {
            fn table_name(&self) -> &str {
                #table
            }

            fn key_column(&self) -> &str {
                #key_column
            }

            fn writable_columns(&self) -> &[&str] {
                &[#(#columns),*]
            }

            fn key(&self, entity: &#ident) -> ::rowmap_core::SqlValue {
                ::rowmap_core::ToSqlValue::to_sql_value(&entity.#key_field)
            }

            fn insert_parameters(
                &self,
                entity: &#ident
            ) -> ::std::vec::Vec<::rowmap_core::SqlParameterValue> {
                ::std::vec![#(#parameters),*]
            }

            fn update_parameters(
                &self,
                entity: &#ident
            ) -> ::std::vec::Vec<::rowmap_core::SqlParameterValue> {
                self.insert_parameters(entity)
            }

            fn materialize(
                &self,
                row: &::rowmap_core::Row
            ) -> ::core::result::Result<#ident, ::rowmap_core::Error> {
                #materialize_body
            }
        }

        #[automatically_derived]
        impl ::rowmap_core::Entity for #ident {
            type Map = #map_ident;

            fn entity_map() -> &'static #map_ident {
                static MAP: ::std::sync::OnceLock<#map_ident> = ::std::sync::OnceLock::new();
                MAP.get_or_init(|| #map_ident)
            }
        }
    }
}
