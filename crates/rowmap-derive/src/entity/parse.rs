// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! Entity shape resolution.
//!
//! Parses `#[entity(...)]` and `#[column(...)]` attributes with darling and
//! resolves the struct into an [`EntityDef`]: table and key metadata, the
//! mapped column set in declaration order, the key field, and a
//! construction strategy.
//!
//! # Construction strategy
//!
//! | Strategy | Selected when |
//! |----------|---------------|
//! | [`Literal`](ConstructionStrategy::Literal) | every field is column-backed |
//! | [`DefaultAssign`](ConstructionStrategy::DefaultAssign) | fields are skipped and the struct opted in with `#[entity(default)]` |
//!
//! The struct literal is preferred: it reads one value per field and needs
//! no `Default` impl. Skipping fields removes that option, so the entity
//! must declare the fallback explicitly or fail as an unsupported shape.

use darling::{FromDeriveInput, FromField};
use syn::{DeriveInput, Ident, Visibility};

/// Key column used when `#[entity(key = "...")]` is omitted.
const DEFAULT_KEY_COLUMN: &str = "Id";

/// Entity-level attributes parsed from `#[entity(...)]`.
///
/// Internal darling struct; the public API is [`EntityDef`].
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(entity))]
struct EntityAttrs {
    ident: Ident,

    vis: Visibility,

    /// Mapped table name. Required.
    table: String,

    /// Mapped key column name.
    ///
    /// `None` when omitted; the `"Id"` default is substituted only then, so
    /// an explicitly empty value can be rejected.
    #[darling(default)]
    key: Option<String>,

    /// Opt-in to the `Default`-then-assign construction strategy.
    #[darling(default)]
    default: bool
}

/// Field-level attributes parsed from `#[column(...)]`.
#[derive(Debug, FromField)]
#[darling(attributes(column))]
struct ColumnAttrs {
    ident: Option<Ident>,

    /// Column name override. Defaults to the field identifier, verbatim.
    #[darling(default)]
    rename: Option<String>,

    /// Exclude the field from mapping entirely.
    #[darling(default)]
    skip: bool
}

/// One field of the entity struct.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Mapped column name.
    pub column: String,

    /// Whether the field is excluded from mapping.
    pub skip: bool
}

impl FieldDef {
    fn from_field(field: &syn::Field) -> darling::Result<Self> {
        let attrs = ColumnAttrs::from_field(field)?;
        let ident = attrs.ident.ok_or_else(|| {
            darling::Error::custom("entity fields must be named").with_span(field)
        })?;
        let column = attrs
            .rename
            .unwrap_or_else(|| ident.to_string());

        Ok(Self {
            ident,
            column,
            skip: attrs.skip
        })
    }
}

/// How `materialize` constructs an entity instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionStrategy {
    /// Struct literal: one value read per field.
    Literal,

    /// `Default::default()` followed by one assignment per mapped field.
    DefaultAssign
}

/// Resolved entity shape.
///
/// This is the data structure handed to the code generator. Field order is
/// declaration order and is preserved everywhere downstream: writable
/// columns, parameter lists, materialization reads.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier.
    pub ident: Ident,

    /// Struct visibility, propagated to the generated map type.
    pub vis: Visibility,

    /// Mapped table name.
    pub table: String,

    /// Mapped key column name.
    pub key_column: String,

    /// Chosen construction strategy.
    pub strategy: ConstructionStrategy,

    /// All struct fields, including skipped ones, in declaration order.
    pub fields: Vec<FieldDef>,

    /// Index of the key field in `fields`. Valid by construction.
    key_field_index: usize
}

fn unsupported_shape(ident: &Ident, detail: &str) -> darling::Error {
    darling::Error::custom(format!(
        "unsupported entity shape: `{ident}` {detail}"
    ))
    .with_span(ident)
}

impl EntityDef {
    /// Resolve the entity shape from a derive input.
    ///
    /// # Errors
    ///
    /// - "unsupported entity shape" — not a non-generic named-field struct,
    ///   no mapped fields, or skipped fields without `#[entity(default)]`;
    /// - "missing key property" — no mapped field matches the key column;
    /// - empty/whitespace-only `table`, or an explicitly supplied
    ///   empty/whitespace-only `key`;
    /// - any darling attribute error.
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let named = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named,
                _ => {
                    return Err(unsupported_shape(
                        &input.ident,
                        "must be a struct with named fields"
                    ));
                }
            },
            _ => {
                return Err(unsupported_shape(
                    &input.ident,
                    "must be a struct with named fields"
                ));
            }
        };

        if !input.generics.params.is_empty() {
            return Err(unsupported_shape(
                &input.ident,
                "must not have generic parameters"
            ));
        }

        let attrs = EntityAttrs::from_derive_input(input)?;

        if attrs.table.trim().is_empty() {
            return Err(
                darling::Error::custom("entity table name must not be empty or whitespace")
                    .with_span(&input.ident)
            );
        }

        let key_column = match attrs.key {
            Some(key) => {
                if key.trim().is_empty() {
                    return Err(darling::Error::custom(
                        "entity key column must not be empty or whitespace"
                    )
                    .with_span(&input.ident));
                }
                key
            }
            None => DEFAULT_KEY_COLUMN.to_string()
        };

        let fields: Vec<FieldDef> = named
            .named
            .iter()
            .map(FieldDef::from_field)
            .collect::<darling::Result<Vec<_>>>()?;

        if !fields.iter().any(|f| !f.skip) {
            return Err(unsupported_shape(&input.ident, "has no mapped fields"));
        }

        let key_field_index = fields
            .iter()
            .position(|f| !f.skip && f.column.eq_ignore_ascii_case(&key_column))
            .ok_or_else(|| {
                darling::Error::custom(format!(
                    "missing key property: `{}` is mapped to key column `{}`, but no field \
                     matches it",
                    input.ident, key_column
                ))
                .with_span(&input.ident)
            })?;

        let strategy = if fields.iter().all(|f| !f.skip) {
            ConstructionStrategy::Literal
        } else if attrs.default {
            ConstructionStrategy::DefaultAssign
        } else {
            return Err(unsupported_shape(
                &input.ident,
                "skips fields without a default construction strategy; add `#[entity(default)]`"
            ));
        };

        Ok(Self {
            ident: attrs.ident,
            vis: attrs.vis,
            table: attrs.table,
            key_column,
            strategy,
            fields,
            key_field_index
        })
    }

    /// Fields participating in mapping, declaration order.
    pub fn mapped_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| !f.skip)
    }

    /// The key field. Guaranteed to exist and be mapped.
    pub fn key_field(&self) -> &FieldDef {
        &self.fields[self.key_field_index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(input: syn::DeriveInput) -> darling::Result<EntityDef> {
        EntityDef::from_derive_input(&input)
    }

    #[test]
    fn resolves_basic_shape() {
        let entity = resolve(syn::parse_quote! {
            #[entity(table = "TestEntities")]
            pub struct TestEntity {
                #[column(rename = "Id")]
                pub id: i64,
                #[column(rename = "Name")]
                pub name: String,
            }
        })
        .unwrap();

        assert_eq!(entity.table, "TestEntities");
        assert_eq!(entity.key_column, "Id");
        assert_eq!(entity.strategy, ConstructionStrategy::Literal);
        let columns: Vec<&str> = entity.mapped_fields().map(|f| f.column.as_str()).collect();
        assert_eq!(columns, ["Id", "Name"]);
        assert_eq!(entity.key_field().ident.to_string(), "id");
    }

    #[test]
    fn key_match_is_case_insensitive() {
        let entity = resolve(syn::parse_quote! {
            #[entity(table = "T", key = "ID")]
            struct E {
                id: i64,
            }
        })
        .unwrap();

        assert_eq!(entity.key_column, "ID");
        assert_eq!(entity.key_field().column, "id");
    }

    #[test]
    fn explicit_key_column() {
        let entity = resolve(syn::parse_quote! {
            #[entity(table = "T", key = "Code")]
            struct E {
                #[column(rename = "Code")]
                code: String,
                label: String,
            }
        })
        .unwrap();

        assert_eq!(entity.key_field().ident.to_string(), "code");
    }

    #[test]
    fn rejects_empty_table() {
        let err = resolve(syn::parse_quote! {
            #[entity(table = "   ")]
            struct E {
                id: i64,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("table name must not be empty"));
    }

    #[test]
    fn rejects_explicit_empty_key() {
        let err = resolve(syn::parse_quote! {
            #[entity(table = "T", key = "")]
            struct E {
                id: i64,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("key column must not be empty"));
    }

    #[test]
    fn default_key_substituted_only_when_omitted() {
        let entity = resolve(syn::parse_quote! {
            #[entity(table = "T")]
            struct E {
                #[column(rename = "Id")]
                id: i64,
            }
        })
        .unwrap();
        assert_eq!(entity.key_column, "Id");
    }

    #[test]
    fn missing_key_is_reported() {
        let err = resolve(syn::parse_quote! {
            #[entity(table = "T", key = "Uuid")]
            struct Keyless {
                id: i64,
            }
        })
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("missing key property"));
        assert!(msg.contains("Keyless"));
        assert!(msg.contains("Uuid"));
    }

    #[test]
    fn skipped_key_does_not_count() {
        let err = resolve(syn::parse_quote! {
            #[entity(table = "T", default)]
            struct E {
                #[column(skip)]
                id: i64,
                name: String,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("missing key property"));
    }

    #[test]
    fn rejects_tuple_struct() {
        let err = resolve(syn::parse_quote! {
            #[entity(table = "T")]
            struct Pair(i64, String);
        })
        .unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("unsupported entity shape"));
        assert!(msg.contains("Pair"));
    }

    #[test]
    fn rejects_enum() {
        let err = resolve(syn::parse_quote! {
            #[entity(table = "T")]
            enum Nope {
                A,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("unsupported entity shape"));
    }

    #[test]
    fn rejects_generic_struct() {
        let err = resolve(syn::parse_quote! {
            #[entity(table = "T")]
            struct Wrapper<T> {
                id: i64,
                inner: T,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("unsupported entity shape"));
    }

    #[test]
    fn rejects_all_fields_skipped() {
        let err = resolve(syn::parse_quote! {
            #[entity(table = "T", default)]
            struct E {
                #[column(skip)]
                id: i64,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("has no mapped fields"));
    }

    #[test]
    fn skip_without_default_is_unsupported() {
        let err = resolve(syn::parse_quote! {
            #[entity(table = "T")]
            struct E {
                id: i64,
                #[column(skip)]
                cached: String,
            }
        })
        .unwrap_err();
        assert!(err.to_string().contains("unsupported entity shape"));
        assert!(err.to_string().contains("#[entity(default)]"));
    }

    #[test]
    fn skip_with_default_selects_default_assign() {
        let entity = resolve(syn::parse_quote! {
            #[entity(table = "T", default)]
            struct E {
                id: i64,
                #[column(skip)]
                cached: String,
            }
        })
        .unwrap();

        assert_eq!(entity.strategy, ConstructionStrategy::DefaultAssign);
        let columns: Vec<&str> = entity.mapped_fields().map(|f| f.column.as_str()).collect();
        assert_eq!(columns, ["id"]);
    }

    #[test]
    fn literal_preferred_even_with_default_flag() {
        let entity = resolve(syn::parse_quote! {
            #[entity(table = "T", default)]
            struct E {
                id: i64,
            }
        })
        .unwrap();
        assert_eq!(entity.strategy, ConstructionStrategy::Literal);
    }
}
