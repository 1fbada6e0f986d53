// SPDX-FileCopyrightText: 2026 Rowmap Contributors
// SPDX-License-Identifier: MIT

//! `#[derive(SqlEnum)]` implementation.
//!
//! Maps a fieldless enum through its numeric storage representation:
//! `ToSqlValue` writes the discriminant as an integer, `FromSqlValue` first
//! coerces the row value to `i64` (so text or float storage still works via
//! the standard conversion table) and then matches the discriminant.
//!
//! Discriminants follow Rust semantics: explicit integer literals are
//! honored, implicit values continue from the previous variant, starting
//! at zero.

use proc_macro::TokenStream;
use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::quote;
use syn::{Data, DeriveInput, Expr, Fields, Ident, Lit, UnOp, parse_macro_input};

/// Main entry point for the SqlEnum derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match generate(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into()
    }
}

/// One enum variant with its resolved discriminant.
#[derive(Debug)]
struct EnumMember {
    ident: Ident,
    value: i64
}

fn discriminant_value(expr: &Expr) -> syn::Result<i64> {
    match expr {
        Expr::Lit(lit) => match &lit.lit {
            Lit::Int(int) => int.base10_parse(),
            _ => Err(syn::Error::new_spanned(
                lit,
                "SqlEnum discriminants must be integer literals"
            ))
        },
        Expr::Unary(unary) if matches!(unary.op, UnOp::Neg(_)) => {
            discriminant_value(&unary.expr).map(|value| -value)
        }
        _ => Err(syn::Error::new_spanned(
            expr,
            "SqlEnum discriminants must be integer literals"
        ))
    }
}

fn parse_members(input: &DeriveInput) -> syn::Result<Vec<EnumMember>> {
    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "SqlEnum can only be derived for enums"
            ));
        }
    };

    if variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "SqlEnum requires at least one variant"
        ));
    }

    let mut members = Vec::with_capacity(variants.len());
    let mut next = 0i64;

    for variant in variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "SqlEnum variants must not have fields"
            ));
        }

        let value = match &variant.discriminant {
            Some((_, expr)) => discriminant_value(expr)?,
            None => next
        };
        next = value + 1;

        members.push(EnumMember {
            ident: variant.ident.clone(),
            value
        });
    }

    Ok(members)
}

fn generate(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let members = parse_members(input)?;
    let ident = &input.ident;
    let type_name = ident.to_string();

    let to_arms = members.iter().map(|member| {
        let variant = &member.ident;
        let value = Literal::i64_suffixed(member.value);
        quote! { Self::#variant => #value }
    });

    let from_arms = members.iter().map(|member| {
        let variant = &member.ident;
        let value = Literal::i64_suffixed(member.value);
        quote! { #value => ::core::result::Result::Ok(Self::#variant) }
    });

    Ok(quote! {
        #[automatically_derived]
        impl ::rowmap_core::ToSqlValue for #ident {
            fn to_sql_value(&self) -> ::rowmap_core::SqlValue {
                ::rowmap_core::SqlValue::Int(match self { #(#to_arms),* })
            }
        }

        #[automatically_derived]
        impl ::rowmap_core::FromSqlValue for #ident {
            fn from_sql_value(
                value: &::rowmap_core::SqlValue
            ) -> ::core::result::Result<Self, ::rowmap_core::ConvertError> {
                let raw = <i64 as ::rowmap_core::FromSqlValue>::from_sql_value(value)
                    .map_err(|_| ::rowmap_core::ConvertError::new(value, #type_name))?;
                match raw {
                    #(#from_arms,)*
                    _ => ::core::result::Result::Err(
                        ::rowmap_core::ConvertError::new(value, #type_name)
                    )
                }
            }
        }
    })
}
