// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field kind mapping from Rust types.
//!
//! # Type Mapping Table
//!
//! | Rust Type | Field Kind | Notes |
//! |-----------|------------|-------|
//! | `i8`, `i16`, `i32`, `u8`, `u16` | `Integer` | |
//! | `i64`, `u32` | `BigInteger` | |
//! | `String`, `str` | `Text` | `max_length` from `#[column(max_length = N)]` |
//! | `bool` | `Boolean` | |
//! | `Uuid` | `Uuid` | |
//! | `Option<T>` | kind of `T` | Field may be blank |
//! | anything else | `Other` | |

use proc_macro2::TokenStream;
use quote::quote;
use syn::Type;

use super::parse::ColumnConfig;

/// Storage kind of a field as seen by the macro.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindHint {
    Integer,
    BigInteger,
    Text(Option<u32>),
    Boolean,
    Uuid,
    Other
}

impl KindHint {
    /// Map a field type.
    pub fn from_type(ty: &Type, column: &ColumnConfig) -> Self {
        if let Some(inner) = extract_option_inner(ty) {
            return Self::from_type(inner, column);
        }

        match type_path_string(ty).as_str() {
            "i8" | "i16" | "i32" | "u8" | "u16" => Self::Integer,
            "i64" | "u32" => Self::BigInteger,
            "String" | "str" | "std::string::String" => Self::Text(column.max_length),
            "bool" => Self::Boolean,
            "Uuid" | "uuid::Uuid" => Self::Uuid,
            _ => Self::Other
        }
    }

    /// `FieldKind` constructor expression.
    pub fn to_tokens(self) -> TokenStream {
        match self {
            Self::Integer => quote! { ::archivable::FieldKind::Integer },
            Self::BigInteger => quote! { ::archivable::FieldKind::BigInteger },
            Self::Text(Some(len)) => quote! {
                ::archivable::FieldKind::Text { max_length: ::core::option::Option::Some(#len) }
            },
            Self::Text(None) => quote! {
                ::archivable::FieldKind::Text { max_length: ::core::option::Option::None }
            },
            Self::Boolean => quote! { ::archivable::FieldKind::Boolean },
            Self::Uuid => quote! { ::archivable::FieldKind::Uuid },
            Self::Other => quote! { ::archivable::FieldKind::Other }
        }
    }
}

/// Extract the type path as a string.
fn type_path_string(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) => type_path
            .path
            .segments
            .iter()
            .map(|s| s.ident.to_string())
            .collect::<Vec<_>>()
            .join("::"),
        Type::Reference(reference) => type_path_string(&reference.elem),
        _ => String::new()
    }
}

/// Extract the inner type from `Option<T>`.
fn extract_option_inner(ty: &Type) -> Option<&Type> {
    if let Type::Path(type_path) = ty
        && let Some(segment) = type_path.path.segments.last()
        && segment.ident == "Option"
        && let syn::PathArguments::AngleBracketed(args) = &segment.arguments
        && let Some(syn::GenericArgument::Type(inner)) = args.args.first()
    {
        return Some(inner);
    }
    None
}
