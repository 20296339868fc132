// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl Model` generation.
//!
//! # Generated Code
//!
//! ```rust,ignore
//! impl archivable::Model for Tag {
//!     const NAME: &'static str = "Tag";
//!
//!     fn meta() -> &'static ModelMeta {
//!         static META: OnceLock<ModelMeta> = OnceLock::new();
//!         META.get_or_init(|| {
//!             let meta = ModelMeta::new("Tag", "tags")
//!                 .with_field(FieldMeta::new("id", FieldKind::BigInteger).primary_key())
//!                 .with_field(FieldMeta::new("name", FieldKind::Text { .. }).unique());
//!             decorate(meta, &ArchiveConfig::new("archive_identifier"))
//!         })
//!     }
//!
//!     fn field_value(&self, field: &str) -> Option<Value> { /* by name */ }
//!     fn set_field_value(&mut self, field: &str, value: Value) -> Result<(), ValueError> { /* by name */ }
//! }
//! ```
//!
//! The archive marker is not declared in the metadata; decoration injects it
//! typed after the primary key. Parent layers are reached through
//! `parent.field` paths, and each parent's decorated compound constraints
//! are appended after decoration with their fields prefixed the same way,
//! so they already end with the parent's own marker.

use proc_macro2::TokenStream;
use quote::quote;

use super::{
    kind::KindHint,
    parse::{EntityDef, FieldDef}
};

/// Generates `impl Model` for the entity.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let ident = entity.name();
    let model_name = &entity.model_name;
    let table = &entity.table;
    let marker_name = entity.marker_field().name_str();

    let field_metas = entity.column_fields().map(|f| field_meta(entity, f));
    let constraints = entity.unique_together.iter().map(|constraint| {
        let names = constraint.iter().map(ToString::to_string);
        quote! { .with_unique_together([#(#names),*]) }
    });

    let getters = entity.accessible_fields().map(|f| {
        let name = f.name_str();
        let field = f.name();
        quote! {
            #name => ::core::option::Option::Some(
                ::archivable::Value::from(::core::clone::Clone::clone(&self.#field))
            ),
        }
    });
    let setters = entity.accessible_fields().map(|f| {
        let name = f.name_str();
        let field = f.name();
        let ty = f.ty();
        quote! {
            #name => self.#field = <#ty as ::archivable::FromValue>::from_value(value)?,
        }
    });

    let parent_constraints = entity.parent_fields().map(|f| {
        let ty = f.ty();
        let prefix = f.name_str();
        quote! {
            meta.unique_together.extend(
                <#ty as ::archivable::Model>::meta()
                    .unique_together
                    .iter()
                    .map(|constraint| {
                        constraint
                            .iter()
                            .map(|field| ::std::format!("{}.{}", #prefix, field))
                            .collect::<::std::vec::Vec<_>>()
                    })
            );
        }
    });

    let parent_getters = entity.parent_fields().map(|f| {
        let prefix = format!("{}.", f.name_str());
        let field = f.name();
        quote! {
            if let ::core::option::Option::Some(rest) = field.strip_prefix(#prefix) {
                return ::archivable::Model::field_value(&self.#field, rest);
            }
        }
    });
    let parent_setters = entity.parent_fields().map(|f| {
        let prefix = format!("{}.", f.name_str());
        let field = f.name();
        quote! {
            if let ::core::option::Option::Some(rest) = field.strip_prefix(#prefix) {
                return ::archivable::Model::set_field_value(&mut self.#field, rest, value);
            }
        }
    });

    quote! {
        impl ::archivable::Model for #ident {
            const NAME: &'static str = #model_name;

            fn meta() -> &'static ::archivable::ModelMeta {
                static META: ::std::sync::OnceLock<::archivable::ModelMeta> =
                    ::std::sync::OnceLock::new();
                META.get_or_init(|| {
                    let meta = ::archivable::ModelMeta::new(#model_name, #table)
                        #(.with_field(#field_metas))*
                        #(#constraints)*;
                    #[allow(unused_mut)]
                    let mut meta =
                        ::archivable::decorate(meta, &::archivable::ArchiveConfig::new(#marker_name));
                    #(#parent_constraints)*
                    meta
                })
            }

            fn field_value(&self, field: &str) -> ::core::option::Option<::archivable::Value> {
                #(#parent_getters)*
                match field {
                    #(#getters)*
                    _ => ::core::option::Option::None
                }
            }

            fn set_field_value(
                &mut self,
                field: &str,
                value: ::archivable::Value
            ) -> ::core::result::Result<(), ::archivable::ValueError> {
                #(#parent_setters)*
                match field {
                    #(#setters)*
                    _ => {
                        return ::core::result::Result::Err(
                            ::archivable::ValueError::UnknownField(
                                ::std::string::ToString::to_string(field)
                            )
                        );
                    }
                }
                ::core::result::Result::Ok(())
            }
        }
    }
}

/// `FieldMeta` builder expression for one field.
fn field_meta(entity: &EntityDef, field: &FieldDef) -> TokenStream {
    let name = field.name_str();
    let kind = KindHint::from_type(field.ty(), &field.column).to_tokens();

    let primary_key = (field.ident == entity.id_field().ident).then(|| quote! { .primary_key() });
    let unique = field.column.unique.then(|| quote! { .unique() });
    let editable = (!field.column.editable).then(|| quote! { .editable(false) });
    let blank = field.is_option().then(|| quote! { .blank() });

    quote! {
        ::archivable::FieldMeta::new(#name, #kind) #primary_key #unique #editable #blank
    }
}
