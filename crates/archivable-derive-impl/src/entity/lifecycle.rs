// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `impl Archivable` generation.
//!
//! The marker accessors are typed `MarkerOf<Self>`, so a marker field whose
//! type does not match the key's marker type fails to compile at the
//! accessor.
//!
//! For layered entities the lifecycle methods are overridden to walk every
//! `#[archive_parent]` after the entity's own marker:
//!
//! ```rust,ignore
//! fn mark_archived(&mut self) {
//!     self.archive_identifier = self.id.to_marker();
//!     Archivable::mark_archived(&mut self.person);
//! }
//!
//! fn archive_fields() -> Vec<String> {
//!     // ["archive_identifier", "person.archive_identifier"]
//! }
//! ```

use proc_macro2::TokenStream;
use quote::quote;

use super::parse::EntityDef;

/// Generates `impl Archivable` for the entity.
pub fn generate(entity: &EntityDef) -> TokenStream {
    let ident = entity.name();
    let id = entity.id_field().name();
    let id_ty = entity.id_field().ty();
    let marker = entity.marker_field().name();
    let marker_name = entity.marker_field().name_str();
    let layered = generate_layered(entity);

    quote! {
        impl ::archivable::Archivable for #ident {
            type Id = #id_ty;

            const ARCHIVE_FIELD: &'static str = #marker_name;

            fn id(&self) -> &Self::Id {
                &self.#id
            }

            fn archive_marker(&self) -> &::archivable::MarkerOf<Self> {
                &self.#marker
            }

            fn set_archive_marker(&mut self, marker: ::archivable::MarkerOf<Self>) {
                self.#marker = marker;
            }

            #layered
        }
    }
}

/// Lifecycle overrides that also walk parent layers.
fn generate_layered(entity: &EntityDef) -> TokenStream {
    if !entity.has_parents() {
        return TokenStream::new();
    }

    let id = entity.id_field().name();
    let marker = entity.marker_field().name();
    let parents: Vec<_> = entity.parent_fields().map(|f| f.name()).collect();
    let parent_fields = entity.parent_fields().map(|f| {
        let ty = f.ty();
        let name = f.name_str();
        quote! {
            fields.extend(
                <#ty as ::archivable::Archivable>::archive_fields()
                    .into_iter()
                    .map(|f| ::std::format!("{}.{}", #name, f))
            );
        }
    });

    quote! {
        fn mark_archived(&mut self) {
            self.#marker = ::archivable::ArchiveIdentity::to_marker(&self.#id);
            #(::archivable::Archivable::mark_archived(&mut self.#parents);)*
        }

        fn mark_restored(&mut self) {
            self.#marker =
                <::archivable::MarkerOf<Self> as ::archivable::ArchiveMarker>::not_archived();
            #(::archivable::Archivable::mark_restored(&mut self.#parents);)*
        }

        fn archive_fields() -> ::std::vec::Vec<::std::string::String> {
            let mut fields = ::std::vec![::std::string::ToString::to_string(Self::ARCHIVE_FIELD)];
            #(#parent_fields)*
            fields
        }
    }
}
