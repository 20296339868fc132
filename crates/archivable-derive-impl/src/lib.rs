// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Internal proc-macro implementation for `archivable`.
//!
//! Use the `archivable` crate instead: generated code refers to
//! `::archivable` paths and does not compile against this crate alone.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod entity;
mod utils;

use proc_macro::TokenStream;

/// Derive macro making an entity archivable (soft-deletable).
///
/// # Overview
///
/// Generates `impl Model` and `impl Archivable` for a struct with named
/// fields. The model metadata is decorated on first use: the archive marker
/// field is registered typed after the primary key, and every uniqueness
/// constraint is widened to include the marker.
///
/// # Entity Attributes
///
/// | Attribute | Required | Default | Description |
/// |-----------|----------|---------|-------------|
/// | `#[archivable(table = "...")]` | No | snake-case plural of the struct | Table name |
/// | `#[archivable(name = "...")]` | No | struct name | Model name in events |
/// | `#[unique_together(a, b)]` | No | none | Compound unique constraint; repeatable |
///
/// # Field Attributes
///
/// | Attribute | Description |
/// |-----------|-------------|
/// | `#[id]` | Primary key. Falls back to a field named `id`. |
/// | `#[archive_marker]` | Archive marker. Falls back to a field named `archive_identifier`. |
/// | `#[archive_parent]` | Embedded parent layer; must itself be `Archivable`. |
/// | `#[column(unique)]` | Single-field unique constraint. |
/// | `#[column(max_length = N)]` | Text length; a text key passes it on to the marker. |
/// | `#[column(editable = false)]` | Left out of form validation. |
/// | `#[column(skip)]` | Not part of the model; no by-name access. |
///
/// Every field that is not skipped or a parent must convert to and from
/// `archivable::Value`: `bool`, integers up to 32 bits, `i64`, `String`,
/// `Uuid`, or an `Option` of those.
///
/// # Marker Type
///
/// | Key type | Marker type |
/// |----------|-------------|
/// | `i16`, `i32`, `i64`, `u16`, `u32` | `i64` |
/// | `String` | `String` |
/// | `Uuid` (feature `uuid`) | `Uuid` |
///
/// A marker field of any other type is a compile error.
///
/// # Examples
///
/// ## Basic Usage
///
/// ```rust,ignore
/// use archivable::Archivable;
///
/// #[derive(Debug, Clone, Archivable)]
/// #[archivable(table = "tags")]
/// pub struct Tag {
///     #[id]
///     pub id: i64,
///
///     #[column(unique, max_length = 100)]
///     pub name: String,
///
///     #[archive_marker]
///     pub archive_identifier: i64,
/// }
/// ```
///
/// ## Layers
///
/// ```rust,ignore
/// #[derive(Debug, Clone, Archivable)]
/// pub struct Member {
///     pub id: i64,
///
///     #[archive_parent]
///     pub person: Person,
///
///     pub role: String,
///     pub archive_identifier: i64,
/// }
///
/// // Archiving a member marks both layers:
/// // Member::archive_fields() == ["archive_identifier", "person.archive_identifier"]
/// ```
///
/// # Errors
///
/// Expansion fails for enums, tuple structs, generic structs, structs
/// without a resolvable key or marker field, and `#[unique_together]`
/// naming unknown fields.
#[proc_macro_derive(
    Archivable,
    attributes(archivable, id, column, archive_marker, archive_parent, unique_together)
)]
pub fn derive_archivable(input: TokenStream) -> TokenStream {
    entity::derive(input)
}
