// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity definition parsing.
//!
//! [`EntityDef`] is the single structure every generator receives. It is
//! built from the struct's darling-parsed attributes, its field
//! definitions, and its `#[unique_together(...)]` lists, and it resolves
//! which fields play the key and marker roles.
//!
//! # Role Resolution
//!
//! | Role | Explicit | Fallback |
//! |------|----------|----------|
//! | Primary key | `#[id]` | field named `id` |
//! | Archive marker | `#[archive_marker]` | field named `archive_identifier` |
//!
//! Both roles are required; a struct with neither the attribute nor the
//! fallback name is rejected at expansion time.

mod attrs;

use darling::FromDeriveInput;
use syn::{Attribute, DeriveInput, Ident, punctuated::Punctuated};

use self::attrs::EntityAttrs;
use super::field::FieldDef;
use crate::utils::naming::default_table;

/// Fallback name of the primary key field.
const ID_FIELD: &str = "id";

/// Fallback name of the archive marker field.
const MARKER_FIELD: &str = "archive_identifier";

/// Complete parsed entity definition.
#[derive(Debug)]
pub struct EntityDef {
    /// Struct identifier (e.g., `Tag`).
    pub ident: Ident,

    /// Model name reported at runtime.
    pub model_name: String,

    /// Table name.
    pub table: String,

    /// All field definitions, in declaration order.
    pub fields: Vec<FieldDef>,

    /// Compound uniqueness constraints.
    pub unique_together: Vec<Vec<Ident>>,

    id_field_index: usize,

    marker_field_index: usize
}

impl EntityDef {
    /// Parse entity definition from syn's `DeriveInput`.
    ///
    /// # Errors
    ///
    /// - Applied to non-struct, tuple struct, or generic struct
    /// - No primary key or archive marker field
    /// - Duplicate `#[id]` or `#[archive_marker]`
    /// - `#[unique_together]` naming unknown fields
    pub fn from_derive_input(input: &DeriveInput) -> darling::Result<Self> {
        let attrs = EntityAttrs::from_derive_input(input)?;

        if !attrs.generics.params.is_empty() {
            return Err(darling::Error::custom(
                "Archivable cannot be derived for generic structs"
            )
            .with_span(&attrs.ident));
        }

        let fields: Vec<FieldDef> = match &input.data {
            syn::Data::Struct(data) => match &data.fields {
                syn::Fields::Named(named) => named
                    .named
                    .iter()
                    .map(FieldDef::from_field)
                    .collect::<darling::Result<Vec<_>>>()?,
                _ => {
                    return Err(darling::Error::custom("Archivable requires named fields")
                        .with_span(&input.ident));
                }
            },
            _ => {
                return Err(
                    darling::Error::custom("Archivable can only be derived for structs")
                        .with_span(&input.ident)
                );
            }
        };

        let id_field_index = resolve_role(
            &fields,
            &input.ident,
            FieldDef::is_id,
            ID_FIELD,
            "#[id]",
            "a primary key"
        )?;
        let marker_field_index = resolve_role(
            &fields,
            &input.ident,
            FieldDef::is_marker,
            MARKER_FIELD,
            "#[archive_marker]",
            "an archive marker field"
        )?;

        if id_field_index == marker_field_index {
            return Err(darling::Error::custom(
                "the primary key cannot also be the archive marker"
            )
            .with_span(&fields[id_field_index].ident));
        }

        let unique_together = parse_unique_together(&input.attrs, &fields)?;
        let name = attrs.ident.to_string();

        Ok(Self {
            table: attrs.table.unwrap_or_else(|| default_table(&name)),
            model_name: attrs.name.unwrap_or(name),
            ident: attrs.ident,
            fields,
            unique_together,
            id_field_index,
            marker_field_index
        })
    }

    /// Get the struct identifier.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the primary key field.
    #[must_use]
    pub fn id_field(&self) -> &FieldDef {
        &self.fields[self.id_field_index]
    }

    /// Get the archive marker field.
    #[must_use]
    pub fn marker_field(&self) -> &FieldDef {
        &self.fields[self.marker_field_index]
    }

    /// Fields declared in the model metadata.
    ///
    /// The marker is left out: decoration injects it typed after the key.
    pub fn column_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields
            .iter()
            .filter(|f| f.is_accessible() && f.ident != self.marker_field().ident)
    }

    /// Fields readable and writable by name, marker included.
    pub fn accessible_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_accessible())
    }

    /// Embedded parent layers.
    pub fn parent_fields(&self) -> impl Iterator<Item = &FieldDef> {
        self.fields.iter().filter(|f| f.is_parent())
    }

    /// Check if the entity has parent layers.
    #[must_use]
    pub fn has_parents(&self) -> bool {
        self.parent_fields().next().is_some()
    }
}

/// Find the field playing a role, by attribute first and then by name.
fn resolve_role(
    fields: &[FieldDef],
    ident: &Ident,
    explicit: fn(&FieldDef) -> bool,
    fallback: &str,
    attr: &str,
    what: &str
) -> darling::Result<usize> {
    let mut marked = fields
        .iter()
        .enumerate()
        .filter(|(_, f)| explicit(f))
        .map(|(i, _)| i);

    let index = match (marked.next(), marked.next()) {
        (Some(_), Some(second)) => {
            return Err(darling::Error::custom(format!("only one field may have {}", attr))
                .with_span(&fields[second].ident));
        }
        (Some(index), None) => index,
        (None, _) => fields
            .iter()
            .position(|f| f.ident == fallback && !f.is_parent())
            .ok_or_else(|| {
                darling::Error::custom(format!(
                    "Archivable requires {}: mark a field with {} or name it `{}`",
                    what, attr, fallback
                ))
                .with_span(ident)
            })?
    };

    if fields[index].is_skipped() {
        return Err(
            darling::Error::custom(format!("{} cannot be skipped", what))
                .with_span(&fields[index].ident)
        );
    }

    Ok(index)
}

/// Parse every `#[unique_together(a, b, ...)]` attribute.
fn parse_unique_together(
    attrs: &[Attribute],
    fields: &[FieldDef]
) -> darling::Result<Vec<Vec<Ident>>> {
    let mut errors = darling::Error::accumulator();
    let mut constraints = Vec::new();

    for attr in attrs.iter().filter(|a| a.path().is_ident("unique_together")) {
        let parsed = attr.parse_args_with(Punctuated::<Ident, syn::Token![,]>::parse_terminated);
        let names: Vec<Ident> = match parsed {
            Ok(names) => names.into_iter().collect(),
            Err(err) => {
                errors.push(err.into());
                continue;
            }
        };

        if names.is_empty() {
            errors.push(
                darling::Error::custom("unique_together needs at least one field").with_span(attr)
            );
            continue;
        }

        for name in &names {
            if !fields.iter().any(|f| f.is_accessible() && f.ident == *name) {
                errors.push(
                    darling::Error::custom(format!("unknown field `{}` in unique_together", name))
                        .with_span(name)
                );
            }
        }

        constraints.push(names);
    }

    errors.finish_with(constraints)
}
