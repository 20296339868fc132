// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Column-level configuration from `#[column(...)]`.
//!
//! # Supported Attributes
//!
//! | Attribute | Example | Effect |
//! |-----------|---------|--------|
//! | `unique` | `#[column(unique)]` | Single-field unique constraint |
//! | `max_length` | `#[column(max_length = 100)]` | Text length bound |
//! | `editable` | `#[column(editable = false)]` | Hidden from forms |
//! | `skip` | `#[column(skip)]` | Not persisted, no by-name access |

use syn::{Attribute, Meta};

/// Column-level configuration.
///
/// Several `#[column(...)]` attributes on one field are merged.
#[derive(Debug, Clone)]
pub struct ColumnConfig {
    /// UNIQUE constraint on this column.
    pub unique: bool,

    /// Maximum text length.
    pub max_length: Option<u32>,

    /// Whether forms may edit the field.
    pub editable: bool,

    /// Field is not part of the persisted model.
    pub skip: bool
}

impl Default for ColumnConfig {
    fn default() -> Self {
        Self {
            unique:     false,
            max_length: None,
            editable:   true,
            skip:       false
        }
    }
}

impl ColumnConfig {
    /// Merge options from a `#[column(...)]` attribute.
    ///
    /// # Errors
    ///
    /// Unknown options and malformed values.
    pub fn merge_attr(&mut self, attr: &Attribute) -> syn::Result<()> {
        let Meta::List(meta_list) = &attr.meta else {
            return Err(syn::Error::new_spanned(
                attr,
                "expected #[column(...)] with a list of options"
            ));
        };

        meta_list.parse_nested_meta(|meta| {
            if meta.path.is_ident("unique") {
                self.unique = true;
            } else if meta.path.is_ident("skip") {
                self.skip = true;
            } else if meta.path.is_ident("max_length") {
                let _: syn::Token![=] = meta.input.parse()?;
                let value: syn::LitInt = meta.input.parse()?;
                self.max_length = Some(value.base10_parse()?);
            } else if meta.path.is_ident("editable") {
                let _: syn::Token![=] = meta.input.parse()?;
                let value: syn::LitBool = meta.input.parse()?;
                self.editable = value.value;
            } else {
                return Err(meta.error("unsupported column option"));
            }
            Ok(())
        })
    }
}
