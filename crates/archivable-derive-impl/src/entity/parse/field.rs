// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Field-level attribute parsing.
//!
//! - [`column`]: Column options (`unique`, `max_length`, `editable`, `skip`)
//! - [`storage`]: Field role (`#[id]`, `#[archive_marker]`,
//!   `#[archive_parent]`)
//!
//! # Architecture
//!
//! ```text
//! field.rs (coordinator)
//! ├── column.rs   - Column configuration
//! └── storage.rs  - Storage role
//! ```

mod column;
mod storage;

pub use column::ColumnConfig;
pub use storage::StorageConfig;
use syn::{Field, Ident, Type};

/// Field definition with all parsed attributes.
#[derive(Debug)]
pub struct FieldDef {
    /// Field identifier.
    pub ident: Ident,

    /// Field type.
    pub ty: Type,

    /// Column options.
    pub column: ColumnConfig,

    /// Storage role.
    pub storage: StorageConfig
}

impl FieldDef {
    /// Parse field definition from syn's `Field`.
    ///
    /// # Errors
    ///
    /// - Unnamed (tuple struct) field
    /// - Malformed `#[column(...)]`
    /// - More than one of `#[id]`, `#[archive_marker]`, `#[archive_parent]`
    pub fn from_field(field: &Field) -> darling::Result<Self> {
        let ident = field.ident.clone().ok_or_else(|| {
            darling::Error::custom("Archivable fields must be named").with_span(field)
        })?;

        let mut column = ColumnConfig::default();
        let mut storage = StorageConfig::default();
        let mut errors = darling::Error::accumulator();

        for attr in &field.attrs {
            if attr.path().is_ident("id") {
                storage.is_id = true;
            } else if attr.path().is_ident("archive_marker") {
                storage.is_marker = true;
            } else if attr.path().is_ident("archive_parent") {
                storage.is_parent = true;
            } else if attr.path().is_ident("column")
                && let Err(err) = column.merge_attr(attr)
            {
                errors.push(err.into());
            }
        }

        if storage.role_count() > 1 {
            errors.push(
                darling::Error::custom(
                    "a field can have only one of #[id], #[archive_marker], #[archive_parent]"
                )
                .with_span(&ident)
            );
        }

        errors.finish_with(Self {
            ident,
            ty: field.ty.clone(),
            column,
            storage
        })
    }

    /// Get the field name as an identifier.
    #[must_use]
    pub fn name(&self) -> &Ident {
        &self.ident
    }

    /// Get the field name as a string.
    #[must_use]
    pub fn name_str(&self) -> String {
        self.ident.to_string()
    }

    /// Get the field type.
    #[must_use]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    /// Check if the type is `Option<T>`.
    #[must_use]
    pub fn is_option(&self) -> bool {
        if let Type::Path(type_path) = &self.ty
            && let Some(segment) = type_path.path.segments.last()
        {
            return segment.ident == "Option";
        }
        false
    }

    /// Check if `#[id]` is present.
    #[must_use]
    pub fn is_id(&self) -> bool {
        self.storage.is_id
    }

    /// Check if `#[archive_marker]` is present.
    #[must_use]
    pub fn is_marker(&self) -> bool {
        self.storage.is_marker
    }

    /// Check if this field embeds a parent layer.
    #[must_use]
    pub fn is_parent(&self) -> bool {
        self.storage.is_parent
    }

    /// Check if the field is left out of the model.
    #[must_use]
    pub fn is_skipped(&self) -> bool {
        self.column.skip
    }

    /// Check if the field is readable and writable by name.
    #[must_use]
    pub fn is_accessible(&self) -> bool {
        !self.is_parent() && !self.is_skipped()
    }
}
