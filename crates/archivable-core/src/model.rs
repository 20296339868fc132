// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Model metadata.
//!
//! [`ModelMeta`] describes an entity's persisted shape: its fields, which one
//! is the primary key, and its uniqueness constraints. It is the structure
//! [`decorate`](crate::decorate()) rewrites when an entity becomes archivable,
//! and the structure stores and forms consult to enforce uniqueness.
//!
//! # Architecture
//!
//! ```text
//! ModelMeta
//! ├── name: String                   (e.g., "Article")
//! ├── table: String                  (e.g., "articles")
//! ├── fields: Vec<FieldMeta>
//! │   └── FieldMeta
//! │       ├── name, kind             (FieldKind)
//! │       ├── primary_key, unique
//! │       └── editable, blank, default
//! ├── unique_together: Vec<Vec<String>>
//! └── archive_field: Option<String>  (set by decoration)
//! ```

use crate::value::{Value, ValueError};

/// Storage kind of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FieldKind {
    /// 16/32-bit integer.
    Integer,

    /// 64-bit integer.
    BigInteger,

    /// Text with an optional maximum length.
    Text {
        /// Maximum length in characters, if bounded.
        max_length: Option<u32>
    },

    /// Boolean.
    Boolean,

    /// UUID.
    Uuid,

    /// Anything else; opaque to this crate.
    Other
}

impl FieldKind {
    /// Check if this kind stores text.
    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text { .. })
    }

    /// Maximum length for text kinds.
    pub const fn max_length(&self) -> Option<u32> {
        match self {
            Self::Text { max_length } => *max_length,
            _ => None
        }
    }
}

/// Metadata for a single field.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldMeta {
    /// Field (column) name.
    pub name: String,

    /// Storage kind.
    pub kind: FieldKind,

    /// Whether this is the primary key.
    pub primary_key: bool,

    /// Whether the field carries its own UNIQUE constraint.
    pub unique: bool,

    /// Whether data-entry forms may edit the field.
    pub editable: bool,

    /// Whether the field may be left empty in forms.
    pub blank: bool,

    /// Value assigned when nothing else is given.
    pub default: Option<Value>
}

impl FieldMeta {
    /// Create a plain editable field.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            primary_key: false,
            unique: false,
            editable: true,
            blank: false,
            default: None
        }
    }

    /// Mark as primary key.
    #[must_use]
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self
    }

    /// Mark as unique.
    #[must_use]
    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    /// Set whether forms may edit the field.
    #[must_use]
    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Allow blank values.
    #[must_use]
    pub fn blank(mut self) -> Self {
        self.blank = true;
        self
    }

    /// Set the default value.
    #[must_use]
    pub fn with_default(mut self, value: impl Into<Value>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Maximum text length, if any.
    pub const fn max_length(&self) -> Option<u32> {
        self.kind.max_length()
    }
}

/// Persisted shape of an entity type.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ModelMeta {
    /// Model name, usually the struct name.
    pub name: String,

    /// Table name.
    pub table: String,

    /// Fields in declaration order.
    pub fields: Vec<FieldMeta>,

    /// Compound uniqueness constraints.
    pub unique_together: Vec<Vec<String>>,

    /// Name of the archive marker field once decorated.
    pub archive_field: Option<String>
}

impl ModelMeta {
    /// Create metadata with no fields.
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: table.into(),
            ..Self::default()
        }
    }

    /// Append a field.
    #[must_use]
    pub fn with_field(mut self, field: FieldMeta) -> Self {
        self.fields.push(field);
        self
    }

    /// Append a compound uniqueness constraint.
    #[must_use]
    pub fn with_unique_together<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        self.unique_together
            .push(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldMeta> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Look up a field by name, mutably.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut FieldMeta> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// The primary key field, if one is declared.
    pub fn primary_key(&self) -> Option<&FieldMeta> {
        self.fields.iter().find(|f| f.primary_key)
    }

    /// Check if the model has been made archivable.
    pub fn is_archivable(&self) -> bool {
        self.archive_field.is_some()
    }

    /// Every uniqueness rule the model enforces.
    ///
    /// The primary key and each `unique` field form single-column
    /// constraints, followed by the compound ones.
    pub fn unique_constraints(&self) -> Vec<Vec<String>> {
        self.fields
            .iter()
            .filter(|f| f.primary_key || f.unique)
            .map(|f| vec![f.name.clone()])
            .chain(self.unique_together.iter().cloned())
            .collect()
    }
}

/// A persisted entity type with metadata and by-name field access.
///
/// Usually implemented by `#[derive(Archivable)]`. Field names may be
/// dotted paths (`base.archive_identifier`) addressing fields of a parent
/// layer; see [`Archivable`](crate::Archivable).
pub trait Model: Sized + Send + Sync + 'static {
    /// Model name reported in events and logs.
    const NAME: &'static str;

    /// Effective metadata of the model.
    ///
    /// For archivable entities this is the decorated metadata.
    fn meta() -> &'static ModelMeta;

    /// Read a field by name.
    ///
    /// Returns `None` for unknown fields.
    fn field_value(&self, field: &str) -> Option<Value>;

    /// Write a field by name.
    ///
    /// # Errors
    ///
    /// - [`ValueError::UnknownField`] if no such field exists
    /// - [`ValueError::TypeMismatch`] or [`ValueError::OutOfRange`] if the
    ///   value does not fit the field
    fn set_field_value(&mut self, field: &str, value: Value) -> Result<(), ValueError>;

    /// Primary key value, if the model declares one.
    fn pk_value(&self) -> Option<Value> {
        Self::meta()
            .primary_key()
            .and_then(|pk| self.field_value(&pk.name))
    }
}

/// Check if two distinct rows collide on a uniqueness constraint.
///
/// Rows with the same primary key are the same row and never collide. A
/// `NULL` or missing value on any constrained field disables the check, as
/// SQL unique constraints do.
pub fn unique_clash<E: Model>(candidate: &E, other: &E, fields: &[String]) -> bool {
    if candidate.pk_value().is_some() && candidate.pk_value() == other.pk_value() {
        return false;
    }
    fields.iter().all(|field| {
        match (candidate.field_value(field), other.field_value(field)) {
            (Some(a), Some(b)) => !a.is_null() && a == b,
            _ => false
        }
    })
}
