// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Schema decoration: turning plain model metadata into archivable metadata.
//!
//! Decoration runs once per model, when its metadata is first built, and
//! performs two rewrites in order:
//!
//! 1. [`add_marker_field`] injects the archive marker field, typed after the
//!    primary key.
//! 2. [`widen_unique_constraints`] adds the marker to every uniqueness rule,
//!    so uniqueness only holds among rows sharing a marker value.
//!
//! The query-side and lifecycle halves of archiving live in
//! [`manager`](crate::manager) and [`repository`](crate::repository).
//!
//! # Example
//!
//! ```rust
//! use archivable_core::{ArchiveConfig, FieldKind, FieldMeta, ModelMeta, decorate};
//!
//! let meta = ModelMeta::new("Tag", "tags")
//!     .with_field(FieldMeta::new("id", FieldKind::BigInteger).primary_key())
//!     .with_field(FieldMeta::new("name", FieldKind::Text { max_length: Some(100) }).unique());
//!
//! let meta = decorate(meta, &ArchiveConfig::default());
//!
//! assert!(!meta.field("name").unwrap().unique);
//! assert_eq!(meta.unique_together, vec![vec!["name", "archive_identifier"]]);
//! ```

use crate::{
    model::{FieldKind, FieldMeta, ModelMeta},
    value::Value
};

/// Default name of the archive marker field.
pub const DEFAULT_MARKER_FIELD: &str = "archive_identifier";

/// Decoration settings.
///
/// The derive macro fills this from the struct's `#[archive_marker]` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveConfig {
    /// Name of the archive marker field.
    pub marker_field: String
}

impl ArchiveConfig {
    /// Config with a custom marker field name.
    pub fn new(marker_field: impl Into<String>) -> Self {
        Self {
            marker_field: marker_field.into()
        }
    }
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER_FIELD)
    }
}

/// Make model metadata archivable.
///
/// Never fails: metadata without a primary key gets a 64-bit integer marker.
pub fn decorate(mut meta: ModelMeta, config: &ArchiveConfig) -> ModelMeta {
    add_marker_field(&mut meta, &config.marker_field);
    widen_unique_constraints(&mut meta, &config.marker_field);

    tracing::debug!(
        model = %meta.name,
        marker = %config.marker_field,
        unique_together = ?meta.unique_together,
        "decorated model as archivable"
    );

    meta
}

/// Marker kind for a model, following its primary key.
///
/// | Primary key | Marker |
/// |-------------|--------|
/// | text, max length L | text, max length L |
/// | UUID | UUID |
/// | anything else, or none | 64-bit integer |
pub fn marker_kind(meta: &ModelMeta) -> FieldKind {
    match meta.primary_key().map(|pk| pk.kind) {
        Some(FieldKind::Text { max_length }) => FieldKind::Text { max_length },
        Some(FieldKind::Uuid) => FieldKind::Uuid,
        Some(_) => FieldKind::BigInteger,
        None => {
            tracing::debug!(model = %meta.name, "no primary key, using integer archive marker");
            FieldKind::BigInteger
        }
    }
}

/// Inject the archive marker field.
///
/// The field is non-editable, may be blank, and defaults to the
/// not-archived value of its kind. If a field with this name is already
/// present it is kept as is and only recorded as the marker.
pub fn add_marker_field(meta: &mut ModelMeta, name: &str) {
    if meta.field(name).is_none() {
        let kind = marker_kind(meta);
        let default = match kind {
            FieldKind::Text { .. } => Value::Text(String::new()),
            #[cfg(feature = "uuid")]
            FieldKind::Uuid => Value::Uuid(uuid::Uuid::nil()),
            #[cfg(not(feature = "uuid"))]
            FieldKind::Uuid => Value::Null,
            _ => Value::Int(0)
        };

        meta.fields.push(
            FieldMeta::new(name, kind)
                .editable(false)
                .blank()
                .with_default(default)
        );
    }

    meta.archive_field = Some(name.to_owned());
}

/// Add the archive marker to every uniqueness constraint.
///
/// - Each non-key `unique` field loses its own constraint and gains the
///   compound `(field, marker)`.
/// - Each compound constraint gets the marker appended.
///
/// Constraints that already end with the marker are kept unchanged, so
/// running this twice is harmless.
pub fn widen_unique_constraints(meta: &mut ModelMeta, name: &str) {
    let mut widened = Vec::new();

    for field in &mut meta.fields {
        if field.unique && !field.primary_key {
            field.unique = false;
            widened.push(vec![field.name.clone(), name.to_owned()]);
        }
    }

    for constraint in meta.unique_together.drain(..) {
        if constraint.last().map(String::as_str) == Some(name) {
            widened.push(constraint);
        } else {
            let mut constraint = constraint;
            constraint.push(name.to_owned());
            widened.push(constraint);
        }
    }

    meta.unique_together = widened;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn int_model() -> ModelMeta {
        ModelMeta::new("IntModel", "int_models")
            .with_field(FieldMeta::new("id", FieldKind::BigInteger).primary_key())
    }

    #[test]
    fn integer_key_gets_big_integer_marker() {
        let meta = decorate(int_model(), &ArchiveConfig::default());
        let marker = meta.field(DEFAULT_MARKER_FIELD).unwrap();
        assert_eq!(marker.kind, FieldKind::BigInteger);
        assert_eq!(marker.default, Some(Value::Int(0)));
        assert!(!marker.editable);
        assert!(marker.blank);
    }

    #[test]
    fn small_integer_key_still_gets_big_integer_marker() {
        let meta = ModelMeta::new("Small", "smalls")
            .with_field(FieldMeta::new("id", FieldKind::Integer).primary_key());
        let meta = decorate(meta, &ArchiveConfig::default());
        assert_eq!(
            meta.field(DEFAULT_MARKER_FIELD).map(|f| f.kind),
            Some(FieldKind::BigInteger)
        );
    }

    #[test]
    fn text_key_gets_text_marker_of_same_length() {
        let meta = ModelMeta::new("CharModel", "char_models").with_field(
            FieldMeta::new("id", FieldKind::Text { max_length: Some(10) }).primary_key()
        );
        let meta = decorate(meta, &ArchiveConfig::default());
        let marker = meta.field(DEFAULT_MARKER_FIELD).unwrap();
        assert_eq!(marker.kind, FieldKind::Text { max_length: Some(10) });
        assert_eq!(marker.max_length(), Some(10));
        assert_eq!(marker.default, Some(Value::Text(String::new())));
    }

    #[test]
    fn missing_key_falls_back_to_big_integer() {
        let mut meta = ModelMeta::new("NoKey", "no_keys");
        add_marker_field(&mut meta, "pk_archive");
        assert_eq!(
            meta.field("pk_archive").map(|f| f.kind),
            Some(FieldKind::BigInteger)
        );
        assert_eq!(meta.archive_field.as_deref(), Some("pk_archive"));
    }

    #[test]
    fn marker_is_added_once() {
        let config = ArchiveConfig::default();
        let meta = decorate(decorate(int_model(), &config), &config);
        let count = meta
            .fields
            .iter()
            .filter(|f| f.name == DEFAULT_MARKER_FIELD)
            .count();
        assert_eq!(count, 1);
    }

    #[test]
    fn unique_field_becomes_compound() {
        let meta = int_model().with_field(
            FieldMeta::new("name", FieldKind::Text { max_length: Some(100) }).unique()
        );
        let meta = decorate(meta, &ArchiveConfig::default());
        assert!(!meta.field("name").unwrap().unique);
        assert!(meta.field("id").unwrap().primary_key);
        assert_eq!(meta.unique_together, vec![vec![
            "name".to_string(),
            DEFAULT_MARKER_FIELD.to_string()
        ]]);
    }

    #[test]
    fn primary_key_keeps_its_uniqueness() {
        let meta = ModelMeta::new("M", "m")
            .with_field(FieldMeta::new("id", FieldKind::BigInteger).primary_key().unique());
        let meta = decorate(meta, &ArchiveConfig::default());
        assert!(meta.field("id").unwrap().unique);
        assert!(meta.unique_together.is_empty());
    }

    #[test]
    fn compound_constraint_gains_marker() {
        let meta = int_model()
            .with_field(FieldMeta::new("name", FieldKind::Text { max_length: Some(100) }))
            .with_field(FieldMeta::new("other_name", FieldKind::Text { max_length: Some(100) }))
            .with_unique_together(["name", "other_name"]);
        let meta = decorate(meta, &ArchiveConfig::default());

        let plain = vec!["name".to_string(), "other_name".to_string()];
        let widened = vec![
            "name".to_string(),
            "other_name".to_string(),
            DEFAULT_MARKER_FIELD.to_string()
        ];
        assert!(!meta.unique_together.contains(&plain));
        assert!(meta.unique_together.contains(&widened));
    }

    #[test]
    fn redecoration_does_not_double_widen() {
        let config = ArchiveConfig::default();
        let meta = int_model()
            .with_field(FieldMeta::new("a", FieldKind::Integer))
            .with_field(FieldMeta::new("b", FieldKind::Integer))
            .with_unique_together(["a", "b"]);
        let once = decorate(meta, &config);
        let twice = decorate(once.clone(), &config);
        assert_eq!(once.unique_together, twice.unique_together);
    }

    #[test]
    fn marker_in_the_middle_still_widens() {
        let meta = int_model()
            .with_field(FieldMeta::new("a", FieldKind::Integer))
            .with_unique_together([DEFAULT_MARKER_FIELD, "a"]);
        let meta = decorate(meta, &ArchiveConfig::default());
        assert_eq!(meta.unique_together, vec![vec![
            DEFAULT_MARKER_FIELD.to_string(),
            "a".to_string(),
            DEFAULT_MARKER_FIELD.to_string()
        ]]);
    }

    #[test]
    fn custom_marker_name() {
        let meta = decorate(int_model(), &ArchiveConfig::new("archived_as"));
        assert!(meta.field("archived_as").is_some());
        assert!(meta.field(DEFAULT_MARKER_FIELD).is_none());
        assert_eq!(meta.archive_field.as_deref(), Some("archived_as"));
    }
}
