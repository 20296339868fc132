// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Hand-written entities for unit tests.
//!
//! These spell out what `#[derive(Archivable)]` generates, which keeps the
//! core crate's tests independent of the macro.

use std::sync::OnceLock;

use crate::{
    archivable::Archivable,
    decorate::{ArchiveConfig, decorate},
    model::{FieldKind, FieldMeta, Model, ModelMeta},
    value::{FromValue, Value, ValueError}
};

/// Integer-keyed entity with a unique name.
#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
    pub id:                 i64,
    pub name:               String,
    pub archive_identifier: i64
}

impl Tag {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id,
            name: name.to_owned(),
            archive_identifier: 0
        }
    }
}

impl Model for Tag {
    const NAME: &'static str = "Tag";

    fn meta() -> &'static ModelMeta {
        static META: OnceLock<ModelMeta> = OnceLock::new();
        META.get_or_init(|| {
            let meta = ModelMeta::new("Tag", "tags")
                .with_field(FieldMeta::new("id", FieldKind::BigInteger).primary_key())
                .with_field(
                    FieldMeta::new("name", FieldKind::Text {
                        max_length: Some(100)
                    })
                    .unique()
                );
            decorate(meta, &ArchiveConfig::default())
        })
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.clone().into()),
            "archive_identifier" => Some(self.archive_identifier.into()),
            _ => None
        }
    }

    fn set_field_value(&mut self, field: &str, value: Value) -> Result<(), ValueError> {
        match field {
            "id" => self.id = FromValue::from_value(value)?,
            "name" => self.name = FromValue::from_value(value)?,
            "archive_identifier" => self.archive_identifier = FromValue::from_value(value)?,
            _ => return Err(ValueError::UnknownField(field.to_owned()))
        }
        Ok(())
    }
}

impl Archivable for Tag {
    type Id = i64;

    const ARCHIVE_FIELD: &'static str = "archive_identifier";

    fn id(&self) -> &i64 {
        &self.id
    }

    fn archive_marker(&self) -> &i64 {
        &self.archive_identifier
    }

    fn set_archive_marker(&mut self, marker: i64) {
        self.archive_identifier = marker;
    }
}

/// Text-keyed entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Account {
    pub id:                 String,
    pub name:               String,
    pub archive_identifier: String
}

impl Account {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id:                 id.to_owned(),
            name:               name.to_owned(),
            archive_identifier: String::new()
        }
    }
}

impl Model for Account {
    const NAME: &'static str = "Account";

    fn meta() -> &'static ModelMeta {
        static META: OnceLock<ModelMeta> = OnceLock::new();
        META.get_or_init(|| {
            let meta = ModelMeta::new("Account", "accounts")
                .with_field(
                    FieldMeta::new("id", FieldKind::Text {
                        max_length: Some(10)
                    })
                    .primary_key()
                )
                .with_field(FieldMeta::new("name", FieldKind::Text {
                    max_length: None
                }));
            decorate(meta, &ArchiveConfig::default())
        })
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.clone().into()),
            "name" => Some(self.name.clone().into()),
            "archive_identifier" => Some(self.archive_identifier.clone().into()),
            _ => None
        }
    }

    fn set_field_value(&mut self, field: &str, value: Value) -> Result<(), ValueError> {
        match field {
            "id" => self.id = FromValue::from_value(value)?,
            "name" => self.name = FromValue::from_value(value)?,
            "archive_identifier" => self.archive_identifier = FromValue::from_value(value)?,
            _ => return Err(ValueError::UnknownField(field.to_owned()))
        }
        Ok(())
    }
}

impl Archivable for Account {
    type Id = String;

    const ARCHIVE_FIELD: &'static str = "archive_identifier";

    fn id(&self) -> &String {
        &self.id
    }

    fn archive_marker(&self) -> &String {
        &self.archive_identifier
    }

    fn set_archive_marker(&mut self, marker: String) {
        self.archive_identifier = marker;
    }
}

/// Base layer of [`Member`].
#[derive(Debug, Clone, PartialEq)]
pub struct Person {
    pub id:                 i64,
    pub name:               String,
    pub archive_identifier: i64
}

impl Model for Person {
    const NAME: &'static str = "Person";

    fn meta() -> &'static ModelMeta {
        static META: OnceLock<ModelMeta> = OnceLock::new();
        META.get_or_init(|| {
            let meta = ModelMeta::new("Person", "people")
                .with_field(FieldMeta::new("id", FieldKind::BigInteger).primary_key())
                .with_field(FieldMeta::new("name", FieldKind::Text {
                    max_length: None
                }));
            decorate(meta, &ArchiveConfig::default())
        })
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "name" => Some(self.name.clone().into()),
            "archive_identifier" => Some(self.archive_identifier.into()),
            _ => None
        }
    }

    fn set_field_value(&mut self, field: &str, value: Value) -> Result<(), ValueError> {
        match field {
            "id" => self.id = FromValue::from_value(value)?,
            "name" => self.name = FromValue::from_value(value)?,
            "archive_identifier" => self.archive_identifier = FromValue::from_value(value)?,
            _ => return Err(ValueError::UnknownField(field.to_owned()))
        }
        Ok(())
    }
}

impl Archivable for Person {
    type Id = i64;

    const ARCHIVE_FIELD: &'static str = "archive_identifier";

    fn id(&self) -> &i64 {
        &self.id
    }

    fn archive_marker(&self) -> &i64 {
        &self.archive_identifier
    }

    fn set_archive_marker(&mut self, marker: i64) {
        self.archive_identifier = marker;
    }
}

/// Layered entity extending [`Person`].
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    pub id:                 i64,
    pub person:             Person,
    pub role:               String,
    pub archive_identifier: i64
}

impl Member {
    pub fn new(id: i64, name: &str, role: &str) -> Self {
        Self {
            id,
            person: Person {
                id,
                name: name.to_owned(),
                archive_identifier: 0
            },
            role: role.to_owned(),
            archive_identifier: 0
        }
    }
}

impl Model for Member {
    const NAME: &'static str = "Member";

    fn meta() -> &'static ModelMeta {
        static META: OnceLock<ModelMeta> = OnceLock::new();
        META.get_or_init(|| {
            let meta = ModelMeta::new("Member", "members")
                .with_field(FieldMeta::new("id", FieldKind::BigInteger).primary_key())
                .with_field(FieldMeta::new("role", FieldKind::Text {
                    max_length: None
                }));
            decorate(meta, &ArchiveConfig::default())
        })
    }

    fn field_value(&self, field: &str) -> Option<Value> {
        match field {
            "id" => Some(self.id.into()),
            "role" => Some(self.role.clone().into()),
            "archive_identifier" => Some(self.archive_identifier.into()),
            _ => field
                .strip_prefix("person.")
                .and_then(|rest| self.person.field_value(rest))
        }
    }

    fn set_field_value(&mut self, field: &str, value: Value) -> Result<(), ValueError> {
        match field {
            "id" => self.id = FromValue::from_value(value)?,
            "role" => self.role = FromValue::from_value(value)?,
            "archive_identifier" => self.archive_identifier = FromValue::from_value(value)?,
            _ => match field.strip_prefix("person.") {
                Some(rest) => return self.person.set_field_value(rest, value),
                None => return Err(ValueError::UnknownField(field.to_owned()))
            }
        }
        Ok(())
    }
}

impl Archivable for Member {
    type Id = i64;

    const ARCHIVE_FIELD: &'static str = "archive_identifier";

    fn id(&self) -> &i64 {
        &self.id
    }

    fn archive_marker(&self) -> &i64 {
        &self.archive_identifier
    }

    fn set_archive_marker(&mut self, marker: i64) {
        self.archive_identifier = marker;
    }

    fn mark_archived(&mut self) {
        self.archive_identifier = self.id;
        self.person.mark_archived();
    }

    fn mark_restored(&mut self) {
        self.archive_identifier = 0;
        self.person.mark_restored();
    }

    fn archive_fields() -> Vec<String> {
        let mut fields = vec![Self::ARCHIVE_FIELD.to_owned()];
        fields.extend(
            Person::archive_fields()
                .into_iter()
                .map(|f| format!("person.{}", f))
        );
        fields
    }
}
