// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Data-entry form validation for archivable entities.
//!
//! A form normally skips uniqueness checks that touch a field it does not
//! edit. The archive marker is never on a form and never editable, so under
//! that rule every widened constraint would silently go unchecked.
//! [`ModelForm`] keeps the marker out of the exclusion set, which makes
//! `(name, archive_identifier)` style constraints validate like any other.
//!
//! # Example
//!
//! ```rust,ignore
//! let form = ModelForm::<Tag>::new(["name"]);
//! assert!(!form.validation_exclusions().contains(&"archive_identifier".to_string()));
//!
//! let existing = repo.objects().query();
//! form.validate_unique(&candidate, &repo.fetch(existing).await?)?;
//! ```

use std::marker::PhantomData;

use crate::model::{Model, unique_clash};

/// A single failed form check.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Another record already holds these values.
    #[error("{model} with this {} already exists", fields.join(" and "))]
    Unique {
        /// Model name.
        model:  &'static str,
        /// Fields of the violated constraint.
        fields: Vec<String>
    }
}

/// Every failed check of one validation run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} validation error(s)", .0.len())]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    /// Failed checks in constraint order.
    pub fn errors(&self) -> &[ValidationError] {
        &self.0
    }
}

/// A data-entry form bound to entity type `E`.
#[derive(Debug, Clone)]
pub struct ModelForm<E> {
    fields:  Option<Vec<String>>,
    exclude: Vec<String>,
    _entity: PhantomData<fn() -> E>
}

impl<E: Model> ModelForm<E> {
    /// Form editing the given fields.
    pub fn new<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>
    {
        Self {
            fields:  Some(fields.into_iter().map(Into::into).collect()),
            exclude: Vec::new(),
            _entity: PhantomData
        }
    }

    /// Form editing every field of the model.
    pub fn all_fields() -> Self {
        Self {
            fields:  None,
            exclude: Vec::new(),
            _entity: PhantomData
        }
    }

    /// Drop a field from the form.
    #[must_use]
    pub fn exclude(mut self, field: impl Into<String>) -> Self {
        self.exclude.push(field.into());
        self
    }

    fn is_on_form(&self, name: &str) -> bool {
        self.fields
            .as_ref()
            .is_none_or(|fields| fields.iter().any(|f| f == name))
    }

    /// Fields left out of model validation.
    ///
    /// A field is excluded when it is not on the form, explicitly excluded,
    /// or non-editable. The archive marker is never excluded.
    pub fn validation_exclusions(&self) -> Vec<String> {
        let meta = E::meta();
        meta.fields
            .iter()
            .filter(|f| meta.archive_field.as_deref() != Some(f.name.as_str()))
            .filter(|f| {
                !self.is_on_form(&f.name) || self.exclude.contains(&f.name) || !f.editable
            })
            .map(|f| f.name.clone())
            .collect()
    }

    /// Uniqueness constraints this form validates.
    pub fn unique_checks(&self) -> Vec<Vec<String>> {
        let excluded = self.validation_exclusions();
        E::meta()
            .unique_constraints()
            .into_iter()
            .filter(|fields| !fields.iter().any(|f| excluded.contains(f)))
            .collect()
    }

    /// Check `candidate` against `existing` records.
    ///
    /// # Errors
    ///
    /// Returns one [`ValidationError::Unique`] per constraint on which some
    /// other record (different primary key) holds equal values.
    pub fn validate_unique(&self, candidate: &E, existing: &[E]) -> Result<(), ValidationErrors> {
        let errors: Vec<_> = self
            .unique_checks()
            .into_iter()
            .filter(|fields| existing.iter().any(|row| unique_clash(candidate, row, fields)))
            .map(|fields| ValidationError::Unique {
                model: E::NAME,
                fields
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            tracing::debug!(model = E::NAME, count = errors.len(), "form uniqueness failed");
            Err(ValidationErrors(errors))
        }
    }
}
