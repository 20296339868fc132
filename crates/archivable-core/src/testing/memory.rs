// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
    model::{Model, unique_clash},
    query::Query,
    repository::Store,
    value::ValueError
};

/// Error returned by [`MemoryStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MemoryError {
    /// A write would break a uniqueness constraint.
    #[error("{model}: unique constraint on ({}) violated", fields.join(", "))]
    UniqueViolation {
        /// Model name.
        model:  &'static str,
        /// Constrained fields.
        fields: Vec<String>
    },

    /// An insert reused an existing primary key.
    #[error("{0}: duplicate primary key")]
    DuplicateKey(&'static str),

    /// An update targeted a row that does not exist.
    #[error("{0}: row not found")]
    NotFound(&'static str),

    /// A field could not be read or written.
    #[error(transparent)]
    Value(#[from] ValueError),

    /// Failure requested with [`MemoryStore::fail_next_write`].
    #[error("injected write failure")]
    Injected
}

struct State<E> {
    rows:      Vec<E>,
    writes:    Vec<Vec<String>>,
    removals:  usize,
    fail_next: bool
}

/// In-memory table for tests.
pub struct MemoryStore<E> {
    state: Mutex<State<E>>
}

impl<E> MemoryStore<E> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                rows:      Vec::new(),
                writes:    Vec::new(),
                removals:  0,
                fail_next: false
            })
        }
    }

    /// Number of stored rows, archived or not.
    pub fn len(&self) -> usize {
        self.state.lock().rows.len()
    }

    /// Check if the store holds no rows.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Field lists passed to each `update_fields` call, in order.
    pub fn writes(&self) -> Vec<Vec<String>> {
        self.state.lock().writes.clone()
    }

    /// Number of rows removed.
    pub fn removals(&self) -> usize {
        self.state.lock().removals
    }

    /// Make the next insert, update or removal fail with
    /// [`MemoryError::Injected`].
    pub fn fail_next_write(&self) {
        self.state.lock().fail_next = true;
    }
}

impl<E: Clone> MemoryStore<E> {
    /// Copy of every stored row.
    pub fn rows(&self) -> Vec<E> {
        self.state.lock().rows.clone()
    }
}

impl<E> Default for MemoryStore<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> State<E> {
    fn take_failure(&mut self) -> Result<(), MemoryError> {
        if std::mem::take(&mut self.fail_next) {
            return Err(MemoryError::Injected);
        }
        Ok(())
    }
}

impl<E: Model> State<E> {
    fn position(&self, entity: &E) -> Option<usize> {
        let pk = entity.pk_value()?;
        self.rows
            .iter()
            .position(|row| row.pk_value().as_ref() == Some(&pk))
    }

    fn check_unique(&self, candidate: &E) -> Result<(), MemoryError> {
        for fields in &E::meta().unique_together {
            if self
                .rows
                .iter()
                .any(|row| unique_clash(candidate, row, fields))
            {
                return Err(MemoryError::UniqueViolation {
                    model:  E::NAME,
                    fields: fields.clone()
                });
            }
        }
        for field in E::meta().fields.iter().filter(|f| f.unique && !f.primary_key) {
            let fields = vec![field.name.clone()];
            if self
                .rows
                .iter()
                .any(|row| unique_clash(candidate, row, &fields))
            {
                return Err(MemoryError::UniqueViolation {
                    model: E::NAME,
                    fields
                });
            }
        }
        Ok(())
    }
}

#[async_trait]
impl<E> Store<E> for MemoryStore<E>
where
    E: Model + Clone
{
    type Error = MemoryError;

    async fn insert(&self, entity: &E) -> Result<(), MemoryError> {
        let mut state = self.state.lock();
        state.take_failure()?;
        if state.position(entity).is_some() {
            return Err(MemoryError::DuplicateKey(E::NAME));
        }
        state.check_unique(entity)?;
        state.rows.push(entity.clone());
        Ok(())
    }

    async fn update_fields(&self, entity: &E, fields: &[String]) -> Result<(), MemoryError> {
        let mut state = self.state.lock();
        state.take_failure()?;
        let index = state
            .position(entity)
            .ok_or(MemoryError::NotFound(E::NAME))?;

        let mut updated = state.rows[index].clone();
        for field in fields {
            let value = entity
                .field_value(field)
                .ok_or_else(|| ValueError::UnknownField(field.clone()))?;
            updated.set_field_value(field, value)?;
        }

        state.check_unique(&updated)?;
        state.rows[index] = updated;
        state.writes.push(fields.to_vec());
        Ok(())
    }

    async fn remove(&self, entity: &E) -> Result<bool, MemoryError> {
        let mut state = self.state.lock();
        state.take_failure()?;
        match state.position(entity) {
            Some(index) => {
                state.rows.remove(index);
                state.removals += 1;
                Ok(true)
            }
            None => Ok(false)
        }
    }

    async fn fetch(&self, query: Query<E>) -> Result<Vec<E>, MemoryError> {
        let rows = self.state.lock().rows.clone();
        Ok(query.apply(rows))
    }
}
