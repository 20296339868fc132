// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Query access points.
//!
//! A [`Manager`] is the entry point for building queries over an entity.
//! Archiving splits access in two:
//!
//! | Access point | Type | Sees |
//! |--------------|------|------|
//! | `objects()` (default) | [`ExcludeArchived<M>`] | active rows only |
//! | `with_archived()` | `M` | every row |
//!
//! [`ExcludeArchived`] wraps whichever manager the entity already used
//! rather than replacing it, so a manager with its own base filter keeps it.
//!
//! # Custom Query Methods
//!
//! Write custom queries as an extension trait over [`Manager`]. They then
//! work on both access points, and on `objects()` they build on the
//! filtered base query:
//!
//! ```rust,ignore
//! pub trait TagQueries: Manager<Entity = Tag> {
//!     fn named(&self, name: &str) -> Query<Tag> {
//!         self.query().filter("name", name)
//!     }
//! }
//!
//! impl<M: Manager<Entity = Tag>> TagQueries for M {}
//!
//! repo.objects().named("one");       // active rows named "one"
//! repo.with_archived().named("one"); // all rows named "one"
//! ```

use std::{fmt, marker::PhantomData};

use crate::{
    archivable::{Archivable, MarkerOf},
    marker::ArchiveMarker,
    model::Model,
    query::Query
};

/// Builds the base query for an entity type.
pub trait Manager: Send + Sync {
    /// Entity type the manager queries.
    type Entity: Model;

    /// Base query every query of this manager starts from.
    fn query(&self) -> Query<Self::Entity>;
}

/// Manager with no base restriction.
pub struct DefaultManager<E> {
    _entity: PhantomData<fn() -> E>
}

impl<E> DefaultManager<E> {
    /// Create the manager.
    pub const fn new() -> Self {
        Self {
            _entity: PhantomData
        }
    }
}

impl<E> Default for DefaultManager<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for DefaultManager<E> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for DefaultManager<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("DefaultManager")
    }
}

impl<E: Model> Manager for DefaultManager<E> {
    type Entity = E;

    fn query(&self) -> Query<E> {
        Query::new()
    }
}

/// Manager restricting another manager to active rows.
///
/// Only [`Manager::query`] is exposed, so every query built through this
/// access point carries the marker filter. Inherent methods of the wrapped
/// manager are reached explicitly through [`inner`](Self::inner) and see
/// every row.
#[derive(Debug, Clone, Default)]
pub struct ExcludeArchived<M> {
    inner: M
}

impl<M> ExcludeArchived<M> {
    /// Wrap a manager.
    pub const fn new(inner: M) -> Self {
        Self {
            inner
        }
    }

    /// The wrapped, unfiltered manager.
    pub const fn inner(&self) -> &M {
        &self.inner
    }

    /// Unwrap the manager.
    pub fn into_inner(self) -> M {
        self.inner
    }
}

impl<M> Manager for ExcludeArchived<M>
where
    M: Manager,
    M::Entity: Archivable
{
    type Entity = M::Entity;

    fn query(&self) -> Query<M::Entity> {
        self.inner.query().filter(
            <M::Entity as Archivable>::ARCHIVE_FIELD,
            MarkerOf::<M::Entity>::not_archived()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        query::Condition,
        testing::fixtures::Tag,
        value::Value
    };

    /// Manager with its own base restriction and an inherent helper.
    struct ShortNames;

    impl ShortNames {
        fn max_len(&self) -> usize {
            1
        }
    }

    impl Manager for ShortNames {
        type Entity = Tag;

        fn query(&self) -> Query<Tag> {
            Query::new().exclude("name", "long-name")
        }
    }

    trait TagQueries: Manager<Entity = Tag> {
        fn named(&self, name: &str) -> Query<Tag> {
            self.query().filter("name", name)
        }
    }

    impl<M: Manager<Entity = Tag>> TagQueries for M {}

    fn archived(id: i64, name: &str) -> Tag {
        let mut tag = Tag::new(id, name);
        tag.mark_archived();
        tag
    }

    #[test]
    fn default_manager_is_unfiltered() {
        let q = DefaultManager::<Tag>::new().query();
        assert!(q.conditions().is_empty());
    }

    #[test]
    fn exclude_archived_filters_marker() {
        let q = ExcludeArchived::new(DefaultManager::<Tag>::new()).query();
        assert_eq!(q.conditions(), &[Condition::Eq(
            "archive_identifier".into(),
            Value::Int(0)
        )]);

        let rows = vec![Tag::new(1, "a"), archived(2, "b")];
        let visible = q.apply(rows);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, 1);
    }

    #[test]
    fn wrapped_manager_keeps_base_filter() {
        let manager = ExcludeArchived::new(ShortNames);
        let q = manager.query();
        assert!(q.constrains("name"));
        assert!(q.constrains("archive_identifier"));

        let rows = vec![Tag::new(1, "long-name"), Tag::new(2, "a"), archived(3, "b")];
        assert_eq!(q.apply(rows).len(), 1);
    }

    #[test]
    fn inherent_methods_need_explicit_inner() {
        let manager = ExcludeArchived::new(ShortNames);
        assert_eq!(manager.inner().max_len(), 1);

        let rows = || vec![Tag::new(1, "one"), archived(2, "one")];
        assert_eq!(manager.named("one").apply(rows()).len(), 1);
        assert_eq!(manager.inner().named("one").apply(rows()).len(), 2);
    }

    #[test]
    fn extension_methods_build_on_filtered_query() {
        let rows = || vec![Tag::new(1, "one"), archived(2, "one")];

        let active = ExcludeArchived::new(DefaultManager::<Tag>::new());
        assert_eq!(active.named("one").apply(rows()).len(), 1);

        let all = DefaultManager::<Tag>::new();
        assert_eq!(all.named("one").apply(rows()).len(), 2);
    }
}
