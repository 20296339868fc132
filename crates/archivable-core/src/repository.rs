// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Archive-aware repository over a host store.
//!
//! [`Store`] is the seam to the host persistence layer: whatever actually
//! writes rows (a `sqlx` pool wrapper, an ORM session, the in-memory test
//! store). [`ArchiveRepository`] sits on top and turns deletes into
//! archives.
//!
//! | Method | Store call | Notes |
//! |--------|------------|-------|
//! | `create` | `insert` | Marker reset to not-archived first |
//! | `archive` | `update_fields(marker paths)` | Fires `post_archive` |
//! | `restore` | `update_fields(marker paths)` | No notification |
//! | `delete(Archive)` | same as `archive` | Row stays |
//! | `delete(Force)` | `remove` | Marker untouched |
//! | `find_by_id`, `list` | `fetch(active query)` | Archived rows hidden |
//! | `find_by_id_with_archived`, `list_with_archived` | `fetch(all query)` | |
//!
//! # Persistence Granularity
//!
//! `archive` and `restore` write only the marker fields, one per layer,
//! never the whole record. Store errors are returned unchanged and nothing
//! is retried; when the write fails the in-memory marker has already
//! changed and no notification is sent.

use async_trait::async_trait;

use crate::{
    archivable::Archivable,
    manager::{DefaultManager, ExcludeArchived, Manager},
    model::Model,
    query::{Pagination, Query},
    signal::Signal
};

/// Host persistence operations needed for archiving.
#[async_trait]
pub trait Store<E: Model>: Send + Sync {
    /// Error type of the host, propagated unchanged.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Insert a new row.
    async fn insert(&self, entity: &E) -> Result<(), Self::Error>;

    /// Write only the named fields of an existing row.
    async fn update_fields(&self, entity: &E, fields: &[String]) -> Result<(), Self::Error>;

    /// Permanently remove a row. Returns `false` if it did not exist.
    async fn remove(&self, entity: &E) -> Result<bool, Self::Error>;

    /// Fetch rows matching a query.
    async fn fetch(&self, query: Query<E>) -> Result<Vec<E>, Self::Error>;
}

/// How [`ArchiveRepository::delete`] treats the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeleteMode {
    /// Archive instead of removing.
    #[default]
    Archive,

    /// Remove the row permanently, bypassing the archive marker.
    Force
}

impl DeleteMode {
    /// Mode for a `force` flag.
    pub const fn from_force(force: bool) -> Self {
        if force { Self::Force } else { Self::Archive }
    }
}

/// Outcome of [`ArchiveRepository::delete`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Deletion {
    /// The entity was archived; the row remains.
    Archived,

    /// The row was permanently removed.
    Removed,

    /// Forced removal found no row.
    Missing
}

/// Repository giving an entity archive semantics.
///
/// # Type Parameters
///
/// - `E`: Archivable entity
/// - `S`: Host store
/// - `M`: The entity's own manager, kept as the including-archived access
///   point and wrapped by [`ExcludeArchived`] for the default one
///
/// # Example
///
/// ```rust,ignore
/// let repo = ArchiveRepository::new(store);
/// repo.post_archive().connect(|event| search_index.remove(event.instance.id));
///
/// repo.create(&mut tag).await?;
/// repo.delete(&mut tag, DeleteMode::Archive).await?; // archived, row kept
/// assert!(repo.find_by_id(&tag.id).await?.is_none());
/// assert!(repo.find_by_id_with_archived(&tag.id).await?.is_some());
/// ```
pub struct ArchiveRepository<E, S, M = DefaultManager<E>> {
    store:        S,
    objects:      ExcludeArchived<M>,
    post_archive: Signal<E>
}

impl<E, S> ArchiveRepository<E, S>
where
    E: Archivable,
    S: Store<E>
{
    /// Repository using the unfiltered [`DefaultManager`] as the base.
    pub fn new(store: S) -> Self {
        Self::with_manager(store, DefaultManager::new())
    }
}

impl<E, S, M> ArchiveRepository<E, S, M>
where
    E: Archivable,
    S: Store<E>,
    M: Manager<Entity = E>
{
    /// Repository preserving a custom base manager.
    pub fn with_manager(store: S, manager: M) -> Self {
        Self {
            store,
            objects: ExcludeArchived::new(manager),
            post_archive: Signal::new()
        }
    }

    /// Underlying store.
    pub const fn store(&self) -> &S {
        &self.store
    }

    /// Default access point: active rows only.
    pub const fn objects(&self) -> &ExcludeArchived<M> {
        &self.objects
    }

    /// Access point including archived rows.
    pub const fn with_archived(&self) -> &M {
        self.objects.inner()
    }

    /// Base query over active rows.
    pub fn active_query(&self) -> Query<E> {
        self.objects.query()
    }

    /// Base query over all rows.
    pub fn all_query(&self) -> Query<E> {
        self.with_archived().query()
    }

    /// Signal fired after each successful archive.
    pub const fn post_archive(&self) -> &Signal<E> {
        &self.post_archive
    }

    /// Run a query against the store.
    ///
    /// Build it from [`active_query`](Self::active_query) or
    /// [`all_query`](Self::all_query) to choose visibility.
    pub async fn fetch(&self, query: Query<E>) -> Result<Vec<E>, S::Error> {
        self.store.fetch(query).await
    }

    /// Insert a new entity in the active state.
    pub async fn create(&self, entity: &mut E) -> Result<(), S::Error> {
        entity.mark_restored();
        self.store.insert(entity).await?;
        tracing::debug!(model = E::NAME, id = ?entity.id(), "created archivable entity");
        Ok(())
    }

    /// Archive an entity.
    ///
    /// Sets every layer's marker to the entity's identity, persists only
    /// those fields, then notifies `post_archive` receivers. Archiving an
    /// archived entity rewrites the same values and notifies again.
    pub async fn archive(&self, entity: &mut E) -> Result<(), S::Error> {
        entity.mark_archived();
        let fields = E::archive_fields();
        self.store.update_fields(entity, &fields).await?;

        tracing::debug!(model = E::NAME, id = ?entity.id(), fields = ?fields, "archived entity");
        self.post_archive.send(E::NAME, entity);
        Ok(())
    }

    /// Restore an archived entity.
    ///
    /// Resets every layer's marker and persists only those fields.
    pub async fn restore(&self, entity: &mut E) -> Result<(), S::Error> {
        entity.mark_restored();
        let fields = E::archive_fields();
        self.store.update_fields(entity, &fields).await?;

        tracing::debug!(model = E::NAME, id = ?entity.id(), fields = ?fields, "restored entity");
        Ok(())
    }

    /// Delete an entity.
    ///
    /// [`DeleteMode::Archive`] archives it. [`DeleteMode::Force`] removes the
    /// row through the store and leaves the marker as it was.
    pub async fn delete(&self, entity: &mut E, mode: DeleteMode) -> Result<Deletion, S::Error> {
        match mode {
            DeleteMode::Archive => {
                self.archive(entity).await?;
                Ok(Deletion::Archived)
            }
            DeleteMode::Force => {
                let removed = self.store.remove(entity).await?;
                tracing::debug!(model = E::NAME, id = ?entity.id(), removed, "force deleted entity");
                Ok(if removed {
                    Deletion::Removed
                } else {
                    Deletion::Missing
                })
            }
        }
    }

    /// Find an active entity by primary key.
    pub async fn find_by_id(&self, id: &E::Id) -> Result<Option<E>, S::Error> {
        let query = self.active_query().filter(pk_name::<E>(), id.clone());
        Ok(self.store.fetch(query).await?.into_iter().next())
    }

    /// Find an entity by primary key, archived or not.
    pub async fn find_by_id_with_archived(&self, id: &E::Id) -> Result<Option<E>, S::Error> {
        let query = self.all_query().filter(pk_name::<E>(), id.clone());
        Ok(self.store.fetch(query).await?.into_iter().next())
    }

    /// List active entities.
    pub async fn list(&self, pagination: Pagination) -> Result<Vec<E>, S::Error> {
        self.store
            .fetch(self.active_query().paginate(pagination))
            .await
    }

    /// List entities including archived ones.
    pub async fn list_with_archived(&self, pagination: Pagination) -> Result<Vec<E>, S::Error> {
        self.store
            .fetch(self.all_query().paginate(pagination))
            .await
    }
}

fn pk_name<E: Model>() -> &'static str {
    E::meta()
        .primary_key()
        .map_or("id", |pk| pk.name.as_str())
}
