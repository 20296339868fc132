// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! The archivable capability.
//!
//! An [`Archivable`] entity carries an archive marker field and knows how to
//! move between the two lifecycle states:
//!
//! ```text
//!            mark_archived (marker = own id)
//!   Active ─────────────────────────────────► Archived
//!     ▲                                          │
//!     └──────────────────────────────────────────┘
//!            mark_restored (marker = zero)
//! ```
//!
//! These methods only touch the in-memory value. Persisting the change and
//! announcing it is the job of
//! [`ArchiveRepository`](crate::ArchiveRepository).
//!
//! # Layers
//!
//! An entity may embed a parent archivable entity (`#[archive_parent]` with
//! the derive macro). Each layer has its own marker. The generated
//! `mark_archived` and `mark_restored` update the entity's own marker first
//! and then delegate to the parent, and [`Archivable::archive_fields`] lists
//! every layer's marker path so all of them are persisted together.

use crate::{
    marker::{ArchiveIdentity, ArchiveMarker},
    model::Model
};

/// Marker type of an archivable entity.
pub type MarkerOf<E> = <<E as Archivable>::Id as ArchiveIdentity>::Marker;

/// Lifecycle state derived from the archive marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveState {
    /// Marker holds the not-archived value; visible to default queries.
    Active,

    /// Marker holds the entity's own identity; hidden from default queries.
    Archived
}

impl ArchiveState {
    /// Check if this is the archived state.
    pub const fn is_archived(&self) -> bool {
        matches!(self, Self::Archived)
    }
}

/// Entity supporting soft deletion through an archive marker.
///
/// # Example
///
/// ```rust,ignore
/// #[derive(Archivable)]
/// #[archivable(table = "tags")]
/// pub struct Tag {
///     #[id]
///     pub id: i64,
///     #[column(unique, max_length = 100)]
///     pub name: String,
///     #[archive_marker]
///     pub archive_identifier: i64,
/// }
///
/// let mut tag = Tag { id: 1, name: "one".into(), archive_identifier: 0 };
/// tag.mark_archived();
/// assert!(tag.is_archived());
/// assert_eq!(tag.archive_identifier, 1);
/// ```
pub trait Archivable: Model {
    /// Primary key type.
    type Id: ArchiveIdentity;

    /// Name of the archive marker field.
    const ARCHIVE_FIELD: &'static str;

    /// Primary key value.
    fn id(&self) -> &Self::Id;

    /// Current archive marker.
    fn archive_marker(&self) -> &MarkerOf<Self>;

    /// Overwrite the archive marker of this layer only.
    fn set_archive_marker(&mut self, marker: MarkerOf<Self>);

    /// Check if the entity is archived.
    fn is_archived(&self) -> bool {
        !self.archive_marker().is_not_archived()
    }

    /// Current lifecycle state.
    fn archive_state(&self) -> ArchiveState {
        if self.is_archived() {
            ArchiveState::Archived
        } else {
            ArchiveState::Active
        }
    }

    /// Record the entity's identity in the marker of every layer.
    fn mark_archived(&mut self) {
        let marker = self.id().to_marker();
        self.set_archive_marker(marker);
    }

    /// Reset the marker of every layer to the not-archived value.
    fn mark_restored(&mut self) {
        self.set_archive_marker(MarkerOf::<Self>::not_archived());
    }

    /// Marker field paths of every layer, own layer first.
    fn archive_fields() -> Vec<String> {
        vec![Self::ARCHIVE_FIELD.to_owned()]
    }
}
