// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits and types for archivable.
//!
//! This crate provides the runtime behind `#[derive(Archivable)]`: soft
//! deletion for persisted entities through an archive marker field. It can
//! also be used standalone with hand-written implementations.
//!
//! # Overview
//!
//! - [`Model`], [`ModelMeta`]: entity metadata and by-name field access
//! - [`decorate`]: marker injection and uniqueness widening
//! - [`Archivable`]: in-memory archive and restore
//! - [`ExcludeArchived`]: manager hiding archived rows
//! - [`ArchiveRepository`]: persistence and the `post_archive` signal
//! - [`ModelForm`]: form validation that keeps widened constraints
//! - [`prelude`]: convenient re-exports
//!
//! # Marker Semantics
//!
//! | Marker value | State |
//! |--------------|-------|
//! | `0`, `""`, nil UUID | Active |
//! | the entity's own id | Archived |
//!
//! Because an archived row's marker is unique to it, a constraint widened to
//! `(name, archive_identifier)` still holds among active rows while allowing
//! any number of archived rows with the same name.
//!
//! # Usage
//!
//! Most users should use `archivable` directly, which re-exports this crate.
//! For manual implementations:
//!
//! ```rust,ignore
//! use archivable_core::prelude::*;
//!
//! #[async_trait]
//! impl Store<Tag> for PgStore {
//!     type Error = sqlx::Error;
//!     // ...
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod archivable;
pub mod decorate;
pub mod form;
pub mod manager;
pub mod marker;
pub mod model;
pub mod prelude;
pub mod query;
pub mod repository;
pub mod signal;
#[cfg(any(test, feature = "testing"))]
pub mod testing;
pub mod value;

/// Re-export async_trait for store implementations.
pub use async_trait::async_trait;

pub use crate::{
    archivable::{Archivable, ArchiveState, MarkerOf},
    decorate::{
        ArchiveConfig, DEFAULT_MARKER_FIELD, add_marker_field, decorate, marker_kind,
        widen_unique_constraints
    },
    form::{ModelForm, ValidationError, ValidationErrors},
    manager::{DefaultManager, ExcludeArchived, Manager},
    marker::{ArchiveIdentity, ArchiveMarker},
    model::{FieldKind, FieldMeta, Model, ModelMeta, unique_clash},
    query::{Condition, Pagination, Query, SortDirection},
    repository::{ArchiveRepository, DeleteMode, Deletion, Store},
    signal::{ArchiveEvent, ReceiverId, Signal},
    value::{FromValue, Value, ValueError}
};
