// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Archive marker types.
//!
//! The archive marker is the per-entity column encoding soft-delete state.
//! Its zero value means "active"; any other value is the entity's own
//! primary key, recorded at the moment it was archived.
//!
//! # Key to Marker Mapping
//!
//! | Primary Key | Marker | Not Archived |
//! |-------------|--------|--------------|
//! | `i16`, `i32`, `i64`, `u16`, `u32` | `i64` | `0` |
//! | `String` | `String` | `""` |
//! | `Uuid` | `Uuid` | nil |
//!
//! Since the marker of an archived row equals its primary key, two archived
//! rows never share a marker value, and an archived row never shares one with
//! an active row. That is what lets widened unique constraints ignore
//! archived rows.

use std::fmt::Debug;

use crate::value::{FromValue, Value};

/// Value type stored in the archive marker column.
pub trait ArchiveMarker:
    Clone + PartialEq + Debug + Send + Sync + Into<Value> + FromValue + 'static
{
    /// The value meaning "not archived".
    fn not_archived() -> Self;

    /// Check if this marker denotes an active entity.
    fn is_not_archived(&self) -> bool {
        *self == Self::not_archived()
    }
}

impl ArchiveMarker for i64 {
    fn not_archived() -> Self {
        0
    }
}

impl ArchiveMarker for String {
    fn not_archived() -> Self {
        String::new()
    }

    fn is_not_archived(&self) -> bool {
        self.is_empty()
    }
}

#[cfg(feature = "uuid")]
impl ArchiveMarker for uuid::Uuid {
    fn not_archived() -> Self {
        uuid::Uuid::nil()
    }

    fn is_not_archived(&self) -> bool {
        self.is_nil()
    }
}

/// Primary key type that can be recorded in an archive marker.
///
/// Ties an entity's key type to the marker type it archives under. The
/// derive macro relies on this association, so a marker field whose type
/// does not match `<Id as ArchiveIdentity>::Marker` fails to compile.
pub trait ArchiveIdentity: Clone + Debug + Send + Sync + Into<Value> {
    /// Marker type for entities keyed by `Self`.
    type Marker: ArchiveMarker;

    /// Marker value recording this identity.
    fn to_marker(&self) -> Self::Marker;
}

macro_rules! int_identity {
    ($($ty:ty),*) => {
        $(
            impl ArchiveIdentity for $ty {
                type Marker = i64;

                fn to_marker(&self) -> i64 {
                    i64::from(*self)
                }
            }
        )*
    };
}

int_identity!(i16, i32, i64, u16, u32);

impl ArchiveIdentity for String {
    type Marker = String;

    fn to_marker(&self) -> String {
        self.clone()
    }
}

#[cfg(feature = "uuid")]
impl ArchiveIdentity for uuid::Uuid {
    type Marker = uuid::Uuid;

    fn to_marker(&self) -> uuid::Uuid {
        *self
    }
}
