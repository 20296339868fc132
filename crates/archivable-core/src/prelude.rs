// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Convenient re-exports for common usage.
//!
//! # Usage
//!
//! ```rust,ignore
//! use archivable_core::prelude::*;
//! ```

pub use crate::{
    Archivable, ArchiveEvent, ArchiveRepository, ArchiveState, DeleteMode, Deletion,
    ExcludeArchived, Manager, Model, ModelForm, Pagination, Query, SortDirection, Store, Value,
    async_trait
};
