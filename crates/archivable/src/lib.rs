// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

//! # Quick Navigation
//!
//! - **Derive**: [`Archivable`](derive@Archivable) for attributes and
//!   generated code
//! - **Lifecycle**: [`ArchiveRepository`] for archive, restore and delete
//! - **Queries**: [`ExcludeArchived`], [`Query`]
//! - **Forms**: [`ModelForm`]
//! - **Schema**: [`decorate()`], [`ModelMeta`]
//! - **Testing**: `testing::MemoryStore` (feature `testing`)

// Re-export all core types
pub use archivable_core::*;
// Re-export derive macro
pub use archivable_derive_impl::Archivable;
