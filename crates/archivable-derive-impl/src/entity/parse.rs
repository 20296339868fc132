// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Attribute parsing for the Archivable derive macro.
//!
//! Entity-level attributes like `#[archivable(table = "tags")]` are parsed
//! with darling's `FromDeriveInput`. Field-level attributes (`#[id]`,
//! `#[archive_marker]`, `#[archive_parent]`, `#[column(...)]`) and the
//! repeatable `#[unique_together(...)]` use manual parsing because they are
//! marker-style or list-style attributes.
//!
//! # Architecture
//!
//! ```text
//! parse.rs (coordinator)
//! ├── entity.rs      - EntityDef, role resolution, unique_together
//! │   └── attrs.rs   - darling EntityAttrs
//! └── field.rs       - FieldDef
//!     ├── column.rs  - ColumnConfig (unique, max_length, editable, skip)
//!     └── storage.rs - StorageConfig (id, marker, parent)
//! ```
//!
//! # Data Structures
//!
//! ```text
//! EntityDef
//! ├── ident: Ident                  (struct name, e.g., "Tag")
//! ├── model_name: String            (runtime name)
//! ├── table: String                 (table name)
//! ├── unique_together: Vec<Vec<Ident>>
//! └── fields: Vec<FieldDef>
//!     └── FieldDef
//!         ├── ident, ty
//!         ├── column: ColumnConfig
//!         └── storage: StorageConfig
//! ```

mod entity;
mod field;

pub use entity::EntityDef;
pub use field::{ColumnConfig, FieldDef};
