// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Entity-level attribute parsing with darling.
//!
//! # Supported Attributes
//!
//! | Attribute | Required | Default | Description |
//! |-----------|----------|---------|-------------|
//! | `table` | No | snake-case plural of the struct | Table name |
//! | `name` | No | struct name | Model name in events and logs |

use darling::FromDeriveInput;
use syn::{Generics, Ident};

/// Entity-level attributes parsed from `#[archivable(...)]`.
///
/// The attribute itself is optional.
///
/// ```rust,ignore
/// #[archivable(table = "people", name = "Person")]
/// ```
#[derive(Debug, FromDeriveInput)]
#[darling(attributes(archivable), supports(struct_named))]
pub struct EntityAttrs {
    /// Struct identifier.
    pub ident: Ident,

    /// Generic parameters; must be empty.
    pub generics: Generics,

    /// Table name override.
    #[darling(default)]
    pub table: Option<String>,

    /// Model name override.
    #[darling(default)]
    pub name: Option<String>
}
