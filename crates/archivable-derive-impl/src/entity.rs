// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Archivable derive macro implementation.
//!
//! # Architecture
//!
//! ```text
//! entity.rs (orchestrator)
//! │
//! ├── parse/        → Attribute parsing (EntityDef, FieldDef)
//! ├── kind.rs       → Rust type → FieldKind mapping
//! │
//! ├── model.rs      → impl Model (metadata, by-name field access)
//! └── lifecycle.rs  → impl Archivable (key, marker, layers)
//! ```
//!
//! # Generated Code
//!
//! | Item | Purpose |
//! |------|---------|
//! | `impl Model for T` | Decorated metadata cached in a `OnceLock`, field get/set by name |
//! | `impl Archivable for T` | Key and marker accessors, layered archive and restore |

mod kind;
mod lifecycle;
mod model;
pub mod parse;

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

use self::parse::EntityDef;

/// Main entry point for the Archivable derive macro.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match EntityDef::from_derive_input(&input) {
        Ok(entity) => generate(entity),
        Err(err) => err.write_errors().into()
    }
}

fn generate(entity: EntityDef) -> TokenStream {
    let model = model::generate(&entity);
    let lifecycle = lifecycle::generate(&entity);

    let expanded = quote! {
        #model
        #lifecycle
    };

    expanded.into()
}
