// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Test support: an in-memory [`Store`](crate::Store).
//!
//! Enabled with the `testing` feature. [`MemoryStore`] behaves like a small
//! table: it enforces the model's uniqueness constraints, applies partial
//! updates field by field, and records what it was asked to write so tests
//! can check persistence granularity.

#[cfg(test)]
pub(crate) mod fixtures;
mod memory;

pub use memory::{MemoryError, MemoryStore};
