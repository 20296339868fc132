// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Storage role of a field: primary key, archive marker, or parent layer.
//!
//! ```rust,ignore
//! #[id]
//! pub id: i64,
//!
//! #[archive_parent]
//! pub person: Person,
//!
//! #[archive_marker]
//! pub archive_identifier: i64,
//! ```

#[derive(Debug, Default, Clone, Copy)]
pub struct StorageConfig {
    pub is_id: bool,

    pub is_marker: bool,

    pub is_parent: bool
}

impl StorageConfig {
    /// Number of roles claimed by explicit attributes.
    #[must_use]
    pub fn role_count(&self) -> usize {
        [self.is_id, self.is_marker, self.is_parent]
            .into_iter()
            .filter(|r| *r)
            .count()
    }
}
