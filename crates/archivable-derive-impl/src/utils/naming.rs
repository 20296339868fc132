// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Table name derivation.
//!
//! When `#[archivable(table = "...")]` is omitted the table name is the
//! struct name in snake case, pluralized:
//!
//! | Struct | Table |
//! |--------|-------|
//! | `Tag` | `tags` |
//! | `OrderStatus` | `order_statuses` |
//! | `Category` | `categories` |

use convert_case::{Case, Casing};

/// Default table name for a struct.
pub fn default_table(struct_name: &str) -> String {
    pluralize(&struct_name.to_case(Case::Snake))
}

/// Simple pluralization for table names.
fn pluralize(s: &str) -> String {
    if s.ends_with('s') || s.ends_with("sh") || s.ends_with("ch") || s.ends_with('x') {
        format!("{}es", s)
    } else if s.ends_with('y') && !s.ends_with("ay") && !s.ends_with("ey") && !s.ends_with("oy") {
        format!("{}ies", &s[..s.len() - 1])
    } else {
        format!("{}s", s)
    }
}
