// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use archivable::{Archivable, FieldKind, Model};

#[derive(Debug, Clone, Archivable)]
#[archivable(table = "tags")]
pub struct Tag {
    #[id]
    pub id: i64,

    #[column(unique, max_length = 100)]
    pub name: String,

    #[archive_marker]
    pub archive_identifier: i64,
}

fn main() {
    let mut tag = Tag {
        id: 3,
        name: "three".into(),
        archive_identifier: 0,
    };
    assert!(!tag.is_archived());

    tag.mark_archived();
    assert_eq!(tag.archive_identifier, 3);

    let meta = Tag::meta();
    assert_eq!(meta.table, "tags");
    assert_eq!(
        meta.field("archive_identifier").map(|f| f.kind),
        Some(FieldKind::BigInteger)
    );
    assert_eq!(meta.unique_together, vec![vec!["name", "archive_identifier"]]);
}
