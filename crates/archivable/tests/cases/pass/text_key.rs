// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use archivable::{Archivable, FieldKind, Model};

#[derive(Debug, Clone, Archivable)]
#[archivable(table = "char_models")]
pub struct CharModel {
    #[id]
    #[column(max_length = 10)]
    pub code: String,

    #[archive_marker]
    pub archived_as: String,
}

fn main() {
    let meta = CharModel::meta();
    assert_eq!(
        meta.field("archived_as").map(|f| f.kind),
        Some(FieldKind::Text {
            max_length: Some(10)
        })
    );

    let mut row = CharModel {
        code: "abc".into(),
        archived_as: String::new(),
    };
    row.mark_archived();
    assert_eq!(row.archived_as, "abc");
    row.mark_restored();
    assert!(row.archived_as.is_empty());
}
