// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use archivable::{Archivable, Model};

#[derive(Debug, Clone, Archivable)]
#[unique_together(name, kind)]
pub struct Label {
    pub id: i64,
    pub name: String,
    pub kind: String,
    pub archive_identifier: i64,
}

fn main() {
    assert_eq!(
        Label::meta().unique_together,
        vec![vec!["name", "kind", "archive_identifier"]]
    );
    let label = Label {
        id: 1,
        name: "a".into(),
        kind: "b".into(),
        archive_identifier: 0,
    };
    assert!(!label.is_archived());
}
