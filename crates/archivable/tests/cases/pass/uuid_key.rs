// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use archivable::{Archivable, FieldKind, Model};
use uuid::Uuid;

#[derive(Debug, Clone, Archivable)]
pub struct Document {
    pub id: Uuid,
    pub title: Option<String>,
    pub archive_identifier: Uuid,
}

fn main() {
    assert_eq!(
        Document::meta().field("archive_identifier").map(|f| f.kind),
        Some(FieldKind::Uuid)
    );
    assert!(Document::meta().field("title").is_some_and(|f| f.blank));

    let id = Uuid::new_v4();
    let mut doc = Document {
        id,
        title: None,
        archive_identifier: Uuid::nil(),
    };
    doc.mark_archived();
    assert_eq!(doc.archive_identifier, id);
}
