// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use archivable::{Archivable, Model, Value};

#[derive(Debug, Clone, Archivable)]
#[archivable(table = "people")]
pub struct Person {
    pub id: i64,
    pub name: String,
    pub archive_identifier: i64,
}

#[derive(Debug, Clone, Archivable)]
pub struct Member {
    pub id: i64,

    #[archive_parent]
    pub person: Person,

    pub role: String,
    pub archive_identifier: i64,
}

fn main() {
    let mut member = Member {
        id: 4,
        person: Person {
            id: 4,
            name: "ann".into(),
            archive_identifier: 0,
        },
        role: "admin".into(),
        archive_identifier: 0,
    };

    assert_eq!(
        Member::archive_fields(),
        vec!["archive_identifier", "person.archive_identifier"]
    );

    member.mark_archived();
    assert_eq!(member.archive_identifier, 4);
    assert_eq!(member.person.archive_identifier, 4);
    assert_eq!(member.field_value("person.name"), Some(Value::Text("ann".into())));

    member.mark_restored();
    assert!(!member.person.is_archived());
}
