// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use archivable::{Archivable, Model, Value};

#[derive(Debug, Clone, Archivable)]
pub struct Account {
    pub id: i64,

    #[column(editable = false)]
    pub created_by: String,

    #[column(skip)]
    pub cached_score: f64,

    pub nickname: Option<String>,
    pub archive_identifier: i64,
}

fn main() {
    let meta = Account::meta();
    assert!(meta.field("created_by").is_some_and(|f| !f.editable));
    assert!(meta.field("cached_score").is_none());

    let mut account = Account {
        id: 1,
        created_by: "root".into(),
        cached_score: 0.5,
        nickname: None,
        archive_identifier: 0,
    };
    assert_eq!(account.field_value("nickname"), Some(Value::Null));
    account
        .set_field_value("nickname", Value::Text("neo".into()))
        .unwrap();
    assert_eq!(account.nickname.as_deref(), Some("neo"));
    assert!(account.set_field_value("cached_score", Value::Int(1)).is_err());
    assert!(!account.is_archived());
}
