// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

use archivable::{Archivable, Model};

#[derive(Debug, Clone, Archivable)]
pub struct OrderStatus {
    pub id: i32,
    pub label: String,
    pub archive_identifier: i64,
}

fn main() {
    assert_eq!(OrderStatus::meta().table, "order_statuses");
    assert_eq!(OrderStatus::NAME, "OrderStatus");
    assert_eq!(OrderStatus::ARCHIVE_FIELD, "archive_identifier");

    let mut status = OrderStatus {
        id: 7,
        label: "open".into(),
        archive_identifier: 0,
    };
    status.mark_archived();
    assert_eq!(status.archive_identifier, 7);
}
