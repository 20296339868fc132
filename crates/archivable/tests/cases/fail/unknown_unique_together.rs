// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use archivable::Archivable;

#[derive(Archivable)]
#[unique_together(name, slug)]
pub struct Tag {
    pub id: i64,
    pub name: String,
    pub archive_identifier: i64,
}

fn main() {}
