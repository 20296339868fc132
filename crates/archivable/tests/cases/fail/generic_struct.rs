// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use archivable::Archivable;

#[derive(Archivable)]
pub struct Tag<T> {
    pub id: i64,
    pub value: T,
    pub archive_identifier: i64,
}

fn main() {}
