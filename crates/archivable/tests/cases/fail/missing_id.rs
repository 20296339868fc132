// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use archivable::Archivable;

#[derive(Archivable)]
pub struct Item {
    pub key: i64,
    pub archive_identifier: i64,
}

fn main() {}
