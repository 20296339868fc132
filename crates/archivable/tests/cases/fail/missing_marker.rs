// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![allow(dead_code)]

use archivable::Archivable;

#[derive(Archivable)]
pub struct Item {
    pub id: i64,
    pub name: String,
}

fn main() {}
