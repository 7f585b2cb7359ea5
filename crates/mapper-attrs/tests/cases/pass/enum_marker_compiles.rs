// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Enums carry the marker syntactically; the build step rejects them with a
//! diagnostic instead of a compile error.

use mapper_attrs::dao;

#[dao]
pub enum Color {
    Red,
    Green
}

fn main() {
    let _ = Color::Red;
    let _ = Color::Green;
}
