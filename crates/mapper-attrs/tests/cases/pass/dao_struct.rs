// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[dao]` leaves the annotated struct fully usable.

use mapper_attrs::dao;

#[dao]
pub struct UserAccount {
    pub id: i64,
    pub email: String
}

fn main() {
    let account = UserAccount {
        id:    1,
        email: "user@example.com".into()
    };
    assert_eq!(account.id, 1);
}
