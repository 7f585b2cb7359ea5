// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `#[generate_mapper]` accepts repeated `auto_import` plus `base_mapper`
//! and passes the struct through untouched.

use mapper_attrs::generate_mapper;
use mapper_core::BaseMapper;

#[generate_mapper(
    auto_import = "mapper_core::BaseMapper",
    auto_import = "mapper_core::CrudMapper",
    base_mapper = "CrudMapper"
)]
pub struct Invoice {
    pub id: i64
}

pub struct InvoiceMapper;

impl BaseMapper for InvoiceMapper {
    type Entity = Invoice;
}

fn main() {
    assert_eq!(InvoiceMapper::table(), "invoice");
    let _ = Invoice { id: 7 };
}
