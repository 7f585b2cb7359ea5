// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

mod expand;

use proc_macro::TokenStream;

use crate::expand::{MarkerKind, marker};

/// Mark a type for plain mapper generation.
///
/// The build step emits `{Name}Mapper` implementing `mapper_core::BaseMapper`.
/// Takes no arguments.
///
/// # Example
///
/// ```rust,ignore
/// #[dao]
/// pub struct UserAccount {
///     pub id: i64,
/// }
/// ```
#[proc_macro_attribute]
pub fn dao(args: TokenStream, item: TokenStream) -> TokenStream {
    marker(MarkerKind::Dao, args.into(), item.into()).into()
}

/// Mark a type for configurable mapper generation.
///
/// # Arguments
///
/// * `auto_import = "path"` — Repeatable. Paths emitted as `use` lines in the
///   generated source. Defaults to `mapper_core::BaseMapper`.
/// * `base_mapper = "Name"` — Trait the generated mapper implements.
///   Defaults to `BaseMapper`.
///
/// # Example
///
/// ```rust,ignore
/// #[generate_mapper(base_mapper = "CrudMapper")]
/// pub struct Invoice {
///     pub id: i64,
/// }
/// ```
#[proc_macro_attribute]
pub fn generate_mapper(args: TokenStream, item: TokenStream) -> TokenStream {
    marker(MarkerKind::GenerateMapper, args.into(), item.into()).into()
}
