// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Marker expansion and placement validation.
//!
//! Both markers are inert. Expansion always re-emits the annotated item;
//! validation failures attach a compile error alongside it instead of
//! swallowing it, so downstream code keeps resolving.

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Error, Item};

/// Which marker is being expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerKind {
    /// `#[dao]`
    Dao,
    /// `#[generate_mapper(...)]`
    GenerateMapper
}

impl MarkerKind {
    /// Attribute path as written in source.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dao => "dao",
            Self::GenerateMapper => "generate_mapper"
        }
    }
}

/// Arguments accepted by `#[generate_mapper(...)]`.
#[derive(Debug, FromMeta)]
struct MapperArgs {
    #[darling(multiple)]
    auto_import: Vec<String>,
    #[darling(default)]
    base_mapper: Option<String>
}

/// Expand a marker attribute. The annotated item always survives.
pub fn marker(kind: MarkerKind, args: TokenStream, item: TokenStream) -> TokenStream {
    let parsed = match syn::parse2::<Item>(item.clone()) {
        Ok(parsed) => parsed,
        Err(err) => {
            let error = err.to_compile_error();
            return quote! { #error #item };
        }
    };

    let mut errors = TokenStream::new();

    if let Err(err) = check_placement(kind, &parsed) {
        errors.extend(err.to_compile_error());
    }

    match kind {
        MarkerKind::Dao => {
            if !args.is_empty() {
                let err = Error::new_spanned(&args, "#[dao] takes no arguments");
                errors.extend(err.to_compile_error());
            }
        }
        MarkerKind::GenerateMapper => {
            if let Err(err) = check_args(&args) {
                errors.extend(err.write_errors());
            }
        }
    }

    quote! { #errors #item }
}

/// Markers sit on type declarations. Eligibility beyond that (structs only)
/// is decided by the build step, mirroring how it reports enums and traits
/// through its diagnostics sink rather than at expansion time.
fn check_placement(kind: MarkerKind, item: &Item) -> syn::Result<()> {
    let label = match item {
        Item::Struct(_) | Item::Enum(_) | Item::Trait(_) | Item::Union(_) => return Ok(()),
        Item::Fn(_) => "a function",
        Item::Const(_) => "a constant",
        Item::Static(_) => "a static item",
        Item::Type(_) => "a type alias",
        Item::Mod(_) => "a module",
        Item::Use(_) => "a use declaration",
        _ => "this item"
    };
    Err(Error::new_spanned(
        item,
        format!("#[{}] may only mark a type declaration, found {label}", kind.name())
    ))
}

fn check_args(args: &TokenStream) -> darling::Result<()> {
    let metas = NestedMeta::parse_meta_list(args.clone()).map_err(darling::Error::from)?;
    let parsed = MapperArgs::from_list(&metas)?;

    let mut errors = Vec::new();
    for path in &parsed.auto_import {
        if let Err(err) = syn::parse_str::<syn::Path>(path) {
            errors.push(darling::Error::custom(format!("invalid import path `{path}`: {err}")));
        }
    }
    if let Some(name) = &parsed.base_mapper {
        if syn::parse_str::<syn::Ident>(name).is_err() {
            errors.push(darling::Error::custom(format!(
                "base_mapper must be a bare trait name, got `{name}`"
            )));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(darling::Error::multiple(errors))
    }
}
