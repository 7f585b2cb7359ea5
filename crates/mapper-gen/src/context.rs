// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Substitution tables for the two generation paths.

use chrono::NaiveDate;

use crate::{
    decl::TypeDecl,
    marker::MapperAttrs,
    subst::{
        AUTO_IMPORT_TOKEN, BASE_MAPPER_TOKEN, CLASS_NAME_TOKEN, DATE_TOKEN, PACKAGE_TOKEN,
        QUALIFIED_NAME_TOKEN, Substitutions
    }
};

/// Render `date` the way generated headers expect it.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}

/// Substitutions for the plain `#[dao]` path.
///
/// `#qualifiedName` carries the namespace-qualified path so templates never
/// have to juxtapose `#package::#className`, which breaks at the root
/// namespace.
#[must_use]
pub fn dao_context(decl: &TypeDecl, date: NaiveDate) -> Substitutions {
    let mut subs = Substitutions::new();
    subs.set(DATE_TOKEN, format_date(date))
        .set(PACKAGE_TOKEN, decl.namespace.to_string())
        .set(CLASS_NAME_TOKEN, decl.name.as_str())
        .set(QUALIFIED_NAME_TOKEN, decl.qualified_name());
    subs
}

/// Substitutions for the configurable `#[generate_mapper]` path.
///
/// Adds the import block and base trait on top of [`dao_context`].
#[must_use]
pub fn mapper_context(decl: &TypeDecl, attrs: &MapperAttrs, date: NaiveDate) -> Substitutions {
    let mut subs = dao_context(decl, date);
    subs.set(AUTO_IMPORT_TOKEN, import_block(decl, &attrs.auto_import))
        .set(BASE_MAPPER_TOKEN, attrs.base_mapper.as_str());
    subs
}

/// `use` lines for the generated source: configured imports first, then the
/// annotated type itself. Lines join with `\n` and carry no trailing newline;
/// entries are kept verbatim, duplicates included.
fn import_block(decl: &TypeDecl, imports: &[String]) -> String {
    let mut lines: Vec<String> = imports.iter().map(|path| format!("use {path};")).collect();
    lines.push(format!("use {};", decl.qualified_name()));
    lines.join("\n")
}
