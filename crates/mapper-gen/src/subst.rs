// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Literal token substitution.
//!
//! Templates use `#`-prefixed tokens (`#className`, `#date`, ...). Expansion
//! is a single left-to-right pass. Replacement text is never rescanned, and
//! an unrecognized token is an error rather than silent pass-through.
//!
//! At a `#` the longest registered token wins, so `#classNameMapper` expands
//! `#className` and keeps the `Mapper` tail. A `#` followed by anything that
//! cannot start an identifier (`#[derive]`, `#!`, `# `) is literal text.

use thiserror::Error;

/// Build date, `YYYY/MM/DD`.
pub const DATE_TOKEN: &str = "#date";
/// Namespace of the annotated type.
pub const PACKAGE_TOKEN: &str = "#package";
/// Simple name of the annotated type.
pub const CLASS_NAME_TOKEN: &str = "#className";
/// Qualified name of the annotated type, bare at the root namespace.
pub const QUALIFIED_NAME_TOKEN: &str = "#qualifiedName";
/// Import block for the generated source.
pub const AUTO_IMPORT_TOKEN: &str = "#autoImport";
/// Trait the generated mapper implements.
pub const BASE_MAPPER_TOKEN: &str = "#baseMapper";

/// Token-to-replacement table, ordered by registration.
#[derive(Debug, Clone, Default)]
pub struct Substitutions {
    entries: Vec<(&'static str, String)>
}

impl Substitutions {
    /// Empty table.
    #[must_use]
    pub const fn new() -> Self {
        Self { entries: Vec::new() }
    }

    /// Register `token` → `value`. Re-registering a token replaces its value.
    pub fn set(&mut self, token: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        if let Some(entry) = self.entries.iter_mut().find(|(name, _)| *name == token) {
            entry.1 = value;
        } else {
            self.entries.push((token, value));
        }
        self
    }

    /// Replacement registered for `token`, if any.
    #[must_use]
    pub fn get(&self, token: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == token)
            .map(|(_, value)| value.as_str())
    }

    /// Longest registered token that `rest` starts with.
    fn longest_match(&self, rest: &str) -> Option<(&'static str, &str)> {
        self.entries
            .iter()
            .filter(|(name, _)| rest.starts_with(name))
            .max_by_key(|(name, _)| name.len())
            .map(|(name, value)| (*name, value.as_str()))
    }
}

/// Substitution failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubstituteError {
    /// The template used a `#token` the table does not know.
    #[error("unknown template token `#{0}`")]
    UnknownToken(String)
}

/// Expand every registered token in `template`.
pub fn substitute(template: &str, subs: &Substitutions) -> Result<String, SubstituteError> {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find('#') {
        out.push_str(&rest[..pos]);
        rest = &rest[pos..];

        if let Some((token, value)) = subs.longest_match(rest) {
            out.push_str(value);
            rest = &rest[token.len()..];
        } else if let Some(ident) = leading_ident(&rest[1..]) {
            return Err(SubstituteError::UnknownToken(ident.to_owned()));
        } else {
            out.push('#');
            rest = &rest[1..];
        }
    }

    out.push_str(rest);
    Ok(out)
}

/// Identifier directly after a `#`, if the next char can start one.
fn leading_ident(rest: &str) -> Option<&str> {
    let mut chars = rest.char_indices();
    match chars.next() {
        Some((_, c)) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return None
    }
    let end = chars
        .find(|(_, c)| !c.is_ascii_alphanumeric() && *c != '_')
        .map_or(rest.len(), |(idx, _)| idx);
    Some(&rest[..end])
}
