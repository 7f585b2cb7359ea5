// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Source scanning.
//!
//! Walks Rust sources with `syn` and records declarations carrying one of
//! the marker attributes. Inline modules extend the namespace. Markers are
//! recorded wherever they appear, enums, traits and struct fields included;
//! deciding eligibility is the processors' job, so misplacements surface as
//! diagnostics instead of being silently dropped.

use std::{fs, path::Path};

use syn::{Attribute, Fields, Item, Meta};

use crate::{
    decl::{DeclKind, Namespace, TypeDecl},
    error::{GenError, GenResult},
    marker::{DAO_MARKER, MAPPER_MARKER, MapperAttrs},
    round::Round
};

/// Collects marked declarations into a [`Round`].
#[derive(Debug, Clone, Default)]
pub struct Scanner {
    root: Namespace
}

impl Scanner {
    /// Scanner rooted at the empty namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scanner whose findings are qualified under `root`.
    #[must_use]
    pub fn with_root(root: Namespace) -> Self {
        Self { root }
    }

    /// Scan one file.
    pub fn scan_file(&self, path: &Path) -> GenResult<Round> {
        let source = fs::read_to_string(path).map_err(|source| GenError::SourceIo {
            path: path.to_path_buf(),
            source
        })?;
        tracing::debug!(path = %path.display(), "scanning source file");
        self.scan_source(&source, &path.display().to_string())
    }

    /// Scan several files into one merged round.
    pub fn scan_files<'p>(&self, paths: impl IntoIterator<Item = &'p Path>) -> GenResult<Round> {
        let mut round = Round::new();
        for path in paths {
            round.merge(self.scan_file(path)?);
        }
        Ok(round)
    }

    /// Scan source text. `origin` labels parse errors.
    pub fn scan_source(&self, source: &str, origin: &str) -> GenResult<Round> {
        let file = syn::parse_file(source).map_err(|source| GenError::Parse {
            origin: origin.to_owned(),
            source
        })?;
        let mut round = Round::new();
        collect_items(&file.items, &self.root, &mut round)?;
        Ok(round)
    }
}

fn collect_items(items: &[Item], namespace: &Namespace, round: &mut Round) -> GenResult<()> {
    for item in items {
        match item {
            Item::Struct(item) => {
                record(&item.attrs, &item.ident.to_string(), namespace, DeclKind::Struct, round)?;
                collect_fields(&item.fields, namespace, round)?;
            }
            Item::Enum(item) => {
                record(&item.attrs, &item.ident.to_string(), namespace, DeclKind::Enum, round)?;
            }
            Item::Trait(item) => {
                record(&item.attrs, &item.ident.to_string(), namespace, DeclKind::Trait, round)?;
            }
            Item::Union(item) => {
                record(&item.attrs, &item.ident.to_string(), namespace, DeclKind::Union, round)?;
                for (index, field) in item.fields.named.iter().enumerate() {
                    record_field(index, field, namespace, round)?;
                }
            }
            Item::Fn(item) => {
                record(&item.attrs, &item.sig.ident.to_string(), namespace, DeclKind::Fn, round)?;
            }
            Item::Const(item) => {
                record(&item.attrs, &item.ident.to_string(), namespace, DeclKind::Const, round)?;
            }
            Item::Static(item) => {
                record(&item.attrs, &item.ident.to_string(), namespace, DeclKind::Static, round)?;
            }
            Item::Type(item) => {
                record(
                    &item.attrs,
                    &item.ident.to_string(),
                    namespace,
                    DeclKind::TypeAlias,
                    round
                )?;
            }
            Item::Mod(item) => {
                record(&item.attrs, &item.ident.to_string(), namespace, DeclKind::Module, round)?;
                if let Some((_, items)) = &item.content {
                    let child = namespace.child(&item.ident.to_string());
                    collect_items(items, &child, round)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn collect_fields(fields: &Fields, namespace: &Namespace, round: &mut Round) -> GenResult<()> {
    for (index, field) in fields.iter().enumerate() {
        record_field(index, field, namespace, round)?;
    }
    Ok(())
}

/// Tuple fields carry no ident and are recorded under their index instead.
fn record_field(
    index: usize,
    field: &syn::Field,
    namespace: &Namespace,
    round: &mut Round
) -> GenResult<()> {
    let name = match &field.ident {
        Some(ident) => ident.to_string(),
        None => index.to_string()
    };
    record(&field.attrs, &name, namespace, DeclKind::Field, round)
}

fn record(
    attrs: &[Attribute],
    name: &str,
    namespace: &Namespace,
    kind: DeclKind,
    round: &mut Round
) -> GenResult<()> {
    let decl = TypeDecl::new(name, namespace.clone(), kind);

    if find_marker(attrs, DAO_MARKER).is_some() {
        round.push_dao(decl.clone());
    }
    if let Some(attr) = find_marker(attrs, MAPPER_MARKER) {
        let parsed = parse_mapper_args(attr).map_err(|source| GenError::Marker {
            marker: MAPPER_MARKER,
            decl:   decl.qualified_name(),
            source
        })?;
        round.push_mapper(decl, parsed);
    }
    Ok(())
}

/// Match an attribute by its last path segment, so `mapper_attrs::dao` and
/// plain `dao` both count.
fn find_marker<'a>(attrs: &'a [Attribute], marker: &str) -> Option<&'a Attribute> {
    attrs.iter().find(|attr| {
        attr.path()
            .segments
            .last()
            .is_some_and(|segment| segment.ident == marker)
    })
}

fn parse_mapper_args(attr: &Attribute) -> darling::Result<MapperAttrs> {
    match &attr.meta {
        Meta::Path(_) => Ok(MapperAttrs::default()),
        Meta::List(list) => MapperAttrs::from_tokens(list.tokens.clone()),
        Meta::NameValue(_) => Err(darling::Error::unsupported_format("name-value").with_span(attr))
    }
}
