// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Scanned declaration model.
//!
//! A [`TypeDecl`] is the generator's view of one annotated declaration:
//! simple name, owning [`Namespace`], and the [`DeclKind`] used for
//! placement validation.

use std::fmt;

/// Module path that owns a declaration, e.g. `app::domain`.
///
/// The root namespace has no segments and renders as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Namespace {
    segments: Vec<String>
}

impl Namespace {
    /// Root namespace with no segments.
    #[must_use]
    pub const fn root() -> Self {
        Self { segments: Vec::new() }
    }

    /// Parse a `::`-separated path. Empty input yields the root namespace.
    #[must_use]
    pub fn parse(path: &str) -> Self {
        if path.is_empty() {
            return Self::root();
        }
        Self {
            segments: path.split("::").map(str::to_owned).collect()
        }
    }

    /// Child namespace with `segment` appended.
    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.to_owned());
        Self { segments }
    }

    /// Path segments, outermost first.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// True for the empty root namespace.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("::"))
    }
}

/// Kind of declaration a marker was found on.
///
/// Only [`DeclKind::Struct`] is eligible for generation; everything else is
/// reported through the diagnostics sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `struct` declaration.
    Struct,
    /// `enum` declaration.
    Enum,
    /// `trait` declaration.
    Trait,
    /// `union` declaration.
    Union,
    /// Free function.
    Fn,
    /// `const` item.
    Const,
    /// `static` item.
    Static,
    /// `type` alias.
    TypeAlias,
    /// Inline or file module.
    Module,
    /// Field inside a struct or union. Tuple fields are named by index.
    Field
}

impl DeclKind {
    /// Whether generation may proceed for this kind.
    #[must_use]
    pub const fn is_concrete_type(self) -> bool {
        matches!(self, Self::Struct)
    }

    /// Label used in diagnostics.
    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Struct => "struct",
            Self::Enum => "enum",
            Self::Trait => "trait",
            Self::Union => "union",
            Self::Fn => "function",
            Self::Const => "constant",
            Self::Static => "static",
            Self::TypeAlias => "type alias",
            Self::Module => "module",
            Self::Field => "field"
        }
    }
}

/// One annotated declaration as seen by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    /// Simple (unqualified) declaration name.
    pub name:      String,
    /// Namespace the declaration lives in.
    pub namespace: Namespace,
    /// Declaration kind, used for placement validation.
    pub kind:      DeclKind
}

impl TypeDecl {
    /// Create a declaration record.
    #[must_use]
    pub fn new(name: impl Into<String>, namespace: Namespace, kind: DeclKind) -> Self {
        Self {
            name: name.into(),
            namespace,
            kind
        }
    }

    /// Fully qualified name, `namespace::Name`, or bare `Name` at the root.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        if self.namespace.is_root() {
            self.name.clone()
        } else {
            format!("{}::{}", self.namespace, self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_parse_round_trips() {
        let ns = Namespace::parse("app::domain");
        assert_eq!(ns.segments(), ["app", "domain"]);
        assert_eq!(ns.to_string(), "app::domain");
    }

    #[test]
    fn empty_path_is_root() {
        assert!(Namespace::parse("").is_root());
        assert_eq!(Namespace::root().to_string(), "");
    }

    #[test]
    fn child_appends_segment() {
        let ns = Namespace::parse("app").child("domain");
        assert_eq!(ns.to_string(), "app::domain");
    }

    #[test]
    fn qualified_name_skips_root_prefix() {
        let decl = TypeDecl::new("User", Namespace::root(), DeclKind::Struct);
        assert_eq!(decl.qualified_name(), "User");

        let decl = TypeDecl::new("User", Namespace::parse("app"), DeclKind::Struct);
        assert_eq!(decl.qualified_name(), "app::User");
    }

    #[test]
    fn only_structs_are_concrete() {
        assert!(DeclKind::Struct.is_concrete_type());
        assert!(!DeclKind::Enum.is_concrete_type());
        assert!(!DeclKind::Trait.is_concrete_type());
        assert!(!DeclKind::Field.is_concrete_type());
    }

    #[test]
    fn describe_labels_every_kind() {
        assert_eq!(DeclKind::Enum.describe(), "enum");
        assert_eq!(DeclKind::TypeAlias.describe(), "type alias");
        assert_eq!(DeclKind::Field.describe(), "field");
    }
}
