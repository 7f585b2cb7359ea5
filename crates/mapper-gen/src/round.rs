// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! One scanned unit of work.

use crate::{decl::TypeDecl, marker::MapperAttrs};

/// A `#[generate_mapper]` declaration with its parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapperTarget {
    /// The annotated declaration.
    pub decl:  TypeDecl,
    /// Arguments from the marker, defaults applied.
    pub attrs: MapperAttrs
}

/// Everything one scan pass found, grouped by marker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Round {
    dao:     Vec<TypeDecl>,
    mappers: Vec<MapperTarget>
}

impl Round {
    /// Empty round.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a `#[dao]` declaration.
    pub fn push_dao(&mut self, decl: TypeDecl) {
        self.dao.push(decl);
    }

    /// Record a `#[generate_mapper]` declaration.
    pub fn push_mapper(&mut self, decl: TypeDecl, attrs: MapperAttrs) {
        self.mappers.push(MapperTarget { decl, attrs });
    }

    /// Fold `other` into this round, keeping scan order.
    pub fn merge(&mut self, other: Round) {
        self.dao.extend(other.dao);
        self.mappers.extend(other.mappers);
    }

    /// Declarations marked `#[dao]`, in scan order.
    #[must_use]
    pub fn dao(&self) -> &[TypeDecl] {
        &self.dao
    }

    /// Declarations marked `#[generate_mapper]`, in scan order.
    #[must_use]
    pub fn mappers(&self) -> &[MapperTarget] {
        &self.mappers
    }

    /// True when the scan found no markers at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dao.is_empty() && self.mappers.is_empty()
    }

    /// Declarations carrying both markers.
    ///
    /// Both processors derive the same artifact name for these, so the
    /// second write is skipped and the overlap is worth a warning.
    #[must_use]
    pub fn dual_marked(&self) -> Vec<&TypeDecl> {
        self.dao
            .iter()
            .filter(|decl| self.mappers.iter().any(|target| target.decl == **decl))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{DeclKind, Namespace};

    fn decl(name: &str) -> TypeDecl {
        TypeDecl::new(name, Namespace::parse("app"), DeclKind::Struct)
    }

    #[test]
    fn merge_keeps_scan_order() {
        let mut first = Round::new();
        first.push_dao(decl("A"));
        let mut second = Round::new();
        second.push_dao(decl("B"));
        second.push_mapper(decl("C"), MapperAttrs::default());

        first.merge(second);
        let names: Vec<_> = first.dao().iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);
        assert_eq!(first.mappers().len(), 1);
    }

    #[test]
    fn dual_marked_finds_overlap() {
        let mut round = Round::new();
        round.push_dao(decl("User"));
        round.push_dao(decl("Order"));
        round.push_mapper(decl("User"), MapperAttrs::default());

        let dual = round.dual_marked();
        assert_eq!(dual.len(), 1);
        assert_eq!(dual[0].name, "User");
    }

    #[test]
    fn empty_round_reports_empty() {
        assert!(Round::new().is_empty());
        let mut round = Round::new();
        round.push_dao(decl("User"));
        assert!(!round.is_empty());
    }
}
