// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Marker names and `#[generate_mapper(...)]` argument parsing.

use darling::{FromMeta, ast::NestedMeta};
use proc_macro2::TokenStream;

/// Attribute name of the plain marker.
pub const DAO_MARKER: &str = "dao";
/// Attribute name of the configurable marker.
pub const MAPPER_MARKER: &str = "generate_mapper";

fn default_auto_import() -> Vec<String> {
    vec!["mapper_core::BaseMapper".to_owned()]
}

fn default_base_mapper() -> String {
    "BaseMapper".to_owned()
}

/// Parsed `#[generate_mapper(...)]` arguments, defaults applied.
///
/// | Argument | Default | Meaning |
/// |----------|---------|---------|
/// | `auto_import` | `mapper_core::BaseMapper` | Repeatable. Paths emitted as `use` lines |
/// | `base_mapper` | `BaseMapper` | Trait the generated mapper implements |
#[derive(Debug, Clone, PartialEq, Eq, FromMeta)]
pub struct MapperAttrs {
    /// Import paths for the generated source, one `use` line each.
    #[darling(multiple)]
    pub auto_import: Vec<String>,
    /// Trait name substituted for `#baseMapper`.
    #[darling(default = "default_base_mapper")]
    pub base_mapper: String
}

impl Default for MapperAttrs {
    fn default() -> Self {
        Self {
            auto_import: default_auto_import(),
            base_mapper: default_base_mapper()
        }
    }
}

impl MapperAttrs {
    /// Parse attribute arguments from the marker's token list.
    ///
    /// An absent `auto_import` falls back to the default import rather than
    /// an empty list, so `#[generate_mapper]` without arguments behaves like
    /// `#[generate_mapper(auto_import = "mapper_core::BaseMapper")]`.
    pub fn from_tokens(tokens: TokenStream) -> darling::Result<Self> {
        let metas = NestedMeta::parse_meta_list(tokens).map_err(darling::Error::from)?;
        let mut attrs = Self::from_list(&metas)?;
        if attrs.auto_import.is_empty() {
            attrs.auto_import = default_auto_import();
        }
        Ok(attrs)
    }
}
