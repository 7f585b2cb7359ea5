// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Core traits for mapper-gen generated mapper types.
//!
//! This crate provides the runtime side of mapper generation. Generated
//! `{Entity}Mapper` types implement [`BaseMapper`], which resolves the
//! backing table from the entity's type name and provides ready-made
//! single-table SQL.
//!
//! # Overview
//!
//! - [`BaseMapper`] — Table resolution and read/delete SQL
//! - [`CrudMapper`] — Extension with insert/update SQL
//! - [`prelude`] — Convenient re-exports
//!
//! # Usage
//!
//! Most users never implement these traits by hand; the `mapper-gen` build
//! step emits the impls. For manual implementations:
//!
//! ```rust
//! use mapper_core::BaseMapper;
//!
//! struct UserAccount;
//! struct UserAccountMapper;
//!
//! impl BaseMapper for UserAccountMapper {
//!     type Entity = UserAccount;
//! }
//!
//! assert_eq!(UserAccountMapper::table(), "user_account");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod prelude;

use convert_case::{Case, Casing};

/// Base mapper trait implemented by every generated `{Entity}Mapper` type.
///
/// The table name defaults to the snake_case form of the entity's simple
/// type name (`UserAccount` → `user_account`). Override [`BaseMapper::table`]
/// when the table is named differently.
pub trait BaseMapper {
    /// Entity type this mapper serves.
    type Entity;

    /// Database table backing [`BaseMapper::Entity`].
    fn table() -> String {
        simple_name(std::any::type_name::<Self::Entity>()).to_case(Case::Snake)
    }

    /// `SELECT` a single row by primary key.
    fn select_by_id_sql() -> String {
        format!("SELECT * FROM {} WHERE id = ?", Self::table())
    }

    /// `SELECT` every row of the table.
    fn select_all_sql() -> String {
        format!("SELECT * FROM {}", Self::table())
    }

    /// `DELETE` a single row by primary key.
    fn delete_by_id_sql() -> String {
        format!("DELETE FROM {} WHERE id = ?", Self::table())
    }

    /// Count all rows of the table.
    fn count_sql() -> String {
        format!("SELECT COUNT(*) FROM {}", Self::table())
    }
}

/// Write-side extension of [`BaseMapper`].
///
/// Column lists come from the caller; the mapper itself has no field-level
/// knowledge of the entity.
pub trait CrudMapper: BaseMapper {
    /// `INSERT` with positional placeholders for `columns`.
    fn insert_sql(columns: &[&str]) -> String {
        let placeholders = vec!["?"; columns.len()].join(", ");
        format!(
            "INSERT INTO {} ({}) VALUES ({})",
            Self::table(),
            columns.join(", "),
            placeholders
        )
    }

    /// `UPDATE` by primary key, assigning each of `columns`.
    fn update_by_id_sql(columns: &[&str]) -> String {
        let assignments = columns
            .iter()
            .map(|column| format!("{column} = ?"))
            .collect::<Vec<_>>()
            .join(", ");
        format!("UPDATE {} SET {} WHERE id = ?", Self::table(), assignments)
    }
}

/// Strip module path and generic arguments from a fully qualified type name.
fn simple_name(full: &str) -> &str {
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
