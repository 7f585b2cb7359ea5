// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for the generator.
//!
//! Host-facing failures only. Validation findings about annotated
//! declarations go through the diagnostics sink instead, and an artifact
//! that already exists is handled inside processing, never surfaced here.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::{subst::SubstituteError, template::TemplateError};

/// Convenience alias used across the crate.
pub type GenResult<T> = Result<T, GenError>;

/// Any failure the generator can surface to its host.
#[derive(Debug, Error)]
pub enum GenError {
    /// Template lookup or read failed.
    #[error(transparent)]
    Template(#[from] TemplateError),

    /// Template expansion failed.
    #[error(transparent)]
    Substitute(#[from] SubstituteError),

    /// Artifact creation failed for a reason other than already existing.
    #[error("failed to emit `{name}`")]
    Emit {
        /// Qualified artifact name.
        name:   String,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    },

    /// A source file could not be read.
    #[error("failed to read source `{}`", .path.display())]
    SourceIo {
        /// Path of the unreadable file.
        path:   PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    },

    /// A source file could not be parsed as Rust.
    #[error("failed to parse `{origin}`")]
    Parse {
        /// File path or scan origin label.
        origin: String,
        /// Underlying parse error.
        #[source]
        source: syn::Error
    },

    /// Marker arguments did not validate.
    #[error("invalid #[{marker}] arguments on `{decl}`")]
    Marker {
        /// Marker attribute name.
        marker: &'static str,
        /// Qualified declaration name.
        decl:   String,
        /// Underlying argument error.
        #[source]
        source: darling::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn emit_error_names_the_artifact() {
        let err = GenError::Emit {
            name:   "app::UserMapper".to_owned(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied")
        };
        assert_eq!(err.to_string(), "failed to emit `app::UserMapper`");
    }

    #[test]
    fn template_errors_pass_through_transparently() {
        let err = GenError::from(TemplateError::NotFound("dao.tpl"));
        assert_eq!(err.to_string(), "template `dao.tpl` not found");
    }

    #[test]
    fn source_io_shows_the_path() {
        let err = GenError::SourceIo {
            path:   PathBuf::from("src/missing.rs"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone")
        };
        assert_eq!(err.to_string(), "failed to read source `src/missing.rs`");
    }
}
