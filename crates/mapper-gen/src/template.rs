// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Named template loading.
//!
//! Templates ship embedded in the crate and can be overridden per directory.
//! Lookup is by [`TemplateId`], never by free-form path.

use std::{fs, io, path::PathBuf};

use thiserror::Error;

/// The two source templates the generator knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    /// Plain template used by `#[dao]`.
    Dao,
    /// Configurable template used by `#[generate_mapper]`.
    Mapper
}

impl TemplateId {
    /// File name used when loading from a directory.
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Dao => "dao.tpl",
            Self::Mapper => "mapper.tpl"
        }
    }
}

/// A loaded template body paired with its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    /// Which template this is.
    pub id:   TemplateId,
    /// Raw template text with `#`-prefixed tokens.
    pub text: String
}

/// Template lookup failure.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// The store has no template under this name.
    #[error("template `{0}` not found")]
    NotFound(&'static str),
    /// Reading the template file failed.
    #[error("failed to read template `{name}`")]
    Io {
        /// Template file name.
        name:   &'static str,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    }
}

/// Source of template bodies.
pub trait TemplateStore {
    /// Load the template for `id`.
    fn load(&self, id: TemplateId) -> Result<Template, TemplateError>;
}

/// Templates compiled into the binary.
///
/// This is the default store; it cannot fail with [`TemplateError::Io`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedTemplates;

impl TemplateStore for EmbeddedTemplates {
    fn load(&self, id: TemplateId) -> Result<Template, TemplateError> {
        let text = match id {
            TemplateId::Dao => include_str!("templates/dao.tpl"),
            TemplateId::Mapper => include_str!("templates/mapper.tpl")
        };
        Ok(Template {
            id,
            text: text.to_owned()
        })
    }
}

/// Templates read from a directory by [`TemplateId::file_name`].
#[derive(Debug, Clone)]
pub struct DirTemplates {
    dir: PathBuf
}

impl DirTemplates {
    /// Store rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl TemplateStore for DirTemplates {
    fn load(&self, id: TemplateId) -> Result<Template, TemplateError> {
        let path = self.dir.join(id.file_name());
        let text = fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => TemplateError::NotFound(id.file_name()),
            _ => TemplateError::Io {
                name: id.file_name(),
                source
            }
        })?;
        Ok(Template { id, text })
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn embedded_templates_always_resolve() {
        let store = EmbeddedTemplates;
        let dao = store.load(TemplateId::Dao).unwrap();
        assert!(dao.text.contains("#className"));
        let mapper = store.load(TemplateId::Mapper).unwrap();
        assert!(mapper.text.contains("#autoImport"));
        assert!(mapper.text.contains("#baseMapper"));
    }

    #[test]
    fn dir_store_reads_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("dao.tpl"), "body #className").unwrap();

        let store = DirTemplates::new(dir.path());
        let dao = store.load(TemplateId::Dao).unwrap();
        assert_eq!(dao.text, "body #className");
        assert_eq!(dao.id, TemplateId::Dao);
    }

    #[test]
    fn missing_template_reports_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let store = DirTemplates::new(dir.path());
        let err = store.load(TemplateId::Mapper).unwrap_err();
        assert!(matches!(err, TemplateError::NotFound("mapper.tpl")));
    }

    #[test]
    fn unreadable_template_reports_io_not_not_found() {
        let dir = tempfile::tempdir().unwrap();
        // A directory under the template name makes the read fail while the
        // path still exists.
        fs::create_dir(dir.path().join("dao.tpl")).unwrap();

        let store = DirTemplates::new(dir.path());
        let err = store.load(TemplateId::Dao).unwrap_err();
        assert!(matches!(err, TemplateError::Io { name: "dao.tpl", .. }));
    }
}
