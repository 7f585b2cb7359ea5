// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Artifact naming and write-once emission.
//!
//! An [`ArtifactName`] is derived from the annotated declaration: same
//! namespace, `Mapper`-suffixed type name. Sinks create artifacts exactly
//! once; a name that already exists is a distinct error so callers can
//! treat it as "someone got there first" rather than a failure.

use std::{
    collections::BTreeMap,
    fs::{self, OpenOptions},
    io::{self, Write},
    path::PathBuf
};

use convert_case::{Case, Casing};
use thiserror::Error;

use crate::decl::{Namespace, TypeDecl};

/// Suffix appended to the annotated type's name.
pub const MAPPER_SUFFIX: &str = "Mapper";

/// Fully qualified name of a generated artifact.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ArtifactName {
    namespace: Namespace,
    type_name: String
}

impl ArtifactName {
    /// Artifact name for `decl`: same namespace, `Mapper`-suffixed type.
    #[must_use]
    pub fn derive(decl: &TypeDecl) -> Self {
        Self {
            namespace: decl.namespace.clone(),
            type_name: format!("{}{MAPPER_SUFFIX}", decl.name)
        }
    }

    /// Namespace of the artifact.
    #[must_use]
    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// `Mapper`-suffixed type name.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Fully qualified artifact name, `namespace::NameMapper`.
    #[must_use]
    pub fn qualified(&self) -> String {
        if self.namespace.is_root() {
            self.type_name.clone()
        } else {
            format!("{}::{}", self.namespace, self.type_name)
        }
    }

    /// Relative file path: snake_case directories and file name.
    ///
    /// `app::domain` + `UserAccountMapper` → `app/domain/user_account_mapper.rs`.
    #[must_use]
    pub fn relative_path(&self) -> PathBuf {
        let mut path: PathBuf = self
            .namespace
            .segments()
            .iter()
            .map(|segment| segment.to_case(Case::Snake))
            .collect();
        path.push(format!("{}.rs", self.type_name.to_case(Case::Snake)));
        path
    }
}

/// Artifact creation failure.
#[derive(Debug, Error)]
pub enum EmitError {
    /// The artifact was already created in this or an earlier run.
    #[error("artifact `{0}` already exists")]
    AlreadyExists(String),
    /// Writing the artifact failed.
    #[error("failed to write artifact `{name}`")]
    Io {
        /// Qualified artifact name.
        name:   String,
        /// Underlying I/O error.
        #[source]
        source: io::Error
    }
}

/// Destination for generated sources. Creation is write-once.
pub trait SourceSink {
    /// Create the artifact with `content`, failing if it already exists.
    fn create(&mut self, name: &ArtifactName, content: &str) -> Result<(), EmitError>;
}

/// Sink writing `.rs` files under a root directory.
#[derive(Debug, Clone)]
pub struct FsSink {
    root: PathBuf
}

impl FsSink {
    /// Sink rooted at `root`.
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Absolute path an artifact would be written to.
    #[must_use]
    pub fn path_for(&self, name: &ArtifactName) -> PathBuf {
        self.root.join(name.relative_path())
    }
}

impl SourceSink for FsSink {
    fn create(&mut self, name: &ArtifactName, content: &str) -> Result<(), EmitError> {
        let path = self.path_for(name);
        let io_error = |source| EmitError::Io {
            name: name.qualified(),
            source
        };

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .map_err(|source| match source.kind() {
                io::ErrorKind::AlreadyExists => EmitError::AlreadyExists(name.qualified()),
                _ => io_error(source)
            })?;
        file.write_all(content.as_bytes()).map_err(io_error)?;
        Ok(())
    }
}

/// In-memory sink for tests and dry runs. Keys are qualified names.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    artifacts: BTreeMap<String, String>
}

impl MemorySink {
    /// Empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Content stored for `name`, if created.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.artifacts.get(name).map(String::as_str)
    }

    /// Qualified names of all created artifacts, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.artifacts.keys().map(String::as_str).collect()
    }

    /// Number of created artifacts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.artifacts.len()
    }

    /// True if nothing was created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.artifacts.is_empty()
    }
}

impl SourceSink for MemorySink {
    fn create(&mut self, name: &ArtifactName, content: &str) -> Result<(), EmitError> {
        let key = name.qualified();
        if self.artifacts.contains_key(&key) {
            return Err(EmitError::AlreadyExists(key));
        }
        self.artifacts.insert(key, content.to_owned());
        Ok(())
    }
}
