// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! One-call entry point for build scripts.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

use crate::{
    decl::Namespace,
    diag::{Diagnostic, Severity},
    emit::{ArtifactName, FsSink},
    error::GenResult,
    process::{ProcessingEnv, process_round},
    round::Round,
    scan::Scanner,
    template::{DirTemplates, EmbeddedTemplates, TemplateStore}
};

/// Builder-style generator facade.
///
/// Scans sources, processes the round, and writes artifacts under the
/// output directory.
///
/// ```rust,ignore
/// // build.rs
/// use mapper_gen::Generator;
///
/// fn main() {
///     let out = std::env::var("OUT_DIR").expect("OUT_DIR");
///     let outcome = Generator::new(&out)
///         .run(["src/domain.rs".as_ref()])
///         .expect("mapper generation");
///     for diagnostic in &outcome.diagnostics {
///         println!("cargo:warning={diagnostic}");
///     }
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    out_dir:      PathBuf,
    template_dir: Option<PathBuf>,
    root:         Namespace,
    date:         Option<NaiveDate>
}

impl Generator {
    /// Generator writing artifacts under `out_dir`.
    #[must_use]
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir:      out_dir.into(),
            template_dir: None,
            root:         Namespace::root(),
            date:         None
        }
    }

    /// Override the embedded templates with a directory.
    #[must_use]
    pub fn template_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.template_dir = Some(dir.into());
        self
    }

    /// Qualify scanned declarations under `root`.
    #[must_use]
    pub fn root_namespace(mut self, root: Namespace) -> Self {
        self.root = root;
        self
    }

    /// Pin the `#date` stamp instead of using today.
    #[must_use]
    pub fn date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Scan `sources` and process the resulting round.
    pub fn run<'p>(&self, sources: impl IntoIterator<Item = &'p Path>) -> GenResult<RoundOutcome> {
        let round = Scanner::with_root(self.root.clone()).scan_files(sources)?;
        self.run_round(&round)
    }

    /// Process an already-scanned round.
    pub fn run_round(&self, round: &Round) -> GenResult<RoundOutcome> {
        let templates: Box<dyn TemplateStore> = match &self.template_dir {
            Some(dir) => Box::new(DirTemplates::new(dir.as_path())),
            None => Box::new(EmbeddedTemplates)
        };
        let mut sink = FsSink::new(self.out_dir.as_path());
        let mut diagnostics = Vec::new();
        let date = self.date.unwrap_or_else(|| Local::now().date_naive());

        let mut env = ProcessingEnv {
            templates:   templates.as_ref(),
            artifacts:   &mut sink,
            diagnostics: &mut diagnostics,
            date
        };
        let report = process_round(&mut env, round)?;

        Ok(RoundOutcome {
            artifacts: report.artifacts,
            diagnostics,
            dao_claimed:    report.dao_claimed,
            mapper_claimed: report.mapper_claimed
        })
    }
}

/// Everything a host needs after one generator run.
#[derive(Debug, Clone)]
pub struct RoundOutcome {
    /// Artifacts created during the run.
    pub artifacts:      Vec<ArtifactName>,
    /// Diagnostics reported by the processors.
    pub diagnostics:    Vec<Diagnostic>,
    /// Claim state of the `#[dao]` processor.
    pub dao_claimed:    bool,
    /// Claim state of the `#[generate_mapper]` processor.
    pub mapper_claimed: bool
}

impl RoundOutcome {
    /// True when any error-severity diagnostic was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|diagnostic| diagnostic.severity == Severity::Error)
    }
}
