// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(
    missing_docs,
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rust_2018_idioms
)]
#![deny(unsafe_code)]

//! # Module Map
//!
//! - [`scan`] — Source walking: markers to a [`Round`]
//! - [`process`] — Round processing: validation, rendering, emission
//! - [`template`] / [`subst`] — Template lookup and token expansion
//! - [`context`] — Substitution tables for the two generation paths
//! - [`emit`] — Artifact naming and write-once sinks
//! - [`diag`] — Diagnostics reported alongside generation
//! - [`generator`] — One-call [`Generator`] facade for build scripts

pub mod context;
pub mod decl;
pub mod diag;
pub mod emit;
pub mod error;
pub mod generator;
pub mod marker;
pub mod process;
pub mod round;
pub mod scan;
pub mod subst;
pub mod template;

pub use crate::{
    decl::{DeclKind, Namespace, TypeDecl},
    diag::{Diagnostic, DiagnosticsSink, Severity},
    emit::{ArtifactName, EmitError, FsSink, MemorySink, SourceSink},
    error::{GenError, GenResult},
    generator::{Generator, RoundOutcome},
    marker::MapperAttrs,
    process::{
        DaoProcessor, MapperProcessor, ProcessingEnv, ProcessorReport, RoundReport, process_round
    },
    round::{MapperTarget, Round},
    scan::Scanner,
    subst::{SubstituteError, Substitutions, substitute},
    template::{
        DirTemplates, EmbeddedTemplates, Template, TemplateError, TemplateId, TemplateStore
    }
};
