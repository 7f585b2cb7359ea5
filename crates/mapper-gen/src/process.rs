// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Round processing.
//!
//! Two processors split a round by marker. Each validates its declarations,
//! builds a substitution table, renders its template, and asks the sink to
//! create the artifact. An ineligible declaration halts that processor's
//! remaining declarations for the round; the other processor is unaffected.

use chrono::NaiveDate;

use crate::{
    context::{dao_context, mapper_context},
    decl::TypeDecl,
    diag::{Diagnostic, DiagnosticsSink},
    emit::{ArtifactName, EmitError, SourceSink},
    error::{GenError, GenResult},
    marker::{DAO_MARKER, MAPPER_MARKER},
    round::{MapperTarget, Round},
    subst::{Substitutions, substitute},
    template::{TemplateId, TemplateStore}
};

/// Shared services handed to processors for one round.
pub struct ProcessingEnv<'a> {
    /// Template source.
    pub templates:   &'a dyn TemplateStore,
    /// Destination for generated sources.
    pub artifacts:   &'a mut dyn SourceSink,
    /// Receiver for validation messages.
    pub diagnostics: &'a mut dyn DiagnosticsSink,
    /// Date stamped into generated headers.
    pub date:        NaiveDate
}

/// What one processor did with its share of a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessorReport {
    /// Whether the processor consumed its marker for this round.
    ///
    /// Set when validation halted the processor; completed rounds leave the
    /// marker unclaimed so other tools may observe it.
    pub claimed:   bool,
    /// Artifacts created, in processing order.
    pub artifacts: Vec<ArtifactName>
}

/// Processor for the plain `#[dao]` marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct DaoProcessor;

impl DaoProcessor {
    /// Marker this processor answers for.
    pub const MARKER: &'static str = DAO_MARKER;

    /// Generate one artifact per eligible `#[dao]` declaration.
    pub fn process(env: &mut ProcessingEnv<'_>, decls: &[TypeDecl]) -> GenResult<ProcessorReport> {
        let mut artifacts = Vec::new();
        for decl in decls {
            if !eligible(env, Self::MARKER, decl) {
                return Ok(ProcessorReport {
                    claimed: true,
                    artifacts
                });
            }
            let subs = dao_context(decl, env.date);
            if let Some(name) = generate(env, TemplateId::Dao, decl, &subs)? {
                artifacts.push(name);
            }
        }
        Ok(ProcessorReport {
            claimed: false,
            artifacts
        })
    }
}

/// Processor for the configurable `#[generate_mapper]` marker.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapperProcessor;

impl MapperProcessor {
    /// Marker this processor answers for.
    pub const MARKER: &'static str = MAPPER_MARKER;

    /// Generate one artifact per eligible `#[generate_mapper]` declaration.
    pub fn process(
        env: &mut ProcessingEnv<'_>,
        targets: &[MapperTarget]
    ) -> GenResult<ProcessorReport> {
        let mut artifacts = Vec::new();
        for target in targets {
            if !eligible(env, Self::MARKER, &target.decl) {
                return Ok(ProcessorReport {
                    claimed: true,
                    artifacts
                });
            }
            let subs = mapper_context(&target.decl, &target.attrs, env.date);
            if let Some(name) = generate(env, TemplateId::Mapper, &target.decl, &subs)? {
                artifacts.push(name);
            }
        }
        Ok(ProcessorReport {
            claimed: false,
            artifacts
        })
    }
}

/// Result of processing one full round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundReport {
    /// Artifacts created by both processors, dao side first.
    pub artifacts:      Vec<ArtifactName>,
    /// Claim state of the `#[dao]` processor.
    pub dao_claimed:    bool,
    /// Claim state of the `#[generate_mapper]` processor.
    pub mapper_claimed: bool
}

/// Run both processors over `round`.
///
/// Declarations carrying both markers draw a warning up front; the dao
/// processor then wins the artifact and the mapper side skips it.
pub fn process_round(env: &mut ProcessingEnv<'_>, round: &Round) -> GenResult<RoundReport> {
    for decl in round.dual_marked() {
        env.diagnostics.report(Diagnostic::warning(
            format!(
                "`{}` carries both #[{}] and #[{}]; the first generated mapper wins",
                decl.name,
                DaoProcessor::MARKER,
                MapperProcessor::MARKER
            ),
            decl.clone()
        ));
    }

    let dao = DaoProcessor::process(env, round.dao())?;
    let mapper = MapperProcessor::process(env, round.mappers())?;

    let mut artifacts = dao.artifacts;
    artifacts.extend(mapper.artifacts);
    Ok(RoundReport {
        artifacts,
        dao_claimed:    dao.claimed,
        mapper_claimed: mapper.claimed
    })
}

/// Validate placement. Reports an error diagnostic for ineligible kinds.
fn eligible(env: &mut ProcessingEnv<'_>, marker: &str, decl: &TypeDecl) -> bool {
    if decl.kind.is_concrete_type() {
        return true;
    }
    env.diagnostics.report(Diagnostic::error(
        format!(
            "#[{marker}] may only mark a struct, found {} `{}`",
            decl.kind.describe(),
            decl.name
        ),
        decl.clone()
    ));
    false
}

/// Render `template` for `decl` and create the artifact.
///
/// Returns `Ok(None)` when the artifact already exists; the first writer
/// wins and reruns stay quiet. Other emission failures surface as errors.
fn generate(
    env: &mut ProcessingEnv<'_>,
    template: TemplateId,
    decl: &TypeDecl,
    subs: &Substitutions
) -> GenResult<Option<ArtifactName>> {
    let loaded = env.templates.load(template)?;
    let content = substitute(&loaded.text, subs)?;
    let name = ArtifactName::derive(decl);

    match env.artifacts.create(&name, &content) {
        Ok(()) => {
            tracing::info!(artifact = %name.qualified(), "generated mapper source");
            Ok(Some(name))
        }
        Err(EmitError::AlreadyExists(existing)) => {
            tracing::debug!(artifact = %existing, "artifact already exists, skipping");
            Ok(None)
        }
        Err(EmitError::Io { name, source }) => Err(GenError::Emit { name, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        decl::{DeclKind, Namespace},
        diag::Severity,
        emit::MemorySink,
        marker::MapperAttrs,
        template::{DirTemplates, EmbeddedTemplates}
    };

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    fn decl(name: &str, kind: DeclKind) -> TypeDecl {
        TypeDecl::new(name, Namespace::parse("app"), kind)
    }

    #[test]
    fn dao_processor_emits_one_artifact_per_struct() {
        let templates = EmbeddedTemplates;
        let mut sink = MemorySink::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut env = ProcessingEnv {
            templates:   &templates,
            artifacts:   &mut sink,
            diagnostics: &mut diagnostics,
            date:        date()
        };

        let decls = [decl("User", DeclKind::Struct), decl("Order", DeclKind::Struct)];
        let report = DaoProcessor::process(&mut env, &decls).unwrap();

        assert!(!report.claimed);
        assert_eq!(report.artifacts.len(), 2);
        assert_eq!(sink.names(), ["app::OrderMapper", "app::UserMapper"]);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn ineligible_kind_halts_and_claims() {
        let templates = EmbeddedTemplates;
        let mut sink = MemorySink::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut env = ProcessingEnv {
            templates:   &templates,
            artifacts:   &mut sink,
            diagnostics: &mut diagnostics,
            date:        date()
        };

        let decls = [decl("Color", DeclKind::Enum), decl("User", DeclKind::Struct)];
        let report = DaoProcessor::process(&mut env, &decls).unwrap();

        assert!(report.claimed);
        assert!(report.artifacts.is_empty());
        assert!(sink.is_empty());
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Error);
        assert!(diagnostics[0].message.contains("enum `Color`"));
    }

    #[test]
    fn structs_before_the_halt_keep_their_artifacts() {
        let templates = EmbeddedTemplates;
        let mut sink = MemorySink::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut env = ProcessingEnv {
            templates:   &templates,
            artifacts:   &mut sink,
            diagnostics: &mut diagnostics,
            date:        date()
        };

        let decls = [decl("User", DeclKind::Struct), decl("Visible", DeclKind::Trait)];
        let report = DaoProcessor::process(&mut env, &decls).unwrap();

        assert!(report.claimed);
        assert_eq!(report.artifacts.len(), 1);
        assert_eq!(sink.names(), ["app::UserMapper"]);
    }

    #[test]
    fn duplicate_declarations_emit_once() {
        let templates = EmbeddedTemplates;
        let mut sink = MemorySink::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut env = ProcessingEnv {
            templates:   &templates,
            artifacts:   &mut sink,
            diagnostics: &mut diagnostics,
            date:        date()
        };

        let decls = [decl("User", DeclKind::Struct), decl("User", DeclKind::Struct)];
        let report = DaoProcessor::process(&mut env, &decls).unwrap();

        assert!(!report.claimed);
        assert_eq!(report.artifacts.len(), 1);
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn mapper_validation_does_not_halt_dao() {
        let templates = EmbeddedTemplates;
        let mut sink = MemorySink::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut env = ProcessingEnv {
            templates:   &templates,
            artifacts:   &mut sink,
            diagnostics: &mut diagnostics,
            date:        date()
        };

        let mut round = Round::new();
        round.push_dao(decl("User", DeclKind::Struct));
        round.push_mapper(decl("Visible", DeclKind::Trait), MapperAttrs::default());

        let report = process_round(&mut env, &round).unwrap();
        assert!(!report.dao_claimed);
        assert!(report.mapper_claimed);
        assert_eq!(sink.names(), ["app::UserMapper"]);
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn dual_marker_warns_and_emits_once() {
        let templates = EmbeddedTemplates;
        let mut sink = MemorySink::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut env = ProcessingEnv {
            templates:   &templates,
            artifacts:   &mut sink,
            diagnostics: &mut diagnostics,
            date:        date()
        };

        let mut round = Round::new();
        round.push_dao(decl("User", DeclKind::Struct));
        round.push_mapper(decl("User", DeclKind::Struct), MapperAttrs::default());

        let report = process_round(&mut env, &round).unwrap();
        assert_eq!(report.artifacts.len(), 1);
        assert_eq!(sink.len(), 1);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].severity, Severity::Warning);
    }

    #[test]
    fn missing_template_surfaces_as_error() {
        let dir = tempfile::tempdir().unwrap();
        let templates = DirTemplates::new(dir.path());
        let mut sink = MemorySink::new();
        let mut diagnostics: Vec<Diagnostic> = Vec::new();
        let mut env = ProcessingEnv {
            templates:   &templates,
            artifacts:   &mut sink,
            diagnostics: &mut diagnostics,
            date:        date()
        };

        let decls = [decl("User", DeclKind::Struct)];
        let err = DaoProcessor::process(&mut env, &decls).unwrap_err();
        assert!(matches!(err, GenError::Template(_)));
        assert!(sink.is_empty());
    }
}
