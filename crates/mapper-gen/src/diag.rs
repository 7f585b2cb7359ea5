// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Diagnostics reported during generation.
//!
//! Mirrors a compiler message sink: processors report, the host decides how
//! to render. Reporting an error never unwinds the run by itself.

use std::fmt;

use crate::decl::TypeDecl;

/// Message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Generation for the subject was refused.
    Error,
    /// Suspicious, but generation continued.
    Warning
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("error"),
            Self::Warning => f.write_str("warning")
        }
    }
}

/// One reported message tied to a scanned declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the message.
    pub severity: Severity,
    /// Human-readable message.
    pub message:  String,
    /// Declaration the message is about.
    pub subject:  TypeDecl
}

impl Diagnostic {
    /// Error-severity diagnostic for `subject`.
    #[must_use]
    pub fn error(message: impl Into<String>, subject: TypeDecl) -> Self {
        Self {
            severity: Severity::Error,
            message:  message.into(),
            subject
        }
    }

    /// Warning-severity diagnostic for `subject`.
    #[must_use]
    pub fn warning(message: impl Into<String>, subject: TypeDecl) -> Self {
        Self {
            severity: Severity::Warning,
            message:  message.into(),
            subject
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} ({})",
            self.severity,
            self.message,
            self.subject.qualified_name()
        )
    }
}

/// Receiver for diagnostics.
pub trait DiagnosticsSink {
    /// Record one diagnostic.
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticsSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decl::{DeclKind, Namespace};

    #[test]
    fn display_includes_severity_and_subject() {
        let decl = TypeDecl::new("Color", Namespace::parse("app"), DeclKind::Enum);
        let diag = Diagnostic::error("enums are not supported", decl);
        assert_eq!(diag.to_string(), "error: enums are not supported (app::Color)");
    }

    #[test]
    fn vec_sink_collects_in_order() {
        let decl = TypeDecl::new("User", Namespace::root(), DeclKind::Struct);
        let mut sink: Vec<Diagnostic> = Vec::new();
        sink.report(Diagnostic::warning("first", decl.clone()));
        sink.report(Diagnostic::error("second", decl));

        assert_eq!(sink.len(), 2);
        assert_eq!(sink[0].severity, Severity::Warning);
        assert_eq!(sink[1].severity, Severity::Error);
    }
}
