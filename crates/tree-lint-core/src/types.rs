//! Core types for issues and scan results.

use crate::check::CheckError;
use crate::context::FileContext;
use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};

/// Severity level for issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Informational message, does not fail a scan.
    Info,
    /// Warning that should be addressed.
    Warning,
    /// Error that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A finding reported by a check. Immutable once emitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Check code (e.g. "TL001").
    pub code: String,
    /// Check name (e.g. "bad-type-parameter-name").
    pub rule: String,
    /// Severity of this issue.
    pub severity: Severity,
    /// 1-indexed source line.
    pub line: usize,
    /// 1-indexed source column, when known.
    pub column: Option<usize>,
    /// Human-readable message.
    pub message: String,
}

impl Issue {
    /// Creates a new issue.
    #[must_use]
    pub fn new(
        code: impl Into<String>,
        rule: impl Into<String>,
        severity: Severity,
        line: usize,
        message: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            rule: rule.into(),
            severity,
            line,
            column: None,
            message: message.into(),
        }
    }

    /// Sets the column.
    #[must_use]
    pub fn at_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }
}

impl std::fmt::Display for Issue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.column {
            Some(column) => write!(f, "{}:{}", self.line, column)?,
            None => write!(f, "{}", self.line)?,
        }
        write!(
            f,
            ": {} [{}] {}",
            self.severity, self.code, self.message
        )
    }
}

/// Converts an [`Issue`] to a miette diagnostic for rich display.
///
/// The span is resolved through the file context when source text is
/// available; otherwise it degrades to a zero-length span at offset 0.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct IssueDiagnostic {
    message: String,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl IssueDiagnostic {
    /// Builds a diagnostic for an issue found in the given file.
    #[must_use]
    pub fn new(issue: &Issue, file: &FileContext<'_>) -> Self {
        let offset = file.offset_for(issue.line, issue.column.unwrap_or(1));
        Self {
            message: format!("[{}] {}", issue.code, issue.message),
            span: SourceSpan::from((offset, 0)),
            label_message: issue.rule.clone(),
        }
    }
}

/// Why a check dropped out of a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureKind {
    /// The check's configuration is invalid; surfaced before any node of
    /// the file was dispatched to it.
    Config(CheckError),
    /// The check panicked while visiting; it was skipped for the
    /// remainder of the file.
    Panicked(String),
}

/// Per-check failure record attached to a [`ScanResult`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckFailure {
    /// Name of the failed check.
    pub rule: String,
    /// What went wrong.
    pub kind: FailureKind,
}

impl std::fmt::Display for CheckFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            FailureKind::Config(err) => write!(f, "check `{}` not run: {err}", self.rule),
            FailureKind::Panicked(msg) => {
                write!(f, "check `{}` aborted for this file: {msg}", self.rule)
            }
        }
    }
}

/// Result of scanning one file.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct ScanResult {
    /// Issues found, sorted by line then column.
    pub issues: Vec<Issue>,
    /// Checks that failed during this scan.
    pub failures: Vec<CheckFailure>,
}

impl ScanResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if any issue has error severity.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.has_issues_at(Severity::Error)
    }

    /// Returns true if any issue meets the severity threshold.
    #[must_use]
    pub fn has_issues_at(&self, severity: Severity) -> bool {
        self.issues.iter().any(|i| i.severity >= severity)
    }

    /// Issues filtered by severity.
    #[must_use]
    pub fn by_severity(&self, severity: Severity) -> Vec<&Issue> {
        self.issues
            .iter()
            .filter(|i| i.severity == severity)
            .collect()
    }

    /// Counts issues as (errors, warnings, infos).
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize, usize) {
        let mut counts = (0, 0, 0);
        for issue in &self.issues {
            match issue.severity {
                Severity::Error => counts.0 += 1,
                Severity::Warning => counts.1 += 1,
                Severity::Info => counts.2 += 1,
            }
        }
        counts
    }
}
