//! Issue sink handed to check visitors.

use crate::tree::{Node, Trivia};
use crate::types::{Issue, Severity};

/// Append-only issue sink with one check's identity baked in.
///
/// The scanner creates a reporter per dispatched check invocation, so a
/// visitor only supplies a location and a message; code, name, and
/// (possibly overridden) severity come from the scanner. Fire-and-forget:
/// reporting never fails and issues are immutable once recorded.
#[derive(Debug)]
pub struct Reporter<'a> {
    code: &'a str,
    rule: &'a str,
    severity: Severity,
    issues: &'a mut Vec<Issue>,
}

impl<'a> Reporter<'a> {
    /// Creates a reporter writing into the given buffer under one check's
    /// identity.
    #[must_use]
    pub fn new(
        code: &'a str,
        rule: &'a str,
        severity: Severity,
        issues: &'a mut Vec<Issue>,
    ) -> Self {
        Self {
            code,
            rule,
            severity,
            issues,
        }
    }

    /// Reports an issue at a source line.
    pub fn report(&mut self, line: usize, message: impl Into<String>) {
        self.issues
            .push(Issue::new(self.code, self.rule, self.severity, line, message));
    }

    /// Reports an issue at a line/column position.
    pub fn report_at(&mut self, line: usize, column: usize, message: impl Into<String>) {
        self.issues.push(
            Issue::new(self.code, self.rule, self.severity, line, message).at_column(column),
        );
    }

    /// Reports an issue at a node's position.
    pub fn report_node(&mut self, node: &Node, message: impl Into<String>) {
        let issue = Issue::new(self.code, self.rule, self.severity, node.line(), message);
        self.issues.push(match node.column() {
            Some(column) => issue.at_column(column),
            None => issue,
        });
    }

    /// Reports an issue at a trivia's line.
    pub fn report_trivia(&mut self, trivia: &Trivia, message: impl Into<String>) {
        self.report(trivia.line(), message);
    }
}
