//! Template check flagging comments that match a regular expression.
//!
//! # Configuration
//!
//! - `regular_expression`: expression a whole comment must match,
//!   `.` matching newlines (default: empty, which makes the check inert).
//! - `message`: issue message (default: "The regular expression matches
//!   this comment.").

use regex::Regex;
use tree_lint_core::{
    compile_full_match, Check, CheckError, Kind, NodeVisitor, Reporter, RuleParams, ScanContext,
    Severity, Trivia,
};

/// Rule code for comment-regular-expression.
pub const CODE: &str = "TL003";

/// Rule name for comment-regular-expression.
pub const NAME: &str = "comment-regular-expression";

const DEFAULT_MESSAGE: &str = "The regular expression matches this comment.";

/// Reports comments wholly matching a configured regular expression.
#[derive(Debug, Clone)]
pub struct CommentRegularExpression {
    /// The regular expression; empty means the check reports nothing.
    pub regular_expression: String,
    /// The issue message.
    pub message: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for CommentRegularExpression {
    fn default() -> Self {
        Self::new()
    }
}

impl CommentRegularExpression {
    /// Creates the check, inert until an expression is configured.
    #[must_use]
    pub fn new() -> Self {
        Self {
            regular_expression: String::new(),
            message: DEFAULT_MESSAGE.to_string(),
            severity: Severity::Warning,
        }
    }

    /// Sets the regular expression.
    #[must_use]
    pub fn regular_expression(mut self, expression: impl Into<String>) -> Self {
        self.regular_expression = expression.into();
        self
    }

    /// Sets the issue message.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Check for CommentRegularExpression {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Comments matching a regular expression should be handled"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn nodes_to_visit(&self) -> Vec<Kind> {
        vec![Kind::Trivia]
    }

    fn configure(&mut self, params: &RuleParams<'_>) -> Result<(), CheckError> {
        if let Some(expression) = params.get_str("regular_expression")? {
            self.regular_expression = expression.to_string();
        }
        if let Some(message) = params.get_str("message")? {
            self.message = message.to_string();
        }
        Ok(())
    }

    fn begin_file<'a>(
        &'a self,
        _ctx: &ScanContext<'_>,
    ) -> Result<Box<dyn NodeVisitor + 'a>, CheckError> {
        // Compiled once per file, before any trivia is dispatched; an
        // invalid expression fails the check for the whole file.
        let pattern = compile_full_match(NAME, &self.regular_expression)?;
        Ok(Box::new(CommentVisitor {
            pattern,
            message: &self.message,
        }))
    }
}

struct CommentVisitor<'a> {
    pattern: Option<Regex>,
    message: &'a str,
}

impl NodeVisitor for CommentVisitor<'_> {
    fn visit_trivia(&mut self, trivia: &Trivia, _ctx: &ScanContext<'_>, out: &mut Reporter<'_>) {
        let Some(pattern) = &self.pattern else {
            return;
        };
        if pattern.is_match(trivia.comment()) {
            out.report_trivia(trivia, self.message);
        }
    }
}
