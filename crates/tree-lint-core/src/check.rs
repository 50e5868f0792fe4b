//! Check traits for defining lint checks over syntax trees.

use crate::config::RuleParams;
use crate::context::ScanContext;
use crate::report::Reporter;
use crate::tree::{Kind, Node, Trivia};
use crate::types::Severity;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised by a check before any node of a file is visited.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CheckError {
    /// A configured value is malformed (e.g. an invalid regular
    /// expression). Fatal for the check; other checks are unaffected.
    #[error("invalid configuration for check `{rule}`: {message} (value: `{value}`)")]
    Configuration {
        /// Name of the misconfigured check.
        rule: String,
        /// The offending configured value.
        value: String,
        /// Why the value was rejected.
        message: String,
    },
}

impl CheckError {
    /// Creates a configuration error for the named check.
    #[must_use]
    pub fn configuration(
        rule: impl Into<String>,
        value: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::Configuration {
            rule: rule.into(),
            value: value.into(),
            message: message.into(),
        }
    }
}

/// A lint check that subscribes to node kinds.
///
/// The long-lived check value holds only configuration, which is immutable
/// once the scanner is built. All per-file state lives on the visitor
/// returned by [`begin_file`], created at scan start and dropped at scan
/// end, so one check instance can serve concurrent scans of different
/// files.
///
/// [`begin_file`]: Check::begin_file
///
/// # Example
///
/// ```ignore
/// struct NoLongClasses;
///
/// impl Check for NoLongClasses {
///     fn name(&self) -> &'static str { "no-long-classes" }
///     fn code(&self) -> &'static str { "TL900" }
///     fn nodes_to_visit(&self) -> Vec<Kind> { vec![Kind::Class] }
///
///     fn begin_file<'a>(
///         &'a self,
///         _ctx: &ScanContext<'_>,
///     ) -> Result<Box<dyn NodeVisitor + 'a>, CheckError> {
///         Ok(Box::new(ClassVisitor))
///     }
/// }
/// ```
pub trait Check: Send + Sync {
    /// Kebab-case name of this check (e.g. "equals-on-atomic").
    fn name(&self) -> &'static str;

    /// Check code (e.g. "TL002").
    fn code(&self) -> &'static str;

    /// Brief description of what this check looks for.
    fn description(&self) -> &'static str {
        ""
    }

    /// Default severity for issues from this check.
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }

    /// Node kinds this check wants dispatched to its visitor.
    ///
    /// Must be stable for the lifetime of the check: the scanner indexes
    /// subscriptions once when it is built.
    fn nodes_to_visit(&self) -> Vec<Kind>;

    /// Applies configured parameters before the first scan.
    ///
    /// # Errors
    ///
    /// Returns an error when a parameter has the wrong type. Value
    /// validity (e.g. whether a regex compiles) is checked per file in
    /// [`begin_file`](Check::begin_file).
    fn configure(&mut self, params: &RuleParams<'_>) -> Result<(), CheckError> {
        let _ = params;
        Ok(())
    }

    /// Called at scan start; returns the per-file visitor.
    ///
    /// Any mutable per-file state (compiled patterns, counters) belongs on
    /// the returned visitor, never on the check itself.
    ///
    /// # Errors
    ///
    /// Returns a [`CheckError::Configuration`] when a configured value
    /// turns out to be unusable; the check is then skipped for this file
    /// before any of its nodes are visited.
    fn begin_file<'a>(
        &'a self,
        ctx: &ScanContext<'_>,
    ) -> Result<Box<dyn NodeVisitor + 'a>, CheckError>;
}

/// Per-file visitor produced by [`Check::begin_file`].
///
/// The scanner only ever calls `visit_node` for kinds the owning check
/// subscribed to, and `visit_trivia` only when it subscribed to
/// [`Kind::Trivia`].
pub trait NodeVisitor {
    /// Called for each dispatched node, in pre-order traversal order.
    fn visit_node(&mut self, node: &Node, ctx: &ScanContext<'_>, out: &mut Reporter<'_>) {
        let _ = (node, ctx, out);
    }

    /// Called for each comment trivia, in traversal order.
    fn visit_trivia(&mut self, trivia: &Trivia, ctx: &ScanContext<'_>, out: &mut Reporter<'_>) {
        let _ = (trivia, ctx, out);
    }
}

/// Type alias for boxed check trait objects.
pub type CheckBox = Box<dyn Check>;

#[cfg(test)]
mod tests {
    use super::*;

    struct NoopVisitor;
    impl NodeVisitor for NoopVisitor {}

    struct TestCheck;

    impl Check for TestCheck {
        fn name(&self) -> &'static str {
            "test-check"
        }
        fn code(&self) -> &'static str {
            "TEST001"
        }
        fn description(&self) -> &'static str {
            "A test check"
        }
        fn nodes_to_visit(&self) -> Vec<Kind> {
            vec![Kind::Class]
        }
        fn begin_file<'a>(
            &'a self,
            _ctx: &ScanContext<'_>,
        ) -> Result<Box<dyn NodeVisitor + 'a>, CheckError> {
            Ok(Box::new(NoopVisitor))
        }
    }

    #[test]
    fn check_trait_defaults() {
        let check = TestCheck;
        assert_eq!(check.name(), "test-check");
        assert_eq!(check.default_severity(), Severity::Warning);
        assert_eq!(check.nodes_to_visit(), vec![Kind::Class]);
    }

    #[test]
    fn configuration_error_names_rule_and_value() {
        let err = CheckError::configuration("comment-regular-expression", "*)", "invalid repeat");
        let text = err.to_string();
        assert!(text.contains("comment-regular-expression"));
        assert!(text.contains("*)"));
    }
}
