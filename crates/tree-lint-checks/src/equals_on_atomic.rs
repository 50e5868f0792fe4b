//! Check that `.equals()` is not used to compare `Atomic*` values.
//!
//! The atomic wrapper classes do not override `Object.equals`, so
//! comparing two of them with `.equals()` is reference equality and
//! almost certainly a bug; the values must be read with `.get()` first.

use tree_lint_core::{
    Check, CheckError, Kind, MethodDetection, MethodMatcher, NodeVisitor, ScanContext, Severity,
    TypeCriterion,
};

/// Rule code for equals-on-atomic.
pub const CODE: &str = "TL002";

/// Rule name for equals-on-atomic.
pub const NAME: &str = "equals-on-atomic";

const MESSAGE: &str = "Use \".get()\" to retrieve the value and compare it instead.";

const ATOMIC_CLASSES: [&str; 3] = [
    "java.util.concurrent.atomic.AtomicBoolean",
    "java.util.concurrent.atomic.AtomicInteger",
    "java.util.concurrent.atomic.AtomicLong",
];

/// Reports `equals(Object)` invocations on atomic wrapper classes.
#[derive(Debug, Clone)]
pub struct EqualsOnAtomic {
    detection: MethodDetection,
    severity: Severity,
}

impl Default for EqualsOnAtomic {
    fn default() -> Self {
        Self::new()
    }
}

impl EqualsOnAtomic {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self {
            detection: MethodDetection::new(
                ATOMIC_CLASSES.iter().map(|c| equals_matcher(c)).collect(),
            ),
            severity: Severity::Error,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

fn equals_matcher(fully_qualified_name: &str) -> MethodMatcher {
    MethodMatcher::new()
        .call_site(TypeCriterion::is(fully_qualified_name))
        .name("equals")
        .add_parameter("java.lang.Object")
}

impl Check for EqualsOnAtomic {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "\".equals()\" should not be used to test the values of \"Atomic\" classes"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn nodes_to_visit(&self) -> Vec<Kind> {
        self.detection.nodes_to_visit()
    }

    fn begin_file<'a>(
        &'a self,
        _ctx: &ScanContext<'_>,
    ) -> Result<Box<dyn NodeVisitor + 'a>, CheckError> {
        Ok(Box::new(self.detection.visitor(|_call, node, out| {
            out.report_node(node, MESSAGE);
        })))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tree_lint_core::{CallSite, FileContext, Node, Scanner, SymbolTable, SyntaxTree};

    fn scan(calls: Vec<CallSite>) -> Vec<tree_lint_core::Issue> {
        let mut root = Node::new(Kind::CompilationUnit, 1);
        for (i, call) in calls.into_iter().enumerate() {
            root = root.with_child(Node::new(Kind::MethodInvocation, i + 1).with_call(call));
        }
        let tree = SyntaxTree::new(root).with_symbols(
            SymbolTable::new()
                .with_type("java.util.concurrent.atomic.AtomicInteger", ["java.lang.Number"])
                .with_type("java.lang.String", ["java.lang.Object"]),
        );
        let scanner = Scanner::builder()
            .check(EqualsOnAtomic::new())
            .build()
            .expect("scanner should build");
        scanner
            .scan(&tree, &FileContext::new(Path::new("A.java")))
            .issues
    }

    fn equals_call(owner: &str) -> CallSite {
        CallSite::method(
            Some(owner.into()),
            "equals",
            vec![Some("java.lang.Object".into())],
        )
    }

    #[test]
    fn equals_on_atomic_integer_reported() {
        let issues = scan(vec![equals_call("java.util.concurrent.atomic.AtomicInteger")]);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, MESSAGE);
        assert_eq!(issues[0].code, CODE);
    }

    #[test]
    fn equals_on_string_not_reported() {
        assert!(scan(vec![equals_call("java.lang.String")]).is_empty());
    }

    #[test]
    fn get_on_atomic_not_reported() {
        let call = CallSite::method(
            Some("java.util.concurrent.atomic.AtomicInteger".into()),
            "get",
            vec![],
        );
        assert!(scan(vec![call]).is_empty());
    }

    #[test]
    fn unresolved_receiver_fails_closed() {
        let call = CallSite::method(None, "equals", vec![Some("java.lang.Object".into())]);
        assert!(scan(vec![call]).is_empty());
    }
}
