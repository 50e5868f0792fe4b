//! Integration tests: dispatch guarantees and fault isolation end-to-end
//! through [`Scanner`].

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tree_lint_core::{
    Check, CheckError, Config, FailureKind, FileContext, Kind, Node, NodeVisitor, Reporter,
    ScanContext, Scanner, Severity, SyntaxTree, Trivia,
};

/// Check that records every (kind, line) it is dispatched for.
struct Recording {
    name: &'static str,
    kinds: Vec<Kind>,
    seen: Arc<Mutex<Vec<(Kind, usize)>>>,
}

struct RecordingVisitor {
    seen: Arc<Mutex<Vec<(Kind, usize)>>>,
}

impl NodeVisitor for RecordingVisitor {
    fn visit_node(&mut self, node: &Node, _: &ScanContext<'_>, _: &mut Reporter<'_>) {
        self.seen
            .lock()
            .expect("lock")
            .push((node.kind(), node.line()));
    }
    fn visit_trivia(&mut self, trivia: &Trivia, _: &ScanContext<'_>, _: &mut Reporter<'_>) {
        self.seen
            .lock()
            .expect("lock")
            .push((Kind::Trivia, trivia.line()));
    }
}

impl Check for Recording {
    fn name(&self) -> &'static str {
        self.name
    }
    fn code(&self) -> &'static str {
        "REC001"
    }
    fn nodes_to_visit(&self) -> Vec<Kind> {
        self.kinds.clone()
    }
    fn begin_file<'a>(
        &'a self,
        _: &ScanContext<'_>,
    ) -> Result<Box<dyn NodeVisitor + 'a>, CheckError> {
        Ok(Box::new(RecordingVisitor {
            seen: Arc::clone(&self.seen),
        }))
    }
}

fn single_kind_tree(kind: Kind) -> SyntaxTree {
    SyntaxTree::new(Node::new(Kind::CompilationUnit, 1).with_child(Node::new(kind, 2)))
}

fn file() -> FileContext<'static> {
    FileContext::new(Path::new("A.java"))
}

// For every kind, a tree containing exactly one node of that kind invokes
// exactly the subscribed checks, each exactly once.
#[test]
fn single_node_dispatch_exactness() {
    let all_kinds = [
        Kind::Class,
        Kind::Interface,
        Kind::Method,
        Kind::Variable,
        Kind::TypeParameter,
        Kind::MethodInvocation,
        Kind::NewClass,
        Kind::Block,
        Kind::Identifier,
    ];

    for kind in all_kinds {
        let interested = Arc::new(Mutex::new(Vec::new()));
        let disinterested = Arc::new(Mutex::new(Vec::new()));

        let scanner = Scanner::builder()
            .check(Recording {
                name: "interested",
                kinds: vec![kind],
                seen: Arc::clone(&interested),
            })
            .check(Recording {
                name: "disinterested",
                kinds: all_kinds.iter().copied().filter(|k| *k != kind).collect(),
                seen: Arc::clone(&disinterested),
            })
            .build()
            .expect("scanner should build");

        let _ = scanner.scan(&single_kind_tree(kind), &file());

        let seen = interested.lock().expect("lock");
        assert_eq!(seen.len(), 1, "kind {kind:?} dispatched once");
        assert_eq!(seen[0].0, kind);
        // The other check subscribed to every kind except this one; the
        // CompilationUnit root is not in its list either.
        assert!(
            disinterested.lock().expect("lock").is_empty(),
            "kind {kind:?} leaked to a non-subscriber"
        );
    }
}

#[test]
fn dispatch_is_preorder_and_in_registration_order() {
    let first = Arc::new(Mutex::new(Vec::new()));
    let second = Arc::new(Mutex::new(Vec::new()));

    let scanner = Scanner::builder()
        .check(Recording {
            name: "first",
            kinds: vec![Kind::Class, Kind::Method],
            seen: Arc::clone(&first),
        })
        .check(Recording {
            name: "second",
            kinds: vec![Kind::Class],
            seen: Arc::clone(&second),
        })
        .build()
        .expect("scanner should build");

    let tree = SyntaxTree::new(
        Node::new(Kind::CompilationUnit, 1)
            .with_child(
                Node::new(Kind::Class, 2).with_child(Node::new(Kind::Method, 3)),
            )
            .with_child(Node::new(Kind::Class, 10)),
    );
    let _ = scanner.scan(&tree, &file());

    // Pre-order: class on line 2 before its method, both before line 10.
    assert_eq!(
        *first.lock().expect("lock"),
        vec![(Kind::Class, 2), (Kind::Method, 3), (Kind::Class, 10)]
    );
    assert_eq!(
        *second.lock().expect("lock"),
        vec![(Kind::Class, 2), (Kind::Class, 10)]
    );
}

struct Panicking;

struct PanickingVisitor;

impl NodeVisitor for PanickingVisitor {
    fn visit_node(&mut self, _: &Node, _: &ScanContext<'_>, _: &mut Reporter<'_>) {
        panic!("boom");
    }
}

impl Check for Panicking {
    fn name(&self) -> &'static str {
        "panicking"
    }
    fn code(&self) -> &'static str {
        "PAN001"
    }
    fn nodes_to_visit(&self) -> Vec<Kind> {
        vec![Kind::Class]
    }
    fn begin_file<'a>(
        &'a self,
        _: &ScanContext<'_>,
    ) -> Result<Box<dyn NodeVisitor + 'a>, CheckError> {
        Ok(Box::new(PanickingVisitor))
    }
}

#[test]
fn panicking_check_is_isolated() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let scanner = Scanner::builder()
        .check(Panicking)
        .check(Recording {
            name: "survivor",
            kinds: vec![Kind::Class],
            seen: Arc::clone(&seen),
        })
        .build()
        .expect("scanner should build");

    let tree = SyntaxTree::new(
        Node::new(Kind::CompilationUnit, 1)
            .with_child(Node::new(Kind::Class, 2))
            .with_child(Node::new(Kind::Class, 5)),
    );
    let result = scanner.scan(&tree, &file());

    // The panicking check fails once and is skipped afterwards; the other
    // check still sees every class.
    assert_eq!(result.failures.len(), 1);
    assert_eq!(result.failures[0].rule, "panicking");
    assert!(matches!(
        result.failures[0].kind,
        FailureKind::Panicked(ref msg) if msg == "boom"
    ));
    assert_eq!(
        *seen.lock().expect("lock"),
        vec![(Kind::Class, 2), (Kind::Class, 5)]
    );
}

struct BadConfig {
    visits: Arc<AtomicUsize>,
}

struct BadConfigVisitor;
impl NodeVisitor for BadConfigVisitor {}

impl Check for BadConfig {
    fn name(&self) -> &'static str {
        "bad-config"
    }
    fn code(&self) -> &'static str {
        "BAD001"
    }
    fn nodes_to_visit(&self) -> Vec<Kind> {
        vec![Kind::Trivia]
    }
    fn begin_file<'a>(
        &'a self,
        _: &ScanContext<'_>,
    ) -> Result<Box<dyn NodeVisitor + 'a>, CheckError> {
        self.visits.fetch_add(1, Ordering::Relaxed);
        Err(CheckError::configuration("bad-config", "*)", "invalid repeat"))
    }
}

#[test]
fn config_failure_surfaces_before_any_visit() {
    let begins = Arc::new(AtomicUsize::new(0));
    let seen = Arc::new(Mutex::new(Vec::new()));
    let scanner = Scanner::builder()
        .check(BadConfig {
            visits: Arc::clone(&begins),
        })
        .check(Recording {
            name: "other",
            kinds: vec![Kind::Trivia],
            seen: Arc::clone(&seen),
        })
        .build()
        .expect("scanner should build");

    let tree = SyntaxTree::new(
        Node::new(Kind::CompilationUnit, 1)
            .with_child(Node::new(Kind::Class, 2).with_trivia(Trivia::new("// c", 2))),
    );
    let result = scanner.scan(&tree, &file());

    assert_eq!(begins.load(Ordering::Relaxed), 1);
    assert_eq!(result.failures.len(), 1);
    assert!(matches!(result.failures[0].kind, FailureKind::Config(_)));
    // The failing check never visited anything; the other one did.
    assert_eq!(*seen.lock().expect("lock"), vec![(Kind::Trivia, 2)]);
}

struct OneIssue;

struct OneIssueVisitor;

impl NodeVisitor for OneIssueVisitor {
    fn visit_node(&mut self, node: &Node, _: &ScanContext<'_>, out: &mut Reporter<'_>) {
        out.report_node(node, "found");
    }
}

impl Check for OneIssue {
    fn name(&self) -> &'static str {
        "one-issue"
    }
    fn code(&self) -> &'static str {
        "ONE001"
    }
    fn default_severity(&self) -> Severity {
        Severity::Warning
    }
    fn nodes_to_visit(&self) -> Vec<Kind> {
        vec![Kind::Class]
    }
    fn begin_file<'a>(
        &'a self,
        _: &ScanContext<'_>,
    ) -> Result<Box<dyn NodeVisitor + 'a>, CheckError> {
        Ok(Box::new(OneIssueVisitor))
    }
}

#[test]
fn severity_override_applies_to_reported_issues() {
    let config = Config::parse("[rules.one-issue]\nseverity = \"error\"\n")
        .expect("config should parse");
    let scanner = Scanner::builder()
        .check(OneIssue)
        .config(config)
        .build()
        .expect("scanner should build");

    let result = scanner.scan(&single_kind_tree(Kind::Class), &file());
    assert_eq!(result.issues.len(), 1);
    assert_eq!(result.issues[0].severity, Severity::Error);
    assert!(result.has_errors());
}

#[test]
fn issues_are_sorted_by_line() {
    let scanner = Scanner::builder()
        .check(OneIssue)
        .build()
        .expect("scanner should build");

    // Children deliberately out of line order.
    let tree = SyntaxTree::new(
        Node::new(Kind::CompilationUnit, 1)
            .with_child(Node::new(Kind::Class, 9))
            .with_child(Node::new(Kind::Class, 3)),
    );
    let result = scanner.scan(&tree, &file());
    let lines: Vec<usize> = result.issues.iter().map(|i| i.line).collect();
    assert_eq!(lines, vec![3, 9]);
}
