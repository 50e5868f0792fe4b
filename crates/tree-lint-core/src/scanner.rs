//! Kind-subscription scanner: one traversal, many checks.

use crate::check::{Check, CheckBox, CheckError, NodeVisitor};
use crate::config::{Config, ConfigError};
use crate::context::{FileContext, ScanContext};
use crate::report::Reporter;
use crate::tree::{Kind, Node, SyntaxTree};
use crate::types::{CheckFailure, FailureKind, Issue, ScanResult, Severity};
use std::collections::HashMap;
use std::panic::{self, AssertUnwindSafe};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur building a scanner.
#[derive(Debug, Error)]
pub enum ScannerError {
    /// A check rejected its configured parameters.
    #[error(transparent)]
    Check(#[from] CheckError),

    /// Configuration file error.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Builder for configuring a [`Scanner`].
#[derive(Default)]
pub struct ScannerBuilder {
    checks: Vec<CheckBox>,
    config: Option<Config>,
}

impl ScannerBuilder {
    /// Creates a new builder with no checks registered.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a check. Dispatch order within a node follows
    /// registration order.
    #[must_use]
    pub fn check<C: Check + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Registers a boxed check.
    #[must_use]
    pub fn check_box(mut self, check: CheckBox) -> Self {
        self.checks.push(check);
        self
    }

    /// Sets the configuration.
    #[must_use]
    pub fn config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Builds the scanner: applies each check's configured parameters and
    /// indexes subscriptions by node kind.
    ///
    /// The kind index is built once here; registering a different check
    /// set means building a new scanner.
    ///
    /// # Errors
    ///
    /// Returns an error if a check rejects its configured parameters
    /// (wrong type for a named parameter).
    pub fn build(mut self) -> Result<Scanner, ScannerError> {
        let config = self.config.unwrap_or_default();

        for check in &mut self.checks {
            let name = check.name();
            check.configure(&config.rule_params(name))?;
        }

        let mut enabled = Vec::with_capacity(self.checks.len());
        let mut index: HashMap<Kind, Vec<usize>> = HashMap::new();
        for (i, check) in self.checks.iter().enumerate() {
            let is_enabled = config.is_rule_enabled(check.name());
            enabled.push(is_enabled);
            if !is_enabled {
                debug!("check `{}` disabled by config", check.name());
                continue;
            }
            for kind in check.nodes_to_visit() {
                index.entry(kind).or_default().push(i);
            }
        }

        Ok(Scanner {
            checks: self.checks,
            enabled,
            index,
            config,
        })
    }
}

/// Per-scan handle for one live check.
struct LiveCheck<'s> {
    code: &'static str,
    name: &'static str,
    severity: Severity,
    visitor: Box<dyn NodeVisitor + 's>,
}

/// Dispatches a single tree traversal to all subscribed checks.
///
/// The scanner holds only immutable state (checks, subscriptions index,
/// config) and is `Send + Sync`: one instance can scan many files, from
/// many threads, each scan owning its per-file visitors. Traversal is a
/// single pre-order depth-first walk; at each node the subscribed checks
/// run in registration order, then the node's trivia are dispatched under
/// [`Kind::Trivia`] through the trivia callback. Per-node cost is one
/// index lookup regardless of how many checks are registered.
pub struct Scanner {
    checks: Vec<CheckBox>,
    enabled: Vec<bool>,
    index: HashMap<Kind, Vec<usize>>,
    config: Config,
}

impl Scanner {
    /// Creates a new builder for configuring a scanner.
    #[must_use]
    pub fn builder() -> ScannerBuilder {
        ScannerBuilder::new()
    }

    /// Number of registered checks (including disabled ones).
    #[must_use]
    pub fn check_count(&self) -> usize {
        self.checks.len()
    }

    /// Scans one file's tree and returns issues and per-check failures.
    ///
    /// A check failing — invalid configuration at file start, or a panic
    /// mid-visit — never aborts the traversal or the other checks: the
    /// failure is recorded on the result and that check alone is skipped
    /// for the remainder of the file.
    #[must_use]
    pub fn scan(&self, tree: &SyntaxTree, file: &FileContext<'_>) -> ScanResult {
        info!("scanning {}", file.path.display());

        let ctx = ScanContext::new(file, tree.symbols());
        let mut issues: Vec<Issue> = Vec::new();
        let mut failures: Vec<CheckFailure> = Vec::new();

        // One visitor slot per check; a slot goes back to None when its
        // check fails, which drops it out of all later dispatches.
        let mut slots: Vec<Option<LiveCheck<'_>>> = Vec::with_capacity(self.checks.len());
        for (check, &is_enabled) in self.checks.iter().zip(&self.enabled) {
            if !is_enabled {
                slots.push(None);
                continue;
            }
            match check.begin_file(&ctx) {
                Ok(visitor) => slots.push(Some(LiveCheck {
                    code: check.code(),
                    name: check.name(),
                    severity: self
                        .config
                        .rule_severity(check.name())
                        .unwrap_or_else(|| check.default_severity()),
                    visitor,
                })),
                Err(err) => {
                    warn!("check `{}` not run: {err}", check.name());
                    failures.push(CheckFailure {
                        rule: check.name().to_string(),
                        kind: FailureKind::Config(err),
                    });
                    slots.push(None);
                }
            }
        }

        self.walk(tree.root(), &ctx, &mut slots, &mut issues, &mut failures);

        issues.sort_by(|a, b| a.line.cmp(&b.line).then(a.column.cmp(&b.column)));

        debug!(
            "scan of {} complete: {} issue(s), {} failure(s)",
            file.path.display(),
            issues.len(),
            failures.len()
        );

        ScanResult { issues, failures }
    }

    fn walk(
        &self,
        node: &Node,
        ctx: &ScanContext<'_>,
        slots: &mut [Option<LiveCheck<'_>>],
        issues: &mut Vec<Issue>,
        failures: &mut Vec<CheckFailure>,
    ) {
        // Kind::Trivia is reserved for Trivia values; a node carrying it
        // is never dispatched as a node.
        if node.kind() != Kind::Trivia {
            if let Some(subscribers) = self.index.get(&node.kind()) {
                for &i in subscribers {
                    Self::dispatch(slots, issues, failures, i, |visitor, out| {
                        visitor.visit_node(node, ctx, out);
                    });
                }
            }
        }

        if !node.trivia().is_empty() {
            if let Some(subscribers) = self.index.get(&Kind::Trivia) {
                for trivia in node.trivia() {
                    for &i in subscribers {
                        Self::dispatch(slots, issues, failures, i, |visitor, out| {
                            visitor.visit_trivia(trivia, ctx, out);
                        });
                    }
                }
            }
        }

        for child in node.children() {
            self.walk(child, ctx, slots, issues, failures);
        }
    }

    /// Runs one visitor callback isolated from the rest of the scan.
    fn dispatch<F>(
        slots: &mut [Option<LiveCheck<'_>>],
        issues: &mut Vec<Issue>,
        failures: &mut Vec<CheckFailure>,
        i: usize,
        f: F,
    ) where
        F: FnOnce(&mut dyn NodeVisitor, &mut Reporter<'_>),
    {
        let Some(live) = slots[i].as_mut() else {
            return;
        };

        let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
            let mut out = Reporter::new(live.code, live.name, live.severity, issues);
            f(live.visitor.as_mut(), &mut out);
        }));

        if let Err(payload) = outcome {
            let message = panic_message(&*payload);
            warn!("check `{}` panicked, skipping it for this file: {message}", live.name);
            failures.push(CheckFailure {
                rule: live.name.to_string(),
                kind: FailureKind::Panicked(message),
            });
            slots[i] = None;
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
