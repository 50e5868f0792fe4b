//! Method-detection base for call-site checks.
//!
//! Checks in this category embed a [`MethodDetection`] and receive only
//! the call sites that match one of their declared signatures; matching
//! itself stays in one place instead of being re-implemented per check.

use crate::check::NodeVisitor;
use crate::context::ScanContext;
use crate::matcher::MethodMatcher;
use crate::report::Reporter;
use crate::tree::{CallSite, Kind, Node, SymbolTable};

/// The node kinds that carry call sites.
pub const CALL_KINDS: [Kind; 2] = [Kind::MethodInvocation, Kind::NewClass];

/// An immutable disjunction of method matchers.
#[derive(Debug, Clone)]
pub struct MethodDetection {
    matchers: Vec<MethodMatcher>,
}

impl MethodDetection {
    /// Creates a detection from the matchers to recognize.
    #[must_use]
    pub fn new(matchers: Vec<MethodMatcher>) -> Self {
        Self { matchers }
    }

    /// Subscription list for checks built on this detection.
    #[must_use]
    pub fn nodes_to_visit(&self) -> Vec<Kind> {
        CALL_KINDS.to_vec()
    }

    /// True when any matcher accepts the call site; first hit wins.
    #[must_use]
    pub fn matches(&self, call: &CallSite, symbols: &SymbolTable) -> bool {
        self.matchers.iter().any(|m| m.matches(call, symbols))
    }

    /// Builds a visitor forwarding matching call sites to a handler.
    ///
    /// The handler sees the matched [`CallSite`] and its node, never which
    /// matcher accepted it.
    #[must_use]
    pub fn visitor<F>(&self, on_match: F) -> DetectionVisitor<'_, F>
    where
        F: FnMut(&CallSite, &Node, &mut Reporter<'_>),
    {
        DetectionVisitor {
            detection: self,
            on_match,
        }
    }
}

/// Per-file visitor that filters dispatched call nodes through a
/// [`MethodDetection`].
pub struct DetectionVisitor<'a, F> {
    detection: &'a MethodDetection,
    on_match: F,
}

impl<F> NodeVisitor for DetectionVisitor<'_, F>
where
    F: FnMut(&CallSite, &Node, &mut Reporter<'_>),
{
    fn visit_node(&mut self, node: &Node, ctx: &ScanContext<'_>, out: &mut Reporter<'_>) {
        let Some(call) = node.call() else {
            return;
        };
        if self.detection.matches(call, ctx.symbols()) {
            (self.on_match)(call, node, out);
        }
    }
}
