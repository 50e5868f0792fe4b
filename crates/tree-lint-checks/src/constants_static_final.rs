//! Check that constant fields are declared `static`.
//!
//! A `final` instance field initialized with a constant holds the same
//! value in every instance; making it `static` states that and stops each
//! instance from carrying its own copy. Fields whose initializer is a
//! method call or an allocation may legitimately differ per instance and
//! are left alone, as are interface fields (implicitly static).

use tree_lint_core::{
    Check, CheckError, Initializer, Kind, Node, NodeVisitor, Reporter, ScanContext, Severity,
};

/// Rule code for constants-should-be-static-final.
pub const CODE: &str = "TL004";

/// Rule name for constants-should-be-static-final.
pub const NAME: &str = "constants-should-be-static-final";

const MESSAGE: &str = "Make this final field static too.";

/// Reports non-static `final` fields with a constant initializer.
#[derive(Debug, Clone)]
pub struct ConstantsShouldBeStaticFinal {
    severity: Severity,
}

impl Default for ConstantsShouldBeStaticFinal {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstantsShouldBeStaticFinal {
    /// Creates the check.
    #[must_use]
    pub fn new() -> Self {
        Self {
            severity: Severity::Warning,
        }
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Check for ConstantsShouldBeStaticFinal {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Constants should be declared \"static final\" rather than merely \"final\""
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn nodes_to_visit(&self) -> Vec<Kind> {
        // Classes only: interface fields are implicitly static final.
        vec![Kind::Class]
    }

    fn begin_file<'a>(
        &'a self,
        _ctx: &ScanContext<'_>,
    ) -> Result<Box<dyn NodeVisitor + 'a>, CheckError> {
        Ok(Box::new(ClassFieldVisitor))
    }
}

struct ClassFieldVisitor;

impl NodeVisitor for ClassFieldVisitor {
    fn visit_node(&mut self, node: &Node, _ctx: &ScanContext<'_>, out: &mut Reporter<'_>) {
        for member in node.children() {
            if member.kind() != Kind::Variable {
                continue;
            }
            let Some(field) = member.field() else {
                continue;
            };
            if field.is_final && !field.is_static && has_constant_initializer(field.initializer) {
                out.report_node(member, MESSAGE);
            }
        }
    }
}

fn has_constant_initializer(initializer: Option<Initializer>) -> bool {
    matches!(
        initializer,
        Some(Initializer::Literal | Initializer::ConstantRef)
    )
}
