//! Check that type parameter names comply with a naming convention.
//!
//! # Configuration
//!
//! - `format`: regular expression the names are checked against
//!   (default: `^[A-Z][0-9]?$`). The whole name must match. An empty
//!   format makes the check inert.

use regex::Regex;
use tree_lint_core::{
    compile_full_match, Check, CheckError, Kind, Node, NodeVisitor, Reporter, RuleParams,
    ScanContext, Severity,
};

/// Rule code for bad-type-parameter-name.
pub const CODE: &str = "TL001";

/// Rule name for bad-type-parameter-name.
pub const NAME: &str = "bad-type-parameter-name";

const DEFAULT_FORMAT: &str = "^[A-Z][0-9]?$";

/// Reports type parameters whose name does not match the configured
/// naming format.
#[derive(Debug, Clone)]
pub struct BadTypeParameterName {
    /// Regular expression the names are checked against.
    pub format: String,
    /// Custom severity.
    pub severity: Severity,
}

impl Default for BadTypeParameterName {
    fn default() -> Self {
        Self::new()
    }
}

impl BadTypeParameterName {
    /// Creates the check with the default naming format.
    #[must_use]
    pub fn new() -> Self {
        Self {
            format: DEFAULT_FORMAT.to_string(),
            severity: Severity::Warning,
        }
    }

    /// Sets the naming format.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Check for BadTypeParameterName {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Type parameter names should comply with a naming convention"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn nodes_to_visit(&self) -> Vec<Kind> {
        vec![Kind::TypeParameter]
    }

    fn configure(&mut self, params: &RuleParams<'_>) -> Result<(), CheckError> {
        if let Some(format) = params.get_str("format")? {
            self.format = format.to_string();
        }
        Ok(())
    }

    fn begin_file<'a>(
        &'a self,
        _ctx: &ScanContext<'_>,
    ) -> Result<Box<dyn NodeVisitor + 'a>, CheckError> {
        let pattern = compile_full_match(NAME, &self.format)?;
        Ok(Box::new(TypeParameterVisitor {
            check: self,
            pattern,
        }))
    }
}

struct TypeParameterVisitor<'a> {
    check: &'a BadTypeParameterName,
    pattern: Option<Regex>,
}

impl NodeVisitor for TypeParameterVisitor<'_> {
    fn visit_node(&mut self, node: &Node, _ctx: &ScanContext<'_>, out: &mut Reporter<'_>) {
        let Some(pattern) = &self.pattern else {
            return;
        };
        let Some(name) = node.name() else {
            return;
        };
        if !pattern.is_match(name) {
            out.report_node(
                node,
                format!(
                    "Rename this generic name to match the regular expression '{}'.",
                    self.check.format
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;
    use tree_lint_core::{FileContext, Scanner, SyntaxTree};

    fn scan(names: &[&str], check: BadTypeParameterName) -> Vec<String> {
        let mut root = tree_lint_core::Node::new(Kind::CompilationUnit, 1);
        for (i, name) in names.iter().enumerate() {
            root = root.with_child(Node::new(Kind::TypeParameter, i + 1).named(*name));
        }
        let scanner = Scanner::builder()
            .check(check)
            .build()
            .expect("scanner should build");
        let result = scanner.scan(&SyntaxTree::new(root), &FileContext::new(Path::new("A.java")));
        result.issues.into_iter().map(|i| i.message).collect()
    }

    #[test]
    fn conventional_names_pass() {
        assert!(scan(&["T", "E", "K2"], BadTypeParameterName::new()).is_empty());
    }

    #[test]
    fn long_name_reported_with_format() {
        let messages = scan(&["Elem"], BadTypeParameterName::new());
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("^[A-Z][0-9]?$"));
    }

    #[test]
    fn custom_format() {
        let check = BadTypeParameterName::new().format("^[A-Z][a-z]+$");
        assert!(scan(&["Elem"], check.clone()).is_empty());
        assert_eq!(scan(&["T"], check).len(), 1);
    }
}
