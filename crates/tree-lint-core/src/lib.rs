//! # tree-lint-core
//!
//! Core framework for rule-based static analysis over externally parsed
//! syntax trees.
//!
//! An external front end parses source files into a [`SyntaxTree`] of
//! kind-tagged nodes; this crate walks each tree exactly once and fans
//! every node out to the [`Check`]s that subscribed to its [`Kind`]. On
//! top of that dispatch it provides the declarative building blocks
//! call-site checks need: [`TypeCriterion`] constraints on fully-qualified
//! type names, [`MethodMatcher`] signatures, and the [`MethodDetection`]
//! base that forwards only matching call sites to a check's handler.
//!
//! ## Example
//!
//! ```ignore
//! use tree_lint_core::{FileContext, Scanner};
//!
//! let scanner = Scanner::builder()
//!     .check(MyCheck::new())
//!     .build()?;
//!
//! let result = scanner.scan(&tree, &FileContext::new(path));
//! for issue in &result.issues {
//!     println!("{issue}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod check;
mod config;
mod context;
mod criteria;
mod detect;
mod matcher;
mod pattern;
mod report;
mod scanner;
mod tree;
mod types;

pub use check::{Check, CheckBox, CheckError, NodeVisitor};
pub use config::{Config, ConfigError, RuleConfig, RuleParams};
pub use context::{FileContext, ScanContext};
pub use criteria::TypeCriterion;
pub use detect::{DetectionVisitor, MethodDetection, CALL_KINDS};
pub use matcher::{MethodMatcher, NamePattern, ParameterCriteria};
pub use pattern::compile_full_match;
pub use report::Reporter;
pub use scanner::{Scanner, ScannerBuilder, ScannerError};
pub use tree::{
    CallKind, CallSite, FieldDecl, Initializer, Kind, Node, NodeDetail, SymbolTable, SyntaxTree,
    Trivia,
};
pub use types::{CheckFailure, FailureKind, Issue, IssueDiagnostic, ScanResult, Severity};
