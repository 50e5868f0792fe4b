//! # tree-lint-checks
//!
//! Built-in checks for tree-lint.
//!
//! ## Available checks
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | TL001 | `bad-type-parameter-name` | Type parameter names should comply with a naming convention |
//! | TL002 | `equals-on-atomic` | `.equals()` should not be used to test the values of `Atomic` classes |
//! | TL003 | `comment-regular-expression` | Comments matching a regular expression should be handled |
//! | TL004 | `constants-should-be-static-final` | Constants should be declared `static final` |
//!
//! ## Usage
//!
//! ```ignore
//! use tree_lint_checks::{default_checks, EqualsOnAtomic};
//! use tree_lint_core::Scanner;
//!
//! let mut builder = Scanner::builder();
//! for check in default_checks() {
//!     builder = builder.check_box(check);
//! }
//! let scanner = builder.build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod bad_type_parameter_name;
mod comment_regular_expression;
mod constants_static_final;
mod equals_on_atomic;
mod presets;

pub use bad_type_parameter_name::BadTypeParameterName;
pub use comment_regular_expression::CommentRegularExpression;
pub use constants_static_final::ConstantsShouldBeStaticFinal;
pub use equals_on_atomic::EqualsOnAtomic;
pub use presets::{all_checks, default_checks};

/// Re-export core types for convenience.
pub use tree_lint_core::{Check, Issue, Severity};
