//! Explicit registry of built-in check constructors.

use crate::{
    BadTypeParameterName, CommentRegularExpression, ConstantsShouldBeStaticFinal, EqualsOnAtomic,
};
use tree_lint_core::CheckBox;

/// Returns every built-in check.
///
/// Includes template checks like `comment-regular-expression`, which are
/// inert until configured.
#[must_use]
pub fn all_checks() -> Vec<CheckBox> {
    vec![
        Box::new(BadTypeParameterName::new()),
        Box::new(EqualsOnAtomic::new()),
        Box::new(CommentRegularExpression::new()),
        Box::new(ConstantsShouldBeStaticFinal::new()),
    ]
}

/// Returns the checks that are active by default.
///
/// `comment-regular-expression` is a template: without a configured
/// expression it reports nothing, so it is only part of [`all_checks`].
#[must_use]
pub fn default_checks() -> Vec<CheckBox> {
    vec![
        Box::new(BadTypeParameterName::new()),
        Box::new(EqualsOnAtomic::new()),
        Box::new(ConstantsShouldBeStaticFinal::new()),
    ]
}
