//! Declarative constraints on fully-qualified type names.

use crate::tree::SymbolTable;
use serde::{Deserialize, Serialize};

/// A constraint on a type name, evaluated against the symbol table.
///
/// `Any` and `NoneMatch` are distinct variants on purpose: "unconstrained"
/// and "never matches" must not share a sentinel, or callers mis-encode
/// one as the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TypeCriterion {
    /// Satisfied iff the actual type name equals the given name.
    Is(String),
    /// Satisfied iff the actual type is the given type or a known subtype
    /// of it, per the symbol table.
    SubtypeOf(String),
    /// Satisfied by every type, resolved or not.
    Any,
    /// Satisfied by no type.
    NoneMatch,
}

impl TypeCriterion {
    /// Exact-name criterion.
    #[must_use]
    pub fn is(name: impl Into<String>) -> Self {
        Self::Is(name.into())
    }

    /// Subtype criterion.
    #[must_use]
    pub fn subtype_of(name: impl Into<String>) -> Self {
        Self::SubtypeOf(name.into())
    }

    /// Evaluates this criterion against an actual type name.
    ///
    /// `actual` is `None` when the front end could not resolve the type.
    /// Unresolved types fail `Is` and `SubtypeOf` closed: missing type
    /// information never produces a match, so detectors built on top of
    /// criteria cannot report false positives from resolution gaps.
    #[must_use]
    pub fn matches(&self, actual: Option<&str>, symbols: &SymbolTable) -> bool {
        match self {
            Self::Any => true,
            Self::NoneMatch => false,
            Self::Is(name) => actual == Some(name.as_str()),
            Self::SubtypeOf(name) => match actual {
                Some(actual) => {
                    actual == name
                        || symbols
                            .supertypes_of(actual)
                            .is_some_and(|supers| supers.contains(name))
                }
                None => false,
            },
        }
    }
}
