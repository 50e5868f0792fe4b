//! Declarative matching of call sites against method signatures.

use crate::criteria::TypeCriterion;
use crate::tree::{CallKind, CallSite, SymbolTable};
use serde::{Deserialize, Serialize};

/// Name constraint of a [`MethodMatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamePattern {
    /// Matches a method invocation with exactly this name.
    Named(String),
    /// Matches any constructor call. Distinct from [`NamePattern::Named`]
    /// so a method literally named like a constructor cannot collide.
    Constructor,
}

/// Parameter-list constraint of a [`MethodMatcher`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParameterCriteria {
    /// Fixed arity: the call must have exactly as many arguments, each
    /// satisfying the criterion at its position. No reordering, no
    /// partial matches, no varargs expansion.
    Exact(Vec<TypeCriterion>),
    /// Any arity, any argument types.
    Any,
}

/// One recognizable call shape: owner type, name, parameter criteria.
///
/// Built once at check construction and immutable afterwards; checks
/// typically hold several matchers and treat them as a disjunction.
///
/// Comparison against variadic call sites is purely structural: the
/// declared criteria list is matched position-by-position against the
/// actual arguments, with no varargs expansion and no boxing or widening
/// equivalences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MethodMatcher {
    owner: TypeCriterion,
    name: NamePattern,
    parameters: ParameterCriteria,
}

impl Default for MethodMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl MethodMatcher {
    /// Creates a matcher with no owner constraint, no name, and zero
    /// declared parameters. Set a name (or [`constructor`]) before use.
    ///
    /// [`constructor`]: Self::constructor
    #[must_use]
    pub fn new() -> Self {
        Self {
            owner: TypeCriterion::Any,
            name: NamePattern::Constructor,
            parameters: ParameterCriteria::Exact(Vec::new()),
        }
    }

    /// Constrains the call-site owner type.
    #[must_use]
    pub fn call_site(mut self, owner: TypeCriterion) -> Self {
        self.owner = owner;
        self
    }

    /// Sets the method name to match.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = NamePattern::Named(name.into());
        self
    }

    /// Matches constructor calls instead of a named method.
    #[must_use]
    pub fn constructor(mut self) -> Self {
        self.name = NamePattern::Constructor;
        self
    }

    /// Appends one parameter criterion by exact type name.
    #[must_use]
    pub fn add_parameter(self, type_name: impl Into<String>) -> Self {
        self.add_parameter_criterion(TypeCriterion::is(type_name))
    }

    /// Appends one parameter criterion.
    #[must_use]
    pub fn add_parameter_criterion(mut self, criterion: TypeCriterion) -> Self {
        match &mut self.parameters {
            ParameterCriteria::Exact(list) => list.push(criterion),
            ParameterCriteria::Any => {
                self.parameters = ParameterCriteria::Exact(vec![criterion]);
            }
        }
        self
    }

    /// Ignores arity and argument types entirely.
    #[must_use]
    pub fn with_any_parameters(mut self) -> Self {
        self.parameters = ParameterCriteria::Any;
        self
    }

    /// Evaluates this matcher against one call site.
    ///
    /// Owner criterion first (short-circuits), then name, then the
    /// parameter list. Unresolved owner or argument types fail their
    /// criteria closed, consistent with [`TypeCriterion::matches`].
    #[must_use]
    pub fn matches(&self, call: &CallSite, symbols: &SymbolTable) -> bool {
        if !self.owner.matches(call.owner_type.as_deref(), symbols) {
            return false;
        }

        let name_ok = match (&self.name, &call.kind) {
            (NamePattern::Named(expected), CallKind::Method(actual)) => expected == actual,
            (NamePattern::Constructor, CallKind::Constructor) => true,
            _ => false,
        };
        if !name_ok {
            return false;
        }

        match &self.parameters {
            ParameterCriteria::Any => true,
            ParameterCriteria::Exact(criteria) => {
                criteria.len() == call.arity()
                    && criteria
                        .iter()
                        .zip(&call.argument_types)
                        .all(|(criterion, actual)| criterion.matches(actual.as_deref(), symbols))
            }
        }
    }
}
