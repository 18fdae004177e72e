//! Variable scope management and nested-pattern boundedness.
//!
//! A nested disjunction or negation only makes sense if it shares a variable
//! with the patterns around it. The bound set starts with the caller's
//! variables and grows by one frame per conjunction level.

use crate::{AnalyzerError, AnalyzerResult};
use std::collections::HashSet;
use tql_core::Variable;
use tql_pattern::{Conjunction, Disjunction, Negation, Pattern, Statement};

/// The variables bound at the current nesting level.
#[derive(Debug)]
pub struct Scope {
    /// Stack of scope frames, one per enclosing conjunction.
    frames: Vec<HashSet<Variable>>,
}

impl Scope {
    /// Create a scope whose outermost frame holds `bound`.
    pub fn new(bound: impl IntoIterator<Item = Variable>) -> Self {
        Self {
            frames: vec![bound.into_iter().collect()],
        }
    }

    /// Push a new scope frame.
    pub fn push(&mut self, frame: HashSet<Variable>) {
        self.frames.push(frame);
    }

    /// Pop the current scope frame. The outermost frame is never popped.
    pub fn pop(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Check if a variable is bound in any frame.
    pub fn is_bound(&self, variable: &Variable) -> bool {
        self.frames.iter().any(|frame| frame.contains(variable))
    }

    /// Check if any of `variables` is bound.
    pub fn binds_any<'a>(&self, mut variables: impl Iterator<Item = &'a Variable>) -> bool {
        variables.any(|v| self.is_bound(v))
    }

    /// All bound variables, across frames.
    pub fn bound(&self) -> HashSet<&Variable> {
        self.frames.iter().flatten().collect()
    }

    /// Get the current depth (number of nested frames).
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

/// Validation that a pattern is connected to an enclosing scope.
pub trait BoundedBy {
    /// Fails with `MatchHasUnboundedNestedPattern` if the pattern, or any
    /// pattern nested in it, shares no variable with its enclosing scope.
    fn validate_is_bounded_by(&self, bound: &HashSet<Variable>) -> AnalyzerResult<()> {
        let mut scope = Scope::new(bound.iter().cloned());
        self.check_bounded(&mut scope)
    }

    /// Validate against an existing scope.
    fn check_bounded(&self, scope: &mut Scope) -> AnalyzerResult<()>;
}

impl BoundedBy for Statement {
    fn check_bounded(&self, scope: &mut Scope) -> AnalyzerResult<()> {
        if scope.binds_any(self.variables()) {
            Ok(())
        } else {
            Err(AnalyzerError::unbounded_nested_pattern(self))
        }
    }
}

impl BoundedBy for Conjunction {
    fn check_bounded(&self, scope: &mut Scope) -> AnalyzerResult<()> {
        let named = self.named_variables();
        if !scope.binds_any(named.iter()) {
            return Err(AnalyzerError::unbounded_nested_pattern(self));
        }
        tracing::trace!(depth = scope.depth(), named = named.len(), "conjunction is bounded");

        scope.push(named);
        let result = self
            .nested_patterns()
            .into_iter()
            .try_for_each(|nested| nested.check_bounded(scope));
        scope.pop();
        result
    }
}

impl BoundedBy for Disjunction {
    fn check_bounded(&self, scope: &mut Scope) -> AnalyzerResult<()> {
        // Branches are independent: nothing bound in one binds another.
        self.patterns()
            .iter()
            .try_for_each(|branch| branch.check_bounded(scope))
    }
}

impl BoundedBy for Negation {
    fn check_bounded(&self, scope: &mut Scope) -> AnalyzerResult<()> {
        match self.pattern() {
            Pattern::Negation(_) => Err(AnalyzerError::illegal_state(
                "negation nested directly inside a negation",
            )),
            inner => inner.check_bounded(scope),
        }
    }
}

impl BoundedBy for Pattern {
    fn check_bounded(&self, scope: &mut Scope) -> AnalyzerResult<()> {
        match self {
            Pattern::Statement(s) => s.check_bounded(scope),
            Pattern::Conjunction(c) => c.check_bounded(scope),
            Pattern::Disjunction(d) => d.check_bounded(scope),
            Pattern::Negation(n) => n.check_bounded(scope),
        }
    }
}
