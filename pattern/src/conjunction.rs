//! Conjunctions: every child pattern must hold.

use crate::normalise::{self, memoise};
use crate::pattern::Block;
use crate::{Conjunctable, Disjunction, NormalForm, Pattern, PatternError, PatternResult, Statement};
use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;
use tql_core::Variable;

/// An ordered, non-empty list of patterns that must all hold.
#[derive(Debug, Clone)]
pub struct Conjunction<T = Pattern> {
    patterns: Vec<T>,
    normal_form: OnceLock<Box<NormalForm>>,
}

impl<T> Conjunction<T> {
    /// Create a conjunction. Fails with `MissingPatterns` when empty.
    pub fn new(patterns: Vec<T>) -> PatternResult<Self> {
        if patterns.is_empty() {
            return Err(PatternError::MissingPatterns);
        }
        Ok(Self::sealed(patterns))
    }

    /// Callers guarantee `patterns` is non-empty.
    pub(crate) fn sealed(patterns: Vec<T>) -> Self {
        Self {
            patterns,
            normal_form: OnceLock::new(),
        }
    }

    pub fn patterns(&self) -> &[T] {
        &self.patterns
    }

    pub fn into_patterns(self) -> Vec<T> {
        self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Conjunction<Pattern> {
    /// The disjunctive normal form, computed on first use and cached.
    pub fn normalise(&self) -> PatternResult<&NormalForm> {
        memoise(&self.normal_form, || normalise::conjunction(&self.patterns))
    }

    /// Statements reachable through this conjunction and directly nested
    /// conjunctions, without entering disjunctions or negations.
    pub fn shallow_statements(&self) -> Vec<&Statement> {
        let mut statements = Vec::new();
        self.visit_shallow(&mut |pattern| {
            if let Pattern::Statement(s) = pattern {
                statements.push(s);
            }
        });
        statements
    }

    /// Disjunctions and negations reachable at the same shallow level as
    /// [`Conjunction::shallow_statements`].
    pub fn nested_patterns(&self) -> Vec<&Pattern> {
        let mut nested = Vec::new();
        self.visit_shallow(&mut |pattern| {
            if pattern.is_disjunction() || pattern.is_negation() {
                nested.push(pattern);
            }
        });
        nested
    }

    /// Named variables introduced by the shallow statements.
    pub fn named_variables(&self) -> HashSet<Variable> {
        self.shallow_statements()
            .into_iter()
            .flat_map(|s| s.named_variables())
            .cloned()
            .collect()
    }

    fn visit_shallow<'a>(&'a self, visit: &mut impl FnMut(&'a Pattern)) {
        for pattern in &self.patterns {
            match pattern {
                Pattern::Conjunction(nested) => nested.visit_shallow(visit),
                other => visit(other),
            }
        }
    }
}

impl Conjunction<Conjunctable> {
    /// An already-normal conjunction normalises to a single-branch
    /// disjunction of itself.
    pub fn normalise(&self) -> PatternResult<&NormalForm> {
        memoise(&self.normal_form, || {
            Ok(Disjunction::sealed(vec![Conjunction::sealed(self.patterns.clone())]))
        })
    }
}

impl<T: PartialEq> PartialEq for Conjunction<T> {
    fn eq(&self, other: &Self) -> bool {
        self.patterns == other.patterns
    }
}

impl<T: Eq> Eq for Conjunction<T> {}

impl<T: Hash> Hash for Conjunction<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.patterns.hash(state);
    }
}

impl<T: fmt::Display> fmt::Display for Conjunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for pattern in &self.patterns {
            write!(f, " {}", pattern)?;
        }
        write!(f, " }}")
    }
}

impl<T: fmt::Display> Block for Conjunction<T> {
    fn fmt_block(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Negation;

    fn statement(name: &str) -> Pattern {
        Pattern::from(
            Statement::builder(Variable::concept(name).unwrap())
                .isa(Variable::label("thing").unwrap())
                .build(),
        )
    }

    #[test]
    fn test_empty_conjunction_rejected() {
        let result = Conjunction::<Pattern>::new(Vec::new());
        assert_eq!(result, Err(PatternError::MissingPatterns));
    }

    #[test]
    fn test_shallow_statements_enter_nested_conjunctions_only() {
        // GIVEN
        let nested = Conjunction::new(vec![statement("b")]).unwrap();
        let disjunction = Disjunction::new(vec![statement("c")]).unwrap();
        let negation = Negation::new(statement("d")).unwrap();
        let conjunction = Conjunction::new(vec![
            statement("a"),
            Pattern::from(nested),
            Pattern::from(disjunction),
            Pattern::from(negation),
        ])
        .unwrap();

        // WHEN
        let heads: Vec<String> = conjunction
            .shallow_statements()
            .iter()
            .map(|s| s.head().to_string())
            .collect();

        // THEN
        assert_eq!(heads, vec!["$a", "$b"]);
        assert_eq!(conjunction.nested_patterns().len(), 2);
        assert_eq!(conjunction.named_variables().len(), 2);
    }

    #[test]
    fn test_equality_ignores_cache() {
        // GIVEN
        let a = Conjunction::new(vec![statement("x")]).unwrap();
        let b = Conjunction::new(vec![statement("x")]).unwrap();

        // WHEN
        a.normalise().unwrap();

        // THEN
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let conjunction = Conjunction::new(vec![statement("x"), statement("y")]).unwrap();
        assert_eq!(
            conjunction.to_string(),
            "{ $x isa thing; $y isa thing; }"
        );
    }

    #[test]
    fn test_normal_conjunction_normalises_to_itself() {
        let normal = Conjunction::new(vec![statement("x")])
            .unwrap()
            .normalise()
            .unwrap()
            .clone();
        let branch = &normal.patterns()[0];

        let renormalised = branch.normalise().unwrap();

        assert_eq!(renormalised.patterns(), &[branch.clone()]);
    }
}
