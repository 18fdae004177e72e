//! The top-level `match` clause of a query.

use crate::conflict::validate_variable_names;
use crate::{AnalyzerError, AnalyzerResult, BoundedBy};
use std::collections::HashSet;
use std::fmt;
use tql_core::Variable;
use tql_pattern::{Conjunction, NormalForm, Pattern};

/// A validated match clause: a conjunction of patterns and an optional
/// filter of the variables returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchClause {
    conjunction: Conjunction,
    filter: Option<Vec<Variable>>,
}

impl MatchClause {
    /// Validate `conjunction` as the body of a match clause.
    ///
    /// Checks, in order: the top level has a named variable, every nested
    /// pattern is bounded, no name is both a concept and a value variable,
    /// and at least one named variable is exposed.
    pub fn new(conjunction: Conjunction) -> AnalyzerResult<Self> {
        let bounding = conjunction.named_variables();
        if bounding.is_empty() {
            return Err(AnalyzerError::no_bounding_named_variable(&conjunction));
        }
        conjunction.validate_is_bounded_by(&bounding)?;
        validate_variable_names(&conjunction)?;
        if exposed_variables(&conjunction).is_empty() {
            return Err(AnalyzerError::no_named_variable(&conjunction));
        }
        tracing::debug!(
            patterns = conjunction.len(),
            bounding = bounding.len(),
            "validated match clause"
        );
        Ok(Self {
            conjunction,
            filter: None,
        })
    }

    /// Build and validate a match clause from its top-level patterns.
    /// Fails with `MissingPatterns` when `patterns` is empty.
    pub fn from_patterns(patterns: Vec<Pattern>) -> AnalyzerResult<Self> {
        Self::new(Conjunction::new(patterns)?)
    }

    /// Restrict the variables returned to the caller.
    pub fn get(self, filter: Vec<Variable>) -> AnalyzerResult<Self> {
        if filter.is_empty() {
            return Err(AnalyzerError::no_named_variable(&self));
        }
        let exposed = self.named_variables();
        if let Some(missing) = filter.iter().find(|v| !exposed.contains(v)) {
            return Err(AnalyzerError::variable_out_of_scope(missing));
        }
        Ok(Self {
            conjunction: self.conjunction,
            filter: Some(filter),
        })
    }

    pub fn conjunction(&self) -> &Conjunction {
        &self.conjunction
    }

    pub fn filter(&self) -> Option<&[Variable]> {
        self.filter.as_deref()
    }

    /// Named variables visible to the caller: those of every statement not
    /// under a negation.
    pub fn named_variables(&self) -> HashSet<&Variable> {
        exposed_variables(&self.conjunction)
    }

    /// The variables an answer binds: the filter if present, otherwise every
    /// exposed named variable in sorted order.
    pub fn retrieved_variables(&self) -> Vec<&Variable> {
        match &self.filter {
            Some(filter) => filter.iter().collect(),
            None => {
                let mut variables: Vec<&Variable> = self.named_variables().into_iter().collect();
                variables.sort();
                variables
            }
        }
    }

    /// The disjunctive normal form of the clause body.
    pub fn normalise(&self) -> AnalyzerResult<&NormalForm> {
        Ok(self.conjunction.normalise()?)
    }
}

fn exposed_variables(conjunction: &Conjunction) -> HashSet<&Variable> {
    let mut exposed = HashSet::new();
    for pattern in conjunction.patterns() {
        collect_exposed(pattern, &mut exposed);
    }
    exposed
}

fn collect_exposed<'a>(pattern: &'a Pattern, out: &mut HashSet<&'a Variable>) {
    match pattern {
        Pattern::Statement(s) => out.extend(s.named_variables()),
        Pattern::Conjunction(c) => c.patterns().iter().for_each(|p| collect_exposed(p, out)),
        Pattern::Disjunction(d) => d.patterns().iter().for_each(|p| collect_exposed(p, out)),
        Pattern::Negation(_) => {}
    }
}

impl fmt::Display for MatchClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match")?;
        for pattern in self.conjunction.patterns() {
            write!(f, "\n{}", pattern)?;
        }
        if let Some(filter) = &self.filter {
            write!(f, "\nget ")?;
            for (i, variable) in filter.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", variable)?;
            }
            write!(f, ";")?;
        }
        Ok(())
    }
}
