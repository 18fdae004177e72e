//! Terse constructors for hand-written pattern trees.
//!
//! These panic on invalid input, which is what a test wants.

use tql_core::Variable;
use tql_pattern::{Comparator, Conjunction, Disjunction, Negation, Pattern, Statement};

pub fn var(name: &str) -> Variable {
    Variable::concept(name).unwrap()
}

pub fn val(name: &str) -> Variable {
    Variable::value(name).unwrap()
}

pub fn label(name: &str) -> Variable {
    Variable::label(name).unwrap()
}

/// `$name isa type_;`
pub fn isa(name: &str, type_: &str) -> Pattern {
    Pattern::from(Statement::builder(var(name)).isa(label(type_)).build())
}

/// `$owner has attribute $value;`
pub fn has(owner: &str, attribute: &str, value: &str) -> Pattern {
    Pattern::from(
        Statement::builder(var(owner))
            .has(label(attribute), var(value))
            .build(),
    )
}

/// `?left > $right;`
pub fn greater(left: &str, right: &str) -> Pattern {
    Pattern::from(
        Statement::builder(val(left))
            .predicate(Comparator::Gt, var(right))
            .build(),
    )
}

pub fn conj(patterns: Vec<Pattern>) -> Conjunction {
    Conjunction::new(patterns).unwrap()
}

pub fn and(patterns: Vec<Pattern>) -> Pattern {
    Pattern::from(conj(patterns))
}

pub fn or(patterns: Vec<Pattern>) -> Pattern {
    Pattern::from(Disjunction::new(patterns).unwrap())
}

pub fn not(pattern: Pattern) -> Pattern {
    Pattern::from(Negation::new(pattern).unwrap())
}
