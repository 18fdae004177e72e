//! Conversion of pattern trees into disjunctive normal form.
//!
//! Every rule lives here; the node types only memoise the results:
//!
//! - A statement is already a leaf.
//! - `not P` becomes `not DNF(P)`.
//! - `P1 or P2 or ...` becomes the concatenation of the branches of each
//!   `DNF(Pi)`.
//! - `P1; P2; ...` distributes over its nested disjunctions: leaves
//!   (statements and normalised negations) form one axis with a single
//!   conjunction, each nested conjunction or disjunction forms an axis of its
//!   branches, and every combination of one branch per axis becomes one
//!   branch of the result.
//!
//! The branch count of a conjunction is the product of the branch counts of
//! its axes, so deeply distributed trees grow exponentially.

use crate::{
    CartesianProduct, Conjunctable, Conjunction, Disjunction, Negation, NormalForm, Pattern,
    PatternError, PatternResult,
};
use std::sync::OnceLock;

/// Return the cached value in `cell`, computing and storing it on first use.
///
/// Concurrent first calls may both compute; the first store wins and the
/// results are equal.
pub(crate) fn memoise<'a, T>(
    cell: &'a OnceLock<Box<T>>,
    compute: impl FnOnce() -> PatternResult<T>,
) -> PatternResult<&'a T> {
    if let Some(value) = cell.get() {
        return Ok(value);
    }
    let value = compute()?;
    Ok(cell.get_or_init(|| Box::new(value)))
}

fn leaf(pattern: &Pattern) -> PatternResult<Option<Conjunctable>> {
    match pattern {
        Pattern::Statement(s) => Ok(Some(Conjunctable::Statement(s.clone()))),
        Pattern::Negation(n) => Ok(Some(Conjunctable::Negation(n.normalise()?.clone()))),
        Pattern::Conjunction(_) | Pattern::Disjunction(_) => Ok(None),
    }
}

fn branches(pattern: &Pattern) -> PatternResult<&[Conjunction<Conjunctable>]> {
    match pattern {
        Pattern::Conjunction(c) => Ok(c.normalise()?.patterns()),
        Pattern::Disjunction(d) => Ok(d.normalise()?.patterns()),
        other => Err(PatternError::illegal_state(format!(
            "{} has no nested branches",
            other.kind()
        ))),
    }
}

pub(crate) fn conjunction(patterns: &[Pattern]) -> PatternResult<NormalForm> {
    let mut leaves = Vec::new();
    let mut nested = Vec::new();
    for pattern in patterns {
        match leaf(pattern)? {
            Some(conjunctable) => leaves.push(conjunctable),
            None => nested.push(pattern),
        }
    }

    let leaf_axis = if leaves.is_empty() {
        Vec::new()
    } else {
        vec![Conjunction::sealed(leaves)]
    };
    let mut axes: Vec<&[Conjunction<Conjunctable>]> = Vec::with_capacity(nested.len() + 1);
    if !leaf_axis.is_empty() {
        axes.push(&leaf_axis);
    }
    for pattern in nested {
        axes.push(branches(pattern)?);
    }

    let product = CartesianProduct::new(axes)?;
    let combined: Vec<Conjunction<Conjunctable>> = product
        .iter()
        .map(|combination| {
            Conjunction::sealed(
                combination
                    .into_iter()
                    .flat_map(|branch| branch.patterns().iter().cloned())
                    .collect(),
            )
        })
        .collect();
    tracing::debug!(
        children = patterns.len(),
        branches = combined.len(),
        "normalised conjunction"
    );
    Ok(Disjunction::sealed(combined))
}

pub(crate) fn disjunction(patterns: &[Pattern]) -> PatternResult<NormalForm> {
    let mut combined = Vec::new();
    for pattern in patterns {
        match leaf(pattern)? {
            Some(conjunctable) => combined.push(Conjunction::sealed(vec![conjunctable])),
            None => combined.extend(branches(pattern)?.iter().cloned()),
        }
    }
    tracing::debug!(
        children = patterns.len(),
        branches = combined.len(),
        "normalised disjunction"
    );
    Ok(Disjunction::sealed(combined))
}

pub(crate) fn negation(pattern: &Pattern) -> PatternResult<Negation<NormalForm>> {
    let inner = match pattern {
        Pattern::Statement(s) => Disjunction::sealed(vec![Conjunction::sealed(vec![
            Conjunctable::Statement(s.clone()),
        ])]),
        Pattern::Conjunction(c) => c.normalise()?.clone(),
        Pattern::Disjunction(d) => d.normalise()?.clone(),
        Pattern::Negation(_) => {
            return Err(PatternError::illegal_state(
                "negation nested directly inside a negation",
            ))
        }
    };
    Ok(Negation::sealed(inner))
}
