//! Structural checks over normalised patterns.

use tql_pattern::{Conjunctable, NormalForm};

/// Render each branch of a normal form as the list of its leaves.
pub fn branches(normal: &NormalForm) -> Vec<Vec<String>> {
    normal
        .patterns()
        .iter()
        .map(|branch| branch.patterns().iter().map(|leaf| leaf.to_string()).collect())
        .collect()
}

/// Whether `normal` is a non-empty disjunction of non-empty conjunctions
/// whose negated leaves are themselves in normal form.
pub fn is_normal_form(normal: &NormalForm) -> bool {
    !normal.is_empty()
        && normal.patterns().iter().all(|branch| {
            !branch.is_empty()
                && branch.patterns().iter().all(|leaf| match leaf {
                    Conjunctable::Statement(_) => true,
                    Conjunctable::Negation(negation) => is_normal_form(negation.pattern()),
                })
        })
}

/// Maximum negation depth among the leaves of `normal`.
pub fn negation_depth(normal: &NormalForm) -> usize {
    normal
        .patterns()
        .iter()
        .flat_map(|branch| branch.patterns())
        .map(|leaf| match leaf {
            Conjunctable::Statement(_) => 0,
            Conjunctable::Negation(negation) => 1 + negation_depth(negation.pattern()),
        })
        .max()
        .unwrap_or(0)
}
