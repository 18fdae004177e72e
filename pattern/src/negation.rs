//! Negations: the wrapped pattern must not hold.

use crate::normalise::{self, memoise};
use crate::pattern::Block;
use crate::{NormalForm, Pattern, PatternError, PatternResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// Exactly one negated pattern, never itself a negation.
#[derive(Debug, Clone)]
pub struct Negation<T = Pattern> {
    pattern: Box<T>,
    normal_form: OnceLock<Box<Negation<NormalForm>>>,
}

impl<T> Negation<T> {
    pub(crate) fn sealed(pattern: T) -> Self {
        Self {
            pattern: Box::new(pattern),
            normal_form: OnceLock::new(),
        }
    }

    pub fn pattern(&self) -> &T {
        &self.pattern
    }

    pub fn into_inner(self) -> T {
        *self.pattern
    }
}

impl Negation<Pattern> {
    /// Negate `pattern`. Fails with `RedundantNestedNegation` if `pattern`
    /// is itself a negation.
    pub fn new(pattern: Pattern) -> PatternResult<Self> {
        if let Pattern::Negation(inner) = &pattern {
            return Err(PatternError::redundant_nested_negation(inner));
        }
        Ok(Self::sealed(pattern))
    }

    /// The negation of the inner pattern's normal form, computed on first
    /// use and cached.
    pub fn normalise(&self) -> PatternResult<&Negation<NormalForm>> {
        memoise(&self.normal_form, || normalise::negation(&self.pattern))
    }
}

impl Negation<NormalForm> {
    /// Already in normal form.
    pub fn normalise(&self) -> PatternResult<&Negation<NormalForm>> {
        Ok(self)
    }
}

impl<T: PartialEq> PartialEq for Negation<T> {
    fn eq(&self, other: &Self) -> bool {
        self.pattern == other.pattern
    }
}

impl<T: Eq> Eq for Negation<T> {}

impl<T: Hash> Hash for Negation<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern.hash(state);
    }
}

impl<T: Block> fmt::Display for Negation<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "not ")?;
        self.pattern.fmt_block(f)?;
        write!(f, ";")
    }
}
