//! Disjunctions: at least one branch must hold.

use crate::normalise::{self, memoise};
use crate::pattern::Block;
use crate::{Conjunction, Conjunctable, NormalForm, Pattern, PatternError, PatternResult};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::OnceLock;

/// An ordered, non-empty list of alternative patterns.
#[derive(Debug, Clone)]
pub struct Disjunction<T = Pattern> {
    patterns: Vec<T>,
    normal_form: OnceLock<Box<NormalForm>>,
}

impl<T> Disjunction<T> {
    /// Create a disjunction. Fails with `MissingPatterns` when empty.
    pub fn new(patterns: Vec<T>) -> PatternResult<Self> {
        if patterns.is_empty() {
            return Err(PatternError::MissingPatterns);
        }
        Ok(Self::sealed(patterns))
    }

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

impl Disjunction<Pattern> {
    /// The disjunctive normal form, computed on first use and cached.
    pub fn normalise(&self) -> PatternResult<&NormalForm> {
        memoise(&self.normal_form, || normalise::disjunction(&self.patterns))
    }
}

impl Disjunction<Conjunction<Conjunctable>> {
    /// Already in normal form.
    pub fn normalise(&self) -> PatternResult<&NormalForm> {
        Ok(self)
    }
}

impl<T: PartialEq> PartialEq for Disjunction<T> {
    fn eq(&self, other: &Self) -> bool {
        self.patterns == other.patterns
    }
}

impl<T: Eq> Eq for Disjunction<T> {}

impl<T: Hash> Hash for Disjunction<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.patterns.hash(state);
    }
}

impl<T: Block> fmt::Display for Disjunction<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pattern) in self.patterns.iter().enumerate() {
            if i > 0 {
                write!(f, " or ")?;
            }
            pattern.fmt_block(f)?;
        }
        write!(f, ";")
    }
}

impl<T: Block> Block for Disjunction<T> {
    fn fmt_block(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patterns.as_slice() {
            [single] => single.fmt_block(f),
            _ => write!(f, "{{ {} }}", self),
        }
    }
}
