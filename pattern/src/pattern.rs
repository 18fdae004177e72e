//! The closed pattern sum type.

use crate::{Conjunction, Disjunction, Negation, PatternError, PatternResult, Statement};
use std::borrow::Cow;
use std::fmt;
use tql_core::Variable;

/// A disjunction of conjunctions of leaves: the normalised form of any
/// pattern.
pub type NormalForm = Disjunction<Conjunction<Conjunctable>>;

/// Any node of a pattern tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    Statement(Statement),
    Conjunction(Conjunction<Pattern>),
    Disjunction(Disjunction<Pattern>),
    Negation(Negation<Pattern>),
}

impl Pattern {
    /// Name of the variant, as used in casting errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Pattern::Statement(_) => "statement",
            Pattern::Conjunction(_) => "conjunction",
            Pattern::Disjunction(_) => "disjunction",
            Pattern::Negation(_) => "negation",
        }
    }

    pub fn is_statement(&self) -> bool {
        matches!(self, Pattern::Statement(_))
    }

    pub fn is_conjunction(&self) -> bool {
        matches!(self, Pattern::Conjunction(_))
    }

    pub fn is_disjunction(&self) -> bool {
        matches!(self, Pattern::Disjunction(_))
    }

    pub fn is_negation(&self) -> bool {
        matches!(self, Pattern::Negation(_))
    }

    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Pattern::Statement(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_conjunction(&self) -> Option<&Conjunction> {
        match self {
            Pattern::Conjunction(c) => Some(c),
            _ => None,
        }
    }

    pub fn as_disjunction(&self) -> Option<&Disjunction> {
        match self {
            Pattern::Disjunction(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_negation(&self) -> Option<&Negation> {
        match self {
            Pattern::Negation(n) => Some(n),
            _ => None,
        }
    }

    /// Every statement in the tree, depth first.
    pub fn statements(&self) -> Vec<&Statement> {
        let mut statements = Vec::new();
        self.collect_statements(&mut statements);
        statements
    }

    fn collect_statements<'a>(&'a self, out: &mut Vec<&'a Statement>) {
        match self {
            Pattern::Statement(s) => out.push(s),
            Pattern::Conjunction(c) => c.patterns().iter().for_each(|p| p.collect_statements(out)),
            Pattern::Disjunction(d) => d.patterns().iter().for_each(|p| p.collect_statements(out)),
            Pattern::Negation(n) => n.pattern().collect_statements(out),
        }
    }

    /// Every variable occurrence in the tree.
    pub fn variables(&self) -> Vec<&Variable> {
        self.statements()
            .into_iter()
            .flat_map(|s| s.variables())
            .collect()
    }

    /// The disjunctive normal form of this pattern.
    ///
    /// Conjunctions and disjunctions return their memoised form; statements
    /// and negations are wrapped in a single-branch disjunction.
    pub fn normalise(&self) -> PatternResult<Cow<'_, NormalForm>> {
        match self {
            Pattern::Statement(s) => Ok(Cow::Owned(Disjunction::sealed(vec![Conjunction::sealed(
                vec![Conjunctable::Statement(s.clone())],
            )]))),
            Pattern::Negation(n) => Ok(Cow::Owned(Disjunction::sealed(vec![Conjunction::sealed(
                vec![Conjunctable::Negation(n.normalise()?.clone())],
            )]))),
            Pattern::Conjunction(c) => c.normalise().map(Cow::Borrowed),
            Pattern::Disjunction(d) => d.normalise().map(Cow::Borrowed),
        }
    }
}

/// A pattern legal as a direct child of a normalised conjunction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Conjunctable {
    Statement(Statement),
    Negation(Negation<NormalForm>),
}

impl Conjunctable {
    pub fn as_statement(&self) -> Option<&Statement> {
        match self {
            Conjunctable::Statement(s) => Some(s),
            Conjunctable::Negation(_) => None,
        }
    }

    pub fn as_negation(&self) -> Option<&Negation<NormalForm>> {
        match self {
            Conjunctable::Negation(n) => Some(n),
            Conjunctable::Statement(_) => None,
        }
    }
}

impl From<Statement> for Conjunctable {
    fn from(statement: Statement) -> Self {
        Conjunctable::Statement(statement)
    }
}

impl From<Negation<NormalForm>> for Conjunctable {
    fn from(negation: Negation<NormalForm>) -> Self {
        Conjunctable::Negation(negation)
    }
}

impl fmt::Display for Conjunctable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conjunctable::Statement(s) => fmt::Display::fmt(s, f),
            Conjunctable::Negation(n) => fmt::Display::fmt(n, f),
        }
    }
}

// ==================== CONVERSIONS ====================

impl From<Statement> for Pattern {
    fn from(statement: Statement) -> Self {
        Pattern::Statement(statement)
    }
}

impl From<Conjunction<Pattern>> for Pattern {
    fn from(conjunction: Conjunction<Pattern>) -> Self {
        Pattern::Conjunction(conjunction)
    }
}

impl From<Disjunction<Pattern>> for Pattern {
    fn from(disjunction: Disjunction<Pattern>) -> Self {
        Pattern::Disjunction(disjunction)
    }
}

impl From<Negation<Pattern>> for Pattern {
    fn from(negation: Negation<Pattern>) -> Self {
        Pattern::Negation(negation)
    }
}

impl From<Conjunctable> for Pattern {
    fn from(conjunctable: Conjunctable) -> Self {
        match conjunctable {
            Conjunctable::Statement(s) => Pattern::Statement(s),
            Conjunctable::Negation(n) => Pattern::from(n),
        }
    }
}

impl From<Negation<NormalForm>> for Pattern {
    fn from(negation: Negation<NormalForm>) -> Self {
        Pattern::Negation(Negation::sealed(Pattern::from(negation.into_inner())))
    }
}

impl From<Conjunction<Conjunctable>> for Pattern {
    fn from(conjunction: Conjunction<Conjunctable>) -> Self {
        Pattern::Conjunction(Conjunction::sealed(
            conjunction.into_patterns().into_iter().map(Pattern::from).collect(),
        ))
    }
}

impl From<NormalForm> for Pattern {
    fn from(disjunction: NormalForm) -> Self {
        Pattern::Disjunction(Disjunction::sealed(
            disjunction.into_patterns().into_iter().map(Pattern::from).collect(),
        ))
    }
}

impl TryFrom<Pattern> for Statement {
    type Error = PatternError;

    fn try_from(pattern: Pattern) -> PatternResult<Self> {
        match pattern {
            Pattern::Statement(s) => Ok(s),
            other => Err(PatternError::invalid_casting("statement", other.kind())),
        }
    }
}

impl TryFrom<Pattern> for Conjunction<Pattern> {
    type Error = PatternError;

    fn try_from(pattern: Pattern) -> PatternResult<Self> {
        match pattern {
            Pattern::Conjunction(c) => Ok(c),
            other => Err(PatternError::invalid_casting("conjunction", other.kind())),
        }
    }
}

impl TryFrom<Pattern> for Disjunction<Pattern> {
    type Error = PatternError;

    fn try_from(pattern: Pattern) -> PatternResult<Self> {
        match pattern {
            Pattern::Disjunction(d) => Ok(d),
            other => Err(PatternError::invalid_casting("disjunction", other.kind())),
        }
    }
}

impl TryFrom<Pattern> for Negation<Pattern> {
    type Error = PatternError;

    fn try_from(pattern: Pattern) -> PatternResult<Self> {
        match pattern {
            Pattern::Negation(n) => Ok(n),
            other => Err(PatternError::invalid_casting("negation", other.kind())),
        }
    }
}

// ==================== DISPLAY ====================

/// Rendering of a pattern as a braced block, as it appears inside
/// `or` and `not`. A conjunction contributes its children directly.
pub trait Block {
    fn fmt_block(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl Block for Pattern {
    fn fmt_block(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Conjunction(c) => c.fmt_block(f),
            other => write!(f, "{{ {} }}", other),
        }
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pattern::Statement(s) => fmt::Display::fmt(s, f),
            Pattern::Conjunction(c) => write!(f, "{};", c),
            Pattern::Disjunction(d) => fmt::Display::fmt(d, f),
            Pattern::Negation(n) => fmt::Display::fmt(n, f),
        }
    }
}
