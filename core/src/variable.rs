//! Variables held by statements.

use crate::{Reference, ReferenceResult};
use std::fmt;

/// A variable occurrence in a statement.
///
/// Equality, hashing and display are those of the wrapped [`Reference`], so
/// two occurrences of `$x` are the same variable wherever they appear.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Variable {
    reference: Reference,
}

impl Variable {
    pub fn new(reference: Reference) -> Self {
        Self { reference }
    }

    /// A named concept variable: `$name`.
    pub fn concept(name: impl Into<String>) -> ReferenceResult<Self> {
        Reference::concept(name).map(Self::new)
    }

    /// A named value variable: `?name`.
    pub fn value(name: impl Into<String>) -> ReferenceResult<Self> {
        Reference::value(name).map(Self::new)
    }

    /// A type variable referenced by label.
    pub fn label(label: impl Into<String>) -> ReferenceResult<Self> {
        Reference::label(label).map(Self::new)
    }

    /// A role type variable referenced by `scope:label`.
    pub fn scoped_label(scope: impl Into<String>, label: impl Into<String>) -> ReferenceResult<Self> {
        Reference::scoped_label(scope, label).map(Self::new)
    }

    /// A user-written `$_`.
    pub fn anonymous() -> Self {
        Self::new(Reference::anonymous())
    }

    /// A variable synthesized during statement construction.
    pub fn hidden() -> Self {
        Self::new(Reference::hidden())
    }

    pub fn reference(&self) -> &Reference {
        &self.reference
    }

    pub fn is_named(&self) -> bool {
        self.reference.is_named()
    }

    pub fn is_concept(&self) -> bool {
        self.reference.is_concept()
    }

    pub fn is_value(&self) -> bool {
        self.reference.is_value()
    }

    pub fn is_visible(&self) -> bool {
        self.reference.is_visible()
    }

    pub fn name(&self) -> Option<&str> {
        self.reference.name()
    }

    pub fn syntax(&self) -> String {
        self.reference.syntax()
    }
}

impl From<Reference> for Variable {
    fn from(reference: Reference) -> Self {
        Self::new(reference)
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.reference, f)
    }
}
