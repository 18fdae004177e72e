//! Pattern error types.

use thiserror::Error;
use tql_core::ReferenceError;

/// Errors raised while constructing, casting or normalising patterns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    /// An empty conjunction or disjunction.
    #[error("A conjunction or disjunction requires at least one pattern")]
    MissingPatterns,

    /// A negation wrapping another negation.
    #[error("Invalid query containing redundant nested negations: 'not {{ {pattern} }}'")]
    RedundantNestedNegation { pattern: String },

    /// A pattern cast to a variant it is not.
    #[error("Invalid casting from {actual} to {expected}")]
    InvalidCasting {
        expected: &'static str,
        actual: &'static str,
    },

    /// An internal invariant does not hold.
    #[error("Illegal internal state: {message}")]
    IllegalState { message: String },

    /// An invalid variable name or type label.
    #[error(transparent)]
    Reference(#[from] ReferenceError),
}

impl PatternError {
    pub fn redundant_nested_negation(pattern: impl ToString) -> Self {
        Self::RedundantNestedNegation {
            pattern: pattern.to_string(),
        }
    }

    pub fn invalid_casting(expected: &'static str, actual: &'static str) -> Self {
        Self::InvalidCasting { expected, actual }
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }
}

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;
