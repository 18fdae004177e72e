//! Analyzer error types.

use thiserror::Error;
use tql_pattern::PatternError;

/// Errors raised while validating the variable scoping of a query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalyzerError {
    /// A nested pattern shares no variable with its enclosing scope.
    #[error("The pattern '{pattern}' is not bounded by any variable of its enclosing scope")]
    MatchHasUnboundedNestedPattern { pattern: String },

    /// The top level of a match clause has no named variable.
    #[error("The match clause '{pattern}' has no named variable to bound its nested patterns")]
    MatchHasNoBoundingNamedVariable { pattern: String },

    /// The match clause exposes no named variable to the caller.
    #[error("The match clause '{pattern}' does not expose any named variable")]
    MatchHasNoNamedVariable { pattern: String },

    /// The same name is used as both a concept and a value variable.
    #[error("The variable names {names:?} are used both as concept variables and as value variables")]
    VariableNameConflict { names: Vec<String> },

    /// A filtered variable is not exposed by the match clause.
    #[error("The variable '{variable}' is out of scope of the match clause")]
    VariableOutOfScope { variable: String },

    /// An internal invariant does not hold.
    #[error("Illegal internal state: {message}")]
    IllegalState { message: String },

    /// A construction or normalisation error.
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

impl AnalyzerError {
    pub fn unbounded_nested_pattern(pattern: impl ToString) -> Self {
        Self::MatchHasUnboundedNestedPattern {
            pattern: pattern.to_string(),
        }
    }

    pub fn no_bounding_named_variable(pattern: impl ToString) -> Self {
        Self::MatchHasNoBoundingNamedVariable {
            pattern: pattern.to_string(),
        }
    }

    pub fn no_named_variable(pattern: impl ToString) -> Self {
        Self::MatchHasNoNamedVariable {
            pattern: pattern.to_string(),
        }
    }

    pub fn variable_name_conflict(names: Vec<String>) -> Self {
        Self::VariableNameConflict { names }
    }

    pub fn variable_out_of_scope(variable: impl ToString) -> Self {
        Self::VariableOutOfScope {
            variable: variable.to_string(),
        }
    }

    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }
}

/// Result type for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;
