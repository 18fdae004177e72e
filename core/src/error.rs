//! Core error types.

use thiserror::Error;

/// Errors raised while constructing references.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferenceError {
    /// A concept or value variable name does not match the identifier grammar.
    #[error("The variable name '{name}' is invalid: it must match [A-Za-z0-9][A-Za-z0-9_-]*")]
    InvalidVariableName { name: String },

    /// A type label (or its scope) does not match the label grammar.
    #[error("The type label '{label}' is invalid: it must match [A-Za-z_][A-Za-z0-9_-]*")]
    InvalidTypeLabel { label: String },
}

impl ReferenceError {
    pub fn invalid_variable_name(name: impl Into<String>) -> Self {
        Self::InvalidVariableName { name: name.into() }
    }

    pub fn invalid_type_label(label: impl Into<String>) -> Self {
        Self::InvalidTypeLabel {
            label: label.into(),
        }
    }
}

/// Result type for reference operations.
pub type ReferenceResult<T> = Result<T, ReferenceError>;
