//! Variable identities.
//!
//! A reference is what makes two variable occurrences "the same variable":
//! a named concept variable (`$x`), a named value variable (`?x`), a type
//! label (`person`, `marriage:spouse`) or an anonymous variable (`$_`).

use crate::{ReferenceError, ReferenceResult};
use regex_lite::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Grammar for concept and value variable names. A leading digit is allowed.
pub const VARIABLE_NAME_PATTERN: &str = "^[A-Za-z0-9][A-Za-z0-9_-]*$";

/// Grammar for type labels and label scopes. A leading digit is not allowed.
pub const TYPE_LABEL_PATTERN: &str = "^[A-Za-z_][A-Za-z0-9_-]*$";

static VARIABLE_NAME_REGEX: OnceLock<Option<Regex>> = OnceLock::new();
static TYPE_LABEL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn grammar_matches(cell: &'static OnceLock<Option<Regex>>, pattern: &str, text: &str) -> bool {
    cell.get_or_init(|| Regex::new(pattern).ok())
        .as_ref()
        .is_some_and(|regex| regex.is_match(text))
}

/// Returns true if `name` is a valid concept or value variable name.
pub fn is_valid_variable_name(name: &str) -> bool {
    grammar_matches(&VARIABLE_NAME_REGEX, VARIABLE_NAME_PATTERN, name)
}

/// Returns true if `label` is a valid type label or label scope.
pub fn is_valid_type_label(label: &str) -> bool {
    grammar_matches(&TYPE_LABEL_REGEX, TYPE_LABEL_PATTERN, label)
}

/// The identity of a variable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Reference {
    /// A user-named concept variable: `$name`.
    Concept(String),
    /// A user-named value variable: `?name`.
    Value(String),
    /// A type label, optionally scoped by a relation type: `scope:label`.
    Label {
        label: String,
        scope: Option<String>,
    },
    /// An anonymous variable. `visible` is true for a user-written `$_` and
    /// false for variables synthesized while building statements.
    Anonymous { visible: bool },
}

impl Reference {
    /// Create a named concept reference, validating the name.
    pub fn concept(name: impl Into<String>) -> ReferenceResult<Self> {
        let name = name.into();
        if !is_valid_variable_name(&name) {
            return Err(ReferenceError::invalid_variable_name(name));
        }
        Ok(Reference::Concept(name))
    }

    /// Create a named value reference, validating the name.
    pub fn value(name: impl Into<String>) -> ReferenceResult<Self> {
        let name = name.into();
        if !is_valid_variable_name(&name) {
            return Err(ReferenceError::invalid_variable_name(name));
        }
        Ok(Reference::Value(name))
    }

    /// Create an unscoped label reference, validating the label.
    pub fn label(label: impl Into<String>) -> ReferenceResult<Self> {
        let label = label.into();
        if !is_valid_type_label(&label) {
            return Err(ReferenceError::invalid_type_label(label));
        }
        Ok(Reference::Label { label, scope: None })
    }

    /// Create a label reference scoped by a relation type (`scope:label`).
    pub fn scoped_label(scope: impl Into<String>, label: impl Into<String>) -> ReferenceResult<Self> {
        let scope = scope.into();
        let label = label.into();
        if !is_valid_type_label(&scope) {
            return Err(ReferenceError::invalid_type_label(scope));
        }
        if !is_valid_type_label(&label) {
            return Err(ReferenceError::invalid_type_label(label));
        }
        Ok(Reference::Label {
            label,
            scope: Some(scope),
        })
    }

    /// A user-written anonymous variable (`$_`).
    pub fn anonymous() -> Self {
        Reference::Anonymous { visible: true }
    }

    /// An internally synthesized anonymous variable.
    pub fn hidden() -> Self {
        Reference::Anonymous { visible: false }
    }

    /// Returns true for concept and value references.
    pub fn is_named(&self) -> bool {
        matches!(self, Reference::Concept(_) | Reference::Value(_))
    }

    /// Returns true if this is a named concept reference.
    pub fn is_concept(&self) -> bool {
        matches!(self, Reference::Concept(_))
    }

    /// Returns true if this is a named value reference.
    pub fn is_value(&self) -> bool {
        matches!(self, Reference::Value(_))
    }

    /// Returns true if this is a label reference.
    pub fn is_label(&self) -> bool {
        matches!(self, Reference::Label { .. })
    }

    /// Returns true if this is an anonymous reference.
    pub fn is_anonymous(&self) -> bool {
        matches!(self, Reference::Anonymous { .. })
    }

    /// Returns false only for hidden anonymous references.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Reference::Anonymous { visible: false })
    }

    /// The user-chosen name of a concept or value reference.
    pub fn name(&self) -> Option<&str> {
        match self {
            Reference::Concept(name) | Reference::Value(name) => Some(name),
            _ => None,
        }
    }

    /// Canonical textual form.
    pub fn syntax(&self) -> String {
        match self {
            Reference::Concept(name) => format!("${}", name),
            Reference::Value(name) => format!("?{}", name),
            Reference::Label { label, scope: None } => label.clone(),
            Reference::Label {
                label,
                scope: Some(scope),
            } => format!("{}:{}", scope, label),
            Reference::Anonymous { .. } => "$_".to_string(),
        }
    }
}

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.syntax())
    }
}
