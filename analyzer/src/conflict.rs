//! Concept/value variable name conflicts.

use crate::{AnalyzerError, AnalyzerResult};
use std::collections::BTreeSet;
use tql_core::Reference;
use tql_pattern::{Conjunction, Statement};

/// Fails with `VariableNameConflict` if a name is used both as a concept
/// variable (`$x`) and as a value variable (`?x`) by the statements at the
/// top level of `conjunction`. Nested disjunctions and negations are not
/// entered.
pub fn validate_variable_names(conjunction: &Conjunction) -> AnalyzerResult<()> {
    check_statements(conjunction.shallow_statements())
}

/// Conflict check over an explicit list of statements.
pub fn check_statements<'a>(statements: impl IntoIterator<Item = &'a Statement>) -> AnalyzerResult<()> {
    let mut concepts = BTreeSet::new();
    let mut values = BTreeSet::new();
    for statement in statements {
        for variable in statement.variables() {
            match variable.reference() {
                Reference::Concept(name) => {
                    concepts.insert(name.as_str());
                }
                Reference::Value(name) => {
                    values.insert(name.as_str());
                }
                _ => {}
            }
        }
    }

    let conflicts: Vec<String> = concepts
        .intersection(&values)
        .map(|name| name.to_string())
        .collect();
    if conflicts.is_empty() {
        Ok(())
    } else {
        Err(AnalyzerError::variable_name_conflict(conflicts))
    }
}
