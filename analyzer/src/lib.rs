//! TQL Analyzer
//!
//! Variable scoping checks over pattern trees.
//! Validates that nested patterns are bounded by their enclosing scope, that
//! no name is used as both a concept and a value variable, and that a match
//! clause exposes named variables to its caller.

mod conflict;
mod error;
mod match_clause;
mod scope;

pub use conflict::{check_statements, validate_variable_names};
pub use error::{AnalyzerError, AnalyzerResult};
pub use match_clause::MatchClause;
pub use scope::{BoundedBy, Scope};
