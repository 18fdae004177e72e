//! Shared helpers for TQL integration tests.

pub mod assertion;
pub mod builders;

pub mod prelude {
    pub use crate::assertion::*;
    pub use crate::builders::*;
    pub use tql_analyzer::{AnalyzerError, BoundedBy, MatchClause};
    pub use tql_core::Variable;
    pub use tql_pattern::{
        Conjunctable, Conjunction, Disjunction, Negation, NormalForm, Pattern, PatternError,
        Statement,
    };
}
