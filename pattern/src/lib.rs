//! TQL Pattern
//!
//! The pattern algebra of TQL queries.
//!
//! Responsibilities:
//! - Represent statements, conjunctions, disjunctions and negations as a
//!   closed sum type
//! - Reject malformed trees at construction (empty conjunctions, negated
//!   negations)
//! - Rewrite any tree into disjunctive normal form, memoised per node

mod cartesian;
mod conjunction;
mod disjunction;
mod error;
mod negation;
mod normalise;
mod pattern;
mod statement;

pub use cartesian::CartesianProduct;
pub use conjunction::Conjunction;
pub use disjunction::Disjunction;
pub use error::{PatternError, PatternResult};
pub use negation::Negation;
pub use pattern::{Conjunctable, NormalForm, Pattern};
pub use statement::{Comparator, Constraint, Operand, RolePlayer, Statement, StatementBuilder};
