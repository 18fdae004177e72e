//! Generative testing support for TQL patterns
//!
//! Builds random, well-formed pattern trees from a seeded RNG, together with
//! the branch count their disjunctive normal form must have. The expected
//! count is tracked while generating, independently of the normaliser.

pub mod config;
pub mod generator;

pub use config::GeneratorConfig;
pub use generator::{branch_count, GeneratedPattern, PatternGenerator};
