//! Random pattern tree generation

use crate::config::GeneratorConfig;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tql_core::Variable;
use tql_pattern::{Conjunction, Disjunction, Negation, Pattern, PatternError, PatternResult, Statement};

const TYPE_LABELS: &[&str] = &["person", "company", "employment", "city"];
const ATTRIBUTE_LABELS: &[&str] = &["name", "age", "email"];
const MAX_ATTEMPTS: usize = 1000;

/// A generated top-level conjunction and the branch count its normal form
/// must have.
#[derive(Debug, Clone)]
pub struct GeneratedPattern {
    pub conjunction: Conjunction,
    pub expected_branches: usize,
}

/// Generates random, well-formed pattern trees
pub struct PatternGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl PatternGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = StdRng::seed_from_u64(config.seed);
        Self { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a top-level conjunction whose normal form has at most
    /// `max_branches` branches.
    pub fn generate(&mut self) -> PatternResult<GeneratedPattern> {
        for _ in 0..MAX_ATTEMPTS {
            let (conjunction, expected_branches) = self.conjunction(0)?;
            if expected_branches <= self.config.max_branches {
                return Ok(GeneratedPattern {
                    conjunction,
                    expected_branches,
                });
            }
            tracing::trace!(expected_branches, "redrawing oversized pattern");
        }
        Err(PatternError::illegal_state(format!(
            "no pattern within {} branches after {} attempts",
            self.config.max_branches, MAX_ATTEMPTS
        )))
    }

    /// Generate `count` patterns.
    pub fn generate_many(&mut self, count: usize) -> PatternResult<Vec<GeneratedPattern>> {
        (0..count).map(|_| self.generate()).collect()
    }

    fn conjunction(&mut self, depth: usize) -> PatternResult<(Conjunction, usize)> {
        let width = self.width();
        let mut patterns = Vec::with_capacity(width);
        let mut branches = 1usize;
        for _ in 0..width {
            let (pattern, count) = self.child(depth, true)?;
            patterns.push(pattern);
            branches = branches.saturating_mul(count);
        }
        Ok((Conjunction::new(patterns)?, branches))
    }

    fn disjunction(&mut self, depth: usize) -> PatternResult<(Disjunction, usize)> {
        let width = self.width();
        let mut patterns = Vec::with_capacity(width);
        let mut branches = 0usize;
        for _ in 0..width {
            let (pattern, count) = self.child(depth, true)?;
            patterns.push(pattern);
            branches = branches.saturating_add(count);
        }
        Ok((Disjunction::new(patterns)?, branches))
    }

    fn negation(&mut self, depth: usize) -> PatternResult<Negation> {
        let (inner, _) = self.child(depth, false)?;
        Negation::new(inner)
    }

    fn child(&mut self, depth: usize, allow_negation: bool) -> PatternResult<(Pattern, usize)> {
        if depth >= self.config.max_depth {
            return Ok((Pattern::from(self.statement()?), 1));
        }
        let roll: f64 = self.rng.gen();
        let disjunction = self.config.disjunction_probability;
        let conjunction = disjunction + self.config.conjunction_probability;
        let negation = conjunction + self.config.negation_probability;

        if roll < disjunction {
            let (d, count) = self.disjunction(depth + 1)?;
            Ok((Pattern::from(d), count))
        } else if roll < conjunction {
            let (c, count) = self.conjunction(depth + 1)?;
            Ok((Pattern::from(c), count))
        } else if allow_negation && roll < negation {
            Ok((Pattern::from(self.negation(depth + 1)?), 1))
        } else {
            Ok((Pattern::from(self.statement()?), 1))
        }
    }

    fn statement(&mut self) -> PatternResult<Statement> {
        let head = self.variable()?;
        let type_label = TYPE_LABELS[self.rng.gen_range(0..TYPE_LABELS.len())];
        let mut builder = Statement::builder(head).isa(Variable::label(type_label)?);
        if self.rng.gen_bool(0.3) {
            let attribute_label = ATTRIBUTE_LABELS[self.rng.gen_range(0..ATTRIBUTE_LABELS.len())];
            builder = builder.has(Variable::label(attribute_label)?, self.variable()?);
        }
        Ok(builder.build())
    }

    fn variable(&mut self) -> PatternResult<Variable> {
        let index = self.rng.gen_range(0..self.config.variable_pool.max(1));
        Ok(Variable::concept(format!("v{}", index))?)
    }

    fn width(&mut self) -> usize {
        self.rng.gen_range(1..=self.config.max_width.max(1))
    }
}

/// The number of branches in the normal form of `pattern`, by the product
/// rule: statements and negations count one, disjunctions sum their
/// children, conjunctions multiply them.
pub fn branch_count(pattern: &Pattern) -> usize {
    match pattern {
        Pattern::Statement(_) | Pattern::Negation(_) => 1,
        Pattern::Conjunction(c) => c
            .patterns()
            .iter()
            .map(branch_count)
            .fold(1, usize::saturating_mul),
        Pattern::Disjunction(d) => d
            .patterns()
            .iter()
            .map(branch_count)
            .fold(0, usize::saturating_add),
    }
}
