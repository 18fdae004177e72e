//! Configuration for pattern generation

/// Configuration for random pattern generation
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Random seed for reproducibility
    pub seed: u64,
    /// Maximum nesting depth below the top-level conjunction
    pub max_depth: usize,
    /// Maximum number of children of a conjunction or disjunction
    pub max_width: usize,
    /// Number of distinct concept variables to draw from
    pub variable_pool: usize,
    /// Probability that a child is a nested disjunction
    pub disjunction_probability: f64,
    /// Probability that a child is a nested conjunction
    pub conjunction_probability: f64,
    /// Probability that a child is a negation
    pub negation_probability: f64,
    /// Trees whose normal form would exceed this many branches are redrawn
    pub max_branches: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_depth: 3,
            max_width: 3,
            variable_pool: 4,
            disjunction_probability: 0.3,
            conjunction_probability: 0.15,
            negation_probability: 0.15,
            max_branches: 512,
        }
    }
}

impl GeneratorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn with_max_width(mut self, width: usize) -> Self {
        self.max_width = width.max(1);
        self
    }

    pub fn with_variable_pool(mut self, size: usize) -> Self {
        self.variable_pool = size.max(1);
        self
    }

    pub fn with_max_branches(mut self, branches: usize) -> Self {
        self.max_branches = branches.max(1);
        self
    }

    /// Flat trees of statements only.
    pub fn minimal() -> Self {
        Self {
            seed: 42,
            max_depth: 1,
            max_width: 2,
            variable_pool: 2,
            disjunction_probability: 0.0,
            conjunction_probability: 0.0,
            negation_probability: 0.0,
            max_branches: 1,
        }
    }

    /// Deep, wide trees with frequent nesting.
    pub fn stress() -> Self {
        Self {
            seed: 7,
            max_depth: 4,
            max_width: 4,
            variable_pool: 6,
            disjunction_probability: 0.4,
            conjunction_probability: 0.2,
            negation_probability: 0.2,
            max_branches: 4096,
        }
    }
}
