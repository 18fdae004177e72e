//! Normalisation of randomly generated pattern trees.

use tql_tests::prelude::*;
use tql_testgen::{branch_count, GeneratorConfig, PatternGenerator};

const SEEDS: [u64; 4] = [1, 7, 42, 1234];

fn generate(config: GeneratorConfig, count: usize) -> Vec<tql_testgen::GeneratedPattern> {
    PatternGenerator::new(config).generate_many(count).unwrap()
}

#[test]
fn test_branch_count_follows_product_rule() {
    for seed in SEEDS {
        for generated in generate(GeneratorConfig::new().with_seed(seed), 40) {
            let normal = generated.conjunction.normalise().unwrap();

            assert_eq!(
                normal.len(),
                generated.expected_branches,
                "seed {}: {}",
                seed,
                generated.conjunction
            );
        }
    }
}

#[test]
fn test_generated_normal_forms_have_normal_shape() {
    for seed in SEEDS {
        for generated in generate(GeneratorConfig::new().with_seed(seed), 40) {
            let normal = generated.conjunction.normalise().unwrap();

            assert!(is_normal_form(normal), "seed {}: {}", seed, generated.conjunction);
        }
    }
}

#[test]
fn test_generated_normal_forms_are_fixed_points() {
    for generated in generate(GeneratorConfig::new().with_seed(99), 40) {
        let normal = generated.conjunction.normalise().unwrap().clone();

        let pattern = Pattern::from(normal.clone());
        let again = pattern.normalise().unwrap();

        assert_eq!(again.as_ref(), &normal);
        assert_eq!(branch_count(&pattern), normal.len());
    }
}

#[test]
fn test_stress_config_stays_within_branch_limit() {
    let config = GeneratorConfig::stress();
    let limit = config.max_branches;

    for generated in generate(config, 10) {
        let normal = generated.conjunction.normalise().unwrap();

        assert!(normal.len() <= limit);
    }
}
