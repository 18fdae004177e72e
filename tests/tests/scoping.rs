//! Boundedness, name conflicts and match clause validation.

use std::collections::HashSet;
use tql_tests::prelude::*;

fn bound(names: &[&str]) -> HashSet<Variable> {
    names.iter().map(|name| var(name)).collect()
}

mod bounded {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_disjunction_sharing_outer_variable_is_bounded() {
        // GIVEN - $x isa person; { $x has name $n; } or { $x has age $a; };
        let conjunction = conj(vec![
            isa("x", "person"),
            or(vec![has("x", "name", "n"), has("x", "age", "a")]),
        ]);

        // WHEN
        let result = conjunction.validate_is_bounded_by(&conjunction.named_variables());

        // THEN
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn test_negation_over_fresh_variables_is_unbounded() {
        let conjunction = conj(vec![isa("x", "person"), not(isa("y", "dog"))]);

        let result = conjunction.validate_is_bounded_by(&conjunction.named_variables());

        assert_eq!(
            result,
            Err(AnalyzerError::unbounded_nested_pattern("$y isa dog;"))
        );
    }

    #[test]
    fn test_bound_set_grows_with_each_conjunction_level() {
        // GIVEN - the nested conjunction only mentions $y, bound one level up
        let conjunction = conj(vec![
            has("x", "friend", "y"),
            or(vec![and(vec![isa("y", "b"), not(isa("y", "c"))])]),
        ]);

        // THEN
        assert!(conjunction.validate_is_bounded_by(&bound(&["x"])).is_ok());
    }

    #[test]
    fn test_nothing_is_bounded_by_an_empty_set() {
        assert!(isa("x", "person")
            .validate_is_bounded_by(&HashSet::new())
            .is_err());
    }
}

mod match_clause {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_valid_query_exposes_top_level_variables() {
        // GIVEN
        let clause = MatchClause::from_patterns(vec![
            isa("x", "person"),
            has("x", "name", "n"),
            not(has("x", "age", "a")),
        ])
        .unwrap();

        // THEN
        assert_eq!(clause.retrieved_variables(), vec![&var("n"), &var("x")]);
    }

    #[test]
    fn test_value_and_concept_with_same_name_conflict() {
        let result = MatchClause::from_patterns(vec![
            isa("x", "person"),
            has("x", "age", "a"),
            greater("a", "x"),
        ]);

        assert_eq!(
            result,
            Err(AnalyzerError::variable_name_conflict(vec!["a".to_string()]))
        );
    }

    #[test]
    fn test_only_anonymous_variables_fails() {
        let anonymous = Pattern::from(
            Statement::builder(Variable::anonymous())
                .isa(label("person"))
                .build(),
        );

        let result = MatchClause::from_patterns(vec![anonymous]);

        assert!(matches!(
            result,
            Err(AnalyzerError::MatchHasNoBoundingNamedVariable { .. })
        ));
    }

    #[test]
    fn test_filter_must_name_exposed_variables() {
        let clause = MatchClause::from_patterns(vec![isa("x", "person")]).unwrap();

        let result = clause.get(vec![var("y")]);

        assert_eq!(result, Err(AnalyzerError::variable_out_of_scope("$y")));
    }

    #[test]
    fn test_clause_normalises_its_body() {
        let clause = MatchClause::from_patterns(vec![
            isa("x", "person"),
            or(vec![has("x", "name", "n"), has("x", "age", "a")]),
            or(vec![isa("x", "employee"), isa("x", "student")]),
        ])
        .unwrap();

        assert_eq!(clause.normalise().unwrap().len(), 4);
    }
}
