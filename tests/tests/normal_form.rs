//! Disjunctive normal form of hand-built pattern trees.

use tql_tests::prelude::*;

mod distribution {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_conjunction_with_two_disjunctions_has_four_branches() {
        // GIVEN - $a; { $b } or { $c }; { $d } or { $e };
        let conjunction = conj(vec![
            isa("a", "thing"),
            or(vec![isa("b", "thing"), isa("c", "thing")]),
            or(vec![isa("d", "thing"), isa("e", "thing")]),
        ]);

        // WHEN
        let normal = conjunction.normalise().unwrap();

        // THEN
        assert_eq!(
            branches(normal),
            vec![
                vec!["$a isa thing;", "$b isa thing;", "$d isa thing;"],
                vec!["$a isa thing;", "$b isa thing;", "$e isa thing;"],
                vec!["$a isa thing;", "$c isa thing;", "$d isa thing;"],
                vec!["$a isa thing;", "$c isa thing;", "$e isa thing;"],
            ]
        );
    }

    #[test]
    fn test_nested_conjunction_in_disjunction_branch_is_distributed() {
        // GIVEN - $x; { $y; { $p } or { $q }; } or { $z };
        let conjunction = conj(vec![
            isa("x", "person"),
            or(vec![
                and(vec![
                    has("x", "name", "y"),
                    or(vec![isa("p", "a"), isa("q", "b")]),
                ]),
                isa("z", "c"),
            ]),
        ]);

        // WHEN
        let normal = conjunction.normalise().unwrap();

        // THEN
        assert_eq!(
            branches(normal),
            vec![
                vec!["$x isa person;", "$x has name $y;", "$p isa a;"],
                vec!["$x isa person;", "$x has name $y;", "$q isa b;"],
                vec!["$x isa person;", "$z isa c;"],
            ]
        );
    }

    #[test]
    fn test_single_statement_is_one_branch() {
        let normal = isa("x", "person").normalise().unwrap().into_owned();

        assert_eq!(branches(&normal), vec![vec!["$x isa person;"]]);
    }
}

mod negation {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_negated_disjunction_stays_one_leaf() {
        // GIVEN - $x; not { { $x has name $n } or { $x has age $a } };
        let conjunction = conj(vec![
            isa("x", "person"),
            not(or(vec![has("x", "name", "n"), has("x", "age", "a")])),
        ]);

        // WHEN
        let normal = conjunction.normalise().unwrap();

        // THEN - one branch, and the negated part is normalised on its own
        assert_eq!(normal.len(), 1);
        let negation = normal.patterns()[0].patterns()[1].as_negation().unwrap();
        assert_eq!(
            branches(negation.pattern()),
            vec![vec!["$x has name $n;"], vec!["$x has age $a;"]]
        );
        assert_eq!(negation_depth(normal), 1);
    }

    #[test]
    fn test_double_negation_is_rejected_at_construction() {
        let inner = Negation::new(isa("x", "person")).unwrap();

        let result = Negation::new(Pattern::from(inner));

        assert!(matches!(
            result,
            Err(PatternError::RedundantNestedNegation { .. })
        ));
    }

    #[test]
    fn test_negation_nested_through_conjunction_is_allowed() {
        let pattern = not(and(vec![
            isa("x", "person"),
            not(has("x", "name", "n")),
        ]));

        let normal = pattern.normalise().unwrap();

        assert_eq!(negation_depth(&normal), 2);
        assert!(is_normal_form(&normal));
    }
}

mod construction {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_empty_conjunction_is_rejected() {
        assert_eq!(
            Conjunction::<Pattern>::new(Vec::new()),
            Err(PatternError::MissingPatterns)
        );
    }

    #[test]
    fn test_empty_disjunction_is_rejected() {
        assert_eq!(
            Disjunction::<Pattern>::new(Vec::new()),
            Err(PatternError::MissingPatterns)
        );
    }
}

mod properties {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::thread;

    fn sample() -> Conjunction {
        conj(vec![
            isa("x", "person"),
            or(vec![
                has("x", "name", "n"),
                and(vec![has("x", "age", "a"), not(isa("a", "old"))]),
            ]),
            or(vec![isa("y", "city"), isa("y", "town")]),
        ])
    }

    #[test]
    fn test_normal_form_has_normal_shape() {
        let conjunction = sample();

        let normal = conjunction.normalise().unwrap();

        assert!(is_normal_form(normal));
        assert_eq!(normal.len(), 4);
    }

    #[test]
    fn test_normalising_a_normal_form_is_identity() {
        // GIVEN
        let normal = sample().normalise().unwrap().clone();

        // WHEN
        let pattern = Pattern::from(normal.clone());
        let again = pattern.normalise().unwrap();

        // THEN
        assert_eq!(again.as_ref(), &normal);
    }

    #[test]
    fn test_repeated_calls_return_the_cached_result() {
        let conjunction = sample();

        let first: *const NormalForm = conjunction.normalise().unwrap();
        let second: *const NormalForm = conjunction.normalise().unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_normalisation_agrees() {
        // GIVEN
        let conjunction = sample();
        let expected = sample().normalise().unwrap().clone();

        // WHEN
        let results: Vec<NormalForm> = thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| conjunction.normalise().unwrap().clone()))
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        // THEN
        for result in results {
            assert_eq!(result, expected);
        }
    }
}
