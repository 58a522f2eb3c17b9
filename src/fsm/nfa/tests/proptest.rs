use super::super::{Nfa, NfaSimulator};
use crate::fsm::Simulate;
use crate::regex::{Ast, ExprKind};
use proptest::{collection, prelude::*};

/// Naive reference matcher, exponential but obviously correct on the small
/// expressions and inputs generated below.
fn matches(expr: &ExprKind, input: &str) -> bool {
    use ExprKind::*;
    match expr {
        Lit(c) => {
            let mut chars = input.chars();
            chars.next() == Some(*c) && chars.next().is_none()
        }
        Empty => input.is_empty(),
        Alt(lhs, rhs) => matches(lhs, input) || matches(rhs, input),
        Star(inner) => {
            input.is_empty()
                || (1..=input.len())
                    .filter(|&i| input.is_char_boundary(i))
                    .any(|i| matches(inner, &input[..i]) && matches(expr, &input[i..]))
        }
        Concat(exprs) => match exprs.split_first() {
            None => input.is_empty(),
            Some((first, rest)) => (0..=input.len())
                .filter(|&i| input.is_char_boundary(i))
                .any(|i| {
                    matches(first, &input[..i]) && matches(&Concat(rest.to_vec()), &input[i..])
                }),
        },
    }
}

fn arb_expression() -> impl Strategy<Value = ExprKind> {
    let leaf = prop_oneof![
        proptest::char::range('a', 'c').prop_map(ExprKind::Lit),
        Just(ExprKind::Empty)
    ];

    leaf.prop_recursive(5, 24, 3, |inner| {
        prop_oneof![
            inner.clone().prop_map(|e| ExprKind::Star(Box::new(e))),
            collection::vec(inner.clone(), 2..=3).prop_map(ExprKind::Concat),
            (inner.clone(), inner)
                .prop_map(|(lhs, rhs)| ExprKind::Alt(Box::new(lhs), Box::new(rhs))),
        ]
    })
}

fn build(expr: &ExprKind) -> Nfa {
    let mut nfa = Nfa::from(Ast(expr.clone()));
    nfa.remove_epsilon();
    nfa.reduce();
    nfa
}

proptest! {
    #[test]
    #[ignore = "proptests should be run explicitly"]
    fn pipeline_agrees_with_the_reference_matcher(
        expr in arb_expression(),
        input in "[abc]{0,5}",
    ) {
        let nfa = build(&expr);

        prop_assert_eq!(
            NfaSimulator::new(&nfa).run(&input),
            matches(&expr, &input),
            "pattern: {:?}, input: {:?}",
            expr,
            input
        );
    }

    #[test]
    #[ignore = "proptests should be run explicitly"]
    fn elimination_preserves_the_language(
        expr in arb_expression(),
        input in "[abc]{0,5}",
    ) {
        let with_eps = Nfa::from(Ast(expr.clone()));
        let mut without_eps = with_eps.clone();
        without_eps.remove_epsilon();
        without_eps.reduce();

        prop_assert!(!without_eps.has_epsilon());
        prop_assert_eq!(
            NfaSimulator::new(&without_eps).run(&input),
            matches(&expr, &input)
        );
    }

    #[test]
    #[ignore = "proptests should be run explicitly"]
    fn reduced_automata_survive_a_serialization_round_trip(expr in arb_expression()) {
        let nfa = build(&expr);
        let read: Nfa = nfa.to_string().parse().expect("serialized automaton");

        prop_assert_eq!(read, nfa);
    }
}
