mod proptest;

use super::super::traits::Simulate;
use super::{Nfa, NfaSimulator};
use crate::regex::Parser;

/// Full pipeline: parse, compile, eliminate epsilon, reduce.
fn build(pattern: &str) -> Nfa {
    let mut nfa = Nfa::from(Parser::new(pattern).parse().unwrap());
    nfa.remove_epsilon();
    nfa.reduce();
    nfa
}

fn accepts(nfa: &Nfa, input: &str) -> bool {
    NfaSimulator::new(nfa).run(input)
}

#[test]
fn literal_serializes_to_the_expected_text() {
    assert_eq!(build("a").to_string(), "2 1 1\n1\n1 a 1\n0\n");
}

#[test]
fn alternation_accepts_either_branch() {
    let nfa = build("a|b");

    assert!(accepts(&nfa, "a"));
    assert!(accepts(&nfa, "b"));
    assert!(!accepts(&nfa, ""));
    assert!(!accepts(&nfa, "ab"));
}

#[test]
fn star_accepts_any_repetition() {
    let nfa = build("a*");

    assert!(accepts(&nfa, ""));
    assert!(accepts(&nfa, "a"));
    assert!(accepts(&nfa, "aaaa"));
    assert!(!accepts(&nfa, "b"));
    assert!(!accepts(&nfa, "ab"));
}

#[test]
fn star_of_alternation() {
    let nfa = build("(a|b)*c");

    assert!(accepts(&nfa, "c"));
    assert!(accepts(&nfa, "abbac"));
    assert!(!accepts(&nfa, "abba"));
    assert!(!accepts(&nfa, "cc"));
}

#[test]
fn empty_group_accepts_only_the_empty_string() {
    let nfa = build("()");

    assert!(accepts(&nfa, ""));
    assert!(!accepts(&nfa, "a"));
}

#[test]
fn concatenation_is_semantically_associative() {
    let left = build("(ab)c");
    let right = build("a(bc)");

    for input in ["abc", "", "ab", "abcc", "acb"] {
        assert_eq!(accepts(&left, input), accepts(&right, input), "{:?}", input);
    }
}

#[test]
fn pipeline_output_is_deterministic() {
    assert_eq!(build("(a|b)*abb").to_string(), build("(a|b)*abb").to_string());
}

#[test]
fn reduced_states_form_a_contiguous_range() {
    let nfa = build("(a|b)*abb");

    assert_eq!(nfa.states, Vec::from_iter(0..nfa.states.len()));
    assert_eq!(nfa.start_state, 0);
    nfa.validate();
}

#[test]
fn trace_reports_every_accepted_prefix() {
    let nfa = build("(a|b)*abb");

    assert_eq!(NfaSimulator::new(&nfa).trace("abbaabb"), "NNYNNNY");
}

#[test]
fn serialized_pipeline_output_round_trips() {
    let nfa = build("(a|b)*abb");
    let read: Nfa = nfa.to_string().parse().unwrap();

    assert_eq!(read, nfa);
    assert!(accepts(&read, "aababb"));
    assert!(!accepts(&read, "aabab"));
}
