//! Thompson's construction primitives.
//!
//! Each operation consumes its operand automata and returns the combined
//! one, so a consumed operand can never be used again. Every operation adds
//! at most two states and a constant number of epsilon transitions, keeping
//! the automaton linear in the size of the pattern.

use super::model::{Nfa, StateNamer, Symbol};
use crate::fsm::StateId;
use std::collections::BTreeSet;

impl Nfa {
    /// Combines two automata into one accepting the union of their
    /// languages.
    ///
    /// A fresh start state gets epsilon transitions to both old start
    /// states, and both old accept states get an epsilon transition to a
    /// fresh shared accept state.
    ///
    /// # Panics
    ///
    /// When the operands share a state identifier or either operand does not
    /// have exactly one accept state.
    pub(super) fn alternate(mut self, mut other: Nfa, namer: &mut StateNamer) -> Nfa {
        self.assert_disjoint(&other, "alternation");

        let start = namer.next_id();
        let end = namer.next_id();

        let self_accept = self.take_sole_accept("alternation");
        let other_accept = other.take_sole_accept("alternation");
        let self_start = self.start_state;
        let other_start = other.start_state;

        self.states.insert(0, start);
        self.states.append(&mut other.states);
        self.states.push(end);
        self.transitions.append(&mut other.transitions);
        self.symbols.append(&mut other.symbols);

        self.add_transition(start, Symbol::Eps, self_start);
        self.add_transition(start, Symbol::Eps, other_start);
        self.add_transition(self_accept, Symbol::Eps, end);
        self.add_transition(other_accept, Symbol::Eps, end);

        self.start_state = start;
        self.accept_states.insert(end);
        self
    }

    /// Combines two automata into one accepting the concatenation of their
    /// languages.
    ///
    /// Every transition into the left operand's accept state is rewritten to
    /// target the right operand's start state, and the left accept state is
    /// dropped. Its outgoing transitions, if any, are irrelevant and dropped
    /// with it. No fresh states are needed.
    ///
    /// # Panics
    ///
    /// When the operands share a state identifier or either operand does not
    /// have exactly one accept state.
    pub(super) fn concatenate(mut self, mut other: Nfa) -> Nfa {
        self.assert_disjoint(&other, "concatenation");

        let old_accept = self.take_sole_accept("concatenation");
        let other_accept = other.take_sole_accept("concatenation");
        let middle = other.start_state;

        for targets in self
            .transitions
            .values_mut()
            .flat_map(|by_symbol| by_symbol.values_mut())
        {
            if targets.remove(&old_accept) {
                targets.insert(middle);
            }
        }

        self.states.retain(|&s| s != old_accept);
        self.transitions.remove(&old_accept);
        self.states.append(&mut other.states);
        self.transitions.append(&mut other.transitions);
        self.symbols.append(&mut other.symbols);

        self.accept_states.insert(other_accept);
        self
    }

    /// Turns the automaton into one accepting the Kleene closure of its
    /// language.
    ///
    /// A fresh start state gets epsilon transitions to the old start state
    /// and to a fresh accept state; the old accept state gets the same pair
    /// of epsilon transitions, looping the automaton back on itself.
    ///
    /// # Panics
    ///
    /// When the operand does not have exactly one accept state.
    pub(super) fn kleene_star(mut self, namer: &mut StateNamer) -> Nfa {
        let start = namer.next_id();
        let end = namer.next_id();

        let old_start = self.start_state;
        let old_accept = self.take_sole_accept("kleene star");

        self.states.insert(0, start);
        self.states.push(end);

        self.add_transition(start, Symbol::Eps, old_start);
        self.add_transition(start, Symbol::Eps, end);
        self.add_transition(old_accept, Symbol::Eps, old_start);
        self.add_transition(old_accept, Symbol::Eps, end);

        self.start_state = start;
        self.accept_states.insert(end);
        self
    }

    /// Removes and returns the operand's unique accept state.
    ///
    /// # Panics
    ///
    /// When the accept-state count differs from one; this indicates a bug in
    /// the builder, not malformed user input.
    fn take_sole_accept(&mut self, op: &str) -> StateId {
        assert!(
            self.accept_states.len() == 1,
            "{} operand must have exactly one accept state, found {}",
            op,
            self.accept_states.len()
        );
        self.accept_states.pop_first().expect("sole accept state")
    }

    /// # Panics
    ///
    /// When the operands share a state identifier, which would make the
    /// combined transition relation ambiguous.
    fn assert_disjoint(&self, other: &Nfa, op: &str) {
        let ours: BTreeSet<StateId> = self.states.iter().copied().collect();
        assert!(
            !other.states.iter().any(|s| ours.contains(s)),
            "state identifier collision between {} operands",
            op
        );
    }
}
