use super::super::traits::Simulate;
use super::model::Symbol;
use super::Nfa;
use crate::fsm::StateId;
use std::collections::BTreeSet;

/// Frontier simulator for an epsilon-free [`Nfa`].
///
/// The frontier holds every state the automaton could be in after the input
/// consumed so far. An empty frontier is a dead end: no later input can
/// revive it, so every further verdict is `N`.
pub struct NfaSimulator<'a> {
    /// Nfa we are simulating.
    nfa: &'a Nfa,
    /// The set of states the automaton could currently be in.
    current_states: BTreeSet<StateId>,
}

impl<'a> NfaSimulator<'a> {
    pub fn new(nfa: &'a Nfa) -> Self {
        debug_assert!(!nfa.has_epsilon(), "simulated automata must be epsilon-free");

        Self {
            nfa,
            current_states: BTreeSet::from([nfa.start_state]),
        }
    }
}

impl Simulate for NfaSimulator<'_> {
    fn is_accepting(&self) -> bool {
        self.current_states
            .iter()
            .any(|s| self.nfa.accept_states.contains(s))
    }

    fn feed(&mut self, input: char) -> bool {
        let next_states = self
            .current_states
            .iter()
            .filter_map(|s| {
                self.nfa
                    .transitions
                    .get(s)
                    .and_then(|by_symbol| by_symbol.get(&Symbol::Char(input)))
            })
            .flatten()
            .copied()
            .collect();
        self.current_states = next_states;

        self.is_accepting()
    }
}
