//! Reachability pruning and contiguous renumbering.

use super::Nfa;
use crate::fsm::StateId;
use std::collections::{BTreeMap, BTreeSet};
use std::mem;

impl Nfa {
    /// Discards every state unreachable from the start state and renumbers
    /// the survivors to the contiguous range `0..n`, the start state becoming
    /// `0`. Renumbering follows the original insertion order, so repeated
    /// calls are idempotent.
    pub fn reduce(&mut self) {
        self.prune_unreachable();
        self.renumber();
    }

    fn prune_unreachable(&mut self) {
        let reachable = self.reachable_states();

        self.states.retain(|s| reachable.contains(s));
        self.accept_states.retain(|s| reachable.contains(s));
        self.transitions.retain(|source, by_symbol| {
            if !reachable.contains(source) {
                return false;
            }
            by_symbol.retain(|_, targets| {
                targets.retain(|t| reachable.contains(t));
                !targets.is_empty()
            });
            !by_symbol.is_empty()
        });
    }

    fn renumber(&mut self) {
        let mapping: BTreeMap<StateId, StateId> = self
            .states
            .iter()
            .enumerate()
            .map(|(fresh, &old)| (old, fresh))
            .collect();

        self.states = (0..mapping.len()).collect();
        self.start_state = mapping[&self.start_state];
        self.accept_states = mem::take(&mut self.accept_states)
            .into_iter()
            .map(|s| mapping[&s])
            .collect();
        self.transitions = mem::take(&mut self.transitions)
            .into_iter()
            .map(|(source, by_symbol)| {
                let by_symbol = by_symbol
                    .into_iter()
                    .map(|(symbol, targets)| {
                        (symbol, targets.into_iter().map(|t| mapping[&t]).collect())
                    })
                    .collect();
                (mapping[&source], by_symbol)
            })
            .collect();
    }

    /// Set of states reachable from the start state over any transition.
    fn reachable_states(&self) -> BTreeSet<StateId> {
        let mut reachable = BTreeSet::new();
        let mut stack = vec![self.start_state];

        while let Some(s) = stack.pop() {
            if !reachable.insert(s) {
                continue;
            }

            if let Some(by_symbol) = self.transitions.get(&s) {
                stack.extend(by_symbol.values().flatten().copied());
            }
        }

        reachable
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::{Nfa, StateNamer, Symbol};
    use std::collections::BTreeSet;

    #[test]
    fn unreachable_states_are_pruned() {
        let mut namer = StateNamer::new();
        let mut nfa = Nfa::atom(Symbol::Char('a'), &mut namer);

        // an island of two states not reachable from the start
        let island = namer.allocate_block(2);
        nfa.states.extend(&island);
        nfa.add_transition(island[0], Symbol::Char('b'), island[1]);
        nfa.accept_states.insert(island[1]);

        nfa.reduce();

        assert_eq!(nfa.states, vec![0, 1]);
        assert_eq!(nfa.accept_states, BTreeSet::from([1]));
        assert_eq!(nfa.symbols, BTreeSet::from(['a', 'b']));
        nfa.validate();
    }

    #[test]
    fn renumbering_starts_at_zero() {
        let mut namer = StateNamer::new();
        namer.allocate_block(10);
        let mut nfa = Nfa::atom(Symbol::Char('a'), &mut namer);

        nfa.reduce();

        assert_eq!(nfa.start_state, 0);
        assert_eq!(nfa.states, vec![0, 1]);
        nfa.validate();
    }

    #[test]
    fn reduce_is_idempotent() {
        let mut namer = StateNamer::new();
        let a = Nfa::atom(Symbol::Char('a'), &mut namer);
        let mut nfa = a.kleene_star(&mut namer);
        nfa.remove_epsilon();

        nfa.reduce();
        let once = nfa.clone();
        nfa.reduce();

        assert_eq!(nfa, once);
    }
}
