//! Epsilon-transition elimination.

use super::model::Symbol;
use super::Nfa;
use crate::fsm::StateId;
use std::collections::{BTreeMap, BTreeSet};

impl Nfa {
    /// Removes every epsilon transition while preserving the accepted
    /// language.
    ///
    /// For every state the epsilon closure is computed once. A state becomes
    /// accepting when its closure contains an accept state, and inherits the
    /// non-epsilon transitions of every closure member. A single pass
    /// suffices because the closure is transitive. States are neither added
    /// nor removed; unreachable leftovers are the job of [`Nfa::reduce`].
    pub fn remove_epsilon(&mut self) {
        let closures: BTreeMap<StateId, BTreeSet<StateId>> = self
            .states
            .iter()
            .map(|&state| (state, self.eps_closure(state)))
            .collect();

        for (&state, closure) in &closures {
            if !self.accept_states.contains(&state)
                && closure.iter().any(|s| self.accept_states.contains(s))
            {
                self.accept_states.insert(state);
            }
        }

        let mut inherited: Vec<(StateId, Symbol, BTreeSet<StateId>)> = Vec::new();
        for (&state, closure) in &closures {
            for member in closure.iter().filter(|&&member| member != state) {
                let Some(by_symbol) = self.transitions.get(member) else {
                    continue;
                };
                for (&symbol, targets) in by_symbol {
                    if symbol != Symbol::Eps {
                        inherited.push((state, symbol, targets.clone()));
                    }
                }
            }
        }

        for (state, symbol, targets) in inherited {
            self.transitions
                .entry(state)
                .or_default()
                .entry(symbol)
                .or_default()
                .extend(targets);
        }

        self.transitions.retain(|_, by_symbol| {
            by_symbol.remove(&Symbol::Eps);
            !by_symbol.is_empty()
        });
    }

    /// Set of states reachable from `state` over epsilon transitions alone,
    /// including `state` itself. Terminates on epsilon cycles because every
    /// state enters the closure at most once.
    fn eps_closure(&self, state: StateId) -> BTreeSet<StateId> {
        let mut closure = BTreeSet::new();
        let mut stack = vec![state];

        while let Some(s) = stack.pop() {
            if !closure.insert(s) {
                continue;
            }

            if let Some(targets) = self
                .transitions
                .get(&s)
                .and_then(|by_symbol| by_symbol.get(&Symbol::Eps))
            {
                stack.extend(targets.iter().copied());
            }
        }

        closure
    }
}
