use crate::fsm::StateId;
use std::collections::{BTreeMap, BTreeSet};

/// Label of a single transition: either a character of the user-facing
/// alphabet or the reserved epsilon sentinel. Epsilon never enters the
/// alphabet of an automaton, so a user symbol cannot collide with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) enum Symbol {
    Char(char),
    Eps,
}

/// Transition relation: source state to label to set of destination states.
/// A state absent from the outer map has no outgoing transitions.
pub(super) type Transitions = BTreeMap<StateId, BTreeMap<Symbol, BTreeSet<StateId>>>;

/// Nondeterministic finite automaton.
///
/// During Thompson's construction every intermediate automaton has exactly
/// one accept state; hand-built or deserialized automata may have any number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nfa {
    /// Distinct state identifiers in insertion order. The order decides the
    /// contiguous renumbering performed by [`Nfa::reduce`].
    pub(super) states: Vec<StateId>,
    /// The user-facing alphabet.
    pub(super) symbols: BTreeSet<char>,
    pub(super) transitions: Transitions,
    pub(super) start_state: StateId,
    pub(super) accept_states: BTreeSet<StateId>,
}

/// Source of globally unique state identifiers for one automaton build.
///
/// Identifiers are strictly increasing and never reused, which guarantees
/// that automata built from the same namer have disjoint state sets, the
/// precondition of every structural operation. Each concurrent build must
/// own its own namer.
pub(crate) struct StateNamer {
    next: StateId,
}

impl StateNamer {
    pub(crate) fn new() -> Self {
        Self { next: 0 }
    }

    /// Returns a fresh identifier strictly greater than any issued before.
    pub(super) fn next_id(&mut self) -> StateId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Returns `n` fresh identifiers in increasing order.
    pub(super) fn allocate_block(&mut self, n: usize) -> Vec<StateId> {
        (0..n).map(|_| self.next_id()).collect()
    }
}

impl Nfa {
    /// Creates the atomic two-state automaton accepting exactly the given
    /// symbol (or the empty string, for [`Symbol::Eps`]).
    pub(super) fn atom(symbol: Symbol, namer: &mut StateNamer) -> Self {
        let ids = namer.allocate_block(2);
        let (start, accept) = (ids[0], ids[1]);

        let mut nfa = Self {
            states: vec![start, accept],
            symbols: BTreeSet::new(),
            transitions: Transitions::new(),
            start_state: start,
            accept_states: BTreeSet::from([accept]),
        };
        nfa.add_transition(start, symbol, accept);
        nfa
    }

    /// Adds a transition, extending the alphabet when the label is a
    /// character.
    pub(super) fn add_transition(&mut self, source: StateId, symbol: Symbol, target: StateId) {
        if let Symbol::Char(c) = symbol {
            self.symbols.insert(c);
        }

        self.transitions
            .entry(source)
            .or_default()
            .entry(symbol)
            .or_default()
            .insert(target);
    }

    /// Returns whether any epsilon transition remains in the automaton.
    pub(super) fn has_epsilon(&self) -> bool {
        self.transitions
            .values()
            .any(|by_symbol| by_symbol.contains_key(&Symbol::Eps))
    }

    /// Total number of transition instances, counting every
    /// `(state, symbol, destination)` triple separately.
    pub(super) fn transition_count(&self) -> usize {
        self.transitions
            .values()
            .flat_map(|by_symbol| by_symbol.values())
            .map(BTreeSet::len)
            .sum()
    }

    /// Checks the structural invariants of the automaton: distinct state
    /// identifiers, and every transition endpoint, the start state and every
    /// accept state being members of the state set.
    ///
    /// # Panics
    ///
    /// When an invariant is violated.
    pub(crate) fn validate(&self) {
        let states: BTreeSet<StateId> = self.states.iter().copied().collect();

        assert!(
            states.len() == self.states.len(),
            "state identifiers are not distinct"
        );
        assert!(
            states.contains(&self.start_state),
            "start state is not a valid state"
        );
        assert!(
            self.accept_states.is_subset(&states),
            "one or more accept states found that do not exist"
        );

        for (source, by_symbol) in &self.transitions {
            assert!(
                states.contains(source),
                "transition source state does not exist"
            );
            for targets in by_symbol.values() {
                assert!(
                    targets.is_subset(&states),
                    "one or more destination states found that do not exist"
                );
            }
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{}", c),
            Symbol::Eps => write!(f, "ε"),
        }
    }
}
