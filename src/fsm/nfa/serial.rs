//! Text serialization of epsilon-free automata.
//!
//! The format is line oriented. The first line holds the state count, the
//! accept-state count and the total transition count. The second line lists
//! the accept states and may be empty. Then one line per state, in
//! identifier order, holds that state's outgoing transition count followed
//! by its `symbol destination` pairs. States are assumed to be numbered
//! `0..n` with `0` as the start state, the shape [`Nfa::reduce`] produces.

use super::model::Symbol;
use super::Nfa;
use crate::fsm::StateId;
use std::collections::{BTreeMap, BTreeSet};
use std::str::FromStr;

impl std::fmt::Display for Nfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "{} {} {}",
            self.states.len(),
            self.accept_states.len(),
            self.transition_count()
        )?;

        writeln!(
            f,
            "{}",
            self.accept_states
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        )?;

        for state in &self.states {
            let pairs: Vec<String> = self
                .transitions
                .get(state)
                .into_iter()
                .flat_map(|by_symbol| by_symbol.iter())
                .flat_map(|(symbol, targets)| {
                    targets.iter().map(move |t| format!("{} {}", symbol, t))
                })
                .collect();

            if pairs.is_empty() {
                writeln!(f, "0")?;
            } else {
                writeln!(f, "{} {}", pairs.len(), pairs.join(" "))?;
            }
        }

        Ok(())
    }
}

/// Error found while reading a serialized automaton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadError {
    /// The header line is missing or malformed.
    Header,
    /// The accept-state line disagrees with the header.
    Accepts,
    /// The transition line of the given state is malformed.
    Transitions(StateId),
    /// A state identifier outside `0..n` was found.
    StateOutOfRange(StateId),
    /// The per-state transition counts do not add up to the header total.
    CountMismatch { expected: usize, found: usize },
}

impl std::fmt::Display for ReadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let message = match self {
            ReadError::Header => "missing or malformed header line".to_string(),
            ReadError::Accepts => "accept-state line disagrees with the header".to_string(),
            ReadError::Transitions(state) => {
                format!("malformed transition line for state {}", state)
            }
            ReadError::StateOutOfRange(state) => {
                format!("state identifier {} is out of range", state)
            }
            ReadError::CountMismatch { expected, found } => format!(
                "header announces {} transitions but {} were found",
                expected, found
            ),
        };

        writeln!(f, "[ERROR] automaton: {}", message)
    }
}

impl std::error::Error for ReadError {}

impl FromStr for Nfa {
    type Err = ReadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();

        let header: Vec<usize> = lines
            .next()
            .ok_or(ReadError::Header)?
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<_, _>>()
            .map_err(|_| ReadError::Header)?;
        let &[n, a, t] = header.as_slice() else {
            return Err(ReadError::Header);
        };
        if n == 0 {
            // state 0 must exist, as it is the start state
            return Err(ReadError::Header);
        }

        let accept_tokens: Vec<StateId> = lines
            .next()
            .ok_or(ReadError::Accepts)?
            .split_whitespace()
            .map(|token| {
                let state: StateId = token.parse().map_err(|_| ReadError::Accepts)?;
                if state >= n {
                    return Err(ReadError::StateOutOfRange(state));
                }
                Ok(state)
            })
            .collect::<Result<_, _>>()?;
        if accept_tokens.len() != a {
            return Err(ReadError::Accepts);
        }
        let accept_states: BTreeSet<StateId> = accept_tokens.into_iter().collect();

        let mut nfa = Nfa {
            states: (0..n).collect(),
            symbols: BTreeSet::new(),
            transitions: BTreeMap::new(),
            start_state: 0,
            accept_states,
        };

        let mut found = 0;
        for state in 0..n {
            let mut tokens = lines
                .next()
                .ok_or(ReadError::Transitions(state))?
                .split_whitespace();

            let count: usize = tokens
                .next()
                .ok_or(ReadError::Transitions(state))?
                .parse()
                .map_err(|_| ReadError::Transitions(state))?;

            for _ in 0..count {
                let symbol = tokens.next().ok_or(ReadError::Transitions(state))?;
                let mut chars = symbol.chars();
                let (Some(c), None) = (chars.next(), chars.next()) else {
                    return Err(ReadError::Transitions(state));
                };

                let target: StateId = tokens
                    .next()
                    .ok_or(ReadError::Transitions(state))?
                    .parse()
                    .map_err(|_| ReadError::Transitions(state))?;
                if target >= n {
                    return Err(ReadError::StateOutOfRange(target));
                }

                nfa.add_transition(state, Symbol::Char(c), target);
            }

            if tokens.next().is_some() {
                return Err(ReadError::Transitions(state));
            }
            found += count;
        }

        if found != t {
            return Err(ReadError::CountMismatch {
                expected: t,
                found,
            });
        }

        Ok(nfa)
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::{Nfa, Symbol};
    use super::ReadError;
    use std::collections::{BTreeMap, BTreeSet};

    fn chain() -> Nfa {
        // 0 -a-> 1 -b-> 2 -a-> 2, accepting {2}
        let mut nfa = Nfa {
            states: vec![0, 1, 2],
            symbols: BTreeSet::new(),
            transitions: BTreeMap::new(),
            start_state: 0,
            accept_states: BTreeSet::from([2]),
        };
        nfa.add_transition(0, Symbol::Char('a'), 1);
        nfa.add_transition(1, Symbol::Char('b'), 2);
        nfa.add_transition(2, Symbol::Char('a'), 2);
        nfa
    }

    #[test]
    fn display_matches_the_line_format() {
        assert_eq!(chain().to_string(), "3 1 3\n2\n1 a 1\n1 b 2\n1 a 2\n");
    }

    #[test]
    fn display_with_no_accept_states_emits_an_empty_line() {
        let mut nfa = chain();
        nfa.accept_states.clear();

        assert_eq!(nfa.to_string(), "3 0 3\n\n1 a 1\n1 b 2\n1 a 2\n");
    }

    #[test]
    fn round_trip() {
        let nfa = chain();

        assert_eq!(nfa.to_string().parse::<Nfa>(), Ok(nfa));
    }

    #[test]
    fn missing_header_is_rejected() {
        assert_eq!("".parse::<Nfa>(), Err(ReadError::Header));
        assert_eq!("2 1\n1\n".parse::<Nfa>(), Err(ReadError::Header));
    }

    #[test]
    fn zero_states_are_rejected() {
        assert_eq!("0 0 0\n\n".parse::<Nfa>(), Err(ReadError::Header));
    }

    #[test]
    fn accept_count_mismatch_is_rejected() {
        assert_eq!(
            "2 2 1\n1\n1 a 1\n0\n".parse::<Nfa>(),
            Err(ReadError::Accepts)
        );
    }

    #[test]
    fn out_of_range_target_is_rejected() {
        assert_eq!(
            "2 1 1\n1\n1 a 7\n0\n".parse::<Nfa>(),
            Err(ReadError::StateOutOfRange(7))
        );
    }

    #[test]
    fn transition_total_mismatch_is_rejected() {
        assert_eq!(
            "2 1 2\n1\n1 a 1\n0\n".parse::<Nfa>(),
            Err(ReadError::CountMismatch {
                expected: 2,
                found: 1
            })
        );
    }
}
