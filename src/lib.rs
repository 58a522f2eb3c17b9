//! Regex to NFA compiler and simulator.
//!
//! A pattern is parsed into an [`Ast`], compiled into an epsilon-NFA with
//! Thompson's construction, stripped of its epsilon transitions, reduced to
//! its reachable states and serialized to a compact text form. A serialized
//! automaton can be read back and simulated against an input string,
//! producing one `Y`/`N` verdict per consumed character.

pub use fsm::{Nfa, NfaSimulator, ReadError, Simulate, StateId};
pub use regex::{Ast, ParseError, ParseErrorKind, ParseResult, Parser};

mod fsm;
mod regex;
