pub use self::{
    nfa::{Nfa, NfaSimulator, ReadError},
    traits::Simulate,
};

/// Identifier of a single automaton state.
pub type StateId = usize;

mod nfa;
mod traits;
