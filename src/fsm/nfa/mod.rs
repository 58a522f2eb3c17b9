pub use self::{model::Nfa, serial::ReadError, sim::NfaSimulator};

mod compiler;
mod dot;
mod eliminate;
mod model;
mod ops;
mod reduce;
mod serial;
mod sim;

#[cfg(test)]
mod tests;
