//! Reads an input string from the first line of stdin, followed by an NFA in
//! the line-based text format, and writes the per-prefix `Y`/`N` verdict
//! string to stdout.

use renfa::{Nfa, NfaSimulator, Simulate};
use std::io::Read;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin().lock().read_to_string(&mut input)?;

    let (string, serialized) = input
        .split_once('\n')
        .ok_or("expected an input string followed by an automaton")?;
    let string = string.trim_end_matches('\r');

    let nfa: Nfa = serialized.parse()?;

    println!("{}", NfaSimulator::new(&nfa).trace(string));

    Ok(())
}
