//! Reads a regular expression from the first line of stdin and writes the
//! equivalent reduced, epsilon-free NFA to stdout in the line-based text
//! format.

use renfa::{Nfa, Parser};
use std::io::BufRead;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut pattern = String::new();
    std::io::stdin().lock().read_line(&mut pattern)?;
    let pattern = pattern.trim_end_matches(['\n', '\r']);

    let mut nfa = Nfa::from(Parser::new(pattern).parse()?);
    nfa.remove_epsilon();
    nfa.reduce();

    print!("{}", nfa);

    Ok(())
}
