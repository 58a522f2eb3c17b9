use super::Nfa;

impl Nfa {
    /// Converts the NFA to the [graphviz](https://graphviz.org/docs/layouts/dot/)
    /// dot language format.
    #[allow(unused)]
    pub(crate) fn to_dot(&self) -> String {
        let final_dot = format!(
            "node [shape = doublecircle]; {}",
            self.accept_states
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<String>>()
                .join(" ")
        );

        format!(
            "digraph nfa {{\n\
                \trankdir = LR;\n\
            \n\
                \t// final states\n\
                \t{}\n\
                \tnode [shape = circle]; {};\n\
            \n\
                {}\n\
            }}",
            final_dot,
            self.start_state,
            self.transition_dot()
                .map(|l| format!("\t{}", l))
                .collect::<Vec<String>>()
                .join("\n")
        )
    }

    /// Converts the transitions to the dot format and returns an iterator over it.
    fn transition_dot(&self) -> impl Iterator<Item = String> + '_ {
        self.transitions.iter().flat_map(|(source, by_symbol)| {
            by_symbol.iter().flat_map(move |(symbol, targets)| {
                targets.iter().map(move |target| {
                    format!("{} -> {} [label = \"{}\"];", source, target, symbol)
                })
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::model::{Nfa, StateNamer, Symbol};

    #[test]
    fn dot_output_lists_every_transition() {
        let mut namer = StateNamer::new();
        let nfa = Nfa::atom(Symbol::Char('a'), &mut namer);

        let dot = nfa.to_dot();

        assert!(dot.starts_with("digraph nfa {"));
        assert!(dot.contains("node [shape = doublecircle]; 1"));
        assert!(dot.contains("0 -> 1 [label = \"a\"];"));
    }
}
