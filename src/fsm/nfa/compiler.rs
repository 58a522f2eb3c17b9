//! Compilation of a regular-expression syntax tree into an epsilon-NFA using
//! [Thompson's construction](https://en.wikipedia.org/wiki/Thompson%27s_construction).

use super::model::{Nfa, StateNamer, Symbol};
use crate::regex::{Ast, ExprKind};

/// Compiles a regex [`Ast`] into an epsilon-NFA. Owns the state namer, so
/// every sub-automaton built during one compilation gets disjoint state
/// identifiers.
pub(crate) struct Compiler {
    namer: StateNamer,
}

impl From<Ast> for Nfa {
    fn from(value: Ast) -> Self {
        Compiler::new().compile(&value)
    }
}

impl Compiler {
    pub(crate) fn new() -> Self {
        Self {
            namer: StateNamer::new(),
        }
    }

    pub(crate) fn compile(mut self, ast: &Ast) -> Nfa {
        let nfa = self.expr(&ast.0);
        nfa.validate();
        nfa
    }

    fn expr(&mut self, kind: &ExprKind) -> Nfa {
        match kind {
            ExprKind::Empty => Nfa::atom(Symbol::Eps, &mut self.namer),
            ExprKind::Lit(c) => Nfa::atom(Symbol::Char(*c), &mut self.namer),
            ExprKind::Star(operand) => {
                let operand = self.expr(operand);
                operand.kleene_star(&mut self.namer)
            }
            ExprKind::Concat(exprs) => exprs
                .iter()
                .map(|e| self.expr(e))
                .reduce(|lhs, rhs| lhs.concatenate(rhs))
                .expect("concatenation of at least one expression"),
            ExprKind::Alt(lhs, rhs) => {
                let lhs = self.expr(lhs);
                let rhs = self.expr(rhs);
                lhs.alternate(rhs, &mut self.namer)
            }
        }
    }
}
