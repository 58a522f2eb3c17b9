//! Syntax tree for the regex grammar:
//!
//! ```ebnf
//! regex  := term ('|' term)*
//! term   := factor+
//! factor := atom '*'?
//! atom   := SYMBOL | '(' regex ')' | '()'
//! ```
//!
//! `'()'` denotes the expression matching only the empty string.

/// Root of a parsed regular expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ast(pub(crate) ExprKind);

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ExprKind {
    /// Concatenation of two or more expressions, in order.
    Concat(Vec<ExprKind>),
    /// The expression matching only the empty string, written `()`.
    Empty,
    /// Alternation of two expressions.
    Alt(Box<ExprKind>, Box<ExprKind>),
    /// Kleene star of an expression.
    Star(Box<ExprKind>),
    /// A single literal symbol.
    Lit(char),
}
