//! Recursive-descent parser for the regex grammar described in
//! [`crate::regex::ast`].

use super::{
    ast::{Ast, ExprKind},
    tokenizer::{Token, TokenKind, Tokenizer},
};
use std::iter::Peekable;

pub use self::error::{ParseError, ParseErrorKind, ParseResult};

mod error;

/// Regex parser.
pub struct Parser<'a> {
    /// Iterator over the tokens in the input.
    tokens: Peekable<Tokenizer<'a>>,
    /// Length of the input in characters, used to point errors at the end of
    /// the input when the tokens run out.
    len: usize,
}

impl<'a> Parser<'a> {
    /// Creates a new parser for the given pattern.
    pub fn new(input: &'a str) -> Self {
        Self {
            tokens: Tokenizer::new(input).peekable(),
            len: input.chars().count(),
        }
    }

    /// Parses the pattern into an [`Ast`].
    ///
    /// The whole input must form one expression; an empty pattern and
    /// trailing input are both errors.
    pub fn parse(mut self) -> ParseResult<Ast> {
        if self.tokens.peek().is_none() {
            return Err(self.error(ParseErrorKind::EmptyPattern));
        }

        let expr = self.expression()?;

        if self.tokens.peek().is_some() {
            return Err(self.error(ParseErrorKind::TrailingInput));
        }

        Ok(Ast(expr))
    }

    /// `regex := term ('|' term)*`
    ///
    /// Alternation associates to the right; the language does not depend on
    /// the associativity.
    fn expression(&mut self) -> ParseResult<ExprKind> {
        let lhs = self.term()?;

        match self.tokens.peek() {
            Some(Token {
                kind: TokenKind::Vertical,
                ..
            }) => {
                self.tokens.next();
                let rhs = self.expression()?;
                Ok(ExprKind::Alt(Box::new(lhs), Box::new(rhs)))
            }
            _ => Ok(lhs),
        }
    }

    /// `term := factor+`
    fn term(&mut self) -> ParseResult<ExprKind> {
        let mut factors = Vec::new();

        loop {
            match self.tokens.peek() {
                None
                | Some(Token {
                    kind: TokenKind::Vertical | TokenKind::RightParen,
                    ..
                }) => break,
                _ => factors.push(self.factor()?),
            }
        }

        match factors.len() {
            0 => Err(self.error(ParseErrorKind::Term)),
            1 => Ok(factors.pop().expect("a single parsed factor")),
            _ => Ok(ExprKind::Concat(factors)),
        }
    }

    /// `factor := atom '*'?`
    ///
    /// The quantifier does not repeat, so `a**` is a parse error.
    fn factor(&mut self) -> ParseResult<ExprKind> {
        let atom = self.atom()?;

        match self.tokens.peek() {
            Some(Token {
                kind: TokenKind::Star,
                ..
            }) => {
                self.tokens.next();
                Ok(ExprKind::Star(Box::new(atom)))
            }
            _ => Ok(atom),
        }
    }

    /// `atom := SYMBOL | '(' regex ')' | '()'`
    fn atom(&mut self) -> ParseResult<ExprKind> {
        match self.tokens.peek() {
            Some(Token {
                kind: TokenKind::Match(c),
                ..
            }) => {
                let c = *c;
                self.tokens.next();
                Ok(ExprKind::Lit(c))
            }
            Some(Token {
                kind: TokenKind::LeftParen,
                ..
            }) => {
                self.tokens.next();
                self.group()
            }
            _ => Err(self.error(ParseErrorKind::Atom)),
        }
    }

    /// The remainder of a parenthesized atom, after the opening parenthesis
    /// has been consumed. `()` is the empty-string expression.
    fn group(&mut self) -> ParseResult<ExprKind> {
        let expr = match self.tokens.peek() {
            Some(Token {
                kind: TokenKind::RightParen,
                ..
            }) => ExprKind::Empty,
            _ => self.expression()?,
        };

        match self.tokens.next() {
            Some(Token {
                kind: TokenKind::RightParen,
                ..
            }) => Ok(expr),
            _ => Err(self.error(ParseErrorKind::RightParen)),
        }
    }

    fn error(&mut self, kind: ParseErrorKind) -> ParseError {
        let pos = match self.tokens.peek() {
            Some(token) => token.pos,
            None => (self.len.saturating_sub(1), self.len),
        };

        ParseError { kind, pos }
    }
}
