use std::{iter::Enumerate, str::Chars};

/// Regex tokenizer.
pub(super) struct Tokenizer<'a> {
    /// Iterator over the characters in the input, along with their position
    /// in the input.
    iter: Enumerate<Chars<'a>>,
}

/// Regex token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) struct Token {
    /// Information about the kind of token along with the value of the token.
    pub(super) kind: TokenKind,
    /// Start and end position of the token in the input text. The end position
    /// is one further than the end of the current token.
    pub(super) pos: (usize, usize),
}

impl Token {
    /// Creates a new [`Token`].
    pub(super) fn new(kind: TokenKind, pos: (usize, usize)) -> Self {
        Self { kind, pos }
    }
}

/// Regex token kind. Every character that is not a metacharacter is a
/// literal match; there are no escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum TokenKind {
    Match(char),
    LeftParen,
    RightParen,
    Star,
    Vertical,
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(pos, ch)| {
            let kind = match ch {
                '(' => TokenKind::LeftParen,
                ')' => TokenKind::RightParen,
                '*' => TokenKind::Star,
                '|' => TokenKind::Vertical,

                a => TokenKind::Match(a),
            };

            Token::new(kind, (pos, pos + 1))
        })
    }
}

impl<'a> Tokenizer<'a> {
    /// Creates a new tokenizer.
    pub(super) fn new(input: &'a str) -> Self {
        Self {
            iter: input.chars().enumerate(),
        }
    }
}
