/// Whether the parsing of the regex succeeded.
pub type ParseResult<T> = core::result::Result<T, ParseError>;

/// Information about the error occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Start and end position of the offending token, or of the end of the
    /// input when the parser ran out of tokens.
    pub pos: (usize, usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseErrorKind {
    EmptyPattern,
    Term,
    Atom,
    RightParen,
    TrailingInput,
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use ParseErrorKind::*;
        write!(
            f,
            "{}",
            match self {
                EmptyPattern => "expected a non-empty pattern",
                Term => "expected at least one factor in a term",
                Atom => "expected SYMBOL or LEFT_PAREN",
                RightParen => "expected RIGHT_PAREN",
                TrailingInput => "unexpected input after a complete expression",
            }
        )
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "[ERROR] ({}, {}): {}", self.pos.0, self.pos.1, self.kind)
    }
}

impl std::error::Error for ParseError {}
