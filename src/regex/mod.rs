pub use self::{
    ast::Ast,
    parser::{ParseError, ParseErrorKind, ParseResult, Parser},
};
pub(crate) use self::ast::ExprKind;

mod ast;
mod parser;
mod tokenizer;
