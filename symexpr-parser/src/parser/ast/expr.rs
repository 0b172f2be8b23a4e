use crate::{
    parser::{
        ast::{binary::Binary, literal::Literal},
        error::Error,
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents any kind of expression in the language.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A parenthesized binary operation, such as `(1 + 2)`.
    Binary(Binary),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Binary(binary) => binary.span(),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        match input.peek_kind() {
            Some(TokenKind::OpenParen) => input.try_parse().map(Expr::Binary),
            Some(TokenKind::Name | TokenKind::Num | TokenKind::Sub) => input.try_parse().map(Expr::Literal),
            _ => Err(input.unexpected(&[TokenKind::OpenParen, TokenKind::Name, TokenKind::Num])),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
        }
    }
}
