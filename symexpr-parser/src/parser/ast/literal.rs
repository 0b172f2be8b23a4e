use crate::{
    parser::{
        error::{kind, Error},
        token::{Name, Num, Sub},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Converts the lexeme of a number token to its value.
fn parse_number(lexeme: &str, span: Range<usize>) -> Result<f64, Error> {
    lexeme
        .parse::<f64>()
        .map_err(|_| Error::new(vec![span], kind::InvalidNumber {
            lexeme: lexeme.to_owned(),
        }))
}

/// A number literal, such as `2`, `3.14`, or `-0.5`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitNum {
    /// The value of the literal.
    pub value: f64,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitNum {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        // a `-` directly in operand position belongs to the number that follows it
        if let Ok(sub) = input.try_parse::<Sub>() {
            let num = input.try_parse::<Num>()?;
            let value = parse_number(num.lexeme.as_str(), num.span.clone())?;
            return Ok(Self {
                value: -value,
                span: sub.span.start..num.span.end,
            });
        }

        let num = input.try_parse::<Num>()?;
        Ok(Self {
            value: parse_number(num.lexeme.as_str(), num.span.clone())?,
            span: num.span,
        })
    }
}

impl fmt::Display for LitNum {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A symbol literal, naming a variable.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LitSym {
    /// The name of the symbol.
    pub name: String,

    /// The region of the source code that this literal was parsed from.
    pub span: Range<usize>,
}

impl Parse for LitSym {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        input
            .try_parse::<Name>()
            .map(|name| Self {
                name: name.lexeme,
                span: name.span,
            })
    }
}

impl fmt::Display for LitSym {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Represents a literal value in the expression language.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Literal {
    /// A number literal.
    Number(LitNum),

    /// A symbol / identifier literal.
    Symbol(LitSym),
}

impl Literal {
    /// Returns the span of the literal.
    pub fn span(&self) -> Range<usize> {
        match self {
            Literal::Number(num) => num.span.clone(),
            Literal::Symbol(name) => name.span.clone(),
        }
    }
}

impl Parse for Literal {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        match input.peek_kind() {
            Some(TokenKind::Name) => input.try_parse().map(Literal::Symbol),
            Some(TokenKind::Num | TokenKind::Sub) => input.try_parse().map(Literal::Number),
            _ => Err(input.unexpected(&[TokenKind::Name, TokenKind::Num])),
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Literal::Number(num) => num.fmt(f),
            Literal::Symbol(name) => name.fmt(f),
        }
    }
}
