use crate::{
    parser::{
        ast::expr::Expr,
        error::{kind, Error},
        token::{op::BinOp, CloseParen, OpenParen},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A parenthesized binary expression, such as `(1 + 2)`. The operands can be any expression,
/// including other binary expressions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from, including the
    /// surrounding parentheses.
    pub span: Range<usize>,
}

impl Binary {
    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Parse for Binary {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        let open = input.try_parse::<OpenParen>()?;
        let unclosed = |open: &OpenParen| {
            Error::new(vec![open.span.clone()], kind::UnclosedParenthesis { opening: true })
        };

        input.nested(open.span.clone(), |input| {
            let lhs = input.try_parse::<Expr>()?;

            let op = match input.peek_kind() {
                Some(found) if found.is_operator() => input.try_parse::<BinOp>()?,
                Some(TokenKind::Symbol) => return Err(input.unexpected(&[])),
                Some(found) => return Err(Error::new(
                    vec![lhs.span(), input.span()],
                    kind::ExpectedOperator { found },
                )),
                None => return Err(unclosed(&open)),
            };

            let rhs = input.try_parse::<Expr>()?;

            match input.peek_kind() {
                Some(TokenKind::CloseParen) => (),
                Some(TokenKind::Symbol) => return Err(input.unexpected(&[TokenKind::CloseParen])),
                Some(found) => return Err(Error::new(
                    vec![open.span.clone(), input.span()],
                    kind::ExpectedCloseParen { found },
                )),
                None => return Err(unclosed(&open)),
            }
            let close = input.try_parse::<CloseParen>()?;

            let span = open.span.start..close.span.end;
            debug!(op = %op.kind, ?span, "parsed binary expression");
            Ok(Self {
                lhs: Box::new(lhs),
                op,
                rhs: Box::new(rhs),
                span,
            })
        })
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({} {} {})", self.lhs, self.op.kind, self.rhs)
    }
}
