//! Tokenizer and parser for fully parenthesized arithmetic expressions.
//!
//! Every binary operation in the input must be wrapped in its own pair of parentheses, so there is
//! no operator precedence to resolve:
//!
//! ```text
//! expr     := number | identifier | '(' expr operator expr ')'
//! operator := '+' | '-' | '*' | '/'
//! ```
//!
//! The parser produces an abstract syntax tree that remembers where each node came from in the
//! source, so that errors can point back at the offending input.
//!
//! ```
//! use symexpr_parser::parser::{ast::Expr, token::op::BinOpKind, Parser};
//!
//! let mut parser = Parser::new("((x*x) + (y*y))");
//! let expr = parser.try_parse_full::<Expr>().unwrap();
//!
//! let Expr::Binary(binary) = expr else { panic!("expected a binary expression") };
//! assert_eq!(binary.op.kind, BinOpKind::Add);
//! assert_eq!(binary.span, 0..15);
//! ```

pub mod parser;
pub mod tokenizer;
