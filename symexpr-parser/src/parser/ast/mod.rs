//! The abstract syntax tree produced by the parser.
//!
//! Every node keeps the span of source code it was parsed from, so that later stages can point
//! back at the input when something goes wrong.

pub mod binary;
pub mod expr;
pub mod literal;

pub use binary::Binary;
pub use expr::Expr;
pub use literal::{Literal, LitNum, LitSym};
