//! Symbolic manipulation of expressions.
//!
//! # Expression representation
//!
//! Expressions in this module are represented as a tree of [`Expr`] nodes: numbers, variables,
//! and binary operations. It's similar to the
//! [`symexpr_parser::parser::ast::Expr`] nodes produced by [`symexpr_parser`], without the span
//! information, so it is cheap to compare and rebuild.
//!
//! If you have a [`symexpr_parser::parser::ast::Expr`], you can convert it to an [`Expr`] using
//! the [`From`] trait:
//!
//! ```
//! use symexpr_compute::symbolic::expr::{add, mul, Expr};
//! use symexpr_parser::parser::{ast::Expr as AstExpr, Parser};
//!
//! let mut parser = Parser::new("((x*x) + (y*y))");
//! let ast_expr = parser.try_parse_full::<AstExpr>().unwrap();
//!
//! let expr: Expr = ast_expr.into();
//! assert_eq!(expr, add(mul("x", "x"), mul("y", "y")));
//! ```
//!
//! # Differentiation and simplification
//!
//! [`derivative()`] differentiates an expression with respect to a variable, and [`simplify()`]
//! cleans up the result with a fixed set of local rewrite rules. The two are kept separate; the
//! derivative is never simplified automatically.
//!
//! ```
//! use symexpr_compute::symbolic::{derivative, expr::{add, mul}, simplify};
//!
//! let expr = add(mul("x", "x"), "y");
//! assert_eq!(simplify(&derivative(&expr, "x")), add("x", "x"));
//! ```
//!
//! For more information, see the [`mod@simplify`] module.

pub mod derivative;
pub mod expr;
pub mod simplify;
pub mod step_collector;

pub use derivative::derivative;
pub use expr::Expr;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
