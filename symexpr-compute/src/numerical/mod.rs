//! Numerical evaluation of expressions.
//!
//! An expression is evaluated against a [`Ctxt`](ctxt::Ctxt) that binds variable names to
//! numbers. Evaluation fails with a [`SymbolicEvaluationError`](error::SymbolicEvaluationError)
//! if the expression uses a variable the context does not bind, or divides by exactly zero.
//!
//! ```
//! use symexpr_compute::{make_expression, numerical::{ctxt::Ctxt, eval::Eval}};
//!
//! let expr = make_expression("((x*x) + (y*y))").unwrap();
//! let ctxt = Ctxt::from_iter([("x", 2.0), ("y", 3.0)]);
//! assert_eq!(expr.eval(&ctxt).unwrap(), 13.0);
//! ```

pub mod ctxt;
pub mod error;
pub mod eval;
