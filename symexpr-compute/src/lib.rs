//! Evaluation, differentiation, and simplification of symbolic arithmetic expressions.
//!
//! An expression is a tree of numbers, variables, and the four binary operations `+`, `-`, `*`,
//! and `/`. Trees are built from fully parenthesized text with [`make_expression`], or directly
//! with the constructors in [`symbolic::expr`]:
//!
//! ```
//! use symexpr_compute::{make_expression, Ctxt, symbolic::expr::{add, mul, var}};
//!
//! let expr = make_expression("((x*x) + (y*y))").unwrap();
//! assert_eq!(expr, add(mul("x", "x"), mul("y", "y")));
//!
//! // evaluate with bindings
//! let ctxt = Ctxt::from_iter([("x", 2.0), ("y", 3.0)]);
//! assert_eq!(expr.evaluate(&ctxt).unwrap(), 13.0);
//!
//! // differentiate, then simplify the result
//! assert_eq!(expr.deriv("x").simplify(), add("x", "x"));
//!
//! // simplify with local rewrite rules
//! assert_eq!(make_expression("(0 + x)").unwrap().simplify(), var("x"));
//! ```
//!
//! # Features
//!
//! - `serde`: Derives `Serialize` and `Deserialize` for [`Expr`], [`Ctxt`], and the simplification
//!   steps.

pub mod numerical;
pub mod symbolic;

pub use numerical::{ctxt::Ctxt, error::SymbolicEvaluationError, eval::Eval};
pub use symbolic::{
    derivative,
    expr::{add, div, mul, num, sub, var, Expr},
    simplify,
};

use std::str::FromStr;
use symexpr_parser::parser::{ast::Expr as AstExpr, Parser};

/// The error returned when text cannot be parsed into an [`Expr`].
///
/// It records the regions of the input that caused the error, and its kind can be inspected with
/// [`Error::is`](symexpr_error::Error::is) against the kinds in
/// [`symexpr_parser::parser::error::kind`].
pub type ParseError = symexpr_error::Error;

/// Parses a fully parenthesized expression, such as `((x*x) + (y*y))`, into an [`Expr`].
///
/// Every binary operation must be wrapped in its own pair of parentheses, and whitespace between
/// tokens is ignored. The resulting tree is exactly the one written down; nothing is simplified or
/// evaluated.
///
/// Returns a [`ParseError`] if the text is empty, contains a character that is not part of the
/// language, has unbalanced parentheses, or is missing an operator or closing parenthesis.
pub fn make_expression(text: &str) -> Result<Expr, ParseError> {
    let ast = Parser::new(text).try_parse_full::<AstExpr>()?;
    Ok(ast.into())
}

impl FromStr for Expr {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        make_expression(s)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use symexpr_parser::parser::error::kind;
    use super::*;

    #[test]
    fn scenario_evaluate() {
        let expr = make_expression("((x*x) + (y*y))").unwrap();
        let ctxt = Ctxt::from_iter([("x", 2.0), ("y", 3.0)]);
        assert_eq!(expr.evaluate(&ctxt).unwrap(), 13.0);
    }

    #[test]
    fn scenario_simplify() {
        assert_eq!(make_expression("(0 + x)").unwrap().simplify(), var("x"));
    }

    #[test]
    fn scenario_division_by_zero() {
        let expr = make_expression("(x/y)").unwrap();
        let ctxt = Ctxt::from_iter([("x", 4.0), ("y", 0.0)]);
        assert_eq!(expr.evaluate(&ctxt), Err(SymbolicEvaluationError::DivisionByZero));
    }

    #[test]
    fn scenario_derivative() {
        let expr = add(mul(var("x"), var("x")), var("y"));
        assert_eq!(simplify(&derivative(&expr, "x")), add("x", "x"));
    }

    #[rstest]
    #[case("7", num(7.0))]
    #[case("-0.5", num(-0.5))]
    #[case("alpha", var("alpha"))]
    #[case("(a - b)", sub("a", "b"))]
    #[case("((a - b) / (c * 2))", div(sub("a", "b"), mul("c", 2)))]
    #[case("(1 + (2 + (3 + x)))", add(1, add(2, add(3, "x"))))]
    #[case(" ( x\t/\n0 ) ", div("x", 0))]
    fn well_formed(#[case] input: &str, #[case] expected: Expr) {
        assert_eq!(make_expression(input).unwrap(), expected);
        assert_eq!(input.parse::<Expr>().unwrap(), expected);
    }

    #[rstest]
    #[case("(x+")]
    #[case("")]
    #[case("(x#y)")]
    #[case("(x + y")]
    #[case("x + y")]
    #[case("(x + y + z)")]
    #[case("(x y)")]
    #[case("())")]
    fn malformed(#[case] input: &str) {
        assert!(make_expression(input).is_err());
    }

    #[test]
    fn parse_error_kinds() {
        assert!(make_expression("").unwrap_err().is::<kind::EmptyExpression>());
        assert!(make_expression("(x#y)").unwrap_err().is::<kind::UnrecognizedToken>());
        assert!(make_expression("(x + y").unwrap_err().is::<kind::UnclosedParenthesis>());
        assert!(make_expression("(x y)").unwrap_err().is::<kind::ExpectedOperator>());
    }

    #[test]
    fn parenthesized_round_trip() {
        let expr = div(sub(mul(1.5, "x"), mul("x", -2)), add("y", 0.25));
        assert_eq!(make_expression(&expr.to_parenthesized()).unwrap(), expr);
    }
}
