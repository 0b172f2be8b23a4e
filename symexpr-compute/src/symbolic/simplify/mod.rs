//! Simplification of expressions by local rewrite rules.
//!
//! [`simplify`] makes a single post-order pass over the expression: the operands of a node are
//! simplified first, then the first rule in [`rules`] that matches the node is applied to it. The
//! rules are:
//!
//! 1. Constant folding: an operation on two numbers is replaced by its result. Division is only
//!    folded when the divisor is not zero, so simplification never fails.
//! 2. Identities: `a+0 = 0+a = a`, `a-0 = a`, `a*0 = 0*a = 0`, `a*1 = 1*a = a`, `a/1 = a`.
//!
//! Nodes that no rule matches are kept, with their simplified operands. No further algebra is
//! done; in particular like terms are not combined, so `x + x` stays as it is.
//!
//! Because every rule either produces a number or hands back one of the already simplified
//! operands, the output of [`simplify`] is left unchanged by simplifying it again.
//!
//! ```
//! use symexpr_compute::{make_expression, symbolic::{expr::var, simplify}};
//!
//! let expr = make_expression("(0 + x)").unwrap();
//! assert_eq!(simplify(&expr), var("x"));
//! ```

pub mod rules;
pub mod step;

use step::Step;
use super::{expr::Expr, step_collector::StepCollector};

/// Simplifies the given expression.
pub fn simplify(expr: &Expr) -> Expr {
    simplify_with(expr, &mut ())
}

/// Simplifies the given expression, collecting the applied rules into the given step collector in
/// the order they were applied.
pub fn simplify_with(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Expr {
    match expr {
        Expr::Num(_) | Expr::Var(_) => expr.clone(),
        Expr::BinOp(op, lhs, rhs) => {
            let node = Expr::BinOp(
                *op,
                Box::new(simplify_with(lhs, step_collector)),
                Box::new(simplify_with(rhs, step_collector)),
            );
            rules::all(&node, step_collector).unwrap_or(node)
        },
    }
}

/// Simplifies the given expression, returning the simplified expression and the steps taken to
/// simplify it.
pub fn simplify_with_steps(expr: &Expr) -> (Expr, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = simplify_with(expr, &mut steps);
    (simplified, steps)
}

impl Expr {
    /// Simplifies the expression. See [`simplify`] for more information.
    pub fn simplify(&self) -> Expr {
        simplify(self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use crate::{
        make_expression,
        symbolic::expr::{add, div, mul, num, sub, var},
    };
    use super::*;

    #[rstest]
    #[case(add(2, 3), num(5.0))]
    #[case(sub(2, 3), num(-1.0))]
    #[case(mul(2.5, 4), num(10.0))]
    #[case(div(1, 4), num(0.25))]
    #[case(add("x", 0), var("x"))]
    #[case(add(0, "x"), var("x"))]
    #[case(sub("x", 0), var("x"))]
    #[case(mul("x", 0), num(0.0))]
    #[case(mul(0, "x"), num(0.0))]
    #[case(mul("x", 1), var("x"))]
    #[case(mul(1, "x"), var("x"))]
    #[case(div("x", 1), var("x"))]
    fn single_rule(#[case] expr: Expr, #[case] expected: Expr) {
        assert_eq!(simplify(&expr), expected);
    }

    #[rstest]
    #[case(sub(0, "x"))]
    #[case(div(1, "x"))]
    #[case(div(0, "x"))]
    #[case(add("x", "x"))]
    #[case(div("x", 0))]
    #[case(div(1, 0))]
    fn irreducible(#[case] expr: Expr) {
        assert_eq!(simplify(&expr), expr);
    }

    #[test]
    fn zero_plus_x() {
        let expr = make_expression("(0 + x)").unwrap();
        assert_eq!(expr.simplify(), var("x"));
    }

    #[test]
    fn operands_first() {
        // (x*1) + (2*3) -> x + 6
        assert_eq!(simplify(&add(mul("x", 1), mul(2, 3))), add("x", 6));

        // ((y-0) * (1+0)) / (4-3) -> y
        assert_eq!(simplify(&div(mul(sub("y", 0), add(1, 0)), sub(4, 3))), var("y"));

        // (x*0) + (0*y) -> 0
        assert_eq!(simplify(&add(mul("x", 0), mul(0, "y"))), num(0.0));
    }

    #[test]
    fn divisor_folding_to_zero_is_kept() {
        assert_eq!(simplify(&div("x", sub(2, 2))), div("x", 0));
        assert_eq!(simplify(&div(3, mul("y", 0))), div(3, 0));
    }

    #[test]
    fn steps_in_application_order() {
        let (simplified, steps) = simplify_with_steps(&add(mul("x", 1), sub(mul(2, 3), 0)));
        assert_eq!(simplified, add("x", 6));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::ConstantFold, Step::ConstantFold]);

        let (simplified, steps) = simplify_with_steps(&sub(mul("y", 1), 0));
        assert_eq!(simplified, var("y"));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::SubtractZero]);

        let (_, steps) = simplify_with_steps(&add("x", "y"));
        assert!(steps.is_empty());
    }

    #[rstest]
    #[case(add(mul("x", 1), mul(2, 3)))]
    #[case(div(sub(mul(0, "x"), mul(1, 1)), mul("x", "x")))]
    #[case(mul(add(0, div("x", 1)), sub(add(1, 1), 2)))]
    #[case(div(add(1, 2), sub(mul("a", 0), 0)))]
    #[case(add(mul(add(mul(1, "x"), mul("x", 1)), 0), sub("y", mul(0, "z"))))]
    fn idempotent(#[case] expr: Expr) {
        let once = simplify(&expr);
        assert_eq!(simplify(&once), once);
    }

    #[test]
    fn input_is_untouched() {
        let expr = add(0, "x");
        let before = expr.clone();
        let _ = simplify(&expr);
        assert_eq!(expr, before);
    }
}
