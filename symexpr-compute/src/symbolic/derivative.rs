//! Symbolic differentiation.
//!
//! The derivative is built by structural recursion over the expression, applying the sum,
//! difference, product, and quotient rules. The result is **not** simplified, and usually
//! contains many trivial terms such as `1 * x` or `x * 0`. Pass it through
//! [`simplify`](crate::symbolic::simplify()) to clean it up.
//!
//! ```
//! use symexpr_compute::symbolic::{derivative, expr::{add, mul}, simplify};
//!
//! // d/dx (x*x + y) = 1*x + x*1 + 0
//! let expr = add(mul("x", "x"), "y");
//! let deriv = derivative(&expr, "x");
//! assert_eq!(deriv, add(add(mul(1, "x"), mul("x", 1)), 0));
//! assert_eq!(simplify(&deriv), add("x", "x"));
//! ```

use symexpr_parser::parser::token::op::BinOpKind;
use super::expr::{add, div, mul, sub, Expr};

/// Returns the derivative of the expression with respect to the variable `var`. Every other
/// variable is treated as a constant.
pub fn derivative(expr: &Expr, var: &str) -> Expr {
    match expr {
        Expr::Num(_) => Expr::Num(0.0),
        Expr::Var(name) => Expr::Num(if name == var { 1.0 } else { 0.0 }),
        Expr::BinOp(op, lhs, rhs) => {
            let lhs_deriv = derivative(lhs, var);
            let rhs_deriv = derivative(rhs, var);
            match op {
                BinOpKind::Add => add(lhs_deriv, rhs_deriv),
                BinOpKind::Sub => sub(lhs_deriv, rhs_deriv),
                // (f*g)' = f'*g + f*g'
                BinOpKind::Mul => add(
                    mul(lhs_deriv, (**rhs).clone()),
                    mul((**lhs).clone(), rhs_deriv),
                ),
                // (f/g)' = (f'*g - f*g') / (g*g)
                BinOpKind::Div => div(
                    sub(mul(lhs_deriv, (**rhs).clone()), mul((**lhs).clone(), rhs_deriv)),
                    mul((**rhs).clone(), (**rhs).clone()),
                ),
            }
        },
    }
}

impl Expr {
    /// Returns the derivative of the expression with respect to the variable `name`, without
    /// simplifying it.
    ///
    /// See [`derivative`] for more information.
    pub fn deriv(&self, name: &str) -> Expr {
        derivative(self, name)
    }
}
