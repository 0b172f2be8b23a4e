//! Operator overloads for building expressions with ordinary arithmetic syntax.
//!
//! ```
//! use symexpr_compute::symbolic::expr::{add, mul, sub, var};
//!
//! let x = var("x");
//! assert_eq!(x.clone() * x.clone() + 1.0, add(mul("x", "x"), 1));
//! assert_eq!(2.0 - -x, sub(2, mul(-1, "x")));
//! ```

use std::ops::{Add, Div, Mul, Neg, Sub};
use super::{binary, Expr, mul};
use symexpr_parser::parser::token::op::BinOpKind;

/// Implements a binary operator trait for every combination of [`Expr`] and [`f64`] operands that
/// involves at least one [`Expr`].
macro_rules! impl_binary_op {
    ($($trait:ident $method:ident $kind:ident),* $(,)?) => {
        $(
            impl $trait for Expr {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Self::Output {
                    binary(BinOpKind::$kind, self, rhs)
                }
            }

            impl $trait<f64> for Expr {
                type Output = Expr;

                fn $method(self, rhs: f64) -> Self::Output {
                    binary(BinOpKind::$kind, self, rhs)
                }
            }

            impl $trait<Expr> for f64 {
                type Output = Expr;

                fn $method(self, rhs: Expr) -> Self::Output {
                    binary(BinOpKind::$kind, self, rhs)
                }
            }
        )*
    };
}

impl_binary_op!(
    Add add Add,
    Sub sub Sub,
    Mul mul Mul,
    Div div Div,
);

/// Negation is written as multiplication by `-1`, since the tree has no unary operators.
impl Neg for Expr {
    type Output = Expr;

    fn neg(self) -> Self::Output {
        mul(-1, self)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::expr::{add, div, num, sub, var};
    use super::*;

    #[test]
    fn operators_build_nodes() {
        assert_eq!(var("a") + var("b"), add("a", "b"));
        assert_eq!(var("a") - 1.0, sub("a", 1));
        assert_eq!(3.0 * var("a"), mul(3, "a"));
        assert_eq!(var("a") / num(0.0), div("a", 0));
    }

    #[test]
    fn negation() {
        assert_eq!(-var("y"), mul(-1, "y"));
        assert_eq!(-(-var("y")), mul(-1, mul(-1, "y")));
    }
}
