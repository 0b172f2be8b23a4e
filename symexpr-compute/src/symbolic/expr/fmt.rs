use std::fmt;
use super::Expr;

/// Writes an operand of a binary operation with the given precedence, wrapping it in parentheses
/// if it would otherwise bind to the wrong operator.
///
/// `strict` should be set for the right-hand operand of a non-commutative operator, where an
/// operand of equal precedence also needs parentheses: `a - (b - c)` is not `a - b - c`.
fn fmt_operand(f: &mut fmt::Formatter, operand: &Expr, parent: &Expr, strict: bool) -> fmt::Result {
    let needs_parens = match (operand, parent) {
        (Expr::BinOp(inner, _, _), Expr::BinOp(outer, _, _)) => {
            inner.precedence() < outer.precedence()
                || (strict && inner.precedence() == outer.precedence())
        },
        _ => false,
    };

    if needs_parens {
        write!(f, "({})", operand)
    } else {
        write!(f, "{}", operand)
    }
}

/// Writes the expression in infix notation using as few parentheses as possible.
///
/// ```
/// use symexpr_compute::symbolic::expr::{add, div, mul, sub};
///
/// assert_eq!(add(mul("x", "x"), mul("y", "y")).to_string(), "x * x + y * y");
/// assert_eq!(mul(add("x", 1), sub("y", div(1, 2))).to_string(), "(x + 1) * (y - 1 / 2)");
/// assert_eq!(sub("a", sub("b", "c")).to_string(), "a - (b - c)");
/// ```
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Num(value) => write!(f, "{}", value),
            Self::Var(name) => write!(f, "{}", name),
            Self::BinOp(op, lhs, rhs) => {
                fmt_operand(f, lhs, self, false)?;
                write!(f, " {} ", op)?;
                fmt_operand(f, rhs, self, !op.is_commutative())
            },
        }
    }
}

/// Helper struct created by [`Expr::to_parenthesized`].
struct Parenthesized<'a>(&'a Expr);

impl fmt::Display for Parenthesized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.0 {
            Expr::BinOp(op, lhs, rhs) => {
                write!(f, "({} {} {})", Parenthesized(lhs), op, Parenthesized(rhs))
            },
            leaf => write!(f, "{}", leaf),
        }
    }
}

impl Expr {
    /// Writes the expression in the fully parenthesized notation accepted by
    /// [`make_expression`](crate::make_expression), so that parsing the output produces an
    /// expression structurally equal to `self`.
    ///
    /// Numbers that are not finite have no textual form and are written as Rust formats them.
    ///
    /// ```
    /// use symexpr_compute::{make_expression, symbolic::expr::{add, mul, sub}};
    ///
    /// let expr = add(mul("x", "x"), sub("y", -2));
    /// assert_eq!(expr.to_parenthesized(), "((x * x) + (y - -2))");
    /// assert_eq!(make_expression(&expr.to_parenthesized()).unwrap(), expr);
    /// ```
    pub fn to_parenthesized(&self) -> String {
        Parenthesized(self).to_string()
    }
}
