//! The expression tree that every symbolic and numerical operation in this crate works on.
//!
//! The [`Expr`](symexpr_parser::parser::ast::Expr) type from `symexpr_parser` remembers where
//! each node came from in the source text, which is convenient for reporting errors but gets in
//! the way of manipulating the expression. This module defines a separate [`Expr`] that only keeps
//! the structure of the expression: numeric constants, named variables, and binary operations.
//!
//! Trees can be built from text with [`make_expression`](crate::make_expression), converted from
//! a parsed AST with [`From`], or constructed directly:
//!
//! ```
//! use symexpr_compute::symbolic::expr::{add, mul, var, Expr};
//!
//! // (x * x) + 3
//! let expr = add(mul("x", "x"), 3);
//! assert_eq!(expr, add(mul(var("x"), var("x")), Expr::Num(3.0)));
//! ```
//!
//! Every transformation in this crate returns a freshly allocated tree and leaves its input
//! untouched. Each [`Expr::BinOp`] owns its operands, so a tree never shares nodes with another.
//!
//! # Equality
//!
//! The [`PartialEq`] implementation for [`Expr`] is **structural**: two expressions are equal if
//! they have the same shape, the same operators, equal numbers, and variables with the same names.
//! `x + y` and `y + x` are not equal under this definition. Use [`Expr::eq_commutative`] to
//! compare expressions while ignoring the order of the operands of `+` and `*`.

mod fmt;
mod iter;
mod ops;

use iter::ExprIter;
use symexpr_parser::parser::{
    ast::{Expr as AstExpr, Literal},
    token::op::BinOpKind,
};
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A symbolic arithmetic expression.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric constant, such as `2` or `-0.5`.
    Num(f64),

    /// A variable, such as `x`, identified only by its name.
    Var(String),

    /// A binary operation applied to two operands.
    BinOp(BinOpKind, Box<Expr>, Box<Expr>),
}

/// Creates a numeric constant.
pub fn num(value: f64) -> Expr {
    Expr::Num(value)
}

/// Creates a variable with the given name.
pub fn var(name: impl Into<String>) -> Expr {
    Expr::Var(name.into())
}

/// Creates a binary operation from two operands, converting raw numbers into [`Expr::Num`] and
/// strings into [`Expr::Var`].
pub fn binary(op: BinOpKind, lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    Expr::BinOp(op, Box::new(lhs.into()), Box::new(rhs.into()))
}

/// Creates the sum `lhs + rhs`.
pub fn add(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    binary(BinOpKind::Add, lhs, rhs)
}

/// Creates the difference `lhs - rhs`.
pub fn sub(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    binary(BinOpKind::Sub, lhs, rhs)
}

/// Creates the product `lhs * rhs`.
pub fn mul(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    binary(BinOpKind::Mul, lhs, rhs)
}

/// Creates the quotient `lhs / rhs`. The divisor is not checked for zero.
pub fn div(lhs: impl Into<Expr>, rhs: impl Into<Expr>) -> Expr {
    binary(BinOpKind::Div, lhs, rhs)
}

impl Expr {
    /// If the expression is a number, returns its value.
    pub fn as_num(&self) -> Option<f64> {
        match self {
            Self::Num(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true if the expression is the number `value`.
    pub fn is_num(&self, value: f64) -> bool {
        self.as_num() == Some(value)
    }

    /// If the expression is a variable, returns its name.
    pub fn as_var(&self) -> Option<&str> {
        match self {
            Self::Var(name) => Some(name),
            _ => None,
        }
    }

    /// If the expression is a binary operation, returns its operator and operands.
    pub fn as_binary(&self) -> Option<(BinOpKind, &Expr, &Expr)> {
        match self {
            Self::BinOp(op, lhs, rhs) => Some((*op, lhs, rhs)),
            _ => None,
        }
    }

    /// Returns the names of the distinct variables used in the expression, in sorted order.
    pub fn variables(&self) -> BTreeSet<&str> {
        self.post_order_iter()
            .filter_map(Expr::as_var)
            .collect()
    }

    /// Returns the number of nodes on the longest path from this node to a leaf, counting both
    /// ends. A single number or variable has a depth of 1.
    pub fn depth(&self) -> usize {
        match self {
            Self::Num(_) | Self::Var(_) => 1,
            Self::BinOp(_, lhs, rhs) => 1 + lhs.depth().max(rhs.depth()),
        }
    }

    /// Returns the total number of nodes in the expression.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }

    /// Returns true if the two expressions are structurally equal when the operands of every
    /// commutative operation (`+` and `*`) may appear in either order.
    ///
    /// ```
    /// use symexpr_compute::symbolic::expr::{add, mul, sub};
    ///
    /// assert!(add(mul("x", 2), "y").eq_commutative(&add("y", mul(2, "x"))));
    /// assert!(!sub("x", "y").eq_commutative(&sub("y", "x")));
    /// ```
    pub fn eq_commutative(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::BinOp(op_a, lhs_a, rhs_a), Self::BinOp(op_b, lhs_b, rhs_b)) if op_a == op_b => {
                (lhs_a.eq_commutative(lhs_b) && rhs_a.eq_commutative(rhs_b))
                    || (op_a.is_commutative()
                        && lhs_a.eq_commutative(rhs_b)
                        && rhs_a.eq_commutative(lhs_b))
            },
            (lhs, rhs) => lhs == rhs,
        }
    }

    /// Returns an iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn post_order_iter(&self) -> ExprIter {
        ExprIter::new(self)
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Self::Num(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Self::Num(f64::from(value))
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Self::Var(name.to_owned())
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Self::Var(name)
    }
}

/// Lowers a parsed expression into an [`Expr`], discarding span information.
impl From<AstExpr> for Expr {
    fn from(expr: AstExpr) -> Self {
        match expr {
            AstExpr::Literal(Literal::Number(num)) => Self::Num(num.value),
            AstExpr::Literal(Literal::Symbol(sym)) => Self::Var(sym.name),
            AstExpr::Binary(bin) => Self::BinOp(
                bin.op.kind,
                Box::new(Self::from(*bin.lhs)),
                Box::new(Self::from(*bin.rhs)),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symexpr_parser::parser::Parser;
    use super::*;

    #[test]
    fn constructors_wrap_raw_operands() {
        assert_eq!(add("x", 2), Expr::BinOp(
            BinOpKind::Add,
            Box::new(Expr::Var("x".to_string())),
            Box::new(Expr::Num(2.0)),
        ));
        assert_eq!(div(1.5, var("y")), Expr::BinOp(
            BinOpKind::Div,
            Box::new(Expr::Num(1.5)),
            Box::new(Expr::Var("y".to_string())),
        ));
        assert_eq!(sub(num(0.0), String::from("z")), binary(BinOpKind::Sub, 0, "z"));
    }

    #[test]
    fn division_by_zero_is_constructible() {
        let expr = div("x", 0);
        assert_eq!(expr.as_binary(), Some((BinOpKind::Div, &var("x"), &num(0.0))));
    }

    #[test]
    fn lower_ast() {
        let ast = Parser::new("((x*x) + (y - -2))").try_parse_full::<AstExpr>().unwrap();
        assert_eq!(Expr::from(ast), add(mul("x", "x"), sub("y", -2)));
    }

    #[test]
    fn accessors() {
        assert_eq!(num(4.0).as_num(), Some(4.0));
        assert_eq!(var("x").as_num(), None);
        assert!(num(0.0).is_num(0.0));
        assert!(num(-0.0).is_num(0.0));
        assert!(!var("x").is_num(0.0));
        assert_eq!(var("x").as_var(), Some("x"));
        assert_eq!(add(1, 2).as_var(), None);
    }

    #[test]
    fn queries() {
        let expr = div(add(mul("y", "x"), "x"), sub("a", 1));
        assert_eq!(expr.variables().into_iter().collect::<Vec<_>>(), vec!["a", "x", "y"]);
        assert_eq!(expr.depth(), 4);
        assert_eq!(expr.node_count(), 9);
        assert_eq!(num(1.0).depth(), 1);
        assert_eq!(num(1.0).node_count(), 1);
        assert!(num(1.0).variables().is_empty());
    }

    #[test]
    fn post_order() {
        let expr = sub(mul("a", "b"), "c");
        let order = expr.post_order_iter()
            .map(|expr| expr.to_string())
            .collect::<Vec<_>>();
        assert_eq!(order, vec!["a", "b", "a * b", "c", "a * b - c"]);
    }

    #[test]
    fn structural_equality() {
        assert_eq!(add("x", "y"), add("x", "y"));
        assert_ne!(add("x", "y"), add("y", "x"));
        assert_ne!(num(1.0), var("x"));
    }

    #[test]
    fn commutative_equality() {
        assert!(add("x", "y").eq_commutative(&add("y", "x")));
        assert!(mul(add(1, "a"), "b").eq_commutative(&mul("b", add("a", 1))));
        assert!(!div("x", "y").eq_commutative(&div("y", "x")));
        assert!(!add("x", "y").eq_commutative(&mul("x", "y")));
        assert!(!add("x", "x").eq_commutative(&add("x", "y")));
    }
}
