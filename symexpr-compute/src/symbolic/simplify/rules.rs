//! The rewrite rules used by [`simplify`](super::simplify()).
//!
//! Each rule is a function that takes the expression to simplify as an argument, and returns
//! `Some(expr)` with the simplified expression if the rule applies, or `None` if the rule does
//! not apply. Rules only look at the node they are given; its operands are expected to be
//! simplified already.

use symexpr_parser::parser::token::op::BinOpKind;
use tracing::debug;
use crate::symbolic::{expr::Expr, step_collector::StepCollector};
use super::step::Step;

/// If the expression is a binary operation with the given operator, calls the given
/// transformation function with its operands.
///
/// Returns `Some(expr)` with the transformed expression if a transformation was applied.
fn do_binary(
    expr: &Expr,
    op: BinOpKind,
    f: impl Fn(&Expr, &Expr) -> Option<Expr>,
) -> Option<Expr> {
    match expr {
        Expr::BinOp(kind, lhs, rhs) if *kind == op => f(lhs, rhs),
        _ => None,
    }
}

/// Records that `step` produced `output` from `input`.
fn record(
    step: Step,
    input: &Expr,
    output: Expr,
    step_collector: &mut dyn StepCollector<Step>,
) -> Option<Expr> {
    debug!(%step, %input, %output, "applied simplification rule");
    step_collector.push(step);
    Some(output)
}

/// Replaces an operation on two numbers with its result. A division by zero is left alone.
///
/// `2+3 = 5`
/// `6/4 = 1.5`
pub fn fold_constants(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let Expr::BinOp(op, lhs, rhs) = expr else {
        return None;
    };
    let (a, b) = (lhs.as_num()?, rhs.as_num()?);

    let value = match op {
        BinOpKind::Add => a + b,
        BinOpKind::Sub => a - b,
        BinOpKind::Mul => a * b,
        BinOpKind::Div if b != 0.0 => a / b,
        BinOpKind::Div => return None,
    };

    record(Step::ConstantFold, expr, Expr::Num(value), step_collector)
}

/// `a+0 = a`
/// `0+a = a`
pub fn add_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Add, |lhs, rhs| {
        if rhs.is_num(0.0) {
            Some(lhs.clone())
        } else if lhs.is_num(0.0) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    record(Step::AddZero, expr, opt, step_collector)
}

/// `a-0 = a`
pub fn subtract_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Sub, |lhs, rhs| {
        rhs.is_num(0.0).then(|| lhs.clone())
    })?;

    record(Step::SubtractZero, expr, opt, step_collector)
}

/// `a*0 = 0`
/// `0*a = 0`
pub fn multiply_zero(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        (lhs.is_num(0.0) || rhs.is_num(0.0)).then_some(Expr::Num(0.0))
    })?;

    record(Step::MultiplyZero, expr, opt, step_collector)
}

/// `a*1 = a`
/// `1*a = a`
pub fn multiply_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Mul, |lhs, rhs| {
        if rhs.is_num(1.0) {
            Some(lhs.clone())
        } else if lhs.is_num(1.0) {
            Some(rhs.clone())
        } else {
            None
        }
    })?;

    record(Step::MultiplyOne, expr, opt, step_collector)
}

/// `a/1 = a`
pub fn divide_one(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    let opt = do_binary(expr, BinOpKind::Div, |lhs, rhs| {
        rhs.is_num(1.0).then(|| lhs.clone())
    })?;

    record(Step::DivideOne, expr, opt, step_collector)
}

/// Applies the first rule that matches the expression, in order of priority.
pub fn all(expr: &Expr, step_collector: &mut dyn StepCollector<Step>) -> Option<Expr> {
    fold_constants(expr, step_collector)
        .or_else(|| add_zero(expr, step_collector))
        .or_else(|| subtract_zero(expr, step_collector))
        .or_else(|| multiply_zero(expr, step_collector))
        .or_else(|| multiply_one(expr, step_collector))
        .or_else(|| divide_one(expr, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use crate::symbolic::expr::{add, div, mul, sub, var};
    use super::*;

    #[test]
    fn rules_only_match_their_operator() {
        assert_eq!(add_zero(&sub("x", 0), &mut ()), None);
        assert_eq!(subtract_zero(&sub(0, "x"), &mut ()), None);
        assert_eq!(multiply_one(&div("x", 1), &mut ()), None);
        assert_eq!(divide_one(&div(1, "x"), &mut ()), None);
    }

    #[test]
    fn fold_skips_zero_divisor() {
        assert_eq!(fold_constants(&div(1, 0), &mut ()), None);
        assert_eq!(fold_constants(&div(1, 4), &mut ()), Some(Expr::Num(0.25)));
        assert_eq!(fold_constants(&mul(var("x"), 4), &mut ()), None);
    }

    #[test]
    fn first_matching_rule_wins() {
        let mut steps = Vec::new();
        assert_eq!(all(&mul(0, 1), &mut steps), Some(Expr::Num(0.0)));
        assert_eq!(steps, vec![Step::ConstantFold]);

        let mut steps = Vec::new();
        assert_eq!(all(&mul("x", 0), &mut steps), Some(Expr::Num(0.0)));
        assert_eq!(steps, vec![Step::MultiplyZero]);
    }
}
