use symexpr_parser::parser::token::op::BinOpKind;
use crate::symbolic::expr::Expr;
use super::{ctxt::Ctxt, error::SymbolicEvaluationError};

/// Any type that can be evaluated to produce a number.
pub trait Eval {
    /// Evaluate the expression to produce a number, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, SymbolicEvaluationError>;

    /// Evaluate the expression to produce a number, using an empty context.
    fn eval_default(&self) -> Result<f64, SymbolicEvaluationError> {
        self.eval(&Ctxt::default())
    }
}

impl Eval for Expr {
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, SymbolicEvaluationError> {
        match self {
            Expr::Num(value) => Ok(*value),
            Expr::Var(name) => ctxt.get_var(name).ok_or_else(|| {
                SymbolicEvaluationError::UnboundVariable {
                    name: name.clone(),
                    suggestions: ctxt.get_similar_vars(name)
                        .into_iter()
                        .map(str::to_owned)
                        .collect(),
                }
            }),
            Expr::BinOp(op, lhs, rhs) => {
                let lhs = lhs.eval(ctxt)?;
                let rhs = rhs.eval(ctxt)?;
                match op {
                    BinOpKind::Add => Ok(lhs + rhs),
                    BinOpKind::Sub => Ok(lhs - rhs),
                    BinOpKind::Mul => Ok(lhs * rhs),
                    BinOpKind::Div if rhs == 0.0 => Err(SymbolicEvaluationError::DivisionByZero),
                    BinOpKind::Div => Ok(lhs / rhs),
                }
            },
        }
    }
}

impl Expr {
    /// Evaluates the expression with the variables bound in the given context.
    ///
    /// See [`Eval::eval`] for more information.
    pub fn evaluate(&self, ctxt: &Ctxt) -> Result<f64, SymbolicEvaluationError> {
        self.eval(ctxt)
    }
}
