use ariadne::{Fmt, Label, Report, ReportKind};
use std::{any::Any, ops::Range};
use symexpr_error::{ErrorKind, EXPR};
use thiserror::Error;

/// An error that can occur while evaluating an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SymbolicEvaluationError {
    /// The expression uses a variable that the context does not bind.
    #[error("unbound variable `{name}`")]
    UnboundVariable {
        /// The name of the variable.
        name: String,

        /// Names of bound variables that are similar to `name`, in sorted order.
        suggestions: Vec<String>,
    },

    /// The right-hand side of a division evaluated to exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl SymbolicEvaluationError {
    /// The text of the label pointing at the expression that failed to evaluate.
    fn label(&self) -> String {
        match self {
            Self::UnboundVariable { name, .. } => {
                format!("`{}` has no value in this context", name.as_str().fg(EXPR))
            },
            Self::DivisionByZero => "the divisor evaluates to zero".to_string(),
        }
    }

    /// Advice on how to fix the error, if any.
    fn help(&self) -> Option<String> {
        match self {
            Self::UnboundVariable { suggestions, .. } if !suggestions.is_empty() => {
                let names = suggestions.iter()
                    .map(|name| format!("`{}`", name))
                    .collect::<Vec<_>>()
                    .join(", ");
                Some(format!("did you mean one of: {}?", names))
            },
            Self::UnboundVariable { name, .. } => {
                Some(format!("bind a value first, for example `{} = 1`", name))
            },
            Self::DivisionByZero => None,
        }
    }
}

/// Evaluation errors have no span of their own; the caller decides which part of the source they
/// point at.
impl ErrorKind for SymbolicEvaluationError {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn message(&self) -> String {
        self.to_string()
    }

    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let offset = spans.first().map_or(0, |span| span.start);
        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.message())
            .with_labels(spans.iter().map(|span| {
                Label::new((src_id, span.clone()))
                    .with_color(EXPR)
                    .with_message(self.label())
            }));

        if let Some(help) = self.help() {
            builder.set_help(help);
        }
        builder.finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symexpr_error::Error;
    use super::*;

    fn render(err: SymbolicEvaluationError, input: &str) -> String {
        let err = Error::new(vec![0..input.len()], err);
        let mut buf = Vec::new();
        err.write_report("input", input, &mut buf).unwrap();
        strip_ansi_escapes::strip_str(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn messages() {
        let err = SymbolicEvaluationError::UnboundVariable {
            name: "z".to_string(),
            suggestions: vec![],
        };
        assert_eq!(err.to_string(), "unbound variable `z`");
        assert_eq!(SymbolicEvaluationError::DivisionByZero.to_string(), "division by zero");
    }

    #[test]
    fn report_suggests_similar_names() {
        let report = render(SymbolicEvaluationError::UnboundVariable {
            name: "z".to_string(),
            suggestions: vec!["x".to_string(), "y".to_string()],
        }, "(x + z)");
        assert!(report.contains("unbound variable `z`"));
        assert!(report.contains("did you mean one of: `x`, `y`?"));
    }

    #[test]
    fn report_division_by_zero() {
        let report = render(SymbolicEvaluationError::DivisionByZero, "(x / y)");
        assert!(report.contains("division by zero"));
        assert!(report.contains("the divisor evaluates to zero"));
    }

    #[test]
    fn converts_to_spanned_error() {
        let err = Error::new(vec![0..1], SymbolicEvaluationError::DivisionByZero);
        assert!(err.is::<SymbolicEvaluationError>());
        assert_eq!(err.to_string(), "division by zero");
    }
}
