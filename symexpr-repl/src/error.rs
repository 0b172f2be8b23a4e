use crate::command::CommandError;
use symexpr_compute::{ParseError, SymbolicEvaluationError};
use tracing::error;

/// Utility enum to package errors that can occur while running a line of input.
#[derive(Debug)]
pub enum Error {
    /// The line was not a well-formed command.
    Command(CommandError),

    /// Error that occurred while parsing an expression.
    Parse(ParseError),

    /// Error that occurred while evaluating an expression.
    Eval(SymbolicEvaluationError),
}

impl Error {
    /// Report this error to stderr. `input` is the expression text that the error came from.
    pub fn report_to_stderr(&self, input: &str) {
        let result = match self {
            Self::Command(err) => {
                eprintln!("error: {}", err);
                Ok(())
            },
            Self::Parse(err) => err.report_to_stderr("input", input),
            // evaluation errors point at the whole expression
            Self::Eval(err) => symexpr_error::Error::new(vec![0..input.len()], err.clone())
                .report_to_stderr("input", input),
        };

        if let Err(err) = result {
            error!(%err, "failed to write error report");
        }
    }
}

impl From<CommandError> for Error {
    fn from(err: CommandError) -> Self {
        Self::Command(err)
    }
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl From<SymbolicEvaluationError> for Error {
    fn from(err: SymbolicEvaluationError) -> Self {
        Self::Eval(err)
    }
}
