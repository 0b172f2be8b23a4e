use crate::{command::{Command, HELP}, error::Error};
use symexpr_compute::{
    make_expression,
    symbolic::{simplify, simplify_with_steps},
    Ctxt,
};
use tracing::debug;

/// The state kept between lines of input: the variables bound so far.
#[derive(Debug, Default)]
pub struct Session {
    ctxt: Ctxt,
}

impl Session {
    /// Creates a session with no bound variables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs a single line of input, returning the lines of output to print.
    pub fn run(&mut self, command: &Command) -> Result<Vec<String>, Error> {
        debug!(?command, "running command");
        match *command {
            Command::Eval(text) => {
                let value = make_expression(text)?.evaluate(&self.ctxt)?;
                Ok(vec![value.to_string()])
            },
            Command::Assign { name, expr } => {
                let value = make_expression(expr)?.evaluate(&self.ctxt)?;
                self.ctxt.add_var(name, value);
                Ok(vec![format!("{} = {}", name, value)])
            },
            Command::Simplify(text) => {
                let expr = make_expression(text)?;
                Ok(vec![simplify(&expr).to_string()])
            },
            Command::Steps(text) => {
                let expr = make_expression(text)?;
                let (simplified, steps) = simplify_with_steps(&expr);
                let mut lines = steps.iter()
                    .enumerate()
                    .map(|(i, step)| format!("{}. {}", i + 1, step))
                    .collect::<Vec<_>>();
                lines.push(simplified.to_string());
                Ok(lines)
            },
            Command::Deriv { var, expr } => {
                let expr = make_expression(expr)?;
                Ok(vec![simplify(&expr.deriv(var)).to_string()])
            },
            Command::Vars => {
                let mut vars = self.ctxt.get_vars().iter().collect::<Vec<_>>();
                vars.sort_by(|a, b| a.0.cmp(b.0));
                Ok(vars.into_iter()
                    .map(|(name, value)| format!("{} = {}", name, value))
                    .collect())
            },
            Command::Clear => {
                self.ctxt.clear();
                Ok(Vec::new())
            },
            Command::Help => Ok(HELP.lines().map(str::to_owned).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symexpr_compute::SymbolicEvaluationError;
    use super::*;

    /// Parses and runs the line, panicking if it is not a well-formed command.
    fn run(session: &mut Session, line: &str) -> Result<Vec<String>, Error> {
        session.run(&Command::parse(line).unwrap())
    }

    #[test]
    fn assign_then_evaluate() {
        let mut session = Session::new();
        assert_eq!(run(&mut session, "x = 2").unwrap(), vec!["x = 2"]);
        assert_eq!(run(&mut session, "y = (x + 1)").unwrap(), vec!["y = 3"]);
        assert_eq!(run(&mut session, "((x*x) + (y*y))").unwrap(), vec!["13"]);
        assert_eq!(run(&mut session, ":vars").unwrap(), vec!["x = 2", "y = 3"]);

        assert!(run(&mut session, ":clear").unwrap().is_empty());
        assert!(matches!(
            run(&mut session, "x"),
            Err(Error::Eval(SymbolicEvaluationError::UnboundVariable { .. })),
        ));
    }

    #[test]
    fn symbolic_commands() {
        let mut session = Session::new();
        assert_eq!(run(&mut session, ":simplify ((x * 1) + (2 * 3))").unwrap(), vec!["x + 6"]);
        assert_eq!(run(&mut session, ":deriv x ((x*x) + y)").unwrap(), vec!["x + x"]);
        assert_eq!(run(&mut session, ":steps ((0 + x) / 1)").unwrap(), vec![
            "1. adding zero: a + 0 = a",
            "2. dividing by one: a / 1 = a",
            "x",
        ]);
    }

    #[test]
    fn errors() {
        let mut session = Session::new();
        assert!(matches!(run(&mut session, "(x#y)"), Err(Error::Parse(_))));
        assert!(matches!(
            run(&mut session, "(1 / (x - x))"),
            Err(Error::Eval(SymbolicEvaluationError::UnboundVariable { .. })),
        ));

        run(&mut session, "x = 1").unwrap();
        assert!(matches!(
            run(&mut session, "(1 / (x - x))"),
            Err(Error::Eval(SymbolicEvaluationError::DivisionByZero)),
        ));
    }
}
