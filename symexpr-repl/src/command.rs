use thiserror::Error;

/// The commands understood by the REPL.
pub const HELP: &str = "\
<expr>               evaluate a fully parenthesized expression, such as ((x*x) + 1)
<name> = <expr>      evaluate an expression and bind the result to a variable
:simplify <expr>     simplify an expression
:steps <expr>        simplify an expression, listing the rules applied
:deriv <name> <expr> differentiate an expression with respect to a variable, then simplify it
:vars                list the bound variables
:clear               remove every bound variable
:help                show this message";

/// An error in the shape of a command line, before any expression in it is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The line started with `:` but named no known command.
    #[error("unknown command `:{0}`; type `:help` for a list of commands")]
    Unknown(String),

    /// A command was missing one of its arguments.
    #[error("`{command}` is missing its {argument}")]
    MissingArgument {
        /// The name of the command, or `=` for an assignment.
        command: &'static str,

        /// A description of the missing argument.
        argument: &'static str,
    },

    /// The left-hand side of an assignment is not a variable name.
    #[error("cannot assign to `{0}`; only variable names can be assigned to")]
    InvalidTarget(String),
}

/// A single line of input to the REPL.
#[derive(Debug, Clone, PartialEq)]
pub enum Command<'a> {
    /// Evaluate an expression under the current bindings.
    Eval(&'a str),

    /// Evaluate an expression and bind it to a variable.
    Assign {
        /// The variable to bind.
        name: &'a str,

        /// The expression to evaluate.
        expr: &'a str,
    },

    /// Simplify an expression.
    Simplify(&'a str),

    /// Simplify an expression and list the rules applied.
    Steps(&'a str),

    /// Differentiate an expression and simplify the result.
    Deriv {
        /// The variable to differentiate with respect to.
        var: &'a str,

        /// The expression to differentiate.
        expr: &'a str,
    },

    /// List the bound variables.
    Vars,

    /// Remove every bound variable.
    Clear,

    /// Show the list of commands.
    Help,
}

/// Returns true if `name` is a valid variable name.
fn is_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Returns the argument of a command, or an error if it is empty.
fn require<'a>(
    arg: &'a str,
    command: &'static str,
    argument: &'static str,
) -> Result<&'a str, CommandError> {
    let arg = arg.trim();
    if arg.is_empty() {
        Err(CommandError::MissingArgument { command, argument })
    } else {
        Ok(arg)
    }
}

impl<'a> Command<'a> {
    /// Parses a line of input into a command. The expressions inside the command are not parsed.
    pub fn parse(line: &'a str) -> Result<Self, CommandError> {
        let line = line.trim();

        if let Some(rest) = line.strip_prefix(':') {
            let (name, arg) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            return match name {
                "simplify" => Ok(Self::Simplify(require(arg, ":simplify", "expression")?)),
                "steps" => Ok(Self::Steps(require(arg, ":steps", "expression")?)),
                "deriv" => {
                    let arg = require(arg, ":deriv", "variable name")?;
                    let (var, expr) = arg.split_once(char::is_whitespace).unwrap_or((arg, ""));
                    if !is_name(var) {
                        return Err(CommandError::MissingArgument {
                            command: ":deriv",
                            argument: "variable name",
                        });
                    }
                    Ok(Self::Deriv {
                        var,
                        expr: require(expr, ":deriv", "expression")?,
                    })
                },
                "vars" => Ok(Self::Vars),
                "clear" => Ok(Self::Clear),
                "help" => Ok(Self::Help),
                other => Err(CommandError::Unknown(other.to_string())),
            };
        }

        // `=` is not part of the expression language, so the first one splits an assignment
        match line.split_once('=') {
            Some((name, expr)) => {
                let name = name.trim();
                if !is_name(name) {
                    return Err(CommandError::InvalidTarget(name.to_string()));
                }
                Ok(Self::Assign {
                    name,
                    expr: require(expr, "=", "expression")?,
                })
            },
            None => Ok(Self::Eval(line)),
        }
    }

    /// Returns the expression text this command operates on, if any.
    pub fn source(&self) -> Option<&'a str> {
        match self {
            Self::Eval(expr)
                | Self::Assign { expr, .. }
                | Self::Simplify(expr)
                | Self::Steps(expr)
                | Self::Deriv { expr, .. } => Some(*expr),
            Self::Vars | Self::Clear | Self::Help => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn expressions() {
        assert_eq!(Command::parse("  ((x*x) + 1) "), Ok(Command::Eval("((x*x) + 1)")));
        assert_eq!(Command::parse("y = (x / 2)"), Ok(Command::Assign {
            name: "y",
            expr: "(x / 2)",
        }));
    }

    #[test]
    fn commands() {
        assert_eq!(Command::parse(":simplify (0 + x)"), Ok(Command::Simplify("(0 + x)")));
        assert_eq!(Command::parse(":steps  (x * 1)"), Ok(Command::Steps("(x * 1)")));
        assert_eq!(Command::parse(":deriv x ((x*x) + y)"), Ok(Command::Deriv {
            var: "x",
            expr: "((x*x) + y)",
        }));
        assert_eq!(Command::parse(":vars"), Ok(Command::Vars));
        assert_eq!(Command::parse(":clear"), Ok(Command::Clear));
        assert_eq!(Command::parse(":help"), Ok(Command::Help));
    }

    #[test]
    fn malformed_commands() {
        assert_eq!(Command::parse(":frobnicate"), Err(CommandError::Unknown("frobnicate".to_string())));
        assert_eq!(Command::parse(":simplify"), Err(CommandError::MissingArgument {
            command: ":simplify",
            argument: "expression",
        }));
        assert_eq!(Command::parse(":deriv x"), Err(CommandError::MissingArgument {
            command: ":deriv",
            argument: "expression",
        }));
        assert_eq!(Command::parse("(x + 1) = 2"), Err(CommandError::InvalidTarget("(x + 1)".to_string())));
        assert_eq!(Command::parse("x ="), Err(CommandError::MissingArgument {
            command: "=",
            argument: "expression",
        }));
    }

    #[test]
    fn source_text() {
        assert_eq!(Command::parse(":deriv t (t * t)").unwrap().source(), Some("(t * t)"));
        assert_eq!(Command::parse(":vars").unwrap().source(), None);
    }
}
