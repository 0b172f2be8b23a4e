use ariadne::Fmt;
use symexpr_attrs::ErrorKind;
use symexpr_error::EXPR;
use crate::tokenizer::TokenKind;

/// Formats a list of token kinds for display in an error message.
fn fmt_kinds(kinds: &[TokenKind]) -> String {
    kinds.iter()
        .map(|kind| format!("{:?}", kind))
        .collect::<Vec<_>>()
        .join(", ")
}

/// The input contained no tokens other than whitespace.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = [format!("I expected to see an {} here", "expression".fg(EXPR))],
    help = "an expression is a number, a variable name, or a parenthesized operation like `(x + 1)`",
)]
pub struct EmptyExpression;

/// The end of the source code was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of file",
    labels = [format!("you might need to add another {} here", "expression".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the source code was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of file",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
    help = "every binary operation must be wrapped in its own parentheses, like `(a + b)`",
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected token",
    labels = [format!("expected one of: {}", fmt_kinds(self.expected))],
    help = format!("found {:?}", self.found),
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A character that is not part of the expression language was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized token `{}`", self.lexeme),
    labels = ["this character"],
    help = "expressions may only contain numbers, variable names, parentheses, and the operators `+`, `-`, `*`, `/`",
)]
pub struct UnrecognizedToken {
    /// The raw text of the token.
    pub lexeme: String,
}

/// An operator was expected between the two operands of a parenthesized expression.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected an operator",
    labels = ["this operand...".to_string(), format!("...should be followed by one of `+`, `-`, `*`, `/`, not {:?}", self.found)],
)]
pub struct ExpectedOperator {
    /// The token that was found instead.
    pub found: TokenKind,
}

/// A closing parenthesis was expected after the right-hand operand.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected a closing parenthesis `)`",
    labels = ["this parenthesis...".to_string(), format!("...should be closed before this {:?}", self.found)],
    help = if self.found.is_operator() {
        "every binary operation must be wrapped in its own parentheses, like `((a + b) + c)`"
    } else {
        "add a closing parenthesis `)` after the right-hand operand"
    },
)]
pub struct ExpectedCloseParen {
    /// The token that was found instead.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if self.opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// A number literal could not be converted to a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("invalid number `{}`", self.lexeme),
    labels = ["this number"],
)]
pub struct InvalidNumber {
    /// The raw text of the literal.
    pub lexeme: String,
}

/// The expression is nested more deeply than the parser allows.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = [format!("this parenthesis exceeds the maximum nesting depth of {}", self.max)],
)]
pub struct NestingTooDeep {
    /// The maximum nesting depth.
    pub max: usize,
}
