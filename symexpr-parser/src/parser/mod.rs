pub mod ast;
pub mod error;
pub mod token;

use error::{Error, kind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;
use symexpr_error::ErrorKind;
use tracing::trace;

/// The maximum number of nested parentheses the parser will descend into. Deeper input is rejected
/// with [`kind::NestingTooDeep`] instead of risking a stack overflow.
pub const MAX_NESTING_DEPTH: usize = 1 << 7;

/// A high-level parser for the expression language. This is the type to use to parse an arbitrary
/// piece of text into an abstract syntax tree.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,

    /// The number of parentheses the parser is currently inside of.
    depth: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        let tokens = tokenize_complete(source);
        trace!(
            tokens = ?tokens.iter().filter(|token| !token.is_whitespace()).map(|token| token.lexeme).collect::<Vec<_>>(),
            "tokenized input"
        );
        Self {
            tokens,
            cursor: 0,
            depth: 0,
        }
    }

    /// Creates an error that points at the current token, or the end of the source code if the
    /// cursor is at the end of the stream.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the previous token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the beginning of the stream.
    pub fn prev_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor.checked_sub(1)?)
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor is at
    /// the end of the stream.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Moves the cursor past any whitespace tokens.
    fn skip_whitespace(&mut self) {
        while self.current_token().is_some_and(Token::is_whitespace) {
            self.cursor += 1;
        }
    }

    /// Returns the kind of the next non-whitespace token without consuming it, or [`None`] if
    /// there are no more tokens.
    pub fn peek_kind(&mut self) -> Option<TokenKind> {
        self.skip_whitespace();
        self.current_token().map(|token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor. Whitespace tokens are
    /// skipped.
    ///
    /// Returns an EOF error if there are no more tokens, and an unrecognized token error if the
    /// next token is not part of the language.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        self.skip_whitespace();
        let Some(token) = self.current_token().cloned() else {
            return Err(self.error(kind::UnexpectedEof));
        };
        self.cursor += 1;

        if token.kind == TokenKind::Symbol {
            return Err(Error::new(vec![token.span], kind::UnrecognizedToken {
                lexeme: token.lexeme.to_owned(),
            }));
        }

        // cloning is cheap: only Range<_> is cloned
        Ok(token)
    }

    /// Creates an error describing why the current token cannot start or continue the construct
    /// being parsed. The cursor is not moved.
    ///
    /// Characters outside the language are reported as unrecognized, and running out of tokens
    /// is reported as an unexpected end of file.
    pub fn unexpected(&mut self, expected: &'static [TokenKind]) -> Error {
        self.skip_whitespace();
        match self.current_token() {
            Some(token) if token.kind == TokenKind::Symbol => {
                Error::new(vec![token.span.clone()], kind::UnrecognizedToken {
                    lexeme: token.lexeme.to_owned(),
                })
            },
            Some(token) => Error::new(vec![token.span.clone()], kind::UnexpectedToken {
                expected,
                found: token.kind,
            }),
            None => self.error(kind::UnexpectedEof),
        }
    }

    /// Runs the given parsing function one level of parentheses deeper. `span` is the opening
    /// parenthesis, used to report input that is nested too deeply.
    pub fn nested<T, F>(&mut self, span: Range<usize>, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        if self.depth >= MAX_NESTING_DEPTH {
            return Err(Error::new(vec![span], kind::NestingTooDeep { max: MAX_NESTING_DEPTH }));
        }

        self.depth += 1;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// Speculatively parses a value from the given stream of tokens. This function can be used
    /// in the [`Parse::parse`] implementation of a type with the given [`Parser`], as it will
    /// automatically backtrack the cursor position if parsing fails.
    ///
    /// If parsing is successful, the stream is advanced past the consumed tokens and the parsed
    /// value is returned. Otherwise, the stream is left unchanged and an error is returned.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        self.try_parse_with_fn(T::parse)
    }

    /// Speculatively parses a value from the given stream of tokens, using a custom parsing
    /// function to parse the value. The cursor is restored if parsing fails.
    pub fn try_parse_with_fn<T, F>(&mut self, f: F) -> Result<T, Error>
    where
        F: FnOnce(&mut Parser<'source>) -> Result<T, Error>,
    {
        let start = self.cursor;
        match f(self) {
            Ok(value) => Ok(value),
            err => {
                self.cursor = start;
                err
            },
        }
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    ///
    /// Input consisting only of whitespace is reported as an empty expression, and a stray closing
    /// parenthesis after a complete value is reported as an unbalanced parenthesis.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        if self.peek_kind().is_none() {
            return Err(Error::new(vec![self.eof_span()], kind::EmptyExpression));
        }

        let value = T::parse(self)?;
        match self.peek_kind() {
            None => Ok(value),
            Some(TokenKind::CloseParen) => Err(self.error(kind::UnclosedParenthesis { opening: false })),
            Some(_) => {
                let start = self.span().start;
                Err(Error::new(vec![start..self.eof_span().end], kind::ExpectedEof))
            },
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    ///
    /// This function should be used by consumers of the library.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
///
/// The grammar itself never needs precedence, since every operation is parenthesized. It is used
/// to decide where parentheses are needed when printing an expression in infix notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor,
}
