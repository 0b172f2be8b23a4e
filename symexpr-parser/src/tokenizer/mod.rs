pub mod token;

use logos::{Lexer, Logos};
pub use token::{Token, TokenKind};

/// Returns an iterator over the token kinds produced by the tokenizer.
pub fn tokenize(input: &str) -> Lexer<TokenKind> {
    TokenKind::lexer(input)
}

/// Returns an owned array containing all of the tokens produced by the tokenizer. This allows us
/// to backtrack in case of an error.
///
/// Input the lexer cannot match is kept as a [`TokenKind::Symbol`] token, so that the parser can
/// report it.
pub fn tokenize_complete(input: &str) -> Box<[Token]> {
    let mut lexer = tokenize(input);
    let mut tokens = Vec::new();

    while let Some(kind) = lexer.next() {
        tokens.push(Token {
            span: lexer.span(),
            kind: kind.unwrap_or(TokenKind::Symbol),
            lexeme: lexer.slice(),
        });
    }

    tokens.into_boxed_slice()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the tokens produced by the tokenizer to the raw expected tokens.
    fn compare_tokens<'source, const N: usize>(input: &'source str, expected: [(TokenKind, &'source str); N]) {
        let mut lexer = tokenize(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "(x + 2)",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Add, "+"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, "2"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn numbers_and_names() {
        compare_tokens(
            "6.1010 .5 3. x_1 _tmp",
            [
                (TokenKind::Num, "6.1010"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, ".5"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Num, "3."),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "x_1"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Name, "_tmp"),
            ],
        );
    }

    #[test]
    fn minus_is_separate_token() {
        compare_tokens(
            "(x--3)",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::Sub, "-"),
                (TokenKind::Sub, "-"),
                (TokenKind::Num, "3"),
                (TokenKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn unrecognized_symbols() {
        compare_tokens(
            "(x#y)\t^",
            [
                (TokenKind::OpenParen, "("),
                (TokenKind::Name, "x"),
                (TokenKind::Symbol, "#"),
                (TokenKind::Name, "y"),
                (TokenKind::CloseParen, ")"),
                (TokenKind::Whitespace, "\t"),
                (TokenKind::Symbol, "^"),
            ],
        );
    }

    #[test]
    fn complete_tokens_keep_spans() {
        let tokens = tokenize_complete("(ab * 12)");
        let spans = tokens.iter().map(|token| token.span.clone()).collect::<Vec<_>>();
        assert_eq!(spans, vec![0..1, 1..3, 3..4, 4..5, 5..6, 6..8, 8..9]);
        assert_eq!(tokens[1].lexeme, "ab");
        assert_eq!(tokens[5].kind, TokenKind::Num);
    }
}
