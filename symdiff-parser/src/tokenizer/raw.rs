use logos::Logos;

/// The raw lexemes recognized in expression text, before names and numbers are interpreted.
#[derive(Logos, Clone, Copy, Debug, PartialEq)]
pub enum RawKind {
    #[regex(r"[ \t]+")]
    Whitespace,

    #[regex(r"[0-9]+(\.[0-9]*)?")]
    #[regex(r"\.[0-9]*")]
    Number,

    #[regex(r"[a-zA-Z]+")]
    Name,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("/")]
    Div,

    #[token("^")]
    Exp,

    /// Unary minus. This only appears in text rewritten by
    /// [`mark_unary_minus`](crate::parser::mark_unary_minus).
    #[token("~")]
    Neg,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Compares the raw lexemes produced by the lexer to the expected ones.
    fn compare_lexemes<const N: usize>(input: &str, expected: [(RawKind, &str); N]) {
        let mut lexer = RawKind::lexer(input);

        for (expected_kind, expected_lexeme) in expected.into_iter() {
            assert_eq!(lexer.next(), Some(Ok(expected_kind)));
            assert_eq!(lexer.slice(), expected_lexeme);
        }

        assert_eq!(lexer.next(), None);
    }

    #[test]
    fn numbers_and_names() {
        compare_lexemes(
            "3.25*sqrt(x)",
            [
                (RawKind::Number, "3.25"),
                (RawKind::Mul, "*"),
                (RawKind::Name, "sqrt"),
                (RawKind::OpenParen, "("),
                (RawKind::Name, "x"),
                (RawKind::CloseParen, ")"),
            ],
        );
    }

    #[test]
    fn leading_and_trailing_points() {
        compare_lexemes(
            ".5 + 2.",
            [
                (RawKind::Number, ".5"),
                (RawKind::Whitespace, " "),
                (RawKind::Add, "+"),
                (RawKind::Whitespace, " "),
                (RawKind::Number, "2."),
            ],
        );
    }

    #[test]
    fn unknown_character() {
        let mut lexer = RawKind::lexer("1 $");
        assert_eq!(lexer.next(), Some(Ok(RawKind::Number)));
        assert_eq!(lexer.next(), Some(Ok(RawKind::Whitespace)));
        assert_eq!(lexer.next(), Some(Err(())));
    }
}
