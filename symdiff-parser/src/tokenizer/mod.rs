//! Conversion of expression text into [`Token`]s, one token per call.
//!
//! Raw lexing is done by [`logos`]; this module interprets the raw lexemes. At each position,
//! after skipping spaces and tabs:
//!
//! 1. the end of the input produces [`Token::End`];
//! 2. a digit or decimal point starts a number, which must have a finite value;
//! 3. a run of letters is a named constant (`e`, `pi`), a single-letter variable, or a
//!    function name, in that order;
//! 4. `( ) + - * / ~ ^` map directly to their token.
//!
//! Anything else is reported as an error rather than treated as the end of the input.

mod raw;

use crate::parser::{
    error::{kind, Error},
    token::{func::Func, op::BinOpKind, Token},
};
use logos::Logos;
use raw::RawKind;
use std::{f64::consts, ops::Range};

/// A [`Token`] together with the region of the source it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    /// The token that was read.
    pub token: Token,

    /// The region of the source code that this token originated from.
    pub span: Range<usize>,
}

/// Reads tokens from a source string, tracking a cursor into it. The source is never modified.
#[derive(Debug, Clone)]
pub struct Tokenizer<'source> {
    /// The text being tokenized.
    source: &'source str,

    /// The byte offset of the next character to read.
    cursor: usize,
}

impl<'source> Tokenizer<'source> {
    /// Creates a tokenizer positioned at the start of the given source.
    pub fn new(source: &'source str) -> Self {
        Self { source, cursor: 0 }
    }

    /// Returns the byte offset of the next character to read.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Reads the next token and advances the cursor past it.
    ///
    /// Once the end of the input is reached, every further call returns [`Token::End`].
    pub fn next_token(&mut self) -> Result<Spanned, Error> {
        let mut lexer = RawKind::lexer(&self.source[self.cursor..]);

        loop {
            let Some(result) = lexer.next() else {
                self.cursor = self.source.len();
                return Ok(Spanned {
                    token: Token::End,
                    span: self.cursor..self.cursor,
                });
            };

            let span = lexer.span().start + self.cursor..lexer.span().end + self.cursor;
            match result {
                Ok(RawKind::Whitespace) => continue,
                Ok(raw) => {
                    let token = read_token(raw, lexer.slice(), span.clone())?;
                    self.cursor = span.end;
                    return Ok(Spanned { token, span });
                },
                Err(()) => {
                    // report a single character, even if the lexer skipped more
                    let character = self.source[span.start..].chars().next().unwrap_or('\0');
                    let span = span.start..span.start + character.len_utf8();
                    return Err(Error::new(vec![span], kind::UnexpectedCharacter { character }));
                },
            }
        }
    }

    /// Reads the next token without advancing the cursor.
    ///
    /// The parser itself never needs lookahead, since unary minus is marked in the source text
    /// beforehand. This is for callers that drive a [`Tokenizer`] by hand.
    pub fn peek_token(&self) -> Result<Spanned, Error> {
        self.clone().next_token()
    }
}

/// Returns all of the tokens in the given source, excluding the final [`Token::End`].
pub fn tokenize_complete(source: &str) -> Result<Vec<Spanned>, Error> {
    let mut tokenizer = Tokenizer::new(source);
    let mut tokens = Vec::new();

    loop {
        let spanned = tokenizer.next_token()?;
        if spanned.token == Token::End {
            return Ok(tokens);
        }
        tokens.push(spanned);
    }
}

/// Interprets a raw lexeme as a token.
fn read_token(raw: RawKind, lexeme: &str, span: Range<usize>) -> Result<Token, Error> {
    Ok(match raw {
        RawKind::Number => {
            let value = read_number(lexeme);
            if !value.is_finite() {
                let digits = lexeme.chars().filter(char::is_ascii_digit).count();
                return Err(Error::new(vec![span], kind::NumberOutOfRange { digits }));
            }
            Token::Constant(value)
        },
        RawKind::Name => read_name(lexeme)
            .ok_or_else(|| Error::new(vec![span], kind::UnknownName { name: lexeme.to_string() }))?,
        RawKind::OpenParen => Token::OpenParen,
        RawKind::CloseParen => Token::CloseParen,
        RawKind::Add => Token::BinOp(BinOpKind::Add),
        RawKind::Sub => Token::BinOp(BinOpKind::Sub),
        RawKind::Mul => Token::BinOp(BinOpKind::Mul),
        RawKind::Div => Token::BinOp(BinOpKind::Div),
        RawKind::Exp => Token::BinOp(BinOpKind::Pow),
        RawKind::Neg => Token::Neg,
        RawKind::Whitespace => unreachable!("whitespace is skipped before interpretation"),
    })
}

/// Computes the value of a number lexeme: every digit accumulates into an integer, which is then
/// divided by ten for each digit after the decimal point.
fn read_number(lexeme: &str) -> f64 {
    let mut value = 0.0;
    let mut divisor = 1.0;
    let mut fractional = false;

    for c in lexeme.chars() {
        match c.to_digit(10) {
            Some(digit) => {
                value = 10.0 * value + f64::from(digit);
                if fractional {
                    divisor *= 10.0;
                }
            },
            None => fractional = true,
        }
    }

    value / divisor
}

/// Interprets a run of letters as a named constant, a variable, or a function, in that order.
fn read_name(name: &str) -> Option<Token> {
    if name.eq_ignore_ascii_case("e") {
        Some(Token::Constant(consts::E))
    } else if name.eq_ignore_ascii_case("pi") {
        Some(Token::Constant(consts::PI))
    } else if let [symbol] = name.as_bytes() {
        Some(Token::Variable(char::from(*symbol)))
    } else {
        Func::from_name(name).map(Token::Func)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    /// Compares the tokens produced by the tokenizer to the expected tokens.
    fn compare_tokens<const N: usize>(input: &str, expected: [Token; N]) {
        let tokens = tokenize_complete(input)
            .unwrap()
            .into_iter()
            .map(|spanned| spanned.token)
            .collect::<Vec<_>>();
        assert_eq!(tokens, expected.to_vec());
    }

    #[test]
    fn basic_expr() {
        compare_tokens(
            "1 + 2",
            [
                Token::Constant(1.0),
                Token::BinOp(BinOpKind::Add),
                Token::Constant(2.0),
            ],
        );
    }

    #[test]
    fn functions_and_constants() {
        compare_tokens(
            "SIN(pi) * Ln(E) - log(x)",
            [
                Token::Func(Func::Sin),
                Token::OpenParen,
                Token::Constant(consts::PI),
                Token::CloseParen,
                Token::BinOp(BinOpKind::Mul),
                Token::Func(Func::Ln),
                Token::OpenParen,
                Token::Constant(consts::E),
                Token::CloseParen,
                Token::BinOp(BinOpKind::Sub),
                Token::Func(Func::Log10),
                Token::OpenParen,
                Token::Variable('x'),
                Token::CloseParen,
            ],
        );
    }

    #[test]
    fn variables_keep_case() {
        compare_tokens("X^y", [Token::Variable('X'), Token::BinOp(BinOpKind::Pow), Token::Variable('y')]);
    }

    #[test]
    fn number_values() {
        compare_tokens(
            "12.5 .25 7. .",
            [
                Token::Constant(12.5),
                Token::Constant(0.25),
                Token::Constant(7.0),
                Token::Constant(0.0),
            ],
        );
    }

    #[test]
    fn tabs_are_whitespace() {
        compare_tokens("\tx\t~\t", [Token::Variable('x'), Token::Neg]);
    }

    #[test]
    fn spans() {
        let tokens = tokenize_complete("  ln").unwrap();
        assert_eq!(tokens, vec![Spanned { token: Token::Func(Func::Ln), span: 2..4 }]);
    }

    #[test]
    fn peek_does_not_advance() {
        let mut tokenizer = Tokenizer::new("x + 1");
        let peeked = tokenizer.peek_token().unwrap();
        assert_eq!(tokenizer.cursor(), 0);

        let read = tokenizer.next_token().unwrap();
        assert_eq!(peeked, read);
        assert_eq!(tokenizer.cursor(), 1);

        assert_eq!(tokenizer.next_token().unwrap().token, Token::BinOp(BinOpKind::Add));
        assert_eq!(tokenizer.next_token().unwrap().token, Token::Constant(1.0));
        assert_eq!(tokenizer.next_token().unwrap().token, Token::End);
        assert_eq!(tokenizer.next_token().unwrap().token, Token::End);
    }

    #[test]
    fn end_of_empty_input() {
        let mut tokenizer = Tokenizer::new("   ");
        assert_eq!(tokenizer.next_token().unwrap(), Spanned { token: Token::End, span: 3..3 });
    }

    #[test]
    fn unknown_character() {
        let err = tokenize_complete("2 # 3").unwrap_err();
        assert_eq!(err.spans, vec![2..3]);
        assert_eq!(
            err.downcast_ref::<kind::UnexpectedCharacter>(),
            Some(&kind::UnexpectedCharacter { character: '#' }),
        );
    }

    #[test]
    fn unknown_name() {
        let err = tokenize_complete("1 + xy").unwrap_err();
        assert_eq!(err.spans, vec![4..6]);
        assert_eq!(
            err.downcast_ref::<kind::UnknownName>(),
            Some(&kind::UnknownName { name: "xy".to_string() }),
        );
    }

    #[test]
    fn overflowing_number() {
        let literal = format!("1{}", "0".repeat(400));
        let input = format!("x + {}", literal);
        let err = tokenize_complete(&input).unwrap_err();
        assert_eq!(err.spans, vec![4..input.len()]);
        assert_eq!(
            err.downcast_ref::<kind::NumberOutOfRange>(),
            Some(&kind::NumberOutOfRange { digits: literal.len() }),
        );
    }

    #[test]
    fn long_fraction_is_out_of_range() {
        let err = tokenize_complete(&format!("0.{}", "9".repeat(400))).unwrap_err();
        assert!(err.is::<kind::NumberOutOfRange>());
    }

    #[test]
    fn largest_numbers_are_accepted() {
        let digits = "9".repeat(300);
        let tokens = tokenize_complete(&digits).unwrap();
        assert!(matches!(tokens[0].token, Token::Constant(value) if value.is_finite() && value > 1e299));
    }

    #[test]
    fn function_prefix_is_not_a_function() {
        let err = tokenize_complete("co(x)").unwrap_err();
        assert!(err.is::<kind::UnknownName>());
    }
}
