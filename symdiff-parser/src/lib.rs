//! Parsing of single-line arithmetic expressions into expression trees.
//!
//! The grammar is small: decimal numbers, the constants `e` and `pi`, single-letter variables,
//! the functions `sqrt`, `log`, `ln`, `sin`, `cos` and `tan`, the binary operators
//! `+ - * / ^`, unary minus, and parentheses. Names are case-insensitive and whitespace is
//! ignored.
//!
//! ```
//! use symdiff_parser::parser::{parse, expr::Expr, token::op::BinOpKind};
//!
//! let expr = parse("2 ^ 3 ^ 2").unwrap();
//! assert_eq!(expr, Expr::binary(
//!     BinOpKind::Pow,
//!     Expr::Constant(2.0),
//!     Expr::binary(BinOpKind::Pow, Expr::Constant(3.0), Expr::Constant(2.0)),
//! ));
//! ```

pub mod parser;
pub mod tokenizer;
