//! The token model shared by the tokenizer, the parser, and the expression writer.

pub mod func;
pub mod op;

use func::Func;
use op::{Associativity, BinOpKind, Precedence};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single lexical unit of an expression.
///
/// Only [`Token::Constant`] carries a value and only [`Token::Variable`] carries a symbol; every
/// other kind carries nothing.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Token {
    /// A number, such as `2` or `3.5`, or a named constant such as `pi`.
    Constant(f64),

    /// A single-letter variable, such as `x`.
    Variable(char),

    /// A binary operator.
    BinOp(BinOpKind),

    /// Unary minus.
    Neg,

    /// A built-in function name.
    Func(Func),

    /// `(`
    OpenParen,

    /// `)`
    CloseParen,

    /// The end of the input.
    End,
}

impl Token {
    /// Returns true if the token is a constant or a variable.
    pub fn is_operand(&self) -> bool {
        matches!(self, Self::Constant(_) | Self::Variable(_))
    }

    /// Returns true if the token is a binary operator or unary minus.
    pub fn is_operator(&self) -> bool {
        matches!(self, Self::BinOp(_) | Self::Neg)
    }

    /// Returns true if the token is a built-in function.
    pub fn is_function(&self) -> bool {
        matches!(self, Self::Func(_))
    }

    /// Returns true if the token is a unary operator.
    pub fn is_unary(&self) -> bool {
        matches!(self, Self::Neg)
    }

    /// Returns true if the token is a binary operator.
    pub fn is_binary(&self) -> bool {
        self.is_operator() && !self.is_unary()
    }

    /// Returns the number of operands the token consumes.
    pub fn arity(&self) -> usize {
        match self {
            Self::BinOp(_) => 2,
            Self::Neg | Self::Func(_) => 1,
            _ => 0,
        }
    }

    /// Returns the precedence of the token, or [`None`] if it is not an operator.
    pub fn precedence(&self) -> Option<Precedence> {
        match self {
            Self::BinOp(op) => Some(op.precedence()),
            Self::Neg => Some(Precedence::Power),
            _ => None,
        }
    }

    /// Returns the associativity of the token, or [`None`] if it is not an operator.
    pub fn associativity(&self) -> Option<Associativity> {
        match self {
            Self::BinOp(op) => Some(op.associativity()),
            Self::Neg => Some(Associativity::Right),
            _ => None,
        }
    }

    /// Returns true if the token is a right-associative operator.
    pub fn is_right_associative(&self) -> bool {
        self.associativity() == Some(Associativity::Right)
    }

    /// Returns true if the token is a left-associative operator.
    pub fn is_left_associative(&self) -> bool {
        self.associativity() == Some(Associativity::Left)
    }
}
