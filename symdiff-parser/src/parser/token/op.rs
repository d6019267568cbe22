//! Operator kinds, and their precedence and associativity.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operation that is being performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOpKind {
    /// Returns the precedence of the binary operation.
    pub fn precedence(&self) -> Precedence {
        match self {
            Self::Pow => Precedence::Power,
            Self::Mul | Self::Div => Precedence::Factor,
            Self::Add | Self::Sub => Precedence::Term,
        }
    }

    /// Returns the associativity of the binary operation.
    pub fn associativity(&self) -> Associativity {
        match self {
            Self::Pow => Associativity::Right,
            Self::Mul | Self::Div | Self::Add | Self::Sub => Associativity::Left,
        }
    }

    /// Returns the character used to write this operator.
    pub fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

/// The associativity of a binary or unary operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// The operation is left-associative: `a op b op c` is evaluated as `(a op b) op c`.
    Left,

    /// The operation is right-associative: `a op b op c` is evaluated as `a op (b op c)`. For
    /// unary operations, this means `op op a` is evaluated as `op (op a)`.
    Right,
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term = 2,

    /// Precedence of multiplication (`*`) and division (`/`), which separate factors.
    Factor = 3,

    /// Precedence of exponentiation (`^`) and unary negation, which share a level.
    Power = 4,
}

impl Precedence {
    /// Returns the numeric level of this precedence. Higher levels bind tighter.
    pub fn level(self) -> u8 {
        self as u8
    }
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Precedence {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.level().cmp(&other.level())
    }
}
