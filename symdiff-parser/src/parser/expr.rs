//! The expression tree produced by the parser and consumed by every later stage.
//!
//! Each node wraps one [`Token`] kind, and which child slots it uses is fixed by that kind:
//!
//! | kind                    | left                | right               |
//! | ----------------------- | ------------------- | ------------------- |
//! | binary operator         | first operand       | second operand      |
//! | unary minus             | -                   | operand             |
//! | function                | argument            | -                   |
//! | constant / variable     | -                   | -                   |
//!
//! The tree is a plain owned value: [`Clone`] produces a fully independent deep copy, and
//! discarded subtrees are freed when dropped.

use super::{
    iter::ExprIter,
    token::{func::Func, op::BinOpKind, Token},
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of an expression tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A numeric constant.
    Constant(f64),

    /// A single-letter variable.
    Variable(char),

    /// A binary operation, such as `x + 1`.
    Binary {
        /// The operator.
        op: BinOpKind,

        /// The left-hand side.
        lhs: Box<Expr>,

        /// The right-hand side.
        rhs: Box<Expr>,
    },

    /// Unary negation, such as `-x`.
    Neg(Box<Expr>),

    /// A built-in function applied to one argument, such as `sin(x)`.
    Call {
        /// The function.
        func: Func,

        /// The argument.
        arg: Box<Expr>,
    },
}

impl Expr {
    /// Creates a binary operation node.
    pub fn binary(op: BinOpKind, lhs: Expr, rhs: Expr) -> Self {
        Self::Binary { op, lhs: Box::new(lhs), rhs: Box::new(rhs) }
    }

    /// Creates a negation node.
    pub fn neg(operand: Expr) -> Self {
        Self::Neg(Box::new(operand))
    }

    /// Creates a function call node.
    pub fn call(func: Func, arg: Expr) -> Self {
        Self::Call { func, arg: Box::new(arg) }
    }

    /// Returns the token this node was built from.
    pub fn token(&self) -> Token {
        match self {
            Self::Constant(value) => Token::Constant(*value),
            Self::Variable(symbol) => Token::Variable(*symbol),
            Self::Binary { op, .. } => Token::BinOp(*op),
            Self::Neg(_) => Token::Neg,
            Self::Call { func, .. } => Token::Func(*func),
        }
    }

    /// Returns the left child: the first operand of a binary operation, or the argument of a
    /// function.
    pub fn left(&self) -> Option<&Expr> {
        match self {
            Self::Binary { lhs, .. } => Some(lhs),
            Self::Call { arg, .. } => Some(arg),
            _ => None,
        }
    }

    /// Returns the right child: the second operand of a binary operation, or the operand of a
    /// negation.
    pub fn right(&self) -> Option<&Expr> {
        match self {
            Self::Binary { rhs, .. } => Some(rhs),
            Self::Neg(operand) => Some(operand),
            _ => None,
        }
    }

    /// Returns mutable references to the children of this node, in left-to-right order.
    pub fn children_mut(&mut self) -> Vec<&mut Expr> {
        match self {
            Self::Constant(_) | Self::Variable(_) => Vec::new(),
            Self::Binary { lhs, rhs, .. } => vec![&mut **lhs, &mut **rhs],
            Self::Neg(operand) => vec![&mut **operand],
            Self::Call { arg, .. } => vec![&mut **arg],
        }
    }

    /// Returns true if this node is a constant exactly equal to `value`.
    pub fn is_constant(&self, value: f64) -> bool {
        matches!(self, Self::Constant(c) if *c == value)
    }

    /// Returns an iterator that traverses the tree in left-to-right post-order.
    pub fn post_order_iter(&self) -> ExprIter<'_> {
        ExprIter::new(self)
    }

    /// Returns the distinct variables in the tree, in order of first occurrence from left to
    /// right.
    pub fn variables(&self) -> Vec<char> {
        let mut symbols = Vec::new();
        for expr in self.post_order_iter() {
            if let Self::Variable(symbol) = expr {
                if !symbols.contains(symbol) {
                    symbols.push(*symbol);
                }
            }
        }
        symbols
    }

    /// Returns the number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.post_order_iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expr {
        // sin(y) * -x + y
        Expr::binary(
            BinOpKind::Add,
            Expr::binary(
                BinOpKind::Mul,
                Expr::call(Func::Sin, Expr::Variable('y')),
                Expr::neg(Expr::Variable('x')),
            ),
            Expr::Variable('y'),
        )
    }

    #[test]
    fn child_slots() {
        let neg = Expr::neg(Expr::Variable('x'));
        assert_eq!(neg.left(), None);
        assert_eq!(neg.right(), Some(&Expr::Variable('x')));

        let call = Expr::call(Func::Tan, Expr::Constant(1.0));
        assert_eq!(call.left(), Some(&Expr::Constant(1.0)));
        assert_eq!(call.right(), None);

        let leaf = Expr::Constant(3.0);
        assert_eq!(leaf.left(), None);
        assert_eq!(leaf.right(), None);
        assert_eq!(leaf.token(), Token::Constant(3.0));
    }

    #[test]
    fn variables_in_first_occurrence_order() {
        assert_eq!(sample().variables(), vec!['y', 'x']);
    }

    #[test]
    fn deep_copy_is_independent() {
        let original = sample();
        let mut copy = original.clone();
        for child in copy.children_mut() {
            *child = Expr::Constant(0.0);
        }
        assert_eq!(original, sample());
        assert_ne!(original, copy);
    }

    #[test]
    fn count_nodes() {
        assert_eq!(sample().node_count(), 7);
    }

    #[test]
    fn constant_comparison_is_exact() {
        assert!(Expr::Constant(1.0).is_constant(1.0));
        assert!(Expr::Constant(-0.0).is_constant(0.0));
        assert!(!Expr::Constant(1.0 + f64::EPSILON).is_constant(1.0));
        assert!(!Expr::Variable('x').is_constant(0.0));
    }
}
