//! The shunting-yard parser.
//!
//! Parsing happens in three steps:
//!
//! 1. [`mark_unary_minus`] rewrites every `-` that cannot be a subtraction into `~`, the unary
//!    minus marker, so the tokenizer never has to guess.
//! 2. [`to_postfix`] reorders the token stream into postfix order using an operator stack.
//! 3. [`assemble`] builds the [`Expr`] tree from the postfix tokens using a node stack.
//!
//! Any malformed input fails the whole parse with an [`Error`]; a partially built tree is never
//! returned.

pub mod error;
pub mod expr;
pub mod fmt;
pub mod iter;
pub mod token;

use crate::tokenizer::{Spanned, Tokenizer};
use error::{kind, Error};
use expr::Expr;
use std::{collections::VecDeque, ops::Range};
use token::{func::Func, op::BinOpKind, Token};
use tracing::debug;

/// The maximum depth of a parsed expression tree.
///
/// Differentiation, simplification and formatting recurse over the tree, and a derivative can be
/// several times deeper than its input. At this depth the whole pipeline runs comfortably on a
/// 2 MiB thread stack.
pub const MAX_DEPTH: usize = 1 << 8;

/// Parses the given expression text into an expression tree.
pub fn parse(source: &str) -> Result<Expr, Error> {
    let marked = mark_unary_minus(source)?;
    let postfix = to_postfix(&marked)?;
    let expr = assemble(postfix, source.len())?;
    debug!(nodes = expr.node_count(), "parsed expression");
    Ok(expr)
}

/// Returns true if the character is one of the operator symbols, including the unary minus
/// marker.
fn is_operator_symbol(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '~' | '^')
}

/// Rewrites each `-` that is the first non-whitespace character, or that directly follows `(` or
/// an operator symbol (ignoring whitespace), into the unary minus marker `~`.
///
/// The rewrite is one ASCII character for another, so byte offsets into the result are valid
/// offsets into `source`. A `~` already present in `source` is rejected, since it is reserved
/// for this rewrite.
pub fn mark_unary_minus(source: &str) -> Result<String, Error> {
    if let Some(start) = source.find('~') {
        return Err(Error::new(vec![start..start + 1], kind::UnexpectedCharacter { character: '~' }));
    }

    let mut previous = None;
    Ok(source.chars()
        .map(|c| {
            if c == ' ' || c == '\t' {
                return c;
            }

            let c = match previous {
                None | Some('(') => if c == '-' { '~' } else { c },
                Some(p) if is_operator_symbol(p) && c == '-' => '~',
                _ => c,
            };
            previous = Some(c);
            c
        })
        .collect())
}

/// An entry of the operator stack: anything that waits for its operands to be output first.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Pending {
    Operator(Postfix),
    OpenParen,
}

impl Pending {
    /// Returns true if this entry, sitting on top of the operator stack, must be output before
    /// the `incoming` operator is pushed.
    ///
    /// Functions always are. Otherwise the top is output if it binds tighter than `incoming`, or
    /// equally tight and left-associative. An open parenthesis never is.
    fn outranks(self, incoming: Postfix) -> bool {
        let Self::Operator(top) = self else {
            return false;
        };
        if let Postfix::Func(_) = top {
            return true;
        }

        let (top, incoming) = (top.token(), incoming.token());
        match (top.precedence(), incoming.precedence()) {
            (Some(top_prec), Some(incoming_prec)) => top_prec > incoming_prec
                || (top_prec == incoming_prec && top.is_left_associative()),
            _ => false,
        }
    }
}

/// An entry of the postfix output queue.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Postfix {
    Constant(f64),
    Variable(char),
    BinOp(BinOpKind),
    Neg,
    Func(Func),
}

impl Postfix {
    /// Returns the token this entry was created from.
    pub fn token(self) -> Token {
        match self {
            Self::Constant(value) => Token::Constant(value),
            Self::Variable(symbol) => Token::Variable(symbol),
            Self::BinOp(op) => Token::BinOp(op),
            Self::Neg => Token::Neg,
            Self::Func(func) => Token::Func(func),
        }
    }
}

/// The state of the shunting-yard algorithm: the output queue and the operator stack.
#[derive(Debug, Default)]
struct ShuntingYard {
    output: VecDeque<(Postfix, Range<usize>)>,
    operators: Vec<(Pending, Range<usize>)>,
}

impl ShuntingYard {
    /// Pushes an operator, first outputting every stacked operator that outranks it.
    fn push_operator(&mut self, operator: Postfix, span: Range<usize>) {
        while let Some((Pending::Operator(top), _)) = self.operators.last() {
            if !Pending::Operator(*top).outranks(operator) {
                break;
            }
            let top = *top;
            if let Some((_, top_span)) = self.operators.pop() {
                self.output.push_back((top, top_span));
            }
        }
        self.operators.push((Pending::Operator(operator), span));
    }

    /// Outputs operators until the matching open parenthesis, which is discarded.
    fn close_paren(&mut self, span: Range<usize>) -> Result<(), Error> {
        loop {
            match self.operators.pop() {
                Some((Pending::OpenParen, _)) => return Ok(()),
                Some((Pending::Operator(top), top_span)) => self.output.push_back((top, top_span)),
                None => return Err(Error::new(vec![span], kind::UnclosedParenthesis { opening: false })),
            }
        }
    }

    /// Feeds one token into the algorithm.
    fn push(&mut self, Spanned { token, span }: Spanned) -> Result<(), Error> {
        match token {
            Token::Constant(value) => self.output.push_back((Postfix::Constant(value), span)),
            Token::Variable(symbol) => self.output.push_back((Postfix::Variable(symbol), span)),
            Token::Func(func) => self.operators.push((Pending::Operator(Postfix::Func(func)), span)),
            Token::BinOp(op) => self.push_operator(Postfix::BinOp(op), span),
            Token::Neg => self.push_operator(Postfix::Neg, span),
            Token::OpenParen => self.operators.push((Pending::OpenParen, span)),
            Token::CloseParen => self.close_paren(span)?,
            Token::End => (),
        }
        Ok(())
    }

    /// Outputs the remaining operators and returns the output queue.
    fn finish(mut self) -> Result<VecDeque<(Postfix, Range<usize>)>, Error> {
        while let Some((top, span)) = self.operators.pop() {
            match top {
                Pending::Operator(top) => self.output.push_back((top, span)),
                Pending::OpenParen => {
                    return Err(Error::new(vec![span], kind::UnclosedParenthesis { opening: true }));
                },
            }
        }
        Ok(self.output)
    }
}

/// Converts the (unary-minus-marked) source into postfix order with the shunting-yard algorithm.
/// Each entry keeps the span of the token it came from.
pub fn to_postfix(source: &str) -> Result<VecDeque<(Postfix, Range<usize>)>, Error> {
    let mut tokenizer = Tokenizer::new(source);
    let mut yard = ShuntingYard::default();

    loop {
        let spanned = tokenizer.next_token()?;
        if spanned.token == Token::End {
            return yard.finish();
        }
        yard.push(spanned)?;
    }
}

/// A partially assembled subtree on the node stack.
struct Node {
    expr: Expr,

    /// The region of the source the subtree covers.
    span: Range<usize>,

    /// The depth of the subtree; a leaf has depth 1.
    depth: usize,
}

impl Node {
    /// Creates a leaf node.
    fn leaf(expr: Expr, span: Range<usize>) -> Self {
        Self { expr, span, depth: 1 }
    }

    /// Computes the span and depth of a node whose operator is at `span` and whose children are
    /// described by `children`, failing if the depth exceeds [`MAX_DEPTH`].
    fn extent(span: Range<usize>, children: &[(&Range<usize>, usize)]) -> Result<(Range<usize>, usize), Error> {
        let start = children.iter().map(|(child, _)| child.start).fold(span.start, usize::min);
        let end = children.iter().map(|(child, _)| child.end).fold(span.end, usize::max);
        let depth = 1 + children.iter().map(|(_, depth)| *depth).max().unwrap_or(0);
        if depth > MAX_DEPTH {
            return Err(Error::new(vec![start..end], kind::NestingTooDeep { limit: MAX_DEPTH }));
        }
        Ok((start..end, depth))
    }
}

/// Pops an operand for the operator at `span` off the node stack.
fn pop_operand(nodes: &mut Vec<Node>, span: &Range<usize>) -> Result<Node, Error> {
    nodes.pop().ok_or_else(|| Error::new(vec![span.clone()], kind::MissingOperand))
}

/// Builds the expression tree from tokens in postfix order. `source_len` is used to point at the
/// whole input if it turns out to be empty.
pub fn assemble(postfix: VecDeque<(Postfix, Range<usize>)>, source_len: usize) -> Result<Expr, Error> {
    let mut nodes: Vec<Node> = Vec::new();

    for (postfix, span) in postfix {
        let node = match postfix {
            Postfix::Constant(value) => Node::leaf(Expr::Constant(value), span),
            Postfix::Variable(symbol) => Node::leaf(Expr::Variable(symbol), span),
            Postfix::BinOp(op) => {
                // the right operand is on top of the stack
                let rhs = pop_operand(&mut nodes, &span)?;
                let lhs = pop_operand(&mut nodes, &span)?;
                let (span, depth) = Node::extent(span, &[(&lhs.span, lhs.depth), (&rhs.span, rhs.depth)])?;
                Node { expr: Expr::binary(op, lhs.expr, rhs.expr), span, depth }
            },
            Postfix::Neg => {
                let operand = pop_operand(&mut nodes, &span)?;
                let (span, depth) = Node::extent(span, &[(&operand.span, operand.depth)])?;
                Node { expr: Expr::neg(operand.expr), span, depth }
            },
            Postfix::Func(func) => {
                let arg = pop_operand(&mut nodes, &span)?;
                let (span, depth) = Node::extent(span, &[(&arg.span, arg.depth)])?;
                Node { expr: Expr::call(func, arg.expr), span, depth }
            },
        };
        nodes.push(node);
    }

    let root = nodes.pop().ok_or_else(|| Error::new(vec![0..source_len], kind::EmptyExpression))?;
    if let Some(extra) = nodes.pop() {
        return Err(Error::new(vec![extra.span], kind::MissingOperator));
    }
    Ok(root.expr)
}
