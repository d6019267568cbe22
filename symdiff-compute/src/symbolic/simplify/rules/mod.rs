//! The simplification rules.
//!
//! Each rule in this module is a function that takes ownership of the expression to simplify, and
//! returns `Ok(expr)` with the rewritten expression if the rule applies, or `Err(expr)` giving the
//! untouched expression back if it does not. Rewrites move the surviving operands out of the
//! node, so subtrees are never copied. Rules only look at the node they are given and its direct
//! children; the simplifier is responsible for visiting every node.

pub mod add;
pub mod multiply;

use crate::symbolic::step_collector::StepCollector;
use super::step::Step;
use symdiff_parser::parser::{expr::Expr, token::op::BinOpKind};

/// The signature shared by every rule.
pub type Rule = fn(Expr, &mut dyn StepCollector<Step>) -> Result<Expr, Expr>;

/// The operands of a binary operation, handed back by a transformation that does not apply.
pub(crate) type Operands = (Box<Expr>, Box<Expr>);

/// If the expression is a binary operation with the given operator, calls the given
/// transformation function with the left and right-hand-side operands.
///
/// If the transformation gives the operands back, the operation is rebuilt from them and returned
/// as `Err`.
pub(crate) fn do_binary(
    expr: Expr,
    op: BinOpKind,
    f: impl FnOnce(Box<Expr>, Box<Expr>) -> Result<Expr, Operands>,
) -> Result<Expr, Expr> {
    match expr {
        Expr::Binary { op: target, lhs, rhs } if target == op => {
            f(lhs, rhs).map_err(|(lhs, rhs)| Expr::Binary { op, lhs, rhs })
        },
        expr => Err(expr),
    }
}

/// If the expression is a multiplication, calls the given transformation function with the two
/// factors.
pub(crate) fn do_multiply(
    expr: Expr,
    f: impl FnOnce(Box<Expr>, Box<Expr>) -> Result<Expr, Operands>,
) -> Result<Expr, Expr> {
    do_binary(expr, BinOpKind::Mul, f)
}

/// If the expression is an addition, calls the given transformation function with the two terms.
pub(crate) fn do_add(
    expr: Expr,
    f: impl FnOnce(Box<Expr>, Box<Expr>) -> Result<Expr, Operands>,
) -> Result<Expr, Expr> {
    do_binary(expr, BinOpKind::Add, f)
}
