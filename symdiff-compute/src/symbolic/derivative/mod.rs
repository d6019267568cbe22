//! Symbolic partial derivatives.

mod function;

use symdiff_parser::parser::{expr::Expr, token::{func::Func, op::BinOpKind}};

/// Shorthand for a constant node.
fn num(value: f64) -> Expr {
    Expr::Constant(value)
}

/// Shorthand for a binary node.
fn bin(op: BinOpKind, lhs: Expr, rhs: Expr) -> Expr {
    Expr::binary(op, lhs, rhs)
}

/// `(f * g)' = f * g' + f' * g`
fn product_rule(f: &Expr, g: &Expr, with: char) -> Expr {
    bin(
        BinOpKind::Add,
        bin(BinOpKind::Mul, f.clone(), differentiate(g, with)),
        bin(BinOpKind::Mul, differentiate(f, with), g.clone()),
    )
}

/// `(f / g)' = (g * f' - f * g') / g^2`
fn quotient_rule(f: &Expr, g: &Expr, with: char) -> Expr {
    bin(
        BinOpKind::Div,
        bin(
            BinOpKind::Sub,
            bin(BinOpKind::Mul, g.clone(), differentiate(f, with)),
            bin(BinOpKind::Mul, f.clone(), differentiate(g, with)),
        ),
        bin(BinOpKind::Pow, g.clone(), num(2.0)),
    )
}

/// `(f^g)' = f^(g - 1) * (g * f' + f * g' * ln(f))`
///
/// This is the general rule from logarithmic differentiation. It is used even when the exponent
/// is constant, in which case the `ln(f)` term is multiplied by zero and removed by the
/// simplifier.
fn power_rule(f: &Expr, g: &Expr, with: char) -> Expr {
    bin(
        BinOpKind::Mul,
        bin(BinOpKind::Pow, f.clone(), bin(BinOpKind::Sub, g.clone(), num(1.0))),
        bin(
            BinOpKind::Add,
            bin(BinOpKind::Mul, g.clone(), differentiate(f, with)),
            bin(
                BinOpKind::Mul,
                bin(BinOpKind::Mul, f.clone(), differentiate(g, with)),
                Expr::call(Func::Ln, f.clone()),
            ),
        ),
    )
}

/// Computes the partial derivative of the given expression with respect to the variable `with`.
///
/// The input is not modified, and the returned tree shares no nodes with it. No simplification is
/// done; pass the result to [`simplify`](crate::symbolic::simplify()) to clean it up.
///
/// Recursion depth is the depth of `f`, which is bounded for trees produced by
/// [`parse`](symdiff_parser::parser::parse).
pub fn differentiate(f: &Expr, with: char) -> Expr {
    match f {
        Expr::Constant(_) => num(0.0),
        Expr::Variable(symbol) => num(if *symbol == with { 1.0 } else { 0.0 }),
        Expr::Binary { op, lhs, rhs } => match op {
            BinOpKind::Add | BinOpKind::Sub => bin(*op, differentiate(lhs, with), differentiate(rhs, with)),
            BinOpKind::Mul => product_rule(lhs, rhs, with),
            BinOpKind::Div => quotient_rule(lhs, rhs, with),
            BinOpKind::Pow => power_rule(lhs, rhs, with),
        },
        Expr::Neg(operand) => Expr::neg(differentiate(operand, with)),
        Expr::Call { func, arg } => function::function_derivative(*func, arg, with),
    }
}
