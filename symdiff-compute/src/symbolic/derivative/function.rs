//! Derivatives of the built-in functions, with the chain rule applied.

use super::{bin, differentiate, num};
use symdiff_parser::parser::{
    expr::Expr,
    token::{func::Func, op::BinOpKind},
};

/// Computes the derivative of `func(arg)` with respect to `with`.
pub(super) fn function_derivative(func: Func, arg: &Expr, with: char) -> Expr {
    let darg = differentiate(arg, with);

    match func {
        // f' / (2 * sqrt(f))
        Func::Sqrt => bin(
            BinOpKind::Div,
            darg,
            bin(BinOpKind::Mul, num(2.0), Expr::call(Func::Sqrt, arg.clone())),
        ),
        // f' / (ln(10) * f)
        Func::Log10 => bin(
            BinOpKind::Div,
            darg,
            bin(BinOpKind::Mul, Expr::call(Func::Ln, num(10.0)), arg.clone()),
        ),
        // f' / f
        Func::Ln => bin(BinOpKind::Div, darg, arg.clone()),
        // cos(f) * f'
        Func::Sin => bin(BinOpKind::Mul, Expr::call(Func::Cos, arg.clone()), darg),
        // -sin(f) * f'
        Func::Cos => bin(
            BinOpKind::Mul,
            Expr::neg(Expr::call(Func::Sin, arg.clone())),
            darg,
        ),
        // f' / cos(f)^2
        Func::Tan => bin(
            BinOpKind::Div,
            darg,
            bin(BinOpKind::Pow, Expr::call(Func::Cos, arg.clone()), num(2.0)),
        ),
    }
}
