use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;
use symdiff_parser::parser::token::func::Func;

/// The right-hand side of a division evaluated to zero.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "division by zero",
    help = "the divisor must be nonzero at the given values",
)]
pub struct DivisionByZero;

/// A function was applied to a value outside of its domain.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is undefined for the value {}", func, value),
    help = match func {
        Func::Sqrt => format!("the argument to {} must not be negative", "sqrt".fg(EXPR)),
        _ => format!("the argument to {} must be positive", func.name().fg(EXPR)),
    },
)]
pub struct DomainError {
    /// The function that was applied.
    pub func: Func,

    /// The argument it was applied to.
    pub value: f64,
}

/// The variable has no value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("`{}` is not defined", symbol),
    help = format!("give {} a value before evaluating", symbol.fg(EXPR)),
)]
pub struct UndefinedVariable {
    /// The variable that was undefined.
    pub symbol: char,
}
