use ariadne::Fmt;
use symdiff_attrs::ErrorKind;
use symdiff_error::EXPR;
use crate::parser::token::func::Func;

/// A character that does not start any token.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected character `{}`", character),
    labels = ["this character"],
    help = format!(
        "expressions may only contain numbers, letters, whitespace, and {}",
        "+ - * / ^ ( )".fg(EXPR),
    ),
)]
pub struct UnexpectedCharacter {
    /// The character that was found.
    pub character: char,
}

/// A run of letters that is not a constant, a variable, or a function.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown name `{}`", name),
    labels = ["this name"],
    help = format!(
        "variables are single letters; the available functions are: {}",
        Func::ALL.iter().map(|func| func.name()).collect::<Vec<_>>().join(", ").fg(EXPR),
    ),
)]
pub struct UnknownName {
    /// The letters that were found.
    pub name: String,
}

/// A number literal whose value cannot be represented as a finite floating-point number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "number is out of range",
    labels = [format!("this has {} digits", digits)],
    help = "numbers must have a finite value; try writing fewer digits",
)]
pub struct NumberOutOfRange {
    /// The number of digits in the literal.
    pub digits: usize,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// An operator or function did not have enough operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operand",
    labels = [format!("this needs another {}", "expression".fg(EXPR))],
)]
pub struct MissingOperand;

/// Two expressions were written next to each other without an operator between them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator",
    labels = ["I could not connect this to the rest of the expression"],
    help = format!("write an operator such as {} explicitly", "*".fg(EXPR)),
)]
pub struct MissingOperator;

/// The input contained no tokens at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = [format!("add an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// The expression is nested too deeply to be processed safely.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expression is nested too deeply",
    labels = [format!("this exceeds the limit of {} levels", limit)],
    help = "split the expression into smaller parts",
)]
pub struct NestingTooDeep {
    /// The maximum depth allowed.
    pub limit: usize,
}
