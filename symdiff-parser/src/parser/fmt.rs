//! Infix rendering of expression trees.
//!
//! Every binary operation is wrapped in parentheses, so the output never depends on precedence
//! rules to be read back correctly:
//!
//! - `a + b` is written `(a + b)`, and likewise for `-`, `*` and `/`;
//! - `a ^ b` is written `(a)^(b)`;
//! - negation is written `-a`;
//! - function calls are written `sin(a)`.

use std::fmt::{Display, Formatter, Result};
use super::{expr::Expr, token::op::BinOpKind};

impl Display for Expr {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            Self::Constant(value) => write!(f, "{}", value),
            Self::Variable(symbol) => write!(f, "{}", symbol),
            Self::Binary { op: BinOpKind::Pow, lhs, rhs } => write!(f, "({})^({})", lhs, rhs),
            Self::Binary { op, lhs, rhs } => write!(f, "({} {} {})", lhs, op.symbol(), rhs),
            Self::Neg(operand) => write!(f, "-{}", operand),
            Self::Call { func, arg } => write!(f, "{}({})", func, arg),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::parse;
    use super::*;

    #[test]
    fn fmt_binary() {
        let expr = parse("1 + 2 * x").unwrap();
        assert_eq!(expr.to_string(), "(1 + (2 * x))");
    }

    #[test]
    fn fmt_power_and_neg() {
        let expr = parse("-x ^ 2").unwrap();
        assert_eq!(expr.to_string(), "-(x)^(2)");
    }

    #[test]
    fn fmt_functions() {
        let expr = parse("sqrt(x) / LOG(10.5)").unwrap();
        assert_eq!(expr.to_string(), "(sqrt(x) / log(10.5))");
    }

    #[test]
    fn fmt_reparses_to_same_tree() {
        for source in [
            "2 - 3 - 4",
            "2 ^ 3 ^ 2",
            "-2 ^ 2",
            "a - -b",
            "(x + 1) * -(y - 2) / tan(z)",
            "e ^ (pi * x) - ln(-x)",
        ] {
            let expr = parse(source).unwrap();
            let reparsed = parse(&expr.to_string()).unwrap();
            assert_eq!(expr, reparsed, "`{}` was written as `{}`", source, expr);
        }
    }
}
