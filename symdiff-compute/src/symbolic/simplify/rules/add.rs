//! Simplification rules for addition.

use crate::symbolic::{
    simplify::{rules::do_add, step::Step},
    step_collector::StepCollector,
};
use symdiff_parser::parser::expr::Expr;

/// `0+a = a`
/// `a+0 = a`
pub fn add_zero(expr: Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Expr> {
    let rewritten = do_add(expr, |lhs, rhs| {
        if lhs.is_constant(0.0) {
            Ok(*rhs)
        } else if rhs.is_constant(0.0) {
            Ok(*lhs)
        } else {
            Err((lhs, rhs))
        }
    })?;

    step_collector.push(Step::AddZero);
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use symdiff_parser::parser::{parse, token::op::BinOpKind};

    #[test]
    fn zero_on_either_side() {
        assert_eq!(add_zero(parse("0 + x").unwrap(), &mut ()), Ok(Expr::Variable('x')));
        assert_eq!(add_zero(parse("x ^ 2 + 0").unwrap(), &mut ()), Ok(parse("x ^ 2").unwrap()));
    }

    #[test]
    fn negative_zero_is_zero() {
        let expr = Expr::binary(BinOpKind::Add, Expr::Variable('x'), Expr::Constant(-0.0));
        assert_eq!(add_zero(expr, &mut ()), Ok(Expr::Variable('x')));
    }

    #[test]
    fn subtraction_is_untouched() {
        let mut steps = Vec::new();
        for source in ["x - 0", "0 * x"] {
            let expr = parse(source).unwrap();
            assert_eq!(add_zero(expr.clone(), &mut steps), Err(expr));
        }
        assert!(steps.is_empty());
    }
}
