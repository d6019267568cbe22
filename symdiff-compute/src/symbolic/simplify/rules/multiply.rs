//! Simplification rules for multiplication.

use crate::symbolic::{
    simplify::{rules::do_multiply, step::Step},
    step_collector::StepCollector,
};
use symdiff_parser::parser::expr::Expr;

/// `1*a = a`
/// `a*1 = a`
pub fn multiply_one(expr: Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Expr> {
    let rewritten = do_multiply(expr, |lhs, rhs| {
        if lhs.is_constant(1.0) {
            Ok(*rhs)
        } else if rhs.is_constant(1.0) {
            Ok(*lhs)
        } else {
            Err((lhs, rhs))
        }
    })?;

    // only reached once the rewrite is known to apply
    step_collector.push(Step::MultiplyOne);
    Ok(rewritten)
}

/// `0*a = 0`
/// `a*0 = 0`
///
/// Both factors are discarded, even if the other factor could not be evaluated.
pub fn multiply_zero(expr: Expr, step_collector: &mut dyn StepCollector<Step>) -> Result<Expr, Expr> {
    let rewritten = do_multiply(expr, |lhs, rhs| {
        if lhs.is_constant(0.0) || rhs.is_constant(0.0) {
            Ok(Expr::Constant(0.0))
        } else {
            Err((lhs, rhs))
        }
    })?;

    step_collector.push(Step::MultiplyZero);
    Ok(rewritten)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;
    use symdiff_parser::parser::parse;

    #[test]
    fn one_on_either_side() {
        let mut steps = Vec::new();
        assert_eq!(multiply_one(parse("1 * sin(x)").unwrap(), &mut steps), Ok(parse("sin(x)").unwrap()));
        assert_eq!(multiply_one(parse("(x + y) * 1").unwrap(), &mut steps), Ok(parse("x + y").unwrap()));
        assert_eq!(steps, vec![Step::MultiplyOne, Step::MultiplyOne]);
    }

    #[test]
    fn one_times_one() {
        assert_eq!(multiply_one(parse("1 * 1").unwrap(), &mut ()), Ok(Expr::Constant(1.0)));
    }

    #[test]
    fn surviving_factor_is_moved() {
        let expr = parse("(x + y) * 1").unwrap();
        let inner: *const Expr = expr.left().and_then(Expr::left).unwrap();

        let rewritten = multiply_one(expr, &mut ()).unwrap();
        assert!(std::ptr::eq(rewritten.left().unwrap(), inner));
    }

    #[test]
    fn zero_discards_both_factors() {
        assert_eq!(multiply_zero(parse("0 * (x + 1)").unwrap(), &mut ()), Ok(Expr::Constant(0.0)));
        assert_eq!(multiply_zero(parse("ln(x) * 0").unwrap(), &mut ()), Ok(Expr::Constant(0.0)));
    }

    #[test]
    fn not_applicable() {
        let mut steps = Vec::new();
        for source in ["2 * x", "1 + x", "1.0000001 * x"] {
            let expr = parse(source).unwrap();
            assert_eq!(multiply_one(expr.clone(), &mut steps), Err(expr.clone()));
            assert_eq!(multiply_zero(expr.clone(), &mut steps), Err(expr));
        }
        assert!(steps.is_empty());
    }

    #[test]
    fn nested_factors_are_not_inspected() {
        // the inner product is a separate node
        let expr = parse("x * (1 * y)").unwrap();
        assert_eq!(multiply_one(expr.clone(), &mut ()), Err(expr));
    }
}
