use super::{ctxt::Ctxt, error::{kind, Error}};
use symdiff_parser::parser::{
    expr::Expr,
    token::{func::Func, op::BinOpKind},
};

/// Any type that can be evaluated to produce a value.
pub trait Eval {
    /// Evaluate the expression to produce a value, using the given context.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error>;

    /// Evaluate the expression to produce a value, using an empty context.
    fn eval_default(&self) -> Result<f64, Error> {
        self.eval(&Ctxt::default())
    }
}

/// Applies a binary operator.
fn eval_binary(op: BinOpKind, left: f64, right: f64) -> Result<f64, Error> {
    Ok(match op {
        BinOpKind::Add => left + right,
        BinOpKind::Sub => left - right,
        BinOpKind::Mul => left * right,
        BinOpKind::Div => {
            if right == 0.0 {
                return Err(Error::spanless(kind::DivisionByZero));
            }
            left / right
        },
        BinOpKind::Pow => left.powf(right),
    })
}

/// Applies a built-in function.
fn eval_call(func: Func, value: f64) -> Result<f64, Error> {
    let in_domain = match func {
        Func::Sqrt => value >= 0.0,
        Func::Log10 | Func::Ln => value > 0.0,
        Func::Sin | Func::Cos | Func::Tan => true,
    };
    if !in_domain {
        return Err(Error::spanless(kind::DomainError { func, value }));
    }

    Ok(match func {
        Func::Sqrt => value.sqrt(),
        Func::Log10 => value.log10(),
        Func::Ln => value.ln(),
        Func::Sin => value.sin(),
        Func::Cos => value.cos(),
        Func::Tan => value.tan(),
    })
}

/// Pops an operand off the value stack. The post-order traversal always pushes the operands of a
/// node before visiting the node itself.
fn pop(stack: &mut Vec<f64>) -> f64 {
    match stack.pop() {
        Some(value) => value,
        None => unreachable!("operands are evaluated before their operator"),
    }
}

impl Eval for Expr {
    /// Evaluates the tree with an explicit value stack, visiting nodes in post-order.
    fn eval(&self, ctxt: &Ctxt) -> Result<f64, Error> {
        let mut stack: Vec<f64> = Vec::new();

        for expr in self.post_order_iter() {
            let value = match expr {
                Expr::Constant(value) => *value,
                Expr::Variable(symbol) => ctxt.get(*symbol)
                    .ok_or_else(|| Error::spanless(kind::UndefinedVariable { symbol: *symbol }))?,
                Expr::Binary { op, .. } => {
                    let right = pop(&mut stack);
                    let left = pop(&mut stack);
                    eval_binary(*op, left, right)?
                },
                Expr::Neg(_) => -pop(&mut stack),
                Expr::Call { func, .. } => eval_call(*func, pop(&mut stack))?,
            };
            stack.push(value);
        }

        Ok(pop(&mut stack))
    }
}

/// Eval tests depend on the parser, so ensure that parser tests pass before running these.
#[cfg(test)]
mod tests {
    use assert_float_eq::{afe_abs, afe_relative_error_msg, afe_is_relative_eq, assert_float_relative_eq};
    use pretty_assertions::assert_eq;
    use super::*;
    use symdiff_parser::parser::parse;

    #[test]
    fn binary_expr() {
        assert_eq!(parse("1 + 2").unwrap().eval_default().unwrap(), 3.0);
        assert_eq!(parse("1 + 2 * 3").unwrap().eval_default().unwrap(), 7.0);
        assert_eq!(parse("((1 + 9) / 5) * 3").unwrap().eval_default().unwrap(), 6.0);
    }

    #[test]
    fn associativity() {
        assert_eq!(parse("2 - 3 - 4").unwrap().eval_default().unwrap(), -5.0);
        assert_eq!(parse("2 ^ 3 ^ 2").unwrap().eval_default().unwrap(), 512.0);
        assert_eq!(parse("-2 ^ 2").unwrap().eval_default().unwrap(), -4.0);
        assert_eq!(parse("2 ^ -1").unwrap().eval_default().unwrap(), 0.5);
    }

    #[test]
    fn functions_and_constants() {
        assert_float_relative_eq!(parse("sin(pi / 2)").unwrap().eval_default().unwrap(), 1.0);
        assert_float_relative_eq!(parse("ln(e ^ 3)").unwrap().eval_default().unwrap(), 3.0);
        assert_float_relative_eq!(parse("log(1000)").unwrap().eval_default().unwrap(), 3.0);
        assert_float_relative_eq!(parse("sqrt(2) * sqrt(2)").unwrap().eval_default().unwrap(), 2.0);
        assert_float_relative_eq!(parse("tan(0.5) * cos(0.5)").unwrap().eval_default().unwrap(), 0.5f64.sin());
    }

    #[test]
    fn variables() {
        let expr = parse("x * y - x").unwrap();
        let mut ctxt = Ctxt::from_expr(&expr);
        assert_eq!(expr.eval(&ctxt).unwrap(), 0.0);

        ctxt.set('x', 4.0);
        ctxt.set('y', 2.5);
        assert_eq!(expr.eval(&ctxt).unwrap(), 6.0);
    }

    #[test]
    fn undefined_variable() {
        let err = parse("x + y").unwrap().eval_default().unwrap_err();
        assert!(err.spans.is_empty());
        assert_eq!(err.downcast_ref::<kind::UndefinedVariable>(), Some(&kind::UndefinedVariable { symbol: 'x' }));
    }

    #[test]
    fn division_by_zero() {
        let mut ctxt = Ctxt::new();
        ctxt.set('x', 1.0);
        let err = parse("1 / (x - 1)").unwrap().eval(&ctxt).unwrap_err();
        assert!(err.is::<kind::DivisionByZero>());
    }

    #[test]
    fn domain_errors() {
        let cases = [("sqrt(-1)", Func::Sqrt), ("ln(0)", Func::Ln), ("log(-2)", Func::Log10)];
        for (source, func) in cases {
            let err = parse(source).unwrap().eval_default().unwrap_err();
            assert_eq!(err.downcast_ref::<kind::DomainError>().map(|err| err.func), Some(func), "{source}");
        }

        assert_eq!(parse("sqrt(0)").unwrap().eval_default().unwrap(), 0.0);
    }

    #[test]
    fn deep_tree() {
        // deeper than the parser allows, so built by hand
        let expr = (0..1000).fold(Expr::Variable('x'), |expr, _| Expr::neg(expr));
        let mut ctxt = Ctxt::new();
        ctxt.set('x', 2.0);
        assert_eq!(expr.eval(&ctxt).unwrap(), 2.0);
    }
}
