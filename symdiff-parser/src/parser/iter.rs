use super::expr::Expr;

/// An iterator that iteratively traverses the tree of expressions in left-to-right post-order
/// (i.e. depth-first).
///
/// This iterator is created by [`Expr::post_order_iter`].
pub struct ExprIter<'a> {
    stack: Vec<&'a Expr>,
    last_visited: Option<&'a Expr>,
}

impl<'a> ExprIter<'a> {
    /// Creates a new iterator that traverses the tree of expressions in left-to-right post-order
    /// (i.e. depth-first).
    pub fn new(expr: &'a Expr) -> Self {
        Self {
            stack: vec![expr],
            last_visited: None,
        }
    }

    /// Pops the current expression in the stack and marks it as the last visited expression.
    fn visit(&mut self) -> Option<&'a Expr> {
        self.last_visited = Some(self.stack.pop()?);
        self.last_visited
    }

    /// Returns true if the given expression matches the last visited expression.
    fn is_last_visited(&self, expr: &'a Expr) -> bool {
        match self.last_visited {
            Some(last_visited) => std::ptr::eq(last_visited, expr),
            None => false,
        }
    }
}

impl<'a> Iterator for ExprIter<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let expr = *self.stack.last()?;
            match expr {
                Expr::Constant(_) | Expr::Variable(_) => return self.visit(),
                Expr::Binary { lhs, rhs, .. } => {
                    if self.is_last_visited(rhs) {
                        return self.visit();
                    }
                    self.stack.push(rhs);
                    self.stack.push(lhs);
                },
                Expr::Neg(operand) | Expr::Call { arg: operand, .. } => {
                    if self.is_last_visited(operand) {
                        return self.visit();
                    }
                    self.stack.push(operand);
                },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::token::{func::Func, op::BinOpKind};
    use super::*;

    #[test]
    fn post_order() {
        // cos(2 - x)
        let expr = Expr::call(
            Func::Cos,
            Expr::binary(BinOpKind::Sub, Expr::Constant(2.0), Expr::Variable('x')),
        );
        let tokens = expr.post_order_iter().map(Expr::token).collect::<Vec<_>>();
        assert_eq!(tokens, vec![
            expr.left().unwrap().left().unwrap().token(),
            expr.left().unwrap().right().unwrap().token(),
            expr.left().unwrap().token(),
            expr.token(),
        ]);
    }
}
