use symdiff_parser::parser::expr::Expr;

/// The values of the variables used to evaluate an expression.
///
/// Variables are kept in the order they were added, which for [`Ctxt::from_expr`] is the order
/// they first appear in the expression.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ctxt {
    /// The variables in the context.
    vars: Vec<(char, f64)>,
}

impl Ctxt {
    /// Creates a new empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context containing every variable in the expression, each set to `0`.
    pub fn from_expr(expr: &Expr) -> Self {
        Self {
            vars: expr.variables()
                .into_iter()
                .map(|symbol| (symbol, 0.0))
                .collect(),
        }
    }

    /// Sets the value of a variable, adding it to the end of the context if it is not already
    /// present.
    pub fn set(&mut self, symbol: char, value: f64) {
        match self.vars.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, v)) => *v = value,
            None => self.vars.push((symbol, value)),
        }
    }

    /// Returns the value of a variable in the context.
    pub fn get(&self, symbol: char) -> Option<f64> {
        self.vars.iter()
            .find(|(s, _)| *s == symbol)
            .map(|(_, value)| *value)
    }

    /// Returns the variables in the context, in order.
    pub fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.vars.iter().map(|(symbol, _)| *symbol)
    }

    /// Returns the variables and their values, in order.
    pub fn iter(&self) -> impl Iterator<Item = (char, f64)> + '_ {
        self.vars.iter().copied()
    }

    /// Returns the number of variables in the context.
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Returns true if the context has no variables.
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
