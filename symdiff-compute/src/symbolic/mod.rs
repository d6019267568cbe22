//! Algebraic manipulation of expressions.
//!
//! # Differentiation
//!
//! [`differentiate()`] computes the partial derivative of an expression with respect to one
//! variable, using the sum, difference, product, quotient, and chain rules. Powers are always
//! differentiated with the general rule obtained by logarithmic differentiation, even when the
//! exponent is constant:
//!
//! ```text
//! (f^g)' = f^(g - 1) * (g * f' + f * g' * ln(f))
//! ```
//!
//! The input is never modified and the output shares no nodes with it, so the same expression
//! can be differentiated with respect to each of its variables in turn.
//!
//! The derivative is returned exactly as the rules build it, which is usually full of
//! multiplications by `0` and `1`:
//!
//! ```
//! use symdiff_compute::symbolic::differentiate;
//! use symdiff_parser::parser::parse;
//!
//! let derivative = differentiate(&parse("3 * x").unwrap(), 'x');
//! assert_eq!(derivative.to_string(), "((3 * 1) + (0 * x))");
//! ```
//!
//! # Simplification
//!
//! [`simplify()`] cleans such trees up by applying a small set of rewrite rules until none of them
//! apply anymore. Each rule is a function that takes ownership of an
//! [`Expr`](symdiff_parser::parser::expr::Expr) and returns a `Result`: `Ok` with the rewritten
//! expression if the rule applies, which then replaces the original in the tree, or `Err` with the
//! original expression if it does not.
//!
//! The rules are defined in [`simplify::rules`], and cover multiplication by one, multiplication
//! by zero, and addition of zero. Every rule strictly shrinks the tree, so simplification always
//! terminates.
//!
//! ```
//! use symdiff_compute::symbolic::{differentiate, simplify};
//! use symdiff_parser::parser::parse;
//!
//! let mut derivative = differentiate(&parse("3 * x").unwrap(), 'x');
//! simplify(&mut derivative);
//! assert_eq!(derivative.to_string(), "3");
//! ```
//!
//! For more information, see the [`mod@simplify`] module.

pub mod derivative;
pub mod simplify;
pub mod step_collector;

pub use derivative::differentiate;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
