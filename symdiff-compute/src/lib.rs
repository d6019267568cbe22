//! Differentiation, simplification, and numerical evaluation of expression trees produced by
//! [`symdiff_parser`].
//!
//! - [`symbolic`] manipulates trees algebraically: [`symbolic::differentiate`] builds a new tree
//!   for the partial derivative of an expression, and [`symbolic::simplify`] rewrites a tree in
//!   place to remove the redundancy that differentiation leaves behind.
//! - [`numerical`] evaluates a tree to an [`f64`], given values for its variables.
//!
//! ```
//! use symdiff_compute::{numerical::{ctxt::Ctxt, eval::Eval}, symbolic::{differentiate, simplify}};
//! use symdiff_parser::parser::parse;
//!
//! let expr = parse("x^2").unwrap();
//! let mut derivative = differentiate(&expr, 'x');
//! simplify(&mut derivative);
//!
//! let mut ctxt = Ctxt::from_expr(&expr);
//! ctxt.set('x', 3.0);
//! assert_eq!(derivative.eval(&ctxt).unwrap(), 6.0);
//! ```

pub mod numerical;
pub mod symbolic;
