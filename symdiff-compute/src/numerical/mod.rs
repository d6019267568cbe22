//! Numerical evaluation of expression trees.
//!
//! Trees are evaluated to [`f64`] with [`eval::Eval`], using a [`ctxt::Ctxt`] to supply the value
//! of each variable.

pub mod ctxt;
pub mod error;
pub mod eval;
