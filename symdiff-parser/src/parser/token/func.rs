//! The built-in single-argument functions.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A built-in function of one argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Func {
    /// Square root, written `sqrt`.
    Sqrt,

    /// Base-10 logarithm, written `log`.
    Log10,

    /// Natural logarithm, written `ln`.
    Ln,

    /// Sine, written `sin`.
    Sin,

    /// Cosine, written `cos`.
    Cos,

    /// Tangent, written `tan`.
    Tan,
}

impl Func {
    /// Every built-in function, in the order names are matched against.
    pub const ALL: [Func; 6] = [Func::Sqrt, Func::Log10, Func::Ln, Func::Sin, Func::Cos, Func::Tan];

    /// Returns the name the function is written with.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sqrt => "sqrt",
            Self::Log10 => "log",
            Self::Ln => "ln",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
        }
    }

    /// Looks up the function whose name equals the whole of `name`, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|func| func.name().eq_ignore_ascii_case(name))
    }
}

impl std::fmt::Display for Func {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
