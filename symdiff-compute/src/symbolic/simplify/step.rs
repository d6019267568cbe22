/// A rewrite applied by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Step {
    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,
}

impl std::fmt::Display for Step {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Step::MultiplyOne => write!(f, "remove multiplication by one"),
            Step::MultiplyZero => write!(f, "replace multiplication by zero with zero"),
            Step::AddZero => write!(f, "remove addition of zero"),
        }
    }
}
