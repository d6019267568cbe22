/// A type that records the steps an algorithm takes.
///
/// [`StepCollector`] is also implemented for the unit type `()`, which discards every step. Use it
/// when only the result of the algorithm matters.
pub trait StepCollector<S> {
    /// Records a step.
    fn push(&mut self, step: S);
}

impl<S> StepCollector<S> for () {
    #[inline]
    fn push(&mut self, _: S) {}
}

impl<S> StepCollector<S> for Vec<S> {
    #[inline]
    fn push(&mut self, step: S) {
        Vec::push(self, step);
    }
}
