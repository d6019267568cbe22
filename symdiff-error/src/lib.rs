//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that pairs a kind with the regions of source it points at.

// lets `#[derive(ErrorKind)]` be used inside this crate's own tests
extern crate self as symdiff_error;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Returns the error kind as [`Any`], so that callers can recover the concrete kind.
    fn as_any(&self) -> &dyn Any;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
///
/// Errors raised on values that carry no source information (such as evaluating an expression
/// tree) have no spans; their reports contain only the message and help text.
#[derive(Debug)]
pub struct Error {
    /// The regions of the source code that this error originated from.
    pub spans: Vec<Range<usize>>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl Error {
    /// Creates a new error with the given spans and kind.
    pub fn new(spans: Vec<Range<usize>>, kind: impl ErrorKind + 'static) -> Self {
        Self { spans, kind: Box::new(kind) }
    }

    /// Creates a new error that does not point at any source code.
    pub fn spanless(kind: impl ErrorKind + 'static) -> Self {
        Self::new(Vec::new(), kind)
    }

    /// Returns the concrete kind of this error, if it is a `T`.
    pub fn downcast_ref<T: ErrorKind + 'static>(&self) -> Option<&T> {
        self.kind.as_any().downcast_ref::<T>()
    }

    /// Returns true if the kind of this error is a `T`.
    pub fn is<T: ErrorKind + 'static>(&self) -> bool {
        self.downcast_ref::<T>().is_some()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Report this error to stderr, highlighting the given input.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) {
        // a failed write to stderr leaves nowhere else to report to
        let _ = self.build_report(src_id).eprint((src_id, Source::from(input)));
    }

    /// Renders the report for this error into a string, including any ANSI color codes.
    pub fn render(&self, src_id: &str, input: &str) -> String {
        let mut buf = Vec::new();
        let _ = self.build_report(src_id).write((src_id, Source::from(input)), &mut buf);
        String::from_utf8_lossy(&buf).into_owned()
    }
}

#[cfg(test)]
mod tests {
    use ariadne::Fmt;
    use super::*;
    use symdiff_attrs::ErrorKind;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(
        message = "something went wrong",
        labels = ["right here"],
        help = format!("try writing an {} instead", "expression".fg(EXPR)),
    )]
    struct Mistake;

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = format!("`{}` is not allowed", symbol))]
    struct NotAllowed {
        symbol: char,
    }

    #[derive(Debug, Clone, ErrorKind, PartialEq)]
    #[error(message = format!("`{}` needs {} operands", op, count))]
    #[error(labels = [String::new(), format!("operand {}", count)], help = "add the missing operand")]
    struct Arity {
        op: char,
        count: usize,
    }

    #[test]
    fn report_contains_message_and_label() {
        let err = Error::new(vec![2..5], Mistake);
        let rendered = strip_ansi_escapes::strip_str(err.render("input", "1 + abc"));
        assert!(rendered.contains("something went wrong"));
        assert!(rendered.contains("right here"));
        assert!(rendered.contains("try writing an expression instead"));
    }

    #[test]
    fn spanless_report() {
        let err = Error::spanless(NotAllowed { symbol: '$' });
        let rendered = strip_ansi_escapes::strip_str(err.render("input", "$"));
        assert!(rendered.contains("`$` is not allowed"));
    }

    #[test]
    fn tags_across_attributes() {
        let err = Error::new(vec![0..1, 4..5], Arity { op: '+', count: 2 });
        let rendered = strip_ansi_escapes::strip_str(err.render("input", "+ x y"));
        assert!(rendered.contains("`+` needs 2 operands"));
        assert!(rendered.contains("operand 2"));
        assert!(rendered.contains("add the missing operand"));
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1], NotAllowed { symbol: 'q' });
        assert!(err.is::<NotAllowed>());
        assert!(!err.is::<Mistake>());
        assert_eq!(err.downcast_ref::<NotAllowed>(), Some(&NotAllowed { symbol: 'q' }));
    }
}
