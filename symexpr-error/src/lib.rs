//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages, and the [`Error`] type that ties a kind to the regions of source code it came from.

// lets the `ErrorKind` derive macro refer to this crate by name from within it
extern crate self as symexpr_error;

pub use ariadne;

use ariadne::{Color, Report, Source};
use std::{any::Any, fmt::{self, Debug}, io::{self, Write}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
///
/// This trait is usually derived with `symexpr_attrs::ErrorKind`.
pub trait ErrorKind: Debug + Send + Sync {
    /// Returns `self` as [`Any`], to allow downcasting to the concrete error kind.
    fn as_any(&self) -> &dyn Any;

    /// The one-line message describing this error.
    fn message(&self) -> String;

    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)>;
}

/// An error associated with regions of source code that can be highlighted.
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

    /// Returns true if the kind of this error is `K`.
    pub fn is<K: ErrorKind + 'static>(&self) -> bool {
        self.kind.as_any().is::<K>()
    }

    /// Returns a reference to the kind of this error if it is `K`.
    pub fn downcast_ref<K: ErrorKind + 'static>(&self) -> Option<&K> {
        self.kind.as_any().downcast_ref::<K>()
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<(&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.spans)
    }

    /// Writes the report of this error to the given writer, using `input` as the source code the
    /// spans point into.
    pub fn write_report<W: Write>(&self, src_id: &str, input: &str, writer: W) -> io::Result<()> {
        self.build_report(src_id).write((src_id, Source::from(input)), writer)
    }

    /// Report this error to stderr.
    ///
    /// The `ariadne` crate's [`Report`] type does not have a `Display` implementation, so we can
    /// only use its `eprint` method to print to stderr.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.build_report(src_id).eprint((src_id, Source::from(input)))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.message())
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;
    use symexpr_attrs::ErrorKind;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = "unexpected end of file",
        labels = ["you might need to add another expression here"],
    )]
    struct UnexpectedEof;

    #[derive(Debug, ErrorKind)]
    #[error(
        message = format!("`{}` is not defined", self.name),
        labels = ["this variable"],
        help = format!("did you mean `{}`?", self.suggestion),
    )]
    struct Undefined {
        name: String,
        suggestion: String,
    }

    /// Renders the report of the error without any terminal colors.
    fn render(err: &Error, input: &str) -> String {
        let mut buf = Vec::new();
        err.write_report("input", input, &mut buf).unwrap();
        strip_ansi_escapes::strip_str(String::from_utf8(buf).unwrap())
    }

    #[test]
    fn display_uses_message() {
        let err = Error::new(vec![3..3], UnexpectedEof);
        assert_eq!(err.to_string(), "unexpected end of file");
    }

    #[test]
    fn downcast_kind() {
        let err = Error::new(vec![0..1], Undefined {
            name: "z".to_string(),
            suggestion: "x".to_string(),
        });
        assert!(err.is::<Undefined>());
        assert!(!err.is::<UnexpectedEof>());
        assert_eq!(err.downcast_ref::<Undefined>().unwrap().name, "z");
    }

    #[test]
    fn report_contains_labels_and_help() {
        let err = Error::new(vec![4..5], Undefined {
            name: "z".to_string(),
            suggestion: "x".to_string(),
        });
        let report = render(&err, "(x +z)");
        assert!(report.contains("`z` is not defined"));
        assert!(report.contains("this variable"));
        assert!(report.contains("did you mean `x`?"));
    }

    #[test]
    fn report_without_spans() {
        let err = Error::new(vec![], UnexpectedEof);
        let report = render(&err, "");
        assert!(report.contains("unexpected end of file"));
    }
}
