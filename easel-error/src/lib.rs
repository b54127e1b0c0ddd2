//! Contains the common [`ErrorKind`] trait used by all errors to display user-facing error
//! messages.

use ariadne::{Color, Report};
use std::{fmt::Debug, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur during some operation.
pub trait ErrorKind: Debug + Send {
    /// Builds the report for this error.
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: &Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)>;
}

/// An error associated with a region of source code that can be highlighted.
#[derive(Debug)]
pub struct Error {
    /// The region of the source code that this error originated from.
    pub span: Range<usize>,

    /// The kind of error that occurred.
    pub kind: Box<dyn ErrorKind>,
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        // `kind` is type-erased, so compare kinds through their `Debug` output,
        // which renders every field of the concrete kind.
        self.span == other.span && format!("{:?}", self.kind) == format!("{:?}", other.kind)
    }
}

impl Error {
    /// Creates a new error with the given span and kind.
    pub fn new(span: Range<usize>, kind: impl ErrorKind + 'static) -> Self {
        Self { span, kind: Box::new(kind) }
    }

    /// Build a report from this error kind.
    pub fn build_report<'a>(&self, src_id: &'a str) -> Report<'a, (&'a str, Range<usize>)> {
        self.kind.build_report(src_id, &self.span)
    }
}
