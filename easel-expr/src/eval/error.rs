//! Typed faults reported by [`evaluate_strict`](super::evaluate_strict).
//!
//! The default evaluator is fail-soft and never surfaces these; strict mode records the first one
//! encountered, pointing at the offending character range of the source.

use ariadne::{Fmt, Label, Report, ReportKind};
use easel_error::{ErrorKind, EXPR};
use crate::tokenizer::TokenKind;
use std::ops::Range;

/// Builds a single-label report in the shape shared by every fault kind.
fn report<'a>(
    src_id: &'a str,
    span: &Range<usize>,
    message: String,
    label: String,
    help: Option<String>,
) -> Report<'a, (&'a str, Range<usize>)> {
    let mut builder = Report::build(ReportKind::Error, src_id, span.start)
        .with_message(message)
        .with_label(
            Label::new((src_id, span.clone()))
                .with_color(EXPR)
                .with_message(label),
        );
    if let Some(help) = help {
        builder.set_help(help);
    }
    builder.finish()
}

/// The end of the expression was reached while a value was still expected.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedEof;

impl ErrorKind for UnexpectedEof {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: &Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            span,
            "unexpected end of expression".to_string(),
            format!("you might need to add another {} here", "value".fg(EXPR)),
            None,
        )
    }
}

/// A token appeared where a value was expected.
#[derive(Debug, Clone, PartialEq)]
pub struct UnexpectedToken {
    /// The token that was found.
    pub found: TokenKind,
}

impl ErrorKind for UnexpectedToken {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: &Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            span,
            "unexpected token".to_string(),
            format!("expected a {} here", "value".fg(EXPR)),
            Some(format!("found {:?}", self.found)),
        )
    }
}

/// An identifier that is not a known variable, constant, or function.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownSymbol {
    /// The identifier that was found.
    pub name: String,
}

impl ErrorKind for UnknownSymbol {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: &Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            span,
            format!("unknown symbol: `{}`", self.name),
            "here".to_string(),
            Some(format!(
                "known symbols are {}, {}, {}, and the functions sin, cos, tan, sqrt, abs, log, ln",
                "x".fg(EXPR),
                "pi".fg(EXPR),
                "e".fg(EXPR),
            )),
        )
    }
}

/// An opening parenthesis was never closed.
#[derive(Debug, Clone, PartialEq)]
pub struct UnclosedParenthesis;

impl ErrorKind for UnclosedParenthesis {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: &Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            span,
            "unclosed parenthesis".to_string(),
            "this parenthesis is not closed".to_string(),
            Some("add a closing parenthesis `)` somewhere after this".to_string()),
        )
    }
}

/// Input remained after a complete expression was evaluated.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailingInput;

impl ErrorKind for TrailingInput {
    fn build_report<'a>(
        &self,
        src_id: &'a str,
        span: &Range<usize>,
    ) -> Report<'a, (&'a str, Range<usize>)> {
        report(
            src_id,
            span,
            "expected end of expression".to_string(),
            "I could not understand the remaining input here".to_string(),
            None,
        )
    }
}
