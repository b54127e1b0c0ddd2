//! The fail-soft recursive-descent evaluator.
//!
//! The grammar, lowest to highest precedence:
//!
//! ```text
//! expr   := term (('+'|'-') term)*
//! term   := power (('*'|'/') power)*
//! power  := factor ('^' factor)*
//! factor := '-' factor | '(' expr ')' | ident ['(' expr ')'] | number
//! ```
//!
//! Parsing and evaluation happen in a single pass: each grammar rule is a method on [`Evaluator`]
//! that consumes tokens and returns the numeric value of what it consumed. Anything the evaluator
//! cannot make sense of contributes `0.0` at the point of failure, and the surrounding expression
//! keeps evaluating. Tokens that cannot be attached to the expression are left where they are, so
//! the operator scans above simply stop there.
//!
//! Two quirks of the plotting tool are preserved on purpose rather than fixed:
//!
//! - division by zero leaves the dividend unchanged, so `1/0 == 1`;
//! - the `^` chain is evaluated left to right, so `2^3^2 == (2^3)^2 == 64`.

pub mod error;

use easel_error::{Error, ErrorKind};
use crate::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// Evaluates the expression with the free variable bound to `x`.
///
/// This function is total: it never panics and never errors. The result may be any `f64`,
/// including NaN or infinities when the math itself leaves the real domain (`log` of a
/// non-positive value, overflowing `^`, and so on).
pub fn evaluate(source: &str, x: f64) -> f64 {
    Evaluator::new(source, x).finish().0
}

/// Evaluates the expression like [`evaluate`], but reports the first syntactic fault as a typed
/// [`Error`] spanning the offending characters.
///
/// The traversal is identical to the fail-soft one; only the reporting differs. Intended for
/// diagnostics and tests. Math that leaves the real domain is not a fault.
pub fn evaluate_strict(source: &str, x: f64) -> Result<f64, Error> {
    let (value, fault) = Evaluator::new(source, x).finish();
    match fault {
        Some(fault) => Err(fault),
        None => Ok(value),
    }
}

/// The evaluator state: a token slice, an explicit cursor into it, and the binding for `x`.
///
/// Threading the cursor through the struct (rather than sharing a mutable position between
/// recursive calls) keeps the evaluator reentrant; every recursive rule below is a plain method
/// call.
#[derive(Debug)]
pub struct Evaluator<'source> {
    /// The tokens being evaluated, with whitespace already stripped.
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be consumed.
    cursor: usize,

    /// The value bound to the free variable `x`.
    x: f64,

    /// The first fault encountered, if any. Only surfaced in strict mode.
    fault: Option<Error>,
}

impl<'source> Evaluator<'source> {
    /// Creates an evaluator for the given source with `x` bound to the given value.
    pub fn new(source: &'source str, x: f64) -> Self {
        let tokens = tokenize_complete(source)
            .into_vec()
            .into_iter()
            .filter(|token| !token.is_whitespace())
            .collect();
        Self { tokens, cursor: 0, x, fault: None }
    }

    /// Evaluates the whole expression, returning its value and the first recorded fault.
    ///
    /// Trailing tokens that were never consumed do not affect the value, but are recorded as a
    /// fault for strict mode.
    pub fn finish(mut self) -> (f64, Option<Error>) {
        let value = self.expr();
        if self.cursor < self.tokens.len() {
            let span = self.span();
            self.record(span, error::TrailingInput);
        }
        (value, self.fault)
    }

    /// Returns a span pointing at the end of the source code.
    fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.end..token.span.end)
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the kind of the current token. The cursor is not moved.
    fn peek(&self) -> Option<TokenKind> {
        self.tokens.get(self.cursor).map(|token| token.kind)
    }

    /// Returns the current token and advances the cursor, or [`None`] at the end of the stream.
    fn next_token(&mut self) -> Option<Token<'source>> {
        let token = self.tokens.get(self.cursor)?.clone();
        self.cursor += 1;
        Some(token)
    }

    /// Records the first fault and returns the degraded value, `0.0`.
    fn record(&mut self, span: Range<usize>, kind: impl ErrorKind + 'static) -> f64 {
        if self.fault.is_none() {
            self.fault = Some(Error::new(span, kind));
        }
        0.0
    }

    /// `expr := term (('+'|'-') term)*`
    fn expr(&mut self) -> f64 {
        let mut left = self.term();
        while let Some(op @ (TokenKind::Add | TokenKind::Sub)) = self.peek() {
            self.cursor += 1;
            let right = self.term();
            match op {
                TokenKind::Add => left += right,
                _ => left -= right,
            }
        }
        left
    }

    /// `term := power (('*'|'/') power)*`
    fn term(&mut self) -> f64 {
        let mut left = self.power();
        while let Some(op @ (TokenKind::Mul | TokenKind::Div)) = self.peek() {
            self.cursor += 1;
            let right = self.power();
            match op {
                TokenKind::Mul => left *= right,
                // dividing by zero leaves the dividend unchanged
                _ if right != 0.0 => left /= right,
                _ => {},
            }
        }
        left
    }

    /// `power := factor ('^' factor)*`
    ///
    /// The chain is applied left to right: `a^b^c` is `(a^b)^c`.
    fn power(&mut self) -> f64 {
        let mut left = self.factor();
        while self.peek() == Some(TokenKind::Exp) {
            self.cursor += 1;
            let right = self.factor();
            left = left.powf(right);
        }
        left
    }

    /// `factor := '-' factor | '(' expr ')' | ident ['(' expr ')'] | number`
    fn factor(&mut self) -> f64 {
        let Some(token) = self.next_token() else {
            let span = self.eof_span();
            return self.record(span, error::UnexpectedEof);
        };

        match token.kind {
            TokenKind::Sub => -self.factor(),
            TokenKind::OpenParen => {
                let value = self.expr();
                self.close_paren(token.span);
                value
            },
            TokenKind::Name => self.name(token),
            TokenKind::Int | TokenKind::Float => token.lexeme.parse().unwrap_or(0.0),
            _ => {
                // leave the token in place; the operator scans above stop at it
                self.cursor -= 1;
                self.record(token.span, error::UnexpectedToken { found: token.kind })
            },
        }
    }

    /// Resolves an identifier: the bound variable, a constant, or a one-argument function.
    fn name(&mut self, token: Token<'source>) -> f64 {
        match token.lexeme {
            "x" => return self.x,
            "pi" => return std::f64::consts::PI,
            "e" => return std::f64::consts::E,
            _ => {},
        }

        if self.peek() == Some(TokenKind::OpenParen) {
            let open_span = self.span();
            self.cursor += 1;
            let arg = self.expr();
            self.close_paren(open_span);

            match token.lexeme {
                "sin" => arg.sin(),
                "cos" => arg.cos(),
                "tan" => arg.tan(),
                // sqrt is applied to the magnitude of its argument
                "sqrt" => arg.abs().sqrt(),
                "abs" => arg.abs(),
                // both spellings are the natural logarithm
                "log" | "ln" => arg.ln(),
                name => self.record(token.span, error::UnknownSymbol { name: name.to_string() }),
            }
        } else {
            let name = token.lexeme.to_string();
            self.record(token.span, error::UnknownSymbol { name })
        }
    }

    /// Consumes a closing parenthesis if one is present; a missing one is tolerated.
    fn close_paren(&mut self, open_span: Range<usize>) {
        if self.peek() == Some(TokenKind::CloseParen) {
            self.cursor += 1;
        } else {
            self.record(open_span, error::UnclosedParenthesis);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn multiplication_before_addition() {
        for x in [-7.0, 0.0, 3.5] {
            assert_eq!(evaluate("2+3*4", x), 14.0);
        }
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(evaluate("(2+3)*4", 0.0), 20.0);
    }

    #[test]
    fn squaring_is_even() {
        assert_eq!(evaluate("x^2", 3.0), 9.0);
        assert_eq!(evaluate("x^2", -3.0), 9.0);
    }

    #[test]
    fn division_by_zero_passes_dividend_through() {
        assert_eq!(evaluate("1/0", 0.0), 1.0);
        assert_eq!(evaluate("5/0", 123.0), 5.0);
        assert_eq!(evaluate("x/(x-1)", 1.0), 1.0);
    }

    #[test]
    fn sqrt_of_magnitude() {
        assert_eq!(evaluate("sqrt(-4)", 0.0), 2.0);
        assert_eq!(evaluate("sqrt(9)", 0.0), 3.0);
    }

    #[test]
    fn power_chain_is_left_associative() {
        // (2^3)^2, not 2^(3^2)
        assert_eq!(evaluate("2^3^2", 0.0), 64.0);
    }

    #[test]
    fn unary_minus_binds_tighter_than_power() {
        // -x^2 parses as (-x)^2
        assert_eq!(evaluate("-x^2", 2.0), 4.0);
        assert_eq!(evaluate("-(3)", 0.0), -3.0);
    }

    #[test]
    fn constants() {
        assert_eq!(evaluate("pi", 0.0), std::f64::consts::PI);
        assert_eq!(evaluate("2*e", 0.0), 2.0 * std::f64::consts::E);
    }

    #[test]
    fn functions() {
        assert_eq!(evaluate("cos(0)", 0.0), 1.0);
        assert_eq!(evaluate("abs(0-3.5)", 0.0), 3.5);
        assert!(evaluate("sin(pi)", 0.0).abs() < 1e-12);
        assert!((evaluate("tan(pi/4)", 0.0) - 1.0).abs() < 1e-12);
        assert!((evaluate("log(e^2)", 0.0) - 2.0).abs() < 1e-12);
        assert!((evaluate("ln(e^2)", 0.0) - 2.0).abs() < 1e-12);
    }

    #[test]
    fn whitespace_is_stripped() {
        assert_eq!(evaluate(" 2 +  3 ", 0.0), 5.0);
        assert_eq!(evaluate("x ^ 2", 4.0), 16.0);
    }

    #[test]
    fn out_of_domain_math_is_not_a_fault() {
        assert!(evaluate("log(0-1)", 0.0).is_nan());
        assert!(evaluate("log(0)", 0.0).is_infinite());
        assert_eq!(evaluate_strict("log(0)", 0.0).map(f64::is_infinite), Ok(true));
    }

    #[test]
    fn malformed_input_degrades_to_zero() {
        assert_eq!(evaluate("", 0.0), 0.0);
        assert_eq!(evaluate("2+", 0.0), 2.0);
        assert_eq!(evaluate("2+nonsense", 0.0), 2.0);
        assert_eq!(evaluate("2+*3", 0.0), 2.0);
        assert_eq!(evaluate("@#$", 0.0), 0.0);
        assert_eq!(evaluate("sin(x", std::f64::consts::FRAC_PI_2), 1.0);
        assert_eq!(evaluate("((((", 0.0), 0.0);
    }

    #[test]
    fn unknown_function_consumes_its_argument() {
        // the argument is parsed and discarded, so the rest still evaluates
        assert_eq!(evaluate("1+frob(2*3)", 0.0), 1.0);
    }

    #[test]
    fn strict_accepts_valid_input() {
        assert_eq!(evaluate_strict("2+3*4", 0.0).unwrap(), 14.0);
        assert!((evaluate_strict("sin(x)^2 + cos(x)^2", 0.3).unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn strict_reports_offset_of_first_fault() {
        assert_eq!(evaluate_strict("2+@", 0.0).unwrap_err().span, 2..3);
        assert_eq!(evaluate_strict("2+foo", 0.0).unwrap_err().span, 2..5);
        assert_eq!(evaluate_strict("(1+2", 0.0).unwrap_err().span, 0..1);
        assert_eq!(evaluate_strict("1 2", 0.0).unwrap_err().span, 2..3);
        assert_eq!(evaluate_strict("", 0.0).unwrap_err().span, 0..0);
    }

    #[test]
    fn strict_value_matches_fail_soft_value() {
        for source in ["2+@", "2+foo", "(1+2", "1 2", "sin(", "-"] {
            let (value, fault) = Evaluator::new(source, 1.5).finish();
            assert!(fault.is_some(), "{source:?} should fault");
            assert_eq!(value, evaluate(source, 1.5));
        }
    }
}
