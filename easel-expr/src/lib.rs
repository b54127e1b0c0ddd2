//! Fail-soft expression evaluation for easel's function plotting tool.
//!
//! The host hands this crate the raw text the user typed into the function dialog, along with a
//! value for the free variable `x`, and gets a number back, no matter what. [`evaluate`] never
//! panics and never errors: malformed input degrades to `0.0` at the point of failure, so a
//! half-typed expression still produces a plottable curve while the user is editing it.
//!
//! [`evaluate_strict`] runs the exact same traversal but reports the first fault as a typed
//! [`Error`](easel_error::Error) with a character-offset span, for diagnostics and tests.
//!
//! # Example
//!
//! ```
//! assert_eq!(easel_expr::evaluate("2 + 3*4", 0.0), 14.0);
//! assert_eq!(easel_expr::evaluate("x^2", -3.0), 9.0);
//! assert_eq!(easel_expr::evaluate("2 + nonsense", 0.0), 2.0);
//! ```

pub mod eval;
pub mod tokenizer;

pub use eval::{evaluate, evaluate_strict, Evaluator};
