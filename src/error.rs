/// Math primitive errors.
///
/// Raised by the functions in [`crate::math`] when an input lies outside the
/// function's domain, when a division by zero occurs inside a primitive, or
/// when an iterative solver fails to converge.
pub mod math_error;
/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression or
/// converting it to postfix order. Parse errors include unknown characters,
/// unknown function names, malformed numbers and unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while reducing a postfix
/// queue: missing operands, leftover values, division by zero and failures
/// reported by the math primitives.
pub mod runtime_error;

pub use math_error::MathError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Broad classification of every error the evaluator can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Unknown token, unknown function, malformed number or mismatched
    /// parentheses.
    Syntax,
    /// An operator or function ran out of operands, or the expression did not
    /// reduce to exactly one value.
    Arity,
    /// A math primitive was called outside its domain.
    Domain,
    /// Division by zero or a primitive that failed to converge.
    Arithmetic,
}

/// Any failure of a single evaluation.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The expression could not be tokenized or converted to postfix order.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix queue could not be reduced to a number.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}

impl Error {
    /// Returns the class this error belongs to.
    ///
    /// # Example
    /// ```
    /// use yardcalc::{error::ErrorKind, evaluate};
    ///
    /// let err = evaluate("asin(2)").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Domain);
    ///
    /// let err = evaluate("(1+2").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::Syntax);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Syntax,
            Self::Runtime(e) => e.kind(),
        }
    }
}
