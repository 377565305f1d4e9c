//! # yardcalc
//!
//! yardcalc evaluates arithmetic expressions written as text. It tokenizes
//! the input, reorders it into postfix order with the Shunting-Yard algorithm
//! and reduces the postfix queue on a stack.
//!
//! Expressions may use numbers, the binary operators `+ - * / ^`,
//! parentheses and the unary functions of a [`FunctionTable`].

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while tokenizing,
/// shunting or reducing an expression, and while running a math primitive.
/// Each error names the token, operator or function at fault.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, reducer, primitives).
/// - Classifies every error as syntax, arity, domain or arithmetic.
/// - Integrates with the standard `Error` trait.
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module ties together lexing, shunting, reduction, value
/// representations and the function table.
///
/// # Responsibilities
/// - Coordinates the lexer, the Shunting-Yard parser and the reducer.
/// - Provides entry points for evaluating expressions or inspecting their
///   postfix form.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Numeric primitives behind the expression functions.
///
/// Series, root finders, logarithms, the gamma function and rounding. These
/// functions know nothing about expressions and can be used on their own.
pub mod math;

pub use error::Error;
pub use interpreter::evaluator::{
    core::Evaluator,
    function::core::{FunctionTable, STANDARD_FUNCTIONS},
};

/// Evaluates an expression with the standard function table.
///
/// This is the usual entry point. Each call is independent: nothing is kept
/// between calls.
///
/// # Errors
/// Returns an error if the expression cannot be tokenized or parsed, if an
/// operator or function runs out of operands, or if an operation fails.
///
/// # Examples
/// ```
/// use yardcalc::evaluate;
///
/// assert_eq!(evaluate("2 + 3 * 4").unwrap(), 14.0);
/// assert_eq!(evaluate("2 ^ 3 ^ 2").unwrap(), 512.0);
/// assert_eq!(evaluate("-(5*6)+(3^2)").unwrap(), -21.0);
///
/// // Unknown function.
/// assert!(evaluate("foo(1)").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64, Error> {
    Evaluator::new(&STANDARD_FUNCTIONS).evaluate(expression)
}
