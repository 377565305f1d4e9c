use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        token::Operator,
        value::{Combinator, DeferredTerm, Value},
    },
};

/// Evaluates `left op right` on evaluation-stack values.
///
/// - `+`, `-` and `^` resolve deferred operands and produce a plain number.
/// - `/` produces a [`DeferredTerm`].
/// - `*` of two plain numbers is computed directly. When either operand is
///   deferred, the product is deferred as well and carried forward.
///
/// A deferred operand is resolved before it takes part in a new term, so
/// every result equals left-to-right evaluation of the same queue.
///
/// # Errors
/// Returns [`RuntimeError::DivisionByZero`] if the divisor is zero, whether
/// plain or deferred.
///
/// # Example
/// ```
/// use yardcalc::interpreter::{
///     evaluator::binary::combine,
///     token::Operator,
///     value::Value,
/// };
///
/// let third = combine(Operator::Div, Value::Plain(1.0), Value::Plain(3.0)).unwrap();
/// assert!(matches!(third, Value::Deferred(_)));
///
/// let product = combine(Operator::Mul, third, Value::Plain(3.0)).unwrap();
/// assert!(matches!(product, Value::Deferred(_)));
/// assert_eq!(product.resolve(), 1.0 / 3.0 * 3.0);
///
/// let sum = combine(Operator::Add, third, Value::Plain(1.0)).unwrap();
/// assert_eq!(sum, Value::Plain(1.0 / 3.0 + 1.0));
/// ```
pub fn combine(op: Operator, left: Value, right: Value) -> EvalResult<Value> {
    match op {
        Operator::Add | Operator::Sub | Operator::Pow => {
            Ok(Value::Plain(op.apply(left.resolve(), right.resolve())?))
        },
        Operator::Mul => Ok(multiply(left, right)),
        Operator::Div => divide(left, right),
    }
}

fn multiply(left: Value, right: Value) -> Value {
    match (left, right) {
        (Value::Plain(a), Value::Plain(b)) => Value::Plain(a * b),
        _ => {
            trace!(?left, ?right, "product carried forward as a deferred term");
            DeferredTerm::new(Combinator::Multiply, left.resolve(), right.resolve())
        },
    }
}

fn divide(left: Value, right: Value) -> EvalResult<Value> {
    let divisor = right.resolve();
    if divisor == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(DeferredTerm::new(Combinator::Divide, left.resolve(), divisor))
}
