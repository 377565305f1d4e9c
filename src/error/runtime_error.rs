use crate::error::{ErrorKind, MathError};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Represents all errors that can occur while reducing a postfix queue.
pub enum RuntimeError {
    /// A function found no value on the evaluation stack.
    #[error("Not enough arguments for function '{function}'.")]
    NotEnoughArguments {
        /// The name of the function.
        function: &'static str,
    },
    /// A binary operator found fewer than two values on the evaluation stack.
    #[error("Not enough operands for operator '{operator}'.")]
    NotEnoughOperands {
        /// The operator symbol.
        operator: char,
    },
    /// The expression produced no value at all, e.g. `()`.
    #[error("Empty expression.")]
    EmptyExpression,
    /// More than one value was left after the reduction, e.g. `(1)(2)`.
    #[error("Expression left {count} values instead of one.")]
    DanglingValues {
        /// How many values were left.
        count: usize,
    },
    /// Attempted division by zero.
    #[error("Division by zero.")]
    DivisionByZero,
    /// A math primitive failed.
    #[error("Error in function '{function}': {source}.")]
    Math {
        /// The name of the function that failed.
        function: &'static str,
        /// What went wrong inside the primitive.
        #[source]
        source:   MathError,
    },
}

impl RuntimeError {
    /// Returns the class this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotEnoughArguments { .. }
            | Self::NotEnoughOperands { .. }
            | Self::EmptyExpression
            | Self::DanglingValues { .. } => ErrorKind::Arity,
            Self::DivisionByZero => ErrorKind::Arithmetic,
            Self::Math { source, .. } => match source {
                MathError::Domain { .. } => ErrorKind::Domain,
                MathError::DivisionByZero
                | MathError::InvalidBracket { .. }
                | MathError::NoConvergence { .. } => ErrorKind::Arithmetic,
            },
        }
    }
}
