#[derive(Debug, Clone, PartialEq, thiserror::Error)]
/// Represents all errors a math primitive can report.
pub enum MathError {
    /// The argument lies outside the domain of the function.
    #[error("argument {value} is outside the domain: {details}")]
    Domain {
        /// The rejected argument.
        value:   f64,
        /// Which inputs the function accepts.
        details: &'static str,
    },
    /// The primitive had to divide by zero, e.g. `tan` at an odd multiple of
    /// a right angle.
    #[error("division by zero")]
    DivisionByZero,
    /// A bracketing solver was given an interval on which the function does
    /// not change sign.
    #[error("function does not change sign on [{lower}, {upper}]")]
    InvalidBracket {
        /// Lower end of the interval.
        lower: f64,
        /// Upper end of the interval.
        upper: f64,
    },
    /// An iterative method did not reach its tolerance within its iteration
    /// budget.
    #[error("no convergence after {iterations} iterations")]
    NoConvergence {
        /// How many iterations were spent.
        iterations: usize,
    },
}
