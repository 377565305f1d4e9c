//! Closed-form and iterative numeric primitives.
//!
//! Everything here is a pure function of `f64` arguments. Series and solvers
//! are bounded by iteration budgets; inputs outside a function's domain and
//! solvers that fail to settle are reported as [`MathError`]s instead of
//! panicking or silently producing `NaN`.

use crate::error::MathError;

/// Lanczos gamma function and the factorial built on it.
pub mod gamma;
/// Inverse trigonometric functions, solved with Newton's method.
pub mod inverse;
/// Natural and arbitrary-base logarithms, solved by bisection.
pub mod log;
/// Square and cube roots.
pub mod root;
/// `floor`, `ceil` and `round`.
pub mod rounding;
/// Taylor series for `exp`, `sin`, `cos` and `tan`.
pub mod series;
/// Generic root finders: Newton-Raphson and bisection.
pub mod solve;

pub use gamma::{factorial, gamma};
pub use inverse::{acos, asin, atan};
pub use log::{ln, log};
pub use root::{cbrt, sqrt};
pub use rounding::{ceil, floor, round};
pub use series::{cos, exp, sin, tan};
pub use solve::{bisect, newton};

/// Result type returned by every fallible primitive.
pub type MathResult<T> = Result<T, MathError>;

/// Degrees in a straight angle.
pub const STRAIGHT_ANGLE_DEG: f64 = 180.0;

/// Converts an angle in degrees to radians.
///
/// # Example
/// ```
/// use yardcalc::math::deg_to_rad;
///
/// assert_eq!(deg_to_rad(180.0), std::f64::consts::PI);
/// assert_eq!(deg_to_rad(0.0), 0.0);
/// ```
#[must_use]
pub fn deg_to_rad(degrees: f64) -> f64 {
    (std::f64::consts::PI / STRAIGHT_ANGLE_DEG) * degrees
}
