use crate::math::{self, MathResult, deg_to_rad};

/// Applies a trigonometric primitive to an angle given in degrees.
///
/// The generated functions convert the argument to radians before delegating
/// to the primitive of the same name in [`crate::math`].
///
/// # Example
/// ```
/// use yardcalc::interpreter::evaluator::function::builtin::sin;
///
/// assert!((sin(30.0).unwrap() - 0.5).abs() < 1e-12);
/// assert_eq!(sin(0.0).unwrap(), 0.0);
/// ```
macro_rules! degree_builtin {
    ($fname:ident) => {
        pub fn $fname(degrees: f64) -> MathResult<f64> {
            math::$fname(deg_to_rad(degrees))
        }
    };
}

degree_builtin!(sin);
degree_builtin!(cos);
degree_builtin!(tan);

/// Base 10 logarithm.
///
/// # Example
/// ```
/// use yardcalc::interpreter::evaluator::function::builtin::log10;
///
/// assert!((log10(100.0).unwrap() - 2.0).abs() < 1e-12);
/// assert!(log10(-1.0).is_err());
/// ```
pub fn log10(x: f64) -> MathResult<f64> {
    math::log(x, 10.0)
}
