use crate::{error::MathError, math::MathResult};

/// Computes the square root.
///
/// # Errors
/// Returns [`MathError::Domain`] for negative arguments; no complex result is
/// produced.
///
/// # Example
/// ```
/// use yardcalc::math::sqrt;
///
/// assert_eq!(sqrt(9.0).unwrap(), 3.0);
/// assert!(sqrt(-4.0).is_err());
/// ```
pub fn sqrt(x: f64) -> MathResult<f64> {
    if x.is_nan() || x < 0.0 {
        return Err(MathError::Domain { value:   x,
                                       details: "sqrt requires a non-negative argument", });
    }
    Ok(x.sqrt())
}

/// Computes the real cube root, which is defined for negative arguments too.
///
/// # Example
/// ```
/// use yardcalc::math::cbrt;
///
/// assert_eq!(cbrt(27.0), 3.0);
/// assert_eq!(cbrt(-8.0), -2.0);
/// ```
#[must_use]
pub fn cbrt(x: f64) -> f64 {
    x.cbrt()
}
