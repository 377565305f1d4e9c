use crate::{
    error::MathError,
    math::{MathResult, bisect, exp},
};

/// Absolute tolerance for the bisection behind [`ln`].
const LN_TOLERANCE: f64 = 1e-15;
/// Subnormal arguments are multiplied by `2^SUBNORMAL_SHIFT` before solving,
/// which makes every subnormal normal.
const SUBNORMAL_SHIFT: i32 = 54;

/// Computes the natural logarithm by solving `e^y = x` with bisection.
///
/// The root is bracketed by `1 - 1/x <= ln x <= x - 1`, which holds for every
/// positive `x`. Subnormal `x` is scaled into the normal range first and the
/// shift subtracted afterwards.
///
/// # Errors
/// - [`MathError::Domain`] if `x` is not positive.
/// - Errors from [`bisect`] if the search does not settle.
///
/// # Example
/// ```
/// use yardcalc::math::ln;
///
/// assert_eq!(ln(1.0).unwrap(), 0.0);
/// assert!((ln(std::f64::consts::E).unwrap() - 1.0).abs() < 1e-12);
/// assert!(ln(0.0).is_err());
///
/// // Subnormal input.
/// assert!((ln(1e-310).unwrap() - 1e-310_f64.ln()).abs() < 1e-12);
/// ```
pub fn ln(x: f64) -> MathResult<f64> {
    if x.is_nan() || x <= 0.0 {
        return Err(MathError::Domain { value:   x,
                                       details: "ln requires a positive argument", });
    }
    if x == f64::INFINITY {
        return Ok(f64::INFINITY);
    }
    if x < f64::MIN_POSITIVE {
        let shift = f64::from(SUBNORMAL_SHIFT);
        return Ok(ln(x * 2_f64.powi(SUBNORMAL_SHIFT))? - shift * ln(2.0)?);
    }

    let lower = f64::min(0.0, 1.0 - 1.0 / x);
    let upper = f64::max(0.0, x - 1.0);
    bisect(|y| Ok(exp(y) - x), lower, upper, LN_TOLERANCE)
}

/// Computes the logarithm of `x` in the given `base` as `ln x / ln base`.
///
/// # Errors
/// Returns [`MathError::Domain`] if `x` or `base` is not positive, or if
/// `base` is `1`.
///
/// # Example
/// ```
/// use yardcalc::math::log;
///
/// assert!((log(1000.0, 10.0).unwrap() - 3.0).abs() < 1e-12);
/// assert!(log(8.0, 1.0).is_err());
/// ```
pub fn log(x: f64, base: f64) -> MathResult<f64> {
    if base.is_nan() || base <= 0.0 || base == 1.0 {
        return Err(MathError::Domain { value:   base,
                                       details: "log requires a positive base other than 1", });
    }
    Ok(ln(x)? / ln(base)?)
}
