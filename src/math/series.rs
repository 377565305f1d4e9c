use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::{error::MathError, math::MathResult};

/// Terms smaller than this (relative to the running sum) end a series.
const SERIES_TOLERANCE: f64 = 1e-15;
/// Largest argument for which `e^x` is finite.
const MAX_EXP_ARG: f64 = 709.782_712_893_384;
/// `|cos x|` below this is treated as zero by [`tan`].
const COS_ZERO_TOLERANCE: f64 = 1e-15;

/// Computes `e^x` from its Taylor series.
///
/// Negative arguments are evaluated as `1 / e^-x` so the alternating series,
/// and its cancellation, never shows up. Arguments beyond the `f64` range
/// saturate to `0` or `inf`; `NaN` propagates.
///
/// # Example
/// ```
/// use yardcalc::math::exp;
///
/// assert!((exp(1.0) - std::f64::consts::E).abs() < 1e-14);
/// assert_eq!(exp(0.0), 1.0);
/// assert_eq!(exp(f64::NEG_INFINITY), 0.0);
/// ```
#[must_use]
pub fn exp(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x < 0.0 {
        return 1.0 / exp(-x);
    }
    if x > MAX_EXP_ARG {
        return f64::INFINITY;
    }

    let mut result = 0.0;
    let mut term = 1.0;
    let mut n = 0.0;
    while term > SERIES_TOLERANCE * f64::max(result, 1.0) {
        result += term;
        n += 1.0;
        term *= x / n;
    }
    result
}

/// Computes the sine of an angle in radians from its Taylor series.
///
/// The argument is first reduced into `[-π, π]`, where the series converges
/// quickly.
///
/// # Errors
/// Returns [`MathError::Domain`] for infinite or `NaN` arguments.
///
/// # Example
/// ```
/// use yardcalc::math::sin;
///
/// assert_eq!(sin(0.0).unwrap(), 0.0);
/// assert!((sin(std::f64::consts::FRAC_PI_6).unwrap() - 0.5).abs() < 1e-14);
/// assert!(sin(f64::INFINITY).is_err());
/// ```
pub fn sin(x: f64) -> MathResult<f64> {
    if !x.is_finite() {
        return Err(MathError::Domain { value:   x,
                                       details: "sin requires a finite argument", });
    }

    let mut x = x % TAU;
    if x > PI {
        x -= TAU;
    } else if x < -PI {
        x += TAU;
    }

    // Sum until a term no longer changes the result.
    let x2 = x * x;
    let mut result = x;
    let mut term = x;
    let mut n = 1.0;
    loop {
        term *= -x2 / ((n + 1.0) * (n + 2.0));
        n += 2.0;
        let next = result + term;
        if next == result {
            return Ok(result);
        }
        result = next;
    }
}

/// Computes the cosine of an angle in radians as `sin(π/2 - x)`.
///
/// # Errors
/// Returns [`MathError::Domain`] for infinite or `NaN` arguments.
///
/// # Example
/// ```
/// use yardcalc::math::cos;
///
/// assert!((cos(0.0).unwrap() - 1.0).abs() < 1e-14);
/// assert_eq!(cos(std::f64::consts::FRAC_PI_2).unwrap(), 0.0);
/// ```
pub fn cos(x: f64) -> MathResult<f64> {
    sin(FRAC_PI_2 - x)
}

/// Computes the tangent of an angle in radians as `sin x / cos x`.
///
/// # Errors
/// - [`MathError::DivisionByZero`] where the cosine vanishes.
/// - [`MathError::Domain`] for infinite or `NaN` arguments.
///
/// # Example
/// ```
/// use yardcalc::{error::MathError, math::tan};
///
/// assert!((tan(std::f64::consts::FRAC_PI_4).unwrap() - 1.0).abs() < 1e-15);
/// assert_eq!(tan(std::f64::consts::FRAC_PI_2), Err(MathError::DivisionByZero));
/// ```
pub fn tan(x: f64) -> MathResult<f64> {
    let cos_x = cos(x)?;
    if f64::abs(cos_x) < COS_ZERO_TOLERANCE {
        return Err(MathError::DivisionByZero);
    }
    Ok(sin(x)? / cos_x)
}
