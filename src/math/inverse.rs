use std::f64::consts::{FRAC_PI_2, PI};

use crate::{
    error::MathError,
    math::{MathResult, cos, newton, sin},
};

/// Above this magnitude [`asin`] and [`acos`] switch to the half-angle form,
/// which keeps the Newton search away from the flat top of `sin`.
const HALF_ANGLE_THRESHOLD: f64 = 0.5;

fn check_unit_interval(x: f64, details: &'static str) -> MathResult<()> {
    if x.is_nan() || !(-1.0..=1.0).contains(&x) {
        return Err(MathError::Domain { value: x,
                                       details });
    }
    Ok(())
}

/// Solves `sin y = x` for `0 < x <= 1/2` with Newton's method.
///
/// Starting from `y = x`, which lies below the root, the iterates climb
/// monotonically and the search stops on step size.
fn newton_asin(x: f64) -> MathResult<f64> {
    newton(|y| Ok(sin(y)? - x), cos, x, 0.0)
}

/// Computes the arcsine in radians by solving `sin y = x` with Newton's
/// method.
///
/// Arguments up to `1/2` in magnitude are solved directly. Larger ones use
/// `asin(x) = π/2 - 2·asin(sqrt((1 - x) / 2))`, whose inner argument is at
/// most `1/2`; negative arguments use `asin(-x) = -asin(x)`.
///
/// # Errors
/// - [`MathError::Domain`] if `x` is outside `[-1, 1]`.
/// - Errors from [`newton`] if the search does not settle.
///
/// # Example
/// ```
/// use yardcalc::math::asin;
///
/// assert!((asin(0.5).unwrap() - std::f64::consts::FRAC_PI_6).abs() < 1e-12);
/// assert_eq!(asin(-1.0).unwrap(), -std::f64::consts::FRAC_PI_2);
/// assert!(asin(2.0).is_err());
/// ```
pub fn asin(x: f64) -> MathResult<f64> {
    check_unit_interval(x, "asin requires an argument in [-1, 1]")?;
    if x < 0.0 {
        return asin(-x).map(|y| -y);
    }
    if x == 0.0 {
        return Ok(0.0);
    }
    if x > HALF_ANGLE_THRESHOLD {
        return Ok(FRAC_PI_2 - 2.0 * asin(f64::sqrt((1.0 - x) / 2.0))?);
    }

    newton_asin(x)
}

/// Computes the arccosine in radians.
///
/// Near `±1` it uses `acos(x) = 2·asin(sqrt((1 - x) / 2))` and
/// `acos(x) = π - 2·asin(sqrt((1 + x) / 2))`, so small angles keep their
/// relative accuracy. Elsewhere it is `π/2 - asin(x)`.
///
/// # Errors
/// Returns [`MathError::Domain`] if `x` is outside `[-1, 1]`.
///
/// # Example
/// ```
/// use yardcalc::math::acos;
///
/// assert_eq!(acos(1.0).unwrap(), 0.0);
/// assert!((acos(-1.0).unwrap() - std::f64::consts::PI).abs() < 1e-15);
///
/// let tiny = acos(0.999_999_999_999_999_9).unwrap();
/// assert!((tiny - 0.999_999_999_999_999_9_f64.acos()).abs() < 1e-22);
/// ```
pub fn acos(x: f64) -> MathResult<f64> {
    check_unit_interval(x, "acos requires an argument in [-1, 1]")?;
    if x > HALF_ANGLE_THRESHOLD {
        return Ok(2.0 * asin(f64::sqrt((1.0 - x) / 2.0))?);
    }
    if x < -HALF_ANGLE_THRESHOLD {
        return Ok(PI - 2.0 * asin(f64::sqrt((1.0 + x) / 2.0))?);
    }
    Ok(FRAC_PI_2 - asin(x)?)
}

/// Computes the arctangent in radians as `asin(x / sqrt(x^2 + 1))`.
///
/// Arguments beyond `±1` use `atan(x) = ±π/2 - atan(1/x)`.
///
/// # Errors
/// Returns [`MathError::Domain`] for `NaN`.
///
/// # Example
/// ```
/// use yardcalc::math::atan;
///
/// assert!((atan(1.0).unwrap() - std::f64::consts::FRAC_PI_4).abs() < 1e-12);
/// assert_eq!(atan(f64::INFINITY).unwrap(), std::f64::consts::FRAC_PI_2);
/// ```
pub fn atan(x: f64) -> MathResult<f64> {
    if x.is_nan() {
        return Err(MathError::Domain { value:   x,
                                       details: "atan requires a number", });
    }
    if x.is_infinite() {
        return Ok(FRAC_PI_2.copysign(x));
    }
    if x.abs() > 1.0 {
        return Ok(FRAC_PI_2.copysign(x) - atan(x.recip())?);
    }
    asin(x / x.hypot(1.0))
}
