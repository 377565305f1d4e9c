use crate::{error::MathError, math::MathResult};

/// Iteration budget for [`newton`].
pub const MAX_NEWTON_ITERATIONS: usize = 100;
/// [`newton`] stops once a step moves the iterate by at most this many units
/// of its magnitude.
const NEWTON_STEP_TOLERANCE: f64 = 4.0 * f64::EPSILON;
/// Iteration budget for [`bisect`]. Halving any finite interval down to
/// adjacent floats takes fewer steps than this.
pub const MAX_BISECTIONS: usize = 2_200;

/// Finds a root of `f` with the Newton-Raphson method.
///
/// Iterates `x -= f(x) / f'(x)` from `x0` until `|f(x)| <= tolerance` or
/// the step shrinks to a few units in the last place of `x`. A `tolerance`
/// of zero makes the step size the only stopping rule.
///
/// # Errors
/// - [`MathError::DivisionByZero`] if the derivative vanishes on the way.
/// - [`MathError::NoConvergence`] if the budget runs out or the iterate
///   escapes to infinity.
/// - Any error raised by `f` or `df`.
///
/// # Example
/// ```
/// use yardcalc::math::newton;
///
/// // Root of x^2 - 2.
/// let r = newton(|x| Ok(x * x - 2.0), |x| Ok(2.0 * x), 1.0, 1e-12).unwrap();
/// assert!((r - std::f64::consts::SQRT_2).abs() < 1e-12);
/// ```
pub fn newton<F, D>(f: F, df: D, x0: f64, tolerance: f64) -> MathResult<f64>
    where F: Fn(f64) -> MathResult<f64>,
          D: Fn(f64) -> MathResult<f64>
{
    let mut x = x0;
    for _ in 0..MAX_NEWTON_ITERATIONS {
        let fx = f(x)?;
        if f64::abs(fx) <= tolerance {
            return Ok(x);
        }

        let slope = df(x)?;
        if slope == 0.0 {
            return Err(MathError::DivisionByZero);
        }

        let next = x - fx / slope;
        if !next.is_finite() {
            break;
        }
        if f64::abs(next - x) <= NEWTON_STEP_TOLERANCE * f64::abs(next) {
            return Ok(next);
        }
        x = next;
    }

    Err(MathError::NoConvergence { iterations: MAX_NEWTON_ITERATIONS })
}

/// Finds a root of `f` on `[a, b]` by bisection.
///
/// `f(a)` and `f(b)` must have opposite signs (or one of them be zero). The
/// interval is halved until its half-width drops to `tolerance` or the
/// midpoint can no longer be told apart from an end point.
///
/// # Errors
/// - [`MathError::InvalidBracket`] if `f` has the same sign at both ends.
/// - [`MathError::NoConvergence`] if the budget runs out.
/// - Any error raised by `f`.
///
/// # Example
/// ```
/// use yardcalc::{error::MathError, math::bisect};
///
/// let r = bisect(|x| Ok(x * x - 2.0), 0.0, 2.0, 1e-12).unwrap();
/// assert!((r - std::f64::consts::SQRT_2).abs() < 1e-11);
///
/// let err = bisect(|x| Ok(x * x + 1.0), -1.0, 1.0, 1e-12).unwrap_err();
/// assert!(matches!(err, MathError::InvalidBracket { .. }));
/// ```
pub fn bisect<F>(f: F, a: f64, b: f64, tolerance: f64) -> MathResult<f64>
    where F: Fn(f64) -> MathResult<f64>
{
    let (mut lower, mut upper) = if a <= b { (a, b) } else { (b, a) };

    let mut f_lower = f(lower)?;
    if f_lower == 0.0 {
        return Ok(lower);
    }
    let f_upper = f(upper)?;
    if f_upper == 0.0 {
        return Ok(upper);
    }
    if f_lower.is_sign_negative() == f_upper.is_sign_negative() {
        return Err(MathError::InvalidBracket { lower, upper });
    }

    for _ in 0..MAX_BISECTIONS {
        let mid = lower + (upper - lower) / 2.0;
        if (upper - lower) / 2.0 <= tolerance || mid == lower || mid == upper {
            return Ok(mid);
        }

        let f_mid = f(mid)?;
        if f_mid == 0.0 {
            return Ok(mid);
        }
        if f_lower.is_sign_negative() == f_mid.is_sign_negative() {
            lower = mid;
            f_lower = f_mid;
        } else {
            upper = mid;
        }
    }

    Err(MathError::NoConvergence { iterations: MAX_BISECTIONS })
}
