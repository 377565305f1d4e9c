use std::f64::consts::{PI, TAU};

use crate::{
    error::MathError,
    math::{MathResult, exp, sin},
};

/// Arguments above this overflow `Γ` in `f64`.
const MAX_GAMMA_ARG: f64 = 171.624_376_956_302_7;
/// Largest `n` whose factorial `n!` is finite in `f64`.
const MAX_EXACT_FACTORIAL: f64 = 170.0;

/// Computes the gamma function using the Lanczos approximation.
///
/// For `z < 0.5`, the reflection formula is applied:
///
/// `Γ(z) = π / (sin(πz) * Γ(1 − z))`
///
/// For `z ≥ 0.5`, the Lanczos series with `g = 7` and nine coefficients is
/// evaluated directly.
///
/// # Errors
/// Returns [`MathError::Domain`] at the poles (zero and the negative integers)
/// and for `NaN`.
///
/// # Example
/// ```
/// use yardcalc::math::gamma;
///
/// // Γ(5) = 4! = 24
/// let g = gamma(5.0).unwrap();
/// assert!((g - 24.0).abs() < 1e-9);
///
/// // Γ(1/2) = √π
/// let g = gamma(0.5).unwrap();
/// assert!((g - std::f64::consts::PI.sqrt()).abs() < 1e-12);
///
/// assert!(gamma(-2.0).is_err());
/// ```
pub fn gamma(z: f64) -> MathResult<f64> {
    // Lanczos coefficients, g = 7, n = 9.
    const COEFFS: [f64; 9] = [0.999_999_999_999_809_9,
                              676.520_368_121_885_1,
                              -1_259.139_216_722_402_8,
                              771.323_428_777_653_1,
                              -176.615_029_162_140_6,
                              12.507_343_278_686_905,
                              -0.138_571_095_265_720_12,
                              9.984_369_578_019_572e-6,
                              1.505_632_735_149_311_6e-7];
    const G: f64 = 7.0;

    if z.is_nan() || (z <= 0.0 && z.fract() == 0.0) {
        return Err(MathError::Domain { value:   z,
                                       details: "gamma is undefined at zero and the negative integers", });
    }
    if z > MAX_GAMMA_ARG {
        return Ok(f64::INFINITY);
    }

    if z < 0.5 {
        return Ok(PI / (sin(PI * z)? * gamma(1.0 - z)?));
    }

    let z_minus_1 = z - 1.0;
    let mut x = COEFFS[0];
    let mut offset = 1.0;
    for &c in &COEFFS[1..] {
        x += c / (z_minus_1 + offset);
        offset += 1.0;
    }

    let t = z_minus_1 + G + 0.5;
    Ok(TAU.sqrt() * t.powf(z_minus_1 + 0.5) * exp(-t) * x)
}

/// Computes `x!` as `Γ(x + 1)`.
///
/// Non-negative integers are multiplied out exactly; every other argument
/// goes through [`gamma`], so fractional factorials such as `0.5!` are
/// defined.
///
/// # Errors
/// Returns [`MathError::Domain`] for negative integers and `NaN`.
///
/// # Example
/// ```
/// use yardcalc::math::factorial;
///
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert!((factorial(0.5).unwrap() - 0.886_226_925_452_758).abs() < 1e-12);
/// assert!(factorial(-1.0).is_err());
/// ```
pub fn factorial(x: f64) -> MathResult<f64> {
    if x >= 0.0 && x.fract() == 0.0 {
        if x > MAX_EXACT_FACTORIAL {
            return Ok(f64::INFINITY);
        }
        let mut product = 1.0;
        let mut k = 2.0;
        while k <= x {
            product *= k;
            k += 1.0;
        }
        return Ok(product);
    }
    gamma(x + 1.0)
}
