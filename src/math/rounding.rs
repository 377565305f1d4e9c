/// Largest integer not greater than `x`.
///
/// # Example
/// ```
/// use yardcalc::math::floor;
///
/// assert_eq!(floor(2.7), 2.0);
/// assert_eq!(floor(-2.0), -2.0);
/// assert_eq!(floor(-2.5), -3.0);
/// ```
#[must_use]
pub fn floor(x: f64) -> f64 {
    x.floor()
}

/// Smallest integer not less than `x`.
///
/// # Example
/// ```
/// use yardcalc::math::ceil;
///
/// assert_eq!(ceil(2.1), 3.0);
/// assert_eq!(ceil(2.0), 2.0);
/// assert_eq!(ceil(-2.5), -2.0);
/// ```
#[must_use]
pub fn ceil(x: f64) -> f64 {
    x.ceil()
}

/// Rounds to the nearest integer, sending ties to the even neighbour.
///
/// # Example
/// ```
/// use yardcalc::math::round;
///
/// assert_eq!(round(2.4), 2.0);
/// assert_eq!(round(2.5), 2.0);
/// assert_eq!(round(3.5), 4.0);
/// assert_eq!(round(-0.5), -0.0);
/// ```
#[must_use]
pub fn round(x: f64) -> f64 {
    x.round_ties_even()
}
