use std::f64::consts::{FRAC_PI_2, PI};

use yardcalc::{
    error::MathError,
    math::{
        acos, asin, atan, bisect, ceil, cos, deg_to_rad, exp, factorial, floor, gamma, ln, log,
        newton, round, sin, sqrt, tan,
    },
};

fn assert_near(actual: f64, expected: f64, tolerance: f64, what: &str) {
    let scale = expected.abs().max(1.0);
    assert!((actual - expected).abs() <= tolerance * scale,
            "{what}: got {actual}, expected {expected}");
}

fn steps(from: i32, to: i32, divisor: f64) -> impl Iterator<Item = f64> {
    (from..=to).map(move |k| f64::from(k) / divisor)
}

#[test]
fn exp_matches_std() {
    for x in steps(-80, 80, 4.0) {
        assert_near(exp(x), x.exp(), 1e-13, &format!("exp({x})"));
    }
    assert_eq!(exp(1000.0), f64::INFINITY);
    assert_eq!(exp(-1000.0), 0.0);
    assert!(exp(f64::NAN).is_nan());
}

#[test]
fn trig_matches_std() {
    for x in steps(-100, 100, 10.0) {
        assert_near(sin(x).unwrap(), x.sin(), 1e-12, &format!("sin({x})"));
        assert_near(cos(x).unwrap(), x.cos(), 1e-12, &format!("cos({x})"));
    }
    for x in steps(-14, 14, 10.0) {
        assert_near(tan(x).unwrap(), x.tan(), 1e-12, &format!("tan({x})"));
    }
}

#[test]
fn trig_rejects_non_finite_input() {
    assert!(matches!(sin(f64::INFINITY), Err(MathError::Domain { .. })));
    assert!(matches!(cos(f64::NAN), Err(MathError::Domain { .. })));
    assert_eq!(tan(FRAC_PI_2), Err(MathError::DivisionByZero));
}

#[test]
fn degrees_convert_to_radians() {
    assert_eq!(deg_to_rad(180.0), PI);
    assert_near(deg_to_rad(90.0), FRAC_PI_2, 1e-15, "deg_to_rad(90)");
    assert_near(deg_to_rad(-45.0), -PI / 4.0, 1e-15, "deg_to_rad(-45)");
}

#[test]
fn inverse_trig_matches_std() {
    for x in steps(-20, 20, 20.0) {
        assert_near(asin(x).unwrap(), x.asin(), 1e-12, &format!("asin({x})"));
        assert_near(acos(x).unwrap(), x.acos(), 1e-12, &format!("acos({x})"));
    }
    for x in steps(-50, 50, 2.0) {
        assert_near(atan(x).unwrap(), x.atan(), 1e-12, &format!("atan({x})"));
    }
    assert_eq!(atan(f64::NEG_INFINITY).unwrap(), -FRAC_PI_2);
}

#[test]
fn inverse_trig_near_the_ends_of_the_domain() {
    let near_one = [0.9,
                    0.99,
                    0.999_999,
                    0.999_999_999_999_99,
                    0.999_999_999_999_999_9,
                    1.0 - f64::EPSILON,
                    1.0];
    for x in near_one {
        for x in [x, -x] {
            let expected = x.acos();
            assert!((acos(x).unwrap() - expected).abs() <= 1e-14 * expected,
                    "acos({x}): got {}, expected {expected}",
                    acos(x).unwrap());
            assert_near(asin(x).unwrap(), x.asin(), 1e-15, &format!("asin({x})"));
        }
    }

    for x in [1e-300, 1e-20, 5e-324] {
        assert_eq!(asin(x).unwrap(), x, "asin({x})");
        assert_eq!(atan(x).unwrap(), x, "atan({x})");
    }
    for x in [1e8, 1e15, -1e300] {
        assert_near(atan(x).unwrap(), x.atan(), 1e-15, &format!("atan({x})"));
    }
}

#[test]
fn inverse_trig_domain() {
    for x in [1.5, -1.000_001, f64::NAN, f64::INFINITY] {
        assert!(matches!(asin(x), Err(MathError::Domain { .. })), "asin({x})");
        assert!(matches!(acos(x), Err(MathError::Domain { .. })), "acos({x})");
    }
}

#[test]
fn logarithms_match_std() {
    for x in [1e-10, 0.001, 0.5, 1.0, 2.0, 10.0, 12_345.678, 1e100] {
        assert_near(ln(x).unwrap(), x.ln(), 1e-12, &format!("ln({x})"));
    }
    assert_near(log(8.0, 2.0).unwrap(), 3.0, 1e-12, "log2(8)");
    assert_near(log(0.01, 10.0).unwrap(), -2.0, 1e-12, "log10(0.01)");
    assert_eq!(ln(f64::INFINITY).unwrap(), f64::INFINITY);
}

#[test]
fn logarithms_of_subnormals() {
    for x in [1e-310, 1e-320, f64::MIN_POSITIVE / 2.0, 5e-324] {
        assert_near(ln(x).unwrap(), x.ln(), 1e-12, &format!("ln({x:e})"));
        assert_near(log(x, 10.0).unwrap(), x.log10(), 1e-12, &format!("log10({x:e})"));
    }
    assert_near(ln(f64::MIN_POSITIVE).unwrap(), f64::MIN_POSITIVE.ln(), 1e-12, "ln(MIN_POSITIVE)");
}

#[test]
fn logarithm_domain() {
    for x in [0.0, -1.0, f64::NAN] {
        assert!(matches!(ln(x), Err(MathError::Domain { .. })), "ln({x})");
    }
    assert!(matches!(log(10.0, 1.0), Err(MathError::Domain { .. })));
    assert!(matches!(log(10.0, -2.0), Err(MathError::Domain { .. })));
    assert!(matches!(log(-10.0, 10.0), Err(MathError::Domain { .. })));
}

#[test]
fn gamma_and_factorial() {
    assert_near(gamma(5.0).unwrap(), 24.0, 1e-12, "gamma(5)");
    assert_near(gamma(0.5).unwrap(), PI.sqrt(), 1e-12, "gamma(0.5)");
    assert_near(gamma(-0.5).unwrap(), -2.0 * PI.sqrt(), 1e-12, "gamma(-0.5)");
    assert_near(gamma(10.5).unwrap(), 1_133_278.388_948_785_4, 1e-12, "gamma(10.5)");
    assert_eq!(gamma(200.0).unwrap(), f64::INFINITY);

    assert_eq!(factorial(10.0).unwrap(), 3_628_800.0);
    assert!(factorial(170.0).unwrap().is_finite());
    assert_eq!(factorial(171.0).unwrap(), f64::INFINITY);
    assert_near(factorial(-0.5).unwrap(), PI.sqrt(), 1e-12, "(-0.5)!");
}

#[test]
fn gamma_poles_are_domain_errors() {
    for z in [0.0, -1.0, -2.0, -100.0, f64::NAN] {
        assert!(matches!(gamma(z), Err(MathError::Domain { .. })), "gamma({z})");
    }
    assert!(matches!(factorial(-3.0), Err(MathError::Domain { .. })));
}

#[test]
fn sqrt_rejects_negative_input() {
    assert_eq!(sqrt(2.25).unwrap(), 1.5);
    assert_eq!(sqrt(0.0).unwrap(), 0.0);
    assert!(matches!(sqrt(-0.1), Err(MathError::Domain { .. })));
}

#[test]
fn rounding() {
    assert_eq!(floor(-2.0), -2.0);
    assert_eq!(floor(-0.5), -1.0);
    assert_eq!(ceil(3.0), 3.0);
    assert_eq!(ceil(-0.5), -0.0);
    assert_eq!(round(0.5), 0.0);
    assert_eq!(round(1.5), 2.0);
    assert_eq!(round(-2.5), -2.0);
    assert_eq!(round(2.6), 3.0);
}

#[test]
fn solvers_report_failures() {
    assert_eq!(newton(|x| Ok(x * x + 1.0), |x| Ok(2.0 * x), 0.0, 1e-12),
               Err(MathError::DivisionByZero));
    assert!(newton(|x| Ok(x * x + 1.0), |x| Ok(2.0 * x), 0.7, 1e-12).is_err());

    assert!(matches!(bisect(|x| Ok(x - 10.0), 0.0, 1.0, 1e-12),
                     Err(MathError::InvalidBracket { .. })));
    assert_eq!(bisect(|x| Ok(x - 1.0), 1.0, 5.0, 1e-12), Ok(1.0));

    let root = bisect(cos, 1.0, 2.0, 1e-15).unwrap();
    assert_near(root, FRAC_PI_2, 1e-14, "bisect(cos)");
}
