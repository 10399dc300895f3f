use thiserror::Error;

/// Tolerance used for every approximate comparison and for nudging hit points off a surface.
pub const EPSILON: f64 = 0.00001;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum MathError {
    #[error("cannot normalize a vector of zero length")]
    ZeroLengthVector,
    #[error("matrix is not invertible (determinant {determinant})")]
    SingularMatrix { determinant: f64 },
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self) -> bool {
        approx_eq(*self, *other)
    }
}

pub fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_approx_eq_threshold() {
        assert!(approx_eq(1.0, 1.000001));
        assert!(!approx_eq(1.0, 1.0001));
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.123456789, 5), 0.12346);
        assert_eq!(round_to(-2.0000001, 5), -2.0);
    }
}
