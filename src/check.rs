//! Finite-difference cross-checks for AD derivatives.
//!
//! Numerical differentiation is deliberately not part of the algebra; it
//! exists only so tests (and callers hardening their own models) can verify
//! that a dual-number derivative agrees with a central difference.

/// Central finite difference of a scalar function at `x`.
///
/// Step size `eps` is typically 1e-7 to 1e-5; too small amplifies rounding,
/// too large truncation error.
pub fn finite_diff<F>(f: F, x: f64, eps: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    (f(x + eps) - f(x - eps)) / (2.0 * eps)
}

/// Compare an AD-computed derivative against a central finite difference,
/// with the difference scaled relative to the larger magnitude.
///
/// # Example
/// ```
/// use dualgrad::{derivative_check, DualNumber};
///
/// let x = DualNumber::variable(3.0);
/// let y = x * x;
/// assert!(derivative_check(|x| x * x, 3.0, y.deriv, 1e-7, 1e-6));
/// ```
pub fn derivative_check<F>(f: F, x: f64, computed: f64, eps: f64, tolerance: f64) -> bool
where
    F: Fn(f64) -> f64,
{
    let numeric = finite_diff(f, x, eps);
    let diff = (computed - numeric).abs();
    let scale = computed.abs().max(numeric.abs()).max(1.0);
    diff / scale < tolerance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dual::DualNumber;

    #[test]
    fn test_finite_diff_quadratic() {
        let d = finite_diff(|x| x * x, 3.0, 1e-7);
        assert!((d - 6.0).abs() < 1e-5);
    }

    #[test]
    fn test_derivative_check_accepts_correct() {
        let x = DualNumber::variable(1.0);
        let y = x.sin() * x.exp();
        assert!(derivative_check(
            |x| x.sin() * x.exp(),
            1.0,
            y.deriv,
            1e-7,
            1e-6
        ));
    }

    #[test]
    fn test_derivative_check_rejects_wrong() {
        assert!(!derivative_check(|x| x * x, 3.0, 5.0, 1e-7, 1e-6));
    }
}
