//! Elementary function library and the exponentiation family.
//!
//! Every function takes a dual (a, a') and returns (f(a), f'(a)·a') by the
//! chain rule, delegating the plain-scalar evaluation of f and f' to the
//! `f64` primitives. Domain violations are reported before anything is
//! computed; no function returns NaN or infinity for a guarded input.

use std::f64::consts::FRAC_PI_2;

use crate::dual::{AdError, AdResult, DualNumber};

/// Reciprocal for a denominator that is provably nonzero.
///
/// Used by the compositional hyperbolics, whose denominators are sums of
/// exponentials bounded below by 1.
#[inline]
fn recip_unchecked(d: DualNumber) -> DualNumber {
    DualNumber::new(1.0 / d.value, -d.deriv / (d.value * d.value))
}

impl DualNumber {
    /// Sine: d/dx[sin f] = cos(f)·f'.
    #[inline]
    pub fn sin(&self) -> DualNumber {
        DualNumber::new(self.value.sin(), self.value.cos() * self.deriv)
    }

    /// Cosine: d/dx[cos f] = -sin(f)·f'.
    #[inline]
    pub fn cos(&self) -> DualNumber {
        DualNumber::new(self.value.cos(), -self.value.sin() * self.deriv)
    }

    /// Tangent: d/dx[tan f] = f'/cos²(f).
    ///
    /// Fails with [`AdError::SingularityError`] at odd multiples of π/2,
    /// detected by the residue of the value modulo π/2.
    #[inline]
    pub fn tan(&self) -> AdResult<DualNumber> {
        if self.value % FRAC_PI_2 == 0.0 {
            let quotient = (self.value / FRAC_PI_2).round() as i64;
            if quotient % 2 != 0 {
                return Err(AdError::SingularityError {
                    op: "tan",
                    at: self.value,
                });
            }
        }
        let cos_val = self.value.cos();
        Ok(DualNumber::new(
            self.value.tan(),
            self.deriv / (cos_val * cos_val),
        ))
    }

    /// Exponential: d/dx[e^f] = e^f·f' (the computed value is reused).
    #[inline]
    pub fn exp(&self) -> DualNumber {
        let exp_val = self.value.exp();
        DualNumber::new(exp_val, exp_val * self.deriv)
    }

    /// Natural logarithm: d/dx[ln f] = f'/f.
    #[inline]
    pub fn ln(&self) -> AdResult<DualNumber> {
        if self.value <= 0.0 {
            return Err(AdError::DomainError {
                op: "log",
                value: self.value,
            });
        }
        Ok(DualNumber::new(self.value.ln(), self.deriv / self.value))
    }

    /// Logarithm with arbitrary base: d/dx[log_b f] = f'/(ln(b)·f).
    #[inline]
    pub fn log(&self, base: f64) -> AdResult<DualNumber> {
        if base <= 0.0 || base == 1.0 {
            return Err(AdError::DomainError {
                op: "log base",
                value: base,
            });
        }
        if self.value <= 0.0 {
            return Err(AdError::DomainError {
                op: "log",
                value: self.value,
            });
        }
        Ok(DualNumber::new(
            self.value.log(base),
            self.deriv / (base.ln() * self.value),
        ))
    }

    /// Base-10 logarithm, delegating to [`DualNumber::log`].
    #[inline]
    pub fn log10(&self) -> AdResult<DualNumber> {
        self.log(10.0)
    }

    /// Square root: d/dx[√f] = f'/(2√f).
    #[inline]
    pub fn sqrt(&self) -> AdResult<DualNumber> {
        if self.value <= 0.0 {
            return Err(AdError::DomainError {
                op: "sqrt",
                value: self.value,
            });
        }
        let sqrt_val = self.value.sqrt();
        Ok(DualNumber::new(sqrt_val, self.deriv / (2.0 * sqrt_val)))
    }

    /// Absolute value: d/dx[|f|] = sign(f)·f'.
    ///
    /// Fails at zero, where the sign term is undefined.
    #[inline]
    pub fn abs(&self) -> AdResult<DualNumber> {
        if self.value == 0.0 {
            return Err(AdError::DomainError {
                op: "abs",
                value: self.value,
            });
        }
        Ok(DualNumber::new(
            self.value.abs(),
            self.value.signum() * self.deriv,
        ))
    }

    /// Hyperbolic sine, composed as (e^x - e^-x)/2.
    ///
    /// The hyperbolics are built from [`DualNumber::exp`] and the scalar
    /// algebra rather than differentiated independently, so their
    /// derivatives stay consistent with the exponential's automatically.
    #[inline]
    pub fn sinh(&self) -> DualNumber {
        (self.exp() - (-*self).exp()) * 0.5
    }

    /// Hyperbolic cosine, composed as (e^x + e^-x)/2.
    #[inline]
    pub fn cosh(&self) -> DualNumber {
        (self.exp() + (-*self).exp()) * 0.5
    }

    /// Hyperbolic tangent, composed as (e^2x - 1)/(e^2x + 1).
    #[inline]
    pub fn tanh(&self) -> DualNumber {
        let exp_2x = (*self * 2.0).exp();
        // denominator >= 1, the zero guard cannot fire
        (exp_2x - 1.0) * recip_unchecked(exp_2x + 1.0)
    }

    // --- Exponentiation family ---
    //
    // Three distinct cases depending on which operand carries a derivative.
    // The dual-base cases with a dual or fractional exponent restrict the
    // base to be non-negative; fractional powers of negative bases would
    // leave the reals.

    /// Plain base raised to a dual exponent.
    ///
    /// d/dt[x^y(t)] = y'·ln(x)·x^y. Requires `base >= 0`; at `base == 0`
    /// the derivative is taken as zero by convention.
    #[inline]
    pub fn scalar_pow(base: f64, exponent: &DualNumber) -> AdResult<DualNumber> {
        if base < 0.0 {
            return Err(AdError::DomainError {
                op: "pow",
                value: base,
            });
        }
        let value = base.powf(exponent.value);
        if base == 0.0 {
            return Ok(DualNumber::new(value, 0.0));
        }
        Ok(DualNumber::new(value, exponent.deriv * base.ln() * value))
    }

    /// Dual base raised to a plain exponent (power rule).
    ///
    /// d/dt[f(t)^n] = n·f^(n-1)·f'. A zero exponent yields the exact
    /// multiplicative identity.
    #[inline]
    pub fn powf(&self, exponent: f64) -> DualNumber {
        if exponent == 0.0 {
            return DualNumber::one();
        }
        DualNumber::new(
            self.value.powf(exponent),
            self.deriv * exponent * self.value.powf(exponent - 1.0),
        )
    }

    /// Dual base raised to a dual exponent.
    ///
    /// Full chain rule for a(t)^b(t):
    /// d/dt = a^b·(ln(a)·b' + (b/a)·a'). Requires `a >= 0`; at `a == 0`
    /// the derivative is taken as zero by convention.
    #[inline]
    pub fn pow(&self, exponent: &DualNumber) -> AdResult<DualNumber> {
        if self.value < 0.0 {
            return Err(AdError::DomainError {
                op: "pow",
                value: self.value,
            });
        }
        let value = self.value.powf(exponent.value);
        if self.value == 0.0 {
            return Ok(DualNumber::new(value, 0.0));
        }
        Ok(DualNumber::new(
            value,
            value
                * (self.value.ln() * exponent.deriv
                    + (exponent.value / self.value) * self.deriv),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::E;

    const EPSILON: f64 = 1e-10;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON || (a - b).abs() / a.abs().max(b.abs()).max(1.0) < EPSILON
    }

    #[test]
    fn test_sin_cos_chain_rule() {
        let x = DualNumber::seeded(1.2, 0.7);
        let s = x.sin();
        assert!(approx_eq(s.value, 1.2_f64.sin()));
        assert!(approx_eq(s.deriv, 1.2_f64.cos() * 0.7));
        let c = x.cos();
        assert!(approx_eq(c.value, 1.2_f64.cos()));
        assert!(approx_eq(c.deriv, -1.2_f64.sin() * 0.7));
    }

    #[test]
    fn test_tan() {
        let x = DualNumber::variable(0.5);
        let t = x.tan().unwrap();
        assert!(approx_eq(t.value, 0.5_f64.tan()));
        let sec2 = 1.0 / (0.5_f64.cos() * 0.5_f64.cos());
        assert!(approx_eq(t.deriv, sec2));
    }

    #[test]
    fn test_tan_singularity() {
        let x = DualNumber::variable(FRAC_PI_2);
        assert_eq!(
            x.tan(),
            Err(AdError::SingularityError {
                op: "tan",
                at: FRAC_PI_2
            })
        );
        // 3·π/2 is also singular, π (even quotient) is not
        let three_halves = DualNumber::variable(3.0 * FRAC_PI_2);
        assert!(three_halves.tan().is_err());
        let pi = DualNumber::variable(2.0 * FRAC_PI_2);
        assert!(pi.tan().is_ok());
    }

    #[test]
    fn test_exp_reuses_value() {
        let x = DualNumber::variable(2.0);
        let e = x.exp();
        assert!(approx_eq(e.value, 2.0_f64.exp()));
        assert!(approx_eq(e.deriv, e.value));
    }

    #[test]
    fn test_ln() {
        let x = DualNumber::variable(E);
        let l = x.ln().unwrap();
        assert!(approx_eq(l.value, 1.0));
        assert!(approx_eq(l.deriv, 1.0 / E));
    }

    #[test]
    fn test_ln_domain() {
        assert!(DualNumber::variable(0.0).ln().is_err());
        assert!(DualNumber::variable(-1.0).ln().is_err());
    }

    #[test]
    fn test_log_base() {
        let x = DualNumber::variable(8.0);
        let l = x.log(2.0).unwrap();
        assert!(approx_eq(l.value, 3.0));
        assert!(approx_eq(l.deriv, 1.0 / (2.0_f64.ln() * 8.0)));
        assert!(x.log(1.0).is_err());
        assert!(x.log(-2.0).is_err());
    }

    #[test]
    fn test_log10_delegates() {
        let x = DualNumber::variable(100.0);
        assert_eq!(x.log10().unwrap(), x.log(10.0).unwrap());
        assert!(approx_eq(x.log10().unwrap().value, 2.0));
    }

    #[test]
    fn test_sqrt() {
        let x = DualNumber::variable(4.0);
        let r = x.sqrt().unwrap();
        assert!(approx_eq(r.value, 2.0));
        assert!(approx_eq(r.deriv, 0.25));
        assert!(DualNumber::variable(0.0).sqrt().is_err());
        assert!(DualNumber::variable(-4.0).sqrt().is_err());
    }

    #[test]
    fn test_abs() {
        let x = DualNumber::seeded(-3.0, 2.0);
        let a = x.abs().unwrap();
        assert_eq!(a.value, 3.0);
        assert_eq!(a.deriv, -2.0);
        assert!(DualNumber::variable(0.0).abs().is_err());
    }

    #[test]
    fn test_hyperbolics_match_primitives() {
        for &v in &[-1.5, -0.3, 0.0, 0.7, 2.0] {
            let x = DualNumber::variable(v);
            assert!(approx_eq(x.sinh().value, v.sinh()));
            assert!(approx_eq(x.sinh().deriv, v.cosh()));
            assert!(approx_eq(x.cosh().value, v.cosh()));
            assert!(approx_eq(x.cosh().deriv, v.sinh()));
            assert!(approx_eq(x.tanh().value, v.tanh()));
            let sech2 = 1.0 - v.tanh() * v.tanh();
            assert!(approx_eq(x.tanh().deriv, sech2));
        }
    }

    #[test]
    fn test_tanh_consistent_with_sinh_cosh() {
        let x = DualNumber::variable(0.9);
        let ratio = x.sinh().div(&x.cosh()).unwrap();
        let t = x.tanh();
        assert!(approx_eq(t.value, ratio.value));
        assert!(approx_eq(t.deriv, ratio.deriv));
    }

    #[test]
    fn test_scalar_pow() {
        // d/dt 2^t = ln(2)·2^t
        let t = DualNumber::variable(3.0);
        let p = DualNumber::scalar_pow(2.0, &t).unwrap();
        assert!(approx_eq(p.value, 8.0));
        assert!(approx_eq(p.deriv, 2.0_f64.ln() * 8.0));
    }

    #[test]
    fn test_scalar_pow_zero_base() {
        let t = DualNumber::variable(2.0);
        let p = DualNumber::scalar_pow(0.0, &t).unwrap();
        assert_eq!(p.value, 0.0);
        assert_eq!(p.deriv, 0.0);
    }

    #[test]
    fn test_scalar_pow_negative_base() {
        let t = DualNumber::variable(2.0);
        assert!(matches!(
            DualNumber::scalar_pow(-2.0, &t),
            Err(AdError::DomainError { op: "pow", .. })
        ));
    }

    #[test]
    fn test_powf_matches_repeated_multiplication() {
        let x = DualNumber::variable(3.0);
        let p = x.powf(2.0);
        let m = x * x;
        assert!(approx_eq(p.value, 9.0));
        assert!(approx_eq(p.deriv, 6.0));
        assert!(approx_eq(p.value, m.value));
        assert!(approx_eq(p.deriv, m.deriv));
    }

    #[test]
    fn test_powf_zero_exponent() {
        let x = DualNumber::variable(3.0);
        assert_eq!(x.powf(0.0), DualNumber::one());
    }

    #[test]
    fn test_pow_dual_dual() {
        // f(t) = t^t at t = 2: value 4, derivative 4·(ln 2 + 1)
        let t = DualNumber::variable(2.0);
        let p = t.pow(&t).unwrap();
        assert!(approx_eq(p.value, 4.0));
        assert!(approx_eq(p.deriv, 4.0 * (2.0_f64.ln() + 1.0)));
    }

    #[test]
    fn test_pow_dual_dual_guards() {
        let neg = DualNumber::variable(-2.0);
        let half = DualNumber::constant(0.5);
        assert!(matches!(
            neg.pow(&half),
            Err(AdError::DomainError { op: "pow", .. })
        ));
        let zero = DualNumber::variable(0.0);
        let p = zero.pow(&DualNumber::constant(2.0)).unwrap();
        assert_eq!(p.value, 0.0);
        assert_eq!(p.deriv, 0.0);
    }

    #[test]
    fn test_pow_consistent_with_scalar_cases() {
        let a = DualNumber::new(2.5, 1.3);
        let b = DualNumber::new(1.7, -0.6);
        let full = a.pow(&b).unwrap();
        // constant exponent collapses to the power rule
        let const_exp = a.pow(&DualNumber::constant(1.7)).unwrap();
        let powf = a.powf(1.7);
        assert!(approx_eq(const_exp.value, powf.value));
        assert!(approx_eq(const_exp.deriv, powf.deriv));
        // constant base collapses to the scalar-base case
        let const_base = DualNumber::constant(2.5).pow(&b).unwrap();
        let scalar_base = DualNumber::scalar_pow(2.5, &b).unwrap();
        assert!(approx_eq(const_base.value, scalar_base.value));
        assert!(approx_eq(const_base.deriv, scalar_base.deriv));
        assert!(full.is_finite());
    }

    #[test]
    fn test_chain_rule_composition() {
        // f(x) = sin(x²) → f'(x) = cos(x²)·2x
        let x = DualNumber::variable(1.0);
        let result = (x * x).sin();
        assert!(approx_eq(result.value, 1.0_f64.sin()));
        assert!(approx_eq(result.deriv, 1.0_f64.cos() * 2.0));
    }
}
