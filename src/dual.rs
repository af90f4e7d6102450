//! Core dual number type and scalar algebra.
//!
//! A dual number (a, a') carries a value together with its derivative with
//! respect to a single seeded variable. Every operation constructs a new
//! dual whose derivative component follows the chain rule, so derivatives
//! propagate exactly through arbitrary compositions.

use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul, Neg, Sub};

/// Errors raised by dual-number operations.
///
/// All of these are precondition violations detected before any computation
/// runs; the library never returns NaN or infinity in their place.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AdError {
    /// Division where the denominator's value component is zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Input outside the differentiable domain of an operation.
    #[error("domain error in {op}: not defined at {value}")]
    DomainError { op: &'static str, value: f64 },

    /// Operation evaluated at a singular point (e.g. tan at π/2).
    #[error("{op} is not differentiable at {at}")]
    SingularityError { op: &'static str, at: f64 },

    /// Operation the library deliberately does not provide.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Array operands of disagreeing length.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },
}

pub type AdResult<T> = Result<T, AdError>;

/// A dual number for forward-mode automatic differentiation.
///
/// Holds the function value and the accumulated derivative with respect to
/// the single tracked independent variable. Dual numbers are immutable
/// `Copy` values; no operation mutates its operands.
///
/// # Examples
/// ```
/// use dualgrad::DualNumber;
///
/// let x = DualNumber::variable(3.0); // seed d/dx = 1
/// let y = x * x;                     // x² at x = 3
/// assert_eq!(y.value, 9.0);
/// assert_eq!(y.deriv, 6.0);          // d/dx x² = 2x
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DualNumber {
    /// The function value f(x).
    pub value: f64,
    /// The derivative f'(x) with respect to the seeded variable.
    pub deriv: f64,
}

impl DualNumber {
    /// Create a dual number with explicit value and derivative.
    #[inline]
    pub fn new(value: f64, deriv: f64) -> Self {
        Self { value, deriv }
    }

    /// Lift a plain scalar to a dual constant (derivative = 0).
    #[inline]
    pub fn constant(value: f64) -> Self {
        Self::new(value, 0.0)
    }

    /// Create an independent variable (derivative = 1).
    #[inline]
    pub fn variable(value: f64) -> Self {
        Self::new(value, 1.0)
    }

    /// Create a variable with a custom seed (directional derivative).
    #[inline]
    pub fn seeded(value: f64, seed: f64) -> Self {
        Self::new(value, seed)
    }

    /// The additive identity (0, 0).
    ///
    /// Exposed so generic numeric algorithms (summation, matrix code) can
    /// start a fold from it.
    #[inline]
    pub fn zero() -> Self {
        Self::new(0.0, 0.0)
    }

    /// The multiplicative identity (1, 0).
    #[inline]
    pub fn one() -> Self {
        Self::new(1.0, 0.0)
    }

    /// The value component.
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// The derivative component.
    #[inline]
    pub fn derivative(&self) -> f64 {
        self.deriv
    }

    /// True when the derivative component is exactly zero.
    #[inline]
    pub fn is_constant(&self) -> bool {
        self.deriv == 0.0
    }

    /// True when either component is NaN.
    #[inline]
    pub fn is_nan(&self) -> bool {
        self.value.is_nan() || self.deriv.is_nan()
    }

    /// True when both components are finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.value.is_finite() && self.deriv.is_finite()
    }

    /// Dual reciprocal: d/dx[1/f] = -f'/f².
    #[inline]
    pub fn recip(&self) -> AdResult<DualNumber> {
        if self.value == 0.0 {
            return Err(AdError::DivisionByZero);
        }
        Ok(DualNumber::new(
            1.0 / self.value,
            -self.deriv / (self.value * self.value),
        ))
    }

    /// Division by another dual (quotient rule).
    ///
    /// Built as the reciprocal of the denominator followed by the product
    /// rule, so the quotient rule falls out of the existing algebra.
    #[inline]
    pub fn div(&self, other: &DualNumber) -> AdResult<DualNumber> {
        Ok(*self * other.recip()?)
    }

    /// Division of a plain scalar by a dual: s/y = (s/b, -s·b'/b²).
    #[inline]
    pub fn scalar_div(s: f64, other: &DualNumber) -> AdResult<DualNumber> {
        if other.value == 0.0 {
            return Err(AdError::DivisionByZero);
        }
        Ok(DualNumber::new(
            s / other.value,
            -s * other.deriv / (other.value * other.value),
        ))
    }

    /// Division of a dual by a plain scalar: x/s = (a/s, a'/s).
    ///
    /// The zero check is applied here as on every other division path.
    #[inline]
    pub fn div_scalar(&self, s: f64) -> AdResult<DualNumber> {
        if s == 0.0 {
            return Err(AdError::DivisionByZero);
        }
        Ok(DualNumber::new(self.value / s, self.deriv / s))
    }
}

impl Default for DualNumber {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for DualNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.deriv >= 0.0 {
            write!(f, "{} + {}ε", self.value, self.deriv)
        } else {
            write!(f, "{} - {}ε", self.value, -self.deriv)
        }
    }
}

// --- Lifting conversions ---

impl From<f64> for DualNumber {
    fn from(x: f64) -> Self {
        Self::constant(x)
    }
}

impl From<i32> for DualNumber {
    fn from(x: i32) -> Self {
        Self::constant(x as f64)
    }
}

impl From<i64> for DualNumber {
    fn from(x: i64) -> Self {
        Self::constant(x as f64)
    }
}

// --- Dual ⊕ Dual ---

impl Add for DualNumber {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.value + rhs.value, self.deriv + rhs.deriv)
    }
}

impl Sub for DualNumber {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.value - rhs.value, self.deriv - rhs.deriv)
    }
}

impl Mul for DualNumber {
    type Output = Self;
    /// Product rule: (a·b, a·b' + a'·b).
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::new(
            self.value * rhs.value,
            self.value * rhs.deriv + self.deriv * rhs.value,
        )
    }
}

impl Neg for DualNumber {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.value, -self.deriv)
    }
}

// --- Dual ⊕ f64 / f64 ⊕ Dual ---
//
// Defined directly rather than through lifting, but each is numerically
// identical to lifting the scalar to (s, 0) first.

impl Add<f64> for DualNumber {
    type Output = Self;
    #[inline]
    fn add(self, rhs: f64) -> Self {
        Self::new(self.value + rhs, self.deriv)
    }
}

impl Add<DualNumber> for f64 {
    type Output = DualNumber;
    #[inline]
    fn add(self, rhs: DualNumber) -> DualNumber {
        DualNumber::new(self + rhs.value, rhs.deriv)
    }
}

impl Sub<f64> for DualNumber {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: f64) -> Self {
        Self::new(self.value - rhs, self.deriv)
    }
}

impl Sub<DualNumber> for f64 {
    type Output = DualNumber;
    #[inline]
    fn sub(self, rhs: DualNumber) -> DualNumber {
        DualNumber::new(self - rhs.value, -rhs.deriv)
    }
}

impl Mul<f64> for DualNumber {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.value * rhs, self.deriv * rhs)
    }
}

impl Mul<DualNumber> for f64 {
    type Output = DualNumber;
    #[inline]
    fn mul(self, rhs: DualNumber) -> DualNumber {
        DualNumber::new(self * rhs.value, self * rhs.deriv)
    }
}

// --- Generic summation ---

impl Sum for DualNumber {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(DualNumber::zero(), |acc, x| acc + x)
    }
}
