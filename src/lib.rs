//! Forward-mode automatic differentiation with dual numbers.
//!
//! A dual number pairs a value with its derivative with respect to a single
//! seeded variable. Arithmetic and elementary functions on duals propagate
//! the derivative exactly via the chain rule, with no symbolic manipulation
//! and no finite differencing on the evaluation path.
//!
//! ## Layout
//!
//! 1. **Core type and scalar algebra** ([`dual`]): [`DualNumber`], lifting
//!    and seeding constructors, additive/multiplicative identities, operator
//!    overloads for every dual/plain combination, and the fallible division
//!    paths. [`AdError`] is the single error type.
//! 2. **Elementary functions** ([`functions`]): `sin cos tan exp ln log
//!    log10 sqrt abs sinh cosh tanh` and the three-case exponentiation
//!    family, each a chain-rule step over the `f64` primitives. The
//!    hyperbolics are composed from `exp` so their derivatives inherit the
//!    exponential's automatically.
//! 3. **Array layer** ([`array`]): [`DualVector`] and [`DualMatrix`] — a
//!    thin element-wise layer for scaling, transpose, dot, Euclidean norm,
//!    random constant arrays, and value/derivative component extraction.
//! 4. **Verification** ([`check`]): central finite differences for
//!    cross-checking AD results in tests.
//!
//! Everything is pure and synchronous; all values are immutable, so sharing
//! across threads needs no coordination.
//!
//! ## Example
//!
//! ```
//! use dualgrad::DualNumber;
//!
//! // f(x) = cos(2x) + 3x at x = 1
//! let x = DualNumber::variable(1.0);
//! let f = (x * 2.0).cos() + x * 3.0;
//! assert!((f.value - (2.0_f64.cos() + 3.0)).abs() < 1e-12);
//! assert!((f.deriv - (-2.0 * 2.0_f64.sin() + 3.0)).abs() < 1e-12);
//! ```
//!
//! Out of scope by design: multi-variable gradient/Jacobian drivers,
//! higher-order duals, reverse-mode tapes, and complex-valued duals.

pub mod array;
pub mod check;
pub mod dual;
pub mod functions;

pub use array::{DualMatrix, DualVector};
pub use check::{derivative_check, finite_diff};
pub use dual::{AdError, AdResult, DualNumber};

/// Convenience imports for callers.
pub mod prelude {
    pub use crate::array::{DualMatrix, DualVector};
    pub use crate::check::{derivative_check, finite_diff};
    pub use crate::dual::{AdError, AdResult, DualNumber};
}
