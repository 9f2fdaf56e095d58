//! Scalars the model pipeline computes with.
//!
//! Numerical code written against [`Scalar`] runs on plain `f64` values and
//! on [`num_dual`] dual numbers alike, so one implementation yields both the
//! forward values and their derivatives. Seeding an input of a [`Dual64`]
//! evaluation with a unit tangent gives the partials with respect to it:
//!
//! ```
//! use twine_propeller::support::dual::{Dual64, Scalar};
//!
//! fn area<S: Scalar>(diameter: S) -> S {
//!     diameter * diameter * (std::f64::consts::PI / 4.0)
//! }
//!
//! let a = area(Dual64::new(2.0, 1.0));
//! assert!((a.re - std::f64::consts::PI).abs() < 1e-12);
//! assert!((a.eps - std::f64::consts::PI).abs() < 1e-12);
//! ```
//!
//! Branches in generic code should be decided on the real part, which is the
//! same for both representations.

use num_dual::DualNum;

pub use num_dual::Dual64;

/// A real number the model pipeline can compute with.
///
/// Implemented for every thread-safe `Copy` type that implements [`DualNum<f64>`],
/// including `f64` itself.
pub trait Scalar: DualNum<f64> + Copy + Send + Sync + 'static {
    /// Lifts a plain value into a constant with no derivative.
    #[must_use]
    fn constant(value: f64) -> Self {
        <Self as From<f64>>::from(value)
    }

    /// Returns `self` unless its real part is below `floor`, in which case
    /// the constant `floor` is returned.
    #[must_use]
    fn at_least(self, floor: f64) -> Self {
        if self.re() < floor {
            Self::constant(floor)
        } else {
            self
        }
    }

    /// Returns `self` unless its real part is above `ceiling`, in which case
    /// the constant `ceiling` is returned.
    #[must_use]
    fn at_most(self, ceiling: f64) -> Self {
        if self.re() > ceiling {
            Self::constant(ceiling)
        } else {
            self
        }
    }
}

impl<T: DualNum<f64> + Copy + Send + Sync + 'static> Scalar for T {}
