//! Numeric bounds checked once at construction.
//!
//! A [`Constrained<T, C>`] holds a value that satisfied the marker `C` when it
//! was built, so code receiving one never checks the bound again. The
//! propeller model validates its inputs with these markers:
//!
//! - [`StrictlyPositive`]: diameters, tip speeds, density and temperature
//! - [`NonNegative`]: airspeed, shaft power, Mach number and nacelle diameter
//! - [`UnitIntervalUpperOpen`]: loss factors in `[0, 1)`
//!
//! Each marker also has a `new()` shortcut, e.g. `StrictlyPositive::new(10.5)`.
//! Other bounds can be added by implementing [`Constraint<T>`] for a new
//! zero-sized marker.

mod non_negative;
mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use non_negative::NonNegative;
pub use strictly_positive::StrictlyPositive;
pub use unit_interval::UnitIntervalUpperOpen;

/// A bound that values are checked against.
pub trait Constraint<T> {
    /// Checks that `value` satisfies this bound.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] naming the violated side.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// A violated bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A value known to satisfy constraint `C`.
///
/// ```
/// use twine_propeller::support::constraint::{Constrained, StrictlyPositive};
///
/// let diameter = Constrained::<f64, StrictlyPositive>::new(10.5).unwrap();
/// assert_eq!(diameter.into_inner(), 10.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Checks `value` against `C`.
    ///
    /// # Errors
    ///
    /// Returns the error reported by `C`.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Returns the checked value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

impl<T, C: Constraint<T>> AsRef<T> for Constrained<T, C> {
    fn as_ref(&self) -> &T {
        &self.value
    }
}
