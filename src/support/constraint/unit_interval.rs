use num_traits::{One, Zero};

use super::{Constrained, Constraint, ConstraintError};

/// Values in `[0, 1)`, such as a fraction of thrust lost to installation.
///
/// ```
/// use twine_propeller::support::constraint::UnitIntervalUpperOpen;
///
/// let loss = UnitIntervalUpperOpen::new(0.05).unwrap();
/// assert_eq!(loss.into_inner(), 0.05);
///
/// assert!(UnitIntervalUpperOpen::new(0.0).is_ok());
/// assert!(UnitIntervalUpperOpen::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalUpperOpen;

impl UnitIntervalUpperOpen {
    /// Builds a [`Constrained<T, UnitIntervalUpperOpen>`].
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::BelowMinimum`] below zero,
    /// [`ConstraintError::AboveMaximum`] at or above one and
    /// [`ConstraintError::NotANumber`] for `NaN`.
    pub fn new<T: PartialOrd + Zero + One>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalUpperOpen>, ConstraintError> {
        Constrained::new(value)
    }
}

impl<T: PartialOrd + Zero + One> Constraint<T> for UnitIntervalUpperOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        if value.partial_cmp(&T::zero()).is_none() {
            Err(ConstraintError::NotANumber)
        } else if *value < T::zero() {
            Err(ConstraintError::BelowMinimum)
        } else if *value >= T::one() {
            Err(ConstraintError::AboveMaximum)
        } else {
            Ok(())
        }
    }
}
